use crate::compose::{compose_from_cursor, compose_from_match};
use crate::error::LinkError;
use crate::host::{ClipboardSink, DocumentSource, EditorSink, NotificationSink};
use crate::model::MatchResult;
use crate::search::SearchSession;
use crate::settings::{Settings, SettingsStore};

/// Drives both link flows against the host collaborator traits.
///
/// Owns the loaded [`Settings`], read once at construction and persisted
/// on every change; the live template string is threaded explicitly into
/// each composition. Every failure is surfaced through the notifier at
/// the boundary where it is detected and never escapes as a fault.
pub struct LinkController<S: SettingsStore> {
    store: S,
    settings: Settings,
}

impl<S: SettingsStore> LinkController<S> {
    /// Load settings from `store`, merging the stored blob over the
    /// defaults. An unreadable or unparsable blob falls back to the
    /// defaults rather than failing startup.
    pub fn load(store: S) -> Self {
        let settings = match store.load() {
            Ok(Some(blob)) => Settings::from_json(&blob).unwrap_or_else(|e| {
                log::warn!("ignoring malformed settings blob: {}", e);
                Settings::default()
            }),
            Ok(None) => Settings::default(),
            Err(e) => {
                log::warn!("failed to read settings: {}", e);
                Settings::default()
            }
        };
        Self { store, settings }
    }

    pub fn link_format(&self) -> &str {
        &self.settings.link_format
    }

    /// Update the link format and persist immediately.
    pub fn set_link_format(&mut self, format: &str) -> std::io::Result<()> {
        self.settings.link_format = format.to_string();
        let blob = self
            .settings
            .to_json()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        self.store.save(&blob)
    }

    /// Copy flow: resolve the nearest heading above the active document's
    /// cursor, render the link, and hand it to the clipboard.
    ///
    /// A clipboard failure is logged and swallowed; the link text is lost
    /// but nothing else changes. All other failures notify the user and
    /// abort without side effects.
    pub fn copy_heading_link(
        &self,
        source: &dyn DocumentSource,
        clipboard: &dyn ClipboardSink,
        notifier: &dyn NotificationSink,
    ) -> Result<String, LinkError> {
        let Some(doc) = source.active_document() else {
            notifier.notify(&LinkError::NoAssociatedFile.to_string());
            return Err(LinkError::NoAssociatedFile);
        };

        let link = match compose_from_cursor(&doc, self.link_format()) {
            Ok(link) => link,
            Err(e) => {
                notifier.notify(&e.to_string());
                return Err(e);
            }
        };

        if let Err(e) = clipboard.write(&link) {
            log::warn!("clipboard write failed: {}", e);
            return Err(LinkError::ClipboardWriteFailed);
        }
        Ok(link)
    }

    /// Search flow, step 1: open a session over the collection with the
    /// user's selection as the initial query. An empty selection refuses
    /// to start the flow.
    pub fn start_search(
        &self,
        source: &dyn DocumentSource,
        selection: &str,
        notifier: &dyn NotificationSink,
    ) -> Result<SearchSession, LinkError> {
        if selection.is_empty() {
            notifier.notify(&LinkError::EmptySelection.to_string());
            return Err(LinkError::EmptySelection);
        }
        Ok(SearchSession::open(source.list_documents(), selection))
    }

    /// Search flow, step 2: render the link for a selected match and
    /// splice it over the editor selection. On failure the session stays
    /// open and the editor is untouched.
    pub fn insert_link(
        &self,
        result: &MatchResult,
        editor: &mut dyn EditorSink,
        notifier: &dyn NotificationSink,
    ) -> Result<String, LinkError> {
        self.insert_link_fields(
            Some(&result.path),
            Some(&result.heading_text),
            editor,
            notifier,
        )
    }

    /// As [`insert_link`](Self::insert_link), for hosts whose selected
    /// result arrives with optional fields.
    pub fn insert_link_fields(
        &self,
        path: Option<&str>,
        heading_text: Option<&str>,
        editor: &mut dyn EditorSink,
        notifier: &dyn NotificationSink,
    ) -> Result<String, LinkError> {
        match compose_from_match(path, heading_text, self.link_format()) {
            Ok(link) => {
                editor.replace_selection(&link);
                Ok(link)
            }
            Err(e) => {
                notifier.notify(&e.to_string());
                Err(e)
            }
        }
    }
}
