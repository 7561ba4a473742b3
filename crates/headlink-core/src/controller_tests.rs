use std::io;
use std::sync::{Arc, Mutex};

use crate::controller::LinkController;
use crate::error::LinkError;
use crate::host::{ClipboardSink, DocumentSource, EditorSink, NotificationSink};
use crate::model::{ActiveDocument, DocumentContent, MatchResult};
use crate::settings::SettingsStore;

#[derive(Clone)]
struct MemStore {
    blob: Arc<Mutex<Option<String>>>,
}

impl MemStore {
    fn new(blob: Option<&str>) -> Self {
        Self {
            blob: Arc::new(Mutex::new(blob.map(str::to_string))),
        }
    }
}

impl SettingsStore for MemStore {
    fn load(&self) -> io::Result<Option<String>> {
        Ok(self.blob.lock().unwrap().clone())
    }

    fn save(&self, blob: &str) -> io::Result<()> {
        *self.blob.lock().unwrap() = Some(blob.to_string());
        Ok(())
    }
}

struct FixedSource {
    active: Option<ActiveDocument>,
    documents: Vec<DocumentContent>,
}

impl DocumentSource for FixedSource {
    fn active_document(&self) -> Option<ActiveDocument> {
        self.active.clone()
    }

    fn list_documents(&self) -> Vec<DocumentContent> {
        self.documents.clone()
    }
}

#[derive(Default)]
struct RecordingClipboard {
    written: Mutex<Vec<String>>,
    fail: bool,
}

impl ClipboardSink for RecordingClipboard {
    fn write(&self, text: &str) -> io::Result<()> {
        if self.fail {
            return Err(io::Error::new(io::ErrorKind::Other, "clipboard unavailable"));
        }
        self.written.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

#[derive(Default)]
struct RecordingEditor {
    selection: String,
    replaced: Vec<String>,
}

impl EditorSink for RecordingEditor {
    fn selection_text(&self) -> String {
        self.selection.clone()
    }

    fn replace_selection(&mut self, text: &str) {
        self.replaced.push(text.to_string());
    }
}

#[derive(Default)]
struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl NotificationSink for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

fn note_source() -> FixedSource {
    FixedSource {
        active: Some(ActiveDocument {
            path: Some("folder/note.md".to_string()),
            basename: "note".to_string(),
            text: "# Intro\ntext\ncursor-here".to_string(),
            cursor_line: 2,
        }),
        documents: vec![DocumentContent {
            path: "x/y.md".to_string(),
            content: "## Setup Steps".to_string(),
        }],
    }
}

#[test]
fn test_copy_flow_end_to_end() {
    let controller = LinkController::load(MemStore::new(None));
    let clipboard = RecordingClipboard::default();
    let notifier = RecordingNotifier::default();

    let link = controller
        .copy_heading_link(&note_source(), &clipboard, &notifier)
        .unwrap();

    assert_eq!(link, "[[folder/note#Intro|Intro]]");
    assert_eq!(
        clipboard.written.lock().unwrap().as_slice(),
        &["[[folder/note#Intro|Intro]]".to_string()]
    );
    assert!(notifier.messages.lock().unwrap().is_empty());
}

#[test]
fn test_copy_flow_no_heading_notifies_and_skips_clipboard() {
    let controller = LinkController::load(MemStore::new(None));
    let clipboard = RecordingClipboard::default();
    let notifier = RecordingNotifier::default();
    let source = FixedSource {
        active: Some(ActiveDocument {
            path: Some("folder/note.md".to_string()),
            basename: "note".to_string(),
            text: "no headings".to_string(),
            cursor_line: 0,
        }),
        documents: vec![],
    };

    let err = controller.copy_heading_link(&source, &clipboard, &notifier);
    assert_eq!(err, Err(LinkError::NoHeadingFound));
    assert!(clipboard.written.lock().unwrap().is_empty());
    assert_eq!(notifier.messages.lock().unwrap().len(), 1);
}

#[test]
fn test_copy_flow_clipboard_failure_is_swallowed() {
    let controller = LinkController::load(MemStore::new(None));
    let clipboard = RecordingClipboard {
        fail: true,
        ..Default::default()
    };
    let notifier = RecordingNotifier::default();

    let err = controller.copy_heading_link(&note_source(), &clipboard, &notifier);
    assert_eq!(err, Err(LinkError::ClipboardWriteFailed));
    // Logged, not notified.
    assert!(notifier.messages.lock().unwrap().is_empty());
}

#[test]
fn test_search_flow_end_to_end() {
    let controller = LinkController::load(MemStore::new(None));
    let notifier = RecordingNotifier::default();
    let mut editor = RecordingEditor {
        selection: "setup".to_string(),
        ..Default::default()
    };

    let session = controller
        .start_search(&note_source(), &editor.selection_text(), &notifier)
        .unwrap();
    assert_eq!(session.results().len(), 1);

    let selected: MatchResult = session.select(0).unwrap().clone();
    let link = controller
        .insert_link(&selected, &mut editor, &notifier)
        .unwrap();

    assert_eq!(link, "[[x/y#Setup Steps|Setup Steps]]");
    assert_eq!(editor.replaced, vec!["[[x/y#Setup Steps|Setup Steps]]".to_string()]);
}

#[test]
fn test_search_flow_empty_selection_refuses_to_start() {
    let controller = LinkController::load(MemStore::new(None));
    let notifier = RecordingNotifier::default();

    let err = controller.start_search(&note_source(), "", &notifier);
    assert!(matches!(err, Err(LinkError::EmptySelection)));
    assert_eq!(notifier.messages.lock().unwrap().len(), 1);
}

#[test]
fn test_incomplete_match_leaves_editor_untouched() {
    let controller = LinkController::load(MemStore::new(None));
    let notifier = RecordingNotifier::default();
    let mut editor = RecordingEditor::default();

    let err = controller.insert_link_fields(None, Some("Setup Steps"), &mut editor, &notifier);
    assert_eq!(err, Err(LinkError::IncompleteMatchResult));
    assert!(editor.replaced.is_empty());
    assert_eq!(notifier.messages.lock().unwrap().len(), 1);
}

#[test]
fn test_stored_format_overrides_default() {
    let store = MemStore::new(Some(r#"{"linkFormat":"${fileBasename}#${headingText}"}"#));
    let controller = LinkController::load(store);
    assert_eq!(controller.link_format(), "${fileBasename}#${headingText}");
}

#[test]
fn test_malformed_blob_falls_back_to_default() {
    let controller = LinkController::load(MemStore::new(Some("not json")));
    assert_eq!(
        controller.link_format(),
        crate::template::DEFAULT_LINK_FORMAT
    );
}

#[test]
fn test_set_link_format_persists_immediately() {
    let store = MemStore::new(None);
    let mut controller = LinkController::load(store.clone());
    controller.set_link_format("${headingText}").unwrap();
    assert_eq!(controller.link_format(), "${headingText}");

    // A fresh controller over the same store sees the change.
    let reloaded = LinkController::load(store);
    assert_eq!(reloaded.link_format(), "${headingText}");
}
