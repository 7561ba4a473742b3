use std::collections::HashMap;

use super::links::{parse_first_arg, serialize_result};
use crate::conversion::{uri_to_path, vault_relative_path};
use crate::protocol::{
    HeadingMatch, InsertHeadingLinkParams, InsertHeadingLinkResult, SearchHeadingsParams,
    SearchHeadingsResult, StartHeadingSearchParams,
};
use crate::state::GlobalState;
use headlink_core::compose::compose_from_match;
use headlink_core::error::LinkError;
use headlink_core::host::DocumentSource;
use headlink_core::model::{DocumentContent, MatchResult};
use headlink_core::search::SearchSession;
use headlink_core::vfs::{PhysicalFileSystem, VaultSource};
use tower_lsp::jsonrpc::{Error, Result};
use tower_lsp::lsp_types::*;
use tower_lsp::Client;

fn to_matches(results: &[MatchResult]) -> Vec<HeadingMatch> {
    results
        .iter()
        .map(|m| HeadingMatch {
            path: m.path.clone(),
            heading_text: m.heading_text.clone(),
        })
        .collect()
}

/// Snapshot the vault's documents, with open-editor buffers overlaying
/// whatever is on disk.
async fn snapshot_documents(state: &GlobalState) -> Vec<DocumentContent> {
    let root = {
        let root = state.root.read().await;
        root.clone()
    };
    let Some(root) = root else {
        return Vec::new();
    };

    let scan_root = root.clone();
    let mut documents = tokio::task::spawn_blocking(move || {
        VaultSource::new(scan_root, PhysicalFileSystem).list_documents()
    })
    .await
    .unwrap_or_default();

    let cache = state.documents.read().await;
    let mut overlay: HashMap<String, &String> = HashMap::new();
    for (uri, text) in cache.iter() {
        if let Some(path) = uri_to_path(uri) {
            overlay.insert(vault_relative_path(&root, &path), text);
        }
    }

    for doc in &mut documents {
        if let Some(text) = overlay.remove(doc.path.as_str()) {
            doc.content = text.clone();
        }
    }
    // Open buffers not yet on disk still take part in the search.
    for (path, text) in overlay {
        if path.ends_with(".md") {
            documents.push(DocumentContent {
                path,
                content: text.clone(),
            });
        }
    }

    documents
}

/// Handle the "headlink/startHeadingSearch" command.
///
/// Opens the single active session with the selection as the initial
/// query, so results are visible before any further input. An empty
/// selection refuses to start the flow with a notice.
pub async fn handle_start_heading_search(
    client: &Client,
    state: &GlobalState,
    params: ExecuteCommandParams,
) -> Result<Option<serde_json::Value>> {
    let params: StartHeadingSearchParams = parse_first_arg(&params)?;

    if params.selection.is_empty() {
        client
            .show_message(MessageType::WARNING, LinkError::EmptySelection.to_string())
            .await;
        return Ok(None);
    }

    let documents = snapshot_documents(state).await;
    let session = SearchSession::open(documents, &params.selection);
    let matches = to_matches(session.results());

    *state.session.write().await = Some(session);

    serialize_result(SearchHeadingsResult { matches })
}

/// Handle the "headlink/searchHeadings" command.
///
/// Invoked on every query change; the recompute fully replaces the
/// previous result set.
pub async fn handle_search_headings(
    _client: &Client,
    state: &GlobalState,
    params: ExecuteCommandParams,
) -> Result<Option<serde_json::Value>> {
    let params: SearchHeadingsParams = parse_first_arg(&params)?;

    let mut session_lock = state.session.write().await;
    let Some(session) = &mut *session_lock else {
        return Err(Error::invalid_params("No active heading search"));
    };

    let matches = to_matches(session.set_query(&params.query));
    serialize_result(SearchHeadingsResult { matches })
}

/// Handle the "headlink/insertHeadingLink" command.
///
/// Renders the link for the selected match, splices it over the client's
/// selection range, and closes the session. An incomplete match notifies
/// the user, applies no edit, and leaves the session open.
pub async fn handle_insert_heading_link(
    client: &Client,
    state: &GlobalState,
    params: ExecuteCommandParams,
) -> Result<Option<serde_json::Value>> {
    let params: InsertHeadingLinkParams = parse_first_arg(&params)?;

    let link = {
        let controller_lock = state.controller.read().await;
        let Some(controller) = &*controller_lock else {
            return Err(Error::internal_error());
        };
        compose_from_match(
            params.path.as_deref(),
            params.heading_text.as_deref(),
            controller.link_format(),
        )
    };

    let link = match link {
        Ok(link) => link,
        Err(e) => {
            client.show_message(MessageType::WARNING, e.to_string()).await;
            return Ok(None);
        }
    };

    let edit = WorkspaceEdit {
        changes: Some(
            [(
                params.uri,
                vec![TextEdit {
                    range: params.range,
                    new_text: link.clone(),
                }],
            )]
            .into_iter()
            .collect(),
        ),
        ..Default::default()
    };

    if let Err(e) = client.apply_edit(edit).await {
        log::warn!("failed to apply selection edit: {}", e);
        return Ok(None);
    }

    *state.session.write().await = None;

    serialize_result(InsertHeadingLinkResult { link })
}
