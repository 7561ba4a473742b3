use crate::state::GlobalState;
use tower_lsp::lsp_types::*;

/// Handle "textDocument/didOpen" notification
pub async fn handle_did_open(state: &GlobalState, params: DidOpenTextDocumentParams) {
    let uri = params.text_document.uri;
    let text = params.text_document.text;

    let mut cache = state.documents.write().await;
    cache.insert(uri, text);
}

/// Handle "textDocument/didChange" notification
pub async fn handle_did_change(state: &GlobalState, params: DidChangeTextDocumentParams) {
    let uri = params.text_document.uri;

    // Full sync: the last change carries the whole document.
    if let Some(last_change) = params.content_changes.into_iter().last() {
        let mut cache = state.documents.write().await;
        cache.insert(uri, last_change.text);
    }
}

/// Handle "textDocument/didClose" notification
pub async fn handle_did_close(state: &GlobalState, params: DidCloseTextDocumentParams) {
    let mut cache = state.documents.write().await;
    cache.remove(&params.text_document.uri);
}
