use crate::conversion::{doc_basename, uri_to_path, vault_relative_path};
use crate::protocol::{CopyHeadingLinkParams, CopyHeadingLinkResult};
use crate::state::GlobalState;
use headlink_core::compose::compose_from_cursor;
use headlink_core::model::ActiveDocument;
use tower_lsp::jsonrpc::{Error, Result};
use tower_lsp::lsp_types::*;
use tower_lsp::Client;

/// Handle the "headlink/copyHeadingLink" command.
///
/// Resolves the nearest heading above the given cursor line and returns
/// the rendered link; the client owns the clipboard write. Flow failures
/// (no heading, no associated file) surface as showMessage notices and
/// the command returns `null` so the client writes nothing.
pub async fn handle_copy_heading_link(
    client: &Client,
    state: &GlobalState,
    params: ExecuteCommandParams,
) -> Result<Option<serde_json::Value>> {
    let params: CopyHeadingLinkParams = parse_first_arg(&params)?;

    let Some(file_path) = uri_to_path(&params.uri) else {
        client
            .show_message(MessageType::WARNING, "Unsupported document URI")
            .await;
        return Ok(None);
    };

    // Open buffer wins over disk content.
    let text = {
        let cache = state.documents.read().await;
        match cache.get(&params.uri) {
            Some(text) => text.clone(),
            None => std::fs::read_to_string(&file_path).unwrap_or_default(),
        }
    };

    let root = state.root.read().await;
    let vault_path = root
        .as_deref()
        .map(|r| vault_relative_path(r, &file_path))
        .unwrap_or_else(|| file_path.to_string_lossy().into_owned());

    let doc = ActiveDocument {
        path: Some(vault_path),
        basename: doc_basename(&file_path),
        text,
        cursor_line: params.line as usize,
    };

    let controller_lock = state.controller.read().await;
    let Some(controller) = &*controller_lock else {
        return Err(Error::internal_error());
    };

    match compose_from_cursor(&doc, controller.link_format()) {
        Ok(link) => {
            let result = CopyHeadingLinkResult { link };
            serialize_result(result)
        }
        Err(e) => {
            client.show_message(MessageType::WARNING, e.to_string()).await;
            Ok(None)
        }
    }
}

/// Deserialize the first executeCommand argument into `T`.
pub(super) fn parse_first_arg<T: serde::de::DeserializeOwned>(
    params: &ExecuteCommandParams,
) -> Result<T> {
    let first_arg = params
        .arguments
        .first()
        .ok_or_else(|| Error::invalid_params("Missing params"))?;
    serde_json::from_value(first_arg.clone()).map_err(|_| Error::invalid_params("Invalid params"))
}

pub(super) fn serialize_result<T: serde::Serialize>(result: T) -> Result<Option<serde_json::Value>> {
    serde_json::to_value(result).map(Some).map_err(|e| Error {
        code: tower_lsp::jsonrpc::ErrorCode::InternalError,
        message: format!("Failed to serialize results: {}", e).into(),
        data: None,
    })
}
