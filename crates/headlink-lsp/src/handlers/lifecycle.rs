use crate::protocol;
use crate::state::GlobalState;
use headlink_core::controller::LinkController;
use headlink_core::settings::JsonFileSettingsStore;
use headlink_core::vfs::{FileSystem, PhysicalFileSystem};
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::Client;

/// Handle "initialize" request
pub async fn handle_initialize(
    client: &Client,
    state: &GlobalState,
    params: InitializeParams,
) -> Result<InitializeResult> {
    if let Some(uri) = params.root_uri {
        if let Ok(root_path) = uri.to_file_path() {
            client
                .log_message(
                    MessageType::INFO,
                    format!("Initializing vault at: {:?}", root_path),
                )
                .await;

            let root_clone = root_path.clone();
            let (controller, files) = tokio::task::spawn_blocking(move || {
                let store =
                    JsonFileSettingsStore::new(root_clone.join(".headlink/settings.json"));
                let controller = LinkController::load(store);
                let files = PhysicalFileSystem.list_files(&root_clone, "md");
                (controller, files)
            })
            .await
            .map_err(|e| tower_lsp::jsonrpc::Error {
                code: tower_lsp::jsonrpc::ErrorCode::InternalError,
                message: format!("Failed to initialize vault: {}", e).into(),
                data: None,
            })?;

            client
                .log_message(
                    MessageType::INFO,
                    format!("Found {} markdown files", files.len()),
                )
                .await;
            client
                .log_message(
                    MessageType::INFO,
                    format!("Link format: {}", controller.link_format()),
                )
                .await;

            *state.root.write().await = Some(root_path);
            *state.controller.write().await = Some(controller);
        }
    } else {
        client
            .log_message(MessageType::WARNING, "No rootUri provided!")
            .await;
    }

    Ok(InitializeResult {
        capabilities: ServerCapabilities {
            text_document_sync: Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::FULL)),
            execute_command_provider: Some(ExecuteCommandOptions {
                commands: vec![
                    protocol::COPY_HEADING_LINK.to_string(),
                    protocol::START_HEADING_SEARCH.to_string(),
                    protocol::SEARCH_HEADINGS.to_string(),
                    protocol::INSERT_HEADING_LINK.to_string(),
                ],
                work_done_progress_options: Default::default(),
            }),
            ..Default::default()
        },
        ..Default::default()
    })
}
