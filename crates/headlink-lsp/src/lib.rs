//! Headlink LSP Library
//!
//! LSP protocol layer, converts JSON-RPC requests to Core library calls.
//! The two link flows are exposed as `workspace/executeCommand` commands;
//! the client owns the clipboard and the result-list UI.

use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LspService};

use crate::state::GlobalState;

mod conversion;
mod handlers;
pub mod protocol;
mod state;


/// LSP backend implementation
pub struct Backend {
    client: Client,
    state: GlobalState,
}

impl Backend {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            state: GlobalState::new(),
        }
    }
}

#[tower_lsp::async_trait]
impl tower_lsp::LanguageServer for Backend {
    async fn initialize(
        &self,
        params: InitializeParams,
    ) -> tower_lsp::jsonrpc::Result<InitializeResult> {
        handlers::handle_initialize(&self.client, &self.state, params).await
    }

    async fn initialized(&self, _: InitializedParams) {
        self.client
            .log_message(MessageType::INFO, "Client initialized, ready for commands")
            .await;
    }

    async fn shutdown(&self) -> tower_lsp::jsonrpc::Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        handlers::handle_did_open(&self.state, params).await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        handlers::handle_did_change(&self.state, params).await;
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        handlers::handle_did_close(&self.state, params).await;
    }

    async fn did_change_configuration(&self, params: DidChangeConfigurationParams) {
        handlers::handle_did_change_configuration(&self.client, &self.state, params).await;
    }

    async fn execute_command(
        &self,
        params: ExecuteCommandParams,
    ) -> tower_lsp::jsonrpc::Result<Option<serde_json::Value>> {
        match params.command.as_str() {
            protocol::COPY_HEADING_LINK => {
                handlers::handle_copy_heading_link(&self.client, &self.state, params).await
            }
            protocol::START_HEADING_SEARCH => {
                handlers::handle_start_heading_search(&self.client, &self.state, params).await
            }
            protocol::SEARCH_HEADINGS => {
                handlers::handle_search_headings(&self.client, &self.state, params).await
            }
            protocol::INSERT_HEADING_LINK => {
                handlers::handle_insert_heading_link(&self.client, &self.state, params).await
            }
            other => Err(tower_lsp::jsonrpc::Error::invalid_params(format!(
                "Unknown command: {}",
                other
            ))),
        }
    }
}

/// Create and return LSP service and client socket
pub fn create_lsp_service() -> (LspService<Backend>, tower_lsp::ClientSocket) {
    LspService::new(Backend::new)
}
