use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_lsp::lsp_types::Url;

use headlink_core::controller::LinkController;
use headlink_core::search::SearchSession;
use headlink_core::settings::JsonFileSettingsStore;

/// Global state for the LSP server.
/// Must be Send + Sync.
#[derive(Clone)]
pub struct GlobalState {
    /// Vault root captured at initialize
    pub root: Arc<RwLock<Option<PathBuf>>>,

    /// Open-document cache, kept in sync by didOpen/didChange/didClose.
    /// Open buffers overlay disk content when search snapshots are built.
    pub documents: Arc<RwLock<HashMap<Url, String>>>,

    /// Settings-owning controller, created at initialize.
    /// Read operations (command handlers) are concurrent,
    /// write operations (configuration changes) are exclusive.
    pub controller: Arc<RwLock<Option<LinkController<JsonFileSettingsStore>>>>,

    /// The single active heading-search session, `None` between searches
    pub session: Arc<RwLock<Option<SearchSession>>>,
}

impl GlobalState {
    pub fn new() -> Self {
        Self {
            root: Arc::new(RwLock::new(None)),
            documents: Arc::new(RwLock::new(HashMap::new())),
            controller: Arc::new(RwLock::new(None)),
            session: Arc::new(RwLock::new(None)),
        }
    }
}

impl Default for GlobalState {
    fn default() -> Self {
        Self::new()
    }
}
