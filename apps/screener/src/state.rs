use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::results::ScreenerSession;
use crate::search_client::SearchBackend;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable search backend. `HttpSearchBackend` when `SEARCH_API_URL` is set.
    pub search: Arc<dyn SearchBackend>,
    /// The one results panel this host drives. Only held across synchronous updates,
    /// never across the upstream search call.
    pub session: Arc<Mutex<ScreenerSession>>,
}

impl AppState {
    pub fn new(config: Config, search: Arc<dyn SearchBackend>) -> Self {
        let session = ScreenerSession::new(config.database_ready);
        Self {
            config,
            search,
            session: Arc::new(Mutex::new(session)),
        }
    }
}
