use std::sync::Arc;

use crate::services::catalog::Catalog;
use crate::services::sessions::SessionStore;

/// Shared per-process state. The catalog is read-only after startup.
pub struct AppState {
    pub catalog: Catalog,
    pub sessions: Arc<dyn SessionStore>,
}
