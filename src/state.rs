// src/state.rs

use std::sync::Arc;

use crate::services::payment_service::PaymentGateway;
use crate::services::store::DocumentStore;

/// Shared handles injected into every handler. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    /// `None` when no gateway secret is configured.
    pub payments: Option<Arc<dyn PaymentGateway>>,
}
