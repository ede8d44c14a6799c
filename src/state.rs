//! Shared application state injected into request handlers.

use std::sync::Arc;

use crate::application::services::LinkService;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
}
