#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::routing::{get, post};

use dynamic_links::api::handlers::{
    create_link_handler, exchange_short_link_handler, health_handler,
};
use dynamic_links::application::services::{LinkService, LinkSettings};
use dynamic_links::domain::entities::NewDynamicLink;
use dynamic_links::domain::repositories::LinkRepository;
use dynamic_links::error::AppError;
use dynamic_links::state::AppState;

/// In-memory repository backing handler tests. A plain Vec behind a mutex
/// is enough; lookups mirror the SQL the PostgreSQL repository runs.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    records: Mutex<Vec<NewDynamicLink>>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_count(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn records(&self) -> Vec<NewDynamicLink> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn query_params_by_host_and_path(
        &self,
        host: &str,
        path: &str,
    ) -> Result<Option<String>, AppError> {
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .find(|record| record.host == host && record.path == path)
            .map(|record| record.query_params.clone()))
    }

    async fn find_guessable_path(
        &self,
        host: &str,
        query_params: &str,
    ) -> Result<Option<String>, AppError> {
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .find(|record| {
                !record.is_unguessable
                    && record.host == host
                    && record.query_params == query_params
            })
            .map(|record| record.path.clone()))
    }

    async fn insert_link(&self, link: NewDynamicLink) -> Result<(), AppError> {
        self.records.lock().unwrap().push(link);
        Ok(())
    }
}

pub fn test_settings(allow_list: &[&str]) -> LinkSettings {
    LinkSettings {
        url_scheme: "https".to_string(),
        short_path_length: 6,
        unguessable_path_length: 10,
        domain_allow_list: allow_list.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn create_test_state(allow_list: &[&str]) -> (AppState, Arc<InMemoryLinkRepository>) {
    let repository = Arc::new(InMemoryLinkRepository::new());
    let link_service = Arc::new(LinkService::new(
        repository.clone(),
        test_settings(allow_list),
    ));

    (AppState { link_service }, repository)
}

pub fn test_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/v1/shortLinks", post(create_link_handler))
        .route("/v1/exchangeShortLink", post(exchange_short_link_handler))
        .with_state(state)
}
