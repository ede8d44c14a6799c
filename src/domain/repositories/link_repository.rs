//! Repository trait for dynamic link storage.

use crate::domain::entities::NewDynamicLink;
use crate::error::AppError;
use async_trait::async_trait;

/// Narrow persistence interface the link service depends on.
///
/// "Not found" is a non-error condition modeled as `Ok(None)`; only real
/// driver failures surface as [`AppError::Database`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Returns the stored canonical query string for `(host, path)`,
    /// or `None` when no such link exists.
    async fn query_params_by_host_and_path(
        &self,
        host: &str,
        path: &str,
    ) -> Result<Option<String>, AppError>;

    /// Returns the path of an existing guessable record for
    /// `(host, query_params)`, or `None` when reuse is not possible.
    ///
    /// Unguessable records are never matched.
    async fn find_guessable_path(
        &self,
        host: &str,
        query_params: &str,
    ) -> Result<Option<String>, AppError>;

    /// Persists a new short link record.
    async fn insert_link(&self, link: NewDynamicLink) -> Result<(), AppError>;
}
