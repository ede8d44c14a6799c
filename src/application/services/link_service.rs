//! Dynamic link creation and resolution service.

use std::sync::Arc;

use serde_json::Value;
use url::Url;

use crate::application::warnings::collect_warnings;
use crate::domain::entities::NewDynamicLink;
use crate::domain::link_params::CreateDynamicLinkRequest;
use crate::domain::query_codec;
use crate::domain::repositories::LinkRepository;
use crate::domain::warning::Warning;
use crate::error::AppError;
use crate::utils::path_generator::generate_link_path;
use crate::utils::validation;

/// Immutable settings consumed by the service, extracted from the process
/// configuration and passed in explicitly.
#[derive(Debug, Clone)]
pub struct LinkSettings {
    /// Scheme used when composing short links and rebuilt long links.
    pub url_scheme: String,
    /// Length of guessable (reusable) paths.
    pub short_path_length: usize,
    /// Length of unguessable (single-use) paths. Longer than the guessable length.
    pub unguessable_path_length: usize,
    /// Bare hostnames the destination `link` may point at.
    pub domain_allow_list: Vec<String>,
}

/// Successful create-link outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedLink {
    pub short_link: String,
    pub warnings: Vec<Warning>,
}

/// Orchestrates the two public operations: create-link and resolve-short-link.
///
/// Stateless apart from the injected repository and immutable settings; each
/// call runs synchronously within the caller's task, blocking on persistence
/// I/O as needed.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
    settings: LinkSettings,
}

impl LinkService {
    pub fn new(repository: Arc<dyn LinkRepository>, settings: LinkSettings) -> Self {
        Self {
            repository,
            settings,
        }
    }

    /// Projects a raw JSON document into a validated create-link request.
    ///
    /// Two ingestion paths: a non-empty `longDynamicLink` string is decoded
    /// through the query codec; otherwise the document is deserialized as a
    /// structured `dynamicLinkInfo`/`suffix` object. Required fields and the
    /// destination scheme are checked after either path.
    pub fn prepare_request(&self, document: Value) -> Result<CreateDynamicLinkRequest, AppError> {
        let long_link = document
            .get("longDynamicLink")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let request = if long_link.is_empty() {
            serde_json::from_value(document).map_err(|_| AppError::InvalidFormat)?
        } else {
            query_codec::decode(&long_link)?
        };

        let info = &request.dynamic_link_info;
        if info.host.is_empty() {
            return Err(AppError::MissingHost);
        }
        if info.link.is_empty() {
            return Err(AppError::MissingLink);
        }
        validation::validate_url_scheme(&info.link)?;

        Ok(request)
    }

    /// Creates (or reuses) a short link for the given parameter tree.
    ///
    /// Validates the host and destination, collects advisory warnings,
    /// encodes the canonical query string, and resolves a short path in the
    /// regime selected by the suffix option.
    pub async fn create_dynamic_link(
        &self,
        request: &CreateDynamicLinkRequest,
    ) -> Result<CreatedLink, AppError> {
        let info = &request.dynamic_link_info;

        let host = validation::clean_host(&info.host)?;

        if !validation::is_domain_allowed(&self.settings.domain_allow_list, &info.link) {
            tracing::warn!(link = %info.link, "destination domain not in allow list");
            return Err(AppError::DomainLinkNotAllowed);
        }

        if !validation::is_numeric_string(&info.ios_parameters.ios_app_store_id) {
            return Err(AppError::InvalidAppStoreId);
        }

        let warnings = collect_warnings(info);
        let query_params = query_codec::encode(info);

        let path = self
            .resolve_short_path(&host, &query_params, request.suffix.is_short())
            .await?;

        Ok(CreatedLink {
            short_link: format!("{}://{}/{}", self.settings.url_scheme, host, path),
            warnings,
        })
    }

    /// Resolves a previously issued short link back into its long form.
    ///
    /// The requested link must parse as a URL whose path holds exactly one
    /// non-empty segment.
    pub async fn resolve_short_link(&self, requested_link: &str) -> Result<String, AppError> {
        let url = Url::parse(requested_link).map_err(|_| AppError::InvalidRequestedLink)?;
        let host = url.host_str().ok_or(AppError::InvalidRequestedLink)?;

        let path = single_path_segment(url.path())?;

        self.rebuild_long_link(host, path).await
    }

    /// Returns an existing guessable path for `(host, query_params)` or
    /// mints and persists a new one.
    ///
    /// The guessable branch is a best-effort lookup-before-insert: two
    /// concurrent requests for the same content can both miss the lookup and
    /// store distinct paths. This race is accepted; there is no uniqueness
    /// constraint on `(host, query_params)` and no retry.
    async fn resolve_short_path(
        &self,
        host: &str,
        query_params: &str,
        guessable: bool,
    ) -> Result<String, AppError> {
        if guessable
            && let Some(path) = self
                .repository
                .find_guessable_path(host, query_params)
                .await?
        {
            tracing::debug!(host, path, "reusing existing short link");
            return Ok(path);
        }

        let length = if guessable {
            self.settings.short_path_length
        } else {
            self.settings.unguessable_path_length
        };
        let path = generate_link_path(length);

        self.repository
            .insert_link(NewDynamicLink {
                host: host.to_string(),
                path: path.clone(),
                query_params: query_params.to_string(),
                is_unguessable: !guessable,
            })
            .await?;

        tracing::debug!(host, path, "stored new short link");
        Ok(path)
    }

    async fn rebuild_long_link(&self, host: &str, path: &str) -> Result<String, AppError> {
        let query_params = self
            .repository
            .query_params_by_host_and_path(host, path)
            .await?
            .ok_or(AppError::LinkNotFound)?;

        let mut long_link = format!("{}://{}/{}", self.settings.url_scheme, host, path);
        if !query_params.is_empty() {
            long_link.push('?');
            long_link.push_str(&query_params);
        }

        tracing::debug!(path, long_link, "rebuilt long link");
        Ok(long_link)
    }
}

/// Requires the URL path to contain exactly one non-empty segment after
/// trimming leading and trailing slashes.
fn single_path_segment(path: &str) -> Result<&str, AppError> {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() || trimmed.contains('/') {
        return Err(AppError::InvalidPathFormat);
    }
    Ok(trimmed)
}
