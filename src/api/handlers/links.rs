//! Handlers for the create-link and exchange-short-link endpoints.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde_json::Value;

use crate::api::dto::request::ExchangeShortLinkRequest;
use crate::api::dto::response::{LongLinkResponse, ShortLinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short dynamic link.
///
/// # Endpoint
///
/// `POST /v1/shortLinks`
///
/// The body is accepted as a raw JSON document and projected in two stages:
/// either a `longDynamicLink` string decoded through the query codec, or a
/// structured `dynamicLinkInfo`/`suffix` object. Advisory warnings are
/// returned alongside the short link.
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ShortLinkResponse>, AppError> {
    let Json(document) = payload.map_err(|_| AppError::InvalidFormat)?;

    let request = state.link_service.prepare_request(document)?;
    let created = state.link_service.create_dynamic_link(&request).await?;

    Ok(Json(ShortLinkResponse {
        short_link: created.short_link,
        warnings: created.warnings,
    }))
}

/// Resolves a previously issued short link back into its long form.
///
/// # Endpoint
///
/// `POST /v1/exchangeShortLink`
///
/// # Errors
///
/// Returns 400 for a missing, empty, unparsable, or wrong-shaped
/// `requestedLink` and 404 when the link was never issued.
pub async fn exchange_short_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<ExchangeShortLinkRequest>, JsonRejection>,
) -> Result<Json<LongLinkResponse>, AppError> {
    let Json(request) = payload.map_err(|_| AppError::InvalidRequestedLink)?;
    if request.requested_link.is_empty() {
        return Err(AppError::InvalidRequestedLink);
    }

    let long_link = state
        .link_service
        .resolve_short_link(&request.requested_link)
        .await?;

    Ok(Json(LongLinkResponse { long_link }))
}
