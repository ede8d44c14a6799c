//! Request DTOs.

use serde::Deserialize;

/// Body of `POST /v1/exchangeShortLink`.
///
/// `requestedLink` defaults to empty so a missing field is reported through
/// the service's own error mapping rather than a deserialization rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExchangeShortLinkRequest {
    pub requested_link: String,
}
