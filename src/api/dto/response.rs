//! Response DTOs.

use serde::Serialize;

use crate::domain::warning::Warning;

/// Successful create-link response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortLinkResponse {
    pub short_link: String,
    pub warnings: Vec<Warning>,
}

/// Successful resolve response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LongLinkResponse {
    pub long_link: String,
}
