//! Application error type and HTTP mapping.
//!
//! Every fallible layer (codec, validators, service, repositories) returns
//! [`AppError`]; only the `IntoResponse` impl at the transport boundary turns
//! a variant into an HTTP status. Response bodies follow the shape
//! `{"error": {"code", "message", "status"}}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: u16,
    message: String,
    status: &'static str,
}

/// Closed error vocabulary for the dynamic link service.
///
/// Input errors map to 400 `INVALID_ARGUMENT`, unknown links to 404
/// `NOT_FOUND`, and persistence failures to 500 `INTERNAL`. Driver error
/// text is logged but never echoed to the caller.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request body is neither a `longDynamicLink` document nor a
    /// structured `dynamicLinkInfo` document.
    #[error("invalid request format")]
    InvalidFormat,

    /// `longDynamicLink` could not be parsed as a URL.
    #[error("longDynamicLink is not parsable")]
    InvalidUrlFormat,

    /// A host value was present but could not be normalized to a hostname.
    #[error("host is invalid")]
    HostInvalid,

    #[error("missing host")]
    MissingHost,

    #[error("missing link")]
    MissingLink,

    /// Destination link scheme is neither `http` nor `https`.
    #[error("link has an invalid scheme, must be http or https")]
    InvalidScheme,

    #[error("'link' parameter contains a host that is not in the allow list")]
    DomainLinkNotAllowed,

    #[error("'isi' parameter contains a non-numeric value")]
    InvalidAppStoreId,

    #[error("invalid or missing requestedLink")]
    InvalidRequestedLink,

    /// Requested link path must contain exactly one segment.
    #[error("unexpected path format")]
    InvalidPathFormat,

    #[error("link not found")]
    LinkNotFound,

    /// Any persistence failure distinct from "no rows".
    #[error("database error")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    fn status(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::LinkNotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL"),
            _ => (StatusCode::BAD_REQUEST, "INVALID_ARGUMENT"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, status_str) = self.status();

        let message = match &self {
            AppError::Database(e) => {
                tracing::error!(error = %e, "request failed with a database error");
                "Internal error".to_string()
            }
            other => other.to_string(),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code: status.as_u16(),
                message,
                status: status_str,
            },
        };

        (status, Json(body)).into_response()
    }
}
