//! Advisory warning vocabulary for create-link responses.

use serde::Serialize;

/// Warning codes attached to otherwise successful create-link responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarningCode {
    MalformedParam,
    UnrecognizedParam,
}

/// Non-fatal advisory signaling a likely caller mistake.
///
/// Warnings never abort a request and never mutate stored state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Warning {
    pub warning_code: WarningCode,
    pub warning_message: String,
}

impl Warning {
    /// A parameter is present but does not have its expected shape.
    pub fn malformed_url_param(key: &str) -> Self {
        Self {
            warning_code: WarningCode::MalformedParam,
            warning_message: format!("Param '{key}' is not a valid URL"),
        }
    }

    /// A parameter is present but unused because a field it depends on is absent.
    pub fn unneeded_param(key: &str, missing: &str) -> Self {
        Self {
            warning_code: WarningCode::UnrecognizedParam,
            warning_message: format!("Param '{key}' is not needed, since '{missing}' is not specified."),
        }
    }
}
