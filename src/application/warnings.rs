//! Warning engine: advisory checks over an assembled parameter tree.
//!
//! Runs during create-link after decoding and before persistence. All rules
//! are evaluated independently, so a single request can collect several
//! warnings for the same field.

use crate::domain::link_params::DynamicLinkInfo;
use crate::domain::warning::Warning;
use crate::utils::validation;

/// Collects advisory warnings for unused or malformed optional fields.
///
/// Rules:
/// - `si` present but not a well-formed URL emits `MALFORMED_PARAM`.
/// - Each non-empty iTunes Connect field among `at`, `ct`, `mt`, `pt`
///   emits `UNRECOGNIZED_PARAM` when `isi` is absent.
/// - Each non-empty field among `at`, `ct`, `mt` emits a second
///   `UNRECOGNIZED_PARAM` when `pt` is absent.
pub fn collect_warnings(info: &DynamicLinkInfo) -> Vec<Warning> {
    let mut warnings = Vec::new();

    let social_image = &info.social_meta_tag_info.social_image_link;
    if !social_image.is_empty() && !validation::is_url(social_image) {
        warnings.push(Warning::malformed_url_param("si"));
    }

    let itunes = &info.analytics_info.itunes_connect_analytics;

    if info.ios_parameters.ios_app_store_id.is_empty() {
        for (key, value) in [
            ("at", &itunes.at),
            ("ct", &itunes.ct),
            ("mt", &itunes.mt),
            ("pt", &itunes.pt),
        ] {
            if !value.is_empty() {
                warnings.push(Warning::unneeded_param(key, "isi"));
            }
        }
    }

    if itunes.pt.is_empty() {
        for (key, value) in [("at", &itunes.at), ("ct", &itunes.ct), ("mt", &itunes.mt)] {
            if !value.is_empty() {
                warnings.push(Warning::unneeded_param(key, "pt"));
            }
        }
    }

    warnings
}
