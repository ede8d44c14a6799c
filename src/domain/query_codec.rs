//! Canonical query string codec for the dynamic link parameter tree.
//!
//! The encoded form doubles as the storage payload and the reuse-lookup key,
//! so it must be byte-stable for a given parameter set: only non-empty
//! fields are emitted, keys are serialized in alphabetical order, and values
//! use form-urlencoded percent escaping.

use url::Url;
use url::form_urlencoded;

use crate::domain::link_params::{CreateDynamicLinkRequest, DynamicLinkInfo};
use crate::error::AppError;

/// Encodes a parameter tree into its canonical query string.
///
/// `link` is always emitted; every other key only when its field is
/// non-empty. The suffix option is not part of the canonical form.
pub fn encode(info: &DynamicLinkInfo) -> String {
    let mut pairs: Vec<(&'static str, &str)> = vec![("link", &info.link)];

    let android = &info.android_parameters;
    add(&mut pairs, "apn", &android.android_package_name);
    add(&mut pairs, "afl", &android.android_fallback_link);
    add(&mut pairs, "amv", &android.android_min_package_version_code);

    let ios = &info.ios_parameters;
    add(&mut pairs, "ifl", &ios.ios_fallback_link);
    add(&mut pairs, "ipfl", &ios.ios_ipad_fallback_link);
    add(&mut pairs, "isi", &ios.ios_app_store_id);

    add(&mut pairs, "ofl", &info.other_platform_parameters.fallback_url);

    let social = &info.social_meta_tag_info;
    add(&mut pairs, "st", &social.social_title);
    add(&mut pairs, "sd", &social.social_description);
    add(&mut pairs, "si", &social.social_image_link);

    let marketing = &info.analytics_info.marketing_parameters;
    add(&mut pairs, "utm_source", &marketing.utm_source);
    add(&mut pairs, "utm_medium", &marketing.utm_medium);
    add(&mut pairs, "utm_campaign", &marketing.utm_campaign);
    add(&mut pairs, "utm_term", &marketing.utm_term);
    add(&mut pairs, "utm_content", &marketing.utm_content);

    let itunes = &info.analytics_info.itunes_connect_analytics;
    add(&mut pairs, "at", &itunes.at);
    add(&mut pairs, "ct", &itunes.ct);
    add(&mut pairs, "mt", &itunes.mt);
    add(&mut pairs, "pt", &itunes.pt);

    // Canonical key order; sort is stable and keys are unique.
    pairs.sort_by_key(|(key, _)| *key);

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

fn add<'a>(pairs: &mut Vec<(&'static str, &'a str)>, key: &'static str, value: &'a str) {
    if !value.is_empty() {
        pairs.push((key, value));
    }
}

/// Decodes a long dynamic link back into the structured request form.
///
/// The host comes from the URL's host component; each known query key is
/// stored only when non-empty (an empty value counts as absent). Unknown
/// keys are silently ignored. The input-only `path` key selects the suffix
/// option.
pub fn decode(long_dynamic_link: &str) -> Result<CreateDynamicLinkRequest, AppError> {
    let url = Url::parse(long_dynamic_link).map_err(|_| AppError::InvalidUrlFormat)?;
    let host = url.host_str().ok_or(AppError::HostInvalid)?;

    let mut request = CreateDynamicLinkRequest::default();
    request.dynamic_link_info.host = host.to_string();

    for (key, value) in url.query_pairs() {
        if value.is_empty() {
            continue;
        }
        let value = value.into_owned();
        let info = &mut request.dynamic_link_info;
        match key.as_ref() {
            "link" => info.link = value,
            "apn" => info.android_parameters.android_package_name = value,
            "afl" => info.android_parameters.android_fallback_link = value,
            "amv" => info.android_parameters.android_min_package_version_code = value,
            "ifl" => info.ios_parameters.ios_fallback_link = value,
            "ipfl" => info.ios_parameters.ios_ipad_fallback_link = value,
            "isi" => info.ios_parameters.ios_app_store_id = value,
            "ofl" => info.other_platform_parameters.fallback_url = value,
            "st" => info.social_meta_tag_info.social_title = value,
            "sd" => info.social_meta_tag_info.social_description = value,
            "si" => info.social_meta_tag_info.social_image_link = value,
            "utm_source" => info.analytics_info.marketing_parameters.utm_source = value,
            "utm_medium" => info.analytics_info.marketing_parameters.utm_medium = value,
            "utm_campaign" => info.analytics_info.marketing_parameters.utm_campaign = value,
            "utm_term" => info.analytics_info.marketing_parameters.utm_term = value,
            "utm_content" => info.analytics_info.marketing_parameters.utm_content = value,
            "at" => info.analytics_info.itunes_connect_analytics.at = value,
            "ct" => info.analytics_info.itunes_connect_analytics.ct = value,
            "mt" => info.analytics_info.itunes_connect_analytics.mt = value,
            "pt" => info.analytics_info.itunes_connect_analytics.pt = value,
            "path" => request.suffix.option = value,
            _ => {}
        }
    }

    Ok(request)
}
