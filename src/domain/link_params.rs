//! Structured dynamic link parameter model.
//!
//! Mirrors the public JSON shape of the create-link API. Every optional
//! field uses the empty string as "absent": the codec never emits empty
//! values and the decoder never stores them, so `Default` equality is a
//! faithful presence check.

use serde::{Deserialize, Serialize};

/// Full create-link request: the parameter tree plus the suffix option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateDynamicLinkRequest {
    pub dynamic_link_info: DynamicLinkInfo,
    pub suffix: Suffix,
}

/// The destination and per-platform parameter tree.
///
/// `host` and `link` are the only required fields; everything else is
/// optional and independently present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DynamicLinkInfo {
    pub host: String,
    pub link: String,
    pub android_parameters: AndroidParameters,
    pub ios_parameters: IosParameters,
    pub other_platform_parameters: OtherPlatformParameters,
    pub analytics_info: AnalyticsInfo,
    pub social_meta_tag_info: SocialMetaTagInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AndroidParameters {
    pub android_package_name: String,
    pub android_fallback_link: String,
    pub android_min_package_version_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IosParameters {
    pub ios_fallback_link: String,
    pub ios_ipad_fallback_link: String,
    pub ios_app_store_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OtherPlatformParameters {
    /// Fallback URL for platforms without a dedicated parameter group.
    #[serde(rename = "ofl")]
    pub fallback_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalyticsInfo {
    pub marketing_parameters: MarketingParameters,
    pub itunes_connect_analytics: ItunesConnectAnalytics,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarketingParameters {
    pub utm_source: String,
    pub utm_medium: String,
    pub utm_campaign: String,
    pub utm_term: String,
    pub utm_content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItunesConnectAnalytics {
    pub at: String,
    pub ct: String,
    pub mt: String,
    pub pt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SocialMetaTagInfo {
    pub social_title: String,
    pub social_description: String,
    pub social_image_link: String,
}

/// Short path generation regime requested by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Suffix {
    pub option: String,
}

impl Suffix {
    /// `SHORT` selects the guessable, reusable regime; any other value
    /// (including absence) selects unguessable single-use paths.
    pub fn is_short(&self) -> bool {
        self.option == "SHORT"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_structured_request() {
        let value = json!({
            "dynamicLinkInfo": {
                "host": "example.com",
                "link": "https://target.com/page",
                "androidParameters": { "androidPackageName": "com.example.app" },
                "iosParameters": { "iosAppStoreId": "123456789" },
                "otherPlatformParameters": { "ofl": "https://other.example.com" },
                "analyticsInfo": {
                    "marketingParameters": { "utmSource": "newsletter" },
                    "itunesConnectAnalytics": { "pt": "9" }
                },
                "socialMetaTagInfo": { "socialTitle": "Hello" }
            },
            "suffix": { "option": "SHORT" }
        });

        let req: CreateDynamicLinkRequest = serde_json::from_value(value).unwrap();
        let info = &req.dynamic_link_info;

        assert_eq!(info.host, "example.com");
        assert_eq!(info.link, "https://target.com/page");
        assert_eq!(info.android_parameters.android_package_name, "com.example.app");
        assert_eq!(info.ios_parameters.ios_app_store_id, "123456789");
        assert_eq!(info.other_platform_parameters.fallback_url, "https://other.example.com");
        assert_eq!(info.analytics_info.marketing_parameters.utm_source, "newsletter");
        assert_eq!(info.analytics_info.itunes_connect_analytics.pt, "9");
        assert_eq!(info.social_meta_tag_info.social_title, "Hello");
        assert!(req.suffix.is_short());
    }

    #[test]
    fn test_missing_groups_default_to_empty() {
        let value = json!({
            "dynamicLinkInfo": { "host": "example.com", "link": "https://target.com" }
        });

        let req: CreateDynamicLinkRequest = serde_json::from_value(value).unwrap();

        assert_eq!(req.dynamic_link_info.android_parameters, AndroidParameters::default());
        assert_eq!(req.dynamic_link_info.ios_parameters, IosParameters::default());
        assert!(!req.suffix.is_short());
    }

    #[test]
    fn test_suffix_option_selects_regime() {
        assert!(Suffix { option: "SHORT".into() }.is_short());
        assert!(!Suffix { option: "UNGUESSABLE".into() }.is_short());
        assert!(!Suffix { option: "short".into() }.is_short());
        assert!(!Suffix::default().is_short());
    }
}
