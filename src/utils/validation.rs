//! Stateless validation predicates and transforms for link parameters.

use url::Url;

use crate::error::AppError;

/// Scheme prepended to bare hostnames before parsing in [`clean_host`].
const DEFAULT_SCHEME: &str = "https";

/// Normalizes a caller-supplied host to a bare hostname.
///
/// Trims whitespace, prepends a default scheme when none is present, then
/// keeps only the hostname component (scheme, port, and path are stripped).
///
/// # Errors
///
/// Returns [`AppError::MissingHost`] for an empty input and
/// [`AppError::HostInvalid`] when no hostname can be extracted.
pub fn clean_host(raw: &str) -> Result<String, AppError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AppError::MissingHost);
    }

    let with_scheme = if raw.contains("://") {
        raw.to_string()
    } else {
        format!("{DEFAULT_SCHEME}://{raw}")
    };

    let url = Url::parse(&with_scheme).map_err(|_| AppError::HostInvalid)?;
    let host = url.host_str().ok_or(AppError::HostInvalid)?;

    Ok(host.to_string())
}

/// Requires `link` to be a parsable URL with an `http` or `https` scheme.
pub fn validate_url_scheme(link: &str) -> Result<(), AppError> {
    let url = Url::parse(link).map_err(|_| AppError::InvalidUrlFormat)?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(AppError::InvalidScheme),
    }
}

/// True when the destination link's hostname exactly matches an allow-list
/// entry, case-insensitively.
///
/// No subdomain or wildcard matching. An unparsable link or an empty allow
/// list yields `false`.
pub fn is_domain_allowed(allow_list: &[String], raw_link: &str) -> bool {
    let Ok(url) = Url::parse(raw_link) else {
        tracing::debug!(raw_link, "destination link is not parsable");
        return false;
    };
    let Some(host) = url.host_str() else {
        return false;
    };
    let host = host.to_ascii_lowercase();

    allow_list
        .iter()
        .any(|allowed| allowed.trim().to_ascii_lowercase() == host)
}

/// True for the empty string and for strings of ASCII digits only.
///
/// Unicode digit variants are rejected.
pub fn is_numeric_string(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_digit())
}

/// True only when `s` parses as a URL with both scheme and host present.
pub fn is_url(s: &str) -> bool {
    Url::parse(s).is_ok_and(|url| url.has_host())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_host_trims_whitespace() {
        assert_eq!(clean_host(" example.com ").unwrap(), "example.com");
    }

    #[test]
    fn test_clean_host_strips_scheme_port_and_path() {
        assert_eq!(
            clean_host("https://example.com:8080/path").unwrap(),
            "example.com"
        );
    }

    #[test]
    fn test_clean_host_accepts_bare_hostname() {
        assert_eq!(clean_host("links.example.com").unwrap(), "links.example.com");
    }

    #[test]
    fn test_clean_host_rejects_empty() {
        assert!(matches!(clean_host(""), Err(AppError::MissingHost)));
        assert!(matches!(clean_host("   "), Err(AppError::MissingHost)));
    }

    #[test]
    fn test_validate_url_scheme_accepts_http_and_https() {
        assert!(validate_url_scheme("http://target.com").is_ok());
        assert!(validate_url_scheme("https://target.com/page?id=1").is_ok());
    }

    #[test]
    fn test_validate_url_scheme_rejects_other_schemes() {
        assert!(matches!(
            validate_url_scheme("ftp://target.com"),
            Err(AppError::InvalidScheme)
        ));
        assert!(matches!(
            validate_url_scheme("javascript:alert(1)"),
            Err(AppError::InvalidScheme)
        ));
    }

    #[test]
    fn test_validate_url_scheme_rejects_unparsable() {
        assert!(matches!(
            validate_url_scheme("not a url"),
            Err(AppError::InvalidUrlFormat)
        ));
    }

    #[test]
    fn test_is_domain_allowed_exact_case_insensitive_match() {
        let allow_list = vec!["example.com".to_string()];
        assert!(is_domain_allowed(&allow_list, "https://EXAMPLE.com/x"));
    }

    #[test]
    fn test_is_domain_allowed_no_subdomain_match() {
        let allow_list = vec!["example.com".to_string()];
        assert!(!is_domain_allowed(&allow_list, "https://sub.example.com"));
    }

    #[test]
    fn test_is_domain_allowed_trims_allow_list_entries() {
        let allow_list = vec![" target.com ".to_string()];
        assert!(is_domain_allowed(&allow_list, "https://target.com/page"));
    }

    #[test]
    fn test_is_domain_allowed_empty_list_and_bad_link() {
        assert!(!is_domain_allowed(&[], "https://example.com"));
        let allow_list = vec!["example.com".to_string()];
        assert!(!is_domain_allowed(&allow_list, "::not a url::"));
    }

    #[test]
    fn test_is_numeric_string() {
        assert!(is_numeric_string(""));
        assert!(is_numeric_string("0123456789"));
        assert!(!is_numeric_string("12a"));
        assert!(!is_numeric_string("12 34"));
        // Arabic-Indic digits are not ASCII digits.
        assert!(!is_numeric_string("١٢٣"));
    }

    #[test]
    fn test_is_url() {
        assert!(is_url("https://example.com"));
        assert!(is_url("http://example.com/path"));
        assert!(!is_url("example.com"));
        assert!(!is_url("mailto:user@example.com"));
        assert!(!is_url(""));
    }
}
