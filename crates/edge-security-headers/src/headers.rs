//! Security headers stamped onto every edge response.
//!
//! The table is fixed. Values must stay byte-for-byte identical, including
//! the `includeSubdomains` spelling and the trailing space after the feature
//! policy.

use std::sync::Arc;

use http::header::{
    HeaderName, CONTENT_SECURITY_POLICY, REFERRER_POLICY, SERVER, STRICT_TRANSPORT_SECURITY,
    X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS, X_XSS_PROTECTION,
};

use crate::event::{EdgeHeaders, HeaderEntry};

const FEATURE_POLICY: HeaderName = HeaderName::from_static("feature-policy");
const X_POWERED_BY: HeaderName = HeaderName::from_static("x-powered-by");

/// One header in the injected set.
#[derive(Debug, Clone)]
pub struct SecurityHeader {
    /// Lower-case name, used as the map key.
    pub name: HeaderName,
    /// Display casing sent in the entry's `key`.
    pub key: &'static str,
    pub value: &'static str,
}

/// The headers added to every response, in application order.
#[must_use]
pub fn security_headers() -> [SecurityHeader; 9] {
    [
        SecurityHeader {
            name: STRICT_TRANSPORT_SECURITY,
            key: "Strict-Transport-Security",
            value: "max-age=31536000; includeSubdomains; preload",
        },
        SecurityHeader {
            name: CONTENT_SECURITY_POLICY,
            key: "Content-Security-Policy",
            value: "default-src 'none'; font-src 'self'; img-src 'self' data: https:; \
                    script-src 'self' 'sha256-ZUBnUDfsX/mhVi0F0de6Opxnc1S4t7vaSqZs0/XW+R0=' \
                    'sha256-AcZHBRd1XuxlEnarbX/geO9CkqhjUcvk6yLPqe+p2Nw=' \
                    'sha256-0HI3nX1RARjFCqzL9ivUeKOYwI+pzT3ArGHEWpZvntE='; \
                    style-src 'self' 'unsafe-inline'; object-src 'self' data: blob:; frame-src 'self'",
        },
        SecurityHeader {
            name: FEATURE_POLICY,
            key: "Feature-Policy",
            value: "geolocation 'none'; ",
        },
        SecurityHeader {
            name: X_CONTENT_TYPE_OPTIONS,
            key: "X-Content-Type-Options",
            value: "nosniff",
        },
        SecurityHeader {
            name: X_FRAME_OPTIONS,
            key: "X-Frame-Options",
            value: "DENY",
        },
        SecurityHeader {
            name: X_XSS_PROTECTION,
            key: "X-XSS-Protection",
            value: "1; mode=block",
        },
        SecurityHeader {
            name: REFERRER_POLICY,
            key: "Referrer-Policy",
            value: "same-origin",
        },
        SecurityHeader {
            name: X_POWERED_BY,
            key: "X-Powered-By",
            value: "coffee and craft brews",
        },
        SecurityHeader {
            name: SERVER,
            key: "Server",
            value: "starlink",
        },
    ]
}

/// Prebuilt header entries, ready to be copied into each response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityHeaderSet {
    entries: Vec<(String, HeaderEntry)>,
}

impl SecurityHeaderSet {
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(map key, entry)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HeaderEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Insert every header, replacing any existing list under the same name.
    ///
    /// Headers outside the set are left alone.
    pub fn apply(&self, headers: &mut EdgeHeaders) {
        for (name, entry) in &self.entries {
            headers.insert(name.clone(), vec![entry.clone()]);
        }
    }
}

/// Build the header set once at start-up.
///
/// Returns an `Arc` so the set can be shared by every invocation the process
/// serves.
#[must_use]
pub fn build_security_headers() -> Arc<SecurityHeaderSet> {
    let entries = security_headers()
        .into_iter()
        .map(|header| {
            (
                header.name.as_str().to_string(),
                HeaderEntry::new(header.key, header.value),
            )
        })
        .collect();

    Arc::new(SecurityHeaderSet { entries })
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn test_build_security_headers_has_nine_entries() {
        let headers = build_security_headers();
        assert_eq!(headers.len(), 9);

        let names: Vec<&str> = headers.iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            vec![
                "strict-transport-security",
                "content-security-policy",
                "feature-policy",
                "x-content-type-options",
                "x-frame-options",
                "x-xss-protection",
                "referrer-policy",
                "x-powered-by",
                "server",
            ]
        );
    }

    #[test]
    fn test_map_keys_are_lowercased_display_keys() {
        for header in security_headers() {
            assert_eq!(header.name.as_str(), header.key.to_ascii_lowercase());
        }
    }

    #[test]
    fn test_values_are_valid_header_values() {
        for header in security_headers() {
            assert!(
                HeaderValue::from_str(header.value).is_ok(),
                "{} has an invalid value",
                header.key
            );
        }
    }

    #[test]
    fn test_exact_values() {
        let headers = build_security_headers();
        let value = |name: &str| {
            headers
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, entry)| entry.value.clone())
        };

        assert_eq!(
            value("strict-transport-security").as_deref(),
            Some("max-age=31536000; includeSubdomains; preload")
        );
        assert_eq!(
            value("content-security-policy").as_deref(),
            Some(
                "default-src 'none'; font-src 'self'; img-src 'self' data: https:; script-src 'self' 'sha256-ZUBnUDfsX/mhVi0F0de6Opxnc1S4t7vaSqZs0/XW+R0=' 'sha256-AcZHBRd1XuxlEnarbX/geO9CkqhjUcvk6yLPqe+p2Nw=' 'sha256-0HI3nX1RARjFCqzL9ivUeKOYwI+pzT3ArGHEWpZvntE='; style-src 'self' 'unsafe-inline'; object-src 'self' data: blob:; frame-src 'self'"
            )
        );
        assert_eq!(value("feature-policy").as_deref(), Some("geolocation 'none'; "));
        assert_eq!(value("x-content-type-options").as_deref(), Some("nosniff"));
        assert_eq!(value("x-frame-options").as_deref(), Some("DENY"));
        assert_eq!(value("x-xss-protection").as_deref(), Some("1; mode=block"));
        assert_eq!(value("referrer-policy").as_deref(), Some("same-origin"));
        assert_eq!(value("x-powered-by").as_deref(), Some("coffee and craft brews"));
        assert_eq!(value("server").as_deref(), Some("starlink"));
    }

    #[test]
    fn test_apply_overwrites_existing_frame_options() {
        let mut headers = EdgeHeaders::new();
        headers.insert(
            "x-frame-options".into(),
            vec![HeaderEntry::new("X-Frame-Options", "SAMEORIGIN")],
        );

        build_security_headers().apply(&mut headers);

        assert_eq!(
            headers["x-frame-options"],
            vec![HeaderEntry::new("X-Frame-Options", "DENY")]
        );
    }

    #[test]
    fn test_apply_collapses_multi_value_lists() {
        let mut headers = EdgeHeaders::new();
        headers.insert(
            "server".into(),
            vec![
                HeaderEntry::new("Server", "AmazonS3"),
                HeaderEntry::new("Server", "nginx"),
            ],
        );

        build_security_headers().apply(&mut headers);

        assert_eq!(headers["server"], vec![HeaderEntry::new("Server", "starlink")]);
    }
}
