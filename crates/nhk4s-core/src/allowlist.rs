//! Navigation allow-list.
//!
//! The screen only shows one site. Link clicks that leave the configured
//! domains are dropped before they reach the rendering surface.

/// Scheme and host of a URL; everything after the authority is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlOrigin {
    /// Lowercased scheme (`"https"`).
    pub scheme: String,
    /// Lowercased host without port, userinfo or trailing dot.
    pub host: String,
}

impl UrlOrigin {
    /// Parse the origin of an absolute `scheme://host[:port]/...` URL.
    ///
    /// Returns `None` for relative references and URLs without a host.
    pub fn parse(url: &str) -> Option<Self> {
        let url = url.trim();
        let idx = url.find("://")?;
        let scheme = &url[..idx];
        if scheme.is_empty() {
            return None;
        }
        let rest = &url[idx + 3..];

        // Web browsers also end the authority at a backslash.
        let end = rest.find(['/', '\\', '?', '#']).unwrap_or(rest.len());
        let authority = &rest[..end];
        let authority = match authority.rfind('@') {
            Some(i) => &authority[i + 1..],
            None => authority,
        };

        let host = match authority.rfind(':') {
            Some(i) if authority[i + 1..].parse::<u16>().is_ok() => &authority[..i],
            _ => authority,
        };

        let host = host.trim_end_matches('.').to_ascii_lowercase();
        if host.is_empty() {
            return None;
        }

        Some(UrlOrigin {
            scheme: scheme.to_ascii_lowercase(),
            host,
        })
    }
}

/// Static list of domains the screen may navigate to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AllowList {
    domains: Vec<String>,
}

impl AllowList {
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let domains = domains
            .into_iter()
            .map(|d| d.as_ref().trim().trim_end_matches('.').to_ascii_lowercase())
            .filter(|d| !d.is_empty())
            .collect();
        Self { domains }
    }

    /// Whether `host` equals an allowed domain or is a subdomain of one.
    /// Comparison ignores case.
    pub fn matches_host(&self, host: &str) -> bool {
        let host = host.trim_end_matches('.').to_ascii_lowercase();
        self.domains.iter().any(|domain| {
            host == *domain
                || host
                    .strip_suffix(domain.as_str())
                    .is_some_and(|prefix| prefix.ends_with('.'))
        })
    }

    /// Whether the screen may load `url`. Only web URLs on an allowed host
    /// pass.
    pub fn is_allowed(&self, url: &str) -> bool {
        let Some(origin) = UrlOrigin::parse(url) else {
            return false;
        };
        matches!(origin.scheme.as_str(), "http" | "https") && self.matches_host(&origin.host)
    }
}
