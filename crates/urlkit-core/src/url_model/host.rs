//! Absolute URL parsing and host helpers on top of the `url` crate.

use url::{Host, Url};

/// Parses `url` as an absolute URL with a non-empty host.
///
/// Returns `None` for relative input, parse failures and host-less URLs
/// (`mailto:`, `data:`), which callers pass through unchanged.
pub fn parse_absolute(url: &str) -> Option<Url> {
    match Url::parse(url) {
        Ok(parsed) if parsed.host_str().is_some_and(|h| !h.is_empty()) => Some(parsed),
        Ok(_) => {
            tracing::trace!("no host in {:?}, passing through", url);
            None
        }
        Err(e) => {
            tracing::trace!("cannot parse {:?} ({}), passing through", url, e);
            None
        }
    }
}

/// Domain name of a parsed URL without its trailing dot.
///
/// `None` for IPv4 and IPv6 hosts, which have no domain levels.
pub fn domain_host(parsed: &Url) -> Option<&str> {
    match parsed.host()? {
        Host::Domain(domain) => Some(domain.strip_suffix('.').unwrap_or(domain)),
        Host::Ipv4(_) | Host::Ipv6(_) => None,
    }
}

/// Removes one leading `www.` (ASCII case-insensitive).
pub fn strip_www(host: &str) -> &str {
    match host.get(..4) {
        Some(prefix) if prefix.eq_ignore_ascii_case("www.") => &host[4..],
        _ => host,
    }
}
