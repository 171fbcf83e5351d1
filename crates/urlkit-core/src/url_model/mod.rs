//! URL modeling: root URL and domain extraction.
//!
//! Inputs are absolute URLs (`scheme://host[/path][?query][#fragment]`),
//! parsed with the `url` crate. Strings it rejects, or that carry no host,
//! are passed through unchanged by every function here.

mod domain;
mod host;
mod suffix;

pub use domain::{domain_from_url, domain_from_url_with, DomainLevel};
pub use host::{domain_host, parse_absolute, strip_www};
pub use suffix::{SuffixTable, BUILTIN_COMPOUND_SUFFIXES};

use url::Position;

/// Returns `scheme://authority` of `url`, dropping path, query and fragment.
///
/// Scheme and host come back in the parser's normalized form (lowercase,
/// default port omitted).
///
/// # Examples
///
/// - `root_url("http://www.dolimed.com/screenshots/afile")` → `"http://www.dolimed.com"`
/// - `root_url("https://www.dolimed.com/")` → `"https://www.dolimed.com"`
/// - `root_url("www.dolimed.com/x")` → `"www.dolimed.com/x"` (no scheme)
pub fn root_url(url: &str) -> String {
    match parse_absolute(url) {
        Some(parsed) => parsed[..Position::BeforePath].to_string(),
        None => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_url_drops_path() {
        assert_eq!(
            root_url("http://www.dolimed.com/screenshots/afile"),
            "http://www.dolimed.com"
        );
        assert_eq!(
            root_url("https://www.dolimed.com/screenshots"),
            "https://www.dolimed.com"
        );
    }

    #[test]
    fn root_url_drops_trailing_slash() {
        assert_eq!(root_url("http://www.dolimed.com/"), "http://www.dolimed.com");
        assert_eq!(root_url("https://www.dolimed.com/"), "https://www.dolimed.com");
    }

    #[test]
    fn root_url_without_path_unchanged() {
        assert_eq!(root_url("http://www.dolimed.com"), "http://www.dolimed.com");
        assert_eq!(root_url("https://localhost"), "https://localhost");
    }

    #[test]
    fn root_url_drops_query_and_fragment() {
        assert_eq!(root_url("https://dolimed.com?lang=fr"), "https://dolimed.com");
        assert_eq!(root_url("https://dolimed.com#top"), "https://dolimed.com");
    }

    #[test]
    fn root_url_keeps_port_and_userinfo() {
        assert_eq!(
            root_url("https://user@dolimed.com:8443/index.php?x=1"),
            "https://user@dolimed.com:8443"
        );
    }

    #[test]
    fn root_url_normalizes_case_and_default_port() {
        assert_eq!(root_url("HTTPS://WWW.Dolimed.com:443/x"), "https://www.dolimed.com");
    }

    #[test]
    fn root_url_treats_backslash_as_path() {
        assert_eq!(
            root_url("http://www.dolimed.com\\screenshots\\afile"),
            "http://www.dolimed.com"
        );
    }

    #[test]
    fn root_url_ignores_surrounding_whitespace() {
        assert_eq!(root_url(" https://www.dolimed.com/x"), "https://www.dolimed.com");
    }

    #[test]
    fn root_url_passes_through_without_scheme() {
        assert_eq!(root_url("http://"), "http://");
        assert_eq!(root_url(""), "");
        assert_eq!(root_url("www.dolimed.com/x"), "www.dolimed.com/x");
        assert_eq!(root_url("/relative/path"), "/relative/path");
    }
}
