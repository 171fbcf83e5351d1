//! Per-URL summary of every extraction level.

use serde::Serialize;

use crate::url_model::{domain_from_url_with, root_url, DomainLevel, SuffixTable};

/// Root URL and the domain at each level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlReport {
    pub url: String,
    pub root: String,
    pub name: String,
    pub registrable: String,
    pub subdomain: String,
}

impl UrlReport {
    pub fn build(url: &str, suffixes: &SuffixTable) -> Self {
        Self {
            url: url.to_string(),
            root: root_url(url),
            name: domain_from_url_with(url, DomainLevel::Name, suffixes),
            registrable: domain_from_url_with(url, DomainLevel::Registrable, suffixes),
            subdomain: domain_from_url_with(url, DomainLevel::Subdomain, suffixes),
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
