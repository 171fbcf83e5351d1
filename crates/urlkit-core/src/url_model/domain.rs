//! Domain extraction at a requested specificity level.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::host::{domain_host, parse_absolute, strip_www};
use super::suffix::SuffixTable;
use crate::error::UrlError;

/// How much of the host to keep, relative to the public suffix.
///
/// Serialized as its integer form (0, 1, 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DomainLevel {
    /// Label left of the suffix: `dolimed`.
    #[default]
    Name,
    /// Name plus suffix: `dolimed.com`, `dolimed.com.mx`.
    Registrable,
    /// One more subdomain label: `with.dolimed.com`.
    Subdomain,
}

impl DomainLevel {
    pub fn as_u8(self) -> u8 {
        match self {
            DomainLevel::Name => 0,
            DomainLevel::Registrable => 1,
            DomainLevel::Subdomain => 2,
        }
    }
}

impl TryFrom<u8> for DomainLevel {
    type Error = UrlError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(DomainLevel::Name),
            1 => Ok(DomainLevel::Registrable),
            2 => Ok(DomainLevel::Subdomain),
            other => Err(UrlError::InvalidLevel(other)),
        }
    }
}

impl From<DomainLevel> for u8 {
    fn from(level: DomainLevel) -> Self {
        level.as_u8()
    }
}

impl fmt::Display for DomainLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// Extracts the domain of `url` using the builtin suffix table.
///
/// - `domain_from_url("http://www.dolimed.com/a", DomainLevel::Name)` → `"dolimed"`
/// - `domain_from_url("https://www.with.dolimed.com.mx", DomainLevel::Registrable)` → `"dolimed.com.mx"`
/// - `domain_from_url("http://localhost", DomainLevel::Subdomain)` → `"localhost"`
pub fn domain_from_url(url: &str, level: DomainLevel) -> String {
    domain_from_url_with(url, level, SuffixTable::builtin())
}

/// Extracts the domain of `url` using a caller-supplied suffix table.
///
/// Input that does not parse as an absolute URL with a host is returned
/// unchanged. Single-label and IP-literal hosts are returned as-is at every
/// level. When the host has no label left of the name,
/// [`DomainLevel::Subdomain`] yields the [`DomainLevel::Registrable`] result.
pub fn domain_from_url_with(url: &str, level: DomainLevel, suffixes: &SuffixTable) -> String {
    let Some(parsed) = parse_absolute(url) else {
        return url.to_string();
    };
    let Some(host) = domain_host(&parsed) else {
        return parsed.host_str().unwrap_or_default().to_string();
    };
    split_levels(strip_www(host), level, suffixes).to_string()
}

fn split_levels<'a>(host: &'a str, level: DomainLevel, suffixes: &SuffixTable) -> &'a str {
    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() < 2 {
        return host;
    }

    let suffix_len = suffixes.suffix_label_count(&labels);
    let name_index = labels.len() - suffix_len - 1;

    let start = match level {
        DomainLevel::Name => return labels[name_index],
        DomainLevel::Registrable => name_index,
        DomainLevel::Subdomain => name_index.saturating_sub(1),
    };

    // Labels are contiguous in `host`, so the result is a suffix of it.
    let offset: usize = labels[..start].iter().map(|l| l.len() + 1).sum();
    &host[offset..]
}
