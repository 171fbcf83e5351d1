//! Known two-label public suffixes (`com.mx`, `co.uk`, ...).
//!
//! The table is plain data: extending it never touches the parsing code in
//! [`super::domain`]. Config files add entries through [`SuffixTable::with_extra`].

use std::collections::BTreeSet;
use std::sync::OnceLock;

use crate::error::UrlError;

/// Two-label suffixes recognized out of the box.
pub const BUILTIN_COMPOUND_SUFFIXES: &[&str] = &[
    "ac.uk", "co.uk", "gov.uk", "ltd.uk", "me.uk", "net.uk", "org.uk", "plc.uk",
    "co.at", "gv.at", "or.at",
    "com.au", "edu.au", "gov.au", "net.au", "org.au",
    "co.jp", "ne.jp", "or.jp",
    "co.nz", "net.nz", "org.nz",
    "co.za", "org.za",
    "co.in", "co.kr", "co.il", "co.id", "co.th",
    "com.ar", "com.bo", "com.br", "com.cn", "com.co", "com.ec", "com.es", "com.gt",
    "com.hk", "com.mx", "com.my", "com.pe", "com.ph", "com.pl", "com.py", "com.sg",
    "com.tr", "com.tw", "com.ua", "com.uy", "com.ve",
    "edu.mx", "gob.mx", "net.mx", "org.mx",
    "gob.ar", "net.ar", "org.ar",
    "net.br", "org.br",
];

/// Set of lowercase two-label suffixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixTable {
    entries: BTreeSet<String>,
}

impl SuffixTable {
    /// Shared table built from [`BUILTIN_COMPOUND_SUFFIXES`].
    pub fn builtin() -> &'static SuffixTable {
        static BUILTIN: OnceLock<SuffixTable> = OnceLock::new();
        BUILTIN.get_or_init(|| SuffixTable {
            entries: BUILTIN_COMPOUND_SUFFIXES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        })
    }

    /// Builtin table plus `extra` entries.
    ///
    /// Entries are trimmed, lowercased and may carry a leading dot
    /// (`".com.mx"`). Anything other than two non-empty labels is rejected.
    pub fn with_extra<I, S>(extra: I) -> Result<Self, UrlError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::builtin().clone();
        for raw in extra {
            let entry = normalize_entry(raw.as_ref())?;
            if table.entries.insert(entry.clone()) {
                tracing::debug!("added compound suffix {}", entry);
            }
        }
        Ok(table)
    }

    /// True when `suffix` (e.g. `"COM.mx"`) is in the table.
    pub fn contains(&self, suffix: &str) -> bool {
        self.entries.contains(&suffix.to_ascii_lowercase())
    }

    /// Number of trailing labels of `labels` that form the public suffix.
    ///
    /// Two when the last two labels are a known compound suffix and at least
    /// one label precedes them, one otherwise.
    pub fn suffix_label_count(&self, labels: &[&str]) -> usize {
        let n = labels.len();
        if n >= 3 && self.contains(&format!("{}.{}", labels[n - 2], labels[n - 1])) {
            2
        } else {
            1
        }
    }

    /// Entries in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

impl Default for SuffixTable {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

fn normalize_entry(raw: &str) -> Result<String, UrlError> {
    let entry = raw.trim().trim_start_matches('.').to_ascii_lowercase();
    let labels: Vec<&str> = entry.split('.').collect();
    let well_formed = labels.len() == 2
        && labels
            .iter()
            .all(|l| !l.is_empty() && !l.chars().any(char::is_whitespace));
    if well_formed {
        Ok(entry)
    } else {
        Err(UrlError::InvalidSuffix(raw.to_string()))
    }
}
