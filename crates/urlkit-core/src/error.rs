//! Error types for the URL helpers.

use thiserror::Error;

/// Errors raised while building domain-level or suffix-table inputs.
///
/// The extraction functions themselves never fail; these only surface when
/// turning caller-supplied values (CLI flags, config entries) into typed inputs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlError {
    /// Domain level outside 0..=2.
    #[error("invalid domain level {0}: expected 0, 1 or 2")]
    InvalidLevel(u8),

    /// Compound suffix entry that is not exactly two non-empty labels.
    #[error("invalid compound suffix {0:?}: expected two dot-separated labels like \"com.mx\"")]
    InvalidSuffix(String),
}
