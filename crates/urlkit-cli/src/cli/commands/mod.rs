//! CLI command handlers, one per file.

mod domain;
mod inspect;
mod root;
mod strip_comments;
mod suffixes;

pub use domain::run_domain;
pub use inspect::run_inspect;
pub use root::run_root;
pub use strip_comments::run_strip_comments;
pub use suffixes::run_suffixes;
