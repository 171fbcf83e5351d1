//! Root URL and domain extraction plus HTML comment stripping.
//!
//! The three entry points are pure string functions:
//!
//! - [`url_model::root_url`]: `scheme://host` of a URL
//! - [`url_model::domain_from_url`]: registrable name, optionally with suffix
//!   and one subdomain label
//! - [`markup::remove_html_comments`]: drop `<!-- ... -->` blocks
//!
//! [`config`] and [`logging`] carry the application-side setup used by the CLI.

pub mod config;
pub mod error;
pub mod logging;
pub mod markup;
pub mod report;
pub mod url_model;

pub use error::UrlError;
pub use markup::remove_html_comments;
pub use url_model::{domain_from_url, domain_from_url_with, root_url, DomainLevel, SuffixTable};
