//! Domain command: print the domain of a URL at a level.

use anyhow::Result;
use urlkit_core::config::UrlkitConfig;
use urlkit_core::url_model::{domain_from_url_with, DomainLevel};

/// `level` overrides `cfg.default_level` when given.
pub fn run_domain(cfg: &UrlkitConfig, url: &str, level: Option<u8>) -> Result<()> {
    let level = match level {
        Some(n) => DomainLevel::try_from(n)?,
        None => cfg.default_level,
    };
    let table = cfg.suffix_table()?;
    tracing::debug!("domain url={} level={}", url, level);
    println!("{}", domain_from_url_with(url, level, &table));
    Ok(())
}
