//! Suffixes command: list the active compound suffix table.

use anyhow::Result;
use urlkit_core::config::UrlkitConfig;

/// Print builtin plus configured two-label suffixes, one per line.
pub fn run_suffixes(cfg: &UrlkitConfig) -> Result<()> {
    let table = cfg.suffix_table()?;
    let mut count = 0usize;
    for suffix in table.iter() {
        println!("{suffix}");
        count += 1;
    }
    tracing::debug!("listed {} compound suffixes", count);
    Ok(())
}
