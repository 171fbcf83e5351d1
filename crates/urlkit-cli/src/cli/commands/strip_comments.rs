//! Strip-comments command: drop HTML comments from markup.

use anyhow::{Context, Result};
use std::io::{self, Read, Write};
use std::path::Path;
use urlkit_core::markup::remove_html_comments;

pub fn run_strip_comments(path: Option<&Path>) -> Result<()> {
    let markup = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading markup from stdin")?;
            buf
        }
    };

    let stripped = remove_html_comments(&markup);
    tracing::debug!(
        "stripped {} bytes of comments",
        markup.len() - stripped.len()
    );

    let mut stdout = io::stdout().lock();
    stdout.write_all(stripped.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
