//! Inspect command: root URL and every domain level of a URL.

use anyhow::Result;
use urlkit_core::config::UrlkitConfig;
use urlkit_core::report::UrlReport;

pub fn run_inspect(cfg: &UrlkitConfig, url: &str, json: bool) -> Result<()> {
    let table = cfg.suffix_table()?;
    let report = UrlReport::build(url, &table);
    if json {
        println!("{}", report.to_json_pretty()?);
    } else {
        print!("{}", format_table(&report));
    }
    Ok(())
}

fn format_table(report: &UrlReport) -> String {
    let rows = [
        ("url", &report.url),
        ("root", &report.root),
        ("level 0", &report.name),
        ("level 1", &report.registrable),
        ("level 2", &report.subdomain),
    ];
    rows.iter()
        .map(|(label, value)| format!("{:<8} {}\n", label, value))
        .collect()
}
