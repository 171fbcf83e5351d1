use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::UrlError;
use crate::url_model::{DomainLevel, SuffixTable};

/// Global configuration loaded from `~/.config/urlkit/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlkitConfig {
    /// Domain level used when `urlkit domain` gets no `--level` (0, 1 or 2).
    #[serde(default)]
    pub default_level: DomainLevel,
    /// Two-label public suffixes recognized on top of the builtin list, e.g. `"co.cr"`.
    #[serde(default)]
    pub extra_suffixes: Vec<String>,
}

impl UrlkitConfig {
    /// Builtin suffix table extended with `extra_suffixes`.
    pub fn suffix_table(&self) -> Result<SuffixTable, UrlError> {
        SuffixTable::with_extra(&self.extra_suffixes)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlkit")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlkitConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrlkitConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<UrlkitConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: UrlkitConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = UrlkitConfig::default();
        assert_eq!(cfg.default_level, DomainLevel::Name);
        assert!(cfg.extra_suffixes.is_empty());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = UrlkitConfig {
            default_level: DomainLevel::Subdomain,
            extra_suffixes: vec!["co.cr".to_string()],
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: UrlkitConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            default_level = 1
            extra_suffixes = ["co.cr", "com.do"]
        "#;
        let cfg: UrlkitConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.default_level, DomainLevel::Registrable);
        let table = cfg.suffix_table().unwrap();
        assert!(table.contains("co.cr"));
        assert!(table.contains("com.do"));
        assert!(table.contains("com.mx"));
    }

    #[test]
    fn config_toml_empty_uses_defaults() {
        let cfg: UrlkitConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, UrlkitConfig::default());
    }

    #[test]
    fn config_toml_rejects_bad_level() {
        assert!(toml::from_str::<UrlkitConfig>("default_level = 3").is_err());
    }

    #[test]
    fn config_bad_suffix_surfaces_on_table_build() {
        let cfg: UrlkitConfig = toml::from_str(r#"extra_suffixes = ["mx"]"#).unwrap();
        assert_eq!(
            cfg.suffix_table(),
            Err(UrlError::InvalidSuffix("mx".to_string()))
        );
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_level = 2\n").unwrap();
        let cfg = load_from(&path).unwrap();
        assert_eq!(cfg.default_level, DomainLevel::Subdomain);
    }

    #[test]
    fn load_from_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("absent.toml"));
    }
}
