use anyhow::{Context, Result};
use homevalue_core::PropertyType;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::{ensure_homevalue_home, homevalue_home};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub display: DisplaySection,
    pub property: PropertySection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySection {
    /// Prefix for currency amounts
    pub currency_symbol: String,
    /// Emit JSON instead of text unless overridden on the command line
    pub json: bool,
    /// Show item descriptions on recommendation cards
    pub show_descriptions: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PropertySection {
    /// Property type assumed when none is given
    pub default_type: PropertyType,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            json: false,
            show_descriptions: true,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(homevalue_home()?.join("config.toml"))
}

/// Load config from `path`, falling back to defaults when it doesn't exist
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_config(&s).with_context(|| format!("parse {}", path.display()))
}

pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

pub fn parse_config(s: &str) -> Result<Config> {
    Ok(toml::from_str(s)?)
}

pub fn save_config(cfg: &Config) -> Result<PathBuf> {
    let p = ensure_homevalue_home()?.join("config.toml");
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(p)
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    let written = save_config(&Config::default())?;
    println!("Wrote {}", written.display());
    Ok(())
}

pub fn show_config(cfg: &Config) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    println!("# {}", config_path()?.display());
    print!("{}", s);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.display.currency_symbol, "$");
    }

    #[test]
    fn test_partial_sections() {
        let cfg = parse_config(
            r#"
[display]
currency_symbol = "€"

[property]
default_type = "condo"
"#,
        )
        .unwrap();
        assert_eq!(cfg.display.currency_symbol, "€");
        assert!(cfg.display.show_descriptions);
        assert_eq!(cfg.property.default_type, PropertyType::Condo);
    }

    #[test]
    fn test_rejects_unknown_property_type() {
        assert!(parse_config("[property]\ndefault_type = \"castle\"\n").is_err());
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let cfg = Config::default();
        let s = toml::to_string_pretty(&cfg).unwrap();
        assert_eq!(parse_config(&s).unwrap(), cfg);
    }

    #[test]
    fn test_missing_file_is_default() {
        let cfg = load_config_from(Path::new("/nonexistent/homevalue/config.toml")).unwrap();
        assert_eq!(cfg, Config::default());
    }
}
