use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tripboard_core::model::ViewMode;

use crate::ui::TextFormat;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripboardConfig {
    #[serde(default)]
    pub store: StoreSection,
    #[serde(default)]
    pub output: OutputSection,
}

/// Initial UI state applied to every fresh store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreSection {
    #[serde(default)]
    pub initial_view: ViewMode,
    #[serde(default)]
    pub sidebar_open: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputSection {
    /// Unset picks by terminal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<TextFormat>,
    /// IANA time zone used when printing times; UTC when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl TripboardConfig {
    /// Reject values that parse as TOML but mean nothing to us.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.timezone()?;
        Ok(())
    }

    pub fn timezone(&self) -> anyhow::Result<Option<chrono_tz::Tz>> {
        self.output
            .timezone
            .as_deref()
            .map(|name| {
                name.parse::<chrono_tz::Tz>()
                    .map_err(|e| anyhow::anyhow!("Invalid output.timezone \"{}\": {}", name, e))
            })
            .transpose()
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn read_config(path: &Path) -> anyhow::Result<TripboardConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    let config: TripboardConfig = toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))?;
    config.validate()?;
    Ok(config)
}

/// Read the config at `path`, falling back to defaults when it does not exist.
pub fn read_config_or_default(path: &Path) -> anyhow::Result<TripboardConfig> {
    if path.exists() {
        read_config(path)
    } else {
        tracing::debug!(path = %path.display(), "no config file; using defaults");
        Ok(TripboardConfig::default())
    }
}

pub fn write_config(path: &Path, config: &TripboardConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("tripboard"));
        }
    }
    Ok(home_dir()?.join(".config").join("tripboard"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        let config: TripboardConfig = toml::from_str("").unwrap();
        assert_eq!(config, TripboardConfig::default());
        assert_eq!(config.store.initial_view, ViewMode::List);
    }

    #[test]
    fn parses_sections() {
        let config: TripboardConfig = toml::from_str(
            "[store]\ninitial_view = \"calendar\"\nsidebar_open = true\n\n[output]\nformat = \"plain\"\ntimezone = \"Asia/Tokyo\"\n",
        )
        .unwrap();
        assert_eq!(config.store.initial_view, ViewMode::Calendar);
        assert!(config.store.sidebar_open);
        assert_eq!(config.output.format, Some(TextFormat::Plain));
        assert!(config.validate().is_ok());
        assert_eq!(config.timezone().unwrap(), Some(chrono_tz::Asia::Tokyo));
    }

    #[test]
    fn rejects_unknown_format_and_timezone() {
        assert!(toml::from_str::<TripboardConfig>("[output]\nformat = \"fancy\"\n").is_err());

        let mut config = TripboardConfig::default();
        config.output.timezone = Some("Mars/Olympus".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn default_round_trips_through_toml() {
        let text = toml::to_string_pretty(&TripboardConfig::default()).unwrap();
        let parsed: TripboardConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, TripboardConfig::default());
    }
}
