use crate::case::Case;
use crate::cli::output::OutputFormat;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".stringcase.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Case used when none is given on the command line
    pub default_case: Option<Case>,

    pub format: OutputFormat,

    pub color: bool,

    /// Drop blank lines read from stdin instead of echoing them
    pub skip_empty_lines: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_case: None,
            format: OutputFormat::Text,
            color: true,
            skip_empty_lines: false,
        }
    }
}

/// One config file as written: only the keys it actually sets
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    pub default_case: Option<Case>,
    pub format: Option<OutputFormat>,
    pub color: Option<bool>,
    pub skip_empty_lines: Option<bool>,
}

impl ConfigLayer {
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

impl Config {
    /// Load configuration with priority: explicit file > local config > global config > defaults.
    /// CLI flags are applied on top by the caller.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                tracing::debug!("Loading global config from {}", global_path.display());
                config = config.merge(ConfigLayer::from_file(&global_path)?);
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            tracing::debug!("Loading local config from {}", local_path.display());
            config = config.merge(ConfigLayer::from_file(&local_path)?);
        }

        if let Some(path) = explicit {
            tracing::debug!("Loading config from {}", path.display());
            config = config.merge(ConfigLayer::from_file(path)?);
        }

        Ok(config)
    }

    /// A single file layered over the defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::default().merge(ConfigLayer::from_file(path)?))
    }

    /// Keys present in `layer` win, absent ones keep the current value
    fn merge(mut self, layer: ConfigLayer) -> Self {
        if let Some(case) = layer.default_case {
            self.default_case = Some(case);
        }
        if let Some(format) = layer.format {
            self.format = format;
        }
        if let Some(color) = layer.color {
            self.color = color;
        }
        if let Some(skip) = layer.skip_empty_lines {
            self.skip_empty_lines = skip;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "stringcase").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.default_case, None);
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.color);
        assert!(!config.skip_empty_lines);
    }

    #[test]
    fn test_merge_configs() {
        let base = Config {
            default_case: Some(Case::Snake),
            ..Default::default()
        };
        let layer = ConfigLayer {
            color: Some(false),
            ..Default::default()
        };

        let merged = base.merge(layer);
        assert_eq!(merged.default_case, Some(Case::Snake));
        assert!(!merged.color);
    }

    #[test]
    fn test_later_layer_restores_defaults() {
        let dir = tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let explicit = dir.path().join("explicit.toml");
        fs::write(&global, "color = false\nformat = \"json\"\nskip_empty_lines = true\n").unwrap();
        fs::write(&explicit, "color = true\nformat = \"text\"\nskip_empty_lines = false\n").unwrap();

        let merged = Config::default()
            .merge(ConfigLayer::from_file(&global).unwrap())
            .merge(ConfigLayer::from_file(&explicit).unwrap());
        assert!(merged.color);
        assert_eq!(merged.format, OutputFormat::Text);
        assert!(!merged.skip_empty_lines);
    }

    #[test]
    fn test_absent_keys_keep_earlier_layer() {
        let earlier = ConfigLayer {
            default_case: Some(Case::Title),
            color: Some(false),
            ..Default::default()
        };
        let later = ConfigLayer {
            format: Some(OutputFormat::Json),
            ..Default::default()
        };

        let merged = Config::default().merge(earlier).merge(later);
        assert_eq!(merged.default_case, Some(Case::Title));
        assert!(!merged.color);
        assert_eq!(merged.format, OutputFormat::Json);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "colour = false\n").unwrap();
        assert!(ConfigLayer::from_file(&path).is_err());
    }

    #[test]
    fn test_partial_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_case = \"kebab\"\nformat = \"json\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.default_case, Some(Case::Spinal));
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.color);
    }

    #[test]
    fn test_unknown_case_in_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_case = \"wobbly\"\n").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = tempdir().unwrap();
        assert!(Config::load(Some(&dir.path().join("absent.toml"))).is_err());
    }
}
