use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

/// Environment variable carrying the provider credential, read both at build
/// time and at runtime.
pub const API_KEY_ENV: &str = "WEATHER_API_KEY";

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const DEFAULT_ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

/// Credential baked in when the binary was compiled, if any.
const BUILD_TIME_API_KEY: Option<&str> = option_env!("WEATHER_API_KEY");

/// Configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// base_url = "https://api.openweathermap.org/data/2.5/weather"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub icon_base_url: Option<String>,
}

/// Effective settings after all sources have been merged.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// May be empty; the provider then rejects the request and that
    /// rejection is what the user sees.
    pub api_key: String,
    pub base_url: String,
    pub icon_base_url: String,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-now", "weather-now")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    /// Merge with the process environment and the build-time credential.
    pub fn settings(&self) -> Settings {
        self.resolve(env::var(API_KEY_ENV).ok(), BUILD_TIME_API_KEY)
    }

    /// Precedence for the key: runtime env, config file, build time, empty.
    /// Blank values are skipped.
    pub fn resolve(&self, runtime_key: Option<String>, build_key: Option<&str>) -> Settings {
        let api_key = runtime_key
            .filter(|k| !k.trim().is_empty())
            .or_else(|| self.api_key.clone().filter(|k| !k.trim().is_empty()))
            .or_else(|| build_key.filter(|k| !k.trim().is_empty()).map(str::to_owned))
            .unwrap_or_default();

        Settings {
            api_key,
            base_url: self
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            icon_base_url: self
                .icon_base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_ICON_BASE_URL.to_string()),
        }
    }
}
