// src/infra/config.rs — Configuration loading (YAML)

use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::path::Path;

use crate::core::theme::ThemeRule;
use crate::infra::errors::BarError;
use crate::infra::paths;
use crate::widgets::types::WidgetSpec;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Seconds between frames.
    #[serde(default = "default_interval", deserialize_with = "de_seconds")]
    pub interval: u64,

    /// Seconds between checks of the active netctl profile.
    #[serde(
        default = "default_netctl_check_interval",
        deserialize_with = "de_seconds"
    )]
    pub netctl_check_interval: u64,

    /// Widget set used when no profile-specific set applies.
    #[serde(default)]
    pub widgets: Vec<WidgetSpec>,

    /// Alternate widget sets keyed by netctl profile name.
    #[serde(default)]
    pub widgets_netctl: Option<HashMap<String, Vec<WidgetSpec>>>,

    /// Presentation rules keyed by block name.
    #[serde(default)]
    pub theme: HashMap<String, ThemeRule>,

    /// Directory containing `icons/`. Defaults to the binary's directory.
    #[serde(default)]
    pub icon_path: Option<String>,

    /// Replace failing widgets with an error block and keep the previous
    /// widget set when re-resolution fails, instead of stopping the bar.
    #[serde(default)]
    pub isolate_failures: bool,
}

fn default_interval() -> u64 {
    2
}

fn default_netctl_check_interval() -> u64 {
    30
}

/// A whole number of seconds, written either as an integer or a numeric string.
fn de_seconds<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Seconds {
        Number(u64),
        Text(String),
    }

    match Seconds::deserialize(deserializer) {
        Ok(Seconds::Number(n)) => Ok(n),
        Ok(Seconds::Text(s)) => s.trim().parse().map_err(|_| {
            serde::de::Error::custom(format!("'{s}' is not a whole number of seconds"))
        }),
        Err(_) => Err(serde::de::Error::custom(
            "expected a whole number of seconds",
        )),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interval: default_interval(),
            netctl_check_interval: default_netctl_check_interval(),
            widgets: Vec::new(),
            widgets_netctl: None,
            theme: HashMap::new(),
            icon_path: None,
            isolate_failures: false,
        }
    }
}

impl Config {
    /// Load from an explicit path, or search the standard locations.
    pub fn load(explicit: Option<&Path>) -> Result<Self, BarError> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => Self::load_from(&paths::config_file_path()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, BarError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| BarError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        let config = Self::from_yaml(&content)
            .map_err(|e| BarError::Config(format!("{}: {}", path.display(), strip_prefix(e))))?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self, BarError> {
        let config: Config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yml::from_str(content).map_err(|e| BarError::Config(e.to_string()))?
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), BarError> {
        if self.interval == 0 {
            return Err(BarError::Config("interval must be at least 1 second".into()));
        }
        if self.netctl_check_interval == 0 {
            return Err(BarError::Config(
                "netctl_check_interval must be at least 1 second".into(),
            ));
        }
        for (name, rule) in &self.theme {
            rule.validate()
                .map_err(|e| BarError::Config(format!("theme '{name}': {e}")))?;
        }
        Ok(())
    }
}

fn strip_prefix(e: BarError) -> String {
    match e {
        BarError::Config(msg) => msg,
        other => other.to_string(),
    }
}
