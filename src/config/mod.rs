use crate::core::settings::{
    DEFAULT_COMPLETION_OFFSET_MINUTES, DEFAULT_GRACE_MINUTES, DEFAULT_PREVIOUS_WINDOW,
    DEFAULT_RATE_PER_MINUTE, DEFAULT_TOLERANCE, EngineSettings, MAX_COMPLETION_OFFSET_MINUTES,
};
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// CSV export of the work sheet
    #[serde(default)]
    pub input: Option<String>,
    #[serde(default = "default_rate")]
    pub rate_per_minute: f64,
    #[serde(default = "default_grace")]
    pub grace_minutes: f64,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default = "default_completion_offset")]
    pub completion_offset_minutes: i64,
    #[serde(default = "default_previous_window")]
    pub previous_window: usize,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_rate() -> f64 {
    DEFAULT_RATE_PER_MINUTE
}
fn default_grace() -> f64 {
    DEFAULT_GRACE_MINUTES
}
fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}
fn default_completion_offset() -> i64 {
    DEFAULT_COMPLETION_OFFSET_MINUTES
}
fn default_previous_window() -> usize {
    DEFAULT_PREVIOUS_WINDOW
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: None,
            rate_per_minute: default_rate(),
            grace_minutes: default_grace(),
            tolerance: default_tolerance(),
            completion_offset_minutes: default_completion_offset(),
            previous_window: default_previous_window(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rpoolboard")
        } else {
            let home = dirs::home_dir()
                .or_else(|| env::var("HOME").ok().map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from("."));
            home.join(".rpoolboard")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rpoolboard.conf")
    }

    /// Load configuration from the standard file, or defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        // An empty file is a valid, all-defaults config
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Create the config directory and a default config file.
    /// An existing file is left untouched; returns whether one was written.
    pub fn init_all(input: Option<String>, is_test: bool) -> AppResult<bool> {
        let path = Self::config_file();
        if is_test || path.exists() {
            return Ok(false);
        }

        fs::create_dir_all(Self::config_dir())?;
        let config = Config {
            input,
            ..Config::default()
        };
        config.save_to(&path)?;
        Ok(true)
    }

    /// Engine tunables taken from this config.
    pub fn engine(&self) -> EngineSettings {
        EngineSettings {
            rate_per_minute: self.rate_per_minute,
            grace_minutes: self.grace_minutes,
            tolerance: self.tolerance,
            completion_offset_minutes: self.completion_offset_minutes,
            previous_window: self.previous_window,
        }
    }

    /// Resolved input path, `~` expanded.
    pub fn input_path(&self) -> Option<PathBuf> {
        self.input
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(expand_tilde)
    }

    /// Human-readable list of invalid values; empty when the config is usable.
    pub fn check(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if !(self.rate_per_minute.is_finite() && self.rate_per_minute > 0.0) {
            problems.push(format!(
                "rate_per_minute must be a positive number (found {}); overdue detection is disabled",
                self.rate_per_minute
            ));
        }
        if !(self.grace_minutes.is_finite() && self.grace_minutes >= 0.0) {
            problems.push(format!(
                "grace_minutes must be >= 0 (found {})",
                self.grace_minutes
            ));
        }
        if !(self.tolerance.is_finite() && self.tolerance >= 0.0) {
            problems.push(format!("tolerance must be >= 0 (found {})", self.tolerance));
        }
        if !(0..=MAX_COMPLETION_OFFSET_MINUTES).contains(&self.completion_offset_minutes) {
            problems.push(format!(
                "completion_offset_minutes must be between 0 and {} (found {})",
                MAX_COMPLETION_OFFSET_MINUTES, self.completion_offset_minutes
            ));
        }
        if let Some(p) = self.input_path()
            && !p.exists()
        {
            problems.push(format!("input file not found: {}", p.display()));
        }

        problems
    }
}
