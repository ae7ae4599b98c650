use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

pub const SEED_ENV: &str = "WIZARD_SEED";
pub const REPORT_ENV: &str = "WIZARD_REPORT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct SessionConfig {
    #[serde(default)]
    pub battle: BattleConfig,
    #[serde(default)]
    pub report: Option<ReportConfig>,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl SessionConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&data)
    }

    pub fn from_toml_str(data: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(data)?)
    }

    /// Applies `WIZARD_SEED` / `WIZARD_REPORT` from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(raw) = lookup(SEED_ENV) {
            match raw.trim().parse() {
                Ok(seed) => self.battle.seed = Some(seed),
                Err(_) => warn!(
                    target: "wizard_session.config",
                    var = SEED_ENV,
                    value = %raw,
                    "ignoring unparseable seed override"
                ),
            }
        }
        if let Some(raw) = lookup(REPORT_ENV) {
            if raw.trim().is_empty() {
                warn!(
                    target: "wizard_session.config",
                    var = REPORT_ENV,
                    "ignoring empty report override"
                );
            } else {
                self.set_report_path(PathBuf::from(raw));
            }
        }
    }

    /// Points the report at `path`, keeping any other report settings.
    pub fn set_report_path(&mut self, path: PathBuf) {
        match self.report.as_mut() {
            Some(report) => report.path = path,
            None => {
                self.report = Some(ReportConfig {
                    path,
                    include_events: default_include_events(),
                })
            }
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct BattleConfig {
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub path: PathBuf,
    #[serde(default = "default_include_events")]
    pub include_events: bool,
}

fn default_include_events() -> bool {
    true
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    #[serde(default)]
    pub enable_trace: Option<bool>,
    #[serde(default)]
    pub trace_filter: Option<String>,
}

impl TelemetryConfig {
    /// Filter directive to install when tracing is switched on in config.
    pub fn filter(&self) -> Option<&str> {
        if self.enable_trace.unwrap_or(false) {
            Some(self.trace_filter.as_deref().unwrap_or("info"))
        } else {
            None
        }
    }
}
