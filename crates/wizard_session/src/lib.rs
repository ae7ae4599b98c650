pub mod config;
pub mod report;
pub mod session;

use thiserror::Error;
use wizard_core::ConsoleError;

pub use config::{BattleConfig, ConfigError, ReportConfig, SessionConfig, TelemetryConfig};
pub use report::{BattleReport, CombatantSummary, ReportSummary};
pub use session::run_session;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Console(#[from] ConsoleError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("report I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("report JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),
}
