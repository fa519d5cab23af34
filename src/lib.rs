pub mod config;
pub mod error;
pub mod persistence;
pub mod sampling;
pub mod session;
pub mod statistics;
pub mod tasks;
pub mod ui;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use config::{AnimationLevel, EstimationConfig, StdDevKind};
pub use error::{EstimationError, Result};
pub use session::{CancellationToken, Notification, SessionResult};
pub use tasks::{RunOrchestrator, estimate};
