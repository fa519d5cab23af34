mod run_orchestrator;

pub use run_orchestrator::{RunOrchestrator, estimate};
