mod error;
mod session_plan;

pub use error::BuildError;
pub use session_plan::{SessionPlan, build_plan};
