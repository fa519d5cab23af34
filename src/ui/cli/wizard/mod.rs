mod session_wizard;
mod wizard;

pub use session_wizard::{WizardOutcome, configure_session, settings_defaults};
pub use wizard::prompt_choice_with;
