mod session_log;
mod settings;

pub use session_log::{log_file_name, write_session_log};
pub use settings::{SETTINGS_FILE_NAME, Settings};
