mod control;
mod progress_renderer;
mod report;

pub use control::{spawn_stdin_watch, watch_for_stop};
pub use progress_renderer::{ProgressRenderer, RenderStats};
pub use report::{format_elapsed, format_summary};
