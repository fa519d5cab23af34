pub mod cancel_sinks;
pub mod recording_sink;
pub mod scripted_driver;
pub mod slow_sink;

pub use cancel_sinks::{CancelAfterRuns, CancelOnBatch};
pub use recording_sink::{RecordingHandle, RecordingSink};
pub use scripted_driver::ScriptedDriver;
pub use slow_sink::SlowBatches;
