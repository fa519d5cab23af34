mod cancellation;
mod notification;
mod result;
mod session;
mod sink;

pub use cancellation::CancellationToken;
pub use notification::{Notification, NotificationKind, NotificationScope};
pub use result::{LogOutcome, SessionResult, SessionTuple};
pub use session::{Session, SessionState, TIMESTAMP_FORMAT};
pub use sink::ProgressSink;
