pub mod clock;
pub mod driver;
pub mod events;
pub mod runtime;
pub mod session;

pub use clock::{ClockState, PlaybackClock, TICK_MS, TickOutcome};
pub use driver::PlaybackDriver;
pub use events::{Notification, NotificationKind, PlaybackEvent, StopReason};
pub use runtime::{NullRuntime, PlayerRuntime};
pub use session::{EditRequest, PlaybackFrame, PlaybackSession};
