use crate::events::{Notification, PlaybackEvent};

/// Embedder-facing event sink.
///
/// The rendering layer implements this to receive lifecycle events and
/// notifications; the core never renders anything itself. Implementations
/// must be cheap and non-blocking — both are called from inside the tick
/// path.
pub trait PlayerRuntime: Send + Sync {
    fn emit_playback(&self, event: PlaybackEvent);
    fn emit_notification(&self, notification: Notification);
}

/// Sink that drops every event. For headless use and tests that only assert
/// on state.
pub struct NullRuntime;

impl PlayerRuntime for NullRuntime {
    fn emit_playback(&self, _event: PlaybackEvent) {}
    fn emit_notification(&self, _notification: Notification) {}
}
