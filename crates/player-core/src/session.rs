//! Session facade: the boundary between the core and the rendering layer.
//!
//! Owns the transcript store and the clock, translates inbound commands into
//! store/clock operations, and reports outcomes through the
//! [`PlayerRuntime`] sink.

use std::sync::Arc;

use transcript::{EditError, TranscriptEntry, TranscriptStore};

use crate::clock::{PlaybackClock, TickOutcome};
use crate::events::{Notification, PlaybackEvent, StopReason};
use crate::runtime::PlayerRuntime;

const MSG_WORD_UPDATED: &str = "Word updated successfully!";
const MSG_INVALID_WORD: &str = "Please enter a valid word.";
const MSG_WORD_GONE: &str = "That word is no longer in the transcript.";

/// Transient selection carried between `request_edit` and `submit_edit`.
/// Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRequest {
    pub entry_id: String,
    pub word: String,
}

/// Complete snapshot of playback state at a point in time.
///
/// This is the rendering contract: everything a UI layer needs to draw one
/// frame — the transcript, which entry to highlight, and the button state.
#[derive(Debug, Clone, Default, serde::Serialize)]
#[cfg_attr(feature = "specta", derive(specta::Type))]
pub struct PlaybackFrame {
    pub entries: Vec<TranscriptEntry>,
    pub active_id: Option<String>,
    pub elapsed_ms: i64,
    pub running: bool,
}

pub struct PlaybackSession {
    store: TranscriptStore,
    clock: PlaybackClock,
    runtime: Arc<dyn PlayerRuntime>,
}

impl PlaybackSession {
    pub fn new(store: TranscriptStore, runtime: Arc<dyn PlayerRuntime>) -> Self {
        Self {
            store,
            clock: PlaybackClock::new(),
            runtime,
        }
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        self.store.entries()
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    pub fn elapsed_ms(&self) -> i64 {
        self.clock.elapsed_ms()
    }

    /// Start (or restart) playback from time zero. Starting an empty
    /// transcript is a logged no-op: there is no end time to play toward.
    pub fn start(&mut self) {
        if self.store.is_empty() {
            tracing::warn!("playback_start_ignored_empty_transcript");
            return;
        }
        self.clock.start();
        tracing::info!("playback_started");
        self.runtime.emit_playback(PlaybackEvent::Started);
    }

    /// Stop playback, keeping the elapsed position. Idempotent.
    pub fn stop(&mut self) {
        if !self.clock.is_running() {
            return;
        }
        self.clock.stop();
        let at_ms = self.clock.elapsed_ms();
        tracing::info!(at_ms, "playback_stopped");
        self.runtime.emit_playback(PlaybackEvent::Stopped {
            at_ms,
            reason: StopReason::UserRequested,
        });
    }

    /// Advance one tick of simulated time. The driver stops delivering ticks
    /// once this returns anything other than [`TickOutcome::Advanced`].
    pub fn tick(&mut self) -> TickOutcome {
        let outcome = self.clock.tick(&self.store);
        if outcome == TickOutcome::AutoStopped {
            let at_ms = self.clock.elapsed_ms();
            tracing::info!(at_ms, "playback_auto_stopped");
            self.runtime.emit_playback(PlaybackEvent::Stopped {
                at_ms,
                reason: StopReason::EndOfTranscript,
            });
        }
        outcome
    }

    /// Open an edit selection for the first entry matching `word`. Pure
    /// selection, no mutation; an unknown word yields an empty selection.
    pub fn request_edit(&self, word: &str) -> Option<EditRequest> {
        match self.store.find_by_word(word) {
            Some(entry) => Some(EditRequest {
                entry_id: entry.id.clone(),
                word: entry.word.clone(),
            }),
            None => {
                tracing::warn!(word, "edit_requested_for_unknown_word");
                None
            }
        }
    }

    /// Validate and apply a correction to **every** entry whose word equals
    /// `target`. Zero matches still counts as success. Returns how many
    /// entries were rewritten.
    pub fn submit_edit(&mut self, target: &str, replacement: &str) -> Result<usize, EditError> {
        match self.store.replace_word(target, replacement) {
            Ok(replaced) => {
                tracing::info!(target, replacement, replaced, "word_updated");
                self.runtime
                    .emit_notification(Notification::success(MSG_WORD_UPDATED));
                Ok(replaced)
            }
            Err(err) => {
                tracing::warn!(target, error = %err, "edit_rejected");
                self.runtime
                    .emit_notification(Notification::error(MSG_INVALID_WORD));
                Err(err)
            }
        }
    }

    /// Entry-identity variant: corrects exactly one occurrence, keyed by the
    /// entry's id instead of its current text.
    pub fn submit_edit_by_id(&mut self, id: &str, replacement: &str) -> Result<(), EditError> {
        match self.store.replace_entry(id, replacement) {
            Ok(()) => {
                tracing::info!(id, replacement, "entry_updated");
                self.runtime
                    .emit_notification(Notification::success(MSG_WORD_UPDATED));
                Ok(())
            }
            Err(err) => {
                let message = match &err {
                    EditError::InvalidWord => MSG_INVALID_WORD,
                    EditError::EntryNotFound(_) => MSG_WORD_GONE,
                };
                tracing::warn!(id, error = %err, "edit_rejected");
                self.runtime.emit_notification(Notification::error(message));
                Err(err)
            }
        }
    }

    /// The entry currently being "spoken", if any.
    pub fn active_entry(&mut self) -> Option<&TranscriptEntry> {
        self.clock.active_entry(self.store.entries())
    }

    /// Snapshot for the rendering layer.
    pub fn frame(&mut self) -> PlaybackFrame {
        let active_id = self
            .clock
            .active_entry(self.store.entries())
            .map(|e| e.id.clone());
        PlaybackFrame {
            entries: self.store.entries().to_vec(),
            active_id,
            elapsed_ms: self.clock.elapsed_ms(),
            running: self.clock.is_running(),
        }
    }
}
