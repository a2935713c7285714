//! Simulated playback clock.
//!
//! Time is advanced by discrete [`TICK_MS`] steps, not derived from any media
//! stream. The clock reads the transcript only through borrows passed per
//! call and never mutates it.

use transcript::{TranscriptEntry, TranscriptStore};

/// Simulated time granularity per tick, in milliseconds.
pub const TICK_MS: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "specta", derive(specta::Type))]
pub enum ClockState {
    Stopped,
    Playing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The clock was not playing; nothing moved.
    Idle,
    Advanced,
    /// Elapsed time reached the transcript end; the clock clamped and
    /// stopped. No further ticks should be delivered.
    AutoStopped,
}

pub struct PlaybackClock {
    elapsed_ms: i64,
    state: ClockState,
    cursor: usize,
}

impl PlaybackClock {
    pub fn new() -> Self {
        Self {
            elapsed_ms: 0,
            state: ClockState::Stopped,
            cursor: 0,
        }
    }

    pub fn elapsed_ms(&self) -> i64 {
        self.elapsed_ms
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == ClockState::Playing
    }

    /// Enter `Playing` from time zero. Calling while already playing restarts
    /// from zero as well.
    pub fn start(&mut self) {
        self.elapsed_ms = 0;
        self.cursor = 0;
        self.state = ClockState::Playing;
    }

    /// `Playing` → `Stopped`, keeping the elapsed position. No-op when
    /// already stopped.
    pub fn stop(&mut self) {
        self.state = ClockState::Stopped;
    }

    /// Advance simulated time by one [`TICK_MS`] step.
    ///
    /// Clamps to the transcript end and auto-stops once elapsed time reaches
    /// it. An empty transcript has no end time, so a playing clock stops
    /// immediately without advancing.
    pub fn tick(&mut self, store: &TranscriptStore) -> TickOutcome {
        if self.state != ClockState::Playing {
            return TickOutcome::Idle;
        }

        let Some(end_ms) = store.end_ms() else {
            self.state = ClockState::Stopped;
            return TickOutcome::AutoStopped;
        };

        self.elapsed_ms += TICK_MS;
        if self.elapsed_ms >= end_ms {
            self.elapsed_ms = end_ms;
            self.state = ClockState::Stopped;
            return TickOutcome::AutoStopped;
        }
        TickOutcome::Advanced
    }

    /// The entry whose window contains the current elapsed time; `None` in
    /// gaps, on empty transcripts, and at the exact end boundary.
    ///
    /// The cursor only moves forward: elapsed time is monotone between
    /// `start` resets and entries are chronological, so resolution is O(1)
    /// amortized per tick instead of a rescan.
    pub fn active_entry<'a>(
        &mut self,
        entries: &'a [TranscriptEntry],
    ) -> Option<&'a TranscriptEntry> {
        while self.cursor < entries.len() && entries[self.cursor].end_ms() <= self.elapsed_ms {
            self.cursor += 1;
        }
        entries
            .get(self.cursor)
            .filter(|e| e.contains(self.elapsed_ms))
    }
}

impl Default for PlaybackClock {
    fn default() -> Self {
        Self::new()
    }
}
