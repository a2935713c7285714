//! Owned tick timer.
//!
//! The periodic timer is a resource scoped to the driver: `start` replaces
//! any previous tick task, `stop` cancels it, and dropping the driver cancels
//! it too, so no tick ever mutates a session whose owner is gone. The session
//! sits behind a mutex because the timer task and the embedder run on
//! preemptive tokio threads; store writes (edits) and clock ticks are
//! serialized through it.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, watch};

use crate::clock::{TICK_MS, TickOutcome};
use crate::session::PlaybackSession;

struct TickTask {
    shutdown_tx: watch::Sender<()>,
    handle: tokio::task::JoinHandle<()>,
}

pub struct PlaybackDriver {
    session: Arc<Mutex<PlaybackSession>>,
    task: Option<TickTask>,
}

impl PlaybackDriver {
    pub fn new(session: PlaybackSession) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            task: None,
        }
    }

    /// Shared handle for issuing edit commands and reading frames while the
    /// driver ticks in the background.
    pub fn session(&self) -> Arc<Mutex<PlaybackSession>> {
        Arc::clone(&self.session)
    }

    /// Restart playback from zero and (re)spawn the tick task. A previous
    /// task is cancelled first, so at most one timer drives the session.
    pub async fn start(&mut self) {
        self.cancel_and_wait().await;

        let running = {
            let mut session = self.session.lock().await;
            session.start();
            session.is_running()
        };
        if !running {
            // empty transcript: nothing to tick
            return;
        }

        // Register the interval before spawning so the first delivered tick
        // lands exactly TICK_MS after start.
        let mut interval = tokio::time::interval(Duration::from_millis(TICK_MS as u64));
        interval.tick().await;

        let (shutdown_tx, mut shutdown_rx) = watch::channel(());
        let session = Arc::clone(&self.session);

        let handle = tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = shutdown_rx.changed() => break,
                    _ = interval.tick() => {
                        match session.lock().await.tick() {
                            TickOutcome::Advanced => {}
                            // auto-stop, or someone stopped the session
                            // underneath us; either way the timer is done
                            TickOutcome::AutoStopped | TickOutcome::Idle => break,
                        }
                    }
                }
            }
            tracing::debug!("tick_task_exited");
        });

        self.task = Some(TickTask {
            shutdown_tx,
            handle,
        });
    }

    /// Stop playback and cancel the tick task. The in-flight tick, if any,
    /// completes before the stop takes effect; nothing fires afterwards.
    pub async fn stop(&mut self) {
        self.cancel_and_wait().await;
        self.session.lock().await.stop();
    }

    async fn cancel_and_wait(&mut self) {
        if let Some(task) = self.task.take() {
            let _ = task.shutdown_tx.send(());
            let _ = task.handle.await;
        }
    }
}

impl Drop for PlaybackDriver {
    fn drop(&mut self) {
        // Drop is not async; signalling shutdown is enough, the task exits on
        // its next wake-up and never outlives the session it holds an Arc to.
        if let Some(task) = self.task.take() {
            let _ = task.shutdown_tx.send(());
            task.handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::NullRuntime;
    use transcript::{SequentialIdGen, TranscriptStore};

    fn driver(words: &[(&str, i64, i64)]) -> PlaybackDriver {
        let store = TranscriptStore::with_id_gen(
            words.iter().map(|&(w, s, d)| (w, s, d)),
            SequentialIdGen::new(),
        );
        PlaybackDriver::new(PlaybackSession::new(store, Arc::new(NullRuntime)))
    }

    async fn advance(ms: u64) {
        tokio::time::advance(Duration::from_millis(ms)).await;
        tokio::task::yield_now().await;
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_advance_simulated_time() {
        let mut d = driver(&[("a", 0, 200)]);
        d.start().await;

        advance(50).await;
        assert_eq!(d.session().lock().await.elapsed_ms(), 50);
        assert!(d.session().lock().await.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn auto_stop_cancels_further_ticking() {
        let mut d = driver(&[("a", 0, 100)]);
        d.start().await;

        advance(100).await;
        assert_eq!(d.session().lock().await.elapsed_ms(), 100);
        assert!(!d.session().lock().await.is_running());

        advance(200).await;
        assert_eq!(d.session().lock().await.elapsed_ms(), 100);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_cancels_the_timer_and_keeps_position() {
        let mut d = driver(&[("a", 0, 500)]);
        d.start().await;

        advance(30).await;
        d.stop().await;
        assert_eq!(d.session().lock().await.elapsed_ms(), 30);

        advance(200).await;
        assert_eq!(d.session().lock().await.elapsed_ms(), 30);
        assert!(!d.session().lock().await.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn restart_resets_elapsed_time() {
        let mut d = driver(&[("a", 0, 500)]);
        d.start().await;
        advance(100).await;
        assert_eq!(d.session().lock().await.elapsed_ms(), 100);

        d.start().await;
        advance(20).await;
        assert_eq!(d.session().lock().await.elapsed_ms(), 20);
    }

    #[tokio::test(start_paused = true)]
    async fn start_on_empty_transcript_spawns_no_timer() {
        let mut d = driver(&[]);
        d.start().await;

        advance(100).await;
        assert_eq!(d.session().lock().await.elapsed_ms(), 0);
        assert!(!d.session().lock().await.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_driver_cancels_the_timer() {
        let mut d = driver(&[("a", 0, 500)]);
        d.start().await;
        advance(30).await;

        let session = d.session();
        drop(d);

        advance(200).await;
        assert_eq!(session.lock().await.elapsed_ms(), 30);
    }

    #[tokio::test(start_paused = true)]
    async fn edits_interleave_with_ticks_under_the_mutex() {
        let mut d = driver(&[("the", 0, 100), ("cat", 100, 100)]);
        d.start().await;

        advance(50).await;
        d.session().lock().await.submit_edit("the", "a").unwrap();
        advance(50).await;

        let session = d.session();
        let mut session = session.lock().await;
        assert_eq!(session.elapsed_ms(), 100);
        assert_eq!(session.active_entry().unwrap().word, "cat");
        assert_eq!(session.transcript()[0].word, "a");
    }
}
