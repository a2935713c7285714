mod fixture;
mod renderer;

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use fixture::Fixture;
use player_core::{
    Notification, PlaybackEvent, PlaybackSession, PlayerRuntime, TICK_MS,
};
use ratatui::DefaultTerminal;
use transcript::TranscriptStore;

const TOAST_DISMISS: Duration = Duration::from_secs(4);

#[derive(clap::Parser)]
#[command(name = "player", about = "Play back and edit a transcript in the terminal")]
struct Args {
    #[arg(short, long, default_value_t = Fixture::Pangram)]
    fixture: Fixture,

    /// Wall-clock milliseconds per 10ms of simulated time.
    #[arg(short, long, default_value_t = TICK_MS as u64)]
    tick: u64,
}

/// Collects core events so the render loop can present them; the core itself
/// never draws.
#[derive(Default)]
struct UiRuntime {
    notifications: Mutex<Vec<Notification>>,
}

impl PlayerRuntime for UiRuntime {
    fn emit_playback(&self, event: PlaybackEvent) {
        tracing::debug!(?event, "playback_event");
    }

    fn emit_notification(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

pub enum EditState {
    Idle,
    PickingWord { buf: String },
    TypingReplacement { target: String, buf: String },
}

pub struct App {
    pub session: PlaybackSession,
    pub runtime: Arc<UiRuntime>,
    pub fixture_name: String,
    pub edit: EditState,
    pub toast: Option<(Notification, Instant)>,
}

impl App {
    fn new(fixture: &Fixture, fixture_name: String) -> Self {
        let runtime = Arc::new(UiRuntime::default());
        let store = TranscriptStore::from_words(fixture.words());
        Self {
            session: PlaybackSession::new(store, runtime.clone()),
            runtime,
            fixture_name,
            edit: EditState::Idle,
            toast: None,
        }
    }

    fn drain_notifications(&mut self) {
        let mut pending = self.runtime.notifications.lock().unwrap();
        if let Some(notification) = pending.pop() {
            pending.clear();
            self.toast = Some((notification, Instant::now()));
        }
        drop(pending);

        if self
            .toast
            .as_ref()
            .is_some_and(|(_, shown_at)| shown_at.elapsed() >= TOAST_DISMISS)
        {
            self.toast = None;
        }
    }

    fn show_toast(&mut self, notification: Notification) {
        self.toast = Some((notification, Instant::now()));
    }

    fn handle_key(&mut self, code: KeyCode) -> bool {
        match &mut self.edit {
            EditState::Idle => match code {
                KeyCode::Char('q') | KeyCode::Esc => return true,
                KeyCode::Char(' ') => {
                    if self.session.is_running() {
                        self.session.stop();
                    } else {
                        self.session.start();
                    }
                }
                KeyCode::Char('e') => {
                    self.edit = EditState::PickingWord { buf: String::new() };
                }
                _ => {}
            },
            EditState::PickingWord { buf } => match code {
                KeyCode::Esc => self.edit = EditState::Idle,
                KeyCode::Backspace => {
                    buf.pop();
                }
                KeyCode::Enter => {
                    let word = std::mem::take(buf);
                    match self.session.request_edit(&word) {
                        Some(request) => {
                            self.edit = EditState::TypingReplacement {
                                target: request.word,
                                buf: String::new(),
                            };
                        }
                        None => {
                            self.edit = EditState::Idle;
                            self.show_toast(Notification::error(format!(
                                "No entry matches {word:?}."
                            )));
                        }
                    }
                }
                KeyCode::Char(c) => buf.push(c),
                _ => {}
            },
            EditState::TypingReplacement { target, buf } => match code {
                KeyCode::Esc => self.edit = EditState::Idle,
                KeyCode::Backspace => {
                    buf.pop();
                }
                KeyCode::Enter => {
                    let target = std::mem::take(target);
                    let replacement = std::mem::take(buf);
                    self.edit = EditState::Idle;
                    // bulk by-value edit: every occurrence of the word
                    let _ = self.session.submit_edit(&target, &replacement);
                }
                KeyCode::Char(c) => buf.push(c),
                _ => {}
            },
        }
        false
    }
}

fn main() {
    use clap::Parser;
    let args = Args::parse();
    let fixture_name = args.fixture.to_string();

    // silent unless RUST_LOG is set; stderr so the alt screen stays clean
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut terminal = ratatui::init();
    let result = run(&mut terminal, &args, fixture_name);
    ratatui::restore();

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(terminal: &mut DefaultTerminal, args: &Args, fixture_name: String) -> std::io::Result<()> {
    let mut app = App::new(&args.fixture, fixture_name);
    let tick_duration = Duration::from_millis(args.tick.max(1));
    let mut last_tick = Instant::now();

    loop {
        app.drain_notifications();
        let snapshot = app.session.frame();
        terminal.draw(|frame| renderer::render(frame, &app, &snapshot))?;

        let timeout = tick_duration.saturating_sub(last_tick.elapsed());

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if app.handle_key(key.code) {
                    break;
                }
            }
        } else if last_tick.elapsed() >= tick_duration {
            // cooperative single-threaded ticking: edits and ticks never run
            // concurrently
            app.session.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
