//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! One loop on the main thread owns `App` and `TuiState`. Background work
//! (simulated loading delays, the question fetch) runs in tokio tasks that
//! report back with an `Action` over an mpsc channel; only the loop calls
//! `update()`.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Active**: draws every ~250ms so the countdown stays current.
//! - **Idle / Completed**: sleeps up to 500ms, only redraws on events.

pub mod component;
pub mod components;
pub mod event;
mod ui;

use log::{debug, info, warn};
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crate::DataSource;
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, SessionState};
use crate::trivia::{QuestionSource, RemoteSource, StaticSource};
use crate::tui::component::EventHandler;
use crate::tui::components::{QuizEvent, QuizState, ResultEvent, ResultState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
#[derive(Default)]
pub struct TuiState {
    /// Per-round quiz state; present only while the session is Active.
    pub quiz: Option<QuizState>,
    pub result: ResultState,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates or drops per-view state to match the session.
    ///
    /// A new `QuizState` is built whenever a new round becomes active, from
    /// a copy of that round's questions.
    pub fn sync(&mut self, app: &App) {
        match &app.state {
            SessionState::Active { questions, budget } => {
                if self.quiz.as_ref().map(|q| q.round) != Some(app.round) {
                    debug!("Creating quiz view state for round {}", app.round);
                    self.quiz = Some(QuizState::new(app.round, questions.clone(), *budget));
                }
            }
            SessionState::Completed { .. } => {
                self.quiz = None;
            }
            _ => {
                self.quiz = None;
                self.result = ResultState::default();
            }
        }
    }

    /// Routes a key event to the view the session state selects.
    pub fn handle_event(&mut self, app: &App, event: &TuiEvent) -> Option<Action> {
        match &app.state {
            SessionState::Idle | SessionState::Failed { .. } => {
                matches!(event, TuiEvent::Submit).then_some(Action::LoadQuiz)
            }
            SessionState::Active { .. } => match self.quiz.as_mut()?.handle_event(event)? {
                QuizEvent::Finished(result) => Some(Action::EndQuiz(result)),
            },
            SessionState::Completed { .. } => match self.result.handle_event(event)? {
                ResultEvent::Replay => Some(Action::ReplayQuiz),
                ResultEvent::Reset => Some(Action::ResetQuiz),
            },
            SessionState::Loading { .. } => None,
        }
    }

    /// Advances the quiz countdown by `elapsed`.
    pub fn tick(&mut self, app: &App, elapsed: Duration) -> Option<Action> {
        if !matches!(app.state, SessionState::Active { .. }) {
            return None;
        }
        match self.quiz.as_mut()?.tick(elapsed)? {
            QuizEvent::Finished(result) => Some(Action::EndQuiz(result)),
        }
    }
}

/// Build a question source from the resolved config.
pub fn build_source(config: &ResolvedConfig) -> Arc<dyn QuestionSource> {
    match config.source {
        DataSource::Static => Arc::new(StaticSource),
        DataSource::Remote => Arc::new(RemoteSource::new(
            Some(config.remote_base_url.clone()),
            config.query.clone(),
            config.request_timeout,
        )),
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source = build_source(&config);
    let mut app = App::from_config(source, &config);
    let mut tui = TuiState::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    if config.auto_start {
        info!("Auto-starting quiz");
        dispatch(&mut app, Action::LoadQuiz, &tx);
    }

    let mut terminal = ratatui::init();

    let start_time = Instant::now();
    let mut last_tick = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        tui.sync(&app);

        // Countdown runs on wall time, independent of redraws
        let now = Instant::now();
        let elapsed = now - last_tick;
        last_tick = now;
        if let Some(action) = tui.tick(&app, elapsed) {
            dispatch(&mut app, action, &tx);
            needs_redraw = true;
            tui.sync(&app);
        }

        let animating = matches!(
            app.state,
            SessionState::Loading { .. } | SessionState::Active { .. }
        );
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating, long when idle
        let timeout = match app.state {
            SessionState::Loading { .. } => Duration::from_millis(80),
            SessionState::Active { .. } => Duration::from_millis(250),
            _ => Duration::from_millis(500),
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            let action = if matches!(event, TuiEvent::Quit) {
                Some(Action::Quit)
            } else {
                tui.handle_event(&app, &event)
            };

            if let Some(action) = action {
                should_quit |= dispatch(&mut app, action, &tx);
                tui.sync(&app);
            }
            if should_quit {
                break;
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (commits, fetched questions)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if dispatch(&mut app, action, &tx) {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    info!("Quizline shutting down");
    ratatui::restore();
    Ok(())
}

/// Runs `update` and performs the resulting effect. Returns true on quit.
fn dispatch(app: &mut App, action: Action, tx: &mpsc::Sender<Action>) -> bool {
    match update(app, action) {
        Effect::Quit => return true,
        Effect::Fetch => {
            spawn_fetch(app.source.clone(), tx.clone());
        }
        Effect::ScheduleCommit { ticket, after } => {
            spawn_commit(ticket, after, tx.clone());
        }
        Effect::None => {}
    }
    false
}

fn spawn_fetch(
    source: Arc<dyn QuestionSource>,
    tx: mpsc::Sender<Action>,
) -> tokio::task::JoinHandle<()> {
    info!("Spawning question fetch ({})", source.name());
    tokio::spawn(async move {
        let result = source.fetch().await;
        if let Err(e) = &result {
            warn!("Fetch error: {}", e);
        }
        if tx.send(Action::QuestionsLoaded(result)).is_err() {
            warn!("Failed to send fetched questions: receiver dropped");
        }
    })
}

fn spawn_commit(
    ticket: u64,
    after: Duration,
    tx: mpsc::Sender<Action>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        if !after.is_zero() {
            tokio::time::sleep(after).await;
        }
        if tx.send(Action::Commit(ticket)).is_err() {
            warn!("Failed to send commit ticket={}: receiver dropped", ticket);
        }
    })
}
