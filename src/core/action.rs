//! # Actions
//!
//! Everything that can happen to a quiz session becomes an `Action`.
//! Player presses Enter on the landing page? That's `Action::LoadQuiz`.
//! The simulated delay ran out? That's `Action::Commit(ticket)`.
//!
//! `update()` takes the current state and an action, mutates the state and
//! returns an `Effect` for the host to perform. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Every entry point first switches to `Loading` and returns
//! `Effect::ScheduleCommit`. The host sleeps for `after` and dispatches
//! `Commit(ticket)`, which installs the pending state. Only the most recent
//! ticket commits, so a late timer from an earlier transition is a no-op.

use std::time::Duration;

use log::{debug, info, warn};

use crate::core::countdown::CountdownBudget;
use crate::core::question::Question;
use crate::core::result::ResultPayload;
use crate::core::shuffle::shuffle;
use crate::core::state::{App, LoadingMessage, Pending, SessionState};
use crate::trivia::SourceError;

#[derive(Debug)]
pub enum Action {
    /// Ask the question source for a new batch.
    LoadQuiz,
    /// The question source finished.
    QuestionsLoaded(Result<Vec<Question>, SourceError>),
    StartQuiz {
        questions: Vec<Question>,
        budget: CountdownBudget,
    },
    EndQuiz(ResultPayload),
    ReplayQuiz,
    ResetQuiz,
    /// A scheduled delay elapsed.
    Commit(u64),
    Quit,
}

impl Action {
    fn name(&self) -> &'static str {
        match self {
            Action::LoadQuiz => "LoadQuiz",
            Action::QuestionsLoaded(_) => "QuestionsLoaded",
            Action::StartQuiz { .. } => "StartQuiz",
            Action::EndQuiz(_) => "EndQuiz",
            Action::ReplayQuiz => "ReplayQuiz",
            Action::ResetQuiz => "ResetQuiz",
            Action::Commit(_) => "Commit",
            Action::Quit => "Quit",
        }
    }
}

/// Work the host must do after an `update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Run the question source and report back with `QuestionsLoaded`.
    Fetch,
    /// Dispatch `Commit(ticket)` once `after` has elapsed.
    ScheduleCommit { ticket: u64, after: Duration },
}

pub fn update(app: &mut App, action: Action) -> Effect {
    let action_name = action.name();
    debug!("update: state={} action={}", app.state.name(), action_name);

    match action {
        Action::Quit => Effect::Quit,

        Action::LoadQuiz => match app.state {
            SessionState::Idle | SessionState::Failed { .. } => {
                info!("Requesting questions from {} source", app.source.name());
                app.state = SessionState::Loading {
                    message: LoadingMessage::new("Loading your quiz...", "It won't be long!"),
                    next: Pending::Fetch,
                };
                app.status_message = format!("Fetching questions ({})", app.source.name());
                Effect::Fetch
            }
            _ => reject(app, action_name),
        },

        Action::QuestionsLoaded(result) => {
            if !matches!(app.state, SessionState::Loading { next: Pending::Fetch, .. }) {
                return reject(app, action_name);
            }
            match result {
                Ok(questions) if questions.is_empty() => fail(app, &SourceError::Empty),
                Ok(questions) => {
                    info!("Loaded {} questions", questions.len());
                    let budget = app.budget;
                    start_quiz(app, questions, budget)
                }
                Err(e) => fail(app, &e),
            }
        }

        Action::StartQuiz { questions, budget } => match app.state {
            SessionState::Idle | SessionState::Failed { .. } | SessionState::Completed { .. }
                if !questions.is_empty() =>
            {
                start_quiz(app, questions, budget)
            }
            _ => reject(app, action_name),
        },

        Action::EndQuiz(result) => match std::mem::take(&mut app.state) {
            SessionState::Active { questions, budget } => {
                info!("Quiz ended: {}", result.score_line());
                let after = app.latency.end;
                begin(
                    app,
                    LoadingMessage::new("Fetching your results...", "Just a moment!"),
                    Pending::Complete {
                        questions,
                        budget,
                        result,
                    },
                    after,
                )
            }
            other => {
                app.state = other;
                reject(app, action_name)
            }
        },

        Action::ReplayQuiz => match std::mem::take(&mut app.state) {
            SessionState::Completed {
                questions, budget, ..
            } => {
                let mut reordered = shuffle(&questions);
                for question in &mut reordered {
                    question.reshuffle_options();
                }
                let after = app.latency.replay;
                begin(
                    app,
                    LoadingMessage::new("Getting ready for round two.", "It won't take long!"),
                    Pending::Activate {
                        questions: reordered,
                        budget,
                    },
                    after,
                )
            }
            other => {
                app.state = other;
                reject(app, action_name)
            }
        },

        Action::ResetQuiz => match app.state {
            SessionState::Completed { .. } | SessionState::Failed { .. } => {
                let after = app.latency.reset;
                begin(
                    app,
                    LoadingMessage::new("Loading the home screen.", "Thank you for playing!"),
                    Pending::Home,
                    after,
                )
            }
            _ => reject(app, action_name),
        },

        Action::Commit(ticket) => commit(app, ticket),
    }
}

fn start_quiz(app: &mut App, questions: Vec<Question>, budget: CountdownBudget) -> Effect {
    let after = app.latency.start;
    begin(
        app,
        LoadingMessage::new("Loading your quiz...", "It won't be long!"),
        Pending::Activate { questions, budget },
        after,
    )
}

/// Enters Loading and schedules the commit of `next`.
fn begin(app: &mut App, message: LoadingMessage, next: Pending, after: Duration) -> Effect {
    app.ticket += 1;
    app.status_message = message.title.clone();
    app.state = SessionState::Loading { message, next };
    debug!("Scheduled commit ticket={} after={:?}", app.ticket, after);
    Effect::ScheduleCommit {
        ticket: app.ticket,
        after,
    }
}

fn commit(app: &mut App, ticket: u64) -> Effect {
    if ticket != app.ticket {
        debug!("Ignoring stale commit ticket={} (current={})", ticket, app.ticket);
        return Effect::None;
    }

    match std::mem::take(&mut app.state) {
        SessionState::Loading {
            next: Pending::Activate { questions, budget },
            ..
        } => {
            app.round += 1;
            app.status_message = format!("Round {}", app.round);
            info!("Quiz active: {} questions, budget {}", questions.len(), budget);
            app.state = SessionState::Active { questions, budget };
        }
        SessionState::Loading {
            next:
                Pending::Complete {
                    questions,
                    budget,
                    result,
                },
            ..
        } => {
            app.status_message = format!("Score {}", result.score_line());
            app.state = SessionState::Completed {
                questions,
                budget,
                result,
            };
        }
        SessionState::Loading {
            next: Pending::Home,
            ..
        } => {
            app.status_message = String::from("Press Enter to start a quiz");
            app.state = SessionState::Idle;
        }
        other => {
            debug!("Commit ticket={} has nothing to install in {}", ticket, other.name());
            app.state = other;
        }
    }
    Effect::None
}

fn fail(app: &mut App, error: &SourceError) -> Effect {
    warn!("Failed to load questions: {}", error);
    app.status_message = String::from("Could not load quiz");
    app.state = SessionState::Failed {
        message: error.user_message(),
    };
    Effect::None
}

fn reject(app: &App, action_name: &str) -> Effect {
    warn!("Rejected {} in state {}", action_name, app.state.name());
    Effect::None
}
