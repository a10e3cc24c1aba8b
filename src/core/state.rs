//! # Session State
//!
//! Core business state for Quizline. Domain logic only; no TUI types.
//!
//! ```text
//! App
//! ├── source: Arc<dyn QuestionSource>  // static or remote questions
//! ├── state: SessionState              // exactly one session phase
//! ├── budget: CountdownBudget          // budget for fetched quizzes
//! ├── latency: Latency                 // simulated loading delays
//! ├── status_message: String           // title bar text
//! ├── round: u64                       // bumped on every Active commit
//! └── ticket: u64                      // id of the latest scheduled commit
//! ```
//!
//! The session is a single tagged union instead of a set of independent
//! flags, so a Loading screen can never show stale quiz or result data.
//! State changes only happen through `update(app, action)` in action.rs.

use std::sync::Arc;
use std::time::Duration;

use crate::core::config::ResolvedConfig;
use crate::core::countdown::CountdownBudget;
use crate::core::question::Question;
use crate::core::result::ResultPayload;
use crate::trivia::QuestionSource;

/// Title/message pair rendered by the Loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingMessage {
    pub title: String,
    pub message: String,
}

impl LoadingMessage {
    pub fn new(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
        }
    }
}

/// What a Loading state turns into once it commits.
#[derive(Debug, Clone, PartialEq)]
pub enum Pending {
    /// Waiting on the question source; resolved by `QuestionsLoaded`.
    Fetch,
    Activate {
        questions: Vec<Question>,
        budget: CountdownBudget,
    },
    Complete {
        questions: Vec<Question>,
        budget: CountdownBudget,
        result: ResultPayload,
    },
    Home,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Loading {
        message: LoadingMessage,
        next: Pending,
    },
    Active {
        questions: Vec<Question>,
        budget: CountdownBudget,
    },
    Completed {
        questions: Vec<Question>,
        budget: CountdownBudget,
        result: ResultPayload,
    },
    /// Loading questions failed; `message` is shown on the landing view.
    Failed { message: String },
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::Idle => "Idle",
            SessionState::Loading { .. } => "Loading",
            SessionState::Active { .. } => "Active",
            SessionState::Completed { .. } => "Completed",
            SessionState::Failed { .. } => "Failed",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading { .. })
    }
}

/// Cosmetic delays before each transition commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub start: Duration,
    pub end: Duration,
    pub replay: Duration,
    pub reset: Duration,
}

impl Latency {
    /// Every transition commits on the next dispatch.
    pub fn none() -> Self {
        Self {
            start: Duration::ZERO,
            end: Duration::ZERO,
            replay: Duration::ZERO,
            reset: Duration::ZERO,
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            start: Duration::from_millis(1000),
            end: Duration::from_millis(2000),
            replay: Duration::from_millis(1000),
            reset: Duration::from_millis(1000),
        }
    }
}

pub struct App {
    pub source: Arc<dyn QuestionSource>,
    pub state: SessionState,
    pub budget: CountdownBudget,
    pub latency: Latency,
    pub status_message: String,
    pub round: u64,
    pub ticket: u64,
}

impl App {
    pub fn new(source: Arc<dyn QuestionSource>, budget: CountdownBudget, latency: Latency) -> Self {
        Self {
            source,
            state: SessionState::Idle,
            budget,
            latency,
            status_message: String::from("Welcome to Quizline!"),
            round: 0,
            ticket: 0,
        }
    }

    pub fn from_config(source: Arc<dyn QuestionSource>, config: &ResolvedConfig) -> Self {
        Self::new(source, config.countdown, config.latency)
    }

    /// Questions of the running or finished round.
    pub fn questions(&self) -> Option<&[Question]> {
        match &self.state {
            SessionState::Active { questions, .. } | SessionState::Completed { questions, .. } => {
                Some(questions)
            }
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&ResultPayload> {
        match &self.state {
            SessionState::Completed { result, .. } => Some(result),
            _ => None,
        }
    }
}
