//! # Core Application Logic
//!
//! This module contains Quizline's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (session)      │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │   trivia   │
//!             │  Adapter   │          │  sources   │
//!             │ (ratatui)  │          │ (reqwest)  │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct and the `SessionState` tagged union
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`question`], [`countdown`], [`result`]: the data model
//! - [`shuffle`]: random permutations for options and replays
//! - [`config`]: layered configuration

pub mod action;
pub mod config;
pub mod countdown;
pub mod question;
pub mod result;
pub mod shuffle;
pub mod state;
