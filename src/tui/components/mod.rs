//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `TitleBar` / `HelpBar`: page chrome above and below every view
//! - `Loader`: title/message pair while a transition is pending
//! - `LandingPage`: home screen, also shows load failures
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep local state in `TuiState` and emit events:
//! - `QuizState` / `Quiz`: answer capture and countdown; emits `QuizEvent`
//! - `ResultState` / `ResultView`: score screen; emits `ResultEvent`
//!
//! Components receive external data as "props", never by reaching into the
//! global `App`. The event loop turns their events into core `Action`s.
//!
//! ```text
//! components/
//! ├── mod.rs        (this file)
//! ├── title_bar.rs  (TitleBar + HelpBar)
//! ├── loader.rs
//! ├── landing.rs
//! ├── quiz.rs
//! └── result.rs
//! ```

pub mod landing;
pub mod loader;
pub mod quiz;
pub mod result;
mod title_bar;

pub use landing::LandingPage;
pub use loader::Loader;
pub use quiz::{Quiz, QuizEvent, QuizState};
pub use result::{ResultEvent, ResultState, ResultView};
pub use title_bar::{HelpBar, TitleBar};
