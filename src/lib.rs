//! Quizline library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod core;
pub mod trivia;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Where quiz questions come from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// Bundled five-question set; works offline.
    #[default]
    Static,
    /// Open Trivia DB compatible HTTP API.
    Remote,
}

impl DataSource {
    pub fn label(self) -> &'static str {
        match self {
            DataSource::Static => "static",
            DataSource::Remote => "remote",
        }
    }
}
