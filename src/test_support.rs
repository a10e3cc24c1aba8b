//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::countdown::CountdownBudget;
use crate::core::question::Question;
use crate::core::state::{App, Latency};
use crate::trivia::{QuestionSource, SourceError, StaticSource};

/// A source that hands back a canned result.
pub struct FixedSource(pub Result<Vec<Question>, SourceError>);

#[async_trait]
impl QuestionSource for FixedSource {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn fetch(&self) -> Result<Vec<Question>, SourceError> {
        self.0.clone()
    }
}

/// The bundled five questions.
pub fn sample_questions() -> Vec<Question> {
    StaticSource::questions()
}

/// Creates a test App over the static source with no simulated latency.
pub fn test_app() -> App {
    App::new(
        Arc::new(StaticSource),
        CountdownBudget::from_secs(120),
        Latency::none(),
    )
}

/// Concatenates every cell of a rendered buffer, row after row.
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}
