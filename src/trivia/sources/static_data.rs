//! Bundled fallback question set. Works offline and never fails.

use async_trait::async_trait;
use log::debug;

use crate::core::question::{Difficulty, Question, QuestionKind};
use crate::trivia::{QuestionSource, SourceError};

/// (category, question, correct, incorrect)
const QUESTIONS: &[(&str, &str, &str, [&str; 3])] = &[
    (
        "Entertainment: Video Games",
        "What is the protagonist's title given by the demons in DOOM (2016)?",
        "Doom Slayer",
        ["Doom Guy", "Doom Marine", "Doom Reaper"],
    ),
    (
        "Entertainment: Film",
        "What was the first monster to appear alongside Godzilla?",
        "Anguirus",
        ["King Kong", "Mothra", "King Ghidora"],
    ),
    (
        "Sports",
        "How many points did LeBron James score in his first NBA game?",
        "25",
        ["19", "69", "41"],
    ),
    (
        "Geography",
        "What is the official language of Costa Rica?",
        "Spanish",
        ["English", "Portuguese", "Creole"],
    ),
    (
        "Geography",
        "What is the capital of Denmark?",
        "Copenhagen",
        ["Aarhus", "Odense", "Aalborg"],
    ),
];

/// Returns the fixed five-question set immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticSource;

impl StaticSource {
    /// The bundled questions, each with freshly shuffled options.
    pub fn questions() -> Vec<Question> {
        QUESTIONS
            .iter()
            .map(|(category, text, correct, incorrect)| {
                Question::new(
                    QuestionKind::Multiple,
                    Difficulty::Easy,
                    *category,
                    *text,
                    *correct,
                    incorrect.iter().map(|s| s.to_string()).collect(),
                )
            })
            .collect()
    }
}

#[async_trait]
impl QuestionSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch(&self) -> Result<Vec<Question>, SourceError> {
        let questions = Self::questions();
        debug!("Static source produced {} questions", questions.len());
        Ok(questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_source_has_five_four_option_questions() {
        let questions = tokio_test::block_on(StaticSource.fetch()).unwrap();
        assert_eq!(questions.len(), 5);
        for q in &questions {
            assert_eq!(q.options.len(), 4);
            assert!(q.options.contains(&q.correct_answer));
        }
    }

    #[test]
    fn test_static_source_name() {
        assert_eq!(StaticSource.name(), "static");
    }
}
