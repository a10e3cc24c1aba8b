//! # Questions
//!
//! The normalized question record shared by every data source.
//!
//! `options` is derived: it is always a permutation of the correct answer plus
//! the incorrect answers, with no duplicates. It is rebuilt when a question is
//! created and whenever a replay reshuffles it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::shuffle::shuffle;

/// Answer format of a question.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    #[default]
    Multiple,
    Boolean,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// The value the trivia API expects in its `difficulty` query parameter.
    pub fn as_query(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One trivia prompt with its answer choices.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Question {
    pub kind: QuestionKind,
    pub difficulty: Difficulty,
    pub category: String,
    pub text: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
    /// Display order of the answer choices.
    pub options: Vec<String>,
}

impl Question {
    /// Builds a question and derives a freshly shuffled `options` list.
    ///
    /// Incorrect answers that repeat, or that equal the correct answer, are
    /// dropped so `options` never contains duplicates.
    pub fn new(
        kind: QuestionKind,
        difficulty: Difficulty,
        category: impl Into<String>,
        text: impl Into<String>,
        correct_answer: impl Into<String>,
        incorrect_answers: Vec<String>,
    ) -> Self {
        let correct_answer = correct_answer.into();
        let mut distinct: Vec<String> = Vec::with_capacity(incorrect_answers.len());
        for answer in incorrect_answers {
            if answer != correct_answer && !distinct.contains(&answer) {
                distinct.push(answer);
            }
        }

        let mut question = Self {
            kind,
            difficulty,
            category: category.into(),
            text: text.into(),
            correct_answer,
            incorrect_answers: distinct,
            options: Vec::new(),
        };
        question.options = shuffle(&question.answer_set());
        question
    }

    /// Correct answer followed by the incorrect ones, unshuffled.
    pub fn answer_set(&self) -> Vec<String> {
        let mut all = Vec::with_capacity(self.incorrect_answers.len() + 1);
        all.push(self.correct_answer.clone());
        all.extend(self.incorrect_answers.iter().cloned());
        all
    }

    /// Reorders `options` in place; the set of choices is unchanged.
    pub fn reshuffle_options(&mut self) {
        self.options = shuffle(&self.options);
    }

    pub fn is_correct(&self, answer: &str) -> bool {
        answer == self.correct_answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Question {
        Question::new(
            QuestionKind::Multiple,
            Difficulty::Easy,
            "Geography",
            "What is the capital of Denmark?",
            "Copenhagen",
            vec!["Aarhus".into(), "Odense".into(), "Aalborg".into()],
        )
    }

    fn sorted(mut v: Vec<String>) -> Vec<String> {
        v.sort();
        v
    }

    #[test]
    fn test_options_are_permutation_of_answers() {
        let q = sample();
        assert_eq!(q.options.len(), q.incorrect_answers.len() + 1);
        assert_eq!(sorted(q.options.clone()), sorted(q.answer_set()));
    }

    #[test]
    fn test_duplicate_incorrect_answers_are_dropped() {
        let q = Question::new(
            QuestionKind::Multiple,
            Difficulty::Hard,
            "Sports",
            "Pick one",
            "25",
            vec!["19".into(), "25".into(), "19".into(), "41".into()],
        );
        assert_eq!(q.incorrect_answers, vec!["19".to_string(), "41".to_string()]);
        assert_eq!(q.options.len(), 3);
    }

    #[test]
    fn test_boolean_question_has_two_options() {
        let q = Question::new(
            QuestionKind::Boolean,
            Difficulty::Medium,
            "Science",
            "Water boils at 100C at sea level.",
            "True",
            vec!["False".into()],
        );
        assert_eq!(sorted(q.options), vec!["False".to_string(), "True".to_string()]);
    }

    #[test]
    fn test_reshuffle_keeps_option_set() {
        let mut q = sample();
        let before = sorted(q.options.clone());
        for _ in 0..20 {
            q.reshuffle_options();
            assert_eq!(sorted(q.options.clone()), before);
        }
    }

    #[test]
    fn test_is_correct() {
        let q = sample();
        assert!(q.is_correct("Copenhagen"));
        assert!(!q.is_correct("Aarhus"));
    }

    #[test]
    fn test_kind_and_difficulty_serde_lowercase() {
        let kind: QuestionKind = serde_json::from_str("\"boolean\"").unwrap();
        assert_eq!(kind, QuestionKind::Boolean);
        let difficulty: Difficulty = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(difficulty, Difficulty::Medium);
        assert_eq!(Difficulty::Hard.as_query(), "hard");
    }
}
