//! # Result Payload
//!
//! The score summary the Quiz view hands to `EndQuiz`, and that the Result
//! view renders.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::question::Question;

/// Percentage at or above which a round counts as passed.
pub const PASS_MARK: f64 = 60.0;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnswerDetail {
    pub question: String,
    pub correct_answer: String,
    /// `None` when the countdown ran out before the question was answered.
    pub chosen: Option<String>,
    pub is_correct: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ResultPayload {
    pub score: usize,
    pub total: usize,
    pub details: Vec<AnswerDetail>,
    pub time_taken: Duration,
}

impl ResultPayload {
    /// Scores `answers` against `questions`, position by position.
    ///
    /// Missing or `None` answers count as wrong. `total` is always the number
    /// of questions, whatever the length of `answers`.
    pub fn tally(questions: &[Question], answers: &[Option<String>], time_taken: Duration) -> Self {
        let details: Vec<AnswerDetail> = questions
            .iter()
            .enumerate()
            .map(|(i, q)| {
                let chosen = answers.get(i).cloned().flatten();
                let is_correct = chosen.as_deref().is_some_and(|a| q.is_correct(a));
                AnswerDetail {
                    question: q.text.clone(),
                    correct_answer: q.correct_answer.clone(),
                    chosen,
                    is_correct,
                }
            })
            .collect();

        Self {
            score: details.iter().filter(|d| d.is_correct).count(),
            total: questions.len(),
            details,
            time_taken,
        }
    }

    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.score as f64 * 100.0 / self.total as f64
    }

    pub fn passed(&self) -> bool {
        self.total > 0 && self.percentage() >= PASS_MARK
    }

    pub fn remark(&self) -> &'static str {
        let pct = self.percentage();
        if pct >= 100.0 {
            "Perfect score!"
        } else if pct >= 80.0 {
            "Great job!"
        } else if pct >= PASS_MARK {
            "You passed."
        } else if pct >= 30.0 {
            "Keep practicing."
        } else {
            "Better luck next time."
        }
    }

    /// `score/total`, as shown on the Result view.
    pub fn score_line(&self) -> String {
        format!("{}/{}", self.score, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_questions;

    fn correct_answers(questions: &[Question]) -> Vec<Option<String>> {
        questions.iter().map(|q| Some(q.correct_answer.clone())).collect()
    }

    #[test]
    fn test_tally_all_correct() {
        let questions = sample_questions();
        let result = ResultPayload::tally(&questions, &correct_answers(&questions), Duration::from_secs(42));
        assert_eq!(result.score, 5);
        assert_eq!(result.total, 5);
        assert_eq!(result.score_line(), "5/5");
        assert!(result.passed());
        assert_eq!(result.remark(), "Perfect score!");
        assert_eq!(result.time_taken, Duration::from_secs(42));
    }

    #[test]
    fn test_tally_unanswered_counts_as_wrong() {
        let questions = sample_questions();
        let answers = vec![Some(questions[0].correct_answer.clone()), None];
        let result = ResultPayload::tally(&questions, &answers, Duration::ZERO);
        assert_eq!(result.score, 1);
        assert_eq!(result.total, 5);
        assert_eq!(result.details.len(), 5);
        assert!(result.details[1].chosen.is_none());
        assert!(!result.details[4].is_correct);
        assert!(!result.passed());
    }

    #[test]
    fn test_tally_wrong_answer_recorded() {
        let questions = sample_questions();
        let wrong = questions[0].incorrect_answers[0].clone();
        let result = ResultPayload::tally(&questions[..1], &[Some(wrong.clone())], Duration::ZERO);
        assert_eq!(result.score, 0);
        assert_eq!(result.details[0].chosen.as_deref(), Some(wrong.as_str()));
        assert_eq!(result.remark(), "Better luck next time.");
    }

    #[test]
    fn test_percentage_of_empty_round() {
        let result = ResultPayload::default();
        assert_eq!(result.percentage(), 0.0);
        assert!(!result.passed());
    }

    #[test]
    fn test_pass_mark_boundary() {
        let result = ResultPayload {
            score: 3,
            total: 5,
            ..Default::default()
        };
        assert_eq!(result.percentage(), 60.0);
        assert!(result.passed());
        assert_eq!(result.remark(), "You passed.");
    }
}
