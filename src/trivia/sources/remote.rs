//! Remote question source backed by an Open Trivia DB compatible API.
//!
//! One `GET {base_url}/api.php` per fetch. The JSON envelope carries a
//! `response_code`; only `0` yields questions.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::core::question::{Difficulty, Question};
use crate::trivia::types::{ApiEnvelope, CODE_INSUFFICIENT};
use crate::trivia::{QuestionSource, SourceError};

pub const DEFAULT_BASE_URL: &str = "https://opentdb.com";

/// Query parameters sent with every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuery {
    pub amount: u32,
    /// `0` means any category.
    pub category: u32,
    pub difficulty: Difficulty,
    /// `multiple`, `boolean`, or `0` for any type.
    pub question_type: String,
}

impl Default for QuizQuery {
    fn default() -> Self {
        Self {
            amount: 5,
            category: 0,
            difficulty: Difficulty::Easy,
            question_type: "0".to_string(),
        }
    }
}

impl QuizQuery {
    fn as_pairs(&self) -> [(&'static str, String); 4] {
        [
            ("amount", self.amount.to_string()),
            ("category", self.category.to_string()),
            ("difficulty", self.difficulty.as_query().to_string()),
            ("type", self.question_type.clone()),
        ]
    }
}

pub struct RemoteSource {
    base_url: String,
    query: QuizQuery,
    client: reqwest::Client,
}

impl RemoteSource {
    pub fn new(base_url: Option<String>, query: QuizQuery, timeout: Duration) -> Self {
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build HTTP client with timeout, using defaults: {}", e);
                reqwest::Client::new()
            });

        Self {
            base_url,
            query,
            client,
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/api.php", self.base_url)
    }
}

/// Turns a parsed envelope into questions, or the matching error.
fn questions_from_envelope(envelope: ApiEnvelope, requested: u32) -> Result<Vec<Question>, SourceError> {
    match envelope.response_code {
        0 => {}
        CODE_INSUFFICIENT => return Err(SourceError::InsufficientQuestions { requested }),
        other => return Err(SourceError::UnexpectedCode(other)),
    }

    if envelope.results.is_empty() {
        return Err(SourceError::Empty);
    }

    Ok(envelope
        .results
        .into_iter()
        .map(|q| q.into_question())
        .collect())
}

#[async_trait]
impl QuestionSource for RemoteSource {
    fn name(&self) -> &str {
        "remote"
    }

    async fn fetch(&self) -> Result<Vec<Question>, SourceError> {
        let url = self.endpoint();
        info!("Trivia API request: url={}, query={:?}", url, self.query);

        let response = self
            .client
            .get(&url)
            .query(&self.query.as_pairs())
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        debug!("Trivia API response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Trivia API error: {} - {}", status, err_body);
            return Err(SourceError::Api {
                status,
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;
        let envelope: ApiEnvelope =
            serde_json::from_str(&body).map_err(|e| SourceError::Parse(e.to_string()))?;

        debug!(
            "Trivia API envelope: response_code={}, results={}",
            envelope.response_code,
            envelope.results.len()
        );

        let questions = questions_from_envelope(envelope, self.query.amount)?;
        info!("Fetched {} questions", questions.len());
        Ok(questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_matches_fixed_parameters() {
        let pairs = QuizQuery::default().as_pairs();
        assert_eq!(pairs[0], ("amount", "5".to_string()));
        assert_eq!(pairs[1], ("category", "0".to_string()));
        assert_eq!(pairs[2], ("difficulty", "easy".to_string()));
        assert_eq!(pairs[3], ("type", "0".to_string()));
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let source = RemoteSource::new(
            Some("http://localhost:9999/".to_string()),
            QuizQuery::default(),
            Duration::from_secs(1),
        );
        assert_eq!(source.endpoint(), "http://localhost:9999/api.php");
    }

    #[test]
    fn test_envelope_codes() {
        let insufficient = ApiEnvelope {
            response_code: 1,
            results: vec![],
        };
        assert_eq!(
            questions_from_envelope(insufficient, 5),
            Err(SourceError::InsufficientQuestions { requested: 5 })
        );

        let rate_limited = ApiEnvelope {
            response_code: 5,
            results: vec![],
        };
        assert_eq!(
            questions_from_envelope(rate_limited, 5),
            Err(SourceError::UnexpectedCode(5))
        );

        let empty = ApiEnvelope {
            response_code: 0,
            results: vec![],
        };
        assert_eq!(questions_from_envelope(empty, 5), Err(SourceError::Empty));
    }
}
