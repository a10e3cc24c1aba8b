use std::fmt;

use async_trait::async_trait;

use crate::core::question::Question;

/// Errors that can occur while fetching questions.
/// Every branch is surfaced to the session as a visible failure.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The API answered with a non-success HTTP status.
    Api { status: u16, message: String },
    /// The body was not the expected JSON envelope.
    Parse(String),
    /// `response_code = 1`: the API has fewer questions than requested.
    InsufficientQuestions { requested: u32 },
    /// Any other non-zero `response_code`.
    UnexpectedCode(i64),
    /// Success code, but no usable questions.
    Empty,
}

/// Longest slice of a raw HTTP error body shown to the player.
const MAX_BODY_CHARS: usize = 160;

/// Collapses whitespace and cuts `body` to `MAX_BODY_CHARS`.
fn summarize_body(body: &str) -> String {
    let collapsed = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= MAX_BODY_CHARS {
        return collapsed;
    }
    let mut cut: String = collapsed.chars().take(MAX_BODY_CHARS).collect();
    cut.push('…');
    cut
}

impl SourceError {
    /// Text shown to the player on the failure screen.
    pub fn user_message(&self) -> String {
        match self {
            SourceError::InsufficientQuestions { requested } => format!(
                "The API doesn't have enough questions for your query. \
                 (Ex. Asking for {requested} questions in a category that only has fewer.) \
                 Please change the number of questions, difficulty level, or type of questions."
            ),
            SourceError::Network(_) => {
                "Could not reach the trivia service. Check your connection, or run with --source static.".to_string()
            }
            SourceError::Api { status, message } => {
                let body = summarize_body(message);
                if body.is_empty() {
                    format!("The trivia service answered with HTTP {status}.")
                } else {
                    format!("The trivia service answered with HTTP {status}: {body}")
                }
            }
            other => format!("Could not load the quiz: {other}"),
        }
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Network(msg) => write!(f, "network error: {msg}"),
            SourceError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            SourceError::Parse(msg) => write!(f, "parse error: {msg}"),
            SourceError::InsufficientQuestions { requested } => {
                write!(f, "not enough questions available (requested {requested})")
            }
            SourceError::UnexpectedCode(code) => write!(f, "unexpected response code {code}"),
            SourceError::Empty => write!(f, "no questions returned"),
        }
    }
}

impl std::error::Error for SourceError {}

#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Short name shown in the title bar and logs.
    fn name(&self) -> &str;

    /// Produces a batch of normalized questions with shuffled options.
    async fn fetch(&self) -> Result<Vec<Question>, SourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_message_mentions_amount() {
        let msg = SourceError::InsufficientQuestions { requested: 5 }.user_message();
        assert!(msg.contains("enough questions"));
        assert!(msg.contains("Asking for 5 questions"));
    }

    #[test]
    fn test_display_variants() {
        assert_eq!(
            SourceError::Api { status: 503, message: "down".into() }.to_string(),
            "API error (HTTP 503): down"
        );
        assert_eq!(SourceError::UnexpectedCode(5).to_string(), "unexpected response code 5");
        assert!(SourceError::Parse("eof".into()).user_message().contains("parse error: eof"));
    }

    #[test]
    fn test_api_message_caps_raw_body() {
        let page = format!("<html>\n  <body>{}</body>\n</html>", "x".repeat(5000));
        let msg = SourceError::Api { status: 502, message: page }.user_message();
        assert!(msg.starts_with("The trivia service answered with HTTP 502: <html> <body>"));
        assert!(msg.ends_with('…'));
        assert!(msg.chars().count() < 250);

        let bare = SourceError::Api { status: 500, message: "  \n ".into() }.user_message();
        assert_eq!(bare, "The trivia service answered with HTTP 500.");
    }
}
