pub mod source;
pub mod sources;
pub mod types;

pub use source::{QuestionSource, SourceError};
pub use sources::{QuizQuery, RemoteSource, StaticSource};
pub use types::{ApiEnvelope, ApiQuestion, decode_entities};
