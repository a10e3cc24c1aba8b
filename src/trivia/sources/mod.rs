mod remote;
mod static_data;

pub use remote::{DEFAULT_BASE_URL, QuizQuery, RemoteSource};
pub use static_data::StaticSource;
