pub mod mock;
pub mod openai;
pub mod prompt;

pub use mock::{MockProvider, MockResponse};
pub use openai::OpenAiProvider;
