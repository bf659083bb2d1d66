pub mod api;
pub mod errors;
pub mod ids;
pub mod models;
pub mod parse;
pub mod provider;

pub use errors::CompletionError;
pub use models::{Subtask, Task};
