pub mod backend;
pub mod controller;
pub mod state;

pub use backend::{Backend, BackendError, HttpBackend};
pub use controller::Controller;
pub use state::{Action, ChecklistState, Notice, Phase};
