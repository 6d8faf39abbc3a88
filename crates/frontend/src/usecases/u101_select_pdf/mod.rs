pub mod api;
pub mod flow;

pub use flow::{activate_document, poll_until_ready, select_document, PollOutcome, SelectResult};
