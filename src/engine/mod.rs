mod errors;
mod orchestrator;

pub use errors::FetchError;
pub use orchestrator::{FetchOrchestrator, FetchState, TransactionView};
