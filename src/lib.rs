pub mod config;
pub mod engine;
pub mod filters;
pub mod models;
pub mod pagination;
pub mod transport;
pub mod types;
