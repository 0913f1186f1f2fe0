pub mod config;
pub mod error;
pub mod llm;
pub mod models;
pub mod prompt;
pub mod routes;
pub mod state;
