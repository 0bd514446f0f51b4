pub mod api;
pub mod config;
pub mod errors;
pub mod llm;
pub mod logging;
pub mod rag;
pub mod search;

pub use config::AppConfig;
pub use errors::*;
