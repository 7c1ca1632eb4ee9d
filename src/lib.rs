pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod renderer;
pub mod tools;

// Re-export commonly used types
pub use analyzer::CodeAnalyzer;
pub use config::Config;
pub use error::{ServerError, ServerResult};
pub use tools::{ToolDispatcher, ToolRequest, ToolResponse};
