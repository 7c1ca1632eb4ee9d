pub mod analysis;
pub mod config;

pub use analysis::{handle_serve, handle_tool, handle_tools, run_tool};
pub use config::handle_config;
