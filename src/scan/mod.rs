mod commands;
mod lines;
mod paths;
mod scanner;
mod types;

pub use commands::{match_command, Command};
pub use lines::LogicalLines;
pub use paths::normalize_path;
pub use scanner::GretlScanner;
pub use types::Dependencies;
