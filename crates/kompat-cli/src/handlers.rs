//! Command handlers for CLI subcommands

mod completions;
mod get;

pub use completions::handle_completions;
pub use get::handle_get;
