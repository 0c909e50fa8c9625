pub mod commands;
pub mod formatters;
pub mod input;
pub mod menus;
pub mod output;
pub mod prompts;
mod shell;
pub mod shell_context;

pub use shell::{run_cli, run_shell};
