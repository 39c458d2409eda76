pub mod commands;
pub mod prompt;

pub use commands::{Cli, Commands, ExportSummary, export_history, export_mail, run};
pub use prompt::Prompter;
