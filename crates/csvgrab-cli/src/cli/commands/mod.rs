//! CLI command handlers. Each command is in its own file.

mod links;
mod run;

pub use links::run_links;
pub use run::run_run;
