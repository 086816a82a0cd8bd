pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, MigrateArgs};
pub use commands::{handle_check_command, handle_migrate_command};
