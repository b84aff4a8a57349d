use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `bitebot` binary.
#[derive(Debug, Parser)]
#[command(
    name = "bitebot",
    version,
    about = "BiteBot - restaurant catalog for Ramallah and Nablus"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: text, json
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Quiet mode (errors only in logs)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Display name recorded in the audit log
    #[arg(long, global = true)]
    pub actor_name: Option<String>,

    /// Numeric user id recorded in the audit log
    #[arg(long, global = true)]
    pub actor_id: Option<u64>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            actor_name: self.actor_name.clone(),
            actor_id: self.actor_id,
        }
    }
}
