use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "userlog-bootstrap", version, about = "Create the initial MongoDB accounts and log collection")]
pub struct Cli {
    /// Connection string, overrides MONGODB_URI
    #[arg(long, global = true)]
    pub uri: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Create accounts, collection and index unless the root user exists (default)
    Run,
    /// Report which accounts, collection and index are present
    Status,
}

impl Cli {
    pub fn action(&self) -> Command {
        self.command.unwrap_or(Command::Run)
    }
}
