use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "Table tennis WHR rankings dashboard")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Start the dashboard server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Regenerate the live ranking files from the rating database
    Publish,
    /// Create the database tables if they are missing
    InitDb,
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
