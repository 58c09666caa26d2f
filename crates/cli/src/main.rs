//! dynamigrate CLI entry point.
//!
//! Applies declarative JSON table schemas against a DynamoDB endpoint:
//! optionally drop an existing table, create the table with its indexes,
//! then insert seed items.

use clap::Parser;

mod migrate;
mod prelude;

/// Schema-driven DynamoDB migrations.
#[derive(Debug, Parser)]
#[command(name = "dynamigrate")]
#[command(about = "Schema-driven DynamoDB migrations", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: Global,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Silence the command output
    #[clap(long, global = true)]
    pub silent: bool,

    /// Enable verbose output
    #[clap(long, global = true)]
    pub verbose: bool,
}

impl Global {
    pub fn is_silent(&self) -> bool {
        self.silent
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Apply one or more schema files against DynamoDB
    Apply(migrate::ApplyCommand),

    /// Delete a table
    Destroy(migrate::DestroyCommand),
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Apply(apply_cmd) => {
            migrate::run_apply(apply_cmd, cli.global).await?;
        }
        Commands::Destroy(destroy_cmd) => {
            migrate::run_destroy(destroy_cmd, cli.global).await?;
        }
    }

    Ok(())
}
