//! Student roster terminal client
//!
//! A thin shell over `roster-core`: it reads field values from the command
//! line the way the web form reads its inputs, hands them to the form
//! controller, and renders the reloaded table.

mod commands;
mod table;
mod util;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use commands::campus::CampusCommand;
use commands::simple::SimpleCommand;

#[derive(Parser)]
#[command(name = "roster", version, about = "Student roster client")]
struct Cli {
    /// Backend base URL (defaults to the dialect's standard port)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    dialect: Dialect,
}

#[derive(Subcommand)]
enum Dialect {
    /// Campus backend: roll numbers, course catalog, birth dates, phone numbers
    Campus {
        #[command(subcommand)]
        command: CampusCommand,
    },
    /// Simple backend: free-text course and a direct age field
    Simple {
        #[command(subcommand)]
        command: SimpleCommand,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Log to stderr; stdout carries the rendered tables.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()))
        .init();

    let cli = Cli::parse();
    match cli.dialect {
        Dialect::Campus { command } => commands::campus::run(cli.base_url, command).await,
        Dialect::Simple { command } => commands::simple::run(cli.base_url, command).await,
    }
}
