mod app;
mod commands;

use clap::{Parser, Subcommand};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "bookrec", about = "Notion reading-list record migration", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Append a structured record section to each book page
    Migrate,

    /// Remove a previously appended record section from each book page
    Rollback,

    /// Dump the block structure of a single page
    Inspect {
        /// Page ID (UUID, as in the Notion page URL)
        page_id: Uuid,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let app = app::App::new()?;

    match cli.command {
        Command::Migrate => commands::migrate::run(&app),
        Command::Rollback => commands::rollback::run(&app),
        Command::Inspect { page_id } => commands::inspect::run(&app, page_id),
    }
}
