//! TaskHub - Entry Point

use clap::Parser;
use taskhub::run;

/// Command line interface for TaskHub
#[derive(Parser, Debug)]
#[command(name = "taskhub")]
#[command(about = "TaskHub - Authentication and authorization server")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,
}

#[rocket::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run(cli.config.as_deref()).await
}
