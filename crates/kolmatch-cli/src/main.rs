use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod batch;
mod classify_cmd;
mod output;

#[derive(Debug, Parser)]
#[command(name = "kolmatch")]
#[command(about = "Creator-type classification for content mention batches")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Classify one or more mention batches against the reference roster
    Classify {
        /// Input batch CSV files
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Directory for classified output files (defaults to each input's directory)
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Classify { inputs, output_dir } => {
            classify_cmd::run(&inputs, output_dir.as_deref()).await
        }
    }
}
