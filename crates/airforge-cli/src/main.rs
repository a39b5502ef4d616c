mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::RequestArgs;

#[derive(Parser)]
#[command(name = "airforge", about = "Generate and build customized Apache Airflow images")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a Dockerfile for the requested image
    Generate {
        #[command(flatten)]
        request: RequestArgs,
        /// Write a build context (Dockerfile, plus airflow.cfg when given)
        /// into this directory instead of printing to stdout
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },
    /// Submit the request to the remote build-and-push service
    Build {
        #[command(flatten)]
        request: RequestArgs,
    },
    /// List the extras a request may select
    Extras,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { request, out } => commands::generate(request, out.as_deref())?,
        Commands::Build { request } => commands::build(request).await?,
        Commands::Extras => commands::extras()?,
    }

    Ok(())
}
