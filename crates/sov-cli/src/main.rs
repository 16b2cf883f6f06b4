mod analyze;
mod corpus;
mod env;
mod narrative;

use clap::{Args, Parser, Subcommand};
use sov_core::AppConfig;
use tracing_subscriber::EnvFilter;

use crate::env::EnvCommands;

#[derive(Debug, Parser)]
#[command(name = "sov-cli")]
#[command(about = "YouTube Share of Voice tracker")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Narrative report when Ollama is reachable, quick analysis otherwise (default)
    Run,
    /// Fetch videos, compute Share of Voice and print the results
    Analyze {
        #[command(flatten)]
        search: SearchArgs,

        /// Print results without writing the JSON artifact
        #[arg(long)]
        no_save: bool,
    },
    /// Fetch videos, compute Share of Voice and write an LLM narrative report
    Narrative {
        #[command(flatten)]
        search: SearchArgs,
    },
    /// Manage the `.env` file
    Env {
        #[command(subcommand)]
        command: EnvCommands,
    },
}

/// Per-invocation overrides for the configured search.
#[derive(Debug, Default, Args)]
pub(crate) struct SearchArgs {
    /// Search query (defaults to `SEARCH_QUERY`)
    #[arg(long)]
    pub query: Option<String>,

    /// Number of videos to analyze, 1 to 50 (defaults to `TOP_N_RESULTS`)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=50))]
    pub limit: Option<u32>,
}

fn init_tracing(default_directive: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_directive))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

/// Load config and start logging; every command except `env` needs both.
fn setup() -> anyhow::Result<AppConfig> {
    let config = sov_core::load_app_config()?;
    init_tracing(&config.log_level)?;
    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Env { command } => env::run_env(&command),
        Commands::Run => run_default(&setup()?).await,
        Commands::Analyze { search, no_save } => {
            analyze::run_analyze(&setup()?, &search, !no_save).await
        }
        Commands::Narrative { search } => {
            narrative::run_narrative_command(&setup()?, &search).await
        }
    }
}

/// Collect once, then narrate if Ollama answers, falling back to the quick
/// analysis when it does not or when the narrative fails.
async fn run_default(config: &AppConfig) -> anyhow::Result<()> {
    let ollama = narrative::ollama_client(config)?;
    let available = ollama.is_available().await;

    let Some(corpus) = corpus::collect_corpus(config, &SearchArgs::default()).await? else {
        return Ok(());
    };

    if available {
        match narrative::write_narrative(config, &ollama, &corpus).await {
            Ok(_) => return Ok(()),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "narrative report failed; falling back to quick analysis"
                );
                println!("Narrative report failed ({e}); showing quick analysis instead.\n");
            }
        }
    } else {
        println!(
            "Ollama is not reachable at {}; showing quick analysis.\n",
            config.ollama_base_url
        );
    }

    analyze::print_and_save(config, &corpus, true)
}

#[cfg(test)]
mod tests;
