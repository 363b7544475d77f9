// folio command line entry point.
// Prints the portfolio snapshot as JSON, or runs a strict health check.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use folio::{FallbackPolicy, Lenient, Portfolio, Result, Settings, Strict};

#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Portfolio data from the GitHub API")]
struct Cli {
    /// Fail instead of substituting fallback data; exits non-zero when GitHub
    /// cannot be reached.
    #[arg(long)]
    health: bool,

    /// Account to show (overrides GITHUB_USERNAME).
    #[arg(long)]
    username: Option<String>,

    /// Emit compact JSON instead of pretty-printed.
    #[arg(long)]
    compact: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "folio failed");
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr so stdout only carries JSON. RUST_LOG overrides the level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("folio=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let mut settings = Settings::from_env()?;
    if let Some(username) = cli.username {
        settings = settings.with_username(username)?;
    }

    let policy: Arc<dyn FallbackPolicy> = if cli.health {
        Arc::new(Strict)
    } else {
        Arc::new(Lenient)
    };
    let portfolio = Portfolio::from_settings(&settings, policy)?;

    let output = if cli.health {
        let report = portfolio.health().await?;
        info!(
            login = %report.login,
            repositories = report.repositories_listed,
            "GitHub is reachable"
        );
        to_json(&report, cli.compact)?
    } else {
        let snapshot = portfolio.snapshot().await?;
        to_json(&snapshot, cli.compact)?
    };

    println!("{}", output);
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(json)
}
