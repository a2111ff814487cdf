//! student-sync binary
//!
//! Loads configuration (file, then `STUDENT_SYNC_*` environment, then flags),
//! runs one fetch-sort-upload cycle and exits. Pipeline failures are logged
//! but still exit 0; only unusable configuration exits non-zero.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use student_sync::config::CliOverrides;
use student_sync::{Config, StudentClient, pipeline};
use tracing_subscriber::EnvFilter;

/// Fetch the student roster, sort it by first name and upload it gzip-compressed
#[derive(Debug, Parser)]
#[command(name = "student-sync", version, about)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Roster endpoint URL (overrides file and environment)
    #[arg(long)]
    endpoint: Option<String>,

    /// Abort the fetch on the first malformed roster line instead of skipping it
    #[arg(long)]
    fail_on_malformed: bool,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            endpoint: self.endpoint.clone(),
            fail_on_malformed: self.fail_on_malformed,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let client = match build_client(&args, |key| std::env::var(key).ok()) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "unusable configuration");
            return ExitCode::FAILURE;
        }
    };

    let outcome = pipeline::run(&client).await;
    tracing::debug!(?outcome, "sync finished");

    ExitCode::SUCCESS
}

/// Layer configuration and validate it into a ready client
///
/// Any error here is a configuration problem and ends the process with a
/// failure code before a request is made.
fn build_client<F>(args: &Args, lookup: F) -> student_sync::Result<StudentClient>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = &args.config {
        tracing::debug!(path = %path.display(), "loading configuration file");
    }
    let config = Config::load(args.config.as_deref(), lookup, &args.overrides())?;
    StudentClient::new(config)
}
