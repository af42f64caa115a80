use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ghfolio::{Config, GitHubClient, PipelineConfig, Storage, SyncOutcome, SyncPipeline, SyncReport};

#[derive(Parser, Debug)]
#[command(name = "ghfolio")]
#[command(version = "0.1.0")]
#[command(about = "Fetch GitHub profile data into static JSON files for a portfolio site")]
struct Args {
    /// GitHub username to sync (overrides GITHUB_USERNAME)
    #[arg(short, long)]
    username: Option<String>,

    /// Directory the JSON artifacts are written to (overrides OUTPUT_DIR)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// GitHub API base URL (overrides GITHUB_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// JSON file with curated tool categories (overrides TOOLS_FILE)
    #[arg(long)]
    tools_file: Option<PathBuf>,

    /// Hide progress bars
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("ghfolio=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    let args = Args::parse();

    let mut config = Config::from_env()?;
    apply_args(&mut config, args);
    config.validate()?;

    // Directory creation failure aborts the run; nothing could be written.
    let storage = Storage::new(&config.output_dir)?;

    let github = GitHubClient::with_base_url(config.github_token.as_deref(), &config.api_base_url)?;
    if config.github_token.is_none() {
        tracing::warn!("GITHUB_TOKEN not set, using unauthenticated requests");
    }
    tracing::info!("Using GitHub API at {}", github.base_url());

    let pipeline = SyncPipeline::new(github, storage, PipelineConfig::from(&config));
    let report = pipeline.run().await?;

    print_report(&report);

    Ok(())
}

fn apply_args(config: &mut Config, args: Args) {
    if let Some(username) = args.username {
        config.username = username;
    }
    if let Some(output_dir) = args.output_dir {
        config.output_dir = output_dir;
    }
    if let Some(api_url) = args.api_url {
        config.api_base_url = api_url;
    }
    if let Some(tools_file) = args.tools_file {
        config.tools_file = Some(tools_file);
    }
    if args.quiet {
        config.show_progress = false;
    }
}

fn print_report(report: &SyncReport) {
    for artifact in &report.artifacts {
        match &artifact.outcome {
            SyncOutcome::Fresh => println!("  ok        {}", artifact.path.display()),
            SyncOutcome::Degraded(error) => {
                println!("  degraded  {} ({})", artifact.path.display(), error)
            }
        }
    }
}
