use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use relprocotron::checklist;
use relprocotron::github::{GithubClient, RepoId};
use relprocotron::models::{ReleaseMetadata, TaskDocument};
use relprocotron::publish::{self, IssueOutcome, PublishReport};

#[derive(Parser)]
#[command(name = "relpro")]
#[command(version)]
#[command(about = "Generate hierarchical release work items and publish them as GitHub issues")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the release checklist JSON for a release
    Generate {
        /// Name of the release
        #[arg(long)]
        release_name: String,

        /// Git tag for the release
        #[arg(long)]
        release_tag: String,

        /// Type of release
        #[arg(long, value_enum)]
        release_type: ReleaseChannel,

        /// Release date in YYYY-MM-DD format
        #[arg(long)]
        release_date: String,

        /// URL of the project repository
        #[arg(long)]
        project_url: String,

        /// Name of the software being released
        #[arg(long)]
        software_name: String,

        /// Version of the software being released
        #[arg(long)]
        software_version: String,

        /// Additional comments about the release (can be used multiple times)
        #[arg(long = "comment")]
        comments: Vec<String>,

        /// Where to write the checklist JSON
        #[arg(short, long)]
        output: PathBuf,

        /// Print the JSON to stdout instead of writing the output file
        #[arg(long)]
        dry_run: bool,
    },
    /// Create one GitHub issue per task from a generated checklist
    Publish {
        /// Path to a previously generated checklist JSON
        #[arg(short, long)]
        input: PathBuf,

        /// Target repository in owner/repo form
        #[arg(long)]
        repo: RepoId,

        /// GitHub token; falls back to the GITHUB_TOKEN environment variable
        #[arg(long)]
        token: Option<String>,

        /// Walk the document without performing any network call
        #[arg(long)]
        dry_run: bool,
    },
}

/// Release channels accepted by `--release-type`. Matched case-sensitively.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ReleaseChannel {
    #[value(name = "LTS")]
    Lts,
    Dev,
    Experimental,
    EarlyAccess,
}

impl ReleaseChannel {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Lts => "LTS",
            Self::Dev => "dev",
            Self::Experimental => "experimental",
            Self::EarlyAccess => "early-access",
        }
    }
}

/// Initialize tracing; `--verbose` raises the default filter to debug.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "relprocotron=debug"
    } else {
        "relprocotron=info"
    };
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate {
            release_name,
            release_tag,
            release_type,
            release_date,
            project_url,
            software_name,
            software_version,
            comments,
            output,
            dry_run,
        } => run_generate(GenerateArgs {
            release_name,
            release_tag,
            release_type,
            release_date,
            project_url,
            software_name,
            software_version,
            comments,
            output,
            dry_run,
        }),
        Commands::Publish {
            input,
            repo,
            token,
            dry_run,
        } => run_publish(input, repo, token, dry_run).await,
    }
}

struct GenerateArgs {
    release_name: String,
    release_tag: String,
    release_type: ReleaseChannel,
    release_date: String,
    project_url: String,
    software_name: String,
    software_version: String,
    comments: Vec<String>,
    output: PathBuf,
    dry_run: bool,
}

fn run_generate(args: GenerateArgs) -> anyhow::Result<()> {
    chrono::NaiveDate::parse_from_str(&args.release_date, "%Y-%m-%d").with_context(|| {
        format!(
            "invalid release date '{}', expected YYYY-MM-DD",
            args.release_date
        )
    })?;

    let release = ReleaseMetadata {
        name: args.release_name,
        tag: args.release_tag,
        release_type: args.release_type.as_str().to_string(),
        date: args.release_date,
        project_url: args.project_url,
        software_name: args.software_name,
        software_version: args.software_version,
        comments: args.comments,
    };

    let document = checklist::build_document(&release);

    if args.dry_run {
        print!("{}", document.to_json()?);
        return Ok(());
    }

    document.save(&args.output)?;
    tracing::info!(
        path = %args.output.display(),
        tasks = document.tasks.len(),
        "wrote release checklist"
    );
    Ok(())
}

async fn run_publish(
    input: PathBuf,
    repo: RepoId,
    token: Option<String>,
    dry_run: bool,
) -> anyhow::Result<()> {
    let document = TaskDocument::load(&input)?;

    let token = token
        .or_else(|| std::env::var("GITHUB_TOKEN").ok())
        .context("a GitHub token is required: pass --token or set GITHUB_TOKEN")?;

    tracing::info!(
        repo = %repo,
        tasks = document.node_count(),
        dry_run,
        "publishing release checklist"
    );

    let client = GithubClient::new(token);
    let report = publish::publish_document(&client, &repo, &document, dry_run).await;

    print_report(&report);

    // Per-node failures are expected operational outcomes (rate limits and
    // the like); they are reported in the summary, not via the exit code.
    Ok(())
}

fn print_report(report: &PublishReport) {
    for result in &report.results {
        match &result.outcome {
            IssueOutcome::Created { number, url } => {
                println!("created #{}: {} ({})", number, result.title, url);
            }
            IssueOutcome::Skipped => println!("would create: {}", result.title),
            IssueOutcome::Failed(error) => println!("FAILED: {} ({})", result.title, error),
        }
    }

    println!();
    println!(
        "{} created, {} skipped, {} failed",
        report.created(),
        report.skipped(),
        report.failed()
    );
}
