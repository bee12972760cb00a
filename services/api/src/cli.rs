use crate::browse::{run_companies, run_job_search, run_suggest, CompaniesArgs, SearchArgs, SuggestArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use job_board::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Job Board",
    about = "Serve the job board API or browse listings from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Search listings and print suggestions
    Jobs {
        #[command(subcommand)]
        command: JobsCommand,
    },
    /// List companies with their open position counts
    Companies(CompaniesArgs),
}

#[derive(Subcommand, Debug)]
enum JobsCommand {
    /// Print one page of filtered, sorted listings
    Search(SearchArgs),
    /// Print autocomplete suggestions for a partial query
    Suggest(SuggestArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    #[command(flatten)]
    pub(crate) data: DataArgs,
    /// Delay every board response by this many milliseconds
    #[arg(long)]
    pub(crate) latency_ms: Option<u64>,
}

/// Where to read board data from.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct DataArgs {
    /// Directory holding jobs.json, companies.json and saved_jobs.json
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Jobs {
            command: JobsCommand::Search(args),
        } => run_job_search(args),
        Command::Jobs {
            command: JobsCommand::Suggest(args),
        } => run_suggest(args),
        Command::Companies(args) => run_companies(args),
    }
}
