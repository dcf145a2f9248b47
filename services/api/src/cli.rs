use crate::commands::{run_report, run_validate, ReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use essy_report::error::AppError;
use essy_report::screener::MissingRulePolicy;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ESSY Report",
    about = "Classify ESSY screener items and resolve their decision text",
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
    /// Build a screening report for one record file
    Report(ReportArgs),
    /// Check the field registry, cross-loaded groups and aliases for consistency
    Validate,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Decision rule CSV to seed the rule store
    #[arg(long)]
    pub(crate) rules: Option<PathBuf>,
    /// Default behavior for items without a decision rule
    #[arg(long)]
    pub(crate) policy: Option<MissingRulePolicy>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Report(args) => run_report(args),
        Command::Validate => run_validate(),
    }
}
