use crate::commands::{
    run_evaluate, run_match, run_plan, run_search, EvaluateArgs, MatchArgs, PlanArgs, SearchArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use skills_pathway::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Skills Pathway",
    about = "Check ANZSCO occupation eligibility and plan skills assessments",
    version
)]
struct Cli {
    /// Load the occupation catalog from a JSON or CSV file instead of the built-in table
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Search occupations by title and category
    Search(SearchArgs),
    /// Evaluate a client profile against one occupation
    Evaluate(EvaluateArgs),
    /// Rank catalog occupations against a free-text job title
    Match(MatchArgs),
    /// Produce an eligibility, checklist and timeline plan for one occupation
    Plan(PlanArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let catalog = cli.catalog;
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args, catalog).await,
        Command::Search(args) => run_search(args, catalog),
        Command::Evaluate(args) => run_evaluate(args, catalog),
        Command::Match(args) => run_match(args, catalog),
        Command::Plan(args) => run_plan(args, catalog),
    }
}
