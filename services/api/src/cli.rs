use crate::render::run_diagnosis;
use crate::server;
use chaside::error::AppError;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "CHASIDE Vocational Diagnosis",
    about = "Score CHASIDE questionnaires and classify respondents by career coherence",
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
    /// Score a questionnaire export and print the traffic-light report
    Diagnose(DiagnoseArgs),
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

#[derive(Args, Debug)]
pub(crate) struct DiagnoseArgs {
    /// Questionnaire export (CSV) with one row per respondent
    pub(crate) input: PathBuf,
    /// Weight of interest items in the combined score (aptitude gets the rest)
    #[arg(long)]
    pub(crate) interest_weight: Option<f64>,
    /// JSON career profile table replacing the built-in catalog
    #[arg(long)]
    pub(crate) profiles: Option<PathBuf>,
    /// Header of the respondent name column
    #[arg(long)]
    pub(crate) name_column: Option<String>,
    /// Header of the declared career column
    #[arg(long)]
    pub(crate) career_column: Option<String>,
    /// Zero-based column holding item 1
    #[arg(long, conflicts_with = "item_prefix")]
    pub(crate) item_offset: Option<usize>,
    /// Take item columns from headers starting with this text, in file order
    #[arg(long)]
    pub(crate) item_prefix: Option<String>,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
    /// Also list respondents grouped by category
    #[arg(long)]
    pub(crate) list_respondents: bool,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Diagnose(args) => run_diagnosis(args),
    }
}
