use crate::demo::{run_assess, run_demo, run_portfolio, AssessArgs, DemoArgs, PortfolioArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use guesthouse_safety::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Guesthouse Safety",
    about = "Score guesthouse safety and estimate remediation costs from the command line",
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
    /// Assess a single property described in a JSON file
    Assess(AssessArgs),
    /// Rank every property in a CSV export by baseline score
    Portfolio(PortfolioArgs),
    /// Assess two reference properties end to end
    Demo(DemoArgs),
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
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assess(args) => run_assess(args),
        Command::Portfolio(args) => run_portfolio(args),
        Command::Demo(args) => run_demo(args),
    }
}
