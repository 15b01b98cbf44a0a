use crate::infra::{local_today, parse_date};
use crate::server;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use loan_decision::decision::{DecisionEngine, LoanRequest};
use loan_decision::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Loan Decision Engine",
    about = "Serve or evaluate loan decisions from the command line",
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
    /// Evaluate a single loan request and print the decision
    Decide(DecideArgs),
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
pub(crate) struct DecideArgs {
    /// National personal identification code
    #[arg(long)]
    personal_code: String,
    /// Requested amount in whole euros
    #[arg(long, allow_negative_numbers = true)]
    amount: i64,
    /// Requested period in months
    #[arg(long, allow_negative_numbers = true)]
    period: i64,
    /// Evaluation date (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Decide(args) => run_decision(args),
    }
}

fn run_decision(args: DecideArgs) -> Result<(), AppError> {
    let DecideArgs {
        personal_code,
        amount,
        period,
        today,
    } = args;

    let today = today.unwrap_or_else(local_today);
    let request = LoanRequest::new(personal_code, amount, period);
    let decision = DecisionEngine::new().decide(&request, today)?;

    println!("Loan decision (evaluated {today})");
    if let (Some(amount), Some(period)) = (decision.approved_amount(), decision.approved_period()) {
        println!("Approved: {amount} EUR over {period} months");
    }
    Ok(())
}
