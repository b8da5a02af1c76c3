use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;

use bank_analyzer::cli::{
    handle_budget_command, handle_categories, handle_export_command, handle_monthly,
    handle_summary, handle_top, parse_budget_assignment, run_menu, ExportFormat,
};
use bank_analyzer::config::{paths::AnalyzerPaths, settings::Settings};
use bank_analyzer::display::format_load_report;
use bank_analyzer::ingest::CsvSource;
use bank_analyzer::models::Money;
use bank_analyzer::session::AnalysisSession;
use bank_analyzer::utils::init_tracing;

#[derive(Parser)]
#[command(
    name = "bank-analyzer",
    author = "Kaylee Beyene",
    version,
    about = "Analyze a bank transaction ledger and track category budgets",
    long_about = "Bank Analyzer reads a Date,Category,Amount transaction file and \
                  reports totals, category breakdowns, monthly trends and the \
                  largest expenses, with optional per-category budgets."
)]
struct Cli {
    /// Transaction CSV file (defaults to the configured data file)
    #[arg(short, long, global = true, env = "BANK_ANALYZER_FILE")]
    file: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu (default)
    Menu,

    /// Show total and average spending
    Summary,

    /// Show the largest transactions
    Top {
        /// Number of transactions to show
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Show spending per calendar month
    Monthly,

    /// Show spending per category
    #[command(alias = "category")]
    Categories {
        /// Add a bar chart of each category's share
        #[arg(long)]
        chart: bool,
    },

    /// Export the category summary to a file
    Export {
        /// Output file path
        output: PathBuf,

        /// Export format (guessed from the file extension when omitted)
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,
    },

    /// Set category budgets and show their status
    Budget {
        /// Budget to set, as CATEGORY=LIMIT (repeatable)
        #[arg(short, long = "set", value_name = "CATEGORY=LIMIT", value_parser = parse_budget_assignment)]
        set: Vec<(String, Money)>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = AnalyzerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let data_file = cli.file.unwrap_or_else(|| settings.data_file.clone());

    let command = cli.command.unwrap_or(Commands::Menu);

    if let Commands::Config = command {
        println!("Bank Analyzer Configuration");
        println!("===========================");
        println!("Config directory: {}", paths.base_dir().display());
        println!("Settings file:    {}", paths.settings_file().display());
        println!();
        println!("Settings:");
        println!("  Data file:       {}", data_file.display());
        println!("  Currency symbol: {}", settings.currency_symbol);
        println!("  Date format:     {}", settings.date_format);
        println!("  Top count:       {}", settings.top_count);
        return Ok(());
    }

    let mut session = AnalysisSession::with_date_format(settings.date_format.as_str());
    let report = session
        .load(&CsvSource::new(&data_file))
        .context("No transaction data found. Check that the data file exists.")?;
    debug!(
        loaded = report.loaded,
        rejected = report.rejected_count(),
        "session ready"
    );

    if matches!(command, Commands::Menu) {
        println!("{}", format_load_report(&report));
    } else if !report.rejected.is_empty() {
        eprintln!("{}", format_load_report(&report));
    }

    match command {
        Commands::Menu => {
            let stdin = io::stdin();
            run_menu(&mut session, &settings, stdin.lock(), io::stdout())?;
        }
        Commands::Summary => handle_summary(&session, &settings),
        Commands::Top { count } => handle_top(&session, &settings, count),
        Commands::Monthly => handle_monthly(&session, &settings),
        Commands::Categories { chart } => handle_categories(&session, &settings, chart),
        Commands::Export { output, format } => {
            handle_export_command(&session, &output, format)?;
        }
        Commands::Budget { set } => {
            handle_budget_command(&mut session, &settings, set)?;
        }
        Commands::Config => {}
    }

    Ok(())
}
