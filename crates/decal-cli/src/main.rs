// Rust guideline compliant 2026-02-06

//! Decal CLI Application
//!
//! Command-line front end for decal shop order workflows.

use clap::Parser;
use decal_app::{AppError, RepoContext};
use decal_cli::commands;
use decal_cli::logging::init_tracing;
use decal_cli::output::{create_formatter, OutputFormatter};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "decal",
    version,
    about = "Decal shop order workflow tool",
    long_about = "Tracks decal shop orders through their workflow and checks who may move an order to which status.",
    after_help = "Examples:\n  decal init\n  decal order create \"Nguyen Van A\" --custom\n  decal stage record ord-abc123 Survey\n  decal next ord-abc123 --role sales\n  decal check ord-abc123 design --role technician\n  decal set-status ord-abc123 \"Finalize & Production\" --role sales\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Log level (error, warn, info, debug)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Write logs as JSON to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Repository root (defaults to the current directory)
    #[arg(long, global = true)]
    repo: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Initialize a new decal repository
    Init,

    /// Manage orders
    Order {
        #[command(subcommand)]
        action: OrderAction,
    },

    /// Manage stage history
    Stage {
        #[command(subcommand)]
        action: StageAction,
    },

    /// Check whether a role may move an order to a status
    Check {
        /// Order ID
        id: String,

        /// Target status (label or alias such as "finalize")
        status: String,

        /// Acting role (sales, technician, customer, manager, admin)
        #[arg(long)]
        role: String,
    },

    /// List the statuses a role may choose for an order
    Next {
        /// Order ID
        id: String,

        /// Acting role
        #[arg(long)]
        role: String,
    },

    /// Validate and apply a status change
    SetStatus {
        /// Order ID
        id: String,

        /// Target status (label or alias)
        status: String,

        /// Acting role
        #[arg(long)]
        role: String,
    },
}

#[derive(Debug, clap::Subcommand)]
enum OrderAction {
    /// Create a new order
    Create {
        /// Customer name
        customer: String,

        /// Use the custom-decal workflow
        #[arg(long, conflicts_with = "standard")]
        custom: bool,

        /// Use the standard workflow
        #[arg(long)]
        standard: bool,
    },

    /// Show an order
    Show {
        /// Order ID
        id: String,
    },

    /// List orders
    List,
}

#[derive(Debug, clap::Subcommand)]
enum StageAction {
    /// Record a completed stage
    Record {
        /// Order ID
        id: String,

        /// Stage key (Survey, Design, ProductionAndInstallation, Payment, AcceptanceAndDelivery)
        stage: String,

        /// Optional note
        #[arg(long)]
        note: Option<String>,
    },

    /// List an order's stage history
    List {
        /// Order ID
        id: String,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let root = cli.repo.as_deref();

    if let Commands::Init = cli.command {
        commands::init::execute(root)?;
        return Ok(ExitCode::SUCCESS);
    }

    let repo = RepoContext::discover(root)?;
    let mut config = repo.load_config()?;
    if let Some(level) = &cli.log_level {
        config.log_level = level.to_lowercase();
    }

    // Dropped when main returns, flushing the log file.
    let _guard = init_tracing(config.max_level()?, cli.log_file.as_deref())?;

    let format = match cli.format {
        Some(OutputFormat::Json) => decal_core::OutputFormat::Json,
        Some(OutputFormat::Table) => decal_core::OutputFormat::Table,
        Some(OutputFormat::Plain) => decal_core::OutputFormat::Plain,
        None if cli.json => decal_core::OutputFormat::Json,
        None => config.output_format,
    };
    let formatter = create_formatter(format);

    let code = match run(cli.command, &repo, formatter.as_ref()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(err) => {
            eprintln!("{}", formatter.format_error(&err));
            ExitCode::FAILURE
        }
    };
    Ok(code)
}

/// Dispatches a command. `Ok(false)` means a check was denied.
fn run(
    command: Commands,
    repo: &RepoContext,
    formatter: &dyn OutputFormatter,
) -> Result<bool, AppError> {
    match command {
        // Runs before repository discovery in main.
        Commands::Init => {}
        Commands::Order { action } => match action {
            OrderAction::Create {
                customer,
                custom,
                standard,
            } => {
                let choice = match (custom, standard) {
                    (true, _) => Some(true),
                    (_, true) => Some(false),
                    _ => None,
                };
                commands::order::create(repo, customer, choice, formatter)?;
            }
            OrderAction::Show { id } => commands::order::show(repo, &id, formatter)?,
            OrderAction::List => commands::order::list(repo, formatter)?,
        },
        Commands::Stage { action } => match action {
            StageAction::Record { id, stage, note } => {
                commands::stage::record(repo, &id, &stage, note, formatter)?;
            }
            StageAction::List { id } => commands::stage::list(repo, &id, formatter)?,
        },
        Commands::Check { id, status, role } => {
            return commands::status::check(repo, &id, &status, &role, formatter);
        }
        Commands::Next { id, role } => commands::status::next(repo, &id, &role, formatter)?,
        Commands::SetStatus { id, status, role } => {
            commands::status::set_status(repo, &id, &status, &role, formatter)?;
        }
    }
    Ok(true)
}
