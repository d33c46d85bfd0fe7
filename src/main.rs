use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use cdbudget::cli::{
    handle_add, handle_dashboard, handle_fixed_command, handle_list, handle_log,
    handle_monthly_command, handle_totals, handle_update, AddArgs, FixedCommands, ListArgs,
    MonthlyCommands, UpdateArgs,
};
use cdbudget::config::{BudgetPaths, Settings};
use cdbudget::display::format_money;
use cdbudget::models::Money;
use cdbudget::storage::Storage;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Simple budget tracker",
    long_about = "Records transactions against monthly and fixed expense categories \
                  and shows how spending paces against salary over a budget period. \
                  Run without a command to see the dashboard."
)]
struct Cli {
    /// Directory holding settings, data and the audit log
    #[arg(long, global = true, env = "CDBUDGET_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Compute pacing as of this date instead of today (YYYY-MM-DD)
    #[arg(long, global = true)]
    as_of: Option<NaiveDate>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a transaction
    #[command(alias = "a")]
    Add(AddArgs),

    /// List recent transactions
    #[command(alias = "l")]
    List(ListArgs),

    /// Update a transaction
    #[command(alias = "u")]
    Update(UpdateArgs),

    /// Manage monthly categories
    #[command(alias = "m")]
    Monthly {
        #[command(subcommand)]
        command: Option<MonthlyCommands>,
    },

    /// Manage fixed categories
    #[command(alias = "f")]
    Fixed {
        #[command(subcommand)]
        command: Option<FixedCommands>,
    },

    /// Print period totals
    #[command(alias = "t")]
    Totals,

    /// Set the salary and budget period
    Init {
        /// Annual take-home salary
        #[arg(long, allow_negative_numbers = true)]
        salary: String,
        /// First day of the period (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,
        /// Last day of the period (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,
        /// Currency symbol for display
        #[arg(long, default_value = "$")]
        currency: String,
    },

    /// Show current configuration and paths
    Config,

    /// Show recent audit log entries
    Log {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BudgetPaths::new(cli.data_dir)?;
    let today = cli.as_of.unwrap_or_else(|| Local::now().date_naive());

    match cli.command {
        Some(Commands::Init {
            salary,
            start,
            end,
            currency,
        }) => {
            let annual =
                Money::parse(&salary).with_context(|| format!("Invalid salary '{}'", salary))?;
            let mut settings = Settings::new(annual, start, end);
            settings.currency_symbol = currency;
            settings.validate()?;
            settings.save(&paths)?;
            paths.ensure_directories()?;

            println!("Initialized cdbudget at: {}", paths.base_dir().display());
            println!(
                "Salary {} per year, period {} to {}",
                format_money(settings.annual_salary, &settings.currency_symbol),
                settings.start_date,
                settings.end_date
            );
        }
        Some(Commands::Config) => {
            println!("cdbudget Configuration");
            println!("======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            match optional_settings(&paths)? {
                Some(settings) => {
                    println!("Settings:");
                    println!(
                        "  Annual salary: {}",
                        format_money(settings.annual_salary, &settings.currency_symbol)
                    );
                    println!(
                        "  Period:        {} to {}",
                        settings.start_date, settings.end_date
                    );
                    println!("  Currency:      {}", settings.currency_symbol);
                }
                None => println!("Not initialized. Run 'budget init' first."),
            }
        }
        // Recording transactions and categories works before `init`
        Some(Commands::Add(args)) => {
            let storage = open_storage(&paths)?;
            handle_add(&storage, optional_settings(&paths)?.as_ref(), args, today)?;
        }
        Some(Commands::List(args)) => {
            let storage = open_storage(&paths)?;
            handle_list(&storage, optional_settings(&paths)?.as_ref(), args)?;
        }
        Some(Commands::Update(args)) => {
            let storage = open_storage(&paths)?;
            handle_update(&storage, optional_settings(&paths)?.as_ref(), args)?;
        }
        Some(Commands::Monthly { command }) => {
            let storage = open_storage(&paths)?;
            handle_monthly_command(&storage, optional_settings(&paths)?.as_ref(), command, today)?;
        }
        Some(Commands::Fixed { command }) => {
            let storage = open_storage(&paths)?;
            handle_fixed_command(&storage, optional_settings(&paths)?.as_ref(), command, today)?;
        }
        Some(Commands::Totals) => {
            let storage = open_storage(&paths)?;
            handle_totals(&storage, &Settings::load(&paths)?, today)?;
        }
        Some(Commands::Log { count }) => {
            let storage = open_storage(&paths)?;
            handle_log(&storage, count)?;
        }
        None => {
            let storage = open_storage(&paths)?;
            handle_dashboard(&storage, &Settings::load(&paths)?, today)?;
        }
    }

    Ok(())
}

fn open_storage(paths: &BudgetPaths) -> Result<Storage> {
    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;
    Ok(storage)
}

fn optional_settings(paths: &BudgetPaths) -> Result<Option<Settings>> {
    if paths.is_initialized() {
        Ok(Some(Settings::load(paths)?))
    } else {
        Ok(None)
    }
}
