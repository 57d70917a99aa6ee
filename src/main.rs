mod cli;
mod config;
mod db;
mod food;
mod server;
mod tools;
mod tracker;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nosh", version, about = "Personal nutrition tracker and MCP server")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log a meal
    Log {
        /// Name of the meal, e.g. "chicken salad"
        name: String,
        /// Calories (kcal)
        #[arg(long)]
        calories: Option<f64>,
        /// Protein in grams
        #[arg(long)]
        protein: Option<f64>,
        /// Carbohydrates in grams
        #[arg(long)]
        carbs: Option<f64>,
        /// Fat in grams
        #[arg(long)]
        fat: Option<f64>,
        /// Food database id to pull nutrients from
        #[arg(long)]
        food: Option<i64>,
        /// Barcode (GTIN/UPC) to pull nutrients from
        #[arg(long)]
        barcode: Option<String>,
        /// Quantity eaten in grams when using --food/--barcode (default 100)
        #[arg(long)]
        qty: Option<f64>,
        /// Calendar date YYYY-MM-DD (default today)
        #[arg(long)]
        date: Option<String>,
    },
    /// List or delete logged meals
    Meals {
        #[command(subcommand)]
        action: Option<MealsAction>,
        /// Calendar date YYYY-MM-DD (default today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Search the food database by keyword
    Search {
        query: String,
        /// Maximum number of results
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Look up a food by barcode (GTIN/UPC)
    Barcode { code: String },
    /// Manage daily macro goals
    Goal {
        #[command(subcommand)]
        action: GoalAction,
    },
    /// Show progress against goals: zones, streaks, weekly average
    Progress {
        /// Reference date YYYY-MM-DD (default today)
        #[arg(long)]
        date: Option<String>,
        /// Print the raw JSON report
        #[arg(long)]
        json: bool,
    },
    /// Show tracker statistics
    Stats,
    /// Delete all logged meals and goals
    Reset,
    /// Run database diagnostics
    Doctor,
    /// Manage the bulk food database
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
    /// Start the MCP server
    Serve,
}

#[derive(Subcommand)]
enum MealsAction {
    /// Delete a meal by id
    Rm { id: String },
}

#[derive(Subcommand)]
enum GoalAction {
    /// Set or replace the goal for a macro
    Set {
        /// Macro key: calories, protein, carbs, or fat
        key: String,
        /// Daily target (kcal for calories, grams otherwise)
        target: f64,
        /// Goal direction: under or over (default depends on the macro)
        #[arg(long)]
        direction: Option<String>,
        /// Percent grace band beyond the target, 0-100
        #[arg(long, default_value_t = 0.0)]
        tolerance: f64,
    },
    /// List configured goals
    List,
    /// Remove all goals
    Reset,
}

#[derive(Subcommand)]
enum DbAction {
    /// Download the food database dump to ~/.nosh/data/
    Download,
    /// Import a FoodData Central JSON file
    Import { file: PathBuf },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config (for log level)
    let config = config::NoshConfig::load()?;

    // Initialize tracing with the configured log level.
    // Log to stderr so stdout stays clean for MCP JSON-RPC.
    let filter = EnvFilter::try_new(&config.server.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Log { name, calories, protein, carbs, fat, food, barcode, qty, date } => {
            let args = cli::log::LogArgs {
                name,
                calories,
                protein,
                carbs,
                fat,
                food_id: food,
                barcode,
                quantity_g: qty,
                date,
            };
            cli::log::log(&config, &args)?;
        }
        Command::Meals { action, date } => match action {
            Some(MealsAction::Rm { id }) => cli::meals::remove(&config, &id)?,
            None => cli::meals::list(&config, date.as_deref())?,
        },
        Command::Search { query, limit } => {
            cli::search::search(&config, &query, limit)?;
        }
        Command::Barcode { code } => {
            cli::search::barcode(&config, &code)?;
        }
        Command::Goal { action } => match action {
            GoalAction::Set { key, target, direction, tolerance } => {
                cli::goals::set(&config, &key, target, direction.as_deref(), tolerance)?;
            }
            GoalAction::List => cli::goals::list(&config)?,
            GoalAction::Reset => cli::goals::reset(&config)?,
        },
        Command::Progress { date, json } => {
            cli::progress::progress(&config, date.as_deref(), json)?;
        }
        Command::Stats => cli::stats::stats(&config)?,
        Command::Reset => cli::reset::reset(&config)?,
        Command::Doctor => cli::doctor::doctor(&config)?,
        Command::Db { action } => match action {
            DbAction::Download => cli::db_download(&config.food).await?,
            DbAction::Import { file } => cli::import::import(&config, &file)?,
        },
        Command::Serve => {
            let transport = config.server.transport.clone();
            match transport.as_str() {
                "http" => server::serve_http(config).await?,
                _ => server::serve_stdio(config).await?,
            }
        }
    }

    Ok(())
}
