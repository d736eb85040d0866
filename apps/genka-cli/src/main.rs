//! # Genka CLI
//!
//! Cost reports and label layouts for a shop's recipes.
//!
//! ## Usage
//!
//! ```bash
//! # Cost listing and dashboard figures
//! genka cost store.json
//!
//! # Label layout for one recipe, without the price line
//! genka label store.json --recipe クッキー --no-price
//!
//! # Machine-readable output
//! genka --format json cost store.json
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `info`).

mod config;
mod input;
mod report;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{anyhow, Context};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use genka_core::cost::{cost_rows, summarize};
use genka_core::label::{label_file_name, resolve_font, LabelLayoutEngine, MonospaceMetrics};

use crate::config::CliConfig;
use crate::input::{Store, StoreFile};

#[derive(Parser)]
#[command(name = "genka")]
#[command(version)]
#[command(about = "Recipe costing and retail label layout")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, short = 'o', global = true, default_value = "text", value_enum)]
    format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Cost figures for every recipe in the store file
    Cost {
        /// Store data file (JSON)
        file: PathBuf,
    },

    /// Lay out the retail label for one recipe
    Label {
        /// Store data file (JSON)
        file: PathBuf,

        /// Product name of the recipe (defaults to the first one)
        #[arg(long)]
        recipe: Option<String>,

        /// Leave the selling price off the label
        #[arg(long)]
        no_price: bool,

        /// Leave the manufacture date off the label
        #[arg(long)]
        no_date: bool,

        /// Manufacture date to print (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::load().context("loading configuration")?;
    info!(
        fixed_cost_enabled = config.fixed_cost.enabled,
        fixed_cost_per_item = config.fixed_cost.per_item_allocation(),
        "Configuration loaded"
    );

    match cli.command {
        Commands::Cost { file } => run_cost(&config, &file, cli.format),
        Commands::Label {
            file,
            recipe,
            no_price,
            no_date,
            date,
        } => {
            let include_price = config.include_price && !no_price;
            let include_date = config.include_date && !no_date;
            run_label(&config, &file, recipe.as_deref(), include_price, include_date, date, cli.format)
        }
    }
}

fn load_store(file: &Path) -> anyhow::Result<Store> {
    let store = StoreFile::read(file)?;
    Ok(store.admit()?)
}

fn run_cost(config: &CliConfig, file: &Path, format: OutputFormat) -> anyhow::Result<()> {
    let store = load_store(file)?;
    let fixed = config.fixed_cost.per_item_allocation();

    let rows = cost_rows(&store.recipes, fixed);
    let summary = summarize(&store.recipes, store.ingredients.len(), fixed);

    match format {
        OutputFormat::Json => {
            let body = serde_json::json!({ "recipes": rows, "dashboard": summary });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        OutputFormat::Text => {
            print!("{}", report::cost_table(&rows));
            println!("{}", report::dashboard_line(&summary));
        }
    }
    Ok(())
}

fn run_label(
    config: &CliConfig,
    file: &Path,
    product_name: Option<&str>,
    include_price: bool,
    include_date: bool,
    date: Option<NaiveDate>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let recipes = load_store(file)?.recipes;
    let recipe = match product_name {
        Some(name) => recipes
            .iter()
            .find(|r| r.product_name == name)
            .ok_or_else(|| anyhow!("no recipe named '{name}' in {}", file.display()))?,
        None => recipes
            .first()
            .ok_or_else(|| anyhow!("{} contains no recipes", file.display()))?,
    };

    let font = resolve_font(config.font_paths.as_slice(), |path| path.exists());
    let engine = LabelLayoutEngine::new(MonospaceMetrics::default(), font);
    let layout = engine.layout(&recipe.label_request(date), include_price, include_date);
    let file_name = label_file_name(&recipe.product_name);

    info!(
        product = %recipe.product_name,
        fragments = layout.fragments.len(),
        include_price,
        include_date,
        "label laid out"
    );

    match format {
        OutputFormat::Json => {
            let body = serde_json::json!({ "file_name": file_name, "layout": layout });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        OutputFormat::Text => {
            println!("{file_name}");
            print!("{}", report::layout_listing(&layout));
        }
    }
    Ok(())
}
