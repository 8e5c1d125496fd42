use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use homevalue_core::{Catalog, PropertyData, PropertyType, Selection, aggregate, select_items};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

mod config;
mod render;
mod session;
mod state;

use config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "homevalue",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("HOMEVALUE_BUILD_SHA"), ")"),
    about = "Estimate how home improvements change a property's value"
)]
struct Cli {
    /// Log at debug level (overrides HOMEVALUE_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every improvement in the catalog
    Catalog {
        #[arg(long)]
        json: bool,
    },

    /// Estimate cost, value increase, ROI and timeline for a selection
    Estimate {
        /// Current home value, e.g. 300000
        #[arg(long)]
        value: Decimal,

        /// Improvement ids (repeat or comma-separate)
        #[arg(long = "select", short = 's', value_delimiter = ',', required = true)]
        select: Vec<String>,

        #[arg(long)]
        sqft: Option<u32>,

        #[arg(long)]
        bedrooms: Option<u32>,

        #[arg(long)]
        bathrooms: Option<f64>,

        #[arg(long)]
        year_built: Option<i32>,

        /// single-family | condo | townhouse | multi-family
        #[arg(long)]
        property_type: Option<PropertyType>,

        #[arg(long)]
        json: bool,
    },

    /// Prompt-driven session: enter property data, toggle improvements, calculate
    Interactive,

    /// Manage ~/.homevalue/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config file if none exists
    Init,
    /// Print the effective configuration
    Show,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("HOMEVALUE_LOG")
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cfg = config::load_config().context("loading config")?;
    let catalog = Catalog::builtin();

    match cli.command {
        Command::Catalog { json } => {
            if json || cfg.display.json {
                println!("{}", serde_json::to_string_pretty(catalog)?);
            } else {
                print!("{}", render::render_catalog(catalog, &cfg.display));
            }
        }

        Command::Estimate {
            value,
            select,
            sqft,
            bedrooms,
            bathrooms,
            year_built,
            property_type,
            json,
        } => {
            let property = PropertyData::new(value)
                .with_square_feet(sqft.unwrap_or_default())
                .with_rooms(bedrooms.unwrap_or_default(), bathrooms.unwrap_or_default())
                .with_year_built(year_built.unwrap_or_default())
                .with_property_type(property_type.unwrap_or(cfg.property.default_type));
            let selection: Selection = select.iter().map(|s| s.trim()).collect();
            run_estimate(catalog, &selection, &property, &cfg, json)?;
        }

        Command::Interactive => {
            session::run_interactive(catalog, &cfg)?;
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => config::show_config(&cfg)?,
        },
    }

    Ok(())
}

fn run_estimate(
    catalog: &Catalog,
    selection: &Selection,
    property: &PropertyData,
    cfg: &Config,
    json: bool,
) -> Result<()> {
    // Validate the way the form does before handing off to the core.
    if !property.has_valid_value() {
        bail!("Please enter a valid current home value");
    }

    for id in selection.iter().filter(|id| !catalog.contains(id)) {
        tracing::warn!(id, "unknown improvement id, skipping");
    }

    let items = select_items(catalog, selection);
    if items.is_empty() {
        bail!("Please select at least one improvement");
    }

    let result = aggregate(&items, property.current_value)
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    if json || cfg.display.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render::render_result(&result, property, &cfg.display));
    }
    Ok(())
}
