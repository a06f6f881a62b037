//! TCMB Rates CLI
//!
//! Command-line interface for the daily TCMB exchange rate bulletin.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tcmb_rates::{Code, CurrencyRate, FetchOptions, RateSnapshot, TCMB_BASE_URL};

#[derive(Parser)]
#[command(name = "tcmb")]
#[command(author, version, about = "TCMB exchange rate bulletin client", long_about = None)]
struct Cli {
    /// Base URL of the bulletin archive
    #[arg(long, env = "TCMB_BASE_URL", default_value = TCMB_BASE_URL)]
    base_url: String,

    /// Bulletin date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the quotes for one currency
    Rate {
        /// Currency code (e.g. USD)
        code: String,
    },
    /// List every currency the bulletin quotes
    List,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,tcmb_rates=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut options = FetchOptions::new().with_base_url(&cli.base_url);
    if let Some(date) = cli.date {
        options = options.with_date(date);
    }
    let snapshot = RateSnapshot::fetch_with(options);

    match cli.command {
        Commands::Rate { code } => {
            let code = Code::new(code.to_uppercase());
            let rate = snapshot.rate(&code);
            if rate.is_empty() {
                match snapshot.last_error() {
                    Some(error) => eprintln!("✗ could not retrieve the bulletin: {error}"),
                    None => eprintln!("✗ no quote for {} ({}) in this bulletin", code, code.name()),
                }
                std::process::exit(1);
            }
            println!("{}", serde_json::to_string_pretty(&rate)?);
        }

        Commands::List => {
            if let Some(error) = snapshot.last_error() {
                eprintln!("✗ could not retrieve the bulletin: {error}");
                std::process::exit(1);
            }
            let mut rates: Vec<&CurrencyRate> = snapshot.rates().collect();
            rates.sort_by(|a, b| a.code().as_str().cmp(b.code().as_str()));
            println!("{}", serde_json::to_string_pretty(&rates)?);
        }
    }

    Ok(())
}
