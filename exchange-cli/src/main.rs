//! Exchange CLI
//!
//! Command-line interface for the Currency Exchange API.

use anyhow::Result;
use clap::{Parser, Subcommand};

use exchange_client::ExchangeClient;

#[derive(Parser)]
#[command(name = "exchange")]
#[command(author, version, about = "Currency Exchange API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Exchange API
    #[arg(long, env = "API_URL", default_value = "http://localhost:8080")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Currency operations
    Currencies {
        #[command(subcommand)]
        action: CurrencyCommands,
    },
    /// Exchange rate operations
    Rates {
        #[command(subcommand)]
        action: RateCommands,
    },
    /// Convert an amount between two currencies
    Convert {
        /// Currency code to convert from
        #[arg(long)]
        from: String,
        /// Currency code to convert to
        #[arg(long)]
        to: String,
        /// Amount to convert
        #[arg(long)]
        amount: f64,
    },
    /// Check API health
    Health,
}

#[derive(Subcommand)]
enum CurrencyCommands {
    /// Register a new currency
    Add {
        /// Currency code (e.g. USD)
        code: String,
        /// Full currency name
        #[arg(long)]
        name: String,
        /// Currency sign (e.g. $)
        #[arg(long)]
        sign: String,
    },
    /// Get currency details
    Get {
        /// Currency code
        code: String,
    },
    /// List all currencies
    List,
}

#[derive(Subcommand)]
enum RateCommands {
    /// Register a new exchange rate
    Add {
        #[arg(long)]
        base: String,
        #[arg(long)]
        target: String,
        #[arg(long)]
        rate: f64,
    },
    /// Get the stored rate for a currency pair
    Get {
        #[arg(long)]
        base: String,
        #[arg(long)]
        target: String,
    },
    /// Update the stored rate for a currency pair
    Update {
        #[arg(long)]
        base: String,
        #[arg(long)]
        target: String,
        #[arg(long)]
        rate: f64,
    },
    /// List all exchange rates
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let client = ExchangeClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Currencies { action } => match action {
            CurrencyCommands::Add { code, name, sign } => {
                let currency = client.create_currency(&code, &name, &sign).await?;
                println!("{}", serde_json::to_string_pretty(&currency)?);
            }
            CurrencyCommands::Get { code } => {
                let currency = client.get_currency(&code).await?;
                println!("{}", serde_json::to_string_pretty(&currency)?);
            }
            CurrencyCommands::List => {
                let currencies = client.list_currencies().await?;
                println!("{}", serde_json::to_string_pretty(&currencies)?);
            }
        },

        Commands::Rates { action } => match action {
            RateCommands::Add { base, target, rate } => {
                let created = client.create_rate(&base, &target, rate).await?;
                println!("{}", serde_json::to_string_pretty(&created)?);
            }
            RateCommands::Get { base, target } => {
                let found = client.get_rate(&base, &target).await?;
                println!("{}", serde_json::to_string_pretty(&found)?);
            }
            RateCommands::Update { base, target, rate } => {
                let updated = client.update_rate(&base, &target, rate).await?;
                println!("{}", serde_json::to_string_pretty(&updated)?);
            }
            RateCommands::List => {
                let rates = client.list_rates().await?;
                println!("{}", serde_json::to_string_pretty(&rates)?);
            }
        },

        Commands::Convert { from, to, amount } => {
            let conversion = client.convert(&from, &to, amount).await?;
            println!("{}", serde_json::to_string_pretty(&conversion)?);
        }
    }

    Ok(())
}
