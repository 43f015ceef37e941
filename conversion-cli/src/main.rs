//! Conversions CLI
//!
//! Command-line interface for the Conversion API.

use anyhow::Result;
use clap::{Parser, Subcommand};

use conversion_client::ConversionClient;
use conversion_types::ConversionId;

#[derive(Parser)]
#[command(name = "conversions")]
#[command(author, version, about = "Currency conversion API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Conversion API
    #[arg(
        long,
        env = "CONVERSION_API_URL",
        default_value = "http://localhost:3000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a currency pair and record the result
    Convert {
        /// Source currency code (e.g. USD)
        #[arg(long)]
        from: String,
        /// Target currency code (e.g. EUR)
        #[arg(long)]
        to: String,
        /// Amount to convert (defaults to 1.0 on the server)
        #[arg(long)]
        amount: Option<f64>,
    },
    /// List all recorded conversions
    List,
    /// Get a conversion by ID
    Get {
        /// Conversion ID (UUID)
        id: String,
    },
    /// Delete a conversion by ID
    Delete {
        /// Conversion ID (UUID)
        id: String,
    },
    /// Check API health
    Health,
}

fn parse_conversion_id(s: &str) -> Result<ConversionId> {
    s.parse()
        .map_err(|_| anyhow::anyhow!("Invalid conversion ID: {}", s))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = ConversionClient::new(&cli.api_url);

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

        Commands::Convert { from, to, amount } => {
            let record = client.create_conversion(&from, &to, amount).await?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }

        Commands::List => {
            let records = client.list_conversions().await?;
            println!("{}", serde_json::to_string_pretty(&records)?);
        }

        Commands::Get { id } => {
            let conversion_id = parse_conversion_id(&id)?;
            match client.get_conversion(conversion_id).await? {
                Some(record) => println!("{}", serde_json::to_string_pretty(&record)?),
                None => {
                    eprintln!("✗ Conversion {} not found", conversion_id);
                    std::process::exit(1);
                }
            }
        }

        Commands::Delete { id } => {
            let conversion_id = parse_conversion_id(&id)?;
            client.delete_conversion(conversion_id).await?;
            println!("✓ Conversion deleted");
        }
    }

    Ok(())
}
