use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use visascan_core::LookupQuery;

mod lookup;
mod report;

#[derive(Debug, Parser)]
#[command(name = "visascan-cli")]
#[command(about = "Visa requirements lookup")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Look up the visa requirements for a nationality entering a destination.
    Lookup {
        /// Nationality whose requirements page is consulted (e.g. "France").
        #[arg(long)]
        nationality: String,

        /// Destination country or region to match in the requirements table.
        #[arg(long)]
        destination: String,

        /// Target language for localized fields; "en" skips localization.
        #[arg(long, default_value = "en")]
        language: String,

        /// Recorded on the output record; the run always fetches one page.
        #[arg(long, default_value_t = 1)]
        max_fetch_limit: u32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = visascan_core::load_app_config()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Lookup {
            nationality,
            destination,
            language,
            max_fetch_limit,
        } => {
            let query = LookupQuery::new(&nationality, &destination, &language, max_fetch_limit)?;
            lookup::run(&config, &query).await?;
        }
    }

    Ok(())
}
