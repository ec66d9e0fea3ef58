use clap::{Parser, Subcommand};
use offora_app::database::{self, Db};

mod offer;
mod store;
mod token;

#[derive(Debug, Parser)]
#[command(name = "offora-app", about = "Offora operator CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Approve or hide a store
    Store(store::StoreCommand),
    /// Approve or hide a single offer
    Offer(offer::OfferCommand),
    /// Issue or revoke bearer tokens
    Token(token::TokenCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Store(command) => store::run(command).await,
            Commands::Offer(command) => offer::run(command).await,
            Commands::Token(command) => token::run(command).await,
        }
    }
}

async fn connect(database_url: &str) -> Result<Db, String> {
    let pool = database::connect(database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    Ok(Db::new(pool))
}
