use clap::{Args, Subcommand};
use offora_app::domain::{
    moderation::{ModerationService, PgModerationService},
    stores::records::StoreUuid,
};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct StoreCommand {
    #[command(subcommand)]
    command: StoreSubcommand,
}

#[derive(Debug, Subcommand)]
enum StoreSubcommand {
    /// Make the store visible to customers
    Approve(StoreArgs),
    /// Hide the store and all of its offers
    Unapprove(StoreArgs),
}

#[derive(Debug, Args)]
struct StoreArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Store UUID
    #[arg(long)]
    store: Uuid,
}

pub(crate) async fn run(command: StoreCommand) -> Result<(), String> {
    match command.command {
        StoreSubcommand::Approve(args) => set_approval(args, true).await,
        StoreSubcommand::Unapprove(args) => set_approval(args, false).await,
    }
}

async fn set_approval(args: StoreArgs, approved: bool) -> Result<(), String> {
    let service = PgModerationService::new(super::connect(&args.database_url).await?);

    let store = service
        .set_store_approval(StoreUuid::from_uuid(args.store), approved)
        .await
        .map_err(|error| format!("failed to update store {}: {error}", args.store))?;

    println!("store_uuid: {}", store.uuid);
    println!("store_name: {}", store.name);
    println!("is_approved: {}", store.is_approved);

    Ok(())
}
