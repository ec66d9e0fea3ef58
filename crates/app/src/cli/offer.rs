use clap::{Args, Subcommand};
use offora_app::domain::{
    moderation::{ModerationService, PgModerationService},
    offers::records::OfferUuid,
};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct OfferCommand {
    #[command(subcommand)]
    command: OfferSubcommand,
}

#[derive(Debug, Subcommand)]
enum OfferSubcommand {
    /// Approve a pending offer
    Approve(OfferArgs),
    /// Withdraw approval from an offer
    Unapprove(OfferArgs),
}

#[derive(Debug, Args)]
struct OfferArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Offer UUID
    #[arg(long)]
    offer: Uuid,
}

pub(crate) async fn run(command: OfferCommand) -> Result<(), String> {
    match command.command {
        OfferSubcommand::Approve(args) => set_approval(args, true).await,
        OfferSubcommand::Unapprove(args) => set_approval(args, false).await,
    }
}

async fn set_approval(args: OfferArgs, approved: bool) -> Result<(), String> {
    let service = PgModerationService::new(super::connect(&args.database_url).await?);

    let offer = service
        .set_offer_approval(OfferUuid::from_uuid(args.offer), approved)
        .await
        .map_err(|error| format!("failed to update offer {}: {error}", args.offer))?;

    println!("offer_uuid: {}", offer.uuid);
    println!("offer_title: {}", offer.title);
    println!("is_approved: {}", offer.is_approved);

    Ok(())
}
