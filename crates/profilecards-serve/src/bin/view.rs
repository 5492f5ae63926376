//! Profilecards View - terminal renderer for public profile cards.
//!
//! Fetches a profile once from a running server, applies the requested
//! toggles locally, and prints the resulting cards.

use clap::Parser;
use profilecards_core::{
    CardId, LOADING_TEXT, LOCKED_NOTICE, ProfileClient, ProfilePage, ToggleOutcome, ViewState,
};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use profilecards_serve::render::text;

/// Print a public profile's cards.
#[derive(Parser, Debug)]
#[command(name = "profilecards-view")]
#[command(about = "Terminal viewer for public profile cards", long_about = None)]
struct Args {
    /// Base URL of the profilecards server.
    #[arg(long, env = "PROFILECARDS_SERVER", default_value = "http://localhost:8081")]
    server: String,

    /// Public slug of the profile.
    slug: String,

    /// Card to toggle before printing (repeatable).
    #[arg(long = "toggle", value_name = "CARD")]
    toggles: Vec<CardId>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let client = ProfileClient::new(&args.server)?;
    let mut page = ProfilePage::new();

    if page.navigate(&args.slug) {
        eprintln!("{LOADING_TEXT}");
        let result = client.fetch(&args.slug).await;
        page.resolve(&args.slug, result);
    }

    for card in &args.toggles {
        if page.toggle(*card) == Some(ToggleOutcome::Locked) {
            eprintln!("{}: {LOCKED_NOTICE}", card.title());
        }
    }

    print!("{}", text::render_state(page.state()));

    if let ViewState::Failed(failure) = page.state() {
        anyhow::bail!(
            "profile '{}' unavailable (status {:?})",
            args.slug,
            failure.status
        );
    }

    Ok(())
}
