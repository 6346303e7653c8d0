//! `user-card`: fetch one user and print their profile card as HTML.
//!
//! The card is rendered into a `.card-container` element and the whole
//! element is written to stdout. A failed fetch is logged to stderr and
//! leaves the container empty; the exit code is still 0.

use std::io::Write;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use user_card_core::{
    CardOptions, CardRenderer, Fetcher, InsertPosition, MountPoint, UserId, DEFAULT_BASE_URL,
};

#[derive(Debug, Parser)]
#[command(name = "user-card", about = "Fetch a user and render their profile card")]
struct Args {
    /// Identifier of the user to fetch.
    #[arg(default_value = "2")]
    user_id: UserId,

    /// Root URL of the user service.
    #[arg(long, env = "USER_CARD_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Where the card goes relative to the container.
    #[arg(long, default_value = "beforeend")]
    position: InsertPosition,

    /// Extra class added to the card next to `user-card`.
    #[arg(long = "class", default_value = "user")]
    class_name: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();
    let args = Args::parse();
    let mut stdout = std::io::stdout().lock();
    run(args, &mut stdout).await
}

fn setup_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("USER_CARD_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let format_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(filter)
        .with(format_layer)
        .init();
}

async fn run(args: Args, out: &mut impl Write) -> anyhow::Result<()> {
    let mount = MountPoint::card_container();
    let renderer = CardRenderer::new(mount.clone());
    let fetcher = Fetcher::with_base_url(&args.base_url)?;
    let options = CardOptions {
        position: args.position,
        class_name: args.class_name,
    };

    tracing::info!(
        user_id = %args.user_id,
        base_url = %fetcher.client().base_url(),
        mount = %mount.selector(),
        "fetching user details"
    );
    fetcher.get_details(&args.user_id, &renderer, &options).await;

    out.write_all(mount.outer_html().as_bytes())?;
    out.flush()?;
    Ok(())
}
