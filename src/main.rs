use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info, warn};

use commands::AppState;
use statecodes::StateCodes;
use telegram::Bot;

mod commands;
mod constants;
mod districts;
mod fetch;
mod national;
mod statecodes;
mod stats;
mod table;
mod telegram;

#[derive(Parser, Debug)]
#[command(name = "covibot")]
#[command(about = "Telegram bot serving covid19india.org statistics")]
struct Args {
    /// Path to the state code directory file
    #[arg(long, default_value = "statecodes.json")]
    statecodes: PathBuf,

    /// Long-poll timeout for getUpdates, in seconds
    #[arg(long, default_value = "30")]
    poll_timeout: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();

    let token =
        std::env::var("TELEGRAM_BOT_TOKEN").context("TELEGRAM_BOT_TOKEN is not set")?;
    let codes = StateCodes::load(&args.statecodes).with_context(|| {
        format!("loading state codes from {}", args.statecodes.display())
    })?;
    info!(path = %args.statecodes.display(), "state code directory loaded");

    let client = fetch::https_client();
    let bot = Bot::new(client.clone(), token);
    let state = AppState { client, codes };

    info!("polling for updates");
    let mut offset = 0i64;
    loop {
        let updates = match bot.get_updates(offset, args.poll_timeout).await {
            Ok(updates) => updates,
            Err(err) => {
                warn!(%err, "getUpdates failed");
                tokio::time::sleep(Duration::from_secs(3)).await;
                continue;
            }
        };

        for update in updates {
            offset = offset.max(update.update_id + 1);
            let Some(message) = update.message else { continue };
            let Some(text) = message.text else { continue };

            debug!(chat = message.chat.id, %text, "handling message");
            let reply = commands::handle(&state, &text).await;
            if let Err(err) = bot.send_message(message.chat.id, &reply).await {
                warn!(%err, chat = message.chat.id, "sendMessage failed");
            }
        }
    }
}
