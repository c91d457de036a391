use std::sync::Arc;

use anyhow::Context;
use teloxide::{dispatching::Dispatcher, dptree, prelude::*, types::BotCommand};

use pricebot_core::{config::Config, messaging::port::MessagingPort, ports::PriceSource};

use crate::handlers;
use crate::TelegramMessenger;

#[derive(Clone)]
pub struct AppState {
    /// Our own username, used to skip `/cmd@other_bot` in group chats.
    pub bot_username: String,
    pub prices: Arc<dyn PriceSource>,
    pub messenger: Arc<dyn MessagingPort>,
}

/// Commands advertised in the Telegram client menu.
pub fn bot_commands() -> Vec<BotCommand> {
    vec![
        BotCommand::new("start", "Show the welcome message"),
        BotCommand::new("price", "Get a USDT price, e.g. /price BTC"),
    ]
}

/// Register commands and poll Telegram for updates until the process stops.
pub async fn run_polling(cfg: Arc<Config>, prices: Arc<dyn PriceSource>) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.telegram_bot_token.clone());

    let me = bot
        .get_me()
        .await
        .context("failed to reach Telegram (is TELEGRAM_BOT_TOKEN valid?)")?;
    tracing::info!(username = %me.username(), "pricebot started");
    tracing::info!(endpoint = %cfg.price_api_url, timeout = ?cfg.price_request_timeout, "price source");

    // Best-effort: the bot still answers commands without the menu entries.
    if let Err(e) = bot.set_my_commands(bot_commands()).await {
        tracing::warn!(error = %e, "failed to register bot commands");
    }

    let messenger: Arc<dyn MessagingPort> = Arc::new(TelegramMessenger::new(bot.clone()));
    let state = Arc::new(AppState {
        bot_username: me.username().to_string(),
        prices,
        messenger,
    });

    let handler =
        dptree::entry().branch(Update::filter_message().endpoint(handlers::handle_message));

    tracing::info!("polling for updates");
    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .build()
        .dispatch()
        .await;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advertises_start_and_price() {
        let names: Vec<String> = bot_commands().into_iter().map(|c| c.command).collect();
        assert_eq!(names, vec!["start".to_string(), "price".to_string()]);
    }
}
