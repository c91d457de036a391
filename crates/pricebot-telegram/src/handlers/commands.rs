use pricebot_core::{
    domain::ChatId,
    formatting::{escape_html, format_price_reply},
    messaging::types::{ChatAction, Command},
    price::Ticker,
};

use crate::router::AppState;

pub const WELCOME_TEXT: &str = "Welcome to Crypto Price Bot! 🚀\n\n\
Use /price <ticker> to get cryptocurrency prices.\n\
Example: /price BTC";

pub const USAGE_TEXT: &str = "Please provide a ticker symbol.\nUsage: /price BTC";

pub const FETCHING_TEXT: &str = "Fetching price...";

/// Route one parsed command. Delivery errors are logged, never propagated.
pub async fn handle_command(state: &AppState, cmd: Command) {
    match cmd.name.as_str() {
        "start" => send_text(state, cmd.chat_id, WELCOME_TEXT).await,
        "price" => handle_price(state, &cmd).await,
        other => tracing::debug!(command = %other, "ignoring unknown command"),
    }
}

async fn handle_price(state: &AppState, cmd: &Command) {
    let chat_id = cmd.chat_id;
    let Some(raw) = cmd.first_arg() else {
        send_text(state, chat_id, USAGE_TEXT).await;
        return;
    };

    let ticker = Ticker::new(raw);
    tracing::info!(
        chat_id = chat_id.0,
        user_id = cmd.user_id.map(|u| u.0),
        username = cmd.username.as_deref().unwrap_or("unknown"),
        ticker = %ticker.as_str(),
        "price command"
    );

    let placeholder = state
        .messenger
        .send_html(chat_id, &escape_html(FETCHING_TEXT))
        .await;
    if state.messenger.capabilities().supports_chat_actions {
        if let Err(e) = state
            .messenger
            .send_chat_action(chat_id, ChatAction::Typing)
            .await
        {
            tracing::debug!(error = %e, "failed to send typing action");
        }
    }

    let result = state.prices.fetch(ticker.as_str()).await;
    let html = escape_html(&format_price_reply(&ticker, &result));

    match placeholder {
        Ok(msg) if state.messenger.capabilities().supports_edit => {
            if let Err(e) = state.messenger.edit_html(msg, &html).await {
                tracing::warn!(error = %e, "failed to edit placeholder, sending reply instead");
                send_html(state, chat_id, &html).await;
            }
        }
        Ok(_) => send_html(state, chat_id, &html).await,
        Err(e) => {
            tracing::warn!(error = %e, "failed to send placeholder");
            send_html(state, chat_id, &html).await;
        }
    }
}

async fn send_text(state: &AppState, chat_id: ChatId, text: &str) {
    send_html(state, chat_id, &escape_html(text)).await;
}

async fn send_html(state: &AppState, chat_id: ChatId, html: &str) {
    if let Err(e) = state.messenger.send_html(chat_id, html).await {
        tracing::error!(chat_id = chat_id.0, error = %e, "failed to send reply");
    }
}
