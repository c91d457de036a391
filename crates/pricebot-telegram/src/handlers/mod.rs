//! Telegram update handlers.
//!
//! Each handler turns a teloxide `Message` into a core `Command` and lets
//! `commands` talk to the price source and messaging port.

use std::sync::Arc;

use teloxide::{prelude::*, types::Message};

use pricebot_core::{
    domain::{ChatId, UserId},
    messaging::types::{parse_command_for, Command},
};

use crate::router::AppState;

mod commands;

pub use commands::handle_command;

pub async fn handle_message(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    if !text.starts_with('/') {
        tracing::debug!(chat_id = msg.chat.id.0, "ignoring non-command message");
        return Ok(());
    }

    let Some((name, args)) = parse_command_for(text, &state.bot_username) else {
        tracing::debug!(chat_id = msg.chat.id.0, "ignoring command addressed to another bot");
        return Ok(());
    };
    let user = msg.from();
    let cmd = Command {
        chat_id: ChatId(msg.chat.id.0),
        user_id: user.map(|u| UserId(u.id.0 as i64)),
        username: user.and_then(|u| u.username.clone()),
        name,
        args,
    };

    handle_command(&state, cmd).await;
    Ok(())
}
