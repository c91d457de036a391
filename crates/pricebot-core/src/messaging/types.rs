use crate::domain::{ChatId, UserId};

/// An inbound slash command, already split into name and argument text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command {
    pub chat_id: ChatId,
    pub user_id: Option<UserId>,
    pub username: Option<String>,
    /// Lower-cased command name without the leading `/` or `@botname`.
    pub name: String,
    /// Everything after the command name, trimmed.
    pub args: String,
}

impl Command {
    /// First whitespace-separated argument, if any.
    pub fn first_arg(&self) -> Option<&str> {
        self.args.split_whitespace().next()
    }
}

/// Parse `/cmd@botname arg1 ...` into `(cmd, rest)`.
pub fn parse_command(text: &str) -> (String, String) {
    let mut parts = text.trim().splitn(2, char::is_whitespace);
    let first = parts.next().unwrap_or("").trim();
    let rest = parts.next().unwrap_or("").trim().to_string();

    let cmd = first
        .trim_start_matches('/')
        .split('@')
        .next()
        .unwrap_or("")
        .to_lowercase();

    (cmd, rest)
}

/// Like `parse_command`, but `None` when the command names a different bot
/// (`/price@other_bot btc` in a group chat).
pub fn parse_command_for(text: &str, bot_username: &str) -> Option<(String, String)> {
    let first = text.split_whitespace().next().unwrap_or("");
    if let Some((_, target)) = first.split_once('@') {
        if !target.eq_ignore_ascii_case(bot_username) {
            return None;
        }
    }
    Some(parse_command(text))
}

/// Outgoing "chat action" (typing indicator).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatAction {
    Typing,
}

/// Capabilities / feature flags of a messenger implementation.
#[derive(Clone, Copy, Debug)]
pub struct MessagingCapabilities {
    pub supports_edit: bool,
    pub supports_chat_actions: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_command_with_bot_suffix() {
        assert_eq!(
            parse_command("/Price@crypto_price_bot eth"),
            ("price".to_string(), "eth".to_string())
        );
    }

    #[test]
    fn parses_bare_command() {
        assert_eq!(parse_command("/start"), ("start".to_string(), String::new()));
        assert_eq!(parse_command("  /price   "), ("price".to_string(), String::new()));
    }

    #[test]
    fn commands_for_other_bots_are_skipped() {
        assert_eq!(
            parse_command_for("/price@Crypto_Price_Bot btc", "crypto_price_bot"),
            Some(("price".to_string(), "btc".to_string()))
        );
        assert_eq!(
            parse_command_for("/price btc", "crypto_price_bot"),
            Some(("price".to_string(), "btc".to_string()))
        );
        assert_eq!(parse_command_for("/price@some_other_bot btc", "crypto_price_bot"), None);
    }

    #[test]
    fn first_arg_ignores_extra_words() {
        let (name, args) = parse_command("/price  sol  please");
        let cmd = Command {
            chat_id: ChatId(1),
            user_id: None,
            username: None,
            name,
            args,
        };
        assert_eq!(cmd.first_arg(), Some("sol"));
    }
}
