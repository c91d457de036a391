use rust_decimal::{Decimal, RoundingStrategy};

use crate::price::{PriceResult, Ticker};

/// Escape text for Telegram HTML parse mode.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Format a decimal with thousands separators and exactly two decimal places,
/// e.g. `65000.5` -> `65,000.50`.
pub fn format_amount(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    let text = rounded.to_string();

    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    format!("{sign}{}.{frac_part}", group_thousands(int_part))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Plain-text reply for a successful quote: `BTC/USDT: $65,000.50`.
pub fn format_quote(ticker: &Ticker, value: Decimal) -> String {
    format!("{}: ${}", ticker.pair(), format_amount(value))
}

/// Plain-text reply for any lookup outcome.
pub fn format_price_reply(ticker: &Ticker, result: &PriceResult) -> String {
    match result {
        PriceResult::Quoted(value) => format_quote(ticker, *value),
        PriceResult::Failed(failure) => failure.to_string(),
    }
}
