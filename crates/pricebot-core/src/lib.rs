//! Core domain + application logic for the crypto price bot.
//!
//! This crate is framework-agnostic. Telegram lives behind the messaging port
//! implemented in `pricebot-telegram`; the price endpoint lives behind
//! `ports::PriceSource`.

pub mod config;
pub mod domain;
pub mod errors;
pub mod formatting;
pub mod logging;
pub mod messaging;
pub mod ports;
pub mod price;

pub use errors::{Error, Result};
