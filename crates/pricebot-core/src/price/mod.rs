//! Price lookups against a ticker endpoint.

pub mod client;
pub mod types;

pub use client::PriceFetcher;
pub use rust_decimal::Decimal;
pub use types::{PriceFailure, PriceResult, Ticker, QUOTE_ASSET};
