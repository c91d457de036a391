use async_trait::async_trait;

use crate::price::{PriceFetcher, PriceResult};

/// Hexagonal port for price lookups.
///
/// The command router only depends on this trait; `PriceFetcher` is the
/// production implementation.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Look up the USDT price of `ticker`. Never fails outright: every failure
    /// is classified into the returned result.
    async fn fetch(&self, ticker: &str) -> PriceResult;
}

#[async_trait]
impl PriceSource for PriceFetcher {
    async fn fetch(&self, ticker: &str) -> PriceResult {
        PriceFetcher::fetch(self, ticker).await
    }
}
