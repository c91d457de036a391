use std::{str::FromStr, time::Duration};

use rust_decimal::Decimal;
use serde_json::Value;

use crate::{config::Config, errors::Error, Result};

use super::types::{PriceFailure, PriceResult, Ticker};

/// Single-shot price lookups against a Binance-compatible ticker endpoint.
///
/// Cheap to clone; the underlying `reqwest::Client` pools connections.
#[derive(Clone, Debug)]
pub struct PriceFetcher {
    endpoint: String,
    http: reqwest::Client,
}

impl PriceFetcher {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::External(format!("http client build error: {e}")))?;
        Ok(Self {
            endpoint: endpoint.into(),
            http,
        })
    }

    pub fn from_config(cfg: &Config) -> Result<Self> {
        Self::new(cfg.price_api_url.clone(), cfg.price_request_timeout)
    }

    /// Fetch the USDT price of `ticker` (case-insensitive). One request, no retries.
    pub async fn fetch(&self, ticker: &str) -> PriceResult {
        let ticker = Ticker::new(ticker);
        let outcome = self.fetch_ticker(&ticker).await;
        match &outcome {
            Ok(price) => tracing::info!(symbol = %ticker.symbol(), %price, "price lookup ok"),
            Err(failure) => {
                tracing::warn!(symbol = %ticker.symbol(), %failure, "price lookup failed")
            }
        }
        outcome.into()
    }

    async fn fetch_ticker(&self, ticker: &Ticker) -> std::result::Result<Decimal, PriceFailure> {
        let symbol = ticker.symbol();
        let resp = self
            .http
            .get(&self.endpoint)
            .query(&[("symbol", symbol.as_str())])
            .send()
            .await
            .map_err(classify_transport_error)?;

        // Binance answers unknown symbols with 400 {"code":-1121,"msg":"Invalid symbol."}.
        if resp.status() == reqwest::StatusCode::BAD_REQUEST {
            return Err(PriceFailure::TickerNotFound);
        }

        // Unfollowed redirects (300, 304, 3xx without Location) land here too.
        let status = resp.status();
        if !status.is_success() {
            return Err(PriceFailure::ApiError(format!("HTTP status {status}")));
        }

        let body = resp.bytes().await.map_err(classify_transport_error)?;
        parse_price_body(&body)
    }
}

fn classify_transport_error(e: reqwest::Error) -> PriceFailure {
    if e.is_timeout() {
        PriceFailure::Timeout
    } else if e.is_connect() || e.is_request() || e.is_body() {
        PriceFailure::NetworkError
    } else if e.is_decode() {
        PriceFailure::ParseError(e.to_string())
    } else if e.is_builder() {
        PriceFailure::UnexpectedError(e.to_string())
    } else {
        PriceFailure::ApiError(e.to_string())
    }
}

/// Extract the decimal `price` field from a ticker response body.
fn parse_price_body(body: &[u8]) -> std::result::Result<Decimal, PriceFailure> {
    let v: Value =
        serde_json::from_slice(body).map_err(|e| PriceFailure::ParseError(e.to_string()))?;

    let Some(price) = v.get("price") else {
        return Err(PriceFailure::TickerNotFound);
    };

    let raw = match price {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        other => {
            return Err(PriceFailure::ParseError(format!(
                "price is not a number: {other}"
            )))
        }
    };

    Decimal::from_str(&raw)
        .or_else(|_| Decimal::from_scientific(&raw))
        .map_err(|e| PriceFailure::ParseError(format!("invalid price {raw:?}: {e}")))
}
