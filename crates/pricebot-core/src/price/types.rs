use rust_decimal::Decimal;

/// Quote currency every price is expressed in.
pub const QUOTE_ASSET: &str = "USDT";

/// A user-supplied base asset symbol, normalized to upper case.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ticker(String);

impl Ticker {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Remote symbol, e.g. `BTCUSDT`.
    pub fn symbol(&self) -> String {
        format!("{}{QUOTE_ASSET}", self.0)
    }

    /// Display pair, e.g. `BTC/USDT`.
    pub fn pair(&self) -> String {
        format!("{}/{QUOTE_ASSET}", self.0)
    }
}

/// Why a price lookup failed. Every variant is shown to the user as text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PriceFailure {
    #[error("Ticker not found.")]
    TickerNotFound,

    #[error("Request timed out. Please try again.")]
    Timeout,

    #[error("Network error. Please check your connection.")]
    NetworkError,

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

/// Outcome of a single price lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PriceResult {
    Quoted(Decimal),
    Failed(PriceFailure),
}

impl PriceResult {
    pub fn succeeded(&self) -> bool {
        matches!(self, PriceResult::Quoted(_))
    }

    pub fn value(&self) -> Option<Decimal> {
        match self {
            PriceResult::Quoted(v) => Some(*v),
            PriceResult::Failed(_) => None,
        }
    }

    pub fn failure_reason(&self) -> Option<&PriceFailure> {
        match self {
            PriceResult::Quoted(_) => None,
            PriceResult::Failed(f) => Some(f),
        }
    }
}

impl From<std::result::Result<Decimal, PriceFailure>> for PriceResult {
    fn from(r: std::result::Result<Decimal, PriceFailure>) -> Self {
        match r {
            Ok(v) => PriceResult::Quoted(v),
            Err(f) => PriceResult::Failed(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticker_is_case_folded_and_trimmed() {
        let a = Ticker::new("btc");
        let b = Ticker::new(" BTC ");
        assert_eq!(a, b);
        assert_eq!(a.symbol(), "BTCUSDT");
        assert_eq!(a.pair(), "BTC/USDT");
    }

    #[test]
    fn result_populates_exactly_one_side() {
        let ok = PriceResult::Quoted(Decimal::new(6500050, 2));
        assert!(ok.succeeded());
        assert_eq!(ok.value(), Some(Decimal::new(6500050, 2)));
        assert!(ok.failure_reason().is_none());

        let failed = PriceResult::Failed(PriceFailure::Timeout);
        assert!(!failed.succeeded());
        assert!(failed.value().is_none());
        assert_eq!(failed.failure_reason(), Some(&PriceFailure::Timeout));
    }

    #[test]
    fn failure_messages() {
        assert_eq!(PriceFailure::TickerNotFound.to_string(), "Ticker not found.");
        assert_eq!(
            PriceFailure::ApiError("HTTP status server error (500)".into()).to_string(),
            "API error: HTTP status server error (500)"
        );
        assert_eq!(
            PriceFailure::ParseError("bad".into()).to_string(),
            "Parse error: bad"
        );
    }
}
