/// Core error type for the bot.
///
/// Adapter crates should map their specific errors into this type. Price lookups
/// never surface here: those are classified into `price::PriceFailure` and shown
/// to the user.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("external error: {0}")]
    External(String),
}

pub type Result<T> = std::result::Result<T, Error>;
