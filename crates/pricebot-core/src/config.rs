use std::{env, fs, path::Path, time::Duration};

use crate::{errors::Error, Result};

/// Binance spot ticker endpoint.
pub const DEFAULT_PRICE_API_URL: &str = "https://api.binance.com/api/v3/ticker/price";

/// Upper bound on a single price request.
pub const DEFAULT_PRICE_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Typed configuration, read from the environment.
#[derive(Clone, Debug)]
pub struct Config {
    pub telegram_bot_token: String,
    pub price_api_url: String,
    pub price_request_timeout: Duration,
}

impl Config {
    /// Load from the process environment, after applying `./.env` if present.
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let telegram_bot_token = lookup("TELEGRAM_BOT_TOKEN")
            .and_then(non_empty)
            .ok_or_else(|| {
                Error::Config(
                    "TELEGRAM_BOT_TOKEN environment variable is required (get one from @BotFather)"
                        .to_string(),
                )
            })?;

        let price_api_url = lookup("PRICE_API_URL")
            .and_then(non_empty)
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|| DEFAULT_PRICE_API_URL.to_string());

        let price_request_timeout = match lookup("PRICE_REQUEST_TIMEOUT_MS").and_then(non_empty) {
            Some(raw) => {
                let ms = raw.trim().parse::<u64>().map_err(|_| {
                    Error::Config(format!("PRICE_REQUEST_TIMEOUT_MS must be an integer: {raw}"))
                })?;
                if ms == 0 {
                    return Err(Error::Config(
                        "PRICE_REQUEST_TIMEOUT_MS must be greater than zero".to_string(),
                    ));
                }
                Duration::from_millis(ms)
            }
            None => DEFAULT_PRICE_REQUEST_TIMEOUT,
        };

        Ok(Self {
            telegram_bot_token,
            price_api_url,
            price_request_timeout,
        })
    }
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for (key, val) in parse_dotenv(&contents) {
        if env::var_os(&key).is_some() {
            continue; // do not override existing env
        }
        env::set_var(key, val);
    }
}

fn parse_dotenv(contents: &str) -> Vec<(String, String)> {
    let mut out = Vec::new();
    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim().trim_start_matches("export ").trim();
        if key.is_empty() {
            continue;
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        out.push((key.to_string(), val));
    }
    out
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn missing_token_is_a_config_error() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, Error::Config(ref m) if m.contains("TELEGRAM_BOT_TOKEN")));
    }

    #[test]
    fn blank_token_is_treated_as_missing() {
        let err = Config::from_lookup(lookup_from(&[("TELEGRAM_BOT_TOKEN", "   ")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn defaults_apply_when_only_token_is_set() {
        let cfg = Config::from_lookup(lookup_from(&[("TELEGRAM_BOT_TOKEN", "123:abc")])).unwrap();
        assert_eq!(cfg.telegram_bot_token, "123:abc");
        assert_eq!(cfg.price_api_url, DEFAULT_PRICE_API_URL);
        assert_eq!(cfg.price_request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn overrides_endpoint_and_timeout() {
        let cfg = Config::from_lookup(lookup_from(&[
            ("TELEGRAM_BOT_TOKEN", "t"),
            ("PRICE_API_URL", " http://127.0.0.1:9000/ticker "),
            ("PRICE_REQUEST_TIMEOUT_MS", "2500"),
        ]))
        .unwrap();
        assert_eq!(cfg.price_api_url, "http://127.0.0.1:9000/ticker");
        assert_eq!(cfg.price_request_timeout, Duration::from_millis(2500));
    }

    #[test]
    fn rejects_bad_timeouts() {
        for raw in ["soon", "0"] {
            let err = Config::from_lookup(lookup_from(&[
                ("TELEGRAM_BOT_TOKEN", "t"),
                ("PRICE_REQUEST_TIMEOUT_MS", raw),
            ]))
            .unwrap_err();
            assert!(matches!(err, Error::Config(_)), "{raw}");
        }
    }

    #[test]
    fn parses_dotenv_lines() {
        let parsed = parse_dotenv(
            "# comment\n\nTELEGRAM_BOT_TOKEN=\"123:abc\"\nexport PRICE_API_URL='http://x'\nnot a pair\n=novalue\n",
        );
        assert_eq!(
            parsed,
            vec![
                ("TELEGRAM_BOT_TOKEN".to_string(), "123:abc".to_string()),
                ("PRICE_API_URL".to_string(), "http://x".to_string()),
            ]
        );
    }
}
