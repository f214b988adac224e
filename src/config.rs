//! Runtime configuration.
//!
//! Layered: built-in defaults, then `CALM_ARCADE_*` environment variables,
//! then command-line flags. A bad environment value is logged and ignored;
//! a bad flag is an error.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Context, Result};

use crate::types::{Tab, BASE_DROP_MS};

pub const ENV_SEED: &str = "CALM_ARCADE_SEED";
pub const ENV_DROP_MS: &str = "CALM_ARCADE_DROP_MS";
pub const ENV_TAB: &str = "CALM_ARCADE_TAB";
pub const ENV_LOG: &str = "CALM_ARCADE_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArcadeConfig {
    /// Seeds every game's RNG
    pub seed: u32,
    /// Baseline Block Cascade gravity interval
    pub drop_interval_ms: u32,
    /// Tab shown at launch
    pub start_tab: Tab,
    /// Log file; no logging when unset
    pub log_path: Option<PathBuf>,
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            drop_interval_ms: BASE_DROP_MS,
            start_tab: Tab::Tiles,
            log_path: None,
        }
    }
}

/// An environment value that was ignored
#[derive(Debug)]
pub struct Rejected {
    pub key: &'static str,
    pub error: anyhow::Error,
}

impl ArcadeConfig {
    /// Read the environment and log anything rejected right away.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ArcadeConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let (config, rejected) = Self::parse_lookup(lookup);
        log_rejected(&rejected);
        config
    }

    /// Read the environment without logging.
    ///
    /// For callers that install their subscriber later; pass the rejected
    /// values to [`log_rejected`] once it is up.
    pub fn parse_env() -> (Self, Vec<Rejected>) {
        Self::parse_lookup(|key| env::var(key).ok())
    }

    pub fn parse_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<Rejected>) {
        let mut config = Self::default();
        let mut rejected = Vec::new();
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        if let Some(raw) = var(ENV_SEED) {
            match parse_seed(&raw) {
                Ok(seed) => config.seed = seed,
                Err(error) => rejected.push(Rejected { key: ENV_SEED, error }),
            }
        }
        if let Some(raw) = var(ENV_DROP_MS) {
            match parse_drop_ms(&raw) {
                Ok(ms) => config.drop_interval_ms = ms,
                Err(error) => rejected.push(Rejected { key: ENV_DROP_MS, error }),
            }
        }
        if let Some(raw) = var(ENV_TAB) {
            match parse_tab(&raw) {
                Ok(tab) => config.start_tab = tab,
                Err(error) => rejected.push(Rejected { key: ENV_TAB, error }),
            }
        }
        config.log_path = var(ENV_LOG).map(PathBuf::from);

        (config, rejected)
    }
}

pub fn log_rejected(rejected: &[Rejected]) {
    for r in rejected {
        tracing::warn!(err = %r.error, "ignoring {}", r.key);
    }
}

/// Decimal or `0x`-prefixed hex
pub fn parse_seed(s: &str) -> Result<u32> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse::<u32>(),
    };
    parsed.with_context(|| format!("invalid seed: {s}"))
}

/// Positive millisecond count
pub fn parse_drop_ms(s: &str) -> Result<u32> {
    let ms = s
        .trim()
        .parse::<u32>()
        .with_context(|| format!("invalid drop interval: {s}"))?;
    if ms == 0 {
        return Err(anyhow!("drop interval must be positive"));
    }
    Ok(ms)
}

pub fn parse_tab(s: &str) -> Result<Tab> {
    Tab::from_str(s.trim())
        .ok_or_else(|| anyhow!("unknown tab: {s} (expected tiles, solitaire or cascade)"))
}

/// Seed from the wall clock
pub fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_secs() as u32) ^ d.subsec_nanos())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn env_overrides_defaults() {
        let config = ArcadeConfig::from_lookup(lookup(&[
            (ENV_SEED, "0x2a"),
            (ENV_DROP_MS, "250"),
            (ENV_TAB, "cascade"),
            (ENV_LOG, "/tmp/arcade.log"),
        ]));
        assert_eq!(config.seed, 42);
        assert_eq!(config.drop_interval_ms, 250);
        assert_eq!(config.start_tab, Tab::Cascade);
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/arcade.log")));
    }

    #[test]
    fn invalid_env_values_fall_back() {
        let config = ArcadeConfig::from_lookup(lookup(&[
            (ENV_DROP_MS, "0"),
            (ENV_TAB, "pinball"),
            (ENV_LOG, "   "),
        ]));
        assert_eq!(config.drop_interval_ms, BASE_DROP_MS);
        assert_eq!(config.start_tab, Tab::Tiles);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn rejected_values_are_kept_for_later_logging() {
        let (config, rejected) = ArcadeConfig::parse_lookup(lookup(&[
            (ENV_SEED, "seven"),
            (ENV_TAB, "pinball"),
            (ENV_DROP_MS, "300"),
        ]));
        assert_eq!(config.drop_interval_ms, 300);
        let keys: Vec<_> = rejected.iter().map(|r| r.key).collect();
        assert_eq!(keys, vec![ENV_SEED, ENV_TAB]);

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, || log_rejected(&rejected));

        let text = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(text.contains("WARN"));
        assert!(text.contains(ENV_SEED));
        assert!(text.contains("unknown tab: pinball"));
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn parse_helpers() {
        assert_eq!(parse_seed("123").unwrap(), 123);
        assert_eq!(parse_seed("0XFF").unwrap(), 255);
        assert!(parse_seed("-1").is_err());
        assert!(parse_drop_ms("abc").is_err());
        assert_eq!(parse_tab(" Solitaire ").unwrap(), Tab::Solitaire);
    }
}
