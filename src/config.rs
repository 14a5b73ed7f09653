//! Startup configuration read from the environment.
//!
//! Every value has a default. A missing variable silently uses it; a
//! malformed one logs a warning and uses it. Configuration never aborts
//! startup.

use std::env;
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use log::warn;

use crate::types::{
    DEFAULT_SPACESHIP_SPEED, DEFAULT_STARS_AMOUNT, DEFAULT_STAR_SYMBOLS, DEFAULT_TICK_TIMEOUT_SECS,
};

pub const DEFAULT_FRAMES_DIR: &str = "animations";
pub const DEFAULT_LOG_PATH: &str = "starfield.log";

#[derive(Debug, Clone, PartialEq)]
pub struct StarfieldConfig {
    /// Pause after each tick.
    pub tick_timeout: Duration,
    /// Glyphs stars are drawn with.
    pub star_symbols: Vec<char>,
    pub stars_amount: usize,
    /// Cells per tick while a direction key is held.
    pub spaceship_speed: f64,
    /// Directory containing the rocket frame files.
    pub frames_dir: PathBuf,
    /// Fixed RNG seed; `None` seeds from the clock.
    pub seed: Option<u32>,
    pub log_path: PathBuf,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            tick_timeout: Duration::from_secs_f64(DEFAULT_TICK_TIMEOUT_SECS),
            star_symbols: DEFAULT_STAR_SYMBOLS.chars().collect(),
            stars_amount: DEFAULT_STARS_AMOUNT,
            spaceship_speed: DEFAULT_SPACESHIP_SPEED,
            frames_dir: PathBuf::from(DEFAULT_FRAMES_DIR),
            seed: None,
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
        }
    }
}

impl StarfieldConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from any key/value source.
    ///
    /// The misspelled `TICK_TIMEOUNT` and `STAR_SIMBOLS` are still read when
    /// the correctly spelled variable is absent.
    pub fn from_lookup(read: impl Fn(&str) -> Option<String>) -> Self {
        let lookup = |key: &str| {
            read(key).or_else(|| legacy_name(key).and_then(|legacy| read(legacy)))
        };
        let defaults = Self::default();

        let tick_timeout = parse_var(&lookup, "TICK_TIMEOUT")
            .filter(|secs: &f64| {
                let ok = secs.is_finite() && *secs > 0.0;
                if !ok {
                    warn!("TICK_TIMEOUT must be a positive number of seconds, got {secs}");
                }
                ok
            })
            .and_then(|secs| match Duration::try_from_secs_f64(secs) {
                Ok(timeout) => Some(timeout),
                Err(err) => {
                    warn!("TICK_TIMEOUT={secs} is not a usable duration: {err}");
                    None
                }
            })
            .unwrap_or(defaults.tick_timeout);

        let star_symbols = match lookup("STAR_SYMBOLS") {
            Some(s) if !s.trim().is_empty() => s.trim().chars().collect(),
            Some(_) => {
                warn!("STAR_SYMBOLS is empty, using {DEFAULT_STAR_SYMBOLS:?}");
                defaults.star_symbols
            }
            None => defaults.star_symbols,
        };

        let stars_amount = parse_var(&lookup, "STARS_AMOUNT").unwrap_or(defaults.stars_amount);

        let spaceship_speed = parse_var(&lookup, "SPACESHIP_SPEED")
            .filter(|speed: &f64| {
                let ok = speed.is_finite() && *speed >= 0.0;
                if !ok {
                    warn!("SPACESHIP_SPEED must be a non-negative number, got {speed}");
                }
                ok
            })
            .unwrap_or(defaults.spaceship_speed);

        let frames_dir = non_empty(lookup("FRAMES_DIR"))
            .map(PathBuf::from)
            .unwrap_or(defaults.frames_dir);

        let seed = parse_var(&lookup, "STARFIELD_SEED");

        let log_path = non_empty(lookup("STARFIELD_LOG"))
            .map(PathBuf::from)
            .unwrap_or(defaults.log_path);

        Self {
            tick_timeout,
            star_symbols,
            stars_amount,
            spaceship_speed,
            frames_dir,
            seed,
            log_path,
        }
    }

    /// The configured seed, or one derived from the system clock.
    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}

fn legacy_name(key: &str) -> Option<&'static str> {
    match key {
        "TICK_TIMEOUT" => Some("TICK_TIMEOUNT"),
        "STAR_SYMBOLS" => Some("STAR_SIMBOLS"),
        _ => None,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .and_then(|s| if s.is_empty() { None } else { Some(s) })
}

fn parse_var<T: std::str::FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = non_empty(lookup(key))?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("ignoring malformed {key}={raw:?}, using default");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> StarfieldConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        StarfieldConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_set() {
        let cfg = config(&[]);
        assert_eq!(cfg, StarfieldConfig::default());
        assert_eq!(cfg.tick_timeout, Duration::from_millis(100));
        assert_eq!(cfg.star_symbols, vec!['+', '*', '.', ':']);
        assert_eq!(cfg.stars_amount, 200);
        assert_eq!(cfg.spaceship_speed, 10.0);
    }

    #[test]
    fn values_are_read() {
        let cfg = config(&[
            ("TICK_TIMEOUT", "0.05"),
            ("STAR_SYMBOLS", "ox"),
            ("STARS_AMOUNT", "12"),
            ("SPACESHIP_SPEED", "2.5"),
            ("FRAMES_DIR", "/tmp/frames"),
            ("STARFIELD_SEED", "42"),
            ("STARFIELD_LOG", "run.log"),
        ]);
        assert_eq!(cfg.tick_timeout, Duration::from_millis(50));
        assert_eq!(cfg.star_symbols, vec!['o', 'x']);
        assert_eq!(cfg.stars_amount, 12);
        assert_eq!(cfg.spaceship_speed, 2.5);
        assert_eq!(cfg.frames_dir, PathBuf::from("/tmp/frames"));
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.seed_or_clock(), 42);
        assert_eq!(cfg.log_path, PathBuf::from("run.log"));
    }

    #[test]
    fn malformed_values_fall_back() {
        let cfg = config(&[
            ("TICK_TIMEOUT", "fast"),
            ("STAR_SYMBOLS", "   "),
            ("STARS_AMOUNT", "-3"),
            ("SPACESHIP_SPEED", "NaN"),
            ("STARFIELD_SEED", "seed"),
        ]);
        assert_eq!(cfg, StarfieldConfig::default());
    }

    #[test]
    fn non_positive_tick_timeout_falls_back() {
        assert_eq!(config(&[("TICK_TIMEOUT", "0")]).tick_timeout, Duration::from_millis(100));
        assert_eq!(config(&[("TICK_TIMEOUT", "-1")]).tick_timeout, Duration::from_millis(100));
        assert_eq!(config(&[("TICK_TIMEOUT", "inf")]).tick_timeout, Duration::from_millis(100));
    }

    #[test]
    fn huge_tick_timeout_falls_back() {
        assert_eq!(config(&[("TICK_TIMEOUT", "1e30")]).tick_timeout, Duration::from_millis(100));
        assert_eq!(
            config(&[("TICK_TIMEOUT", "1.7976931348623157e308")]).tick_timeout,
            Duration::from_millis(100)
        );
    }

    #[test]
    fn legacy_variable_names_are_still_read() {
        let cfg = config(&[("TICK_TIMEOUNT", "0.25"), ("STAR_SIMBOLS", "#")]);
        assert_eq!(cfg.tick_timeout, Duration::from_millis(250));
        assert_eq!(cfg.star_symbols, vec!['#']);
    }

    #[test]
    fn correct_names_win_over_legacy_ones() {
        let cfg = config(&[
            ("TICK_TIMEOUT", "0.05"),
            ("TICK_TIMEOUNT", "0.25"),
            ("STAR_SYMBOLS", "o"),
            ("STAR_SIMBOLS", "#"),
        ]);
        assert_eq!(cfg.tick_timeout, Duration::from_millis(50));
        assert_eq!(cfg.star_symbols, vec!['o']);
    }

    #[test]
    fn zero_speed_is_allowed() {
        assert_eq!(config(&[("SPACESHIP_SPEED", "0")]).spaceship_speed, 0.0);
    }
}
