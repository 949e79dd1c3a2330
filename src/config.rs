// Demo driver settings. Each default can be overridden from the environment.
use std::{env, str::FromStr, time::Duration};

use life::Format;
use log::warn;

pub const DEFAULT_SIZE: usize = 20;
pub const DEFAULT_ITERATIONS: usize = 50;
pub const DEFAULT_DELAY_MS: u64 = 500;
pub const DEFAULT_FORMAT: &str = "text";

pub const SIZE_VAR: &str = "LIFE_SIZE";
pub const ITERATIONS_VAR: &str = "LIFE_ITERATIONS";
pub const DELAY_VAR: &str = "LIFE_DELAY_MS";
pub const FORMAT_VAR: &str = "LIFE_FORMAT";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub size: usize,
    pub iterations: usize,
    pub delay: Duration,
    pub format: Format,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            iterations: DEFAULT_ITERATIONS,
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            format: DEFAULT_FORMAT.parse().unwrap_or_default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            size: parse_or(&lookup, SIZE_VAR, defaults.size),
            iterations: parse_or(&lookup, ITERATIONS_VAR, defaults.iterations),
            delay: Duration::from_millis(parse_or(&lookup, DELAY_VAR, DEFAULT_DELAY_MS)),
            format: parse_or(&lookup, FORMAT_VAR, defaults.format),
        }
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    let Some(raw) = lookup(key) else {
        return default;
    };
    raw.trim().parse().unwrap_or_else(|_| {
        warn!("ignoring {key}={raw:?}, using default");
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|&(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(DEFAULT_FORMAT.parse::<Format>(), Ok(config.format));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            (SIZE_VAR, "8"),
            (ITERATIONS_VAR, " 3 "),
            (DELAY_VAR, "0"),
            (FORMAT_VAR, "html"),
        ]));
        assert_eq!(config.size, 8);
        assert_eq!(config.iterations, 3);
        assert_eq!(config.delay, Duration::ZERO);
        assert_eq!(config.format, Format::Html);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = Config::from_lookup(lookup(&[(SIZE_VAR, "big"), (FORMAT_VAR, "svg")]));
        assert_eq!(config.size, DEFAULT_SIZE);
        assert_eq!(config.format, Format::Text);
    }
}
