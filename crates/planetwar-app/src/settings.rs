//! Runner settings, read from the environment.
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `PLANETWAR_CONFIG` | JSON [`GameConfig`] file | built-in defaults, time-based seed |
//! | `PLANETWAR_ROUNDS` | games to play before exiting | 1 |
//! | `PLANETWAR_UNPACED` | `1` runs ticks back to back | paced at the tick rate |
//! | `PLANETWAR_MAX_TICKS` | ticks after which a round is abandoned | 36000 |
//! | `PLANETWAR_BACKGROUND` | background image path | `background.jpg` |
//!
//! Log filtering uses the standard `RUST_LOG` variable.

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};
use planetwar_core::GameConfig;

const DEFAULT_MAX_TICKS: u64 = 36_000;
const DEFAULT_BACKGROUND: &str = "background.jpg";

/// Everything the runner needs before the first tick.
#[derive(Debug, Clone)]
pub struct Settings {
    pub config: GameConfig,
    pub rounds: u32,
    pub paced: bool,
    pub max_ticks: u64,
    pub background: PathBuf,
}

impl Settings {
    /// Reads settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let config = match lookup("PLANETWAR_CONFIG") {
            Some(path) => {
                let json = fs::read_to_string(&path)
                    .with_context(|| format!("failed to read config file {path}"))?;
                GameConfig::from_json_str(&json)
                    .with_context(|| format!("invalid config file {path}"))?
            }
            None => GameConfig::with_seed(time_seed()),
        };

        let rounds = parse_or(&lookup, "PLANETWAR_ROUNDS", 1)?;
        if rounds == 0 {
            bail!("PLANETWAR_ROUNDS must be at least 1");
        }
        let max_ticks = parse_or(&lookup, "PLANETWAR_MAX_TICKS", DEFAULT_MAX_TICKS)?;
        let paced = lookup("PLANETWAR_UNPACED").as_deref() != Some("1");
        let background = lookup("PLANETWAR_BACKGROUND")
            .map_or_else(|| PathBuf::from(DEFAULT_BACKGROUND), PathBuf::from);

        Ok(Self {
            config,
            rounds,
            paced,
            max_ticks,
            background,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} is not a valid number: {raw:?}")),
        None => Ok(default),
    }
}

/// Seed for games started without a config file.
fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| {
            #[allow(clippy::cast_possible_truncation)]
            let nanos = elapsed.as_nanos() as u64;
            nanos
        })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_variables() {
        let settings = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings.rounds, 1);
        assert!(settings.paced);
        assert_eq!(settings.max_ticks, DEFAULT_MAX_TICKS);
        assert_eq!(settings.background, PathBuf::from("background.jpg"));
        assert_eq!(settings.config.planet_count, 10);
    }

    #[test]
    fn rounds_and_pacing_are_read() {
        let settings = Settings::from_lookup(lookup(&[
            ("PLANETWAR_ROUNDS", "3"),
            ("PLANETWAR_UNPACED", "1"),
            ("PLANETWAR_MAX_TICKS", "500"),
        ]))
        .unwrap();
        assert_eq!(settings.rounds, 3);
        assert!(!settings.paced);
        assert_eq!(settings.max_ticks, 500);
    }

    #[test]
    fn bad_numbers_are_errors() {
        assert!(Settings::from_lookup(lookup(&[("PLANETWAR_ROUNDS", "many")])).is_err());
        assert!(Settings::from_lookup(lookup(&[("PLANETWAR_ROUNDS", "0")])).is_err());
    }

    #[test]
    fn config_file_is_loaded() {
        let path = std::env::temp_dir().join(format!("planetwar-cfg-{}.json", std::process::id()));
        fs::write(&path, r#"{ "seed": 77, "planet_count": 6 }"#).unwrap();
        let path_str = path.to_string_lossy().into_owned();
        let settings = Settings::from_lookup(lookup(&[("PLANETWAR_CONFIG", path_str.as_str())]));
        fs::remove_file(&path).unwrap();

        let settings = settings.unwrap();
        assert_eq!(settings.config.seed, 77);
        assert_eq!(settings.config.planet_count, 6);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let result = Settings::from_lookup(lookup(&[("PLANETWAR_CONFIG", "/nonexistent/planetwar.json")]));
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("failed to read config file"));
    }
}
