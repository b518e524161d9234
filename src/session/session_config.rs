//! Session configuration read from the environment.
//!
//! `CHESS_RULES_SEED` fixes the fallback/engine RNG seed and
//! `CHESS_RULES_MAX_PLIES` caps self-play games. Both are optional.

use crate::errors::{ChessRulesError, ChessRulesResult};

pub const SEED_ENV: &str = "CHESS_RULES_SEED";
pub const MAX_PLIES_ENV: &str = "CHESS_RULES_MAX_PLIES";

pub const DEFAULT_MAX_PLIES: u32 = 400;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub seed: Option<u64>,
    pub max_plies: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_plies: DEFAULT_MAX_PLIES,
        }
    }
}

impl SessionConfig {
    pub fn from_env() -> ChessRulesResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Missing or blank keys fall back to
    /// the defaults; present keys must parse.
    pub fn from_lookup<F>(lookup: F) -> ChessRulesResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = non_blank(lookup(SEED_ENV)) {
            config.seed = Some(parse_value(SEED_ENV, &raw)?);
        }
        if let Some(raw) = non_blank(lookup(MAX_PLIES_ENV)) {
            config.max_plies = parse_value(MAX_PLIES_ENV, &raw)?;
        }

        Ok(config)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_owned())
        .filter(|raw| !raw.is_empty())
}

fn parse_value<T: std::str::FromStr>(key: &str, raw: &str) -> ChessRulesResult<T> {
    raw.parse().map_err(|_| ChessRulesError::InvalidConfig {
        key: key.to_owned(),
        value: raw.to_owned(),
    })
}
