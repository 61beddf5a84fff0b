use std::{fmt, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::agenda::strategy::{DEFAULT_BEAM_WIDTH, Strategy, StrategyConfig};

const DEFAULT_SEARCH_CONFIG_YAML: &str = include_str!("../config/search.default.yaml");

/// Search settings shared by the graph and game-tree entry points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Named graph search strategy.
    pub strategy: Strategy,
    /// Paths kept per level; only valid with the `beam` strategy, which
    /// falls back to `DEFAULT_BEAM_WIDTH` when unset.
    pub beam_width: Option<usize>,
    /// Game-tree depth limit; `None` searches to the end of the game.
    pub depth_limit: Option<u32>,
    /// Whether the root player maximizes.
    pub maximize: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            strategy: Strategy::AStar,
            beam_width: None,
            depth_limit: Some(4),
            maximize: true,
        }
    }
}

impl SearchConfig {
    /// Parse a search config from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, SearchConfigError> {
        let config: SearchConfig = serde_yaml::from_str(yaml).map_err(SearchConfigError::Yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a search config from a YAML file path.
    pub fn from_yaml_path(path: impl AsRef<Path>) -> Result<Self, SearchConfigError> {
        let yaml = fs::read_to_string(path).map_err(SearchConfigError::Io)?;
        Self::from_yaml_str(&yaml)
    }

    /// Return the default YAML config included with this crate.
    pub fn default_yaml() -> &'static str {
        DEFAULT_SEARCH_CONFIG_YAML
    }

    /// Parse the default YAML config included with this crate.
    pub fn from_default_yaml() -> Result<Self, SearchConfigError> {
        Self::from_yaml_str(Self::default_yaml())
    }

    /// Reject settings the searches would silently misread.
    pub fn validate(&self) -> Result<(), SearchConfigError> {
        match (self.strategy, self.beam_width) {
            (_, Some(0)) => {
                return Err(SearchConfigError::Invalid(
                    "beam_width 0 would drop every path after the first level; use 1 or more"
                        .to_string(),
                ));
            }
            (Strategy::Beam, _) | (_, None) => {}
            (strategy, Some(width)) => {
                return Err(SearchConfigError::Invalid(format!(
                    "beam_width {width} is set but strategy '{}' keeps a full agenda; \
                     remove beam_width or use strategy 'beam'",
                    strategy.name()
                )));
            }
        }
        if self.depth_limit == Some(0) {
            return Err(SearchConfigError::Invalid(
                "depth_limit 0 leaves the game tree unsearched; use null to search to the end"
                    .to_string(),
            ));
        }
        Ok(())
    }

    /// Agenda parameters for the configured strategy.
    pub fn strategy_config(&self) -> StrategyConfig {
        match self.strategy {
            Strategy::Beam => {
                StrategyConfig::beam(self.beam_width.unwrap_or(DEFAULT_BEAM_WIDTH))
            }
            other => other.config(),
        }
    }
}

/// Error type for loading and validating `SearchConfig`.
#[derive(Debug)]
pub enum SearchConfigError {
    Io(std::io::Error),
    Yaml(serde_yaml::Error),
    Invalid(String),
}

impl fmt::Display for SearchConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchConfigError::Io(err) => write!(f, "failed to read config file: {err}"),
            SearchConfigError::Yaml(err) => write!(f, "failed to parse config YAML: {err}"),
            SearchConfigError::Invalid(err) => write!(f, "invalid search config: {err}"),
        }
    }
}

impl std::error::Error for SearchConfigError {}
