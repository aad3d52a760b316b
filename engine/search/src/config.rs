//! Search configuration parameters.

use serde::Deserialize;

/// Wall-clock budget for a single MCTS call, in milliseconds.
pub const DEFAULT_TIME_BUDGET_MS: u64 = 1000;

/// Ply bound for the minimax strategy. Large enough that the search is
/// effectively "until terminal" on late-game positions.
pub const DEFAULT_DEPTH_BOUND: u32 = 41;

/// Exploration constant in the UCT selection formula (~sqrt(2)).
pub const DEFAULT_EXPLORATION: f64 = 1.41;

/// Tunables for both search strategies.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Wall-clock budget for one MCTS call, in milliseconds. The deadline is
    /// polled between iterations only, so an iteration in progress may
    /// overrun it.
    pub time_budget_ms: u64,

    /// Maximum ply depth for the minimax strategy.
    pub depth_bound: u32,

    /// Exploration constant in the UCT formula. Higher values favor
    /// exploring rarely-visited children.
    pub exploration: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            time_budget_ms: DEFAULT_TIME_BUDGET_MS,
            depth_bound: DEFAULT_DEPTH_BOUND,
            exploration: DEFAULT_EXPLORATION,
        }
    }
}

impl SearchConfig {
    /// Fast settings for tests: short MCTS budget, shallow minimax.
    pub fn for_testing() -> Self {
        Self {
            time_budget_ms: 40,
            depth_bound: 4,
            exploration: DEFAULT_EXPLORATION,
        }
    }

    /// Builder pattern: set the MCTS time budget in milliseconds.
    pub fn with_time_budget_ms(mut self, ms: u64) -> Self {
        self.time_budget_ms = ms;
        self
    }

    /// Builder pattern: set the minimax depth bound.
    pub fn with_depth_bound(mut self, plies: u32) -> Self {
        self.depth_bound = plies;
        self
    }

    /// Builder pattern: set the UCT exploration constant.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration = c;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.time_budget_ms, 1000);
        assert_eq!(config.depth_bound, 41);
        assert!((config.exploration - 1.41).abs() < 1e-9);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::default()
            .with_time_budget_ms(250)
            .with_depth_bound(6)
            .with_exploration(2.0);

        assert_eq!(config.time_budget_ms, 250);
        assert_eq!(config.depth_bound, 6);
        assert!((config.exploration - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: SearchConfig = serde_json::from_str(r#"{"time_budget_ms": 500}"#).unwrap();
        assert_eq!(config.time_budget_ms, 500);
        assert_eq!(config.depth_bound, DEFAULT_DEPTH_BOUND);
        assert!((config.exploration - DEFAULT_EXPLORATION).abs() < 1e-9);
    }
}
