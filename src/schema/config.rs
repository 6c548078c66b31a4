//! Configuration types for phrase evolution runs.

use serde::{Deserialize, Serialize};

/// Default offspring produced per surviving parent.
fn default_offspring_per_parent() -> usize {
    100
}

/// Default survivor count kept after selection.
fn default_survival_size() -> usize {
    10
}

/// Default generation cap before a run fails.
fn default_max_generations() -> usize {
    2000
}

/// Default number of ancestor texts retained per candidate.
fn default_history_limit() -> usize {
    32
}

/// Parameters governing one evolution run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionConfig {
    /// Offspring produced per surviving parent each generation.
    #[serde(default = "default_offspring_per_parent")]
    pub offspring_per_parent: usize,
    /// Candidates retained after selection each generation.
    #[serde(default = "default_survival_size")]
    pub survival_size: usize,
    /// Maximum generations before the run fails.
    #[serde(default = "default_max_generations")]
    pub max_generations: usize,
    /// Ancestor texts retained per candidate (0 = unlimited).
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    /// Random seed for reproducibility (None = seed from entropy).
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            offspring_per_parent: default_offspring_per_parent(),
            survival_size: default_survival_size(),
            max_generations: default_max_generations(),
            history_limit: default_history_limit(),
            random_seed: None,
        }
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Offspring per parent must be non-zero")]
    InvalidOffspringCount,
    #[error("Survival size must be non-zero")]
    InvalidSurvivalSize,
    #[error("Generation cap must be non-zero")]
    InvalidGenerationCap,
}

impl EvolutionConfig {
    /// Validate configuration parameters.
    ///
    /// The engine itself does not re-check these, so callers accepting
    /// external configuration should validate before running.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.offspring_per_parent == 0 {
            return Err(ConfigError::InvalidOffspringCount);
        }
        if self.survival_size == 0 {
            return Err(ConfigError::InvalidSurvivalSize);
        }
        if self.max_generations == 0 {
            return Err(ConfigError::InvalidGenerationCap);
        }
        Ok(())
    }
}
