//! Progress and result reporting types for evolution runs.

use serde::{Deserialize, Serialize};

/// Observation emitted after every completed generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    /// 1-based index of the generation just completed.
    pub generation: usize,
    /// Offspring scored while producing this generation.
    pub pool_size: usize,
    /// Text of the best surviving candidate.
    pub best_text: String,
    /// Mismatch count of the best survivor against the target.
    pub best_mismatch: usize,
    /// Mean mismatch count across the surviving generation.
    pub avg_mismatch: f32,
}

/// Statistics from a completed evolution run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionStats {
    /// Total offspring produced and scored.
    pub offspring_evaluated: u64,
    /// Time taken (in seconds).
    pub elapsed_seconds: f64,
    /// Offspring scored per second.
    pub offspring_per_second: f64,
}
