//! Phrase Evo - Evolve a target phrase from random noise.
//!
//! This crate implements a deliberately small genetic algorithm: a single
//! random phrase is mutated one character at a time, offspring are scored
//! by how many positions differ from the target, and only the closest few
//! survive to parent the next generation. The loop repeats until the
//! target itself appears or a generation cap is hit.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Configuration and progress reporting types
//! - `evolution`: The evolutionary loop (candidates, mutation, fitness,
//!   selection, and the generation engine)
//!
//! # Example
//!
//! ```rust
//! use phrase_evo::{EvolutionConfig, EvolutionEngine};
//!
//! // Fix the seed for a reproducible run.
//! let config = EvolutionConfig {
//!     random_seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let mut engine = EvolutionEngine::new("hi", config);
//! let outcome = engine
//!     .run_with_observer(|report| {
//!         println!("{} {}", report.generation, report.best_text);
//!     })
//!     .expect("short in-alphabet targets converge well within the cap");
//!
//! assert_eq!(outcome.best.text, "hi");
//! ```

pub mod evolution;
pub mod schema;

// Re-export commonly used types
pub use evolution::{Candidate, EvolutionEngine, EvolutionOutcome, EvolveError};
pub use schema::{EvolutionConfig, EvolutionStats, GenerationReport};
