//! Evolutionary search that reproduces a target phrase from random noise.
//!
//! Each generation, every surviving candidate produces a fixed number of
//! offspring, each differing from its parent by at most one character. The
//! whole offspring pool is scored against the target and only the closest
//! few survive; parents are discarded. The loop ends when the target text
//! itself appears in a generation, or fails once the generation cap is
//! reached.
//!
//! The stages live in their own submodules:
//!
//! - `candidate`: one trial phrase plus its mutation ancestry
//! - `mutation`: the seedable RNG and the single-character substitution
//!   operator
//! - `fitness`: positional mismatch counting against the target
//! - `select`: mismatch-ordered survivor selection
//! - `search`: the generation engine and the outer loop
//!
//! # Example
//!
//! ```rust
//! use phrase_evo::evolution::EvolutionEngine;
//! use phrase_evo::schema::EvolutionConfig;
//!
//! let config = EvolutionConfig {
//!     random_seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let mut engine = EvolutionEngine::new("hi", config);
//! let outcome = engine.run().expect("short targets converge well within the cap");
//!
//! assert_eq!(outcome.best.text, "hi");
//! println!("reproduced in {} generations", outcome.generations);
//! ```

mod candidate;
mod fitness;
mod mutation;
mod search;
mod select;

pub use candidate::Candidate;
pub use fitness::mismatch_count;
pub use mutation::{ALPHABET, PhraseRng};
pub use search::{EvolutionEngine, EvolutionOutcome, EvolveError};
pub use select::select;
