//! Random phrase generation and the single-character mutation operator.
//!
//! All randomness flows through [`PhraseRng`], a seedable wrapper around
//! [`StdRng`]. The engine holds one master instance and hands child seeds
//! to parallel workers via [`PhraseRng::next_seed`], so a run with a fixed
//! seed is reproducible regardless of thread scheduling.

use rand::prelude::*;

use super::candidate::Candidate;

/// The fixed 27-symbol alphabet: lowercase ASCII letters plus space.
///
/// Both generation-zero phrases and mutation replacements draw from this
/// set, so candidate texts never contain characters outside it.
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz ";

/// Random number generator wrapper for phrase evolution.
pub struct PhraseRng {
    rng: StdRng,
}

impl PhraseRng {
    /// Create from seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create with random seed.
    pub fn random() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Draw one symbol uniformly from [`ALPHABET`].
    pub fn random_symbol(&mut self) -> char {
        ALPHABET[self.rng.gen_range(0..ALPHABET.len())] as char
    }

    /// Build a phrase of `length` independently drawn symbols.
    pub fn random_phrase(&mut self, length: usize) -> String {
        (0..length).map(|_| self.random_symbol()).collect()
    }

    /// Produce one offspring by substituting a single character of `parent`.
    ///
    /// The position and the replacement symbol are drawn uniformly. The
    /// replacement may equal the character it displaces, so the offspring
    /// text can be identical to the parent's. The parent's pre-mutation
    /// text is appended to the offspring history, which is then trimmed to
    /// the newest `history_limit` entries (0 keeps the full chain).
    ///
    /// The parent text must be non-empty.
    pub fn mutate(&mut self, parent: &Candidate, history_limit: usize) -> Candidate {
        let mut symbols: Vec<char> = parent.text.chars().collect();
        let index = self.rng.gen_range(0..symbols.len());
        symbols[index] = self.random_symbol();

        let mut history = parent.history.clone();
        history.push(parent.text.clone());
        if history_limit > 0 && history.len() > history_limit {
            let excess = history.len() - history_limit;
            history.drain(..excess);
        }

        Candidate {
            text: symbols.into_iter().collect(),
            history,
        }
    }

    /// Generate the next u64 for seeding child RNGs.
    pub fn next_seed(&mut self) -> u64 {
        self.rng.r#gen()
    }
}
