//! Survivor selection: rank an offspring pool against the target and keep
//! the best.

use std::cmp::Ordering;

use super::candidate::Candidate;
use super::fitness::mismatch_count;

/// Ordering used during selection: ascending mismatch count, ties broken by
/// lexicographic comparison of the candidate text.
///
/// The tie-break carries no algorithmic meaning; it exists so that runs
/// with a fixed random seed produce identical survivor sets. Candidate
/// texts are ASCII by construction, so byte order and character order
/// agree.
fn selection_order(a: &(usize, Candidate), b: &(usize, Candidate)) -> Ordering {
    a.0.cmp(&b.0).then_with(|| a.1.text.cmp(&b.1.text))
}

/// Keep the best `survival_size` candidates from `pool`.
///
/// Every candidate is scored against `target`, the pool is stable-sorted
/// by ascending mismatch count (ties broken by candidate text), and the
/// leading `survival_size` entries are returned in that order. A pool
/// smaller than `survival_size` is returned whole.
pub fn select(pool: Vec<Candidate>, target: &str, survival_size: usize) -> Vec<Candidate> {
    let mut scored: Vec<(usize, Candidate)> = pool
        .into_iter()
        .map(|candidate| (mismatch_count(&candidate.text, target), candidate))
        .collect();

    scored.sort_by(selection_order);
    scored.truncate(survival_size);
    scored.into_iter().map(|(_, candidate)| candidate).collect()
}
