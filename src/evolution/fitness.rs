//! Mismatch scoring between a candidate phrase and the target.

/// Count the positions where `text` and `target` disagree.
///
/// The two strings are walked in lockstep and comparison stops at the end
/// of the shorter one, so length differences beyond the common prefix do
/// not contribute. The result is a cost: 0 means the compared span matches
/// exactly, and lower is better.
pub fn mismatch_count(text: &str, target: &str) -> usize {
    text.chars()
        .zip(target.chars())
        .filter(|(a, b)| a != b)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_is_zero() {
        assert_eq!(mismatch_count("hello", "hello"), 0);
    }

    #[test]
    fn test_counts_differing_positions() {
        assert_eq!(mismatch_count("hxllo", "hello"), 1);
        assert_eq!(mismatch_count("xxllx", "hello"), 3);
        assert_eq!(mismatch_count("abc", "xyz"), 3);
    }

    #[test]
    fn test_length_mismatch_compares_overlap_only() {
        assert_eq!(mismatch_count("he", "hello"), 0);
        assert_eq!(mismatch_count("hello", "he"), 0);
        assert_eq!(mismatch_count("hx", "hello"), 1);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(mismatch_count("", ""), 0);
        assert_eq!(mismatch_count("", "hello"), 0);
        assert_eq!(mismatch_count("hello", ""), 0);
    }
}
