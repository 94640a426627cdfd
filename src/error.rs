//! Unified error type for neardup.
//!
//! All configuration errors are raised before any state mutation; all lookup
//! errors (`UnknownLabel`, `LabelExists`) leave the index unchanged. There is
//! no catch-all string variant — every failure mode described by the design
//! gets its own named variant so callers can match on it.
//!
//! `BadPermutationCount` and `BadMinJaccard` cover two configuration
//! constraints (`P >= 1`, `0 <= min_jaccard <= 1`) that are named only as
//! constraints, not as their own error kind; `#[non_exhaustive]` leaves room
//! for exactly this kind of addition.

use thiserror::Error;

/// Main error type for `neardup` operations.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum NeardupError {
    /// The shingle sequence for a document would be empty, including `k`
    /// exceeding the text's character/token length.
    #[error("shingle sequence is empty: k={k} exceeds input length {len}")]
    InputTooShort { k: usize, len: usize },

    /// `k_smallest_values` needs strictly more shingles than permutations.
    #[error("k_smallest_values needs more than {permutations} shingles, found {shingles}")]
    TooFewShingles { shingles: usize, permutations: usize },

    /// `hash_bits` was not one of 32, 64, 128.
    #[error("unsupported hash width {bits} bits (must be 32, 64 or 128)")]
    BadHashBits { bits: u32 },

    /// `method` was not `multi_hash` or `k_smallest_values`.
    #[error("unsupported signing method '{method}'")]
    BadMethod { method: String },

    /// `mode` was not `character` or `term`.
    #[error("unsupported shingle mode '{mode}'")]
    BadMode { mode: String },

    /// `permutations` (signature length, P) was zero.
    #[error("permutation count must be at least 1, got {permutations}")]
    BadPermutationCount { permutations: usize },

    /// Band count does not divide the permutation count.
    #[error("bands ({bands}) must divide permutations ({permutations})")]
    BadBandCount { permutations: usize, bands: usize },

    /// Requested sensitivity exceeds the number of bands.
    #[error("sensitivity ({sensitivity}) must be <= bands ({bands})")]
    BadSensitivity { sensitivity: usize, bands: usize },

    /// `min_jaccard` was outside `[0, 1]`.
    #[error("min_jaccard ({min_jaccard}) must be between 0.0 and 1.0")]
    BadMinJaccard { min_jaccard: f64 },

    /// `update` was called with a label already present in the index.
    #[error("label already exists in index")]
    LabelExists,

    /// `query`/`remove` was called with a label absent from the index.
    #[error("label does not exist in index")]
    UnknownLabel,

    /// `update` was called with a signature matrix whose width does not
    /// match the index's permutation count.
    #[error("signature width {got} does not match index permutations {expected}")]
    ShapeMismatch { expected: usize, got: usize },

    /// `min_jaccard` (or the exact verifier) was requested but signatures
    /// are not retained by this index.
    #[error("min_jaccard/exact Jaccard requested but signatures are not retained")]
    JaccardUnavailable,
}

/// Convenient `Result` alias for `neardup` operations.
pub type Result<T> = std::result::Result<T, NeardupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_name_the_offending_values() {
        let err = NeardupError::BadBandCount {
            permutations: 100,
            bands: 7,
        };
        assert!(err.to_string().contains("100"));
        assert!(err.to_string().contains('7'));

        let err = NeardupError::BadSensitivity {
            sensitivity: 60,
            bands: 50,
        };
        assert!(err.to_string().contains("60"));
    }

    #[test]
    fn errors_are_comparable_for_assertions() {
        assert_eq!(NeardupError::UnknownLabel, NeardupError::UnknownLabel);
        assert_ne!(NeardupError::UnknownLabel, NeardupError::LabelExists);
    }

    #[test]
    fn bad_permutation_count_and_bad_min_jaccard_name_the_offending_values() {
        let err = NeardupError::BadPermutationCount { permutations: 0 };
        assert!(err.to_string().contains('0'));

        let err = NeardupError::BadMinJaccard { min_jaccard: 1.5 };
        assert!(err.to_string().contains("1.5"));
    }
}
