//! Default values and named presets for neardup configuration.

/// Default shingle width (character n-gram size) when not otherwise
/// specified.
pub const DEFAULT_SHINGLE_SIZE: usize = 9;

/// Default permutation count (signature length).
pub const DEFAULT_PERMUTATIONS: usize = 100;

/// Named configuration presets tuned for a target similarity threshold, the
/// same band/row tradeoff a fuzzy component-matching module tunes for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// ~0.9 similarity threshold: few false positives, more false negatives.
    Strict,
    /// ~0.7 similarity threshold: a balance of precision and recall.
    Balanced,
    /// ~0.5 similarity threshold: catches more candidates, more false
    /// positives.
    Permissive,
}

impl ConfigPreset {
    /// Band count to use with [`DEFAULT_PERMUTATIONS`] permutations for this
    /// preset.
    #[must_use]
    pub fn bands(self) -> usize {
        match self {
            ConfigPreset::Strict => 50,
            ConfigPreset::Balanced => 25,
            ConfigPreset::Permissive => 10,
        }
    }
}
