//! Configuration types for neardup operations.

use serde::{Deserialize, Serialize};

use crate::error::{NeardupError, Result};

/// Shingling mode: contiguous windows over characters or whitespace-split
/// tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShingleMode {
    /// Every length-k substring of the raw text.
    Character,
    /// Every length-k window of whitespace-split tokens, joined by a single
    /// space.
    Term,
}

impl ShingleMode {
    /// Parse a shingling mode from a host-supplied name (e.g. loaded from a
    /// config file or CLI flag), matching `"character"`/`"term"`
    /// case-insensitively.
    ///
    /// Fails with [`NeardupError::BadMode`] for anything else.
    pub fn parse(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "character" => Ok(ShingleMode::Character),
            "term" => Ok(ShingleMode::Term),
            _ => Err(NeardupError::BadMode {
                mode: name.to_string(),
            }),
        }
    }
}

/// Hash value bit width. Signatures are homogeneous in bit-width across a
/// corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HashBits {
    Bits32,
    Bits64,
    Bits128,
}

impl HashBits {
    /// The numeric width, for error messages and shape metadata.
    #[must_use]
    pub fn bits(self) -> u32 {
        match self {
            HashBits::Bits32 => 32,
            HashBits::Bits64 => 64,
            HashBits::Bits128 => 128,
        }
    }

    /// Resolve a host-supplied numeric width (32/64/128) loaded from a
    /// config file or CLI flag.
    ///
    /// Fails with [`NeardupError::BadHashBits`] for anything else.
    pub fn from_width(bits: u32) -> Result<Self> {
        match bits {
            32 => Ok(HashBits::Bits32),
            64 => Ok(HashBits::Bits64),
            128 => Ok(HashBits::Bits128),
            _ => Err(NeardupError::BadHashBits { bits }),
        }
    }
}

/// MinHash signing method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignMethod {
    /// Minimum hash value per seed, over P independent seeds.
    MultiHash,
    /// P smallest hash values under a single seed.
    KSmallestValues,
}

impl SignMethod {
    /// Parse a signing method from a host-supplied name, matching
    /// `"multi_hash"`/`"k_smallest_values"` case-insensitively.
    ///
    /// Fails with [`NeardupError::BadMethod`] for anything else.
    pub fn parse(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "multi_hash" => Ok(SignMethod::MultiHash),
            "k_smallest_values" => Ok(SignMethod::KSmallestValues),
            _ => Err(NeardupError::BadMethod {
                method: name.to_string(),
            }),
        }
    }
}

/// Configuration for turning a shingle sequence into a MinHash signature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignerConfig {
    /// Shingle width, in characters or tokens depending on `mode`.
    pub k: usize,
    /// Shingling mode.
    pub mode: ShingleMode,
    /// Signature length (permutation count, P).
    pub permutations: usize,
    /// Hash value bit width.
    pub hash_bits: HashBits,
    /// Signing method.
    pub method: SignMethod,
    /// User-supplied seed from which per-hash seeds are deterministically
    /// derived.
    pub seed: u64,
}

impl Default for SignerConfig {
    fn default() -> Self {
        Self {
            k: super::defaults::DEFAULT_SHINGLE_SIZE,
            mode: ShingleMode::Character,
            permutations: super::defaults::DEFAULT_PERMUTATIONS,
            hash_bits: HashBits::Bits64,
            method: SignMethod::MultiHash,
            seed: 0,
        }
    }
}

impl SignerConfig {
    /// Build a config from a host's raw, untyped representation (e.g. a
    /// config file or CLI flags), parsing `mode`/`hash_bits`/`method` and
    /// raising the matching [`NeardupError::BadMode`],
    /// [`NeardupError::BadHashBits`], or [`NeardupError::BadMethod`] if any
    /// of them do not name a recognized value.
    pub fn from_raw(
        k: usize,
        mode: &str,
        permutations: usize,
        hash_bits: u32,
        method: &str,
        seed: u64,
    ) -> Result<Self> {
        Ok(Self {
            k,
            mode: ShingleMode::parse(mode)?,
            permutations,
            hash_bits: HashBits::from_width(hash_bits)?,
            method: SignMethod::parse(method)?,
            seed,
        })
    }

    /// Reject a zero permutation count before any signing work starts.
    ///
    /// Delegates to [`super::Validatable::validate`] so the same check
    /// backs both this typed gate and the generic host-facing linting
    /// surface.
    pub fn check(&self) -> Result<()> {
        use super::Validatable;
        if self
            .validate()
            .iter()
            .any(|e| e.field == "signer.permutations")
        {
            return Err(NeardupError::BadPermutationCount {
                permutations: self.permutations,
            });
        }
        Ok(())
    }
}

/// Configuration for the banded LSH index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Permutation count (P); must match the signer's `permutations`.
    pub permutations: usize,
    /// Band count (B); must divide `permutations`. `None` defaults to the
    /// permutation count, i.e. one row per band.
    pub bands: Option<usize>,
    /// Whether to retain signatures for the exact-Jaccard verifier and
    /// `min_jaccard` queries.
    pub keep_signatures: bool,
}

impl IndexConfig {
    /// The band count that will actually be used: `bands` if given,
    /// otherwise `permutations`.
    #[must_use]
    pub fn resolved_bands(&self) -> usize {
        self.bands.unwrap_or(self.permutations)
    }

    /// Build a config from one of the named presets, at
    /// [`super::DEFAULT_PERMUTATIONS`] permutations.
    #[must_use]
    pub fn from_preset(preset: super::ConfigPreset, keep_signatures: bool) -> Self {
        Self {
            permutations: super::DEFAULT_PERMUTATIONS,
            bands: Some(preset.bands()),
            keep_signatures,
        }
    }

    /// Reject a band count that doesn't divide `permutations` before any
    /// index work starts.
    ///
    /// Delegates to [`super::Validatable::validate`] so the same check
    /// backs both this typed gate and the generic host-facing linting
    /// surface.
    pub fn check(&self) -> Result<()> {
        use super::Validatable;
        if !self.validate().is_empty() {
            return Err(NeardupError::BadBandCount {
                permutations: self.permutations,
                bands: self.resolved_bands(),
            });
        }
        Ok(())
    }
}
