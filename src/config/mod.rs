//! Configuration module for neardup.
//!
//! Provides a small, type-safe configuration surface for the signer and the
//! index, each validated up front via the [`Validatable`] trait so every
//! configuration error is raised before any work starts.
//!
//! # Quick Start
//!
//! ```
//! use neardup::config::{SignerConfig, IndexConfig, ShingleMode, HashBits, SignMethod, Validatable};
//!
//! let signer = SignerConfig {
//!     k: 9,
//!     mode: ShingleMode::Character,
//!     permutations: 100,
//!     hash_bits: HashBits::Bits64,
//!     method: SignMethod::MultiHash,
//!     seed: 3,
//! };
//! assert!(signer.is_valid());
//!
//! let index = IndexConfig { permutations: 100, bands: Some(50), keep_signatures: true };
//! assert!(index.is_valid());
//!
//! // `bands: None` defaults to `permutations`.
//! let default_banded = IndexConfig { permutations: 100, bands: None, keep_signatures: true };
//! assert_eq!(default_banded.resolved_bands(), 100);
//! ```

mod defaults;
mod types;
mod validation;

pub use defaults::{ConfigPreset, DEFAULT_PERMUTATIONS, DEFAULT_SHINGLE_SIZE};
pub use types::{HashBits, IndexConfig, ShingleMode, SignMethod, SignerConfig};
pub use validation::{validate_min_jaccard, validate_sensitivity, ConfigError, Validatable};
