//! **MinHash signing and banded LSH indexing for near-duplicate text detection.**
//!
//! `neardup` approximates Jaccard similarity between texts by hashing their
//! character- or token-shingle sets into fixed-length MinHash signatures, then
//! indexing those signatures with banded locality-sensitive hashing so that
//! candidate near-duplicates for any document can be retrieved without a
//! pairwise scan of the whole corpus.
//!
//! ## Core Concepts & Modules
//!
//! - **[`shingle`]**: splits a text into an ordered sequence of character or
//!   term windows.
//! - **[`hash`]**: a deterministic, seeded, non-cryptographic 32/64/128-bit
//!   hash over a shingle's byte view.
//! - **[`signer`]**: turns a shingle sequence into a fixed-length MinHash
//!   signature, by `multi_hash` or `k_smallest_values`.
//! - **[`corpus`]**: drives shingling and signing across a whole corpus,
//!   producing a signature matrix.
//! - **[`index`]**: [`index::Index`], the banded LSH structure mapping
//!   bucket-ids to labels and back, with insert/update/remove.
//! - **[`query`]**: candidate retrieval, sensitivity and Jaccard filtering,
//!   adjacency and edge enumeration over an [`index::Index`].
//! - **[`verify`]**: an optional exact- or estimated-Jaccard comparison
//!   between two retained signatures or shingle sets.
//!
//! ## Getting Started
//!
//! ```
//! use neardup::config::{SignerConfig, IndexConfig};
//! use neardup::corpus::sign_corpus;
//! use neardup::index::Index;
//!
//! let corpus = vec![
//!     "jupiter is the largest planet",
//!     "jupiter is the largest planet in the solar system",
//!     "helium is a noble gas",
//! ];
//!
//! let signer = SignerConfig { k: 4, ..SignerConfig::default() };
//! let signed = sign_corpus(&corpus, &signer).expect("corpus signs cleanly");
//!
//! let index_config = IndexConfig { permutations: signer.permutations, bands: Some(20), keep_signatures: true };
//! let mut index = Index::from_matrix(&signed.matrix, &[1, 2, 3], &index_config)
//!     .expect("matrix shape matches config");
//!
//! let candidates = index.query(&1, 1, None).expect("label 1 is present");
//! assert!(candidates.contains(&2));
//! ```

#![warn(clippy::unwrap_used)]
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::similar_names
)]

pub mod config;
pub mod corpus;
pub mod error;
pub mod hash;
pub mod index;
pub mod query;
pub mod shingle;
pub mod signer;
pub mod verify;

pub use config::{
    ConfigError, HashBits, IndexConfig, ShingleMode, SignMethod, SignerConfig, Validatable,
};
pub use corpus::{sign_corpus, SignedCorpus};
pub use error::{NeardupError, Result};
pub use hash::hash_shingle;
pub use index::Index;
pub use shingle::shingles;
pub use signer::sign;
pub use verify::{estimated_jaccard, exact_jaccard, jaccard_of_sets};
