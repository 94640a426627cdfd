//! Drives shingling and signing across a whole corpus, producing a
//! signature matrix whose row order matches the input document order.

use rayon::prelude::*;

use crate::config::{HashBits, SignerConfig};
use crate::error::Result;
use crate::shingle;
use crate::signer::{derive_seeds, sign_shingles};

/// The result of signing a corpus: a D x P signature matrix, the seeds used
/// to produce it, and enough shape metadata to build an [`crate::index::Index`]
/// without re-reading the config.
#[derive(Debug, Clone)]
pub struct SignedCorpus {
    /// Row order matches the input document order.
    pub matrix: Vec<Vec<i128>>,
    pub seeds: Vec<u32>,
    pub permutations: usize,
    pub hash_bits: HashBits,
}

/// Sign every document in `texts` under one shared seed stream.
///
/// Signing is embarrassingly parallel across documents; this dispatches
/// shingling and signing per document via `rayon`, but the deterministic
/// seed stream is derived once up front and shared, and the output row
/// order always matches `texts`' order regardless of scheduling. A single
/// string is a one-document corpus: pass a one-element slice.
///
/// Fails with [`crate::error::NeardupError::BadPermutationCount`] before any
/// shingling starts if `config.permutations == 0`; otherwise fails on the
/// first document that cannot be shingled or signed under `config` (e.g.
/// [`crate::error::NeardupError::InputTooShort`] or
/// [`crate::error::NeardupError::TooFewShingles`]); which document fails
/// first is not guaranteed under parallel execution.
pub fn sign_corpus<S>(texts: &[S], config: &SignerConfig) -> Result<SignedCorpus>
where
    S: AsRef<str> + Sync,
{
    config.check()?;

    tracing::info!(
        documents = texts.len(),
        permutations = config.permutations,
        method = ?config.method,
        "signing corpus"
    );

    let seeds = derive_seeds(config.method, config.permutations, config.seed);

    let matrix: Vec<Vec<i128>> = texts
        .par_iter()
        .map(|text| -> Result<Vec<i128>> {
            let shingles: Vec<String> =
                shingle::shingles(text.as_ref(), config.k, config.mode)?.collect();
            sign_shingles(
                &shingles,
                &seeds,
                config.method,
                config.hash_bits,
                config.permutations,
            )
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(rows = matrix.len(), cols = config.permutations, "corpus signed");

    Ok(SignedCorpus {
        matrix,
        seeds,
        permutations: config.permutations,
        hash_bits: config.hash_bits,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HashBits, ShingleMode, SignMethod};

    fn config() -> SignerConfig {
        SignerConfig {
            k: 9,
            mode: ShingleMode::Character,
            permutations: 100,
            hash_bits: HashBits::Bits64,
            method: SignMethod::MultiHash,
            seed: 3,
        }
    }

    #[test]
    fn matrix_shape_matches_corpus_and_permutations() {
        let texts = vec![
            "jupiter is the largest planet in the solar system",
            "helium is a colorless odorless noble gas",
            "jupiter has a great red spot storm",
        ];
        let signed = sign_corpus(&texts, &config()).unwrap();
        assert_eq!(signed.matrix.len(), texts.len());
        for row in &signed.matrix {
            assert_eq!(row.len(), 100);
        }
    }

    #[test]
    fn row_order_matches_input_order() {
        let texts = vec!["aaaaaaaaaa", "bbbbbbbbbb", "cccccccccc"];
        let signed = sign_corpus(&texts, &config()).unwrap();
        // distinct texts should not coincidentally sign identically
        assert_ne!(signed.matrix[0], signed.matrix[1]);
        assert_ne!(signed.matrix[1], signed.matrix[2]);
    }

    #[test]
    fn same_corpus_same_seed_is_bitwise_deterministic() {
        let texts = vec!["jupiter is large", "helium is light"];
        let a = sign_corpus(&texts, &config()).unwrap();
        let b = sign_corpus(&texts, &config()).unwrap();
        assert_eq!(a.matrix, b.matrix);
        assert_eq!(a.seeds, b.seeds);
    }

    #[test]
    fn one_document_corpus_signs() {
        let texts = vec!["a single document corpus"];
        let signed = sign_corpus(&texts, &config()).unwrap();
        assert_eq!(signed.matrix.len(), 1);
    }

    #[test]
    fn rejects_zero_permutations_before_shingling() {
        let bad_config = SignerConfig {
            permutations: 0,
            ..config()
        };
        let texts = vec!["jupiter is the largest planet"];
        let err = sign_corpus(&texts, &bad_config).unwrap_err();
        assert_eq!(
            err,
            crate::error::NeardupError::BadPermutationCount { permutations: 0 }
        );
    }

    #[test]
    fn propagates_input_too_short() {
        let texts = vec!["ok document here", "x"];
        let err = sign_corpus(&texts, &config()).unwrap_err();
        assert!(matches!(
            err,
            crate::error::NeardupError::InputTooShort { .. }
        ));
    }
}
