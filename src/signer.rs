//! Turns a shingle sequence into a fixed-length MinHash signature.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{HashBits, SignMethod, SignerConfig};
use crate::error::{NeardupError, Result};
use crate::hash::hash_shingle;
use crate::shingle;

/// A signed document: the per-position hash seeds that produced it, and the
/// resulting signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signed {
    pub seeds: Vec<u32>,
    pub signature: Vec<i128>,
}

/// Draw the per-position hash seeds deterministically from `seed`, the way
/// the reference implementation draws them once per corpus and shares them
/// across every document: `multi_hash` needs one seed per signature
/// position, `k_smallest_values` needs exactly one.
#[must_use]
pub fn derive_seeds(method: SignMethod, permutations: usize, seed: u64) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    match method {
        SignMethod::MultiHash => (0..permutations)
            .map(|_| rng.random_range(1..100_000_000))
            .collect(),
        SignMethod::KSmallestValues => vec![rng.random_range(1..100_000_000)],
    }
}

/// Sign an already-materialized shingle sequence under the given seeds.
///
/// `seeds` must already match `method`: one seed per position for
/// `multi_hash`, exactly one for `k_smallest_values` (see [`derive_seeds`]).
pub fn sign_shingles(
    shingles: &[String],
    seeds: &[u32],
    method: SignMethod,
    hash_bits: HashBits,
    permutations: usize,
) -> Result<Vec<i128>> {
    match method {
        SignMethod::MultiHash => Ok(multi_hash(shingles, seeds, hash_bits)),
        SignMethod::KSmallestValues => {
            k_smallest_values(shingles, seeds[0], hash_bits, permutations)
        }
    }
}

/// For each of P independent seeds, the minimum hash value over all
/// shingles under that seed. Ties keep the first minimum seen: the update
/// rule is strictly-less, never less-or-equal.
fn multi_hash(shingles: &[String], seeds: &[u32], hash_bits: HashBits) -> Vec<i128> {
    seeds
        .iter()
        .map(|&seed| {
            let mut min_value: Option<i128> = None;
            for shingle in shingles {
                let h = hash_shingle(shingle.as_bytes(), seed, hash_bits);
                match min_value {
                    None => min_value = Some(h),
                    Some(current) if h < current => min_value = Some(h),
                    _ => {}
                }
            }
            min_value.expect("shingler guarantees a non-empty sequence")
        })
        .collect()
}

/// Under a single seed, hash every shingle and keep the P smallest values by
/// rank (duplicates retained; this filters by rank, not by distinctness).
fn k_smallest_values(
    shingles: &[String],
    seed: u32,
    hash_bits: HashBits,
    permutations: usize,
) -> Result<Vec<i128>> {
    if shingles.len() <= permutations {
        return Err(NeardupError::TooFewShingles {
            shingles: shingles.len(),
            permutations,
        });
    }
    let mut values: Vec<i128> = shingles
        .iter()
        .map(|s| hash_shingle(s.as_bytes(), seed, hash_bits))
        .collect();
    values.sort_unstable();
    values.truncate(permutations);
    Ok(values)
}

/// Shingle and sign one document in a single call, deriving fresh seeds from
/// `config.seed`. Corpus-level signing (see [`crate::corpus`]) instead
/// derives seeds once and reuses them across every document, so it calls
/// [`derive_seeds`] and [`sign_shingles`] directly.
pub fn sign(text: &str, config: &SignerConfig) -> Result<Signed> {
    let shingles: Vec<String> = shingle::shingles(text, config.k, config.mode)?.collect();
    let seeds = derive_seeds(config.method, config.permutations, config.seed);
    let signature = sign_shingles(
        &shingles,
        &seeds,
        config.method,
        config.hash_bits,
        config.permutations,
    )?;
    Ok(Signed { seeds, signature })
}
