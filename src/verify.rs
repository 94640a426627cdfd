//! Optional Jaccard verifier: exact or estimated similarity between two
//! retained signatures or shingle sets, independent of the banded index's
//! band-agreement estimator.

use std::collections::HashSet;
use std::hash::Hash;

use crate::error::{NeardupError, Result};
use crate::index::Index;

/// Exact Jaccard similarity between two labels' retained signatures,
/// treating each signature as a *set* of values (duplicates collapse).
///
/// This is an estimator of shingle-set Jaccard only when the permutation
/// count is large, and equals it exactly only for signatures without
/// repeated values. Fails with [`NeardupError::JaccardUnavailable`] if the
/// index does not retain signatures, or [`NeardupError::UnknownLabel`] if
/// either label is absent.
pub fn exact_jaccard<L>(index: &Index<L>, a: &L, b: &L) -> Result<f64>
where
    L: Clone + Eq + Hash,
{
    if !index.keeps_signatures() {
        return Err(NeardupError::JaccardUnavailable);
    }
    let sig_a = signature_of(index, a)?;
    let sig_b = signature_of(index, b)?;
    Ok(jaccard_of_sets(sig_a, sig_b))
}

fn signature_of<'a, L>(index: &'a Index<L>, label: &L) -> Result<&'a Vec<i128>>
where
    L: Clone + Eq + Hash,
{
    index.signature_of(label).ok_or(NeardupError::UnknownLabel)
}

/// `|A ∩ B| / |A ∪ B|` over two signatures treated as sets of values.
#[must_use]
pub fn jaccard_of_sets(a: &[i128], b: &[i128]) -> f64 {
    let set_a: HashSet<i128> = a.iter().copied().collect();
    let set_b: HashSet<i128> = b.iter().copied().collect();
    let union = set_a.union(&set_b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = set_a.intersection(&set_b).count();
    intersection as f64 / union as f64
}

/// Position-wise estimated Jaccard: the fraction of signature positions
/// that agree, i.e. the raw MinHash agreement rate underlying `multi_hash`.
/// Unlike [`jaccard_of_sets`] this is order-sensitive and counts duplicate
/// positions, matching the probabilistic guarantee multi_hash is built on.
#[must_use]
pub fn estimated_jaccard(sig_a: &[i128], sig_b: &[i128]) -> f64 {
    let len = sig_a.len().min(sig_b.len());
    if len == 0 {
        return 0.0;
    }
    let agreements = sig_a
        .iter()
        .zip(sig_b.iter())
        .filter(|(a, b)| a == b)
        .count();
    agreements as f64 / len as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IndexConfig;

    fn config(permutations: usize, bands: usize, keep: bool) -> IndexConfig {
        IndexConfig {
            permutations,
            bands: Some(bands),
            keep_signatures: keep,
        }
    }

    #[test]
    fn identical_signatures_have_jaccard_one() {
        assert!((jaccard_of_sets(&[1, 2, 3], &[1, 2, 3]) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn disjoint_signatures_have_jaccard_zero() {
        assert!((jaccard_of_sets(&[1, 2, 3], &[4, 5, 6]) - 0.0).abs() < 1e-9);
    }

    #[test]
    fn partial_overlap_divides_intersection_by_union() {
        let score = jaccard_of_sets(&[1, 2, 3, 4], &[3, 4, 5, 6]);
        assert!((score - (2.0 / 6.0)).abs() < 1e-9);
    }

    #[test]
    fn exact_jaccard_requires_retained_signatures() {
        let index =
            Index::from_matrix(&[vec![1, 2, 3, 4]], &[1], &config(4, 2, false)).unwrap();
        let err = exact_jaccard(&index, &1, &1).unwrap_err();
        assert_eq!(err, NeardupError::JaccardUnavailable);
    }

    #[test]
    fn exact_jaccard_over_retained_signatures() {
        let index = Index::from_matrix(
            &[vec![1, 2, 3, 4], vec![3, 4, 5, 6]],
            &[1, 2],
            &config(4, 2, true),
        )
        .unwrap();
        let score = exact_jaccard(&index, &1, &2).unwrap();
        assert!((score - (2.0 / 6.0)).abs() < 1e-9);
    }

    #[test]
    fn estimated_jaccard_counts_position_agreement() {
        let score = estimated_jaccard(&[1, 2, 3, 4], &[1, 9, 3, 9]);
        assert!((score - 0.5).abs() < 1e-9);
    }
}
