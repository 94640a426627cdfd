//! Candidate retrieval over a banded LSH index: sensitivity and Jaccard
//! filtering, adjacency enumeration, and unordered edge enumeration.

use std::collections::HashSet;
use std::hash::Hash;

use indexmap::IndexMap;

use crate::error::{NeardupError, Result};
use crate::index::{BucketId, Index};

/// An unordered relationship between two labels, optionally carrying the
/// estimated (band-agreement) Jaccard score that earned it.
#[derive(Debug, Clone, PartialEq)]
pub enum Edge<L> {
    Pair(L, L),
    Weighted(L, L, f64),
}

impl<L> Index<L>
where
    L: Clone + Eq + Hash,
{
    /// Candidate near-duplicates for `label`.
    ///
    /// Fails with [`NeardupError::UnknownLabel`] if `label` is absent,
    /// [`NeardupError::BadSensitivity`] if `sensitivity` is outside
    /// `1..=bands`, or [`NeardupError::JaccardUnavailable`] if
    /// `min_jaccard` is set but this index does not retain signatures.
    /// `min_jaccard`, when set, filters on the *estimated* Jaccard
    /// (band-agreement rate), not an exact signature-set Jaccard; use
    /// [`crate::verify::exact_jaccard`] for that.
    pub fn query(&self, label: &L, sensitivity: usize, min_jaccard: Option<f64>) -> Result<Vec<L>> {
        let buckets = self.buckets_of(label).ok_or(NeardupError::UnknownLabel)?;
        self.check_sensitivity(sensitivity)?;
        self.check_jaccard_available(min_jaccard)?;

        let mut candidates = self.candidate_multiplicities(label, buckets);
        candidates.retain(|_, count| *count >= sensitivity);
        if let Some(j) = min_jaccard {
            let bands = self.bands() as f64;
            candidates.retain(|_, count| (*count as f64 / bands) >= j);
        }
        Ok(candidates.into_keys().collect())
    }

    /// Candidate lists for every label in the index, keyed by label.
    pub fn adjacency(
        &self,
        sensitivity: usize,
        min_jaccard: Option<f64>,
    ) -> Result<IndexMap<L, Vec<L>>> {
        self.check_sensitivity(sensitivity)?;
        self.check_jaccard_available(min_jaccard)?;

        let mut result = IndexMap::new();
        for label in self.labels_in_order() {
            let candidates = self
                .query(label, sensitivity, min_jaccard)
                .expect("sensitivity and jaccard availability already validated");
            result.insert(label.clone(), candidates);
        }
        Ok(result)
    }

    /// Candidate lists for every label, annotated with their estimated
    /// (band-agreement) Jaccard score, bypassing `min_jaccard` filtering
    /// entirely so a caller can threshold downstream. Unlike [`Index::query`]
    /// this never requires retained signatures: the score is derived purely
    /// from bucket co-occurrence.
    pub fn adjacency_weighted(&self, sensitivity: usize) -> Result<IndexMap<L, Vec<(L, f64)>>> {
        self.check_sensitivity(sensitivity)?;

        let mut result = IndexMap::new();
        for label in self.labels_in_order() {
            result.insert(label.clone(), self.scored_candidates(label, sensitivity));
        }
        Ok(result)
    }

    /// Like [`Index::adjacency_weighted`], but collapses each label's scored
    /// candidate list to `(count, mean_jaccard)` instead of returning the
    /// full per-candidate breakdown. `mean_jaccard` is `0.0` for a label with
    /// no surviving candidates.
    pub fn adjacency_averaged(&self, sensitivity: usize) -> Result<IndexMap<L, (usize, f64)>> {
        self.check_sensitivity(sensitivity)?;

        let mut result = IndexMap::new();
        for label in self.labels_in_order() {
            let scored = self.scored_candidates(label, sensitivity);
            let count = scored.len();
            let mean_jaccard = if count == 0 {
                0.0
            } else {
                scored.iter().map(|(_, score)| score).sum::<f64>() / count as f64
            };
            result.insert(label.clone(), (count, mean_jaccard));
        }
        Ok(result)
    }

    /// Estimated (band-agreement) Jaccard score for every surviving
    /// candidate of `label` at the given sensitivity.
    fn scored_candidates(&self, label: &L, sensitivity: usize) -> Vec<(L, f64)> {
        let bands = self.bands() as f64;
        let buckets = self.buckets_of(label).expect("label came from this index");
        let mut candidates = self.candidate_multiplicities(label, buckets);
        candidates.retain(|_, count| *count >= sensitivity);
        candidates
            .into_iter()
            .map(|(candidate, count)| (candidate, count as f64 / bands))
            .collect()
    }

    /// Enumerate every unordered candidate pair exactly once.
    ///
    /// Iterates labels by popping from the end of their insertion order and
    /// comparing only against labels not yet popped, so each pair surfaces
    /// once regardless of which side of it collided into more buckets.
    pub fn edges(
        &self,
        sensitivity: usize,
        min_jaccard: Option<f64>,
        weighted: bool,
    ) -> Result<Vec<Edge<L>>> {
        self.check_sensitivity(sensitivity)?;
        if let Some(j) = min_jaccard {
            if !crate::config::validate_min_jaccard(j).is_empty() {
                return Err(NeardupError::BadMinJaccard { min_jaccard: j });
            }
        }

        let mut labels: Vec<L> = self.labels_in_order().cloned().collect();
        let mut remaining: HashSet<L> = labels.iter().cloned().collect();
        let mut edges = Vec::new();

        while let Some(label) = labels.pop() {
            remaining.remove(&label);
            let buckets = self.buckets_of(&label).expect("label came from this index");
            let mut candidates = self.candidate_multiplicities(&label, buckets);
            if sensitivity > 1 {
                candidates.retain(|_, count| *count >= sensitivity);
            }

            for (candidate, count) in candidates {
                if !remaining.contains(&candidate) {
                    continue;
                }
                if weighted || min_jaccard.is_some() {
                    let ratio = count as f64 / self.bands() as f64;
                    let threshold = min_jaccard.unwrap_or(0.0);
                    if ratio >= threshold {
                        edges.push(if weighted {
                            Edge::Weighted(label.clone(), candidate, ratio)
                        } else {
                            Edge::Pair(label.clone(), candidate)
                        });
                    }
                } else {
                    edges.push(Edge::Pair(label.clone(), candidate));
                }
            }
        }

        Ok(edges)
    }

    fn check_sensitivity(&self, sensitivity: usize) -> Result<()> {
        if !crate::config::validate_sensitivity(sensitivity, self.bands()).is_empty() {
            return Err(NeardupError::BadSensitivity {
                sensitivity,
                bands: self.bands(),
            });
        }
        Ok(())
    }

    fn check_jaccard_available(&self, min_jaccard: Option<f64>) -> Result<()> {
        if let Some(j) = min_jaccard {
            if !crate::config::validate_min_jaccard(j).is_empty() {
                return Err(NeardupError::BadMinJaccard { min_jaccard: j });
            }
            if !self.keeps_signatures() {
                return Err(NeardupError::JaccardUnavailable);
            }
        }
        Ok(())
    }

    /// Multiplicity of each other label co-occurring with `label` across
    /// its buckets, excluding one occurrence of `label` itself per bucket.
    fn candidate_multiplicities(&self, label: &L, buckets: &[BucketId]) -> IndexMap<L, usize> {
        let mut candidates: IndexMap<L, usize> = IndexMap::new();
        for &bucket_id in buckets {
            let Some(members) = self.members_of(bucket_id) else {
                continue;
            };
            let mut skipped_self = false;
            for member in members {
                if !skipped_self && member == label {
                    skipped_self = true;
                    continue;
                }
                *candidates.entry(member.clone()).or_insert(0) += 1;
            }
        }
        candidates
    }
}
