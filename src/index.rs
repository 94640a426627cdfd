//! Banded LSH index: splits signatures into bands and maintains two
//! co-maintained inverted maps so that labels sharing enough bands can be
//! retrieved without a pairwise scan of the corpus.

use std::hash::{Hash, Hasher};

use indexmap::IndexMap;

use crate::config::IndexConfig;
use crate::error::{NeardupError, Result};

/// A bucket-id: an order-sensitive hash of one band's values. Stable within
/// a single implementation, process, and run; not portable across hash
/// families or implementations.
pub type BucketId = u64;

/// The banded LSH index.
///
/// Owns two maps that satisfy, after every mutation:
/// - **I1**: for every `(label, bucket)`, `bucket` appears in
///   `label_to_buckets[label]` with the same multiplicity as `label` appears
///   in `bucket_to_labels[bucket]`.
/// - **I2**: `label_to_buckets[label].len() == bands` for every present
///   label.
/// - **I3**: a bucket key exists in `bucket_to_labels` iff its label list is
///   non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Index<L>
where
    L: Clone + Eq + Hash,
{
    permutations: usize,
    bands: usize,
    bucket_to_labels: IndexMap<BucketId, Vec<L>>,
    label_to_buckets: IndexMap<L, Vec<BucketId>>,
    signatures: Option<IndexMap<L, Vec<i128>>>,
}

impl<L> Index<L>
where
    L: Clone + Eq + Hash,
{
    /// Create an empty index under the given configuration.
    ///
    /// An unspecified `bands` defaults to `permutations`. Fails with
    /// [`NeardupError::BadBandCount`] unless the resolved band count evenly
    /// divides `permutations`.
    pub fn new(config: &IndexConfig) -> Result<Self> {
        config.check()?;
        Ok(Self {
            permutations: config.permutations,
            bands: config.resolved_bands(),
            bucket_to_labels: IndexMap::new(),
            label_to_buckets: IndexMap::new(),
            signatures: config.keep_signatures.then(IndexMap::new),
        })
    }

    /// Build an index from a signature matrix and parallel label list in
    /// one step.
    pub fn from_matrix(matrix: &[Vec<i128>], labels: &[L], config: &IndexConfig) -> Result<Self> {
        let mut index = Self::new(config)?;
        index.update(matrix, labels)?;
        Ok(index)
    }

    /// Number of bands (B).
    #[must_use]
    pub fn bands(&self) -> usize {
        self.bands
    }

    /// Number of permutations (P) signatures must have to match this index.
    #[must_use]
    pub fn permutations(&self) -> usize {
        self.permutations
    }

    /// Whether this index retains signatures for the verifier and
    /// `min_jaccard` queries.
    #[must_use]
    pub fn keeps_signatures(&self) -> bool {
        self.signatures.is_some()
    }

    /// Labels currently present, in insertion order.
    #[must_use]
    pub fn contains(&self) -> Vec<L> {
        self.label_to_buckets.keys().cloned().collect()
    }

    /// Insert new labels with their signatures.
    ///
    /// All-or-nothing: validated before any mutation. Fails with
    /// [`NeardupError::LabelExists`] if any label is already present, or
    /// [`NeardupError::ShapeMismatch`] if `matrix` and `labels` differ in
    /// length or any row's width does not match this index's permutation
    /// count.
    pub fn update(&mut self, matrix: &[Vec<i128>], labels: &[L]) -> Result<()> {
        if matrix.len() != labels.len() {
            return Err(NeardupError::ShapeMismatch {
                expected: labels.len(),
                got: matrix.len(),
            });
        }
        for label in labels {
            if self.label_to_buckets.contains_key(label) {
                return Err(NeardupError::LabelExists);
            }
        }
        for row in matrix {
            if row.len() != self.permutations {
                return Err(NeardupError::ShapeMismatch {
                    expected: self.permutations,
                    got: row.len(),
                });
            }
        }

        for (label, signature) in labels.iter().zip(matrix.iter()) {
            self.insert_one(label.clone(), signature);
        }

        tracing::debug!(
            inserted = labels.len(),
            total = self.label_to_buckets.len(),
            "index updated"
        );
        Ok(())
    }

    fn insert_one(&mut self, label: L, signature: &[i128]) {
        let band_width = self.permutations / self.bands;
        let mut bucket_ids = Vec::with_capacity(self.bands);
        for band in signature.chunks(band_width) {
            let bucket_id = hash_band(band);
            bucket_ids.push(bucket_id);
            self.bucket_to_labels
                .entry(bucket_id)
                .or_default()
                .push(label.clone());
        }
        self.label_to_buckets.insert(label.clone(), bucket_ids);
        if let Some(sigs) = &mut self.signatures {
            sigs.insert(label, signature.to_vec());
        }
    }

    /// Remove a label and every trace of it from both maps.
    ///
    /// Fails with [`NeardupError::UnknownLabel`] if the label is absent.
    pub fn remove(&mut self, label: &L) -> Result<()> {
        let bucket_ids = self
            .label_to_buckets
            .get(label)
            .cloned()
            .ok_or(NeardupError::UnknownLabel)?;

        for bucket_id in &bucket_ids {
            if let Some(members) = self.bucket_to_labels.get_mut(bucket_id) {
                if let Some(pos) = members.iter().position(|m| m == label) {
                    members.remove(pos);
                }
                if members.is_empty() {
                    self.bucket_to_labels.shift_remove(bucket_id);
                }
            }
        }

        self.label_to_buckets.shift_remove(label);
        if let Some(sigs) = &mut self.signatures {
            sigs.shift_remove(label);
        }

        tracing::debug!(remaining = self.label_to_buckets.len(), "label removed from index");
        Ok(())
    }

    pub(crate) fn buckets_of(&self, label: &L) -> Option<&Vec<BucketId>> {
        self.label_to_buckets.get(label)
    }

    pub(crate) fn members_of(&self, bucket: BucketId) -> Option<&Vec<L>> {
        self.bucket_to_labels.get(&bucket)
    }

    pub(crate) fn labels_in_order(&self) -> impl Iterator<Item = &L> {
        self.label_to_buckets.keys()
    }

    pub(crate) fn signature_of(&self, label: &L) -> Option<&Vec<i128>> {
        self.signatures.as_ref().and_then(|sigs| sigs.get(label))
    }
}

/// Reduce one band's values to a single bucket-id via an order-sensitive,
/// stable hash. Uses the standard library's default (SipHash) hasher with
/// its fixed default keys, so the same band contents always yield the same
/// bucket-id across runs and processes of this implementation.
fn hash_band(band: &[i128]) -> BucketId {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    for value in band {
        value.hash(&mut hasher);
    }
    hasher.finish()
}
