//! Greedy top-down tree induction.
//!
//! Every node takes the feature/threshold pair with the lowest weighted Gini
//! impurity. Growth below a node continues only while the child's best split
//! is strictly purer than the parent's split.
use rand::{seq::SliceRandom, Rng};
use tracing::{debug, trace};

use super::feature::{Feature, FeatureAndSplit};
use super::impurity::{gini_impurity_for_split, partition};
use super::node::SplitNode;
use crate::data::sample::Sample;
use crate::error::{Result, TreeError};

#[derive(Clone, Debug)]
pub struct TreeBuilder<S: Sample> {
    features: Vec<Feature<S>>,
}

impl<S: Sample> TreeBuilder<S> {
    /// # Errors
    ///
    /// Returns an error if `features` is empty.
    pub fn new(features: Vec<Feature<S>>) -> Result<Self> {
        if features.is_empty() {
            return Err(TreeError::InvalidParameter(
                "At least one feature is required.".into(),
            ));
        }
        Ok(Self { features })
    }

    pub fn features(&self) -> &[Feature<S>] {
        &self.features
    }

    /// Grows a tree over all features.
    pub fn build(&self, samples: &[S]) -> Result<Option<SplitNode<S>>> {
        let candidates: Vec<_> = self.features.iter().collect();
        self.grow(samples, None, &candidates)
    }

    /// Grows the node for `samples`, or returns `None` when this branch
    /// should stay a leaf of its parent.
    ///
    /// # Arguments
    ///
    /// * `previous_impurity` - Split impurity of the parent; the new split must be strictly lower.
    /// * `feature_sample_size` - Draw this many features without replacement from `rng` for this
    ///   node's split search. Nodes below it search over all features.
    ///
    /// # Errors
    ///
    /// Returns an error if `feature_sample_size` is 0 or exceeds the number of features.
    pub fn build_node<R: Rng + ?Sized>(
        &self,
        samples: &[S],
        previous_impurity: Option<f64>,
        feature_sample_size: Option<usize>,
        rng: &mut R,
    ) -> Result<Option<SplitNode<S>>> {
        let candidates: Vec<&Feature<S>> = match feature_sample_size {
            Some(size) if size == 0 || size > self.features.len() => {
                return Err(TreeError::InvalidParameter(format!(
                    "The feature sample size must be between 1 and {}.",
                    self.features.len()
                )))
            }
            Some(size) => self.features.choose_multiple(rng, size).collect(),
            None => self.features.iter().collect(),
        };
        self.grow(samples, previous_impurity, &candidates)
    }

    fn grow(
        &self,
        samples: &[S],
        previous_impurity: Option<f64>,
        candidates: &[&Feature<S>],
    ) -> Result<Option<SplitNode<S>>> {
        let best = match Self::best_split(candidates, samples)? {
            Some(best) => best,
            None => {
                trace!(samples = samples.len(), "no valid split");
                return Ok(None);
            }
        };
        if previous_impurity.is_some_and(|previous| best.impurity >= previous) {
            trace!(
                feature = %best.feature,
                impurity = best.impurity,
                previous = previous_impurity,
                "split does not improve impurity"
            );
            return Ok(None);
        }

        debug!(
            feature = %best.feature,
            split = best.split,
            impurity = best.impurity,
            samples = samples.len(),
            "split node"
        );

        let (positive, negative) = partition(&best.feature, best.split, samples);
        let all_features: Vec<_> = self.features.iter().collect();
        let positive_child = self.grow(&positive, Some(best.impurity), &all_features)?;
        let negative_child = self.grow(&negative, Some(best.impurity), &all_features)?;

        Ok(Some(SplitNode {
            feature: best.feature,
            split_value: best.split,
            impurity: best.impurity,
            samples: samples.to_vec(),
            positive_child: positive_child.map(Box::new),
            negative_child: negative_child.map(Box::new),
        }))
    }

    fn best_split(
        candidates: &[&Feature<S>],
        samples: &[S],
    ) -> Result<Option<FeatureAndSplit<S>>> {
        let mut best: Option<FeatureAndSplit<S>> = None;
        for feature in candidates {
            if let Some(split) = Self::best_threshold(feature, samples)? {
                if best.as_ref().map_or(true, |b| split.impurity < b.impurity) {
                    best = Some(split);
                }
            }
        }
        Ok(best)
    }

    /// Best threshold for `feature` among the midpoints of adjacent distinct
    /// values, or `None` when the feature has fewer than two distinct values.
    ///
    /// Ties keep the lowest threshold. Midpoints that would leave a side
    /// empty are skipped.
    pub fn best_threshold(feature: &Feature<S>, samples: &[S]) -> Result<Option<FeatureAndSplit<S>>> {
        let mut values: Vec<f64> = samples.iter().map(|s| feature.value(s)).collect();
        values.sort_by(f64::total_cmp);
        values.dedup();

        let mut best: Option<(f64, f64)> = None;
        for pair in values.windows(2) {
            let split = midpoint(pair[0], pair[1]);
            let impurity = match gini_impurity_for_split(feature, split, samples) {
                Ok(impurity) => impurity,
                Err(TreeError::EmptyPartition) => continue,
                Err(error) => return Err(error),
            };
            if best.map_or(true, |(_, best_impurity)| impurity < best_impurity) {
                best = Some((split, impurity));
            }
        }

        Ok(best.map(|(split, impurity)| FeatureAndSplit {
            feature: feature.clone(),
            split,
            impurity,
        }))
    }
}

/// Threshold between two adjacent distinct values `low < high`.
///
/// Halves before adding so large values stay finite. When `low` and `high`
/// are neighbouring floats the midpoint rounds onto `low`, and `high` is used
/// instead so that `>=` still separates them.
fn midpoint(low: f64, high: f64) -> f64 {
    let split = low / 2.0 + high / 2.0;
    if split <= low {
        high
    } else {
        split
    }
}
