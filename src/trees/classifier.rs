//! Decision Tree Classifier
use nalgebra::DVector;
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;

use super::{builder::TreeBuilder, feature::Feature, impurity::positive_fraction, node::SplitNode, params::TreeParams};
use crate::{
    data::sample::Sample,
    error::{Result, TreeError},
    metrics::confusion::ClassificationMetrics,
};

/// Decision tree classifier predicting the probability of the positive label.
#[derive(Clone, Debug)]
pub struct DecisionTreeClassifier<S: Sample> {
    builder: TreeBuilder<S>,
    tree_params: TreeParams,
    root: Option<SplitNode<S>>,
    prior: Option<f64>,
}

impl<S: Sample> ClassificationMetrics for DecisionTreeClassifier<S> {}

impl<S: Sample> DecisionTreeClassifier<S> {
    /// Creates a classifier over `features` with default parameters.
    ///
    /// # Errors
    ///
    /// This method will return an error if `features` is empty.
    pub fn new(features: Vec<Feature<S>>) -> Result<Self> {
        Ok(Self {
            builder: TreeBuilder::new(features)?,
            tree_params: TreeParams::new(),
            root: None,
            prior: None,
        })
    }

    /// Creates a classifier with custom parameters.
    ///
    /// # Arguments
    ///
    /// * `features` - The ordered feature set.
    /// * `feature_sample_size` - Number of randomly drawn features considered at the root.
    /// * `seed` - Seed for the feature draw.
    ///
    /// # Errors
    ///
    /// This method will return an error if `features` is empty or the feature sample size is 0.
    pub fn with_params(
        features: Vec<Feature<S>>,
        feature_sample_size: Option<usize>,
        seed: Option<u64>,
    ) -> Result<Self> {
        let mut tree = Self::new(features)?;
        tree.tree_params.set_feature_sample_size(feature_sample_size)?;
        tree.tree_params.set_seed(seed);
        Ok(tree)
    }

    pub fn params(&self) -> &TreeParams {
        &self.tree_params
    }

    /// Returns the root split, or `None` if the tree is unfitted or the
    /// training set had no valid split.
    pub fn root(&self) -> Option<&SplitNode<S>> {
        self.root.as_ref()
    }

    /// Builds the tree from `samples`.
    ///
    /// # Errors
    ///
    /// This method will return an error if `samples` is empty or the feature
    /// sample size exceeds the number of features.
    pub fn fit(&mut self, samples: &[S]) -> Result<()> {
        let prior = positive_fraction(samples).ok_or(TreeError::EmptyDataset)?;
        let mut rng = match self.tree_params.seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.root = self.builder.build_node(
            samples,
            None,
            self.tree_params.feature_sample_size(),
            &mut rng,
        )?;
        self.prior = Some(prior);

        match &self.root {
            Some(root) => info!(
                samples = samples.len(),
                nodes = root.node_count(),
                depth = root.depth(),
                "finished building the tree"
            ),
            None => info!(samples = samples.len(), "no valid split, tree is a single leaf"),
        }
        Ok(())
    }

    /// Probability that `sample` carries the positive label.
    ///
    /// A tree without any split predicts the positive fraction of its
    /// training samples.
    ///
    /// # Errors
    ///
    /// This method will return an error if the tree wasn't built yet.
    pub fn predict(&self, sample: &S) -> Result<f64> {
        let prior = self.prior.ok_or(TreeError::NotFitted)?;
        Ok(self.root.as_ref().map_or(prior, |root| root.predict(sample)))
    }

    pub fn predict_many(&self, samples: &[S]) -> Result<DVector<f64>> {
        let predictions = samples
            .iter()
            .map(|sample| self.predict(sample))
            .collect::<Result<Vec<_>>>()?;
        Ok(DVector::from_vec(predictions))
    }

    /// Text rendering of the tree, one node per line.
    pub fn render(&self) -> String {
        self.root.as_ref().map_or_else(String::new, SplitNode::render)
    }
}
