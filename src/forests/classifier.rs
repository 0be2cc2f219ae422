//! Random forest of Gini decision trees with majority voting.
use nalgebra::DVector;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;
use tracing::info;

use super::params::ForestParams;
use crate::{
    data::{dataset::Dataset, sample::Sample},
    error::{Result, TreeError},
    metrics::confusion::ClassificationMetrics,
    trees::{classifier::DecisionTreeClassifier, feature::Feature},
};

pub struct RandomForestClassifier<S: Sample> {
    features: Vec<Feature<S>>,
    trees: Vec<DecisionTreeClassifier<S>>,
    forest_params: ForestParams,
}

impl<S: Sample> ClassificationMetrics for RandomForestClassifier<S> {}

impl<S: Sample> RandomForestClassifier<S> {
    pub fn new(features: Vec<Feature<S>>) -> Self {
        Self::with_params(features, ForestParams::new())
    }

    pub fn with_params(features: Vec<Feature<S>>, forest_params: ForestParams) -> Self {
        Self {
            features,
            trees: Vec::new(),
            forest_params,
        }
    }

    pub fn params(&self) -> &ForestParams {
        &self.forest_params
    }

    pub fn trees(&self) -> &[DecisionTreeClassifier<S>] {
        &self.trees
    }

    /// Builds every tree on its own bootstrap sample.
    ///
    /// Each tree gets a seed drawn from a master generator, so a fixed `seed`
    /// reproduces the same forest regardless of thread scheduling.
    ///
    /// # Errors
    ///
    /// This method will return an error if `samples` is empty or the feature
    /// sample size exceeds the number of features.
    pub fn fit(&mut self, samples: &[S], seed: Option<u64>) -> Result<()> {
        if samples.is_empty() {
            return Err(TreeError::EmptyDataset);
        }
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            _ => StdRng::from_entropy(),
        };
        let seeds = (0..self.forest_params.num_trees())
            .map(|_| rng.gen::<u64>())
            .collect::<Vec<_>>();

        let dataset = Dataset::new(samples.to_vec());
        let trees: Result<Vec<_>> = seeds
            .into_par_iter()
            .map(|tree_seed| -> Result<DecisionTreeClassifier<S>> {
                let mut tree_rng = StdRng::seed_from_u64(tree_seed);
                let subset = dataset.samples(self.forest_params.sample_size(), &mut tree_rng);
                let mut tree = DecisionTreeClassifier::with_params(
                    self.features.clone(),
                    self.forest_params.feature_sample_size(),
                    Some(tree_rng.gen::<u64>()),
                )?;
                tree.fit(&subset)?;
                Ok(tree)
            })
            .collect();
        self.trees = trees?;

        info!(
            trees = self.trees.len(),
            sample_size = self.forest_params.sample_size(),
            "finished building the forest"
        );
        Ok(())
    }

    /// Number of trees whose prediction for `sample` is at least 0.5.
    pub fn votes(&self, sample: &S) -> Result<usize> {
        if self.trees.is_empty() {
            return Err(TreeError::NotFitted);
        }
        self.trees.iter().try_fold(0, |votes, tree| -> Result<usize> {
            Ok(votes + usize::from(tree.predict(sample)? >= 0.5))
        })
    }

    /// Majority decision: at least `vote_threshold` positive votes.
    pub fn predict(&self, sample: &S) -> Result<bool> {
        Ok(self.votes(sample)? >= self.forest_params.vote_threshold())
    }

    /// Mean per-tree probability of the positive label.
    pub fn predict_proba(&self, sample: &S) -> Result<f64> {
        if self.trees.is_empty() {
            return Err(TreeError::NotFitted);
        }
        let total = self
            .trees
            .iter()
            .map(|tree| tree.predict(sample))
            .sum::<Result<f64>>()?;
        Ok(total / self.trees.len() as f64)
    }

    pub fn predict_many(&self, samples: &[S]) -> Result<DVector<u8>> {
        let predictions = samples
            .par_iter()
            .map(|sample| self.predict(sample).map(u8::from))
            .collect::<Result<Vec<_>>>()?;
        Ok(DVector::from_vec(predictions))
    }
}
