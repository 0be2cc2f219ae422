use crate::error::{Result, TreeError};

#[derive(Clone, Debug)]
pub struct ForestParams {
    num_trees: usize,
    sample_size: usize,
    feature_sample_size: Option<usize>,
    vote_threshold: Option<usize>,
}

impl Default for ForestParams {
    fn default() -> Self {
        Self::new()
    }
}

impl ForestParams {
    /// 300 trees on bootstrap samples of 32 with two features drawn per tree.
    pub fn new() -> Self {
        Self {
            num_trees: 300,
            sample_size: (50 / 3) * 2,
            feature_sample_size: Some(2),
            vote_threshold: None,
        }
    }

    pub fn set_num_trees(&mut self, num_trees: usize) -> Result<()> {
        if num_trees < 1 {
            return Err(TreeError::InvalidParameter(
                "The number of trees must be greater than 0.".into(),
            ));
        }
        self.num_trees = num_trees;
        Ok(())
    }

    pub fn set_sample_size(&mut self, sample_size: usize) -> Result<()> {
        if sample_size < 1 {
            return Err(TreeError::InvalidParameter(
                "The sample size must be greater than 0.".into(),
            ));
        }
        self.sample_size = sample_size;
        Ok(())
    }

    pub fn set_feature_sample_size(&mut self, feature_sample_size: Option<usize>) -> Result<()> {
        if feature_sample_size.is_some_and(|size| size < 1) {
            return Err(TreeError::InvalidParameter(
                "The feature sample size must be greater than 0.".into(),
            ));
        }
        self.feature_sample_size = feature_sample_size;
        Ok(())
    }

    /// Minimum number of positive votes for a positive decision.
    pub fn set_vote_threshold(&mut self, vote_threshold: Option<usize>) -> Result<()> {
        if vote_threshold.is_some_and(|votes| votes < 1) {
            return Err(TreeError::InvalidParameter(
                "The vote threshold must be greater than 0.".into(),
            ));
        }
        self.vote_threshold = vote_threshold;
        Ok(())
    }

    pub fn num_trees(&self) -> usize {
        self.num_trees
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    pub fn feature_sample_size(&self) -> Option<usize> {
        self.feature_sample_size
    }

    /// Defaults to half of the trees, rounded up.
    pub fn vote_threshold(&self) -> usize {
        self.vote_threshold
            .unwrap_or_else(|| self.num_trees.div_ceil(2))
    }
}
