use crate::error::{Result, TreeError};

#[derive(Clone, Debug, Default)]
pub struct TreeParams {
    pub feature_sample_size: Option<usize>,
    pub seed: Option<u64>,
}

impl TreeParams {
    pub fn new() -> Self {
        Self {
            feature_sample_size: None,
            seed: None,
        }
    }

    /// Restricts the root split search to a random subset of this many features.
    pub fn set_feature_sample_size(&mut self, feature_sample_size: Option<usize>) -> Result<()> {
        if feature_sample_size.is_some_and(|size| size < 1) {
            return Err(TreeError::InvalidParameter(
                "The feature sample size must be greater than 0.".into(),
            ));
        }
        self.feature_sample_size = feature_sample_size;
        Ok(())
    }

    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.seed = seed;
    }

    pub fn feature_sample_size(&self) -> Option<usize> {
        self.feature_sample_size
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}
