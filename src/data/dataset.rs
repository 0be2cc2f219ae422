use nalgebra::DVector;
use rand::seq::SliceRandom;
use rand::Rng;
use rand::{rngs::StdRng, SeedableRng};
use std::ops::Deref;

use super::sample::Sample;
use crate::error::{Result, TreeError};

/// An ordered, owned collection of samples.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset<S: Sample> {
    samples: Vec<S>,
}

impl<S: Sample> Dataset<S> {
    pub fn new(samples: Vec<S>) -> Self {
        Self { samples }
    }

    pub fn is_not_empty(&self) -> bool {
        !self.samples.is_empty()
    }

    /// Labels as 0/1 bytes, unlabeled or non-positive samples map to 0.
    pub fn labels(&self) -> DVector<u8> {
        DVector::from_iterator(
            self.samples.len(),
            self.samples.iter().map(|s| u8::from(s.is_positive())),
        )
    }

    pub fn train_test_split(&self, train_size: f64, seed: Option<u64>) -> Result<(Self, Self)> {
        if !(0.0..=1.0).contains(&train_size) {
            return Err(TreeError::InvalidParameter(
                "Train size should be between 0.0 and 1.0".into(),
            ));
        }
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut indices = (0..self.samples.len()).collect::<Vec<_>>();
        indices.shuffle(&mut rng);
        let train_size = (self.samples.len() as f64 * train_size).floor() as usize;
        let (train_indices, test_indices) = indices.split_at(train_size);

        let pick = |indices: &[usize]| {
            Self::new(indices.iter().map(|&index| self.samples[index].clone()).collect())
        };
        Ok((pick(train_indices), pick(test_indices)))
    }

    /// Draws `sample_size` samples with replacement.
    pub fn samples<R: Rng + ?Sized>(&self, sample_size: usize, rng: &mut R) -> Self {
        if self.samples.is_empty() {
            return Self::new(Vec::new());
        }
        let nrows = self.samples.len();
        Self::new(
            (0..sample_size)
                .map(|_| self.samples[rng.gen_range(0..nrows)].clone())
                .collect(),
        )
    }
}

impl<S: Sample> Default for Dataset<S> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<S: Sample> Deref for Dataset<S> {
    type Target = [S];

    fn deref(&self) -> &[S] {
        &self.samples
    }
}

impl<S: Sample> FromIterator<S> for Dataset<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
