//! Gini impurity of sample sets and of threshold splits.
use super::feature::Feature;
use crate::data::sample::Sample;
use crate::error::{Result, TreeError};

/// Computes `1 - p1^2 - p0^2` over the labels of `samples`.
///
/// Samples whose label is neither `0.0` nor `1.0` count towards the total but
/// towards neither class.
///
/// # Errors
///
/// Returns [`TreeError::EmptyPartition`] when `samples` is empty.
pub fn gini_impurity<S: Sample>(samples: &[S]) -> Result<f64> {
    samples
        .iter()
        .fold(LabelCounts::default(), LabelCounts::add)
        .impurity()
}

/// Sample-count weighted Gini impurity of the `>= threshold` and
/// `< threshold` sides of `samples`.
///
/// # Errors
///
/// Returns [`TreeError::EmptyPartition`] when either side is empty.
pub fn gini_impurity_for_split<S: Sample>(
    feature: &Feature<S>,
    threshold: f64,
    samples: &[S],
) -> Result<f64> {
    let (positive, negative) = samples.iter().fold(
        (LabelCounts::default(), LabelCounts::default()),
        |(positive, negative), sample| {
            if feature.value(sample) >= threshold {
                (positive.add(sample), negative)
            } else {
                (positive, negative.add(sample))
            }
        },
    );

    let total = samples.len() as f64;
    let positive_impurity = positive.impurity()?;
    let negative_impurity = negative.impurity()?;

    Ok(positive_impurity * (positive.total as f64 / total)
        + negative_impurity * (negative.total as f64 / total))
}

#[derive(Clone, Copy, Debug, Default)]
struct LabelCounts {
    positive: usize,
    negative: usize,
    total: usize,
}

impl LabelCounts {
    fn add<S: Sample>(self, sample: &S) -> Self {
        Self {
            positive: self.positive + usize::from(sample.is_positive()),
            negative: self.negative + usize::from(sample.is_negative()),
            total: self.total + 1,
        }
    }

    fn impurity(&self) -> Result<f64> {
        if self.total == 0 {
            return Err(TreeError::EmptyPartition);
        }
        let total = self.total as f64;
        let positive = self.positive as f64 / total;
        let negative = self.negative as f64 / total;

        Ok(1.0 - positive.powi(2) - negative.powi(2))
    }
}

/// Splits `samples` into `(feature >= threshold, feature < threshold)`,
/// keeping the original order on both sides.
pub fn partition<S: Sample>(feature: &Feature<S>, threshold: f64, samples: &[S]) -> (Vec<S>, Vec<S>) {
    samples
        .iter()
        .cloned()
        .partition(|sample| feature.value(sample) >= threshold)
}

/// Fraction of samples labeled `1.0`, or `None` for an empty set.
pub fn positive_fraction<'a, S: Sample + 'a>(samples: impl IntoIterator<Item = &'a S>) -> Option<f64> {
    let (positive, total) = samples
        .into_iter()
        .fold((0usize, 0usize), |(positive, total), sample| {
            (positive + usize::from(sample.is_positive()), total + 1)
        });
    match total {
        0 => None,
        _ => Some(positive as f64 / total as f64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample::WeatherItem;
    use approx::assert_relative_eq;

    fn items(rows: &[(f64, f64)]) -> Vec<WeatherItem> {
        rows.iter()
            .map(|&(temperature, label)| WeatherItem::labeled(0.0, 0.0, 0.0, temperature, label))
            .collect()
    }

    fn temperature() -> Feature<WeatherItem> {
        Feature::new("Temperature", |item: &WeatherItem| item.temperature)
    }

    #[test]
    fn test_gini_pure() {
        let samples = items(&[(1.0, 1.0), (2.0, 1.0), (3.0, 1.0)]);
        assert_eq!(gini_impurity(&samples).unwrap(), 0.0);

        let samples = items(&[(1.0, 0.0), (2.0, 0.0)]);
        assert_eq!(gini_impurity(&samples).unwrap(), 0.0);
    }

    #[test]
    fn test_gini_evenly_mixed() {
        let samples = items(&[(1.0, 1.0), (2.0, 0.0), (3.0, 1.0), (4.0, 0.0)]);
        assert_relative_eq!(gini_impurity(&samples).unwrap(), 0.5);
    }

    #[test]
    fn test_gini_three_to_one() {
        let samples = items(&[(1.0, 1.0), (2.0, 1.0), (3.0, 1.0), (4.0, 0.0)]);
        assert_relative_eq!(gini_impurity(&samples).unwrap(), 0.375);
    }

    #[test]
    fn test_gini_range() {
        for positives in 0..=10 {
            let samples: Vec<_> = (0..10)
                .map(|i| (i as f64, if i < positives { 1.0 } else { 0.0 }))
                .collect();
            let impurity = gini_impurity(&items(&samples)).unwrap();
            assert!((0.0..=0.5).contains(&impurity));
            assert_eq!(impurity == 0.0, positives == 0 || positives == 10);
        }
    }

    #[test]
    fn test_gini_ignores_non_binary_labels_in_counts() {
        let samples = items(&[(1.0, 1.0), (2.0, 0.5)]);
        // p1 = 0.5, p0 = 0.0
        assert_relative_eq!(gini_impurity(&samples).unwrap(), 0.75);
    }

    #[test]
    fn test_gini_empty() {
        let samples: Vec<WeatherItem> = vec![];
        assert!(matches!(gini_impurity(&samples), Err(TreeError::EmptyPartition)));
    }

    #[test]
    fn test_gini_for_split_perfect() {
        let samples = items(&[(50.0, 0.0), (55.0, 0.0), (70.0, 1.0), (75.0, 1.0)]);
        let impurity = gini_impurity_for_split(&temperature(), 62.5, &samples).unwrap();
        assert_eq!(impurity, 0.0);
    }

    #[test]
    fn test_gini_for_split_weighted() {
        let samples = items(&[(1.0, 0.0), (2.0, 1.0), (3.0, 1.0), (4.0, 0.0)]);
        // positive side {3: 1, 4: 0} -> 0.5, negative side {1: 0, 2: 1} -> 0.5
        let impurity = gini_impurity_for_split(&temperature(), 2.5, &samples).unwrap();
        assert_relative_eq!(impurity, 0.5);

        // positive side {2, 3, 4} -> 1 - 4/9 - 1/9, negative side {1} -> 0
        let impurity = gini_impurity_for_split(&temperature(), 1.5, &samples).unwrap();
        assert_relative_eq!(impurity, 0.75 * (4.0 / 9.0));
    }

    #[test]
    fn test_gini_for_split_threshold_is_inclusive_on_positive_side() {
        let samples = items(&[(1.0, 0.0), (2.0, 1.0)]);
        let (positive, negative) = partition(&temperature(), 2.0, &samples);
        assert_eq!(positive.len(), 1);
        assert_eq!(negative.len(), 1);
        assert_eq!(gini_impurity_for_split(&temperature(), 2.0, &samples).unwrap(), 0.0);
    }

    #[test]
    fn test_gini_for_split_degenerate_threshold() {
        let samples = items(&[(1.0, 0.0), (2.0, 1.0), (3.0, 1.0)]);
        assert!(matches!(
            gini_impurity_for_split(&temperature(), 1.0, &samples),
            Err(TreeError::EmptyPartition)
        ));
        assert!(matches!(
            gini_impurity_for_split(&temperature(), 10.0, &samples),
            Err(TreeError::EmptyPartition)
        ));
    }

    #[test]
    fn test_gini_for_split_matches_partitioned_sets() {
        let samples = items(&[
            (3.0, 1.0),
            (1.0, 0.0),
            (4.0, 1.0),
            (1.0, 1.0),
            (5.0, 0.0),
            (9.0, 1.0),
            (2.0, 0.5),
            (6.0, 0.0),
        ]);
        let total = samples.len() as f64;
        for threshold in [1.5, 2.5, 3.0, 4.5, 5.5, 7.5] {
            let (positive, negative) = partition(&temperature(), threshold, &samples);
            let expected = gini_impurity(&positive).unwrap() * (positive.len() as f64 / total)
                + gini_impurity(&negative).unwrap() * (negative.len() as f64 / total);
            let impurity = gini_impurity_for_split(&temperature(), threshold, &samples).unwrap();
            assert_eq!(impurity, expected);
        }
    }

    #[test]
    fn test_positive_fraction() {
        let samples = items(&[(1.0, 0.0), (2.0, 1.0), (3.0, 1.0), (4.0, 1.0)]);
        assert_eq!(positive_fraction(&samples), Some(0.75));
        assert_eq!(positive_fraction(&Vec::<WeatherItem>::new()), None);
    }
}
