use nalgebra::{DMatrix, DVector};

use crate::error::{Result, TreeError};

/// 2x2 matrix, rows are true labels and columns predicted labels.
type ConfusionMatrix = DMatrix<usize>;

/// Metrics for binary 0/1 predictions.
pub trait ClassificationMetrics {
    /// Computes the confusion matrix based on the true labels and predicted labels.
    ///
    /// # Arguments
    ///
    /// * `y_true` - The true labels.
    /// * `y_pred` - The predicted labels.
    ///
    /// # Errors
    ///
    /// Fails if the vectors differ in length or contain a label other than 0 or 1.
    fn confusion_matrix(&self, y_true: &DVector<u8>, y_pred: &DVector<u8>) -> Result<ConfusionMatrix> {
        if y_true.len() != y_pred.len() {
            return Err(TreeError::LengthMismatch {
                expected: y_true.len(),
                actual: y_pred.len(),
            });
        }
        if let Some(&label) = y_true.iter().chain(y_pred.iter()).find(|&&label| label > 1) {
            return Err(TreeError::InvalidLabel(label));
        }

        let mut matrix = DMatrix::zeros(2, 2);
        for (&y_t, &y_p) in y_true.iter().zip(y_pred.iter()) {
            matrix[(y_t as usize, y_p as usize)] += 1;
        }
        Ok(matrix)
    }

    fn accuracy(&self, y_true: &DVector<u8>, y_pred: &DVector<u8>) -> Result<f64> {
        let matrix = self.confusion_matrix(y_true, y_pred)?;
        let correct: usize = matrix.diagonal().iter().sum();
        Ok(correct as f64 / y_true.len() as f64)
    }

    /// Precision of the positive class, 0 when nothing was predicted positive.
    fn precision(&self, y_true: &DVector<u8>, y_pred: &DVector<u8>) -> Result<f64> {
        let matrix = self.confusion_matrix(y_true, y_pred)?;
        let tp = matrix[(1, 1)];
        let fp = matrix[(0, 1)];

        match tp + fp {
            0 => Ok(0.0),
            predicted => Ok(tp as f64 / predicted as f64),
        }
    }

    /// Recall of the positive class, 0 when there are no positive labels.
    fn recall(&self, y_true: &DVector<u8>, y_pred: &DVector<u8>) -> Result<f64> {
        let matrix = self.confusion_matrix(y_true, y_pred)?;
        let tp = matrix[(1, 1)];
        let fn_ = matrix[(1, 0)];

        match tp + fn_ {
            0 => Ok(0.0),
            actual => Ok(tp as f64 / actual as f64),
        }
    }

    fn f1_score(&self, y_true: &DVector<u8>, y_pred: &DVector<u8>) -> Result<f64> {
        let precision = self.precision(y_true, y_pred)?;
        let recall = self.recall(y_true, y_pred)?;

        if (precision + recall).abs() < f64::EPSILON {
            Err(TreeError::InvalidParameter(
                "Precision and recall are both 0, F1 score undefined.".into(),
            ))
        } else {
            Ok(2.0 * (precision * recall) / (precision + recall))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockClassifier;

    impl ClassificationMetrics for MockClassifier {}

    #[test]
    fn test_confusion_matrix() {
        let classifier = MockClassifier;

        let y_true = DVector::from_vec(vec![1, 0, 1, 0, 1]);
        let y_pred = DVector::from_vec(vec![1, 1, 0, 0, 1]);

        let result = classifier.confusion_matrix(&y_true, &y_pred).unwrap();

        let expected = DMatrix::from_row_slice(2, 2, &[1, 1, 1, 2]);

        assert_eq!(result, expected);
    }

    #[test]
    fn test_confusion_matrix_unequal() {
        let classifier = MockClassifier;

        let y_true = DVector::from_vec(vec![1, 0, 1, 0, 1, 0]);
        let y_pred = DVector::from_vec(vec![1, 1, 0, 0, 1]);

        let result = classifier.confusion_matrix(&y_true, &y_pred);

        assert!(matches!(
            result,
            Err(TreeError::LengthMismatch {
                expected: 6,
                actual: 5
            })
        ));
    }

    #[test]
    fn test_confusion_matrix_non_binary() {
        let classifier = MockClassifier;

        let y_true = DVector::from_vec(vec![0, 1, 2]);
        let y_pred = DVector::from_vec(vec![0, 1, 1]);

        let result = classifier.confusion_matrix(&y_true, &y_pred);

        assert!(matches!(result, Err(TreeError::InvalidLabel(2))));
    }

    #[test]
    fn test_accuracy() {
        let classifier = MockClassifier;

        let y_true = DVector::from_vec(vec![1, 0, 1, 0, 1]);
        let y_pred = DVector::from_vec(vec![1, 1, 0, 0, 1]);

        assert_eq!(classifier.accuracy(&y_true, &y_pred).unwrap(), 0.6);
    }

    #[test]
    fn test_precision_and_recall() {
        let classifier = MockClassifier;

        let y_true = DVector::from_vec(vec![1, 0, 1, 0, 1]);
        let y_pred = DVector::from_vec(vec![1, 1, 0, 0, 1]);

        assert_eq!(classifier.precision(&y_true, &y_pred).unwrap(), 2.0 / 3.0);
        assert_eq!(classifier.recall(&y_true, &y_pred).unwrap(), 2.0 / 3.0);
        let f1 = classifier.f1_score(&y_true, &y_pred).unwrap();
        assert!((f1 - 2.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_positive_predictions() {
        let classifier = MockClassifier;

        let y_true = DVector::from_vec(vec![1, 1, 1, 1, 1]);
        let y_pred = DVector::from_vec(vec![0, 0, 0, 0, 0]);

        assert_eq!(classifier.precision(&y_true, &y_pred).unwrap(), 0.0);
        assert_eq!(classifier.recall(&y_true, &y_pred).unwrap(), 0.0);
        assert!(classifier.f1_score(&y_true, &y_pred).is_err());
    }
}
