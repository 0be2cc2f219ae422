//! # Gini-tree
//!
//! `gini-tree` grows binary decision trees over continuous features by
//! minimizing Gini impurity, and predicts the probability of the positive
//! label for new samples. A random forest built from the same trees is
//! included for majority-vote classification.
//!
//! ## Example Usage
//!
//! ```rust
//! use gini_tree::data::sample::WeatherItem;
//! use gini_tree::trees::classifier::DecisionTreeClassifier;
//!
//! let samples = vec![
//!     WeatherItem::labeled(0.0, 0.0, 0.0, 70.0, 1.0),
//!     WeatherItem::labeled(1.0, 0.0, 1.0, 60.0, 0.0),
//!     WeatherItem::labeled(0.0, 1.0, 1.0, 55.0, 0.0),
//!     WeatherItem::labeled(0.0, 0.0, 0.0, 75.0, 1.0),
//! ];
//!
//! let mut tree = DecisionTreeClassifier::new(WeatherItem::features()).unwrap();
//! tree.fit(&samples).unwrap();
//!
//! let prediction = tree.predict(&WeatherItem::new(0.0, 0.0, 1.0, 76.0)).unwrap();
//! assert!((0.0..=1.0).contains(&prediction));
//! ```

/// Samples, datasets and CSV ingestion
pub mod data;
/// Error type shared by the crate
pub mod error;
/// Random Forests
pub mod forests;
/// Functions for evaluating model performance
pub mod metrics;
/// Decision trees
pub mod trees;

pub use error::{Result, TreeError};
