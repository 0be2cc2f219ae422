use std::fmt::{self, Display, Formatter};

use super::feature::Feature;
use super::impurity::positive_fraction;
use crate::data::sample::Sample;

/// Decision tree node.
///
/// `positive_child` was grown from the samples with
/// `feature >= split_value`, `negative_child` from the rest. A missing child
/// means that branch is a leaf of this node.
#[derive(Clone, Debug)]
pub struct SplitNode<S: Sample> {
    pub(crate) feature: Feature<S>,
    pub(crate) split_value: f64,
    pub(crate) impurity: f64,
    pub(crate) samples: Vec<S>,
    pub(crate) positive_child: Option<Box<SplitNode<S>>>,
    pub(crate) negative_child: Option<Box<SplitNode<S>>>,
}

impl<S: Sample> SplitNode<S> {
    pub fn feature(&self) -> &Feature<S> {
        &self.feature
    }

    pub fn split_value(&self) -> f64 {
        self.split_value
    }

    /// Weighted Gini impurity of this node's split.
    pub fn impurity(&self) -> f64 {
        self.impurity
    }

    /// Every sample that reached this node.
    pub fn samples(&self) -> &[S] {
        &self.samples
    }

    pub fn positive_child(&self) -> Option<&SplitNode<S>> {
        self.positive_child.as_deref()
    }

    pub fn negative_child(&self) -> Option<&SplitNode<S>> {
        self.negative_child.as_deref()
    }

    pub fn is_positive(&self, sample: &S) -> bool {
        self.feature.value(sample) >= self.split_value
    }

    pub fn positive_samples(&self) -> impl Iterator<Item = &S> + '_ {
        self.samples.iter().filter(move |s| self.is_positive(s))
    }

    pub fn negative_samples(&self) -> impl Iterator<Item = &S> + '_ {
        self.samples.iter().filter(move |s| !self.is_positive(s))
    }

    /// Probability that `sample` carries the positive label.
    ///
    /// Descends while a child exists on the sample's side. At a leaf branch
    /// the estimate is the positive fraction of this node's samples on that
    /// same side, or of all its samples if that side is empty.
    pub fn predict(&self, sample: &S) -> f64 {
        let mut node = self;
        loop {
            let positive = node.is_positive(sample);
            let child = if positive {
                node.positive_child()
            } else {
                node.negative_child()
            };
            match child {
                Some(child) => node = child,
                None => return node.leaf_value(positive),
            }
        }
    }

    fn leaf_value(&self, positive: bool) -> f64 {
        let branch = if positive {
            positive_fraction(self.positive_samples())
        } else {
            positive_fraction(self.negative_samples())
        };
        branch
            .or_else(|| positive_fraction(&self.samples))
            .unwrap_or(0.0)
    }

    /// Number of split nodes in this subtree.
    pub fn node_count(&self) -> usize {
        1 + self.positive_child().map_or(0, Self::node_count)
            + self.negative_child().map_or(0, Self::node_count)
    }

    /// Longest chain of split nodes from here, counting this one.
    pub fn depth(&self) -> usize {
        1 + self
            .positive_child()
            .map_or(0, Self::depth)
            .max(self.negative_child().map_or(0, Self::depth))
    }

    /// One line per node, tab indented by depth, negative branch first.
    pub fn render(&self) -> String {
        let mut output = String::new();
        self.render_into(&mut output, 0);
        output
    }

    fn render_into(&self, output: &mut String, depth: usize) {
        output.push_str(&"\t".repeat(depth));
        output.push_str(&format!("({})\n", self));
        if let Some(child) = self.negative_child() {
            child.render_into(output, depth + 1);
        }
        if let Some(child) = self.positive_child() {
            child.render_into(output, depth + 1);
        }
    }
}

impl<S: Sample> Display for SplitNode<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} split on {}, {}|{}, Impurity: {}",
            self.feature,
            self.split_value,
            self.negative_samples().count(),
            self.positive_samples().count(),
            self.impurity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample::WeatherItem;

    fn temperature() -> Feature<WeatherItem> {
        Feature::new("Temperature", |item: &WeatherItem| item.temperature)
    }

    fn leaf(samples: Vec<WeatherItem>, split_value: f64) -> SplitNode<WeatherItem> {
        SplitNode {
            feature: temperature(),
            split_value,
            impurity: 0.0,
            samples,
            positive_child: None,
            negative_child: None,
        }
    }

    #[test]
    fn test_predict_uses_branch_fraction() {
        let node = leaf(
            vec![
                WeatherItem::labeled(0.0, 0.0, 0.0, 50.0, 0.0),
                WeatherItem::labeled(0.0, 0.0, 0.0, 55.0, 1.0),
                WeatherItem::labeled(0.0, 0.0, 0.0, 70.0, 1.0),
                WeatherItem::labeled(0.0, 0.0, 0.0, 75.0, 1.0),
            ],
            60.0,
        );
        assert_eq!(node.predict(&WeatherItem::new(0.0, 0.0, 0.0, 80.0)), 1.0);
        assert_eq!(node.predict(&WeatherItem::new(0.0, 0.0, 0.0, 40.0)), 0.5);
        assert_eq!(node.predict(&WeatherItem::new(0.0, 0.0, 0.0, 60.0)), 1.0);
    }

    #[test]
    fn test_predict_falls_back_on_empty_branch() {
        let node = leaf(
            vec![
                WeatherItem::labeled(0.0, 0.0, 0.0, 70.0, 1.0),
                WeatherItem::labeled(0.0, 0.0, 0.0, 75.0, 0.0),
                WeatherItem::labeled(0.0, 0.0, 0.0, 80.0, 1.0),
                WeatherItem::labeled(0.0, 0.0, 0.0, 85.0, 1.0),
            ],
            60.0,
        );
        let prediction = node.predict(&WeatherItem::new(0.0, 0.0, 0.0, 10.0));
        assert_eq!(prediction, 0.75);
    }

    #[test]
    fn test_predict_descends_into_child() {
        let child = leaf(
            vec![
                WeatherItem::labeled(0.0, 0.0, 0.0, 70.0, 0.0),
                WeatherItem::labeled(0.0, 0.0, 0.0, 80.0, 1.0),
            ],
            75.0,
        );
        let mut root = leaf(
            vec![
                WeatherItem::labeled(0.0, 0.0, 0.0, 50.0, 0.0),
                WeatherItem::labeled(0.0, 0.0, 0.0, 70.0, 0.0),
                WeatherItem::labeled(0.0, 0.0, 0.0, 80.0, 1.0),
            ],
            60.0,
        );
        root.positive_child = Some(Box::new(child));

        assert_eq!(root.predict(&WeatherItem::new(0.0, 0.0, 0.0, 90.0)), 1.0);
        assert_eq!(root.predict(&WeatherItem::new(0.0, 0.0, 0.0, 72.0)), 0.0);
        assert_eq!(root.predict(&WeatherItem::new(0.0, 0.0, 0.0, 20.0)), 0.0);
        assert_eq!(root.node_count(), 2);
        assert_eq!(root.depth(), 2);
    }

    #[test]
    fn test_render() {
        let node = leaf(
            vec![
                WeatherItem::labeled(0.0, 0.0, 0.0, 50.0, 0.0),
                WeatherItem::labeled(0.0, 0.0, 0.0, 70.0, 1.0),
                WeatherItem::labeled(0.0, 0.0, 0.0, 75.0, 1.0),
            ],
            60.0,
        );
        assert_eq!(node.render(), "(Temperature split on 60, 1|2, Impurity: 0)\n");
    }
}
