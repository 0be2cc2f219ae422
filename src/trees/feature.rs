use std::fmt::{self, Debug, Display, Formatter};
use std::sync::Arc;

type Mapper<S> = Arc<dyn Fn(&S) -> f64 + Send + Sync>;

/// A named scalar accessor over a sample.
pub struct Feature<S> {
    name: String,
    mapper: Mapper<S>,
}

impl<S> Feature<S> {
    pub fn new<F>(name: impl Into<String>, mapper: F) -> Self
    where
        F: Fn(&S) -> f64 + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            mapper: Arc::new(mapper),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self, sample: &S) -> f64 {
        (self.mapper)(sample)
    }
}

impl<S> Clone for Feature<S> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            mapper: Arc::clone(&self.mapper),
        }
    }
}

impl<S> Debug for Feature<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Feature").field("name", &self.name).finish()
    }
}

impl<S> Display for Feature<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A candidate split considered while growing a node.
#[derive(Clone, Debug)]
pub struct FeatureAndSplit<S> {
    pub feature: Feature<S>,
    pub split: f64,
    pub impurity: f64,
}
