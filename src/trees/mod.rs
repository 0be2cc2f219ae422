pub mod builder;
pub mod classifier;
pub mod feature;
pub mod impurity;
pub mod node;
pub mod params;
