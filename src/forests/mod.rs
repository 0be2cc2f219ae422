pub mod classifier;
pub mod params;
