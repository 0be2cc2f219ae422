pub mod dataset;
pub mod reader;
pub mod sample;
