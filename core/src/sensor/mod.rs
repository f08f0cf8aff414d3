pub mod generator;
pub mod sample;

pub use generator::{generate_samples, GeneratorConfig};
pub use sample::{Sample, SampleSet};
