mod artifact;

pub use artifact::sample_artifact;
