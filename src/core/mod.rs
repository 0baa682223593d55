pub mod extractor;
pub mod ranker;
pub mod sampler;
pub mod scorer;
