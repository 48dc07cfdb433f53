pub mod strategy;
pub mod tokenizer;
pub mod wordlist;

pub use strategy::SegmentStrategy;
pub use tokenizer::Segmenter;
