// Text normalization — tokenization, stopword filtering, and lemmatization.

pub mod lemma;
pub mod normalize;

pub use normalize::Normalizer;
