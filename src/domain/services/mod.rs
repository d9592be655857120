mod address_classifier;
mod result_scorer;

pub use address_classifier::AddressClassifier;
pub use result_scorer::ResultScorer;
