pub mod pipeline;
pub mod selector;
pub mod language_aggregator;
pub mod tech_classifier;
pub mod stats_aggregator;

pub use pipeline::{ArtifactReport, SyncOutcome, SyncPipeline, SyncReport};
pub use selector::RepositorySelector;
pub use language_aggregator::LanguageAggregator;
pub use tech_classifier::{Classification, TechnologyClassifier};
pub use stats_aggregator::aggregate_stats;
