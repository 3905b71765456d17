//*** START FILE: src/selection/mod.rs ***//
pub mod history;
pub mod matcher;
pub mod sampler;
pub mod selector;
pub mod topic;

// Re-export the pieces the synthesizer and the orchestration layer use
pub use history::{HistoryState, DEFAULT_HISTORY_LIMIT};
pub use matcher::keyword_match_pool;
pub use sampler::pick_non_used;
pub use selector::{select_vocabulary, select_vocabulary_with_rng};
pub use topic::{normalize_topic, topic_tokens};
//*** END FILE: src/selection/mod.rs ***//
