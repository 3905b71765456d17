//*** START FILE: src/parsing/mod.rs ***//
pub mod vocab_loader;

// Re-export the main loading function for convenience
pub use vocab_loader::{load_vocabulary_store, StoreError};
//*** END FILE: src/parsing/mod.rs ***//
