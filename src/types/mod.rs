//*** START FILE: src/types/mod.rs ***//
pub mod plan;
pub mod vocabulary;
//*** END FILE: src/types/mod.rs ***//
