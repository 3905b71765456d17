//*** START FILE: src/lib.rs ***//

// Declare all modules that are part of this library
pub mod config;
pub mod generator;
pub mod history_io;
pub mod parsing;
pub mod plan_store;
pub mod render;
pub mod selection;
pub mod synthesis;
#[cfg(test)]
pub(crate) mod testing;
pub mod types;

// Re-exports used by the binary and the integration tests
pub use config::{load_config_from_file, Config, ConfigError};
pub use generator::{run_generation, GenerateError, GenerationArgs, PlanRequest};
pub use history_io::{load_history, reset_history, save_history, PersistError};
pub use plan_store::{export_file_name, export_plan, is_duplicate_topic, PlanStore, SavedPlan};
pub use render::render_plan_text;
pub use types::plan::{PlanDocument, PlanMode};

//*** END FILE: src/lib.rs ***//
