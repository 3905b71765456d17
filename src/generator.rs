use crate::config::Config;
use crate::history_io::{load_history, save_history, PersistError};
use crate::parsing::{load_vocabulary_store, StoreError};
use crate::plan_store::{PlanStore, SavedPlan};
use crate::synthesis::planner::{build_day_plan, build_week_plan, GeneratedPlan, PlanContext, PlanError};
use crate::types::plan::PlanMode;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Persist(#[from] PersistError),

    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error("A {mode} plan for topic '{topic}' already exists. Pass --allow-duplicate to generate anyway.")]
    DuplicateTopic { mode: PlanMode, topic: String },
}

/// The plan to build: a single day, or a week starting on `week_of`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanRequest {
    Day { date: NaiveDate, book_title: Option<String> },
    Week { week_of: NaiveDate, books: Vec<String> },
}

impl PlanRequest {
    pub fn mode(&self) -> PlanMode {
        match self {
            PlanRequest::Day { .. } => PlanMode::Day,
            PlanRequest::Week { .. } => PlanMode::Week,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenerationArgs {
    pub request: PlanRequest,
    pub topic: String,
    pub classroom: String,
    /// Falls back to `Config::default_age_group` when `None`.
    pub age_group: Option<String>,
    pub allow_duplicate: bool,
}

/// Generates one plan and persists both the saved plan list and the updated
/// history. Returns the saved record.
///
/// The plan list is written first; history is only recorded once the plan
/// is stored, so a failed call leaves the history untouched.
pub fn run_generation(config: &Config, args: &GenerationArgs) -> Result<SavedPlan, GenerateError> {
    let mode = args.request.mode();
    log::info!("Generating {} plan for topic '{}'", mode, args.topic.trim());

    let store = load_vocabulary_store(&config.data_path())?;

    let mut plans = PlanStore::load(config.plans_path());
    if plans.is_duplicate_topic(&args.topic, mode) {
        if !args.allow_duplicate {
            return Err(GenerateError::DuplicateTopic {
                mode,
                topic: args.topic.trim().to_string(),
            });
        }
        log::warn!("Generating a duplicate {} plan for '{}'", mode, args.topic.trim());
    }

    let history_path = config.history_path();
    let history = load_history(&history_path);

    let age_group = args.age_group.clone().unwrap_or_else(|| config.default_age_group.clone());
    let context = PlanContext::new(args.topic.as_str(), args.classroom.as_str(), age_group)
        .with_history_limit(config.history_limit);

    let GeneratedPlan { plan, history } = match &args.request {
        PlanRequest::Day { date, book_title } => {
            build_day_plan(*date, &context, &store, &history, book_title.as_deref())?
        }
        PlanRequest::Week { week_of, books } => build_week_plan(*week_of, &context, &store, &history, books)?,
    };

    let saved = plans.add(plan).clone();
    plans.save()?;
    save_history(&history, &history_path)?;
    log::info!("Saved plan {} ({} plans total)", saved.id, plans.len());
    Ok(saved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::write_sample_banks;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> Config {
        let data = dir.path().join("data");
        std::fs::create_dir_all(&data).unwrap();
        write_sample_banks(&data).unwrap();
        Config {
            data_dir: data.display().to_string(),
            state_dir: dir.path().join("state").display().to_string(),
            history_limit: 2000,
            default_age_group: "Pre-K".to_string(),
        }
    }

    fn day_args(topic: &str) -> GenerationArgs {
        GenerationArgs {
            request: PlanRequest::Day {
                date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
                book_title: None,
            },
            topic: topic.to_string(),
            classroom: "Room 4".to_string(),
            age_group: None,
            allow_duplicate: false,
        }
    }

    #[test]
    fn test_duplicate_refused_unless_allowed() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        let first = run_generation(&config, &day_args("Rain")).unwrap();
        assert_eq!(first.plan.topic(), "Rain");

        let err = run_generation(&config, &day_args("rain!")).unwrap_err();
        assert!(matches!(err, GenerateError::DuplicateTopic { mode: PlanMode::Day, .. }));

        let mut args = day_args("rain!");
        args.allow_duplicate = true;
        run_generation(&config, &args).unwrap();
        assert_eq!(PlanStore::load(config.plans_path()).len(), 2);
    }

    #[test]
    fn test_blank_topic_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        let err = run_generation(&config, &day_args("  ")).unwrap_err();
        assert!(matches!(err, GenerateError::Plan(PlanError::EmptyTopic)));
        assert!(!config.history_path().exists());
        assert!(!config.plans_path().exists());
    }

    #[test]
    fn test_unwritable_plan_store_leaves_history_unchanged() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        std::fs::create_dir_all(config.plans_path()).unwrap();

        let err = run_generation(&config, &day_args("rain")).unwrap_err();
        assert!(matches!(err, GenerateError::Persist(_)));
        assert!(!config.history_path().exists());
        assert!(load_history(&config.history_path()).is_empty());
    }

    #[test]
    fn test_missing_banks_fail_before_writing() {
        let dir = TempDir::new().unwrap();
        let mut config = config_in(&dir);
        config.data_dir = dir.path().join("empty").display().to_string();
        let err = run_generation(&config, &day_args("rain")).unwrap_err();
        assert!(matches!(err, GenerateError::Store(StoreError::Read { .. })));
        assert!(!config.plans_path().exists());
    }
}
