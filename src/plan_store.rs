//! Saved plans, newest first, kept in one JSON file.

use crate::history_io::{read_json, write_json, PersistError};
use crate::selection::topic::normalize_topic;
use crate::types::plan::{PlanDocument, PlanMode};
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

lazy_static::lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").expect("static regex");
    static ref UNSAFE_FILE_CHARS: Regex = Regex::new(r"[^A-Za-z0-9_-]").expect("static regex");
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavedPlan {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub plan: PlanDocument,
}

impl SavedPlan {
    pub fn new(plan: PlanDocument) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            plan,
        }
    }
}

/// True when some saved plan has the same mode and the same normalized topic.
///
/// Advisory only: callers decide whether to generate anyway.
pub fn is_duplicate_topic(topic: &str, mode: PlanMode, plans: &[SavedPlan]) -> bool {
    let wanted = normalize_topic(topic);
    plans
        .iter()
        .any(|saved| saved.plan.mode() == mode && normalize_topic(saved.plan.topic()) == wanted)
}

/// `day_<date>_<topic>.json` or `week_<week of>_<topic>.json`, topic cut to
/// 30 characters with whitespace runs turned into `_`. Any other character
/// outside `[A-Za-z0-9_-]` also becomes `_`, so the name never leaves the
/// export directory.
pub fn export_file_name(plan: &PlanDocument) -> String {
    let prefix = format!("{}_{}", plan.mode(), plan.anchor_date().format("%Y-%m-%d"));
    let topic = if plan.topic().is_empty() { "plan" } else { plan.topic() };
    let short: String = topic.chars().take(30).collect();
    let spaced = WHITESPACE_RUN.replace_all(&short, "_");
    let slug = UNSAFE_FILE_CHARS.replace_all(&spaced, "_");
    format!("{}_{}.json", prefix, slug)
}

/// Writes `plan` as pretty JSON into `dir` and returns the file path.
pub fn export_plan(plan: &PlanDocument, dir: &Path) -> Result<PathBuf, PersistError> {
    let path = dir.join(export_file_name(plan));
    write_json(plan, &path)?;
    log::info!("Exported plan to {}", path.display());
    Ok(path)
}

/// The saved-plan list backed by a JSON file.
#[derive(Debug, Clone)]
pub struct PlanStore {
    path: PathBuf,
    plans: Vec<SavedPlan>,
}

impl PlanStore {
    /// Opens the store. A missing or malformed file yields an empty list.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let plans = if path.exists() {
            read_json(&path).unwrap_or_else(|e| {
                log::warn!("Ignoring malformed plan store: {}", e);
                Vec::new()
            })
        } else {
            Vec::new()
        };
        Self { path, plans }
    }

    pub fn save(&self) -> Result<(), PersistError> {
        write_json(&self.plans, &self.path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn plans(&self) -> &[SavedPlan] {
        &self.plans
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// Puts `plan` at the front and returns its saved record.
    pub fn add(&mut self, plan: PlanDocument) -> &SavedPlan {
        self.plans.insert(0, SavedPlan::new(plan));
        &self.plans[0]
    }

    pub fn find(&self, id: Uuid) -> Option<&SavedPlan> {
        self.plans.iter().find(|saved| saved.id == id)
    }

    /// Removes the plan with `id`; returns whether one was removed.
    pub fn delete(&mut self, id: Uuid) -> bool {
        let before = self.plans.len();
        self.plans.retain(|saved| saved.id != id);
        self.plans.len() != before
    }

    /// Plans whose topic or mode contains `query`, case-insensitively.
    pub fn search(&self, query: &str) -> Vec<&SavedPlan> {
        let query = query.trim().to_lowercase();
        self.plans
            .iter()
            .filter(|saved| {
                query.is_empty()
                    || saved.plan.topic().to_lowercase().contains(&query)
                    || saved.plan.mode().as_str().contains(&query)
            })
            .collect()
    }

    pub fn is_duplicate_topic(&self, topic: &str, mode: PlanMode) -> bool {
        is_duplicate_topic(topic, mode, &self.plans)
    }
}
