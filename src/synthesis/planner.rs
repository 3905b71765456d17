use super::books::auto_pick_books_with_rng;
use super::templates::{center_template, make_centers, make_focus, make_i_can_statements, make_read_aloud};
use crate::selection::history::{HistoryState, DEFAULT_HISTORY_LIMIT};
use crate::selection::selector::select_vocabulary_with_rng;
use crate::types::plan::{
    CenterActivity, CenterKind, DayMeta, DayPlan, PlanDocument, SchoolDay, WeekDayPlan, WeekMeta, WeekPlan,
};
use crate::types::vocabulary::{VocabularyBundle, VocabularyStore};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use rand::Rng;
use thiserror::Error;

/// Precondition failures. A date or week start is required by the type
/// signatures; the topic must contain something besides whitespace.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("A topic is required to generate a plan")]
    EmptyTopic,
}

/// Who and what a plan is for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanContext {
    pub topic: String,
    pub classroom: String,
    pub age_group: String,
    /// Entries kept per vocabulary kind when the new bundle is recorded.
    pub history_limit: usize,
}

impl PlanContext {
    pub fn new(topic: impl Into<String>, classroom: impl Into<String>, age_group: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            classroom: classroom.into(),
            age_group: age_group.into(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    fn checked_topic(&self) -> Result<String, PlanError> {
        let topic = self.topic.trim();
        if topic.is_empty() {
            return Err(PlanError::EmptyTopic);
        }
        Ok(topic.to_string())
    }
}

/// A finished plan together with the history it leaves behind.
#[derive(Debug, Clone)]
pub struct GeneratedPlan {
    pub plan: PlanDocument,
    pub history: HistoryState,
}

const WEEK_PROGRESSION: [&str; 5] = [
    "Introduce and explore",
    "Practice and describe",
    "Sort, count, and compare",
    "Apply through pretend play and art",
    "Review and celebrate learning",
];

/// Monday..Friday starting at `week_start`.
pub fn weekday_dates(week_start: NaiveDate) -> Vec<(SchoolDay, NaiveDate)> {
    if week_start.weekday() != Weekday::Mon {
        log::warn!("Week start {} is a {:?}, not a Monday", week_start, week_start.weekday());
    }
    SchoolDay::ALL
        .iter()
        .filter_map(|&day| week_start.checked_add_days(Days::new(day.offset())).map(|date| (day, date)))
        .collect()
}

fn caller_title(title: Option<&str>) -> Option<String> {
    title.map(str::trim).filter(|t| !t.is_empty()).map(String::from)
}

pub fn build_day_plan_with_rng<R: Rng + ?Sized>(
    date: NaiveDate,
    context: &PlanContext,
    store: &VocabularyStore,
    history: &HistoryState,
    book_title: Option<&str>,
    rng: &mut R,
) -> Result<GeneratedPlan, PlanError> {
    let topic = context.checked_topic()?;
    let vocabulary = select_vocabulary_with_rng(&topic, store, history, rng);

    let title = match caller_title(book_title) {
        Some(title) => title,
        None => auto_pick_books_with_rng(&topic, rng).swap_remove(0),
    };

    let plan = DayPlan {
        meta: DayMeta {
            date,
            topic: topic.clone(),
            theme: topic.clone(),
            classroom: context.classroom.clone(),
            age_group: context.age_group.clone(),
        },
        focus: make_focus(&topic),
        i_can_statements: make_i_can_statements(&topic),
        read_aloud: make_read_aloud(&title, &topic, &vocabulary),
        centers: make_centers(&topic, &vocabulary),
        small_group: vec![
            format!("Small group: Sort and count items related to {}; practice new vocabulary.", topic),
            format!("Small group: Fine-motor activity (cut/glue/trace) connected to {}.", topic),
        ],
        large_group: vec![
            format!("Morning circle: Introduce {} with pictures and a short discussion.", topic),
            format!("Music/movement: Song + movement connected to {}.", topic),
        ],
        family_engagement: vec![format!(
            "Send home 2–3 vocabulary words (English + Tewa) and a simple “talk prompt” about {}.",
            topic
        )],
        assessment_notes: vec![
            "Observe: Who used new words? Who engaged in centers? Note participation and any supports needed."
                .to_string(),
        ],
        vocabulary,
    };

    let history = history.clone().record_with_limit(&plan.vocabulary, context.history_limit);
    Ok(GeneratedPlan {
        plan: PlanDocument::Day(plan),
        history,
    })
}

/// Builds a day plan and returns it with the updated history.
///
/// `book_title` is used when it is non-blank; otherwise a title is picked
/// from the topic themes and the general bank.
pub fn build_day_plan(
    date: NaiveDate,
    context: &PlanContext,
    store: &VocabularyStore,
    history: &HistoryState,
    book_title: Option<&str>,
) -> Result<GeneratedPlan, PlanError> {
    build_day_plan_with_rng(date, context, store, history, book_title, &mut rand::thread_rng())
}

/// The week's centers, with the Wednesday graph prompt and the Friday mural.
fn week_centers(day: SchoolDay, topic: &str, vocabulary: &VocabularyBundle) -> Vec<CenterActivity> {
    CenterKind::ALL
        .iter()
        .map(|&kind| {
            let mut center = center_template(kind, topic, vocabulary);
            match (day, kind) {
                (SchoolDay::Wednesday, CenterKind::MathCenter) => {
                    center.teacher_support.push_str(" Add a simple graph: “Which item did we see most?”");
                }
                (SchoolDay::Friday, CenterKind::Art) => {
                    center.items_setup.push_str(" Create a class mural to celebrate the week.");
                }
                _ => {}
            }
            center
        })
        .collect()
}

pub fn build_week_plan_with_rng<R: Rng + ?Sized>(
    week_start: NaiveDate,
    context: &PlanContext,
    store: &VocabularyStore,
    history: &HistoryState,
    books_by_day: &[String],
    rng: &mut R,
) -> Result<GeneratedPlan, PlanError> {
    let topic = context.checked_topic()?;
    let vocabulary = select_vocabulary_with_rng(&topic, store, history, rng);
    let auto_books = auto_pick_books_with_rng(&topic, rng);
    let dates = weekday_dates(week_start);

    let read_alouds: Vec<_> = dates
        .iter()
        .enumerate()
        .map(|(idx, &(day, _))| {
            let title = caller_title(books_by_day.get(idx).map(String::as_str))
                .unwrap_or_else(|| auto_books[idx % auto_books.len()].clone());
            let mut read_aloud = make_read_aloud(&title, &topic, &vocabulary);
            read_aloud.day_name = Some(day);
            read_aloud
        })
        .collect();

    let days = dates
        .iter()
        .zip(read_alouds.iter())
        .enumerate()
        .map(|(idx, (&(day, date), read_aloud))| WeekDayPlan {
            day_name: day,
            date,
            daily_focus: format!("{}: {}", WEEK_PROGRESSION[idx], topic),
            daily_plan_notes: format!(
                "Use today’s read-aloud: \"{}\". Revisit vocabulary throughout centers and transitions.",
                read_aloud.book_title
            ),
            read_aloud: read_aloud.clone(),
            centers: week_centers(day, &topic, &vocabulary),
            small_group: vec![
                "Small group: Practice vocabulary with picture cards; children point, name, and explain.".to_string(),
                "Small group: “Show me…” game using new English + Tewa words.".to_string(),
            ],
            large_group: vec![
                "Morning circle: Greeting, calendar, topic talk, and a quick movement break.".to_string(),
                "Closing circle: Share work and reflect using sentence starters.".to_string(),
            ],
        })
        .collect();

    let plan = WeekPlan {
        meta: WeekMeta {
            week_of: week_start,
            topic: topic.clone(),
            theme: topic.clone(),
            classroom: context.classroom.clone(),
            age_group: context.age_group.clone(),
        },
        week_focus: make_focus(&topic),
        week_i_can_statements: make_i_can_statements(&topic),
        read_alouds,
        days,
        family_engagement: vec![
            format!("Family connection: Ask families to share a photo/story connected to {}.", topic),
            "Send home: 2 Tewa phrases for routines + 3 Tewa words for the week.".to_string(),
        ],
        assessment_notes: vec![
            "Track: vocabulary use, engagement, fine-motor growth, and peer cooperation.".to_string(),
            "Note: any supports needed (visuals, repetition, peer buddy, extra time).".to_string(),
        ],
        week_vocabulary: vocabulary,
    };

    // One history entry for the whole week, not one per day.
    let history = history.clone().record_with_limit(&plan.week_vocabulary, context.history_limit);
    Ok(GeneratedPlan {
        plan: PlanDocument::Week(plan),
        history,
    })
}

/// Builds a Monday..Friday plan sharing one vocabulary bundle.
///
/// `books_by_day[i]` overrides the read-aloud for weekday `i` when non-blank.
pub fn build_week_plan(
    week_start: NaiveDate,
    context: &PlanContext,
    store: &VocabularyStore,
    history: &HistoryState,
    books_by_day: &[String],
) -> Result<GeneratedPlan, PlanError> {
    build_week_plan_with_rng(week_start, context, store, history, books_by_day, &mut rand::thread_rng())
}
