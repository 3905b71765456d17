use super::vocabulary::VocabularyBundle;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Day or week; also the tag of a serialized [`PlanDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanMode {
    Day,
    Week,
}

impl PlanMode {
    pub fn as_str(self) -> &'static str {
        match self {
            PlanMode::Day => "day",
            PlanMode::Week => "week",
        }
    }
}

impl fmt::Display for PlanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The five school days a week plan covers, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchoolDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl SchoolDay {
    pub const ALL: [SchoolDay; 5] = [
        SchoolDay::Monday,
        SchoolDay::Tuesday,
        SchoolDay::Wednesday,
        SchoolDay::Thursday,
        SchoolDay::Friday,
    ];

    /// Days after the week start (Monday = 0).
    pub fn offset(self) -> u64 {
        match self {
            SchoolDay::Monday => 0,
            SchoolDay::Tuesday => 1,
            SchoolDay::Wednesday => 2,
            SchoolDay::Thursday => 3,
            SchoolDay::Friday => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SchoolDay::Monday => "Monday",
            SchoolDay::Tuesday => "Tuesday",
            SchoolDay::Wednesday => "Wednesday",
            SchoolDay::Thursday => "Thursday",
            SchoolDay::Friday => "Friday",
        }
    }
}

impl fmt::Display for SchoolDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The nine learning centers every plan lays out, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CenterKind {
    Blocks,
    Art,
    #[serde(rename = "Math Center")]
    MathCenter,
    #[serde(rename = "Dramatic Play")]
    DramaticPlay,
    #[serde(rename = "Class Library")]
    ClassLibrary,
    #[serde(rename = "Science/Sensory")]
    ScienceSensory,
    Manipulative,
    Writing,
    Other,
}

impl CenterKind {
    pub const ALL: [CenterKind; 9] = [
        CenterKind::Blocks,
        CenterKind::Art,
        CenterKind::MathCenter,
        CenterKind::DramaticPlay,
        CenterKind::ClassLibrary,
        CenterKind::ScienceSensory,
        CenterKind::Manipulative,
        CenterKind::Writing,
        CenterKind::Other,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CenterKind::Blocks => "Blocks",
            CenterKind::Art => "Art",
            CenterKind::MathCenter => "Math Center",
            CenterKind::DramaticPlay => "Dramatic Play",
            CenterKind::ClassLibrary => "Class Library",
            CenterKind::ScienceSensory => "Science/Sensory",
            CenterKind::Manipulative => "Manipulative",
            CenterKind::Writing => "Writing",
            CenterKind::Other => "Other",
        }
    }
}

impl fmt::Display for CenterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CenterActivity {
    pub name: CenterKind,
    pub objective_indicator: String,
    pub items_setup: String,
    pub teacher_support: String,
    pub books: String,
    pub vocabulary_words: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Focus {
    pub big_idea: String,
    pub objectives: Vec<String>,
    pub teaching_strategies: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReadAloud {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_name: Option<SchoolDay>,
    pub book_title: String,
    #[serde(default)]
    pub author: String,
    pub vocab_to_use_in_questions: Vec<String>,
    pub before_questions: Vec<String>,
    pub during_questions: Vec<String>,
    pub after_questions: Vec<String>,
    pub extension_activity: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DayMeta {
    pub date: NaiveDate,
    pub topic: String,
    pub theme: String,
    pub classroom: String,
    pub age_group: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WeekMeta {
    pub week_of: NaiveDate,
    pub topic: String,
    pub theme: String,
    pub classroom: String,
    pub age_group: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub meta: DayMeta,
    pub focus: Focus,
    pub i_can_statements: Vec<String>,
    pub vocabulary: VocabularyBundle,
    pub read_aloud: ReadAloud,
    pub centers: Vec<CenterActivity>,
    pub small_group: Vec<String>,
    pub large_group: Vec<String>,
    pub family_engagement: Vec<String>,
    pub assessment_notes: Vec<String>,
}

/// One weekday inside a week plan.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WeekDayPlan {
    pub day_name: SchoolDay,
    pub date: NaiveDate,
    pub daily_focus: String,
    pub daily_plan_notes: String,
    pub read_aloud: ReadAloud,
    pub centers: Vec<CenterActivity>,
    pub small_group: Vec<String>,
    pub large_group: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WeekPlan {
    pub meta: WeekMeta,
    pub week_focus: Focus,
    pub week_i_can_statements: Vec<String>,
    pub week_vocabulary: VocabularyBundle,
    pub read_alouds: Vec<ReadAloud>,
    pub days: Vec<WeekDayPlan>,
    pub family_engagement: Vec<String>,
    pub assessment_notes: Vec<String>,
}

/// A finished, self-contained lesson plan.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum PlanDocument {
    Day(DayPlan),
    Week(WeekPlan),
}

impl PlanDocument {
    pub fn mode(&self) -> PlanMode {
        match self {
            PlanDocument::Day(_) => PlanMode::Day,
            PlanDocument::Week(_) => PlanMode::Week,
        }
    }

    pub fn topic(&self) -> &str {
        match self {
            PlanDocument::Day(p) => &p.meta.topic,
            PlanDocument::Week(p) => &p.meta.topic,
        }
    }

    pub fn classroom(&self) -> &str {
        match self {
            PlanDocument::Day(p) => &p.meta.classroom,
            PlanDocument::Week(p) => &p.meta.classroom,
        }
    }

    /// The plan date for a day plan, the week start for a week plan.
    pub fn anchor_date(&self) -> NaiveDate {
        match self {
            PlanDocument::Day(p) => p.meta.date,
            PlanDocument::Week(p) => p.meta.week_of,
        }
    }

    pub fn vocabulary(&self) -> &VocabularyBundle {
        match self {
            PlanDocument::Day(p) => &p.vocabulary,
            PlanDocument::Week(p) => &p.week_vocabulary,
        }
    }

    pub fn read_alouds(&self) -> Vec<&ReadAloud> {
        match self {
            PlanDocument::Day(p) => vec![&p.read_aloud],
            PlanDocument::Week(p) => p.read_alouds.iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_names_serialize_as_labels() {
        let json = serde_json::to_string(&CenterKind::ScienceSensory).unwrap();
        assert_eq!(json, "\"Science/Sensory\"");
        for kind in CenterKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.name()));
        }
    }

    #[test]
    fn test_school_day_offsets_are_ordered() {
        let offsets: Vec<u64> = SchoolDay::ALL.iter().map(|d| d.offset()).collect();
        assert_eq!(offsets, vec![0, 1, 2, 3, 4]);
    }
}
