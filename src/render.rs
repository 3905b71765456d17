//! Plain-text view of a plan for the terminal.

use crate::types::plan::{CenterActivity, Focus, PlanDocument, ReadAloud};
use crate::types::vocabulary::VocabularyBundle;
use std::fmt::Write;

fn bullets(out: &mut String, heading: &str, items: &[String]) {
    let _ = writeln!(out, "{}", heading);
    for item in items {
        let _ = writeln!(out, "  - {}", item);
    }
}

fn render_focus(out: &mut String, label: &str, focus: &Focus) {
    let _ = writeln!(out, "\nFocus ({}): {}", label, focus.big_idea);
    bullets(out, "Objectives", &focus.objectives);
    bullets(out, "Teaching Strategies", &focus.teaching_strategies);
}

fn render_vocabulary(out: &mut String, vocab: &VocabularyBundle) {
    let _ = writeln!(out, "\nVocabulary");
    let _ = writeln!(out, "Tewa Words ({})", vocab.tewa_words.len());
    for w in &vocab.tewa_words {
        let _ = writeln!(out, "  - {} = {} {}", w.tewa, w.english, w.pronunciation_notes);
    }
    let _ = writeln!(out, "Tewa Phrases ({})", vocab.tewa_phrases.len());
    for p in &vocab.tewa_phrases {
        let when = if p.when_to_use.is_empty() { "phrase" } else { p.when_to_use.as_str() };
        let _ = writeln!(out, "  - {} = {} [{}]", p.tewa, p.english, when);
    }
    let _ = writeln!(out, "English Words ({})", vocab.english_words.len());
    for e in &vocab.english_words {
        let _ = writeln!(out, "  - {}: {} {}", e.word, e.kid_meaning, e.use_in_sentence);
    }
}

fn render_read_aloud(out: &mut String, read_aloud: &ReadAloud) {
    match read_aloud.day_name {
        Some(day) => {
            let _ = writeln!(out, "\n{}: {}", day, read_aloud.book_title);
        }
        None => {
            let _ = writeln!(out, "\n{}", read_aloud.book_title);
        }
    }
    if !read_aloud.vocab_to_use_in_questions.is_empty() {
        let _ = writeln!(out, "Use vocab in questions: {}", read_aloud.vocab_to_use_in_questions.join(" • "));
    }
    bullets(out, "Before", &read_aloud.before_questions);
    bullets(out, "During", &read_aloud.during_questions);
    bullets(out, "After", &read_aloud.after_questions);
    let _ = writeln!(out, "Extension: {}", read_aloud.extension_activity);
}

fn render_centers(out: &mut String, centers: &[CenterActivity]) {
    for center in centers {
        let _ = writeln!(out, "[{}]", center.name);
        let _ = writeln!(out, "  Objective: {}", center.objective_indicator);
        let _ = writeln!(out, "  Setup: {}", center.items_setup);
        let _ = writeln!(out, "  Teacher support: {}", center.teacher_support);
        let _ = writeln!(out, "  Books: {}", center.books);
        let _ = writeln!(out, "  Vocabulary: {}", center.vocabulary_words);
    }
}

pub fn render_plan_text(plan: &PlanDocument) -> String {
    let mut out = String::new();
    match plan {
        PlanDocument::Day(day) => {
            let _ = writeln!(out, "Daily Plan: {}", day.meta.topic);
            let _ = writeln!(
                out,
                "Date {} • Classroom: {} • Age: {}",
                day.meta.date, day.meta.classroom, day.meta.age_group
            );
            render_focus(&mut out, "Daily", &day.focus);
            bullets(&mut out, "\nI Can Statements", &day.i_can_statements);
            render_vocabulary(&mut out, &day.vocabulary);
            let _ = writeln!(out, "\nBooks / Read Alouds");
            render_read_aloud(&mut out, &day.read_aloud);
            let _ = writeln!(out, "\nCenters");
            render_centers(&mut out, &day.centers);
            bullets(&mut out, "\nSmall Group", &day.small_group);
            bullets(&mut out, "Large Group", &day.large_group);
            bullets(&mut out, "\nFamily Engagement", &day.family_engagement);
            bullets(&mut out, "Assessment Notes", &day.assessment_notes);
        }
        PlanDocument::Week(week) => {
            let _ = writeln!(out, "Weekly Plan: {}", week.meta.topic);
            let _ = writeln!(
                out,
                "Week of {} • Classroom: {} • Age: {}",
                week.meta.week_of, week.meta.classroom, week.meta.age_group
            );
            render_focus(&mut out, "Weekly", &week.week_focus);
            bullets(&mut out, "\nI Can Statements", &week.week_i_can_statements);
            render_vocabulary(&mut out, &week.week_vocabulary);
            let _ = writeln!(out, "\nBooks / Read Alouds");
            for read_aloud in &week.read_alouds {
                render_read_aloud(&mut out, read_aloud);
            }
            for day in &week.days {
                let _ = writeln!(out, "\n{} - {}", day.day_name, day.date);
                let _ = writeln!(out, "Daily focus: {}", day.daily_focus);
                let _ = writeln!(out, "{}", day.daily_plan_notes);
                render_centers(&mut out, &day.centers);
                bullets(&mut out, "Small Group", &day.small_group);
                bullets(&mut out, "Large Group", &day.large_group);
            }
            bullets(&mut out, "\nFamily Engagement", &week.family_engagement);
            bullets(&mut out, "Assessment Notes", &week.assessment_notes);
        }
    }
    out
}
