use crate::types::vocabulary::{EnglishWord, TewaPhrase, TewaWord, VocabularyBundle};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::Hash;

/// Most recent entries kept per vocabulary kind.
pub const DEFAULT_HISTORY_LIMIT: usize = 2000;

/// Vocabulary already handed out in earlier plans, oldest first.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryState {
    #[serde(default)]
    pub used_tewa_words: Vec<TewaWord>,
    #[serde(default)]
    pub used_tewa_phrases: Vec<TewaPhrase>,
    #[serde(default)]
    pub used_english_words: Vec<EnglishWord>,
}

fn keep_last<T>(items: &mut Vec<T>, limit: usize) {
    if items.len() > limit {
        items.drain(..items.len() - limit);
    }
}

fn as_set<T: Clone + Eq + Hash>(items: &[T]) -> HashSet<T> {
    items.iter().cloned().collect()
}

impl HistoryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.used_tewa_words.is_empty() && self.used_tewa_phrases.is_empty() && self.used_english_words.is_empty()
    }

    /// Appends every entry of `bundle` and evicts the oldest entries past
    /// [`DEFAULT_HISTORY_LIMIT`]. Call once per generated plan.
    pub fn record(self, bundle: &VocabularyBundle) -> Self {
        self.record_with_limit(bundle, DEFAULT_HISTORY_LIMIT)
    }

    pub fn record_with_limit(mut self, bundle: &VocabularyBundle, limit: usize) -> Self {
        self.used_tewa_words.extend(bundle.tewa_words.iter().cloned());
        self.used_tewa_phrases.extend(bundle.tewa_phrases.iter().cloned());
        self.used_english_words.extend(bundle.english_words.iter().cloned());

        keep_last(&mut self.used_tewa_words, limit);
        keep_last(&mut self.used_tewa_phrases, limit);
        keep_last(&mut self.used_english_words, limit);
        self
    }

    pub fn used_tewa_word_set(&self) -> HashSet<TewaWord> {
        as_set(&self.used_tewa_words)
    }

    pub fn used_tewa_phrase_set(&self) -> HashSet<TewaPhrase> {
        as_set(&self.used_tewa_phrases)
    }

    pub fn used_english_word_set(&self) -> HashSet<EnglishWord> {
        as_set(&self.used_english_words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(n: usize) -> EnglishWord {
        EnglishWord { word: format!("word{}", n), ..Default::default() }
    }

    fn bundle_of(words: Vec<EnglishWord>) -> VocabularyBundle {
        VocabularyBundle { english_words: words, ..Default::default() }
    }

    #[test]
    fn test_record_appends_in_order() {
        let history = HistoryState::new()
            .record(&bundle_of(vec![word(1), word(2)]))
            .record(&bundle_of(vec![word(3)]));
        assert_eq!(history.used_english_words, vec![word(1), word(2), word(3)]);
        assert!(history.used_tewa_words.is_empty());
    }

    #[test]
    fn test_truncation_keeps_most_recent() {
        let mut history = HistoryState::new();
        let mut next = 0;
        for _ in 0..450 {
            let words: Vec<EnglishWord> = (next..next + 5).map(word).collect();
            next += 5;
            history = history.record(&bundle_of(words));
            assert!(history.used_english_words.len() <= DEFAULT_HISTORY_LIMIT);
        }
        assert_eq!(history.used_english_words.len(), DEFAULT_HISTORY_LIMIT);
        assert_eq!(history.used_english_words.first(), Some(&word(next - DEFAULT_HISTORY_LIMIT)));
        assert_eq!(history.used_english_words.last(), Some(&word(next - 1)));
    }

    #[test]
    fn test_custom_limit() {
        let history = HistoryState::new().record_with_limit(&bundle_of((0..5).map(word).collect()), 2);
        assert_eq!(history.used_english_words, vec![word(3), word(4)]);
    }

    #[test]
    fn test_missing_fields_deserialize_empty() {
        let history: HistoryState = serde_json::from_str(r#"{"usedTewaWords":[]}"#).unwrap();
        assert!(history.is_empty());
    }
}
