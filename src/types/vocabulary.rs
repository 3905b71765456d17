use serde::{Deserialize, Serialize};

/// Which of the three vocabulary banks an entry comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VocabularyKind {
    TewaWord,
    TewaPhrase,
    EnglishWord,
}

impl VocabularyKind {
    /// How many entries of this kind every plan carries.
    pub const fn bundle_count(self) -> usize {
        match self {
            VocabularyKind::TewaWord => 3,
            VocabularyKind::TewaPhrase => 2,
            VocabularyKind::EnglishWord => 5,
        }
    }
}

/// Common surface of the three vocabulary record shapes.
///
/// Identity is the full field set: two entries are the same entry only
/// when every field matches, which the derived `Eq`/`Hash` give us.
pub trait VocabularyEntry: Clone + Eq + std::hash::Hash {
    const KIND: VocabularyKind;

    /// Text the keyword matcher searches in.
    fn match_text(&self) -> &str;
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct TewaWord {
    pub tewa: String,
    pub english: String,
    #[serde(default)]
    pub pronunciation_notes: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct TewaPhrase {
    pub tewa: String,
    pub english: String,
    #[serde(default)]
    pub when_to_use: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct EnglishWord {
    pub word: String,
    #[serde(default)]
    pub kid_meaning: String,
    #[serde(default)]
    pub use_in_sentence: String,
}

impl VocabularyEntry for TewaWord {
    const KIND: VocabularyKind = VocabularyKind::TewaWord;
    fn match_text(&self) -> &str {
        &self.english
    }
}

impl VocabularyEntry for TewaPhrase {
    const KIND: VocabularyKind = VocabularyKind::TewaPhrase;
    fn match_text(&self) -> &str {
        &self.english
    }
}

impl VocabularyEntry for EnglishWord {
    const KIND: VocabularyKind = VocabularyKind::EnglishWord;
    fn match_text(&self) -> &str {
        &self.word
    }
}

impl TewaWord {
    /// `tewa (english)`, the form used inside question prompts and center tables.
    pub fn display(&self) -> String {
        format!("{} ({})", self.tewa, self.english)
    }
}

impl TewaPhrase {
    pub fn display(&self) -> String {
        format!("{} ({})", self.tewa, self.english)
    }
}

/// The three read-only banks every plan draws from.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct VocabularyStore {
    pub tewa_words: Vec<TewaWord>,
    pub tewa_phrases: Vec<TewaPhrase>,
    pub english_words: Vec<EnglishWord>,
}

impl VocabularyStore {
    pub fn is_empty(&self) -> bool {
        self.tewa_words.is_empty() && self.tewa_phrases.is_empty() && self.english_words.is_empty()
    }
}

/// Vocabulary chosen for one plan: 3 Tewa words, 2 Tewa phrases, 5 English words
/// whenever the store can supply them.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyBundle {
    pub tewa_words: Vec<TewaWord>,
    pub tewa_phrases: Vec<TewaPhrase>,
    pub english_words: Vec<EnglishWord>,
}

impl VocabularyBundle {
    /// English words joined with ", ", then "; ", then the Tewa words as `tewa (english)`.
    pub fn display_words(&self) -> String {
        let english = self
            .english_words
            .iter()
            .map(|w| w.word.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let tewa = self
            .tewa_words
            .iter()
            .map(TewaWord::display)
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}; {}", english, tewa)
    }

    pub fn is_complete(&self) -> bool {
        self.tewa_words.len() == VocabularyKind::TewaWord.bundle_count()
            && self.tewa_phrases.len() == VocabularyKind::TewaPhrase.bundle_count()
            && self.english_words.len() == VocabularyKind::EnglishWord.bundle_count()
    }
}
