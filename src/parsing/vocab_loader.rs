use crate::types::vocabulary::VocabularyStore;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const TEWA_WORDS_FILE: &str = "tewa_words.json";
pub const TEWA_PHRASES_FILE: &str = "tewa_phrases.json";
pub const ENGLISH_VOCAB_FILE: &str = "english_vocab.json";

/// Errors from loading the vocabulary banks.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

fn parse_bank<T: DeserializeOwned>(name: &str, content: &str) -> Result<Vec<T>, StoreError> {
    serde_json::from_str(content).map_err(|source| StoreError::Parse { name: name.to_string(), source })
}

fn read_bank<T: DeserializeOwned>(dir: &Path, file_name: &str) -> Result<Vec<T>, StoreError> {
    let path = dir.join(file_name);
    let content = fs::read_to_string(&path).map_err(|source| StoreError::Read { path: path.clone(), source })?;
    parse_bank(file_name, &content)
}

impl VocabularyStore {
    /// Builds a store from the three JSON arrays already in memory.
    pub fn from_json_strs(tewa_words: &str, tewa_phrases: &str, english_vocab: &str) -> Result<Self, StoreError> {
        Ok(VocabularyStore {
            tewa_words: parse_bank(TEWA_WORDS_FILE, tewa_words)?,
            tewa_phrases: parse_bank(TEWA_PHRASES_FILE, tewa_phrases)?,
            english_words: parse_bank(ENGLISH_VOCAB_FILE, english_vocab)?,
        })
    }
}

/// Loads `tewa_words.json`, `tewa_phrases.json` and `english_vocab.json` from `dir`.
pub fn load_vocabulary_store(dir: &Path) -> Result<VocabularyStore, StoreError> {
    let store = VocabularyStore {
        tewa_words: read_bank(dir, TEWA_WORDS_FILE)?,
        tewa_phrases: read_bank(dir, TEWA_PHRASES_FILE)?,
        english_words: read_bank(dir, ENGLISH_VOCAB_FILE)?,
    };
    log::debug!(
        "Loaded vocabulary from {}: {} Tewa words, {} Tewa phrases, {} English words",
        dir.display(),
        store.tewa_words.len(),
        store.tewa_phrases.len(),
        store.english_words.len()
    );
    if store.is_empty() {
        log::warn!("Vocabulary banks in {} are all empty", dir.display());
    }
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const WORDS: &str = r#"[{"tewa":"t-cloud","english":"rain cloud","pronunciationNotes":"two beats"}]"#;
    const PHRASES: &str = r#"[{"tewa":"t-hello","english":"hello","whenToUse":"greeting"}]"#;
    const ENGLISH: &str = r#"[{"word":"umbrella","kidMeaning":"keeps you dry","useInSentence":"I hold my umbrella."}]"#;

    #[test]
    fn test_from_json_strs() {
        let store = VocabularyStore::from_json_strs(WORDS, PHRASES, ENGLISH).unwrap();
        assert_eq!(store.tewa_words[0].english, "rain cloud");
        assert_eq!(store.tewa_phrases[0].when_to_use, "greeting");
        assert_eq!(store.english_words[0].word, "umbrella");
    }

    #[test]
    fn test_parse_error_names_the_bank() {
        let err = VocabularyStore::from_json_strs(WORDS, "{not json", ENGLISH).unwrap_err();
        assert!(err.to_string().contains(TEWA_PHRASES_FILE));
    }

    #[test]
    fn test_load_from_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(TEWA_WORDS_FILE), WORDS).unwrap();
        fs::write(dir.path().join(TEWA_PHRASES_FILE), PHRASES).unwrap();
        fs::write(dir.path().join(ENGLISH_VOCAB_FILE), ENGLISH).unwrap();

        let store = load_vocabulary_store(dir.path()).unwrap();
        assert_eq!(store.tewa_words.len(), 1);
        assert_eq!(store.english_words[0].kid_meaning, "keeps you dry");
    }

    #[test]
    fn test_missing_bank_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        let err = load_vocabulary_store(dir.path()).unwrap_err();
        assert!(matches!(err, StoreError::Read { .. }));
    }
}
