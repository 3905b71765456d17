use crate::selection::history::HistoryState;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from writing (or explicitly reading) persisted state.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error at {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl PersistError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        PersistError::Io { path: path.to_path_buf(), source }
    }

    fn json(path: &Path, source: serde_json::Error) -> Self {
        PersistError::Json { path: path.to_path_buf(), source }
    }
}

/// Writes `value` as pretty JSON, creating parent directories as needed.
pub(crate) fn write_json<T: Serialize + ?Sized>(value: &T, file_path: &Path) -> Result<(), PersistError> {
    if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| PersistError::io(parent, e))?;
    }
    let file = File::create(file_path).map_err(|e| PersistError::io(file_path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value).map_err(|e| PersistError::json(file_path, e))?;
    writer.flush().map_err(|e| PersistError::io(file_path, e))
}

pub(crate) fn read_json<T: DeserializeOwned>(file_path: &Path) -> Result<T, PersistError> {
    let file = File::open(file_path).map_err(|e| PersistError::io(file_path, e))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| PersistError::json(file_path, e))
}

/// Loads the vocabulary history. A missing or unreadable file is an empty history.
pub fn load_history(file_path: &Path) -> HistoryState {
    if !file_path.exists() {
        log::debug!("No vocabulary history at {}; starting fresh", file_path.display());
        return HistoryState::new();
    }
    match read_json(file_path) {
        Ok(history) => history,
        Err(e) => {
            log::warn!("Ignoring malformed vocabulary history: {}", e);
            HistoryState::new()
        }
    }
}

pub fn save_history(history: &HistoryState, file_path: &Path) -> Result<(), PersistError> {
    write_json(history, file_path)?;
    log::debug!(
        "Saved vocabulary history to {} ({} / {} / {} entries)",
        file_path.display(),
        history.used_tewa_words.len(),
        history.used_tewa_phrases.len(),
        history.used_english_words.len()
    );
    Ok(())
}

/// Forgets all used vocabulary so upcoming plans may repeat earlier words.
/// Saved plans are untouched.
pub fn reset_history(file_path: &Path) -> Result<(), PersistError> {
    save_history(&HistoryState::new(), file_path)?;
    log::info!("Vocabulary history reset at {}", file_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_store;
    use crate::types::vocabulary::VocabularyBundle;
    use tempfile::TempDir;

    fn some_history() -> HistoryState {
        let store = sample_store();
        HistoryState::new().record(&VocabularyBundle {
            tewa_words: store.tewa_words[..3].to_vec(),
            tewa_phrases: store.tewa_phrases[..2].to_vec(),
            english_words: store.english_words[..5].to_vec(),
        })
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state").join("vocab_history.json");
        let history = some_history();
        save_history(&history, &path).unwrap();
        assert_eq!(load_history(&path), history);
    }

    #[test]
    fn test_missing_file_is_empty_history() {
        let dir = TempDir::new().unwrap();
        assert!(load_history(&dir.path().join("nope.json")).is_empty());
    }

    #[test]
    fn test_malformed_file_is_empty_history() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vocab_history.json");
        fs::write(&path, "{\"usedTewaWords\": [1, 2").unwrap();
        assert!(load_history(&path).is_empty());

        fs::write(&path, "[\"not\", \"an object\"]").unwrap();
        assert!(load_history(&path).is_empty());
    }

    #[test]
    fn test_reset() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vocab_history.json");
        save_history(&some_history(), &path).unwrap();
        reset_history(&path).unwrap();
        assert!(load_history(&path).is_empty());
    }
}
