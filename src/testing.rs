//! Fixtures for tests and demos.
//!
//! The Tewa text here is placeholder (`t-...`), not real vocabulary; real
//! banks are loaded from the configured data directory.

use crate::parsing::vocab_loader::{ENGLISH_VOCAB_FILE, TEWA_PHRASES_FILE, TEWA_WORDS_FILE};
use crate::types::vocabulary::{EnglishWord, TewaPhrase, TewaWord, VocabularyStore};
use std::fs;
use std::io;
use std::path::Path;

fn tewa_word(tewa: &str, english: &str) -> TewaWord {
    TewaWord {
        tewa: tewa.to_string(),
        english: english.to_string(),
        pronunciation_notes: String::new(),
    }
}

fn tewa_phrase(tewa: &str, english: &str, when_to_use: &str) -> TewaPhrase {
    TewaPhrase {
        tewa: tewa.to_string(),
        english: english.to_string(),
        when_to_use: when_to_use.to_string(),
    }
}

fn english_word(word: &str, kid_meaning: &str) -> EnglishWord {
    EnglishWord {
        word: word.to_string(),
        kid_meaning: kid_meaning.to_string(),
        use_in_sentence: String::new(),
    }
}

/// A small store with 12 Tewa words, 6 Tewa phrases and 15 English words.
///
/// Two Tewa words ("rain cloud", "rainbow") and two English words
/// ("rain", "raincoat") relate to the topic "rain".
pub fn sample_store() -> VocabularyStore {
    VocabularyStore {
        tewa_words: vec![
            tewa_word("t-sun", "sun"),
            tewa_word("t-rain-cloud", "rain cloud"),
            tewa_word("t-corn", "corn"),
            tewa_word("t-bear", "bear"),
            tewa_word("t-water", "water"),
            tewa_word("t-rainbow", "rainbow"),
            tewa_word("t-mountain", "mountain"),
            tewa_word("t-river", "river"),
            tewa_word("t-seed", "seed"),
            tewa_word("t-turtle", "turtle"),
            tewa_word("t-wind", "wind"),
            tewa_word("t-home", "home"),
        ],
        tewa_phrases: vec![
            tewa_phrase("t-good-morning", "good morning", "arrival"),
            tewa_phrase("t-thank-you", "thank you", "anytime"),
            tewa_phrase("t-wash-hands", "wash your hands", "before snack"),
            tewa_phrase("t-come-sit", "come sit down", "circle time"),
            tewa_phrase("t-it-is-raining", "it is raining", "weather talk"),
            tewa_phrase("t-goodbye", "see you tomorrow", "dismissal"),
        ],
        english_words: vec![
            english_word("rain", "water falling from clouds"),
            english_word("raincoat", "a coat that keeps you dry"),
            english_word("puddle", "a little pool of water"),
            english_word("seed", "a tiny start of a plant"),
            english_word("soil", "dirt plants grow in"),
            english_word("sprout", "a baby plant"),
            english_word("bear", "a big furry animal"),
            english_word("turtle", "an animal with a shell"),
            english_word("color", "red, blue, yellow and more"),
            english_word("paint", "colored liquid for art"),
            english_word("wind", "moving air"),
            english_word("thunder", "a loud sound in a storm"),
            english_word("share", "let a friend use it too"),
            english_word("gentle", "soft and careful"),
            english_word("observe", "look closely"),
        ],
    }
}

/// Writes [`sample_store`] into `dir` as the three bank files.
pub fn write_sample_banks(dir: &Path) -> io::Result<()> {
    let store = sample_store();
    fs::write(dir.join(TEWA_WORDS_FILE), serde_json::to_string_pretty(&store.tewa_words)?)?;
    fs::write(dir.join(TEWA_PHRASES_FILE), serde_json::to_string_pretty(&store.tewa_phrases)?)?;
    fs::write(dir.join(ENGLISH_VOCAB_FILE), serde_json::to_string_pretty(&store.english_words)?)?;
    Ok(())
}
