use super::history::HistoryState;
use super::matcher::keyword_match_pool;
use super::sampler::pick_non_used;
use crate::types::vocabulary::{VocabularyBundle, VocabularyEntry, VocabularyStore};
use rand::Rng;
use std::collections::HashSet;

/// Topic-matched entries when there are any, otherwise the whole bank; the
/// whole bank always backs up the sampler.
fn select_kind<T, R>(topic: &str, bank: &[T], used: &HashSet<T>, rng: &mut R) -> Vec<T>
where
    T: VocabularyEntry,
    R: Rng + ?Sized,
{
    let count = T::KIND.bundle_count();
    let matched = keyword_match_pool(topic, bank);
    let picked = if matched.is_empty() {
        log::debug!("No {:?} entries match {:?}; sampling the full bank", T::KIND, topic);
        pick_non_used(bank, used, count, Some(bank), rng)
    } else {
        log::debug!("{} {:?} entries match {:?}", matched.len(), T::KIND, topic);
        pick_non_used(&matched, used, count, Some(bank), rng)
    };
    if picked.len() < count {
        log::warn!(
            "Vocabulary bank for {:?} only supplied {} of {} entries",
            T::KIND,
            picked.len(),
            count
        );
    }
    picked
}

/// Chooses 3 Tewa words, 2 Tewa phrases and 5 English words for `topic`.
///
/// History is only read here; recording the bundle is up to the caller,
/// once per plan.
pub fn select_vocabulary_with_rng<R: Rng + ?Sized>(
    topic: &str,
    store: &VocabularyStore,
    history: &HistoryState,
    rng: &mut R,
) -> VocabularyBundle {
    VocabularyBundle {
        tewa_words: select_kind(topic, &store.tewa_words, &history.used_tewa_word_set(), rng),
        tewa_phrases: select_kind(topic, &store.tewa_phrases, &history.used_tewa_phrase_set(), rng),
        english_words: select_kind(topic, &store.english_words, &history.used_english_word_set(), rng),
    }
}

pub fn select_vocabulary(topic: &str, store: &VocabularyStore, history: &HistoryState) -> VocabularyBundle {
    select_vocabulary_with_rng(topic, store, history, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_store;
    use crate::types::vocabulary::TewaWord;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_bundle_shape() {
        let store = sample_store();
        for (seed, topic) in ["rain", "corn", "zzz", "", "bear garden"].iter().enumerate() {
            let mut rng = StdRng::seed_from_u64(seed as u64);
            let bundle = select_vocabulary_with_rng(topic, &store, &HistoryState::new(), &mut rng);
            assert!(bundle.is_complete(), "topic {:?}: {:?}", topic, bundle);
        }
    }

    #[test]
    fn test_prefers_topic_matches() {
        let store = sample_store();
        let mut rng = StdRng::seed_from_u64(11);
        let bundle = select_vocabulary_with_rng("rain", &store, &HistoryState::new(), &mut rng);
        let rain_cloud = store.tewa_words.iter().find(|w| w.english == "rain cloud").unwrap();
        assert!(bundle.tewa_words.contains(rain_cloud));
        // Matches come before padding from the rest of the bank.
        assert!(bundle.tewa_words[0].english.contains("rain"));
    }

    #[test]
    fn test_skips_history_until_exhausted() {
        let store = sample_store();
        let mut history = HistoryState::new();
        let mut rng = StdRng::seed_from_u64(5);
        let mut seen: Vec<TewaWord> = Vec::new();

        // Each bundle takes 3 Tewa words; fresh ones are available for the first few plans.
        let plans_without_repeat = store.tewa_words.len() / 3;
        for _ in 0..plans_without_repeat {
            let bundle = select_vocabulary_with_rng("zzz", &store, &history, &mut rng);
            for word in &bundle.tewa_words {
                assert!(!seen.contains(word), "repeated {:?}", word);
                seen.push(word.clone());
            }
            history = history.record(&bundle);
        }

        let bundle = select_vocabulary_with_rng("zzz", &store, &history, &mut rng);
        assert_eq!(bundle.tewa_words.len(), 3);
    }

    #[test]
    fn test_empty_store_under_fills() {
        let bundle = select_vocabulary("rain", &VocabularyStore::default(), &HistoryState::new());
        assert!(bundle.tewa_words.is_empty());
        assert!(bundle.english_words.is_empty());
    }
}
