use super::topic::topic_tokens;
use crate::types::vocabulary::VocabularyEntry;

/// Entries whose match text contains at least one topic token, in pool order.
///
/// A topic with no tokens yields no matches; callers treat that as "no topic
/// signal" and fall back to the whole bank.
pub fn keyword_match_pool<T: VocabularyEntry>(topic: &str, items: &[T]) -> Vec<T> {
    let tokens = topic_tokens(topic);
    if tokens.is_empty() {
        return Vec::new();
    }
    items
        .iter()
        .filter(|item| {
            let text = item.match_text().to_lowercase();
            tokens.iter().any(|token| text.contains(token.as_str()))
        })
        .cloned()
        .collect()
}
