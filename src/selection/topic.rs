use regex::Regex;

lazy_static::lazy_static! {
    static ref NON_TOPIC_CHARS: Regex = Regex::new(r"[^a-z0-9\s]").expect("static regex");
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").expect("static regex");
}

/// Canonical form of a free-text topic: lowercase, only `[a-z0-9]` and
/// single spaces, no leading or trailing whitespace.
///
/// `"  Rain!  Clouds "` and `"rain clouds"` normalize identically, and
/// normalizing twice changes nothing.
pub fn normalize_topic(topic: &str) -> String {
    let lowered = topic.to_lowercase();
    let stripped = NON_TOPIC_CHARS.replace_all(&lowered, "");
    WHITESPACE_RUN.replace_all(stripped.trim(), " ").into_owned()
}

/// Whitespace-delimited tokens of the normalized topic. Empty for a blank topic.
pub fn topic_tokens(topic: &str) -> Vec<String> {
    normalize_topic(topic)
        .split(' ')
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}
