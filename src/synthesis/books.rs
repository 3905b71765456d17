use crate::selection::topic::normalize_topic;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Picks a week plan needs; a day plan uses the first.
pub const BOOK_PICKS: usize = 5;

pub const BOOK_BANK: &[&str] = &[
    "Brown Bear, Brown Bear, What Do You See?",
    "The Very Hungry Caterpillar",
    "Chicka Chicka Boom Boom",
    "Where the Wild Things Are",
    "The Snowy Day",
    "The Mitten",
    "We Are Water Protectors",
    "The Day You Begin",
    "The Gruffalo",
    "The Little Red Hen",
    "Caps for Sale",
    "Goodnight Moon",
    "Corduroy",
    "A Bad Case of Stripes",
    "The Dot",
    "Mouse Paint",
    "Planting a Rainbow",
    "From Seed to Plant",
    "Bear Snores On",
    "Pete the Cat: I Love My White Shoes",
    "Swimmy",
    "The Rainbow Fish",
    "The Storm Book",
    "Cloudy With a Chance of Meatballs",
];

/// Topic keywords and the titles they pull in ahead of the general bank.
struct BookTheme {
    keywords: &'static [&'static str],
    titles: &'static [&'static str],
}

const THEMES: &[BookTheme] = &[
    BookTheme {
        keywords: &["rain", "cloud", "weather", "storm"],
        titles: &["The Storm Book", "Cloudy With a Chance of Meatballs"],
    },
    BookTheme {
        keywords: &["seed", "plant", "garden", "corn"],
        titles: &["From Seed to Plant", "Planting a Rainbow"],
    },
    BookTheme {
        keywords: &["color", "art", "paint"],
        titles: &["Mouse Paint", "The Dot"],
    },
    BookTheme {
        keywords: &["animal", "bear", "turtle"],
        titles: &["Brown Bear, Brown Bear, What Do You See?", "Bear Snores On"],
    },
];

/// Titles whose theme keywords occur anywhere in the normalized topic.
pub fn themed_titles(topic: &str) -> Vec<&'static str> {
    let normalized = normalize_topic(topic);
    THEMES
        .iter()
        .filter(|theme| theme.keywords.iter().any(|k| normalized.contains(k)))
        .flat_map(|theme| theme.titles.iter().copied())
        .collect()
}

/// Five book titles for `topic`: themed titles plus the general bank,
/// deduplicated and shuffled, cycling if the pool were ever shorter.
pub fn auto_pick_books_with_rng<R: Rng + ?Sized>(topic: &str, rng: &mut R) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut pool: Vec<&str> = themed_titles(topic)
        .into_iter()
        .chain(BOOK_BANK.iter().copied())
        .filter(|title| seen.insert(*title))
        .collect();
    pool.shuffle(rng);

    (0..BOOK_PICKS).map(|i| pool[i % pool.len()].to_string()).collect()
}

pub fn auto_pick_books(topic: &str) -> Vec<String> {
    auto_pick_books_with_rng(topic, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_themes_follow_topic_keywords() {
        assert_eq!(themed_titles("Rainy days"), vec!["The Storm Book", "Cloudy With a Chance of Meatballs"]);
        assert_eq!(themed_titles("Corn & Bears").len(), 4);
        assert!(themed_titles("trucks").is_empty());
    }

    #[test]
    fn test_picks_five_distinct_titles() {
        let mut rng = StdRng::seed_from_u64(9);
        let picks = auto_pick_books_with_rng("weather", &mut rng);
        assert_eq!(picks.len(), BOOK_PICKS);
        assert_eq!(picks.iter().collect::<HashSet<_>>().len(), BOOK_PICKS);
        assert!(picks.iter().all(|p| BOOK_BANK.contains(&p.as_str())));
    }

    #[test]
    fn test_picks_vary_between_calls() {
        let first = auto_pick_books("trucks");
        let varied = (0..20).any(|_| auto_pick_books("trucks") != first);
        assert!(varied);
    }
}
