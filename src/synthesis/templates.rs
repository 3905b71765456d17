//! Fixed pedagogical text, interpolated with the plan topic and vocabulary.

use crate::types::plan::{CenterActivity, CenterKind, Focus, ReadAloud};
use crate::types::vocabulary::VocabularyBundle;

/// Trimmed topic, or `fallback` when it is blank.
fn topic_or<'a>(topic: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = topic.trim();
    if trimmed.is_empty() {
        fallback
    } else {
        trimmed
    }
}

pub fn make_i_can_statements(topic: &str) -> Vec<String> {
    let t = topic_or(topic, "our topic");
    vec![
        format!("I can talk about {} using new words.", t),
        format!("I can ask and answer questions about {}.", t),
        format!("I can notice details and describe what I see about {}.", t),
        format!("I can count, sort, or compare items related to {}.", t),
        format!("I can work with friends and show respect during {} activities.", t),
    ]
}

pub fn make_focus(topic: &str) -> Focus {
    let t = topic_or(topic, "the theme");
    Focus {
        big_idea: format!(
            "{} helps us learn through stories, hands-on exploration, and community connection.",
            t
        ),
        objectives: vec![
            format!("Language & Literacy: Use new words and answer questions about {}.", t),
            format!("Math/Thinking: Count, sort, and compare objects connected to {}.", t),
            format!("SEL/Approaches: Cooperate, take turns, and stay engaged during {} activities.", t),
        ],
        teaching_strategies: vec![
            "Model and think-aloud while demonstrating tasks.".to_string(),
            "Ask open-ended questions and follow children’s ideas.".to_string(),
            "Use visuals, gestures, and repetition; scaffold for different learners.".to_string(),
            "Embed movement, songs, and hands-on materials.".to_string(),
        ],
    }
}

/// One center row. Every center lists the whole bundle as its vocabulary.
pub fn center_template(kind: CenterKind, topic: &str, vocab: &VocabularyBundle) -> CenterActivity {
    let t = topic_or(topic, "the theme");
    let (objective_indicator, items_setup, teacher_support, books) = match kind {
        CenterKind::Blocks => (
            format!("Build structures related to {}; use spatial words (above, next to) and count blocks.", t),
            format!("Blocks, people/animal figures, small natural items (rocks, sticks), photos of {}.", t),
            "Invite children to plan: “What will you build?” Encourage counting, measuring, and teamwork.".to_string(),
            format!("Nonfiction and picture books about {}.", t),
        ),
        CenterKind::Art => (
            format!("Create art showing {} using shapes, colors, and textures.", t),
            format!("Paper, crayons/markers, paint, collage materials; optional natural materials connected to {}.", t),
            "Name tools and steps. Ask: “Tell me about your picture.” Add labels using new vocab.".to_string(),
            format!("Art books or stories connected to {}.", t),
        ),
        CenterKind::MathCenter => (
            format!("Count, sort, and make patterns with items related to {}.", t),
            format!("Counters, sorting trays, number cards, shape blocks; themed items or pictures for {}.", t),
            "Prompt comparisons: more/less, same/different. Encourage pattern talk and number words.".to_string(),
            format!("Counting/pattern books tied to {}.", t),
        ),
        CenterKind::DramaticPlay => (
            format!("Use pretend play to act out {} scenarios; practice conversation and roles.", t),
            format!("Props/costumes for a {} setting (e.g., market, weather station, community helpers).", t),
            "Model respectful language. Add simple scripts and labels; encourage turn-taking.".to_string(),
            "Stories that match the pretend-play theme.".to_string(),
        ),
        CenterKind::ClassLibrary => (
            format!("Enjoy books about {}; retell using pictures and new vocabulary.", t),
            format!("A basket of books about {}, puppets, story props, picture cards.", t),
            "Sit with children and ask open-ended questions; encourage pointing and retelling.".to_string(),
            "Daily read-aloud and related titles.".to_string(),
        ),
        CenterKind::ScienceSensory => (
            format!("Explore {} with senses; observe, predict, and describe changes.", t),
            format!("Sensory bin or experiment materials related to {}; tools (cups, scoops, magnifiers).", t),
            "Use “I wonder…” questions. Encourage children to explain what they notice and why.".to_string(),
            format!("Simple nonfiction about how {} works.", t),
        ),
        CenterKind::Manipulative => (
            format!("Build fine-motor skills with puzzles, matching, and building related to {}.", t),
            format!("Puzzles, lacing cards, matching games; themed picture cards for {}.", t),
            "Offer just-right help; celebrate effort; encourage children to try new ways.".to_string(),
            format!("Short picture books or matching cards with {} images.", t),
        ),
        CenterKind::Writing => (
            format!("Draw/write about {}; practice name writing and labeling pictures.", t),
            "Paper, pencils, name cards, letter stamps; themed word/picture cards.".to_string(),
            "Encourage scribble writing and dictation; help label using English + Tewa words.".to_string(),
            format!("Alphabet and picture dictionaries connected to {}.", t),
        ),
        CenterKind::Other => (
            format!("Connect {} to music, movement, games, or culture-based activities.", t),
            "Open materials: instruments, scarves, cultural items/photos (as appropriate).".to_string(),
            "Invite children to lead; reinforce safety and respectful handling; use new vocabulary.".to_string(),
            format!("Songs/stories connected to {}.", t),
        ),
    };

    CenterActivity {
        name: kind,
        objective_indicator,
        items_setup,
        teacher_support,
        books,
        vocabulary_words: vocab.display_words(),
    }
}

pub fn make_centers(topic: &str, vocab: &VocabularyBundle) -> Vec<CenterActivity> {
    CenterKind::ALL.iter().map(|&kind| center_template(kind, topic, vocab)).collect()
}

/// Read-aloud questions for `book_title`.
///
/// The bundle's first Tewa word is worked into a "before" question and its
/// first Tewa phrase into an "after" question. A bundle missing either
/// (empty bank) gets the plain question instead.
pub fn make_read_aloud(book_title: &str, topic: &str, vocab: &VocabularyBundle) -> ReadAloud {
    let t = topic_or(topic, "the theme");
    let tewa_word = vocab.tewa_words.first();
    let tewa_phrase = vocab.tewa_phrases.first();

    let mut vocab_to_use_in_questions = Vec::new();
    let noticing = match tewa_word {
        Some(word) => {
            vocab_to_use_in_questions.push(word.display());
            format!(
                "Have you seen {} before? Can you tell us what you notice? (Use: {} = {})",
                t, word.tewa, word.english
            )
        }
        None => format!("Have you seen {} before? Can you tell us what you notice?", t),
    };
    let saying = match tewa_phrase {
        Some(phrase) => {
            vocab_to_use_in_questions.push(phrase.display());
            format!(
                "Can we say \"{}\" ({}) like the character or like we do in class? When would we use it?",
                phrase.tewa, phrase.english
            )
        }
        None => "What words could we use to talk about the story in class?".to_string(),
    };

    ReadAloud {
        day_name: None,
        book_title: book_title.to_string(),
        author: String::new(),
        vocab_to_use_in_questions,
        before_questions: vec![
            format!("Look at the cover of \"{}\". What do you think the story will be about?", book_title),
            noticing,
        ],
        during_questions: vec![
            "What is happening right now in the story? What clues do you see in the pictures?".to_string(),
            "What do you think will happen next? Why?".to_string(),
        ],
        after_questions: vec!["How did the character feel? What helped them?".to_string(), saying],
        extension_activity: format!(
            "Draw your favorite part of \"{}\" and label your picture with 1 English word + 1 Tewa word.",
            book_title
        ),
    }
}
