//! Prompt composition for story generation.
//!
//! A pure function of `(topic, level, theme, seed)`: the same inputs always
//! produce the same instruction text, and the seed is embedded as an
//! explicit uniqueness demand so regenerations diverge.

use algotale_core::{Level, Theme, Topic};

/// Build the provider-agnostic instruction text for one story.
///
/// The `[INST]` wrapper is understood by the instruct-tuned models behind
/// the HuggingFace and Gradio backends and harmless to the chat-style ones,
/// which receive it as an ordinary user message.
///
/// # Examples
///
/// ```
/// use algotale_core::{Level, Theme, Topic};
/// use algotale_story::compose_prompt;
///
/// let prompt = compose_prompt(Topic::LinkedLists, Level::Beginner, Theme::Fantasy, 0.42);
/// assert!(prompt.contains("Linked Lists"));
/// assert!(prompt.contains("Story #420"));
/// ```
pub fn compose_prompt(topic: Topic, level: Level, theme: Theme, seed: f64) -> String {
    let title = topic.title();
    let story_number = (seed.abs().fract() * 1000.0) as u32;
    let framing = theme_framing(title, theme);
    let instruction = level_instruction(title, level);

    format!(
        "[INST] You are an expert computer science educator who creates engaging educational stories.\n\
         \n\
         IMPORTANT: Create a COMPLETELY NEW and UNIQUE story (Story #{story_number}, Seed: {seed:.4}). \
         DO NOT repeat previous stories. Use different examples, characters, and scenarios.\n\
         \n\
         {framing}\n\
         \n\
         {instruction}\n\
         \n\
         Requirements:\n\
         - Length: 250-350 words\n\
         - Include clear analogies that explain {title}\n\
         - Make it engaging and memorable\n\
         - End with a key takeaway about time/space complexity or use cases\n\
         - Use storytelling elements (characters, conflict, resolution)\n\
         \n\
         Write an educational story about {title} now: [/INST]"
    )
}

fn level_instruction(title: &str, level: Level) -> String {
    match level {
        Level::Beginner => format!(
            "Explain {title} to someone new to programming. Use simple language, \
             everyday analogies, and avoid jargon. Make it fun and easy to understand."
        ),
        Level::Advanced => format!(
            "Provide a detailed explanation of {title} including time/space complexity, \
             implementation details, real-world applications, and optimization techniques. \
             Use proper computer science terminology."
        ),
    }
}

fn theme_framing(title: &str, theme: Theme) -> String {
    match theme {
        Theme::Adventure => format!(
            "Create an exciting adventure story where the hero learns about {title} \
             to overcome challenges. Include dramatic moments and character development."
        ),
        Theme::SciFi => format!(
            "Write a science fiction story set in a futuristic world where {title} \
             is crucial technology. Use space, AI, and advanced technology concepts."
        ),
        Theme::Mystery => format!(
            "Craft a detective mystery where understanding {title} helps solve an \
             intriguing case. Include clues, puzzles, and revelations."
        ),
        Theme::Fantasy => format!(
            "Create a fantasy tale with magical elements representing {title}. \
             Use wizards, spells, magical creatures, and kingdoms to explain the concept."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_for_identical_inputs() {
        let a = compose_prompt(Topic::Stacks, Level::Beginner, Theme::Adventure, 0.1234);
        let b = compose_prompt(Topic::Stacks, Level::Beginner, Theme::Adventure, 0.1234);
        assert_eq!(a, b);
    }

    #[test]
    fn seed_changes_the_prompt() {
        let a = compose_prompt(Topic::Stacks, Level::Beginner, Theme::Adventure, 0.111);
        let b = compose_prompt(Topic::Stacks, Level::Beginner, Theme::Adventure, 0.999);
        assert_ne!(a, b);
    }

    #[test]
    fn themes_produce_distinct_framings() {
        let adventure = compose_prompt(Topic::Graphs, Level::Beginner, Theme::Adventure, 0.5);
        let mystery = compose_prompt(Topic::Graphs, Level::Beginner, Theme::Mystery, 0.5);
        assert_ne!(adventure, mystery);
        assert!(mystery.contains("detective"));
    }

    #[test]
    fn advanced_level_asks_for_complexity() {
        let prompt = compose_prompt(Topic::Sorting, Level::Advanced, Theme::SciFi, 0.5);
        assert!(prompt.contains("time/space complexity"));
        assert!(prompt.contains("Sorting"));
    }

    #[test]
    fn wrapped_in_instruction_delimiters() {
        let prompt = compose_prompt(Topic::Arrays, Level::Beginner, Theme::Fantasy, 0.5);
        assert!(prompt.starts_with("[INST]"));
        assert!(prompt.ends_with("[/INST]"));
    }
}
