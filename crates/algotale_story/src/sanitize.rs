//! Response sanitization.
//!
//! Instruct-tuned models sometimes echo the prompt, leak their `[INST]`
//! delimiters, or pad the output with blank lines. `clean_response` strips
//! all of that deterministically; applying it twice changes nothing.

use regex::Regex;
use std::sync::OnceLock;

fn instruction_block() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)\[INST\].*?\[/INST\]").expect("static pattern compiles"))
}

fn leading_label() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(Story|Answer|Response):\s*").expect("static pattern compiles")
    })
}

fn excess_breaks() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n{3,}").expect("static pattern compiles"))
}

/// Clean raw provider output.
///
/// - Removes the echoed prompt if the provider returned it
/// - Strips `[INST]...[/INST]` instruction blocks
/// - Drops leading `Story:`/`Answer:`/`Response:` labels
/// - Collapses 3+ consecutive line breaks to a paragraph boundary
/// - Trims paragraphs and drops empty ones
///
/// Pure and idempotent: `clean_response(&clean_response(x, p), p)` equals
/// `clean_response(x, p)`.
///
/// # Examples
///
/// ```
/// use algotale_story::clean_response;
///
/// let cleaned = clean_response("Story:  Once upon a time\n\n\n\nThe end", "");
/// assert_eq!(cleaned, "Once upon a time\n\nThe end");
/// ```
pub fn clean_response(raw: &str, prompt: &str) -> String {
    let text = if prompt.is_empty() {
        raw.to_string()
    } else {
        raw.replace(prompt, "")
    };

    let text = instruction_block().replace_all(&text, "");
    let mut text = text.trim().to_string();

    // Providers occasionally stack labels ("Response: Story: ..."), so
    // strip until none remain to keep the function idempotent.
    while let Some(stripped) = strip_leading_label(&text) {
        text = stripped;
    }

    let text = excess_breaks().replace_all(&text, "\n\n");

    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn strip_leading_label(text: &str) -> Option<String> {
    let re = leading_label();
    re.is_match(text).then(|| re.replace(text, "").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROMPT: &str = "[INST] Write an educational story about Stacks now: [/INST]";

    #[test]
    fn removes_echoed_prompt() {
        let raw = format!("{}\nA tale of plates stacked high in a busy kitchen.", PROMPT);
        let cleaned = clean_response(&raw, PROMPT);
        assert_eq!(cleaned, "A tale of plates stacked high in a busy kitchen.");
    }

    #[test]
    fn strips_instruction_blocks() {
        let raw = "[INST] hidden instructions [/INST]The real story.";
        assert_eq!(clean_response(raw, ""), "The real story.");
    }

    #[test]
    fn strips_leading_labels_case_insensitively() {
        assert_eq!(clean_response("STORY: The tale", ""), "The tale");
        assert_eq!(clean_response("Response: Story: The tale", ""), "The tale");
    }

    #[test]
    fn collapses_excess_line_breaks() {
        let raw = "First paragraph.\n\n\n\n\nSecond paragraph.";
        assert_eq!(
            clean_response(raw, ""),
            "First paragraph.\n\nSecond paragraph."
        );
    }

    #[test]
    fn drops_empty_paragraphs() {
        let raw = "First.\n\n   \n\nSecond.";
        assert_eq!(clean_response(raw, ""), "First.\n\nSecond.");
    }

    #[test]
    fn idempotent_on_representative_inputs() {
        let samples = [
            format!("{}\n\nStory: A hero learns stacks.\n\n\n\nThe end.", PROMPT),
            "Answer:  plain text with no artifacts".to_string(),
            "Already clean.\n\nTwo paragraphs.".to_string(),
            String::new(),
        ];
        for raw in &samples {
            let once = clean_response(raw, PROMPT);
            let twice = clean_response(&once, PROMPT);
            assert_eq!(once, twice, "not idempotent for {:?}", raw);
        }
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(clean_response("", PROMPT), "");
    }
}
