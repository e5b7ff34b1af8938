//! Bundled offline story and code content.
//!
//! The fallback library covers every [`Topic`] in the closed enumeration,
//! so serving offline content is total: no topic can reach the orchestrator
//! without a matching entry here.

mod stories;
mod templates;

use algotale_core::Topic;

/// Pre-authored content for one topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackEntry {
    story: &'static str,
    code: &'static str,
}

impl FallbackEntry {
    /// The pre-authored story text.
    pub fn story(&self) -> &'static str {
        self.story
    }

    /// The matching code listing.
    pub fn code(&self) -> &'static str {
        self.code
    }
}

/// Look up the bundled entry for a topic.
///
/// Total over the closed topic set; callers holding an unrecognized topic
/// string reach the `Arrays` entry through [`Topic::parse_lossy`].
pub fn entry(topic: Topic) -> FallbackEntry {
    match topic {
        Topic::Arrays => FallbackEntry {
            story: stories::ARRAYS,
            code: templates::ARRAYS,
        },
        Topic::Stacks => FallbackEntry {
            story: stories::STACKS,
            code: templates::STACKS,
        },
        Topic::Queues => FallbackEntry {
            story: stories::QUEUES,
            code: templates::QUEUES,
        },
        Topic::LinkedLists => FallbackEntry {
            story: stories::LINKED_LISTS,
            code: templates::LINKED_LISTS,
        },
        Topic::Sorting => FallbackEntry {
            story: stories::SORTING,
            code: templates::SORTING,
        },
        Topic::Trees => FallbackEntry {
            story: stories::TREES,
            code: templates::TREES,
        },
        Topic::Graphs => FallbackEntry {
            story: stories::GRAPHS,
            code: templates::GRAPHS,
        },
        Topic::Recursion => FallbackEntry {
            story: stories::RECURSION,
            code: templates::RECURSION,
        },
    }
}

/// The illustrative code listing for a topic.
///
/// Used for every result, provider-generated or fallback.
pub fn code_template(topic: Topic) -> &'static str {
    entry(topic).code
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_topic_has_nonempty_story_and_code() {
        for topic in Topic::iter() {
            let entry = entry(topic);
            assert!(!entry.story().is_empty(), "missing story for {}", topic);
            assert!(!entry.code().is_empty(), "missing code for {}", topic);
        }
    }

    #[test]
    fn stories_clear_the_acceptance_threshold() {
        for topic in Topic::iter() {
            assert!(
                entry(topic).story().chars().count() > 100,
                "fallback story for {} is too short to ever be acceptable",
                topic
            );
        }
    }

    #[test]
    fn unrecognized_topic_reaches_the_arrays_entry() {
        let topic = Topic::parse_lossy("quantum-heaps");
        assert_eq!(entry(topic), entry(Topic::Arrays));
    }
}
