//! The closed set of supported DSA subject areas.

use serde::{Deserialize, Serialize};

/// Supported data-structure and algorithm topics.
///
/// This is a closed set. Anything outside it resolves to [`Topic::Arrays`]
/// through [`Topic::parse_lossy`] rather than erroring, so a stale or
/// malformed topic id from a caller can never abort a generation.
///
/// # Examples
///
/// ```
/// use algotale_core::Topic;
///
/// assert_eq!(Topic::parse_lossy("linked-lists"), Topic::LinkedLists);
/// assert_eq!(Topic::parse_lossy("quantum-heaps"), Topic::Arrays);
/// assert_eq!(format!("{}", Topic::LinkedLists), "linked-lists");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Topic {
    /// Contiguous indexed storage
    #[default]
    Arrays,
    /// LIFO stack operations
    Stacks,
    /// FIFO queue operations
    Queues,
    /// Pointer-chained node sequences
    LinkedLists,
    /// Comparison and divide-and-conquer sorts
    Sorting,
    /// Binary trees and search trees
    Trees,
    /// Vertices, edges, and traversals
    Graphs,
    /// Self-referential problem decomposition
    Recursion,
}

impl Topic {
    /// Parse a topic id, mapping anything unrecognized to [`Topic::Arrays`].
    pub fn parse_lossy(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    /// Human-readable title used in prompts and display.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Arrays => "Arrays",
            Self::Stacks => "Stacks",
            Self::Queues => "Queues",
            Self::LinkedLists => "Linked Lists",
            Self::Sorting => "Sorting",
            Self::Trees => "Trees",
            Self::Graphs => "Graphs",
            Self::Recursion => "Recursion",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn unrecognized_topic_falls_back_to_arrays() {
        assert_eq!(Topic::parse_lossy("quantum-heaps"), Topic::Arrays);
        assert_eq!(Topic::parse_lossy(""), Topic::Arrays);
        assert_eq!(Topic::parse_lossy("ARRAYS"), Topic::Arrays);
    }

    #[test]
    fn kebab_case_round_trip() {
        for topic in Topic::iter() {
            assert_eq!(Topic::parse_lossy(&topic.to_string()), topic);
        }
    }

    #[test]
    fn serde_form_matches_display() {
        let json = serde_json::to_string(&Topic::LinkedLists).unwrap();
        assert_eq!(json, "\"linked-lists\"");
    }
}
