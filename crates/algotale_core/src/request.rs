//! Generation request types.

use crate::{StoryPreferences, Topic};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One story-generation attempt.
///
/// Constructed fresh for every "generate" action and never reused, mutated,
/// or replayed. The `seed` feeds the prompt composer's uniqueness
/// instruction so repeated generations of the same topic produce different
/// stories.
///
/// # Examples
///
/// ```
/// use algotale_core::{StoryPreferences, StoryRequest, Topic};
///
/// let request = StoryRequest::new(Topic::Stacks, StoryPreferences::default(), 0.42);
/// assert_eq!(request.topic, Topic::Stacks);
/// assert_eq!(request.seed, 0.42);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryRequest {
    /// The topic to teach
    pub topic: Topic,
    /// Level and theme preferences
    pub preferences: StoryPreferences,
    /// Uniqueness seed in `[0, 1)` embedded into the prompt
    pub seed: f64,
    /// When this request was constructed
    pub requested_at: DateTime<Utc>,
}

impl StoryRequest {
    /// Create a request stamped with the current time.
    pub fn new(topic: Topic, preferences: StoryPreferences, seed: f64) -> Self {
        Self {
            topic,
            preferences,
            seed,
            requested_at: Utc::now(),
        }
    }
}
