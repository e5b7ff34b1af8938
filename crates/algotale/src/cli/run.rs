//! Story generation command handlers.

use algotale::{
    Level, ProviderCredentials, StoryPreferences, Theme, Topic, orchestrator_from_credentials,
};
use strum::IntoEnumIterator;

/// Generate and print a story.
///
/// Never fails: exhausted or unconfigured providers degrade to the bundled
/// offline content with an advisory note on stderr.
pub async fn run_generate(topic: &str, level: &str, theme: &str, seed: Option<f64>, code: bool) {
    let credentials = ProviderCredentials::from_env();
    let orchestrator = orchestrator_from_credentials(&credentials);

    let topic = Topic::parse_lossy(topic);
    let preferences = StoryPreferences::new(Level::parse_lossy(level), Theme::parse_lossy(theme));

    let result = match seed {
        Some(seed) => {
            orchestrator
                .generate_seeded(topic, preferences, seed)
                .await
        }
        None => orchestrator.generate(topic, preferences).await,
    };

    if result.degraded() {
        eprintln!("note: no provider produced a story; showing offline content");
    }

    println!(
        "# {} ({}, {})\n",
        topic.title(),
        preferences.level,
        preferences.theme
    );
    println!("{}", result.story);

    if code {
        println!("\n---\n\n{}", result.code);
    }

    println!("\n[generated by {} / {}]", result.provenance, result.model);
}

/// Print the supported topic set.
pub fn run_topics() {
    for topic in Topic::iter() {
        println!("{:<14} {}", topic.to_string(), topic.title());
    }
}
