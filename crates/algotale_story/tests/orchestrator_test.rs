// Orchestrator behavior against scripted mock drivers.
//
// These tests validate the provider priority loop without network access:
// ordering, skip-on-unconfigured, the acceptance threshold, timeout
// handling, and the fallback guarantee.

mod test_utils;

use algotale_core::{InvokeOptions, Level, Provenance, StoryPreferences, Theme, Topic};
use algotale_error::ProviderErrorKind;
use algotale_story::{StoryOrchestrator, fallback};
use std::time::Duration;
use test_utils::{MockDriver, MockResponse, long_story};

#[tokio::test]
async fn provider_recovering_on_regenerate_is_retried_from_the_top() {
    // Each generate call re-tries the full priority list; no circuit
    // breaking carries over from a failed call.
    let flaky = MockDriver::with_sequence(
        "flaky",
        vec![
            MockResponse::Error(ProviderErrorKind::Transport("reset".to_string())),
            MockResponse::Success(long_story()),
        ],
    );

    let orchestrator =
        StoryOrchestrator::new().register(Box::new(flaky.clone()), InvokeOptions::default());

    let first = orchestrator.generate(Topic::Stacks, prefs()).await;
    let second = orchestrator.generate(Topic::Stacks, prefs()).await;

    assert_eq!(first.provenance, Provenance::Fallback);
    assert_eq!(second.provenance, Provenance::Provider("flaky".to_string()));
    assert_eq!(flaky.call_count(), 2);
}

fn prefs() -> StoryPreferences {
    StoryPreferences::new(Level::Beginner, Theme::Fantasy)
}

#[tokio::test]
async fn zero_providers_serves_fallback() {
    let orchestrator = StoryOrchestrator::new();

    let result = orchestrator.generate(Topic::Stacks, prefs()).await;

    assert_eq!(result.provenance, Provenance::Fallback);
    assert_eq!(result.story, fallback::entry(Topic::Stacks).story());
    assert_eq!(result.code, fallback::entry(Topic::Stacks).code());
    assert_eq!(result.model, "built-in");
    assert!(result.degraded());
}

#[tokio::test]
async fn first_success_wins_and_later_providers_are_untouched() {
    let p1 = MockDriver::failing(
        "p1",
        ProviderErrorKind::Transport("connection refused".to_string()),
    );
    let p2 = MockDriver::succeeding("p2", long_story());
    let p3 = MockDriver::succeeding("p3", long_story());

    let orchestrator = StoryOrchestrator::new()
        .register(Box::new(p1.clone()), InvokeOptions::default())
        .register(Box::new(p2.clone()), InvokeOptions::default())
        .register(Box::new(p3.clone()), InvokeOptions::default());

    let result = orchestrator.generate(Topic::Trees, prefs()).await;

    assert_eq!(result.provenance, Provenance::Provider("p2".to_string()));
    assert!(!result.degraded());
    assert_eq!(p1.call_count(), 1);
    assert_eq!(p2.call_count(), 1);
    assert_eq!(p3.call_count(), 0);
}

#[tokio::test]
async fn unconfigured_provider_is_skipped() {
    let unconfigured = MockDriver::failing(
        "unconfigured",
        ProviderErrorKind::NotConfigured("unconfigured".to_string()),
    );
    let configured = MockDriver::succeeding("configured", long_story());

    let orchestrator = StoryOrchestrator::new()
        .register(Box::new(unconfigured.clone()), InvokeOptions::default())
        .register(Box::new(configured.clone()), InvokeOptions::default());

    let result = orchestrator.generate(Topic::Queues, prefs()).await;

    assert_eq!(
        result.provenance,
        Provenance::Provider("configured".to_string())
    );
    assert_eq!(configured.call_count(), 1);
}

#[tokio::test]
async fn short_output_is_rejected_and_loop_advances() {
    let too_short = MockDriver::succeeding("short", "x".repeat(80));
    let long_enough = MockDriver::succeeding("long", "y".repeat(150));

    let orchestrator = StoryOrchestrator::new()
        .register(Box::new(too_short.clone()), InvokeOptions::default())
        .register(Box::new(long_enough.clone()), InvokeOptions::default());

    let result = orchestrator.generate(Topic::Sorting, prefs()).await;

    assert_eq!(result.provenance, Provenance::Provider("long".to_string()));
    assert_eq!(result.story.chars().count(), 150);
    assert_eq!(too_short.call_count(), 1);
}

#[tokio::test]
async fn timeout_is_just_another_failure() {
    let timing_out = MockDriver::failing(
        "slow",
        ProviderErrorKind::Timeout(Duration::from_secs(25)),
    );
    let healthy = MockDriver::succeeding("healthy", long_story());

    let orchestrator = StoryOrchestrator::new()
        .register(Box::new(timing_out.clone()), InvokeOptions::default())
        .register(Box::new(healthy.clone()), InvokeOptions::default());

    let result = orchestrator.generate(Topic::Graphs, prefs()).await;

    assert_eq!(
        result.provenance,
        Provenance::Provider("healthy".to_string())
    );
    assert_eq!(timing_out.call_count(), 1);
}

#[tokio::test]
async fn all_providers_failing_serves_fallback() {
    let p1 = MockDriver::failing("p1", ProviderErrorKind::ContentRejected("SAFETY".to_string()));
    let p2 = MockDriver::failing(
        "p2",
        ProviderErrorKind::Api {
            status: 503,
            message: "overloaded".to_string(),
        },
    );

    let orchestrator = StoryOrchestrator::new()
        .register(Box::new(p1.clone()), InvokeOptions::default())
        .register(Box::new(p2.clone()), InvokeOptions::default());

    let result = orchestrator.generate(Topic::Recursion, prefs()).await;

    assert_eq!(result.provenance, Provenance::Fallback);
    assert_eq!(result.story, fallback::entry(Topic::Recursion).story());
    assert_eq!(p1.call_count(), 1);
    assert_eq!(p2.call_count(), 1);
}

#[tokio::test]
async fn winning_output_is_sanitized() {
    let echoing = MockDriver::succeeding(
        "echoing",
        format!("Story: {}\n\n\n\n\nThe end of the tale.", long_story()),
    );

    let orchestrator =
        StoryOrchestrator::new().register(Box::new(echoing), InvokeOptions::default());

    let result = orchestrator.generate(Topic::Arrays, prefs()).await;

    assert!(!result.story.starts_with("Story:"));
    assert!(!result.story.contains("\n\n\n"));
    assert!(result.story.ends_with("The end of the tale."));
}

#[tokio::test]
async fn seeded_generation_is_reproducible_per_provider() {
    let driver = MockDriver::succeeding("stable", long_story());
    let orchestrator =
        StoryOrchestrator::new().register(Box::new(driver), InvokeOptions::default());

    let a = orchestrator
        .generate_seeded(Topic::Stacks, prefs(), 0.1234)
        .await;
    let b = orchestrator
        .generate_seeded(Topic::Stacks, prefs(), 0.1234)
        .await;

    assert_eq!(a.story, b.story);
    assert_eq!(a.provenance, b.provenance);
}

#[tokio::test]
async fn unrecognized_topic_string_behaves_as_arrays() {
    let orchestrator = StoryOrchestrator::new();

    let topic = Topic::parse_lossy("quantum-heaps");
    let result = orchestrator.generate(topic, prefs()).await;

    assert_eq!(result.topic, Topic::Arrays);
    assert_eq!(result.story, fallback::entry(Topic::Arrays).story());
}

#[tokio::test]
async fn custom_threshold_is_honored() {
    let driver = MockDriver::succeeding("short", "z".repeat(60));

    let strict = StoryOrchestrator::new()
        .with_min_story_chars(100)
        .register(Box::new(driver.clone()), InvokeOptions::default());
    let lenient = StoryOrchestrator::new()
        .with_min_story_chars(50)
        .register(Box::new(driver.clone()), InvokeOptions::default());

    let rejected = strict.generate(Topic::Trees, prefs()).await;
    let accepted = lenient.generate(Topic::Trees, prefs()).await;

    assert_eq!(rejected.provenance, Provenance::Fallback);
    assert_eq!(accepted.provenance, Provenance::Provider("short".to_string()));
}

#[tokio::test]
async fn concurrent_generations_do_not_interfere() {
    let driver = MockDriver::succeeding("shared", long_story());
    let orchestrator = std::sync::Arc::new(
        StoryOrchestrator::new().register(Box::new(driver.clone()), InvokeOptions::default()),
    );

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let orchestrator = orchestrator.clone();
            tokio::spawn(async move { orchestrator.generate(Topic::Graphs, prefs()).await })
        })
        .collect();

    for handle in handles {
        let result = handle.await.expect("task panicked");
        assert_eq!(
            result.provenance,
            Provenance::Provider("shared".to_string())
        );
    }
    assert_eq!(driver.call_count(), 8);
}
