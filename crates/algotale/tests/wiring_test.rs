// Provider wiring from credentials.
//
// Unconfigured providers must never be registered (and therefore never
// invoked), and generation with nothing configured must still produce a
// story.

use algotale::{
    Provenance, ProviderCredentials, StoryPreferences, Topic, generate_story,
    orchestrator_from_credentials,
};

#[test]
fn zero_credentials_registers_no_providers() {
    let orchestrator = orchestrator_from_credentials(&ProviderCredentials::default());
    assert_eq!(orchestrator.provider_count(), 0);
}

#[test]
fn full_credentials_register_all_four_providers() {
    let credentials = ProviderCredentials::default()
        .with_groq("gsk_test")
        .with_gemini("gm_test")
        .with_hf_token("hf_test");
    let orchestrator = orchestrator_from_credentials(&credentials);
    assert_eq!(orchestrator.provider_count(), 4);
}

#[test]
fn hf_token_wires_both_huggingface_and_gradio() {
    let credentials = ProviderCredentials::default().with_hf_token("hf_test");
    let orchestrator = orchestrator_from_credentials(&credentials);
    assert_eq!(orchestrator.provider_count(), 2);
}

#[test]
fn groq_only_wires_a_single_provider() {
    let credentials = ProviderCredentials::default().with_groq("gsk_test");
    let orchestrator = orchestrator_from_credentials(&credentials);
    assert_eq!(orchestrator.provider_count(), 1);
}

#[tokio::test]
async fn offline_generation_is_total() {
    let result = generate_story(
        &ProviderCredentials::default(),
        Topic::parse_lossy("stacks"),
        StoryPreferences::default(),
    )
    .await;

    assert_eq!(result.provenance, Provenance::Fallback);
    assert_eq!(result.topic, Topic::Stacks);
    assert!(!result.story.is_empty());
    assert!(!result.code.is_empty());
    assert!(result.degraded());
}
