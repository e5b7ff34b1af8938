// Live API smoke tests.
//
// These hit the real provider endpoints and are gated behind the `api`
// feature: `cargo test -p algotale_providers --features api`. Each test
// needs the matching credential in the environment or a .env file.

use algotale_core::InvokeOptions;
use algotale_interface::StoryDriver;
use algotale_providers::{GroqDriver, HuggingFaceDriver};

const PROMPT: &str = "Tell a short educational story about stacks in computer science. \
Use a kitchen full of plates as the analogy and end with a complexity takeaway.";

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)] // Requires GROQ_API_KEY
async fn groq_generates_an_acceptable_story() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let key = std::env::var("GROQ_API_KEY")?;
    let driver = GroqDriver::new(key);

    let generated = driver.invoke(PROMPT, &InvokeOptions::default()).await?;

    assert!(generated.text.chars().count() >= 100);
    assert!(generated.total_tokens.is_some());
    Ok(())
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)] // Requires HF_API_TOKEN
async fn huggingface_generates_an_acceptable_story() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let token = std::env::var("HF_API_TOKEN")?;
    let driver = HuggingFaceDriver::new(token);

    let generated = driver.invoke(PROMPT, &InvokeOptions::default()).await?;

    assert!(generated.text.chars().count() >= 100);
    Ok(())
}

#[tokio::test]
async fn empty_credential_fails_fast_without_network() {
    let driver = GroqDriver::new("");

    let err = driver
        .invoke(PROMPT, &InvokeOptions::default())
        .await
        .expect_err("empty key must not reach the network");

    assert!(matches!(
        err.kind,
        algotale_error::ProviderErrorKind::NotConfigured(_)
    ));
}
