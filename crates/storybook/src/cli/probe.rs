//! Handler for `storybook probe`.

use std::path::Path;
use storybook::{
    Credentials, GeminiClient, PROBE_PROMPT, ResponseProbe, StorybookConfig, StorybookResult,
};
use tracing::instrument;

/// Probe one image request and print what came back.
#[instrument(skip(config, credentials, prompt))]
pub async fn run_probe(
    config: &StorybookConfig,
    credentials: &Credentials,
    prompt: Option<&str>,
    model: Option<&str>,
    save: &Path,
) -> StorybookResult<()> {
    let model = model.unwrap_or(config.image_model.as_str());
    let client = GeminiClient::new(credentials.api_key())?
        .with_base_url(config.base_url.as_str())?
        .with_model(model);

    println!("Testing image generation with {}...", model);
    let report = ResponseProbe::new(client, model)
        .probe(prompt.unwrap_or(PROBE_PROMPT))
        .await?;
    println!("{}", report);

    match report.save_first_image(save).await? {
        Some(path) => println!("\nSaved image to {}", path.display()),
        None => println!("\nResponse contained no image data"),
    }
    Ok(())
}
