//! Handler for `storybook generate`.

use std::path::PathBuf;
use storybook::{
    Credentials, FileSystemStorage, GeminiClient, StorybookAssembler, StorybookConfig,
    StorybookResult,
};
use tracing::{info, instrument};

/// Run the full pipeline into `output_dir`, or the configured directory.
#[instrument(skip(config, credentials))]
pub async fn run_generate(
    config: &StorybookConfig,
    credentials: &Credentials,
    output_dir: Option<PathBuf>,
) -> StorybookResult<()> {
    let client = GeminiClient::new(credentials.api_key())?
        .with_base_url(config.base_url.as_str())?
        .with_model(config.story_model.as_str());

    let output_dir = output_dir.unwrap_or_else(|| config.output_dir.clone());
    let storage = FileSystemStorage::new(&output_dir)?;
    info!(output_dir = %output_dir.display(), "Generating storybook");

    let storybook = StorybookAssembler::new(client, storage, config.assembler_settings()?)
        .run()
        .await?;

    info!(pages = storybook.pages.len(), "Done");
    Ok(())
}
