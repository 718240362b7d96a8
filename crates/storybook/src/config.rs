//! Runtime configuration.
//!
//! Settings are layered with the `config` crate:
//! 1. Bundled defaults (include_str! from storybook.toml)
//! 2. User config in home directory (~/.config/storybook/storybook.toml)
//! 3. User config in current directory (./storybook.toml)
//!
//! The API key is kept out of the files and read once from the environment.

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use storybook_error::{ConfigError, GeminiError, GeminiErrorKind, StorybookError, StorybookResult};
use storybook_generation::AssemblerSettings;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../storybook.toml");

/// Environment variable holding the Gemini API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Everything a run needs apart from the credential.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StorybookConfig {
    /// Directory receiving the images and manifest
    pub output_dir: PathBuf,
    /// Manifest filename inside `output_dir`
    pub manifest_file: String,
    /// Manifest title
    pub title: String,
    /// Manifest description
    pub description: String,
    /// Model for the story call
    pub story_model: String,
    /// Model for illustration calls
    pub image_model: String,
    /// Pause after every page, in milliseconds
    pub page_delay_ms: u64,
    /// Treat a story outside 5-6 sentences as fatal
    #[serde(default)]
    pub strict_sentence_count: bool,
    /// Gemini REST root
    pub base_url: String,
}

impl StorybookConfig {
    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped if not found.
    #[instrument]
    pub fn load() -> StorybookResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/storybook/storybook.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("storybook").required(false));

        builder
            .build()
            .map_err(|e| {
                StorybookError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                StorybookError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load a specific file layered over the bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or does not parse.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> StorybookResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                StorybookError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                StorybookError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Bundled defaults only.
    pub fn bundled() -> StorybookResult<Self> {
        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| {
                StorybookError::from(ConfigError::new(format!(
                    "Bundled configuration is invalid: {}",
                    e
                )))
            })
    }

    /// Pause after every page.
    pub fn page_delay(&self) -> Duration {
        Duration::from_millis(self.page_delay_ms)
    }

    /// Settings for the assembler.
    pub fn assembler_settings(&self) -> StorybookResult<AssemblerSettings> {
        AssemblerSettings::builder()
            .title(self.title.as_str())
            .description(self.description.as_str())
            .story_model(self.story_model.as_str())
            .image_model(self.image_model.as_str())
            .page_delay(self.page_delay())
            .strict_sentence_count(self.strict_sentence_count)
            .manifest_file(self.manifest_file.as_str())
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid assembler settings: {}", e)).into())
    }
}

/// Gemini credential, resolved once at startup.
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
}

impl Credentials {
    /// Wrap an API key.
    ///
    /// # Errors
    ///
    /// `MissingApiKey` if the key is blank.
    pub fn new(api_key: impl Into<String>) -> StorybookResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GeminiError::new(GeminiErrorKind::MissingApiKey).into());
        }
        Ok(Self { api_key })
    }

    /// Read the key from `GEMINI_API_KEY`.
    ///
    /// # Errors
    ///
    /// `MissingApiKey` if the variable is unset, not unicode, or blank.
    pub fn from_env() -> StorybookResult<Self> {
        let api_key = std::env::var(API_KEY_VAR)
            .map_err(|_| StorybookError::from(GeminiError::new(GeminiErrorKind::MissingApiKey)))?;
        Self::new(api_key)
    }

    /// The raw key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}
