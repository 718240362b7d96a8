//! Response-shape diagnostics for image-modality requests.
//!
//! Sends one request and describes what came back: how many candidates, how many
//! parts, and for every part whether it carries text or an inline payload, in which
//! encoding and of what size. Useful when a model starts returning images in a
//! different shape than the builder expects.

use std::fmt;
use std::path::{Path, PathBuf};
use storybook_core::{GenerateRequest, GenerateResponse, MediaSource, Modality, Output};
use storybook_error::{StorageError, StorageErrorKind, StorybookResult};
use storybook_interface::StorybookDriver;
use tracing::{info, instrument, warn};

/// How an inline payload was delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadEncoding {
    /// Raw bytes, written as-is
    Raw,
    /// Base64 text, decoded before writing
    Base64,
}

/// Description of one inline payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadReport {
    /// MIME type, if the provider sent one
    pub mime: Option<String>,
    /// Delivery encoding
    pub encoding: PayloadEncoding,
    /// Length as received
    pub encoded_len: usize,
    /// Decoded length, or the decode error
    pub decoded_len: Result<usize, String>,
}

/// Description of one response part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartReport {
    /// Position in the response
    pub index: usize,
    /// Text content, for text parts
    pub text: Option<String>,
    /// Inline payload, for image parts
    pub payload: Option<PayloadReport>,
}

/// Shape of a single response.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeReport {
    /// Candidates returned by the provider
    pub candidate_count: usize,
    /// Parts of the first candidate
    pub parts: Vec<PartReport>,
    first_image: Option<MediaSource>,
}

impl ProbeReport {
    /// Describe an already received response.
    pub fn from_response(response: &GenerateResponse) -> Self {
        let parts = response
            .outputs
            .iter()
            .enumerate()
            .map(|(index, output)| match output {
                Output::Text(text) => PartReport {
                    index,
                    text: Some(text.clone()),
                    payload: None,
                },
                Output::Image { mime, source } => PartReport {
                    index,
                    text: None,
                    payload: Some(PayloadReport {
                        mime: mime.clone(),
                        encoding: if source.is_textual() {
                            PayloadEncoding::Base64
                        } else {
                            PayloadEncoding::Raw
                        },
                        encoded_len: source.encoded_len(),
                        decoded_len: source
                            .to_bytes()
                            .map(|bytes| bytes.len())
                            .map_err(|e| e.to_string()),
                    }),
                },
            })
            .collect();

        Self {
            candidate_count: response.candidate_count,
            parts,
            first_image: response.first_image().map(|(_, source)| source.clone()),
        }
    }

    /// True when at least one part carried inline data.
    pub fn has_image(&self) -> bool {
        self.first_image.is_some()
    }

    /// Write the first inline payload to `path`.
    ///
    /// If a base64 payload fails to decode, the undecoded text is written next to
    /// `path` with a `_raw` suffix instead. Returns the path actually written, or `None`
    /// when the response held no image.
    pub async fn save_first_image(&self, path: &Path) -> StorybookResult<Option<PathBuf>> {
        let Some(source) = &self.first_image else {
            return Ok(None);
        };

        let (target, data) = match source.to_bytes() {
            Ok(bytes) => (path.to_path_buf(), bytes),
            Err(e) => {
                warn!(error = %e, "Payload did not decode, saving raw text");
                let raw = match source {
                    MediaSource::Base64(text) => text.as_bytes().to_vec(),
                    MediaSource::Binary(bytes) => bytes.clone(),
                };
                (raw_path(path), raw)
            }
        };

        tokio::fs::write(&target, &data).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!("{}: {}", target.display(), e)))
        })?;

        info!(path = %target.display(), size = data.len(), "Saved probe image");
        Ok(Some(target))
    }
}

/// `test_output.png` -> `test_output_raw.png`
fn raw_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{}_raw.{}", stem, ext.to_string_lossy()),
        None => format!("{}_raw", stem),
    };
    path.with_file_name(name)
}

impl fmt::Display for ProbeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Response candidates: {}", self.candidate_count)?;
        write!(f, "Parts: {}", self.parts.len())?;

        for part in &self.parts {
            writeln!(f)?;
            writeln!(f)?;
            writeln!(f, "Part {}:", part.index)?;
            writeln!(f, "  Has text: {}", part.text.is_some())?;
            write!(f, "  Has inline_data: {}", part.payload.is_some())?;

            if let Some(payload) = &part.payload {
                writeln!(f)?;
                writeln!(f, "  MIME type: {}", payload.mime.as_deref().unwrap_or("unknown"))?;
                let encoding = match payload.encoding {
                    PayloadEncoding::Raw => "raw bytes",
                    PayloadEncoding::Base64 => "base64 text",
                };
                writeln!(f, "  Data type: {}", encoding)?;
                write!(f, "  Data length: {}", payload.encoded_len)?;
                match &payload.decoded_len {
                    Ok(len) if payload.encoding == PayloadEncoding::Base64 => {
                        write!(f, "\n  Decoded length: {}", len)?
                    }
                    Ok(_) => {}
                    Err(e) => write!(f, "\n  Decode error: {}", e)?,
                }
            }
        }
        Ok(())
    }
}

/// Sends a single image-modality request and reports its shape.
#[derive(Debug, Clone)]
pub struct ResponseProbe<D> {
    driver: D,
    model: String,
}

impl<D: StorybookDriver> ResponseProbe<D> {
    /// Create a probe against `model`.
    pub fn new(driver: D, model: impl Into<String>) -> Self {
        Self {
            driver,
            model: model.into(),
        }
    }

    /// Send `prompt` asking for text and image output, and describe the response.
    #[instrument(name = "probe_response", skip(self, prompt), fields(model = %self.model))]
    pub async fn probe(&self, prompt: &str) -> StorybookResult<ProbeReport> {
        let request = GenerateRequest::text(prompt, self.model.as_str())
            .with_modalities([Modality::Text, Modality::Image]);

        let response = self.driver.generate(&request).await?;
        Ok(ProbeReport::from_response(&response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_path_keeps_extension() {
        assert_eq!(
            raw_path(Path::new("/tmp/test_output.png")),
            PathBuf::from("/tmp/test_output_raw.png")
        );
        assert_eq!(raw_path(Path::new("dump")), PathBuf::from("dump_raw"));
    }

    #[test]
    fn test_report_describes_each_part() {
        let response = GenerateResponse {
            outputs: vec![
                Output::Text("A boy under a tree".to_string()),
                Output::Image {
                    mime: Some("image/png".to_string()),
                    source: MediaSource::Base64("aGVsbG8=".to_string()),
                },
            ],
            candidate_count: 1,
        };

        let report = ProbeReport::from_response(&response);
        assert!(report.has_image());
        assert_eq!(report.parts.len(), 2);
        assert_eq!(report.parts[0].text.as_deref(), Some("A boy under a tree"));

        let payload = report.parts[1].payload.as_ref().unwrap();
        assert_eq!(payload.encoding, PayloadEncoding::Base64);
        assert_eq!(payload.encoded_len, 8);
        assert_eq!(payload.decoded_len, Ok(5));

        let rendered = report.to_string();
        assert!(rendered.contains("Response candidates: 1"));
        assert!(rendered.contains("MIME type: image/png"));
        assert!(rendered.contains("Decoded length: 5"));
    }
}
