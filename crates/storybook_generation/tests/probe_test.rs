//! Tests for the response probe.

mod test_utils;

use storybook_core::{MediaSource, Modality};
use storybook_generation::{PROBE_PROMPT, PayloadEncoding, ResponseProbe};
use tempfile::TempDir;
use test_utils::{MockDriver, MockResponse, PNG_BYTES};

#[tokio::test]
async fn test_probe_requests_image_modality() -> anyhow::Result<()> {
    let driver = MockDriver::new_sequence(vec![MockResponse::raw_image()]);
    let probe = ResponseProbe::new(driver.clone(), "gemini-2.0-flash-exp");

    let report = probe.probe(PROBE_PROMPT).await?;

    let request = &driver.requests()[0];
    assert_eq!(request.prompt(), PROBE_PROMPT);
    assert_eq!(request.response_modalities(), &vec![Modality::Text, Modality::Image]);
    assert_eq!(report.candidate_count, 1);
    assert_eq!(report.parts.len(), 2);
    assert!(report.parts[0].text.is_some());

    let payload = report.parts[1].payload.as_ref().unwrap();
    assert_eq!(payload.encoding, PayloadEncoding::Raw);
    assert_eq!(payload.decoded_len, Ok(PNG_BYTES.len()));
    Ok(())
}

#[tokio::test]
async fn test_probe_saves_decoded_image() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let driver = MockDriver::new_sequence(vec![MockResponse::base64_image()]);

    let report = ResponseProbe::new(driver, "model").probe("draw").await?;
    let target = dir.path().join("test_output.png");
    let written = report.save_first_image(&target).await?;

    assert_eq!(written, Some(target.clone()));
    assert_eq!(std::fs::read(&target)?, PNG_BYTES);
    Ok(())
}

#[tokio::test]
async fn test_probe_saves_raw_on_decode_failure() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let driver = MockDriver::new_sequence(vec![MockResponse::Image(MediaSource::Base64(
        "not*base64".to_string(),
    ))]);

    let report = ResponseProbe::new(driver, "model").probe("draw").await?;
    assert!(report.parts[1].payload.as_ref().unwrap().decoded_len.is_err());
    assert!(report.to_string().contains("Decode error"));

    let target = dir.path().join("test_output.png");
    let written = report.save_first_image(&target).await?;

    let raw = dir.path().join("test_output_raw.png");
    assert_eq!(written, Some(raw.clone()));
    assert!(!target.exists());
    assert_eq!(std::fs::read(raw)?, b"not*base64");
    Ok(())
}

#[tokio::test]
async fn test_probe_without_image_saves_nothing() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let driver = MockDriver::new_sequence(vec![MockResponse::Text("No picture.".to_string())]);

    let report = ResponseProbe::new(driver, "model").probe("draw").await?;
    assert!(!report.has_image());
    assert_eq!(report.save_first_image(&dir.path().join("out.png")).await?, None);
    Ok(())
}
