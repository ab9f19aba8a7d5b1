//! Tesseract OCR engine.
//!
//! Shells out to the system `tesseract` binary with a fixed language
//! profile. Recognition is slow (seconds per image); tesseract's progress
//! chatter on stderr is ignored, only the final text matters.

use std::io::ErrorKind;
use thiserror::Error;
use tokio::process::Command;

const DEFAULT_LANGUAGE: &str = "eng";

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("OCR engine not available: {0}")]
    EngineNotAvailable(String),

    #[error("Recognition failed: {0}")]
    RecognitionFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Text recognizer over the system tesseract binary.
#[derive(Clone, Debug)]
pub struct OcrEngine {
    language: String,
}

impl OcrEngine {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Check that the tesseract binary can be invoked.
    pub async fn is_available() -> bool {
        Command::new("tesseract")
            .arg("--version")
            .output()
            .await
            .map(|out| out.status.success())
            .unwrap_or(false)
    }

    /// Recognize text in an image buffer, returning plain text.
    ///
    /// The buffer is staged to a temporary file; tesseract sniffs the
    /// format from content, so the suffix is only cosmetic.
    pub async fn recognize(&self, image: &[u8]) -> Result<String, OcrError> {
        let dir = tempfile::tempdir()?;
        let input_path = dir.path().join("input.png");
        tokio::fs::write(&input_path, image).await?;

        let start = std::time::Instant::now();
        let output = Command::new("tesseract")
            .arg(&input_path)
            .arg("stdout")
            .args(["-l", &self.language])
            .output()
            .await;

        match output {
            Ok(output) if output.status.success() => {
                let text = String::from_utf8_lossy(&output.stdout).to_string();
                tracing::info!(
                    language = %self.language,
                    text_len = text.len(),
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "OCR recognition complete"
                );
                Ok(text)
            }
            Ok(output) => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                Err(OcrError::RecognitionFailed(format!(
                    "tesseract failed: {}",
                    stderr
                )))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(OcrError::EngineNotAvailable(
                "tesseract not found (install tesseract-ocr)".to_string(),
            )),
            Err(e) => Err(OcrError::Io(e)),
        }
    }
}

impl Default for OcrEngine {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE)
    }
}
