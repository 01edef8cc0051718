//! OCR for uploaded images
//!
//! The engine sits behind [`OcrEngine`]. The default implementation shells
//! out to the tesseract CLI.

use std::io::Write;
use std::path::Path;
use std::process::Command;

use crate::config::OcrConfig;
use crate::error::{Error, Result};

/// An OCR engine that reads an image file and returns recognized text fragments
pub trait OcrEngine: Send + Sync {
    /// Engine identifier for logging
    fn name(&self) -> &str;

    /// Recognize text in the image at `image`, one fragment per detected line
    fn recognize(&self, image: &Path) -> Result<Vec<String>>;
}

/// Tesseract CLI engine
pub struct TesseractOcr {
    command: String,
    language: String,
}

impl TesseractOcr {
    /// Create a new tesseract engine
    pub fn new(config: &OcrConfig) -> Self {
        Self {
            command: config.command.clone(),
            language: config.language.clone(),
        }
    }

    /// Check if the tesseract binary can be executed
    pub fn is_available(&self) -> bool {
        Command::new(&self.command)
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }
}

impl OcrEngine for TesseractOcr {
    fn name(&self) -> &str {
        "tesseract"
    }

    fn recognize(&self, image: &Path) -> Result<Vec<String>> {
        let output = Command::new(&self.command)
            .arg(image)
            .args(["stdout", "-l", self.language.as_str()])
            .output()
            .map_err(|e| Error::ocr(format!("failed to run {}: {}", self.command, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::ocr(format!(
                "{} exited with {}: {}",
                self.command,
                output.status,
                stderr.trim()
            )));
        }

        let fragments = fragments_from_output(&String::from_utf8_lossy(&output.stdout));
        tracing::debug!("tesseract recognized {} fragments", fragments.len());
        Ok(fragments)
    }
}

/// Split raw OCR output into trimmed, non-empty line fragments
pub fn fragments_from_output(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Run OCR over in-memory image bytes.
///
/// The bytes are written to a named temp file inside `temp_dir` that is
/// removed when this function returns, whether OCR succeeded or not.
pub fn recognize_bytes(
    engine: &dyn OcrEngine,
    data: &[u8],
    extension: &str,
    temp_dir: &Path,
) -> Result<String> {
    let suffix = format!(".{}", extension);
    let mut file = tempfile::Builder::new()
        .prefix("docscan-")
        .suffix(&suffix)
        .tempfile_in(temp_dir)?;
    file.write_all(data)?;
    file.flush()?;

    tracing::debug!(
        "Running {} OCR on {} ({} bytes)",
        engine.name(),
        file.path().display(),
        data.len()
    );

    let fragments = engine.recognize(file.path())?;
    Ok(fragments.join(" "))
}
