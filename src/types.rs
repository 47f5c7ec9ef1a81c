//! Slide content types and the JSON slide manifest.
//!
//! The host page supplies the carousel's content once, at mount, as an
//! ordered sequence of slides. For the CLI that sequence comes from a
//! `slides.json` manifest; library users construct `Vec<Slide>` directly.
//! Ordering is significant and fixed for the lifetime of one carousel —
//! there is no dynamic insertion.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Manifest validation error: {0}")]
    Validation(String),
}

/// One content unit displayed by the carousel at a time.
///
/// A slide is opaque to the engine: media source plus optional text. Its
/// identity is its index in the slide sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    /// Media source (URL or path, passed through to the rendered markup).
    pub src: String,
    /// Alternative text for the media element.
    #[serde(default)]
    pub alt: String,
    /// Optional caption shown under the media.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// The slide manifest consumed by the CLI (`slides.json`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlideManifest {
    pub slides: Vec<Slide>,
}

impl SlideManifest {
    /// Load and validate a manifest from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = fs::read_to_string(path)?;
        let manifest: SlideManifest = serde_json::from_str(&content)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Validate manifest content.
    ///
    /// An empty slide list is valid — the carousel renders nothing — but a
    /// slide with an empty `src` has no possible rendering and is rejected.
    pub fn validate(&self) -> Result<(), ManifestError> {
        for (idx, slide) in self.slides.iter().enumerate() {
            if slide.src.trim().is_empty() {
                return Err(ManifestError::Validation(format!(
                    "slide {idx} has an empty src"
                )));
            }
        }
        Ok(())
    }
}
