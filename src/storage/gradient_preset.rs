use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::data::gradient::Gradient;
use crate::storage::errors::StorageError;

/// A named gradient as stored on disk:
/// `{"name": "...", "stops": [[0.0, "#000764"], ...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientPreset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    stops: Gradient,
}

impl GradientPreset {
    #[must_use]
    pub fn new(name: impl Into<String>, stops: Gradient) -> Self {
        Self {
            name: Some(name.into()),
            stops,
        }
    }

    /// Empty when the record carried no name and was not read from a file.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn stops(&self) -> &Gradient {
        &self.stops
    }

    #[must_use]
    pub fn into_gradient(self) -> Gradient {
        self.stops
    }

    pub fn from_json(json: &str) -> Result<Self, StorageError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, StorageError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Reads a preset; a record without a name takes the file stem.
pub fn read_preset(path: impl AsRef<Path>) -> Result<GradientPreset, StorageError> {
    let path = path.as_ref();
    let mut preset = GradientPreset::from_json(&fs::read_to_string(path)?)?;

    if preset.name.is_none() {
        preset.name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned());
    }

    debug!("loaded preset {:?} with {} stops from {}", preset.name(), preset.stops.len(), path.display());

    Ok(preset)
}

pub fn write_preset(preset: &GradientPreset, path: impl AsRef<Path>) -> Result<(), StorageError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, preset.to_json()?)?;

    Ok(())
}
