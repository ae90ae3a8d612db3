use std::fs;
use std::path::Path;

use log::warn;
use serde::de::{Error as _, Unexpected};
use serde::Deserialize;
use serde_json::Value;

use crate::core::data::gradient::Gradient;
use crate::core::fractals::mandelbrot::mandelbrot_config::RenderSettings;
use crate::storage::errors::StorageError;

/// Parses a settings object. Any other JSON value is an error, even though
/// every field has a default.
pub fn settings_from_json(json: &str) -> Result<RenderSettings, StorageError> {
    let value: Value = serde_json::from_str(json)?;

    if !value.is_object() {
        let unexpected = match &value {
            Value::Array(_) => Unexpected::Seq,
            Value::String(s) => Unexpected::Str(s),
            Value::Bool(b) => Unexpected::Bool(*b),
            Value::Null => Unexpected::Unit,
            _ => Unexpected::Other("number"),
        };
        return Err(serde_json::Error::invalid_type(unexpected, &"a settings object").into());
    }

    let mut settings = RenderSettings::deserialize(value)?;

    if settings.gradient.len() < 2 {
        warn!(
            "stored gradient has {} usable stops, using the default palette",
            settings.gradient.len()
        );
        settings.gradient = Gradient::default_palette();
    }

    Ok(settings)
}

pub fn read_settings(path: impl AsRef<Path>) -> Result<RenderSettings, StorageError> {
    settings_from_json(&fs::read_to_string(path)?)
}

pub fn write_settings(settings: &RenderSettings, path: impl AsRef<Path>) -> Result<(), StorageError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(settings)?)?;

    Ok(())
}
