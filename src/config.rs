//! Extra presets loaded from a TOML or JSON file.
//!
//! ```toml
//! lineup = ["niva", "lanos"]
//!
//! [[cars]]
//! key = "niva"
//! name = "Lada Niva"
//! frame = "SUV"
//! transmission = "5 Manual"
//! engine = 83
//! wheels = 16
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ShopError, ValidationErrors};

pub const WHEEL_RANGE: std::ops::RangeInclusive<u32> = 10..=24;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CarSpec {
    pub key: String,
    pub name: String,
    pub frame: String,
    pub transmission: String,
    pub engine: u32,
    pub wheels: u32,
}

impl CarSpec {
    fn check(&self, path: &str, errors: &mut ValidationErrors) {
        let text_fields = [
            ("key", &self.key),
            ("name", &self.name),
            ("frame", &self.frame),
            ("transmission", &self.transmission),
        ];
        for (field, value) in text_fields {
            if value.trim().is_empty() {
                errors.add(ShopError::invalid(format!("{path}.{field}"), "must not be blank"));
            }
        }

        if self.engine == 0 {
            errors.add(ShopError::invalid(format!("{path}.engine"), "must be positive"));
        }

        if !WHEEL_RANGE.contains(&self.wheels) {
            errors.add(ShopError::invalid(
                format!("{path}.wheels"),
                format!(
                    "{} is outside {}..={}",
                    self.wheels,
                    WHEEL_RANGE.start(),
                    WHEEL_RANGE.end()
                ),
            ));
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShopConfig {
    #[serde(default)]
    pub cars: Vec<CarSpec>,
    /// Preset keys to build when none are named on the command line.
    #[serde(default)]
    pub lineup: Option<Vec<String>>,
}

impl ShopConfig {
    pub fn from_json(content: &str) -> Result<Self, ShopError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_toml(content: &str) -> Result<Self, ShopError> {
        toml::from_str(content).map_err(|err| toml_error(&err, content))
    }

    /// Parses by extension, falling back to sniffing the first character.
    pub fn parse(content: &str, extension: Option<&str>) -> Result<Self, ShopError> {
        match extension.map(str::to_ascii_lowercase).as_deref() {
            Some("json") => Self::from_json(content),
            Some("toml") => Self::from_toml(content),
            _ => {
                if content.trim_start().starts_with('{') {
                    Self::from_json(content)
                } else {
                    Self::from_toml(content)
                }
            }
        }
    }

    /// Reads, parses and validates a config file.
    pub fn load(path: &Path) -> Result<Self, ShopError> {
        let content = fs::read_to_string(path).map_err(|err| ShopError::io(path, err))?;
        let extension = path.extension().and_then(|ext| ext.to_str());
        let config = Self::parse(&content, extension)?;
        config.validate()?;
        debug!(path = %path.display(), cars = config.cars.len(), "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ShopError> {
        let mut errors = ValidationErrors::new();
        let mut seen = HashSet::new();

        for (idx, spec) in self.cars.iter().enumerate() {
            let path = format!("cars[{idx}]");
            spec.check(&path, &mut errors);
            if !seen.insert(spec.key.to_ascii_lowercase()) {
                errors.add(ShopError::invalid(
                    format!("{path}.key"),
                    format!("duplicate preset key '{}'", spec.key),
                ));
            }
        }

        if let Some(lineup) = &self.lineup {
            if lineup.is_empty() {
                errors.add(ShopError::invalid("lineup", "must name at least one preset"));
            }
        }

        errors.into_result()
    }
}

fn toml_error(err: &toml::de::Error, content: &str) -> ShopError {
    let (line, column) = err
        .span()
        .map(|span| line_column(content, span.start))
        .unwrap_or((0, 0));
    ShopError::parse(line, column, err.message())
}

/// 1-based line and column of a byte offset.
fn line_column(content: &str, offset: usize) -> (usize, usize) {
    let before = &content[..offset.min(content.len())];
    let line = before.matches('\n').count() + 1;
    let column = before
        .rfind('\n')
        .map_or(before.len(), |nl| before.len() - nl - 1)
        + 1;
    (line, column)
}
