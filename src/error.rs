use std::path::Path;

use thiserror::Error;

use crate::builder::Part;

#[derive(Error, Debug)]
pub enum ShopError {
    #[error("car is missing its {part}: the build step never ran")]
    MissingPart { part: Part },

    #[error("unknown preset '{name}'")]
    UnknownPreset {
        name: String,
        suggestion: Option<String>,
    },

    #[error("preset '{key}' is already registered")]
    DuplicatePreset { key: String },

    #[error("failed to parse config at line {line}, column {column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("invalid value for '{field}': {reason}")]
    Invalid { field: String, reason: String },

    #[error("config has {}", invalid_fields(.0))]
    Validation(Vec<ShopError>),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to render report: {0}")]
    Render(String),
}

impl ShopError {
    pub fn missing_part(part: Part) -> Self {
        Self::MissingPart { part }
    }

    pub fn unknown_preset(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self::UnknownPreset {
            name: name.into(),
            suggestion,
        }
    }

    pub fn parse(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            column,
            message: message.into(),
        }
    }

    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

impl From<serde_json::Error> for ShopError {
    fn from(err: serde_json::Error) -> Self {
        ShopError::Parse {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

fn invalid_fields(errors: &[ShopError]) -> String {
    let count = errors.len();
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} invalid field{plural}")
}

/// Collects validation failures so a config reports all of them at once.
#[derive(Debug, Default)]
pub struct ValidationErrors {
    errors: Vec<ShopError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: ShopError) {
        self.errors.push(error);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn count(&self) -> usize {
        self.errors.len()
    }

    pub fn into_result(self) -> Result<(), ShopError> {
        if self.has_errors() {
            Err(ShopError::Validation(self.errors))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_part_display() {
        let err = ShopError::missing_part(Part::Engine);
        assert_eq!(err.to_string(), "car is missing its engine: the build step never ran");
    }

    #[test]
    fn test_parse_error_display() {
        let err = ShopError::parse(3, 7, "expected `=`");
        let display = err.to_string();
        assert!(display.contains("line 3"));
        assert!(display.contains("column 7"));
        assert!(display.contains("expected `=`"));
    }

    #[test]
    fn test_validation_pluralizes() {
        let one = ShopError::Validation(vec![ShopError::invalid(
            "cars[0].engine",
            "must be positive",
        )]);
        assert_eq!(one.to_string(), "config has 1 invalid field");

        let two = ShopError::Validation(vec![
            ShopError::invalid("cars[0].engine", "must be positive"),
            ShopError::invalid("cars[0].wheels", "must be between 10 and 24"),
        ]);
        assert_eq!(two.to_string(), "config has 2 invalid fields");
    }

    #[test]
    fn test_validation_errors_accumulate() {
        let mut errors = ValidationErrors::new();
        assert!(!errors.has_errors());
        assert!(ValidationErrors::new().into_result().is_ok());

        errors.add(ShopError::invalid("cars[0].name", "must not be blank"));
        errors.add(ShopError::invalid("cars[1].name", "must not be blank"));
        assert_eq!(errors.count(), 2);

        match errors.into_result() {
            Err(ShopError::Validation(inner)) => assert_eq!(inner.len(), 2),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_serde_json_keeps_position() {
        let err = serde_json::from_str::<serde_json::Value>("{\n  \"cars\": [,]\n}").unwrap_err();
        match ShopError::from(err) {
            ShopError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
