use std::fmt;
use std::str::FromStr;

use colored::Colorize;

use crate::car::Car;
use crate::error::ShopError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// One show-car line per car.
    #[default]
    Text,
    /// A pretty-printed JSON array.
    Json,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            other => Err(format!("unknown format '{other}', expected 'text' or 'json'")),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Text => f.write_str("text"),
            Format::Json => f.write_str("json"),
        }
    }
}

pub fn render(cars: &[Car], format: Format) -> Result<String, ShopError> {
    match format {
        Format::Text => Ok(cars.iter().map(|car| format!("{car}\n")).collect()),
        Format::Json => {
            let mut json = serde_json::to_string_pretty(cars)
                .map_err(|err| ShopError::Render(err.to_string()))?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Human-readable failure report for the terminal.
pub fn format_error(error: &ShopError) -> String {
    let mut output = format!("{} {}\n", "error:".bold().red(), error);

    match error {
        ShopError::Validation(errors) => {
            for (idx, inner) in errors.iter().enumerate() {
                output.push_str(&format!("   {}. {}\n", idx + 1, inner));
            }
            output.push_str(&format_summary(errors.len()));
        }
        ShopError::UnknownPreset {
            suggestion: Some(suggestion),
            ..
        } => {
            output.push_str(&format!(
                "   {} did you mean '{}'?\n",
                "hint:".yellow(),
                suggestion
            ));
        }
        _ => {}
    }

    output
}

pub fn format_summary(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("Summary: {count} error{plural} found\n")
}

pub fn should_use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lineup() -> Vec<Car> {
        vec![
            Car::new("Daewoo Lanos", "Sedan", "5 Manual", 98, 13),
            Car::new("Ford Probe", "Cupe", "4 Auto", 160, 14),
        ]
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("text".parse::<Format>(), Ok(Format::Text));
        assert_eq!("JSON".parse::<Format>(), Ok(Format::Json));
        assert!("yaml".parse::<Format>().unwrap_err().contains("yaml"));
        assert_eq!(Format::default().to_string(), "text");
    }

    #[test]
    fn test_render_text() {
        let text = render(&lineup(), Format::Text).unwrap();
        assert_eq!(
            text,
            "Name: Daewoo Lanos, Frame: Sedan, Engine: 98, Wheels: 13, Transmission: 5 Manual\n\
             Name: Ford Probe, Frame: Cupe, Engine: 160, Wheels: 14, Transmission: 4 Auto\n"
        );
        assert_eq!(render(&[], Format::Text).unwrap(), "");
    }

    #[test]
    fn test_render_json() {
        let json = render(&lineup(), Format::Json).unwrap();
        let parsed: Vec<Car> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, lineup());
        assert!(json.contains("\"transmission\": \"4 Auto\""));
    }

    #[test]
    fn test_format_validation_error() {
        let err = ShopError::Validation(vec![
            ShopError::invalid("cars[0].engine", "must be positive"),
            ShopError::invalid("lineup", "must name at least one preset"),
        ]);
        let output = format_error(&err);
        assert!(output.contains("config has 2 invalid fields"));
        assert!(output.contains("1. invalid value for 'cars[0].engine': must be positive"));
        assert!(output.contains("2. invalid value for 'lineup'"));
        assert!(output.contains("Summary: 2 errors found"));
    }

    #[test]
    fn test_format_unknown_preset_hint() {
        let err = ShopError::unknown_preset("getzz", Some("getz".to_string()));
        let output = format_error(&err);
        assert!(output.contains("unknown preset 'getzz'"));
        assert!(output.contains("did you mean 'getz'?"));

        let bare = format_error(&ShopError::unknown_preset("tesla", None));
        assert!(!bare.contains("did you mean"));
    }

    #[test]
    fn test_format_parse_error_location_once() {
        let output = format_error(&ShopError::parse(4, 9, "invalid number"));
        assert!(output.contains("line 4, column 9"));
        assert_eq!(output.matches("line 4").count(), 1);
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_no_color_environment() {
        std::env::set_var("NO_COLOR", "1");
        assert!(!should_use_colors());
        std::env::remove_var("NO_COLOR");
        assert!(should_use_colors());
    }

    #[test]
    fn test_summary_pluralization() {
        assert_eq!(format_summary(1), "Summary: 1 error found\n");
        assert_eq!(format_summary(3), "Summary: 3 errors found\n");
    }
}
