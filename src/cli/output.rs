use crate::case::Case;
use crate::{Conversion, Report};
use anyhow::Result;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const SAMPLE: &str = "fooBar_baz";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render single-case results. Text mode is one output per line, uncolored,
/// so it can be piped.
pub fn render_conversions(conversions: &[Conversion], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(conversions
            .iter()
            .map(|c| c.output.as_str())
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(conversions)?),
    }
}

/// Render every conversion of each input
pub fn render_reports(reports: &[Report], format: OutputFormat, colored_output: bool) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(reports)?);
    }

    let width = name_width();
    let mut blocks = Vec::with_capacity(reports.len());

    for report in reports {
        let mut lines = Vec::with_capacity(report.conversions.len() + 1);
        if colored_output {
            lines.push(format!("{}", report.input.bold().underline()));
        } else {
            lines.push(report.input.clone());
        }

        for conversion in &report.conversions {
            let name = format!("{:<width$}", conversion.case.name());
            if colored_output {
                lines.push(format!("  {} {}", name.cyan(), conversion.output));
            } else {
                lines.push(format!("  {} {}", name, conversion.output));
            }
        }

        blocks.push(lines.join("\n"));
    }

    Ok(blocks.join("\n\n"))
}

/// Render the supported case names with a sample conversion
pub fn render_case_list(colored_output: bool) -> String {
    let width = name_width();

    Case::ALL
        .iter()
        .map(|case| {
            let name = format!("{:<width$}", case.name());
            let sample = case.apply(SAMPLE);
            if colored_output {
                format!("{} {} {}", name.cyan().bold(), "→".dimmed(), sample.green())
            } else {
                format!("{} → {}", name, sample)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn name_width() -> usize {
    Case::ALL.iter().map(|c| c.name().len()).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_text_conversions_one_per_line() {
        let conversions = vec![
            Conversion::new("FooBarBaz", Case::Snake),
            Conversion::new("HTTPServer", Case::Snake),
        ];
        let rendered = render_conversions(&conversions, OutputFormat::Text).unwrap();
        assert_eq!(rendered, "foo_bar_baz\nhttp_server");
    }

    #[test]
    fn test_json_conversions() {
        let conversions = vec![Conversion::new("FooBarBaz", Case::Const)];
        let rendered = render_conversions(&conversions, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value[0]["input"], "FooBarBaz");
        assert_eq!(value[0]["case"], "constcase");
        assert_eq!(value[0]["output"], "FOO_BAR_BAZ");
    }

    #[test]
    fn test_plain_report() {
        let report = Report::new("foo_bar");
        let rendered = render_reports(&[report], OutputFormat::Text, false).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "foo_bar");
        assert_eq!(lines.len(), Case::ALL.len() + 1);
        assert!(lines.contains(&"  camelcase     fooBar"));
    }

    #[test]
    fn test_case_list_plain() {
        let rendered = render_case_list(false);
        assert_eq!(rendered.lines().count(), Case::ALL.len());
        assert!(rendered.contains("snakecase     → foo_bar_baz"));
        assert!(rendered.contains("capitalcase   → FooBar_baz"));
    }
}
