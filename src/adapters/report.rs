use crate::domain::model::GameSolution;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Json,
    Text,
}

pub fn render(solution: &GameSolution, format: ReportFormat, pretty: bool) -> Result<String> {
    match format {
        ReportFormat::Json if pretty => Ok(serde_json::to_string_pretty(solution)?),
        ReportFormat::Json => Ok(serde_json::to_string(solution)?),
        ReportFormat::Text => Ok(render_text(solution)),
    }
}

fn render_text(solution: &GameSolution) -> String {
    let mut text = solution.explanation();
    text.push('\n');

    match solution {
        GameSolution::PureStrategy {
            value,
            row_index,
            col_index,
            ..
        } => {
            text.push_str(&format!(
                "\nGame value: {:.6}\nOptimal pure strategies: row {}, column {}\n",
                value,
                row_index + 1,
                col_index + 1
            ));
        }
        GameSolution::MixedStrategy { solution, .. } => {
            text.push_str(&format!("\nGame value: {:.6}\n", solution.game_value));
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::SaddlePointResult;

    fn pure_solution() -> GameSolution {
        GameSolution::PureStrategy {
            value: 3.0,
            row_index: 1,
            col_index: 0,
            saddle_point: SaddlePointResult {
                exists: true,
                value: Some(3.0),
                lower_value: 3.0,
                upper_value: 3.0,
                row_index: Some(1),
                col_index: Some(0),
                explanation: "α = β".to_string(),
            },
            narration: vec!["1. Searching for a saddle point".to_string(), "α = β".to_string()],
        }
    }

    #[test]
    fn test_json_is_tagged_and_camel_case() {
        let json = render(&pure_solution(), ReportFormat::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["type"], "PureStrategy");
        assert_eq!(value["value"], 3.0);
        assert_eq!(value["rowIndex"], 1);
        assert_eq!(value["colIndex"], 0);
        assert_eq!(value["saddlePoint"]["lowerValue"], 3.0);
    }

    #[test]
    fn test_text_uses_one_based_indices() {
        let text = render(&pure_solution(), ReportFormat::Text, false).unwrap();
        assert!(text.starts_with("1. Searching for a saddle point\nα = β\n"));
        assert!(text.contains("Game value: 3.000000"));
        assert!(text.contains("row 2, column 1"));
    }

    #[test]
    fn test_format_from_toml_string() {
        #[derive(Deserialize)]
        struct Wrapper {
            format: ReportFormat,
        }
        let w: Wrapper = toml::from_str("format = \"text\"").unwrap();
        assert_eq!(w.format, ReportFormat::Text);
    }
}
