use crate::utils::error::{GameError, Result, SolveError};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixFormat {
    Json,
    Csv,
}

impl MatrixFormat {
    pub fn from_path(path: &str) -> Result<Self> {
        let extension = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("json") => Ok(MatrixFormat::Json),
            Some("csv") => Ok(MatrixFormat::Csv),
            _ => Err(GameError::UnsupportedFormat {
                path: path.to_string(),
            }),
        }
    }
}

/// Accepts a bare `[[...]]` or `{ "matrix": [[...]] }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonMatrix {
    Bare(Vec<Vec<f64>>),
    Wrapped { matrix: Vec<Vec<f64>> },
}

/// Decodes raw rows. Shape checks happen when the rows become a `PayoffMatrix`.
pub fn parse_matrix(data: &[u8], format: MatrixFormat) -> Result<Vec<Vec<f64>>> {
    match format {
        MatrixFormat::Json => {
            let rows = match serde_json::from_slice::<JsonMatrix>(data)? {
                JsonMatrix::Bare(rows) => rows,
                JsonMatrix::Wrapped { matrix } => matrix,
            };
            Ok(rows)
        }
        MatrixFormat::Csv => parse_csv(data),
    }
}

fn parse_csv(data: &[u8]) -> Result<Vec<Vec<f64>>> {
    // 允許列長不同，讓核心回報 InvalidMatrix
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(data);

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let row = record
            .iter()
            .enumerate()
            .map(|(j, field)| {
                field.parse::<f64>().map_err(|_| {
                    SolveError::invalid_matrix(format!(
                        "entry ({}, {}) is not a number: '{}'",
                        i + 1,
                        j + 1,
                        field
                    ))
                })
            })
            .collect::<std::result::Result<Vec<f64>, SolveError>>()?;
        rows.push(row);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(MatrixFormat::from_path("a/b/game.json").unwrap(), MatrixFormat::Json);
        assert_eq!(MatrixFormat::from_path("game.CSV").unwrap(), MatrixFormat::Csv);
        assert!(matches!(
            MatrixFormat::from_path("game.xlsx"),
            Err(GameError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_parse_json_bare_and_wrapped() {
        let bare = parse_matrix(b"[[2, 1], [1, 3.5]]", MatrixFormat::Json).unwrap();
        assert_eq!(bare, vec![vec![2.0, 1.0], vec![1.0, 3.5]]);

        let wrapped = parse_matrix(br#"{"matrix": [[-1, 0]]}"#, MatrixFormat::Json).unwrap();
        assert_eq!(wrapped, vec![vec![-1.0, 0.0]]);
    }

    #[test]
    fn test_parse_json_rejects_strings() {
        let err = parse_matrix(br#"[["a", 1]]"#, MatrixFormat::Json).unwrap_err();
        assert!(matches!(err, GameError::SerializationError(_)));
    }

    #[test]
    fn test_parse_csv() {
        let data = b"# payoffs\n4, 0\n 0 ,4\n";
        let rows = parse_matrix(data, MatrixFormat::Csv).unwrap();
        assert_eq!(rows, vec![vec![4.0, 0.0], vec![0.0, 4.0]]);
    }

    #[test]
    fn test_parse_csv_keeps_jagged_rows_for_validation() {
        let rows = parse_matrix(b"1,2\n3\n", MatrixFormat::Csv).unwrap();
        assert_eq!(rows, vec![vec![1.0, 2.0], vec![3.0]]);
    }

    #[test]
    fn test_parse_csv_rejects_text() {
        let err = parse_matrix(b"1,x\n", MatrixFormat::Csv).unwrap_err();
        assert!(matches!(
            err,
            GameError::Solve(SolveError::InvalidMatrix { .. })
        ));
    }
}
