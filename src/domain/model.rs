use crate::utils::error::SolveError;
use serde::{Deserialize, Serialize};

/// Payoffs to the row player. Always non-empty, rectangular and finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct PayoffMatrix {
    rows: Vec<Vec<f64>>,
}

impl PayoffMatrix {
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, SolveError> {
        let Some(first) = rows.first() else {
            return Err(SolveError::invalid_matrix("matrix has no rows"));
        };
        let width = first.len();
        if width == 0 {
            return Err(SolveError::invalid_matrix("row 1 has no columns"));
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(SolveError::invalid_matrix(format!(
                    "row {} has {} columns, expected {}",
                    i + 1,
                    row.len(),
                    width
                )));
            }
            if let Some(j) = row.iter().position(|v| !v.is_finite()) {
                return Err(SolveError::invalid_matrix(format!(
                    "entry ({}, {}) is not a finite number",
                    i + 1,
                    j + 1
                )));
            }
        }

        Ok(Self { rows })
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_cols(&self) -> usize {
        self.rows[0].len()
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.rows[row][col]
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.rows[row]
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn column(&self, col: usize) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(move |row| row[col])
    }

    pub fn min_entry(&self) -> f64 {
        self.rows
            .iter()
            .flatten()
            .copied()
            .fold(f64::INFINITY, f64::min)
    }

    /// New matrix with `delta` added to every entry.
    pub fn shifted(&self, delta: f64) -> Self {
        Self {
            rows: self
                .rows
                .iter()
                .map(|row| row.iter().map(|v| v + delta).collect())
                .collect(),
        }
    }

    pub fn transpose(&self) -> Self {
        Self {
            rows: (0..self.num_cols())
                .map(|j| self.column(j).collect())
                .collect(),
        }
    }

    /// Sub-matrix keeping the given rows and columns, in the order given.
    /// Callers pass non-empty, in-range index lists.
    pub fn select(&self, rows: &[usize], cols: &[usize]) -> Self {
        Self {
            rows: rows
                .iter()
                .map(|&i| cols.iter().map(|&j| self.rows[i][j]).collect())
                .collect(),
        }
    }
}

impl TryFrom<Vec<Vec<f64>>> for PayoffMatrix {
    type Error = SolveError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<PayoffMatrix> for Vec<Vec<f64>> {
    fn from(matrix: PayoffMatrix) -> Self {
        matrix.rows
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaddlePointResult {
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    pub lower_value: f64,
    pub upper_value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub col_index: Option<usize>,
    pub explanation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Axis {
    Row,
    Column,
}

/// One removal step. Indices refer to the caller's original matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Elimination {
    pub axis: Axis,
    pub removed: usize,
    pub dominated_by: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DominanceTrace {
    pub eliminations: Vec<Elimination>,
    pub reduced_matrix: PayoffMatrix,
    /// `row_map[k]` is the original index of reduced row `k`.
    pub row_map: Vec<usize>,
    pub col_map: Vec<usize>,
}

impl DominanceTrace {
    /// Scatters a distribution over reduced rows back onto `original_rows` slots.
    pub fn expand_rows(&self, reduced: &[f64], original_rows: usize) -> Vec<f64> {
        scatter(reduced, &self.row_map, original_rows)
    }

    pub fn expand_cols(&self, reduced: &[f64], original_cols: usize) -> Vec<f64> {
        scatter(reduced, &self.col_map, original_cols)
    }
}

fn scatter(reduced: &[f64], map: &[usize], len: usize) -> Vec<f64> {
    let mut full = vec![0.0; len];
    for (&original, &p) in map.iter().zip(reduced) {
        full[original] = p;
    }
    full
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LpDiagnostics {
    /// δ added to every payoff before solving.
    pub adjustment: f64,
    pub normalized_matrix: PayoffMatrix,
    pub normalized_value: f64,
    /// 1/S from the row player's program.
    pub row_value: f64,
    /// 1/T from the column player's program.
    pub column_value: f64,
    pub reduced_player1_strategy: Vec<f64>,
    pub reduced_player2_strategy: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MixedStrategySolution {
    pub player1_strategy: Vec<f64>,
    pub player2_strategy: Vec<f64>,
    pub game_value: f64,
    pub diagnostics: LpDiagnostics,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum GameSolution {
    #[serde(rename_all = "camelCase")]
    PureStrategy {
        value: f64,
        row_index: usize,
        col_index: usize,
        saddle_point: SaddlePointResult,
        narration: Vec<String>,
    },
    #[serde(rename_all = "camelCase")]
    MixedStrategy {
        #[serde(flatten)]
        solution: MixedStrategySolution,
        saddle_point: SaddlePointResult,
        dominance_trace: DominanceTrace,
        narration: Vec<String>,
    },
}

impl GameSolution {
    pub fn game_value(&self) -> f64 {
        match self {
            GameSolution::PureStrategy { value, .. } => *value,
            GameSolution::MixedStrategy { solution, .. } => solution.game_value,
        }
    }

    pub fn saddle_point(&self) -> &SaddlePointResult {
        match self {
            GameSolution::PureStrategy { saddle_point, .. }
            | GameSolution::MixedStrategy { saddle_point, .. } => saddle_point,
        }
    }

    pub fn narration(&self) -> &[String] {
        match self {
            GameSolution::PureStrategy { narration, .. }
            | GameSolution::MixedStrategy { narration, .. } => narration,
        }
    }

    pub fn explanation(&self) -> String {
        self.narration().join("\n")
    }

    pub fn is_pure(&self) -> bool {
        matches!(self, GameSolution::PureStrategy { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_jagged_rows() {
        let err = PayoffMatrix::new(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(err, SolveError::InvalidMatrix { .. }));
    }

    #[test]
    fn test_rejects_empty_and_non_finite() {
        assert!(PayoffMatrix::new(vec![]).is_err());
        assert!(PayoffMatrix::new(vec![vec![]]).is_err());
        assert!(PayoffMatrix::new(vec![vec![1.0, f64::NAN]]).is_err());
        assert!(PayoffMatrix::new(vec![vec![f64::INFINITY]]).is_err());
    }

    #[test]
    fn test_shift_and_transpose_do_not_touch_source() {
        let m = PayoffMatrix::new(vec![vec![-1.0, 2.0, 0.5], vec![3.0, -4.0, 1.0]]).unwrap();
        let shifted = m.shifted(4.0);
        let t = m.transpose();

        assert_eq!(m.get(1, 1), -4.0);
        assert_eq!(shifted.get(1, 1), 0.0);
        assert_eq!(m.min_entry(), -4.0);
        assert_eq!((t.num_rows(), t.num_cols()), (3, 2));
        assert_eq!(t.row(2), &[0.5, 1.0]);
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: PayoffMatrix = serde_json::from_str("[[1, 2], [3, 4]]").unwrap();
        assert_eq!(ok.num_cols(), 2);
        assert!(serde_json::from_str::<PayoffMatrix>("[[1, 2], [3]]").is_err());
    }

    #[test]
    fn test_expand_puts_zero_at_eliminated_slots() {
        let trace = DominanceTrace {
            eliminations: vec![],
            reduced_matrix: PayoffMatrix::new(vec![vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap(),
            row_map: vec![0, 2],
            col_map: vec![1, 2],
        };
        assert_eq!(trace.expand_rows(&[0.25, 0.75], 3), vec![0.25, 0.0, 0.75]);
        assert_eq!(trace.expand_cols(&[0.5, 0.5], 3), vec![0.0, 0.5, 0.5]);
    }
}
