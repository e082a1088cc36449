//! Human-readable stage descriptions. Presentation only.

use crate::domain::model::{Axis, DominanceTrace, Elimination, MixedStrategySolution, PayoffMatrix};

pub const SADDLE_STAGE: &str = "1. Searching for a saddle point";
pub const REDUCE_STAGE: &str = "2. Simplifying the matrix";
pub const LP_STAGE: &str = "3. Solving via linear programming";

pub fn describe_elimination(elimination: &Elimination) -> String {
    let noun = match elimination.axis {
        Axis::Row => "Row",
        Axis::Column => "Column",
    };
    format!(
        "{} {} is dominated by {} {} and was removed",
        noun,
        elimination.removed + 1,
        noun.to_lowercase(),
        elimination.dominated_by + 1
    )
}

pub fn describe_reduction(trace: &DominanceTrace) -> Vec<String> {
    if trace.eliminations.is_empty() {
        return vec!["No dominated strategies found".to_string()];
    }

    let mut lines: Vec<String> = trace.eliminations.iter().map(describe_elimination).collect();
    lines.push(format!(
        "Reduced matrix ({}x{}):\n{}",
        trace.reduced_matrix.num_rows(),
        trace.reduced_matrix.num_cols(),
        matrix_to_string(&trace.reduced_matrix)
    ));
    lines
}

pub fn describe_mixed(reduced: &PayoffMatrix, solution: &MixedStrategySolution) -> String {
    let diagnostics = &solution.diagnostics;
    let mut sb = String::new();

    sb.push_str("### Matrix ###\n");
    sb.push_str(&matrix_to_string(reduced));
    sb.push_str("\n\n");

    if diagnostics.adjustment > 0.0 {
        sb.push_str(&format!(
            "### Normalized matrix (added {:.2}) ###\n",
            diagnostics.adjustment
        ));
        sb.push_str(&matrix_to_string(&diagnostics.normalized_matrix));
        sb.push_str("\n\n");
    }

    sb.push_str("### Results ###\n");
    sb.push_str(&format!("Game value: {:.6}\n\n", solution.game_value));

    sb.push_str("Player 1 strategy:\n");
    for (i, p) in solution.player1_strategy.iter().enumerate() {
        sb.push_str(&format!("p{} = {:.6}\n", i + 1, p));
    }

    sb.push_str("\nPlayer 2 strategy:\n");
    for (j, q) in solution.player2_strategy.iter().enumerate() {
        sb.push_str(&format!("q{} = {:.6}\n", j + 1, q));
    }

    sb
}

pub fn matrix_to_string(matrix: &PayoffMatrix) -> String {
    matrix
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|v| format!("{:8.2}", v))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
