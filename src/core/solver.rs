use crate::config::solver_config::SolverConfig;
use crate::core::dominance::eliminate_dominated;
use crate::core::mixed::GameLpSolver;
use crate::core::narration;
use crate::core::saddle::find_saddle_point;
use crate::domain::model::{GameSolution, PayoffMatrix};
use crate::domain::ports::LpOracle;
use crate::utils::error::SolveError;

/// Runs saddle check, dominance reduction and the LP stage, in that order.
pub struct GameSolver<O: LpOracle> {
    oracle: O,
    config: SolverConfig,
}

impl<O: LpOracle> GameSolver<O> {
    pub fn new(oracle: O, config: SolverConfig) -> Self {
        Self { oracle, config }
    }

    /// Validates raw rows first, then solves.
    pub fn solve_rows(&self, rows: Vec<Vec<f64>>) -> Result<GameSolution, SolveError> {
        let matrix = PayoffMatrix::new(rows)?;
        self.solve(&matrix)
    }

    pub fn solve(&self, matrix: &PayoffMatrix) -> Result<GameSolution, SolveError> {
        let mut steps = vec![narration::SADDLE_STAGE.to_string()];

        let saddle_point = find_saddle_point(matrix, self.config.saddle_tolerance)?;
        steps.push(saddle_point.explanation.clone());

        if let (true, Some(value), Some(row_index), Some(col_index)) = (
            saddle_point.exists,
            saddle_point.value,
            saddle_point.row_index,
            saddle_point.col_index,
        ) {
            tracing::debug!(value, row_index, col_index, "solved in pure strategies");
            return Ok(GameSolution::PureStrategy {
                value,
                row_index,
                col_index,
                saddle_point,
                narration: steps,
            });
        }
        if saddle_point.exists {
            return Err(SolveError::Internal {
                message: "saddle point reported without value or indices".to_string(),
            });
        }

        steps.push(narration::REDUCE_STAGE.to_string());
        let dominance_trace = eliminate_dominated(matrix);
        steps.extend(narration::describe_reduction(&dominance_trace));

        steps.push(narration::LP_STAGE.to_string());
        let solution = GameLpSolver::new(&self.oracle, &self.config).solve(
            &dominance_trace,
            matrix.num_rows(),
            matrix.num_cols(),
        )?;
        steps.push(narration::describe_mixed(
            &dominance_trace.reduced_matrix,
            &solution,
        ));
        tracing::debug!(game_value = solution.game_value, "solved in mixed strategies");

        Ok(GameSolution::MixedStrategy {
            solution,
            saddle_point,
            dominance_trace,
            narration: steps,
        })
    }
}
