use crate::config::solver_config::SolverConfig;
use crate::domain::model::{DominanceTrace, LpDiagnostics, MixedStrategySolution, PayoffMatrix};
use crate::domain::ports::{
    Direction, LinearConstraint, LinearProgram, LpFailure, LpOracle, Relation,
};
use crate::utils::error::{Player, SolveError};

/// Solves the (reduced) game through the pair of dual linear programs.
pub struct GameLpSolver<'a, O: LpOracle> {
    oracle: &'a O,
    config: &'a SolverConfig,
}

impl<'a, O: LpOracle> GameLpSolver<'a, O> {
    pub fn new(oracle: &'a O, config: &'a SolverConfig) -> Self {
        Self { oracle, config }
    }

    /// `original_rows`/`original_cols` size the returned strategies, which are
    /// indexed like the matrix the trace was built from.
    pub fn solve(
        &self,
        trace: &DominanceTrace,
        original_rows: usize,
        original_cols: usize,
    ) -> Result<MixedStrategySolution, SolveError> {
        let reduced = &trace.reduced_matrix;

        // 平移到非負，LP 對偶才成立
        let adjustment = (-reduced.min_entry()).max(0.0);
        let normalized = reduced.shifted(adjustment);
        if !normalized.rows().iter().flatten().all(|v| v.is_finite()) {
            return Err(SolveError::invalid_matrix(format!(
                "payoff range overflows when shifted by {} to make entries non-negative",
                adjustment
            )));
        }

        let t = self.run(&row_program(&normalized), Player::Row)?;
        let (p, sum_p) = self.to_distribution(&t, Player::Row)?;

        let u = self.run(&column_program(&normalized), Player::Column)?;
        let (q, sum_q) = self.to_distribution(&u, Player::Column)?;

        let row_value = 1.0 / sum_p;
        let column_value = 1.0 / sum_q;
        tracing::debug!(adjustment, sum_p, sum_q, row_value, column_value, "dual programs solved");

        if (row_value - column_value).abs() > self.config.dual_tolerance {
            tracing::warn!(row_value, column_value, "dual game values disagree");
            return Err(SolveError::InconsistentDuals {
                row_value,
                column_value,
            });
        }

        Ok(MixedStrategySolution {
            player1_strategy: trace.expand_rows(&p, original_rows),
            player2_strategy: trace.expand_cols(&q, original_cols),
            game_value: row_value - adjustment,
            diagnostics: LpDiagnostics {
                adjustment,
                normalized_matrix: normalized,
                normalized_value: row_value,
                row_value,
                column_value,
                reduced_player1_strategy: p,
                reduced_player2_strategy: q,
            },
        })
    }

    fn run(&self, program: &LinearProgram, player: Player) -> Result<Vec<f64>, SolveError> {
        let point = self.oracle.solve(program).map_err(|failure| match failure {
            LpFailure::Infeasible => SolveError::LpInfeasible { player },
            LpFailure::Unbounded => SolveError::LpUnbounded { player },
        })?;

        if point.len() != program.num_vars() {
            return Err(SolveError::Internal {
                message: format!(
                    "LP backend returned {} values for {} variables ({})",
                    point.len(),
                    program.num_vars(),
                    player
                ),
            });
        }
        Ok(point)
    }

    /// Scales an LP optimum into a probability vector; returns it with the raw sum.
    fn to_distribution(&self, point: &[f64], player: Player) -> Result<(Vec<f64>, f64), SolveError> {
        let tolerance = self.config.probability_tolerance;
        if let Some(bad) = point.iter().find(|&&x| !x.is_finite() || x < -tolerance) {
            return Err(SolveError::Internal {
                message: format!("LP backend returned invalid variable {} for {}", bad, player),
            });
        }

        let sum: f64 = point.iter().sum();
        if sum <= 0.0 {
            return Err(SolveError::DegenerateSolution { player, sum });
        }

        let strategy = point.iter().map(|&x| x.max(0.0) / sum).collect();
        Ok((strategy, sum))
    }
}

/// min Σ tᵢ  s.t.  Σᵢ tᵢ·R[i][j] ≥ 1 for every column j.
pub fn row_program(normalized: &PayoffMatrix) -> LinearProgram {
    LinearProgram {
        direction: Direction::Minimize,
        objective: vec![1.0; normalized.num_rows()],
        constraints: normalized
            .transpose()
            .rows()
            .iter()
            .map(|column| LinearConstraint {
                coefficients: column.clone(),
                relation: Relation::GreaterOrEqual,
                rhs: 1.0,
            })
            .collect(),
    }
}

/// max Σ uⱼ  s.t.  Σⱼ uⱼ·R[i][j] ≤ 1 for every row i.
pub fn column_program(normalized: &PayoffMatrix) -> LinearProgram {
    LinearProgram {
        direction: Direction::Maximize,
        objective: vec![1.0; normalized.num_cols()],
        constraints: normalized
            .rows()
            .iter()
            .map(|row| LinearConstraint {
                coefficients: row.clone(),
                relation: Relation::LessOrEqual,
                rhs: 1.0,
            })
            .collect(),
    }
}
