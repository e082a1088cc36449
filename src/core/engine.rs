use crate::adapters::matrix_reader::{parse_matrix, MatrixFormat};
use crate::adapters::report::render;
use crate::config::RunConfig;
use crate::core::solver::GameSolver;
use crate::domain::model::GameSolution;
use crate::domain::ports::{LpOracle, Storage};
use crate::utils::error::Result;

#[derive(Debug, Clone)]
pub struct SolveOutcome {
    pub solution: GameSolution,
    pub report: String,
    /// Where the report was written, if anywhere.
    pub output_path: Option<String>,
}

/// Load → solve → store over a `Storage` backend.
pub struct SolveEngine<S: Storage, O: LpOracle> {
    storage: S,
    solver: GameSolver<O>,
    config: RunConfig,
}

impl<S: Storage, O: LpOracle> SolveEngine<S, O> {
    pub fn new(storage: S, oracle: O, config: RunConfig) -> Self {
        Self {
            storage,
            solver: GameSolver::new(oracle, config.solver),
            config,
        }
    }

    pub async fn run(&self) -> Result<SolveOutcome> {
        tracing::info!("Loading payoff matrix from {}", self.config.input);
        let format = MatrixFormat::from_path(&self.config.input)?;
        let raw = self.storage.read_file(&self.config.input).await?;
        let rows = parse_matrix(&raw, format)?;
        tracing::debug!(rows = rows.len(), "matrix decoded");

        let solution = self.solver.solve_rows(rows)?;
        if solution.is_pure() {
            tracing::info!("Saddle point found, game value {:.6}", solution.game_value());
        } else {
            tracing::info!("Solved in mixed strategies, game value {:.6}", solution.game_value());
        }

        let report = render(&solution, self.config.format, self.config.pretty)?;

        let output_path = match &self.config.output {
            Some(path) => {
                self.storage.write_file(path, report.as_bytes()).await?;
                tracing::info!("Report saved to {}", path);
                Some(path.clone())
            }
            None => None,
        };

        Ok(SolveOutcome {
            solution,
            report,
            output_path,
        })
    }
}
