pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{lp::MiniLpOracle, storage::LocalStorage};
pub use config::{solver_config::SolverConfig, RunConfig};
pub use crate::core::{engine::SolveEngine, solver::GameSolver};
pub use domain::model::{GameSolution, MixedStrategySolution, PayoffMatrix, SaddlePointResult};
pub use utils::error::{GameError, Result, SolveError};

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

/// Solves a game with the default tolerances and the `minilp` backend.
pub fn solve(matrix: Vec<Vec<f64>>) -> std::result::Result<GameSolution, SolveError> {
    GameSolver::new(MiniLpOracle::new(), SolverConfig::default()).solve_rows(matrix)
}
