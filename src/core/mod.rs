pub mod dominance;
pub mod engine;
pub mod mixed;
pub mod narration;
pub mod saddle;
pub mod solver;

pub use crate::domain::model::{GameSolution, PayoffMatrix};
pub use crate::domain::ports::{LpOracle, Storage};
pub use crate::utils::error::{Result, SolveError};
