use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Minimize,
    Maximize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    GreaterOrEqual,
    LessOrEqual,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinearConstraint {
    pub coefficients: Vec<f64>,
    pub relation: Relation,
    pub rhs: f64,
}

/// `direction cᵗx` subject to `constraints`, with every variable `x ≥ 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearProgram {
    pub direction: Direction,
    pub objective: Vec<f64>,
    pub constraints: Vec<LinearConstraint>,
}

impl LinearProgram {
    pub fn num_vars(&self) -> usize {
        self.objective.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LpFailure {
    Infeasible,
    Unbounded,
}

/// Pluggable linear-program backend.
pub trait LpOracle: Send + Sync {
    /// Returns an optimal point with one entry per objective coefficient.
    fn solve(&self, program: &LinearProgram) -> std::result::Result<Vec<f64>, LpFailure>;
}
