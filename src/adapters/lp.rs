use crate::domain::ports::{Direction, LinearProgram, LpFailure, LpOracle, Relation};
use minilp::{ComparisonOp, OptimizationDirection, Problem, Variable};

/// `LpOracle` backed by the `minilp` simplex implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct MiniLpOracle;

impl MiniLpOracle {
    pub fn new() -> Self {
        Self
    }
}

impl LpOracle for MiniLpOracle {
    fn solve(&self, program: &LinearProgram) -> Result<Vec<f64>, LpFailure> {
        let direction = match program.direction {
            Direction::Minimize => OptimizationDirection::Minimize,
            Direction::Maximize => OptimizationDirection::Maximize,
        };
        let mut problem = Problem::new(direction);

        let vars: Vec<Variable> = program
            .objective
            .iter()
            .map(|&c| problem.add_var(c, (0.0, f64::INFINITY)))
            .collect();

        for constraint in &program.constraints {
            let expr: Vec<(Variable, f64)> = vars
                .iter()
                .copied()
                .zip(constraint.coefficients.iter().copied())
                .filter(|&(_, c)| c != 0.0)
                .collect();
            let op = match constraint.relation {
                Relation::GreaterOrEqual => ComparisonOp::Ge,
                Relation::LessOrEqual => ComparisonOp::Le,
            };
            problem.add_constraint(expr, op, constraint.rhs);
        }

        let solution = problem.solve().map_err(|e| match e {
            minilp::Error::Infeasible => LpFailure::Infeasible,
            minilp::Error::Unbounded => LpFailure::Unbounded,
        })?;

        // minilp 會把單變數約束轉成變數界限，無界時回傳無窮大的解而不是 Unbounded
        let point: Vec<f64> = vars.iter().map(|&v| solution[v]).collect();
        if !solution.objective().is_finite() || point.iter().any(|x| !x.is_finite()) {
            return Err(LpFailure::Unbounded);
        }
        Ok(point)
    }
}
