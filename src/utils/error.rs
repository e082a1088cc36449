use thiserror::Error;

/// Which side of the game a failing linear program belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    Row,
    Column,
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Row => write!(f, "player 1 (rows)"),
            Player::Column => write!(f, "player 2 (columns)"),
        }
    }
}

/// Failures of the solving core. Every variant is fatal to the call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    #[error("Invalid payoff matrix: {reason}")]
    InvalidMatrix { reason: String },

    #[error("Degenerate solution for {player}: strategy sum {sum} is not positive")]
    DegenerateSolution { player: Player, sum: f64 },

    #[error("Inconsistent LP solutions: v1={row_value:.6}, v2={column_value:.6}")]
    InconsistentDuals { row_value: f64, column_value: f64 },

    #[error("Linear program for {player} is infeasible")]
    LpInfeasible { player: Player },

    #[error("Linear program for {player} is unbounded")]
    LpUnbounded { player: Player },

    #[error("Internal solver error: {message}")]
    Internal { message: String },
}

impl SolveError {
    pub fn invalid_matrix(reason: impl Into<String>) -> Self {
        SolveError::InvalidMatrix {
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum GameError {
    #[error(transparent)]
    Solve(#[from] SolveError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported matrix file format: {path}")]
    UnsupportedFormat { path: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Numeric,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GameError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GameError::Solve(SolveError::InvalidMatrix { .. })
            | GameError::CsvError(_)
            | GameError::SerializationError(_)
            | GameError::UnsupportedFormat { .. } => ErrorCategory::Input,
            GameError::Solve(_) => ErrorCategory::Numeric,
            GameError::ConfigError { .. }
            | GameError::ConfigValidationError { .. }
            | GameError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            GameError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            GameError::Solve(SolveError::Internal { .. }) => ErrorSeverity::Critical,
            GameError::IoError(_) => ErrorSeverity::Critical,
            // 數值問題：換個容差設定可能就能解
            GameError::Solve(SolveError::InconsistentDuals { .. })
            | GameError::Solve(SolveError::DegenerateSolution { .. }) => ErrorSeverity::Medium,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GameError::Solve(SolveError::InvalidMatrix { .. }) => {
                "Provide a non-empty rectangular matrix of finite numbers"
            }
            GameError::Solve(SolveError::InconsistentDuals { .. }) => {
                "Rescale the payoffs or relax solver.dual_tolerance"
            }
            GameError::Solve(SolveError::DegenerateSolution { .. })
            | GameError::Solve(SolveError::LpInfeasible { .. })
            | GameError::Solve(SolveError::LpUnbounded { .. }) => {
                "Check the matrix for extreme magnitudes; the LP backend could not produce a usable optimum"
            }
            GameError::Solve(SolveError::Internal { .. }) => "Please report this input as a bug",
            GameError::IoError(_) => "Check that the input file exists and the output path is writable",
            GameError::CsvError(_) => "Use comma separated numbers, one matrix row per line, no header",
            GameError::SerializationError(_) => "Use a JSON array of arrays of numbers",
            GameError::UnsupportedFormat { .. } => "Use a .json or .csv matrix file",
            GameError::ConfigError { .. }
            | GameError::ConfigValidationError { .. }
            | GameError::InvalidConfigValueError { .. } => "Fix the configuration file or CLI flags",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Could not read the payoff matrix: {}", self),
            ErrorCategory::Numeric => format!("The game could not be solved: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
