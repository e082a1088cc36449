use crate::domain::model::{PayoffMatrix, SaddlePointResult};
use crate::utils::error::SolveError;

/// Lower value α = max of row minima, upper value β = min of column maxima.
/// A pure equilibrium exists when the two agree within `tolerance`.
pub fn find_saddle_point(
    matrix: &PayoffMatrix,
    tolerance: f64,
) -> Result<SaddlePointResult, SolveError> {
    let row_mins: Vec<f64> = matrix
        .rows()
        .iter()
        .map(|row| row.iter().copied().fold(f64::INFINITY, f64::min))
        .collect();
    let col_maxs: Vec<f64> = (0..matrix.num_cols())
        .map(|j| matrix.column(j).fold(f64::NEG_INFINITY, f64::max))
        .collect();

    let alpha = row_mins.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let beta = col_maxs.iter().copied().fold(f64::INFINITY, f64::min);

    if alpha > beta + tolerance {
        return Err(SolveError::Internal {
            message: format!("lower value {} exceeds upper value {}", alpha, beta),
        });
    }

    if (alpha - beta).abs() <= tolerance {
        // α 與 β 都取自上面的陣列，一定找得到
        let row_index = row_mins.iter().position(|&v| v == alpha);
        let col_index = col_maxs.iter().position(|&v| v == beta);
        tracing::debug!(alpha, beta, ?row_index, ?col_index, "saddle point found");

        Ok(SaddlePointResult {
            exists: true,
            value: Some(alpha),
            lower_value: alpha,
            upper_value: beta,
            row_index,
            col_index,
            explanation: format!(
                "Lower game value (α): {:.2}, upper game value (β): {:.2}. α = β => solution in pure strategies.",
                alpha, beta
            ),
        })
    } else {
        tracing::debug!(alpha, beta, "no saddle point");

        Ok(SaddlePointResult {
            exists: false,
            value: None,
            lower_value: alpha,
            upper_value: beta,
            row_index: None,
            col_index: None,
            explanation: format!(
                "Lower game value (α): {:.2}, upper game value (β): {:.2}. α ≠ β => solution in mixed strategies.",
                alpha, beta
            ),
        })
    }
}
