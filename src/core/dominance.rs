use crate::domain::model::{Axis, DominanceTrace, Elimination, PayoffMatrix};

/// Iteratively removes dominated rows and columns.
///
/// Rows and columns are tracked by their original index, so the trace and the
/// index maps always speak in the caller's numbering. The input is never
/// modified; the reduced matrix is a fresh copy.
pub fn eliminate_dominated(matrix: &PayoffMatrix) -> DominanceTrace {
    let mut rows: Vec<usize> = (0..matrix.num_rows()).collect();
    let mut cols: Vec<usize> = (0..matrix.num_cols()).collect();
    let mut eliminations = Vec::new();

    loop {
        if let Some((removed, dominated_by)) = find_dominated_row(matrix, &rows, &cols) {
            rows.retain(|&r| r != removed);
            tracing::debug!(removed, dominated_by, "row eliminated");
            eliminations.push(Elimination {
                axis: Axis::Row,
                removed,
                dominated_by,
            });
        } else if let Some((removed, dominated_by)) = find_dominated_col(matrix, &rows, &cols) {
            cols.retain(|&c| c != removed);
            tracing::debug!(removed, dominated_by, "column eliminated");
            eliminations.push(Elimination {
                axis: Axis::Column,
                removed,
                dominated_by,
            });
        } else {
            break;
        }
    }

    DominanceTrace {
        eliminations,
        reduced_matrix: matrix.select(&rows, &cols),
        row_map: rows,
        col_map: cols,
    }
}

/// First `(i, k)` in scan order where row `i` never pays the row player more than row `k`.
fn find_dominated_row(
    matrix: &PayoffMatrix,
    rows: &[usize],
    cols: &[usize],
) -> Option<(usize, usize)> {
    rows.iter().find_map(|&i| {
        rows.iter()
            .find(|&&k| {
                k != i && cols.iter().all(|&j| matrix.get(i, j) <= matrix.get(k, j))
            })
            .map(|&k| (i, k))
    })
}

/// First `(j, k)` in scan order where column `j` never costs the column player less than column `k`.
fn find_dominated_col(
    matrix: &PayoffMatrix,
    rows: &[usize],
    cols: &[usize],
) -> Option<(usize, usize)> {
    cols.iter().find_map(|&j| {
        cols.iter()
            .find(|&&k| {
                k != j && rows.iter().all(|&i| matrix.get(i, j) >= matrix.get(i, k))
            })
            .map(|&k| (j, k))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: &[&[f64]]) -> PayoffMatrix {
        PayoffMatrix::new(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn test_no_dominance_keeps_matrix() {
        let m = matrix(&[&[4.0, 0.0], &[0.0, 4.0]]);
        let trace = eliminate_dominated(&m);

        assert!(trace.eliminations.is_empty());
        assert_eq!(trace.reduced_matrix, m);
        assert_eq!(trace.row_map, vec![0, 1]);
        assert_eq!(trace.col_map, vec![0, 1]);
    }

    #[test]
    fn test_removes_dominated_row() {
        // row 1 <= row 0 everywhere
        let m = matrix(&[&[3.0, 1.0, 4.0], &[1.0, 0.0, 2.0], &[0.0, 5.0, 1.0]]);
        let trace = eliminate_dominated(&m);

        assert_eq!(
            trace.eliminations[0],
            Elimination {
                axis: Axis::Row,
                removed: 1,
                dominated_by: 0
            }
        );
        assert!(!trace.row_map.contains(&1));
    }

    #[test]
    fn test_removes_dominated_column() {
        // column 2 >= column 0 in every row
        let m = matrix(&[&[1.0, 3.0, 2.0], &[3.0, 1.0, 4.0]]);
        let trace = eliminate_dominated(&m);

        assert_eq!(
            trace.eliminations,
            vec![Elimination {
                axis: Axis::Column,
                removed: 2,
                dominated_by: 0
            }]
        );
        assert_eq!(trace.col_map, vec![0, 1]);
        assert_eq!(trace.reduced_matrix, matrix(&[&[1.0, 3.0], &[3.0, 1.0]]));
    }

    #[test]
    fn test_reports_original_indices_after_earlier_removals() {
        let m = matrix(&[
            &[1.0, 2.0, 4.0, 3.0],
            &[4.0, 5.0, 1.0, 0.0],
            &[0.0, 1.0, 3.0, 2.0],
        ]);
        let trace = eliminate_dominated(&m);

        // Row 2 is already dominated by row 0 in the full matrix.
        assert_eq!(
            trace.eliminations[0],
            Elimination {
                axis: Axis::Row,
                removed: 2,
                dominated_by: 0
            }
        );
        // Then c1 (>= c0) and c2 (>= c3) go, leaving original columns 0 and 3.
        assert_eq!(
            &trace.eliminations[1..],
            &[
                Elimination {
                    axis: Axis::Column,
                    removed: 1,
                    dominated_by: 0
                },
                Elimination {
                    axis: Axis::Column,
                    removed: 2,
                    dominated_by: 3
                },
            ]
        );
        assert_eq!(trace.row_map, vec![0, 1]);
        assert_eq!(trace.col_map, vec![0, 3]);
        assert_eq!(trace.reduced_matrix, matrix(&[&[1.0, 3.0], &[4.0, 0.0]]));
    }

    #[test]
    fn test_input_is_untouched() {
        let m = matrix(&[&[3.0, 1.0], &[1.0, 0.0]]);
        let before = m.clone();
        let _ = eliminate_dominated(&m);
        assert_eq!(m, before);
    }
}
