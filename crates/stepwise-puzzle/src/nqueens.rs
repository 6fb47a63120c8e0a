//! Row-by-row N-Queens backtracking.
//!
//! A board is one entry per row: the queen's column, or `None` for an
//! empty row. Every step owns its own copy of the board.

use serde::{Deserialize, Serialize};
use stepwise_ir::sentinel;
use stepwise_ir::types::Square;
use stepwise_ir::validate::{validate_queens, ValidationError};
use stepwise_ir::Trace;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueensStepKind {
    Place,
    Backtrack,
    Solution,
    NoSolution,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueensStep {
    pub kind: QueensStepKind,
    pub description: String,
    #[serde(with = "sentinel::vec")]
    pub board: Vec<Option<usize>>,
    /// Backtracks so far, including this step's.
    pub backtracks: usize,
    pub is_solution: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueensResult {
    pub steps: Vec<QueensStep>,
    pub solved: bool,
    pub backtracks: usize,
}

/// Whether a queen at (`row`, `col`) is attacked by any queen in the rows
/// above it. Rows below `row` are not consulted.
pub fn is_safe(board: &[Option<usize>], row: usize, col: usize) -> bool {
    board[..row].iter().enumerate().all(|(r, placed)| match placed {
        Some(c) => *c != col && c.abs_diff(col) != row - r,
        None => true,
    })
}

struct Solver {
    trace: Trace<QueensStep>,
    backtracks: usize,
}

impl Solver {
    fn record(&mut self, kind: QueensStepKind, description: String, board: &[Option<usize>]) {
        self.trace.record(QueensStep {
            kind,
            description,
            board: board.to_vec(),
            backtracks: self.backtracks,
            is_solution: kind == QueensStepKind::Solution,
        });
    }

    fn place_row(&mut self, board: &mut [Option<usize>], row: usize) -> bool {
        let n = board.len();
        if row == n {
            self.record(
                QueensStepKind::Solution,
                format!("All {n} queens placed. Solution found!"),
                board,
            );
            return true;
        }

        for col in 0..n {
            if !is_safe(board, row, col) {
                continue;
            }
            board[row] = Some(col);
            self.record(
                QueensStepKind::Place,
                format!("Placed queen at row {row}, column {col}."),
                board,
            );
            if self.place_row(board, row + 1) {
                return true;
            }
            board[row] = None;
            self.backtracks += 1;
            self.record(
                QueensStepKind::Backtrack,
                format!("No safe square in row {} below. Removing queen from row {row}, column {col}.", row + 1),
                board,
            );
        }
        false
    }
}

/// Solve N-Queens for `n` in `1..=12`, recording every placement and
/// every backtrack. Sizes with no solution (2 and 3) end in a
/// `NoSolution` step.
pub fn nqueens_solve(n: i64) -> Result<QueensResult, ValidationError> {
    let n = validate_queens(n)?;
    let mut solver = Solver {
        trace: Trace::new(),
        backtracks: 0,
    };
    let mut board = vec![None; n];

    let solved = solver.place_row(&mut board, 0);
    if !solved {
        solver.record(
            QueensStepKind::NoSolution,
            format!("Every placement was exhausted. No solution exists for N = {n}."),
            &board,
        );
    }

    debug!(n, steps = solver.trace.len(), backtracks = solver.backtracks, "n-queens solved");
    Ok(QueensResult {
        steps: solver.trace.into_steps(),
        solved,
        backtracks: solver.backtracks,
    })
}

/// First safe column in the first empty row.
///
/// `None` when the board is full or that row has no safe column, which
/// means the player has to backtrack.
pub fn nqueens_next_move(board: &[Option<usize>]) -> Result<Option<Square>, ValidationError> {
    validate_queens(board.len() as i64)?;
    let Some(row) = board.iter().position(Option::is_none) else {
        return Ok(None);
    };
    Ok((0..board.len())
        .find(|&col| is_safe(board, row, col))
        .map(|col| Square::new(row, col)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_safe_column_and_diagonals() {
        let board = [Some(1), None, None, None];
        assert!(!is_safe(&board, 1, 1));
        assert!(!is_safe(&board, 1, 0));
        assert!(!is_safe(&board, 1, 2));
        assert!(is_safe(&board, 1, 3));
    }

    #[test]
    fn test_is_safe_ignores_lower_rows() {
        let board = [None, None, Some(0)];
        assert!(is_safe(&board, 0, 0));
    }
}
