//! Knight's Tour by Warnsdorff's rule: always jump to the square with
//! the fewest onward moves.

use serde::{Deserialize, Serialize};
use stepwise_ir::limits::BOARD_SIZE;
use stepwise_ir::types::Square;
use stepwise_ir::validate::{validate_board_cells, validate_square, ValidationError};
use tracing::debug;

/// Knight offsets, in the order candidates are tried. Ties on degree go
/// to the earliest offset.
const MOVES: [(isize, isize); 8] = [
    (1, 2),
    (1, -2),
    (2, 1),
    (2, -1),
    (-1, 2),
    (-1, -2),
    (-2, 1),
    (-2, -1),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnightTourResult {
    /// Squares in visiting order, starting square first.
    pub path: Vec<Square>,
    /// True when the path covers all 64 squares.
    pub complete: bool,
    pub message: String,
}

/// Visited set for one tour.
struct Board {
    visited: [[bool; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    fn empty() -> Self {
        Self {
            visited: [[false; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Row-major cells where `-1` is unvisited and anything else is visited.
    fn from_cells(cells: &[i64]) -> Self {
        let mut board = Self::empty();
        for (i, cell) in cells.iter().enumerate().take(BOARD_SIZE * BOARD_SIZE) {
            board.visited[i / BOARD_SIZE][i % BOARD_SIZE] = *cell != -1;
        }
        board
    }

    fn visit(&mut self, square: Square) {
        self.visited[square.row][square.col] = true;
    }

    fn is_open(&self, square: Square) -> bool {
        !self.visited[square.row][square.col]
    }

    fn open_moves(&self, from: Square) -> impl Iterator<Item = Square> + '_ {
        MOVES
            .iter()
            .filter_map(move |&(dr, dc)| jump(from, dr, dc))
            .filter(move |sq| self.is_open(*sq))
    }

    fn degree(&self, square: Square) -> usize {
        self.open_moves(square).count()
    }

    /// Open neighbor of `from` with the strictly smallest degree.
    fn warnsdorff(&self, from: Square) -> Option<Square> {
        let mut best: Option<(Square, usize)> = None;
        for candidate in self.open_moves(from) {
            let degree = self.degree(candidate);
            if best.map_or(true, |(_, d)| degree < d) {
                best = Some((candidate, degree));
            }
        }
        best.map(|(square, _)| square)
    }
}

fn jump(from: Square, dr: isize, dc: isize) -> Option<Square> {
    let row = from.row.checked_add_signed(dr)?;
    let col = from.col.checked_add_signed(dc)?;
    (row < BOARD_SIZE && col < BOARD_SIZE).then(|| Square::new(row, col))
}

/// Run a tour from (`start_row`, `start_col`). The heuristic may strand
/// the knight early; the partial path is still returned.
pub fn knights_tour_solve(start_row: i64, start_col: i64) -> Result<KnightTourResult, ValidationError> {
    let start = validate_square(start_row, start_col)?;
    let total = BOARD_SIZE * BOARD_SIZE;

    let mut board = Board::empty();
    board.visit(start);
    let mut path = vec![start];
    let mut current = start;

    while path.len() < total {
        let Some(next) = board.warnsdorff(current) else {
            break;
        };
        board.visit(next);
        path.push(next);
        current = next;
    }

    let complete = path.len() == total;
    let message = if complete {
        format!("Tour complete: all {total} squares visited.")
    } else {
        format!("Knight is stuck after visiting {} of {total} squares.", path.len())
    };
    debug!(start_row, start_col, visited = path.len(), complete, "knight's tour finished");

    Ok(KnightTourResult {
        path,
        complete,
        message,
    })
}

/// Warnsdorff's choice from the knight's current square on a partly
/// visited board. `None` when every reachable square is visited.
pub fn knights_tour_next_move(
    cells: &[i64],
    current_row: i64,
    current_col: i64,
) -> Result<Option<Square>, ValidationError> {
    validate_board_cells(cells.len())?;
    let current = validate_square(current_row, current_col)?;
    Ok(Board::from_cells(cells).warnsdorff(current))
}
