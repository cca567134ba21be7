use super::error::{InvalidMoveReason, MoveError};
use super::types::{Mark, Player, Position};
use super::win_detector::check_win;

pub const BOARD_SIZE: usize = 3;

/// 3x3 grid stored row-major. Cheap to copy, which is what the search relies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; BOARD_SIZE * BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; BOARD_SIZE * BOARD_SIZE]) -> Self {
        Self { cells }
    }

    fn index(row: usize, col: usize) -> Result<usize, MoveError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(MoveError::OutOfRange { row, col });
        }
        Ok(row * BOARD_SIZE + col)
    }

    pub fn make_move(&mut self, row: usize, col: usize, player: Player) -> Result<(), MoveError> {
        let idx = Self::index(row, col)?;
        if self.cells[idx] != Mark::Empty {
            return Err(MoveError::InvalidMove(InvalidMoveReason::CellOccupied));
        }
        self.cells[idx] = player.mark();
        Ok(())
    }

    /// Clears a cell for backtracking. Out-of-range indices are ignored.
    pub fn undo_move(&mut self, row: usize, col: usize) {
        if let Ok(idx) = Self::index(row, col) {
            self.cells[idx] = Mark::Empty;
        }
    }

    pub fn available_moves(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(idx, _)| Position::new(idx / BOARD_SIZE, idx % BOARD_SIZE))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn check_winner(&self) -> Option<Player> {
        check_win(self)
    }

    /// `None` when the indices fall outside the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Mark> {
        Self::index(row, col).ok().map(|idx| self.cells[idx])
    }

    pub fn cells(&self) -> &[Mark; BOARD_SIZE * BOARD_SIZE] {
        &self.cells
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    pub fn reset(&mut self) {
        self.cells = [Mark::Empty; BOARD_SIZE * BOARD_SIZE];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Mark::{Empty as E, O, X};

    #[test]
    fn test_make_move_marks_empty_cell() {
        let mut board = Board::new();
        assert!(board.make_move(1, 2, Player::X).is_ok());
        assert_eq!(board.get(1, 2), Some(Mark::X));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_make_move_on_occupied_cell_fails() {
        let mut board = Board::new();
        board.make_move(0, 0, Player::X).unwrap();
        assert_eq!(
            board.make_move(0, 0, Player::O),
            Err(MoveError::InvalidMove(InvalidMoveReason::CellOccupied))
        );
        assert_eq!(board.get(0, 0), Some(Mark::X));
    }

    #[test]
    fn test_make_move_out_of_range_fails() {
        let mut board = Board::new();
        assert_eq!(
            board.make_move(3, 0, Player::X),
            Err(MoveError::OutOfRange { row: 3, col: 0 })
        );
        assert_eq!(
            board.make_move(0, 7, Player::X),
            Err(MoveError::OutOfRange { row: 0, col: 7 })
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_make_then_undo_restores_board() {
        let mut board = Board::from_cells([X, E, O, E, X, E, O, E, E]);
        let before = board;
        for pos in before.available_moves() {
            board.make_move(pos.row, pos.col, Player::O).unwrap();
            assert_ne!(board, before);
            board.undo_move(pos.row, pos.col);
            assert_eq!(board, before);
        }
    }

    #[test]
    fn test_get_out_of_range_is_none() {
        let board = Board::from_cells([X, E, O, E, X, E, O, E, E]);
        assert_eq!(board.get(0, 2), Some(O));
        assert_eq!(board.get(2, 2), Some(E));
        assert_eq!(board.get(3, 0), None);
        assert_eq!(board.get(0, 3), None);
        assert_eq!(board.get(usize::MAX, usize::MAX), None);
    }

    #[test]
    fn test_available_moves_row_major() {
        let board = Board::from_cells([X, E, O, E, X, E, O, E, E]);
        assert_eq!(
            board.available_moves(),
            vec![
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 2),
                Position::new(2, 1),
                Position::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_is_full() {
        assert!(!Board::new().is_full());
        assert!(!Board::from_cells([X, O, X, X, O, O, O, X, E]).is_full());
        assert!(Board::from_cells([X, O, X, X, O, O, O, X, X]).is_full());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut board = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        board.reset();
        assert_eq!(board, Board::new());
        assert_eq!(board.available_moves().len(), 9);
    }
}
