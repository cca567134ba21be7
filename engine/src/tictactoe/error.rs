use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    CellOccupied,
    GameOver,
    NotYourTurn,
    NoComputerPlayer,
}

/// Rejected command. State is never mutated when one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    OutOfRange { row: usize, col: usize },
    InvalidMove(InvalidMoveReason),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfRange { row, col } => {
                write!(f, "Position ({}, {}) out of bounds", row, col)
            }
            MoveError::InvalidMove(InvalidMoveReason::CellOccupied) => {
                write!(f, "Cell is already marked")
            }
            MoveError::InvalidMove(InvalidMoveReason::GameOver) => write!(f, "Game is already over"),
            MoveError::InvalidMove(InvalidMoveReason::NotYourTurn) => write!(f, "Not your turn"),
            MoveError::InvalidMove(InvalidMoveReason::NoComputerPlayer) => {
                write!(f, "No computer player in human vs human mode")
            }
        }
    }
}

impl std::error::Error for MoveError {}
