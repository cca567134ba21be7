use super::board::Board;
use super::types::{Player, Position, WinningLine};

/// Rows, then columns, then the two diagonals. The first complete line wins.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board) -> Option<Player> {
    check_win_with_line(board).map(|line| line.player)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    for [a, b, c] in LINES {
        let Some(player) = cells[a].player() else {
            continue;
        };
        if cells[a] == cells[b] && cells[a] == cells[c] {
            return Some(WinningLine::new(player, to_position(a), to_position(c)));
        }
    }
    None
}

fn to_position(idx: usize) -> Position {
    Position::new(idx / 3, idx % 3)
}
