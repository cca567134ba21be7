use super::board::Board;
use super::session_rng::SessionRng;
use super::types::{BotType, Player, Position};

pub const WIN_SCORE: i32 = 10;
pub const DRAW_SCORE: i32 = 0;

pub struct BotInput {
    pub board: Board,
    pub current_player: Player,
}

impl BotInput {
    pub fn new(board: Board, current_player: Player) -> Self {
        Self {
            board,
            current_player,
        }
    }
}

pub fn calculate_move(
    bot_type: BotType,
    input: BotInput,
    rng: &mut SessionRng,
) -> Option<Position> {
    match bot_type {
        BotType::Minimax => find_best_move(input.board, input.current_player),
        BotType::Random => calculate_random_move(&input, rng),
    }
}

fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Option<Position> {
    rng.pick(&input.board.available_moves())
}

/// Picks the move that maximizes `me`'s guaranteed outcome. Ties go to the
/// first move in row-major order. `None` when the board has no empty cell.
///
/// The board is taken by value, so the caller's board is never touched.
pub fn find_best_move(mut board: Board, me: Player) -> Option<Position> {
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for pos in board.available_moves() {
        if board.make_move(pos.row, pos.col, me).is_err() {
            continue;
        }
        let score = minimax(&mut board, me, false);
        board.undo_move(pos.row, pos.col);

        if score > best_score {
            best_score = score;
            best_move = Some(pos);
        }
    }

    best_move
}

/// Exhaustive minimax without pruning or depth weighting: a win is worth the
/// same whenever it happens. `board` is restored before returning.
pub fn minimax(board: &mut Board, me: Player, is_maximizing: bool) -> i32 {
    if let Some(winner) = board.check_winner() {
        return if winner == me { WIN_SCORE } else { -WIN_SCORE };
    }

    let moves = board.available_moves();
    if moves.is_empty() {
        return DRAW_SCORE;
    }

    let mover = if is_maximizing { me } else { me.opponent() };
    let mut best = if is_maximizing { i32::MIN } else { i32::MAX };

    for pos in moves {
        if board.make_move(pos.row, pos.col, mover).is_err() {
            continue;
        }
        let eval = minimax(board, me, !is_maximizing);
        board.undo_move(pos.row, pos.col);

        best = if is_maximizing { best.max(eval) } else { best.min(eval) };
    }

    best
}
