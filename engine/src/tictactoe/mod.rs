mod board;
mod bot_controller;
mod error;
mod session;
mod session_rng;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board};
pub use bot_controller::{BotInput, DRAW_SCORE, WIN_SCORE, calculate_move, find_best_move, minimax};
pub use error::{InvalidMoveReason, MoveError};
pub use session::{COMPUTER_PLAYER, GameSession};
pub use session_rng::SessionRng;
pub use types::{BotType, GameMode, GameStatus, Mark, Player, Position, Scores, WinningLine};
pub use win_detector::{check_win, check_win_with_line};
