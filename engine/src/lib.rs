pub mod config;
pub mod logger;
pub mod tictactoe;

pub use tictactoe::{
    Board, BotType, GameMode, GameSession, GameStatus, Mark, MoveError, Player, Position, Scores,
    SessionRng,
};
