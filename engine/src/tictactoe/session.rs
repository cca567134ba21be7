use crate::log;
use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::error::{InvalidMoveReason, MoveError};
use super::session_rng::SessionRng;
use super::types::{BotType, GameMode, GameStatus, Player, Position, Scores, WinningLine};
use super::win_detector::check_win_with_line;

/// The computer always plays O; the human opens as X.
pub const COMPUTER_PLAYER: Player = Player::O;

/// Turn order, terminal detection and the score tally for a run of rounds.
/// Scores survive `restart` and mode changes.
pub struct GameSession {
    board: Board,
    current_player: Player,
    status: GameStatus,
    scores: Scores,
    mode: GameMode,
    bot_type: BotType,
    rng: SessionRng,
    last_move: Option<Position>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameMode::default(), BotType::default(), SessionRng::from_random())
    }
}

impl GameSession {
    pub fn new(mode: GameMode, bot_type: BotType, rng: SessionRng) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            scores: Scores::default(),
            mode,
            bot_type,
            rng,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn bot_type(&self) -> BotType {
        self.bot_type
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        if self.status.winner().is_none() {
            return None;
        }
        check_win_with_line(&self.board)
    }

    pub fn computer_player(&self) -> Option<Player> {
        match self.mode {
            GameMode::HumanVsComputer => Some(COMPUTER_PLAYER),
            GameMode::HumanVsHuman => None,
        }
    }

    pub fn is_computer_turn(&self) -> bool {
        !self.is_over() && self.computer_player() == Some(self.current_player)
    }

    /// Human move for whoever holds the turn.
    pub fn play_move(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::InvalidMove(InvalidMoveReason::GameOver));
        }
        if self.is_computer_turn() {
            return Err(MoveError::InvalidMove(InvalidMoveReason::NotYourTurn));
        }
        self.apply_move(row, col)
    }

    /// Lets the bot play for the computer player. `Ok(None)` when the search
    /// found nothing to play, which leaves the session untouched.
    pub fn computer_move(&mut self) -> Result<Option<Position>, MoveError> {
        if self.is_over() {
            return Err(MoveError::InvalidMove(InvalidMoveReason::GameOver));
        }
        let Some(computer) = self.computer_player() else {
            return Err(MoveError::InvalidMove(InvalidMoveReason::NoComputerPlayer));
        };
        if computer != self.current_player {
            return Err(MoveError::InvalidMove(InvalidMoveReason::NotYourTurn));
        }

        let input = BotInput::new(self.board, computer);
        let Some(pos) = calculate_move(self.bot_type, input, &mut self.rng) else {
            return Ok(None);
        };
        self.apply_move(pos.row, pos.col)?;
        Ok(Some(pos))
    }

    pub fn restart(&mut self) {
        self.board.reset();
        self.current_player = Player::X;
        self.status = GameStatus::InProgress;
        self.last_move = None;
        log!("Round restarted, score X: {} O: {}", self.scores.x, self.scores.o);
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        log!("Mode set to {}", mode);
        self.restart();
    }

    pub fn toggle_mode(&mut self) -> GameMode {
        let mode = self.mode.toggled();
        self.set_mode(mode);
        mode
    }

    pub fn set_bot_type(&mut self, bot_type: BotType) {
        self.bot_type = bot_type;
        self.restart();
    }

    fn apply_move(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        let player = self.current_player;
        self.board.make_move(row, col, player)?;
        self.last_move = Some(Position::new(row, col));
        log!("{} played ({}, {})", player, row, col);

        self.check_game_over();

        if !self.is_over() {
            self.current_player = player.opponent();
        }
        Ok(())
    }

    fn check_game_over(&mut self) {
        if let Some(winner) = self.board.check_winner() {
            self.status = GameStatus::Won(winner);
            self.scores.record_win(winner);
            log!("{} won, score X: {} O: {}", winner, self.scores.x, self.scores.o);
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
            log!("Round drawn");
        }
    }
}
