use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::core::{
    board::{BOARD_HEIGHT, BOARD_WIDTH, Board},
    piece::{Piece, ShapeKind},
};

// Pieces enter one column right of center, with the pivot pulled down so
// the shape's lowest cell starts on the top row.
#[expect(clippy::cast_possible_wrap)]
const SPAWN_X: i32 = BOARD_WIDTH as i32 / 2 + 1;
#[expect(clippy::cast_possible_wrap)]
const TOP_ROW: i32 = BOARD_HEIGHT as i32 - 1;

/// Run state of a [`Game`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameState {
    Running,
    Paused,
    GameOver,
}

/// A complete game: the well, the falling piece, and the rules that move
/// them.
///
/// All operations are total. Blocked moves report `false` and change
/// nothing; a spawn that collides puts the game into
/// [`GameState::GameOver`] rather than failing. While paused or after game
/// over every gameplay mutation is a no-op, so a driver can forward input
/// unconditionally.
///
/// Gravity is externally driven: the game advances only when the driver
/// calls [`tick`](Self::tick).
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    falling: Piece,
    fall_x: i32,
    fall_y: i32,
    cleared_lines: usize,
    state: GameState,
    rng: Pcg32,
}

impl Game {
    /// Creates a running game seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Creates a running game with a fixed seed, for a reproducible piece
    /// sequence.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        let mut game = Self {
            board: Board::EMPTY,
            falling: Piece::empty(),
            fall_x: 0,
            fall_y: 0,
            cleared_lines: 0,
            state: GameState::Running,
            rng: Pcg32::seed_from_u64(seed),
        };
        game.try_spawn_piece();
        game
    }

    /// Starts a new game, discarding any game in progress.
    ///
    /// Everything resets in one step: the board empties, the line counter
    /// zeroes, the state returns to running, and a fresh piece spawns. The
    /// piece sequence continues from the current random stream.
    pub fn start(&mut self) {
        self.board = Board::EMPTY;
        self.falling = Piece::empty();
        self.cleared_lines = 0;
        self.state = GameState::Running;
        self.try_spawn_piece();
    }

    /// Attempts to make `piece` at pivot `(x, y)` the falling pose.
    ///
    /// Rejects when the game is not running or any cell would leave the
    /// board or land on an occupied cell; a rejected move changes nothing.
    /// Every movement and rotation commits through here.
    pub fn try_move(&mut self, piece: Piece, x: i32, y: i32) -> bool {
        if !self.state.is_running() || !self.board.fits(piece, x, y) {
            return false;
        }
        self.falling = piece;
        self.fall_x = x;
        self.fall_y = y;
        true
    }

    /// Moves the falling piece one column left.
    pub fn move_left(&mut self) -> bool {
        !self.falling.is_empty() && self.try_move(self.falling, self.fall_x - 1, self.fall_y)
    }

    /// Moves the falling piece one column right.
    pub fn move_right(&mut self) -> bool {
        !self.falling.is_empty() && self.try_move(self.falling, self.fall_x + 1, self.fall_y)
    }

    /// Rotates the falling piece 90° counterclockwise in place.
    pub fn rotate_left(&mut self) -> bool {
        !self.falling.is_empty()
            && self.try_move(self.falling.rotated_left(), self.fall_x, self.fall_y)
    }

    /// Rotates the falling piece 90° clockwise in place.
    pub fn rotate_right(&mut self) -> bool {
        !self.falling.is_empty()
            && self.try_move(self.falling.rotated_right(), self.fall_x, self.fall_y)
    }

    /// Drops the falling piece one row, locking it when the move is
    /// blocked.
    pub fn one_line_down(&mut self) {
        if !self.state.is_running() || self.falling.is_empty() {
            return;
        }
        if !self.try_move(self.falling, self.fall_x, self.fall_y - 1) {
            self.lock_piece();
        }
    }

    /// Drops the falling piece straight down and locks it.
    pub fn hard_drop(&mut self) {
        if !self.state.is_running() || self.falling.is_empty() {
            return;
        }
        while self.try_move(self.falling, self.fall_x, self.fall_y - 1) {}
        self.lock_piece();
    }

    /// Advances the game one gravity step.
    ///
    /// On the step after a line clear no piece is falling, so this spawns
    /// the next piece instead of moving anything.
    pub fn tick(&mut self) {
        if !self.state.is_running() {
            return;
        }
        if self.falling.is_empty() {
            self.try_spawn_piece();
        } else {
            self.one_line_down();
        }
    }

    /// Pauses a running game. Board, piece, and counters stay untouched.
    pub fn pause(&mut self) {
        if self.state.is_running() {
            self.state = GameState::Paused;
        }
    }

    /// Resumes a paused game.
    pub fn resume(&mut self) {
        if self.state.is_paused() {
            self.state = GameState::Running;
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The piece in play, or [`Piece::empty`] on the step after a line
    /// clear and after game over.
    #[must_use]
    pub fn falling_piece(&self) -> Piece {
        self.falling
    }

    /// Pivot position of the falling piece as `(x, y)`.
    #[must_use]
    pub fn falling_pos(&self) -> (i32, i32) {
        (self.fall_x, self.fall_y)
    }

    /// Total rows cleared since the last [`start`](Self::start).
    #[must_use]
    pub fn cleared_lines(&self) -> usize {
        self.cleared_lines
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Writes the falling piece into the board and clears full rows.
    ///
    /// When rows cleared, the respawn is deferred to the next tick so the
    /// spawn always tests against the compacted stack.
    fn lock_piece(&mut self) {
        self.board.fill_piece(self.falling, self.fall_x, self.fall_y);
        self.falling = Piece::empty();
        let cleared = self.board.clear_lines();
        if cleared > 0 {
            self.cleared_lines += cleared;
        } else {
            self.try_spawn_piece();
        }
    }

    /// Draws the next shape and places it at the spawn position. A spawn
    /// that does not fit ends the game and leaves the board as it was.
    fn try_spawn_piece(&mut self) {
        let kind: ShapeKind = self.rng.random();
        let piece = Piece::new(kind);
        if !self.try_move(piece, SPAWN_X, TOP_ROW + piece.min_y()) {
            self.falling = Piece::empty();
            self.state = GameState::GameOver;
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
