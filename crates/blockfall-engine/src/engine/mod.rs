//! Game rules and tick-driven state.
//!
//! [`Game`] owns the board, the falling piece, and the run state, and
//! advances them one gravity step per [`tick`](Game::tick).
//!
//! # Game Flow
//!
//! 1. A game starts running with a piece spawned at the top of the well
//! 2. The driver steers the piece (move, rotate, drop) between ticks
//! 3. A piece that can no longer fall locks into the board
//! 4. Full rows clear and the stack compacts; the next piece spawns on
//!    the following tick (immediately when nothing cleared)
//! 5. Repeat until a spawn collides, which ends the game
//!
//! # Example
//!
//! ```
//! use blockfall_engine::Game;
//!
//! let mut game = Game::with_seed(42);
//!
//! game.move_left();
//! game.hard_drop();
//!
//! assert!(game.state().is_running());
//! assert_eq!(game.cleared_lines(), 0);
//! ```

pub use self::game::*;

mod game;
