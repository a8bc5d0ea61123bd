//! Core Reversi rules: board representation, flip computation, move legality,
//! turn alternation and end-of-game detection. No I/O happens here.

mod board;
mod cursor;
mod player;
mod state;

pub use board::{Board, Cell, MoveError, Position, Score, DIRECTIONS, MAX_SIZE, MIN_SIZE};
pub use cursor::Cursor;
pub use player::Player;
pub use state::{GameOutcome, GameState};
