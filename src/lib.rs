//! # Reversi TUI
//!
//! Two-player Reversi (Othello) on a square board, played in the terminal.
//! The rules engine is pure and I/O-free; a thin Ratatui layer drives it from
//! keyboard input.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, flips, legality, turn order, game end
//! - [`ui`]: Terminal UI: game loop, key mapping, board rendering
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
