//! Terminal UI: the interactive game loop, key mapping, and rendering of the
//! board and final score.

mod app;
pub mod board_widget;
pub mod game_view;
pub mod input;

pub use app::{App, SessionEnd};
pub use game_view::Snapshot;
pub use input::InputEvent;
