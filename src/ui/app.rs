use crate::error::BoardError;
use crate::game::{Cursor, GameState, Position, Score};
use crossterm::event::KeyEvent;
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::{debug, info};

use super::game_view::{self, Snapshot};
use super::input::{self, InputEvent};

/// How a session finished, with the board's score at that moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The game reached its end and the final screen was acknowledged
    Completed(Score),
    /// The player quit mid-game
    Interrupted(Score),
}

impl SessionEnd {
    pub fn score(&self) -> Score {
        match *self {
            SessionEnd::Completed(score) | SessionEnd::Interrupted(score) => score,
        }
    }
}

pub struct App {
    game_state: GameState,
    cursor: Cursor,
    ended: Option<SessionEnd>,
}

impl App {
    pub fn new(size: usize) -> Result<Self, BoardError> {
        let game_state = GameState::new(size)?;
        info!(size, "new game");
        Ok(App {
            game_state,
            cursor: Cursor::centered(size),
            ended: None,
        })
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn cursor(&self) -> Position {
        self.cursor.position()
    }

    /// Set once the session is finished
    pub fn session_end(&self) -> Option<SessionEnd> {
        self.ended
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<SessionEnd>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            let snapshot = self.snapshot();
            terminal
                .draw(|f| game_view::render(f, &snapshot))
                .map_err(Into::<io::Error>::into)?;

            if let Some(end) = self.ended {
                return Ok(end);
            }

            if let Some(key) = input::next_key()? {
                self.handle_key(key);
            }
        }
    }

    /// Read-only view handed to the renderer
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            board: self.game_state.board(),
            current_player: self.game_state.current_player(),
            cursor: self.cursor.position(),
            legal_moves: self.game_state.legal_moves().len(),
            final_result: self
                .game_state
                .outcome()
                .map(|outcome| (outcome, self.game_state.score())),
        }
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match InputEvent::from_key(key) {
            Some(event) => self.handle_event(event),
            // Any key at all acknowledges the final screen
            None if self.game_state.is_game_over() => self.handle_event(InputEvent::Confirm),
            None => {}
        }
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        if self.ended.is_some() {
            return;
        }

        match event {
            _ if self.game_state.is_game_over() => {
                self.ended = Some(SessionEnd::Completed(self.game_state.score()));
            }
            InputEvent::Interrupt => {
                let score = self.game_state.score();
                info!(
                    player1 = score.player1,
                    player2 = score.player2,
                    "game interrupted"
                );
                self.ended = Some(SessionEnd::Interrupted(score));
            }
            InputEvent::MoveCursorUp => {
                self.cursor.up();
            }
            InputEvent::MoveCursorDown => {
                self.cursor.down();
            }
            InputEvent::MoveCursorLeft => {
                self.cursor.left();
            }
            InputEvent::MoveCursorRight => {
                self.cursor.right();
            }
            InputEvent::Confirm => self.place_stone(),
        }
    }

    /// Place a stone at the cursor. Illegal moves are ignored.
    fn place_stone(&mut self) {
        let pos = self.cursor.position();
        let player = self.game_state.current_player();

        match self.game_state.place(pos) {
            Ok(flipped) => {
                debug!(player = player.name(), %pos, flipped = flipped.len(), "stone placed");
                if self.game_state.is_game_over() {
                    let score = self.game_state.score();
                    info!(
                        player1 = score.player1,
                        player2 = score.player2,
                        "game over"
                    );
                }
            }
            Err(err) => debug!(player = player.name(), %err, "move rejected"),
        }
    }
}
