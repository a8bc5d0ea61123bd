use super::{Board, MoveError, Player, Position, Score};
use crate::error::BoardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Board plus whose turn it is. `place` is the only way to change either.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
}

impl GameState {
    /// Create the opening position on a `size × size` board, Player 1 to move
    pub fn new(size: usize) -> Result<Self, BoardError> {
        Ok(GameState {
            board: Board::new(size)?,
            current_player: Player::Player1,
        })
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Stones the current player would flip by placing at `pos`
    pub fn legal_flips(&self, pos: Position) -> Vec<Position> {
        self.board.flips(pos, self.current_player)
    }

    /// Whether the current player may place at `pos`
    pub fn can_place(&self, pos: Position) -> bool {
        self.board.can_place(pos, self.current_player)
    }

    /// All positions the current player may place at, in row-major order
    pub fn legal_moves(&self) -> Vec<Position> {
        self.board
            .positions()
            .filter(|&pos| self.can_place(pos))
            .collect()
    }

    /// Place a stone for the current player and hand the turn over.
    ///
    /// Returns the flipped stones. An illegal move leaves the state untouched.
    pub fn place(&mut self, pos: Position) -> Result<Vec<Position>, MoveError> {
        let flipped = self.board.place(pos, self.current_player)?;
        self.current_player = self.current_player.other();
        Ok(flipped)
    }

    /// Whether `player` could place anywhere, regardless of whose turn it is
    pub fn has_any_legal_move(&self, player: Player) -> bool {
        self.board.has_any_legal_move(player)
    }

    /// The game ends when the board is full or the player to move is stuck.
    /// There is no pass: a stuck player ends the game even if the opponent
    /// could still move.
    pub fn is_game_over(&self) -> bool {
        self.board.is_full() || !self.has_any_legal_move(self.current_player)
    }

    pub fn score(&self) -> Score {
        self.board.score()
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        if !self.is_game_over() {
            return None;
        }

        Some(match self.score().leader() {
            Some(player) => GameOutcome::Winner(player),
            None => GameOutcome::Draw,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    fn state_from(rows: &[&str], current_player: Player) -> GameState {
        GameState {
            board: Board::from_rows(rows),
            current_player,
        }
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::new(8).unwrap();
        assert_eq!(state.current_player(), Player::Player1);
        assert!(!state.is_game_over());
        assert_eq!(state.outcome(), None);
        assert_eq!(state.score(), Score { player1: 2, player2: 2 });
        assert_eq!(state.legal_moves().len(), 4);
    }

    #[test]
    fn test_invalid_size() {
        assert_eq!(GameState::new(5), Err(BoardError::InvalidSize(5)));
    }

    #[test]
    fn test_place_toggles_player() {
        let mut state = GameState::new(4).unwrap();
        let flipped = state.place(Position::new(0, 2)).unwrap();

        assert_eq!(flipped, vec![Position::new(1, 2)]);
        assert_eq!(state.current_player(), Player::Player2);
        assert_eq!(state.board().get(Position::new(0, 2)), Some(Cell::Player1));
        assert_eq!(state.score(), Score { player1: 4, player2: 1 });
    }

    #[test]
    fn test_illegal_place_changes_nothing() {
        let mut state = GameState::new(6).unwrap();
        let before = state.clone();

        // occupied
        assert_eq!(
            state.place(Position::new(2, 2)),
            Err(MoveError::IllegalMove(Position::new(2, 2)))
        );
        // empty, but flips nothing
        assert_eq!(
            state.place(Position::new(0, 0)),
            Err(MoveError::IllegalMove(Position::new(0, 0)))
        );

        assert_eq!(state, before);
        assert_eq!(state.current_player(), before.current_player());
        assert_eq!(state.score(), before.score());
    }

    #[test]
    fn test_alternation_and_conservation_through_a_game() {
        let mut state = GameState::new(10).unwrap();
        let mut placements = 0;

        while !state.is_game_over() {
            let expected = if placements % 2 == 0 {
                Player::Player1
            } else {
                Player::Player2
            };
            assert_eq!(state.current_player(), expected);

            let pos = state.legal_moves()[0];
            let flips = state.legal_flips(pos);
            let flipped = state.place(pos).unwrap();
            assert_eq!(flipped, flips);
            placements += 1;

            let score = state.score();
            assert_eq!(
                score.player1 + score.player2 + state.board().count(Cell::Empty),
                100
            );
            assert_eq!(score.player1 + score.player2, 4 + placements);
        }

        assert!(placements > 0);
        assert!(state.outcome().is_some());
    }

    #[test]
    fn test_reads_are_pure() {
        let state = GameState::new(6).unwrap();
        let pos = Position::new(1, 3);

        let flips = state.legal_flips(pos);
        let can = state.can_place(pos);
        let score = state.score();
        for _ in 0..3 {
            assert_eq!(state.legal_flips(pos), flips);
            assert_eq!(state.can_place(pos), can);
            assert_eq!(state.score(), score);
        }
    }

    #[test]
    fn test_game_over_when_full() {
        let state = state_from(&["XXXX", "XXOO", "OOOO", "OOOO"], Player::Player1);
        assert!(state.is_game_over());
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::Player2)));
    }

    #[test]
    fn test_game_over_on_full_draw() {
        let state = state_from(&["XXXX", "XXXX", "OOOO", "OOOO"], Player::Player2);
        assert_eq!(state.outcome(), Some(GameOutcome::Draw));
    }

    #[test]
    fn test_game_over_when_current_player_stuck() {
        // O to move has nothing to capture, X still could
        let state = state_from(&["X...", ".O..", "....", "...."], Player::Player2);
        assert!(state.has_any_legal_move(Player::Player1));
        assert!(!state.has_any_legal_move(Player::Player2));
        assert!(state.is_game_over());
    }

    #[test]
    fn test_not_over_with_empty_cell_and_legal_move() {
        let state = state_from(&["X...", ".O..", "....", "...."], Player::Player1);
        assert!(!state.is_game_over());
        assert_eq!(state.outcome(), None);
    }
}
