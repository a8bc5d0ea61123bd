use std::fmt;

use super::Player;
use crate::error::BoardError;

/// Smallest side length that leaves room for the four-stone opening.
pub const MIN_SIZE: usize = 4;

/// Largest side length; columns are labelled with single letters.
pub const MAX_SIZE: usize = 26;

/// The eight unit steps as `(row delta, column delta)`.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Player1,
    Player2,
}

impl Cell {
    /// The player owning this cell, if any
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Player1 => Some(Player::Player1),
            Cell::Player2 => Some(Player::Player2),
        }
    }
}

/// A `(row, column)` coordinate. Row 0 is the top, column 0 the left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

impl fmt::Display for Position {
    /// Same labels as the on-screen headers: column letter, then row number.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.col < 26 {
            write!(f, "{}{}", (b'A' + self.col as u8) as char, self.row)
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

/// Stone counts per player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub player1: usize,
    pub player2: usize,
}

impl Score {
    pub fn of(&self, player: Player) -> usize {
        match player {
            Player::Player1 => self.player1,
            Player::Player2 => self.player2,
        }
    }

    /// The player with more stones, `None` on a tie
    pub fn leader(&self) -> Option<Player> {
        match self.player1.cmp(&self.player2) {
            std::cmp::Ordering::Greater => Some(Player::Player1),
            std::cmp::Ordering::Less => Some(Player::Player2),
            std::cmp::Ordering::Equal => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("illegal move at {0}")]
    IllegalMove(Position),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Row-major, `size * size` entries
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board with the standard four-stone opening in the centre.
    ///
    /// `size` must be even and within [`MIN_SIZE`]..=[`MAX_SIZE`].
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) || size % 2 != 0 {
            return Err(BoardError::InvalidSize(size));
        }

        let mut board = Board {
            size,
            cells: vec![Cell::Empty; size * size],
        };

        let mid = size / 2;
        board.set(Position::new(mid - 1, mid - 1), Cell::Player1);
        board.set(Position::new(mid, mid), Cell::Player1);
        board.set(Position::new(mid - 1, mid), Cell::Player2);
        board.set(Position::new(mid, mid - 1), Cell::Player2);

        Ok(board)
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the position lies on the board
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Get the cell at a position, `None` off the board
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.contains(pos).then(|| self.cell(pos))
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Every position on the board in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    /// Opponent stones that `player` would flip along one direction from
    /// `origin`.
    ///
    /// The walk collects the contiguous run of opponent stones next to
    /// `origin` and keeps it only when a stone of `player` closes the run.
    /// Running into an empty cell or the board edge first yields nothing, and
    /// so does an own stone directly adjacent to `origin`.
    pub fn direction_flips(
        &self,
        origin: Position,
        direction: (isize, isize),
        player: Player,
    ) -> Vec<Position> {
        if !self.contains(origin) {
            return Vec::new();
        }

        let mut run = Vec::new();
        let mut next = self.step(origin, direction);
        while let Some(pos) = next {
            match self.cell(pos).owner() {
                None => return Vec::new(),
                Some(owner) if owner == player => return run,
                Some(_) => run.push(pos),
            }
            next = self.step(pos, direction);
        }

        Vec::new()
    }

    /// All stones `player` would flip by placing at `pos`, over all eight
    /// directions. Rays are disjoint, so there are no duplicates.
    pub fn flips(&self, pos: Position, player: Player) -> Vec<Position> {
        DIRECTIONS
            .iter()
            .flat_map(|&direction| self.direction_flips(pos, direction, player))
            .collect()
    }

    /// Whether `player` may place a stone at `pos`: the cell is empty and at
    /// least one opponent stone flips.
    pub fn can_place(&self, pos: Position, player: Player) -> bool {
        self.get(pos) == Some(Cell::Empty) && !self.flips(pos, player).is_empty()
    }

    /// Whether `player` has a legal placement anywhere on the board
    pub fn has_any_legal_move(&self, player: Player) -> bool {
        self.positions().any(|pos| self.can_place(pos, player))
    }

    /// Place a stone for `player` and flip the captured stones.
    ///
    /// Returns the flipped positions. On an illegal move the board is left
    /// untouched.
    pub fn place(&mut self, pos: Position, player: Player) -> Result<Vec<Position>, MoveError> {
        if self.get(pos) != Some(Cell::Empty) {
            return Err(MoveError::IllegalMove(pos));
        }

        // Evaluated against the board before the new stone lands
        let flipped = self.flips(pos, player);
        if flipped.is_empty() {
            return Err(MoveError::IllegalMove(pos));
        }

        let cell = player.to_cell();
        self.set(pos, cell);
        for &stone in &flipped {
            self.set(stone, cell);
        }

        Ok(flipped)
    }

    /// Number of cells holding `cell`
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Stone counts for both players
    pub fn score(&self) -> Score {
        Score {
            player1: self.count(Cell::Player1),
            player2: self.count(Cell::Player2),
        }
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Caller guarantees `pos` is on the board
    fn cell(&self, pos: Position) -> Cell {
        self.cells[self.index(pos)]
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.size + pos.col
    }

    fn set(&mut self, pos: Position, cell: Cell) {
        let idx = self.index(pos);
        self.cells[idx] = cell;
    }

    fn step(&self, pos: Position, (dr, dc): (isize, isize)) -> Option<Position> {
        let row = pos.row.checked_add_signed(dr)?;
        let col = pos.col.checked_add_signed(dc)?;
        let next = Position::new(row, col);
        self.contains(next).then_some(next)
    }

    /// Build an arbitrary board from rows of `X`, `O` and `.`.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&str]) -> Board {
        let size = rows.len();
        let cells: Vec<Cell> = rows
            .iter()
            .flat_map(|row| {
                assert_eq!(row.len(), size, "board rows must be square");
                row.chars().map(|c| match c {
                    'X' => Cell::Player1,
                    'O' => Cell::Player2,
                    '.' => Cell::Empty,
                    other => panic!("unexpected board character {other:?}"),
                })
            })
            .collect();
        Board { size, cells }
    }
}
