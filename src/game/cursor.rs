use super::Position;

/// Highlighted cell of the interactive layer, always kept on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    position: Position,
    size: usize,
}

impl Cursor {
    /// Cursor on the centre cell of a `size × size` board
    pub fn centered(size: usize) -> Self {
        Cursor {
            position: Position::new(size / 2, size / 2),
            size,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    // Each move is a no-op at the matching edge and reports whether it moved.

    pub fn up(&mut self) -> bool {
        if self.position.row == 0 {
            return false;
        }
        self.position.row -= 1;
        true
    }

    pub fn down(&mut self) -> bool {
        if self.position.row + 1 >= self.size {
            return false;
        }
        self.position.row += 1;
        true
    }

    pub fn left(&mut self) -> bool {
        if self.position.col == 0 {
            return false;
        }
        self.position.col -= 1;
        true
    }

    pub fn right(&mut self) -> bool {
        if self.position.col + 1 >= self.size {
            return false;
        }
        self.position.col += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_centre() {
        assert_eq!(Cursor::centered(10).position(), Position::new(5, 5));
        assert_eq!(Cursor::centered(4).position(), Position::new(2, 2));
    }

    #[test]
    fn test_moves_are_clamped() {
        let mut cursor = Cursor::centered(4);

        assert!(cursor.up());
        assert!(cursor.up());
        assert!(!cursor.up());
        assert_eq!(cursor.position(), Position::new(0, 2));

        assert!(cursor.right());
        assert!(!cursor.right());
        assert_eq!(cursor.position(), Position::new(0, 3));

        for _ in 0..10 {
            cursor.down();
            cursor.left();
        }
        assert_eq!(cursor.position(), Position::new(3, 0));
        assert!(!cursor.down());
        assert!(!cursor.left());
    }
}
