use crate::game::{Board, Player, Position};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Colour used for a player's stones and name
pub fn player_color(player: Player) -> Color {
    match player {
        Player::Player1 => Color::Cyan,
        Player::Player2 => Color::Magenta,
    }
}

/// Lettered column header, numbered rows, one glyph per cell. The cursor cell
/// is drawn reversed.
pub fn board_lines(board: &Board, cursor: Position) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(board.size() + 1);

    let mut header = vec![Span::raw("   ")];
    for col in 0..board.size() {
        header.push(Span::raw(format!("{} ", (b'A' + col as u8) as char)));
    }
    lines.push(Line::from(header));

    for (row, cells) in board.rows().enumerate() {
        let mut spans = vec![Span::raw(format!("{row:>2} "))];
        for (col, &cell) in cells.iter().enumerate() {
            let (symbol, style) = match cell.owner() {
                Some(player) => (player.symbol(), Style::default().fg(player_color(player))),
                None => ('.', Style::default().fg(Color::DarkGray)),
            };
            let style = if cursor == Position::new(row, col) {
                style.fg(Color::Cyan).add_modifier(Modifier::REVERSED)
            } else {
                style
            };
            spans.push(Span::styled(symbol.to_string(), style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    lines
}

/// Render the board grid into the given area.
pub fn render_board(frame: &mut Frame, board: &Board, cursor: Position, area: Rect) {
    let widget = Paragraph::new(board_lines(board, cursor)).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::MAX_SIZE;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_board_lines_layout() {
        let board = Board::new(4).unwrap();
        let lines = board_lines(&board, Position::new(0, 0));
        let rendered: Vec<String> = lines.iter().map(text).collect();

        assert_eq!(
            rendered,
            vec![
                "   A B C D ",
                " 0 . . . . ",
                " 1 . X O . ",
                " 2 . O X . ",
                " 3 . . . . ",
            ]
        );
    }

    #[test]
    fn test_header_letters_on_largest_board() {
        let board = Board::new(MAX_SIZE).unwrap();
        let header = text(&board_lines(&board, Position::new(0, 0))[0]);
        assert!(header.ends_with("Y Z "));
        assert!(header.chars().all(|c| c == ' ' || c.is_ascii_uppercase()));
        assert!(Board::new(MAX_SIZE + 2).is_err());
    }

    #[test]
    fn test_cursor_cell_is_reversed() {
        let board = Board::new(4).unwrap();
        let lines = board_lines(&board, Position::new(1, 2));

        // row 1: label, then (glyph, gap) pairs
        let glyph = &lines[2].spans[1 + 2 * 2];
        assert_eq!(glyph.content.as_ref(), "O");
        assert!(glyph.style.add_modifier.contains(Modifier::REVERSED));

        let other = &lines[2].spans[1];
        assert!(!other.style.add_modifier.contains(Modifier::REVERSED));
    }
}
