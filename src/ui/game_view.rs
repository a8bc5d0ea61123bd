use crate::game::{Board, GameOutcome, Player, Position, Score};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::{self, player_color};

/// Everything the screen needs, borrowed from the game loop.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub board: &'a Board,
    pub current_player: Player,
    pub cursor: Position,
    /// Number of cells the current player may place on
    pub legal_moves: usize,
    /// Outcome and final score, set only once the game is over
    pub final_result: Option<(GameOutcome, Score)>,
}

pub fn render(frame: &mut Frame, snapshot: &Snapshot<'_>) {
    let board_height = snapshot.board.size() as u16 + 1;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Min(board_height),    // Board
            Constraint::Length(5),            // Status
            Constraint::Length(3),            // Controls
        ])
        .split(frame.area());

    render_header(frame, snapshot, chunks[0]);
    board_widget::render_board(frame, snapshot.board, snapshot.cursor, chunks[1]);
    render_status(frame, snapshot, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, snapshot: &Snapshot<'_>, area: Rect) {
    let (status, color) = if snapshot.final_result.is_some() {
        ("Game Over".to_string(), Color::White)
    } else {
        let player = snapshot.current_player;
        (format!("{}'s turn", player.name()), player_color(player))
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Reversi"));

    frame.render_widget(header, area);
}

/// Lines for the status box: cursor and move count while playing, the final
/// tally once the game is over.
pub fn status_lines(snapshot: &Snapshot<'_>) -> Vec<Line<'static>> {
    let Some((outcome, score)) = snapshot.final_result else {
        return vec![Line::from(format!(
            "Cursor: {}   Legal moves: {}",
            snapshot.cursor, snapshot.legal_moves
        ))];
    };

    let tally = |player: Player| {
        Span::styled(
            format!("{}: {} stones", player.name(), score.of(player)),
            Style::default().fg(player_color(player)).add_modifier(Modifier::BOLD),
        )
    };
    let result = match outcome {
        GameOutcome::Winner(player) => format!("{} wins!", player.name()),
        GameOutcome::Draw => "It's a draw!".to_string(),
    };

    vec![
        Line::from(vec![tally(Player::Player1), Span::raw("   "), tally(Player::Player2)]),
        Line::from(result),
        Line::from("Press any key to exit..."),
    ]
}

fn render_status(frame: &mut Frame, snapshot: &Snapshot<'_>, area: Rect) {
    let status = Paragraph::new(status_lines(snapshot))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(status, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new("←/↑/↓/→: Move  |  Enter/Space: Place  |  Q/Esc/Ctrl-C: Quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
