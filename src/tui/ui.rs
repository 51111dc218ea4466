//! Stateless rendering: WOPR console on the left, board on the right.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use wopr::{Player, Position, Square, TurnPhase};

use super::app::App;

const ROWS: [[Position; 3]; 3] = [
    [Position::TopLeft, Position::Top, Position::TopRight],
    [Position::Left, Position::Center, Position::Right],
    [Position::BottomLeft, Position::Bottom, Position::BottomRight],
];

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Console + board
            Constraint::Length(3), // Status
        ])
        .split(frame.area());

    let title = Paragraph::new("WOPR - Shall we play a game?")
        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    draw_console(frame, body[0], app.session().messages());
    draw_board(frame, body[1], app);

    let keys = "arrows/1-9 move · enter play · r new game · q quit";
    let status = Paragraph::new(vec![
        Line::from(app.status_message().to_string()),
        Line::from(Span::styled(keys, Style::default().fg(Color::DarkGray))),
    ])
    .style(Style::default().fg(Color::Yellow))
    .alignment(Alignment::Center);
    frame.render_widget(status, chunks[2]);
}

fn draw_console(frame: &mut Frame, area: Rect, messages: &[String]) {
    let visible = usize::from(area.height.saturating_sub(3));
    let start = messages.len().saturating_sub(visible);

    let mut lines: Vec<Line> = messages[start..]
        .iter()
        .map(|m| {
            Line::from(vec![
                Span::styled("> ", Style::default().fg(Color::DarkGray)),
                Span::raw(m.as_str()),
            ])
        })
        .collect();
    lines.push(Line::from("_"));

    let console = Paragraph::new(lines)
        .style(Style::default().fg(Color::Green))
        .wrap(Wrap { trim: false })
        .block(Block::default().title("WOPR").borders(Borders::ALL));
    frame.render_widget(console, area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 23, 11);
    let show_cursor = app.session().phase() == TurnPhase::AwaitingHuman;

    let mut lines = Vec::new();
    for (i, row) in ROWS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(Span::styled(
                "───────┼───────┼───────",
                Style::default().fg(Color::DarkGray),
            )));
        }
        lines.push(Line::from(""));
        let mut spans = Vec::new();
        for (j, pos) in row.iter().enumerate() {
            if j > 0 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
            let highlighted = show_cursor && *pos == app.cursor();
            spans.push(cell_span(app.session().board().get(*pos), *pos, highlighted));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), board_area);
}

fn cell_span(square: Square, pos: Position, highlighted: bool) -> Span<'static> {
    let (text, style) = match square {
        Square::Empty => (
            format!("   {}   ", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "   X   ".to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "   O   ".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };
    let style = if highlighted {
        style.bg(Color::White).fg(Color::Black)
    } else {
        style
    };
    Span::styled(text, style)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
