//! Stateless UI rendering for the board, timeline and status line.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::app::{App, Pane};
use super::input::CELL_WIDTH;
use gomoku_timeline::{Cell, Player, Pos, BOARD_SIZE};

/// Renders the whole frame.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                       // Title
            Constraint::Min(BOARD_SIZE as u16 + 2),      // Board and timeline
            Constraint::Length(3),                       // Status
        ])
        .split(frame.area());

    // Title
    let title = Paragraph::new("Gomoku Timeline")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(BOARD_SIZE as u16 * CELL_WIDTH + 2),
            Constraint::Min(24),
        ])
        .split(chunks[1]);

    draw_board(frame, panes[0], app);
    draw_timeline(frame, panes[1], app);

    // Status
    let status_text = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, chunks[2]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &mut App) {
    let focused = app.pane() == Pane::Board;
    let block = Block::default()
        .title("Board")
        .borders(Borders::ALL)
        .border_style(border_style(focused));
    let inner = block.inner(area);
    app.set_board_area(inner);
    frame.render_widget(block, area);

    let cursor = app.cursor();
    let mut lines = Vec::with_capacity(BOARD_SIZE);
    for row in 0..BOARD_SIZE {
        let mut spans = Vec::with_capacity(BOARD_SIZE);
        for col in 0..BOARD_SIZE {
            let pos = Pos::new(row, col);
            let (symbol, base_style) = cell_appearance(app.game().board().cell(pos));

            let style = if focused && pos == cursor {
                base_style.bg(Color::White).fg(Color::Black)
            } else {
                base_style
            };

            spans.push(Span::styled(format!(" {symbol} "), style));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn cell_appearance(cell: Cell) -> (char, Style) {
    match cell {
        Cell::Empty => ('·', Style::default().fg(Color::DarkGray)),
        Cell::Occupied(Player::Black) => (
            'X',
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Player::White) => (
            'O',
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    }
}

fn draw_timeline(frame: &mut Frame, area: Rect, app: &mut App) {
    let focused = app.pane() == Pane::Timeline;
    let active = app.game().cursor();

    let items: Vec<ListItem> = (0..app.game().history_len())
        .map(|index| {
            let label = if index == 0 {
                String::from("Go to game start")
            } else {
                format!("Go to move #{index}")
            };
            let item = ListItem::new(label);
            if index == active {
                item.style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                item
            }
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title("Timeline")
                .borders(Borders::ALL)
                .border_style(border_style(focused)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, app.timeline());
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}
