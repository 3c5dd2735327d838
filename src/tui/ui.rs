//! Stateless rendering of the game screen.
//!
//! Every function here reads the [`App`] and draws; nothing in this
//! module holds state between frames.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::app::{App, Focus, HistoryOrder};
use crate::game::{Cell, Mark, Position};

/// Draws the full screen from the application state.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Board and sidebar
            Constraint::Length(3), // Key help
        ])
        .split(area);

    let title = Paragraph::new("noughts")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, rows[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);

    draw_board(frame, panes[0], app);
    draw_sidebar(frame, panes[1], app);

    let help = Paragraph::new(
        "Tab: focus | Arrows: move/browse | Enter or 1-9: place | o: order | r: restart | q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, rows[2]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let block = pane_block("Board", *app.focus() == Focus::Board);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Three cell rows of height 3 with single-line rules between them.
    let board_area = center_rect(inner, 23, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    draw_cell_row(
        frame,
        rows[0],
        app,
        [Position::TopLeft, Position::TopCenter, Position::TopRight],
    );
    draw_horizontal_rule(frame, rows[1]);
    draw_cell_row(
        frame,
        rows[2],
        app,
        [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    );
    draw_horizontal_rule(frame, rows[3]);
    draw_cell_row(
        frame,
        rows[4],
        app,
        [
            Position::BottomLeft,
            Position::BottomCenter,
            Position::BottomRight,
        ],
    );
}

fn draw_cell_row(frame: &mut Frame, area: Rect, app: &App, positions: [Position; 3]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
        ])
        .split(area);

    draw_cell(frame, cols[0], app, positions[0]);
    draw_vertical_rule(frame, cols[1]);
    draw_cell(frame, cols[2], app, positions[1]);
    draw_vertical_rule(frame, cols[3]);
    draw_cell(frame, cols[4], app, positions[2]);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let cell = app.session().current().get(pos);

    let (symbol, base_style) = match cell {
        // Empty cells show the key that would fill them.
        Cell::Empty => (
            (pos.index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Marked(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Marked(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if pos == *app.cursor() && *app.focus() == Focus::Board {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Middle line of the 3-line cell, so the mark sits centered.
    let text = Paragraph::new(vec![Line::from(""), Line::from(symbol)])
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(text, area);
}

fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    let status = Paragraph::new(app.status_line())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[0]);

    draw_history(frame, chunks[1], app);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let viewed = session.viewed_index();

    let labels: Vec<String> = (0..session.entries().len())
        .map(|k| match session.move_leading_to(k) {
            Some(placed) => format!("{k}. {placed}"),
            None => "0. Go to game start".to_string(),
        })
        .collect();

    let display_rows: Vec<usize> = match app.order() {
        HistoryOrder::OldestFirst => (0..labels.len()).collect(),
        HistoryOrder::NewestFirst => (0..labels.len()).rev().collect(),
    };

    let items: Vec<ListItem> = display_rows
        .iter()
        .map(|&k| {
            // The viewed entry is bolded even when the pane is unfocused.
            let style = if k == viewed {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(labels[k].clone(), style)))
        })
        .collect();

    let title = format!("History ({})", app.order().label());
    let list = List::new(items)
        .block(pane_block(&title, *app.focus() == Focus::History))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(display_rows.iter().position(|&k| k == viewed));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_horizontal_rule(frame: &mut Frame, area: Rect) {
    let rule = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(rule, area);
}

fn draw_vertical_rule(frame: &mut Frame, area: Rect) {
    let bars = vec![Line::from("│"); area.height as usize];
    let rule = Paragraph::new(bars)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(rule, area);
}

fn pane_block(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .border_style(border_style)
}

/// Centers a `width` x `height` rectangle inside `area`, clamping to
/// the available space on small terminals.
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
