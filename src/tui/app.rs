//! Application state for the interactive game screen.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use tracing::{debug, info, instrument};

use crate::config::Config;
use crate::game::{Position, Session};

/// Which pane keyboard input is directed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 board grid.
    #[default]
    Board,
    /// The move-history list.
    History,
}

impl Focus {
    /// Returns the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// Display order of the move-history list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryOrder {
    /// Oldest entry at the top.
    #[default]
    OldestFirst,
    /// Newest entry at the top.
    NewestFirst,
}

impl HistoryOrder {
    /// Flips the order.
    pub fn toggle(self) -> Self {
        match self {
            HistoryOrder::OldestFirst => HistoryOrder::NewestFirst,
            HistoryOrder::NewestFirst => HistoryOrder::OldestFirst,
        }
    }

    /// Label shown in the history pane title.
    pub fn label(self) -> &'static str {
        match self {
            HistoryOrder::OldestFirst => "▼ oldest first",
            HistoryOrder::NewestFirst => "▲ newest first",
        }
    }
}

/// Event-loop directive returned from [`App::handle_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Keep running.
    Stay,
    /// Leave the application.
    Quit,
}

/// State behind the interactive screen.
///
/// Everything on screen is either held here or derived from the
/// session on demand. The status line in particular is never stored;
/// it is recomputed from the viewed snapshot on every frame.
#[derive(Debug, Getters)]
pub struct App {
    /// The engine state being played and browsed.
    session: Session,
    /// Board cell the cursor is on.
    cursor: Position,
    /// Pane that receives movement keys.
    focus: Focus,
    /// Display order of the history list.
    order: HistoryOrder,
}

impl App {
    /// Creates the application state from resolved preferences.
    #[instrument(skip(config))]
    pub fn new(config: &Config) -> Self {
        let order = if *config.newest_first() {
            HistoryOrder::NewestFirst
        } else {
            HistoryOrder::OldestFirst
        };
        info!(?order, "Starting session");
        Self {
            session: Session::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            order,
        }
    }

    /// Status line for the viewed snapshot: the winner, a draw, or
    /// whose turn it is.
    pub fn status_line(&self) -> String {
        if let Some(winner) = self.session.winner() {
            format!("Winner: {winner}")
        } else if crate::game::is_full(self.session.current()) {
            "Draw".to_string()
        } else {
            format!("Next player: {}", self.session.to_move())
        }
    }

    /// Routes one key press.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Transition {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Transition::Quit,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('o') => {
                self.order = self.order.toggle();
                debug!(order = ?self.order, "History order toggled");
            }
            KeyCode::Tab => self.focus = self.focus.toggle(),
            // Digit keys place directly, whatever the focus.
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(digit) = c.to_digit(10)
                    && (1..=9).contains(&digit)
                    && let Some(pos) = Position::from_index(digit as usize - 1)
                {
                    self.place_at(pos);
                }
            }
            _ => match self.focus {
                Focus::Board => self.handle_board_key(key.code),
                Focus::History => self.handle_history_key(key.code),
            },
        }
        Transition::Stay
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = super::input::move_cursor(self.cursor, code);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.place_at(self.cursor),
            _ => {}
        }
    }

    fn handle_history_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.history_step(true),
            KeyCode::Down => self.history_step(false),
            _ => {}
        }
    }

    /// Places the mark whose turn it is. Declined placements leave the
    /// session untouched, matching [`Session::apply_move`].
    #[instrument(skip(self))]
    fn place_at(&mut self, pos: Position) {
        self.session = self.session.apply_move(pos);
    }

    /// Time-travels one entry towards the top or bottom of the list,
    /// honoring the display order. At either end the viewed entry
    /// stays put.
    fn history_step(&mut self, towards_top: bool) {
        let towards_newer = match self.order {
            HistoryOrder::OldestFirst => !towards_top,
            HistoryOrder::NewestFirst => towards_top,
        };
        let viewed = self.session.viewed_index();
        let target = if towards_newer {
            viewed + 1
        } else if viewed > 0 {
            viewed - 1
        } else {
            return;
        };
        if target < self.session.entries().len() {
            debug!(index = target, "Time-traveling");
            self.session = self.session.jump_to(target);
        }
    }

    /// Starts the game over with a fresh session.
    #[instrument(skip(self))]
    fn restart(&mut self) {
        info!("Restarting session");
        self.session = Session::new();
        self.cursor = Position::Center;
    }
}
