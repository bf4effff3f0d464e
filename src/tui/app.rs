//! Application state and logic.

use super::input;
use crossterm::event::KeyCode;
use gomoku_timeline::{Game, Pos, BOARD_SIZE};
use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use tracing::debug;

const OPENING_HINT: &str = "Black to move. Arrows move, Enter places, Tab opens the timeline.";

/// Which pane owns navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    /// The board grid.
    Board,
    /// The move timeline list.
    Timeline,
}

/// Main application state.
pub struct App {
    game: Game,
    cursor: Pos,
    pane: Pane,
    timeline: ListState,
    status_message: String,
    board_area: Option<Rect>,
}

impl App {
    /// Creates a new application with the cursor on the center cell.
    pub fn new() -> Self {
        let mut timeline = ListState::default();
        timeline.select(Some(0));
        Self {
            game: Game::new(),
            cursor: Pos::new(BOARD_SIZE / 2, BOARD_SIZE / 2),
            pane: Pane::Board,
            timeline,
            status_message: OPENING_HINT.to_string(),
            board_area: None,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Board cell under the keyboard cursor.
    pub fn cursor(&self) -> Pos {
        self.cursor
    }

    /// Pane that currently owns navigation keys.
    pub fn pane(&self) -> Pane {
        self.pane
    }

    /// Timeline list state for stateful rendering.
    pub fn timeline(&mut self) -> &mut ListState {
        &mut self.timeline
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Records where the board grid was drawn, for mouse hit-testing.
    pub fn set_board_area(&mut self, area: Rect) {
        self.board_area = Some(area);
    }

    /// Handles a key press. Returns true when the app should exit.
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Tab => self.toggle_pane(),
            KeyCode::Char('[') => self.step_back(),
            KeyCode::Char(']') => self.step_forward(),
            key => match self.pane {
                Pane::Board => self.handle_board_key(key),
                Pane::Timeline => self.handle_timeline_key(key),
            },
        }
        false
    }

    /// Handles a left click at terminal coordinates.
    pub fn handle_click(&mut self, column: u16, row: u16) {
        let Some(area) = self.board_area else {
            return;
        };
        if let Some(pos) = input::cell_at(area, column, row) {
            self.pane = Pane::Board;
            self.cursor = pos;
            self.place(pos);
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game = Game::new();
        self.timeline.select(Some(0));
        self.status_message = OPENING_HINT.to_string();
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            _ => {}
        }
    }

    fn handle_timeline_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up => self.select_offset(-1),
            KeyCode::Down => self.select_offset(1),
            KeyCode::Enter => {
                if let Some(selected) = self.timeline.selected() {
                    self.jump(selected);
                }
            }
            _ => {}
        }
    }

    fn place(&mut self, pos: Pos) {
        debug!(%pos, "Requesting move");

        match self.game.request_move(pos) {
            Ok(cursor) => {
                self.timeline.select(Some(cursor));
                let status = self.game.status();
                self.status_message = if status.winner.is_some() {
                    format!("{status}! Press 'r' to restart or 'q' to quit.")
                } else {
                    status.to_string()
                };
            }
            Err(e) => {
                debug!(error = %e, "Move rejected");
                self.status_message = format!("Invalid move: {}. Try again.", e);
            }
        }
    }

    fn jump(&mut self, index: usize) {
        match self.game.jump_to(index) {
            Ok(()) => {
                self.status_message = self.game.status().to_string();
            }
            Err(e) => {
                debug!(error = %e, "Jump rejected");
                self.status_message = format!("Cannot jump: {}", e);
            }
        }
    }

    fn step_back(&mut self) {
        let target = self.game.cursor().saturating_sub(1);
        self.timeline.select(Some(target));
        self.jump(target);
    }

    fn step_forward(&mut self) {
        let target = (self.game.cursor() + 1).min(self.game.history_len() - 1);
        self.timeline.select(Some(target));
        self.jump(target);
    }

    fn select_offset(&mut self, delta: i32) {
        let last = self.game.history_len() as i32 - 1;
        let current = self.timeline.selected().unwrap_or(0) as i32;
        let next = (current + delta).clamp(0, last) as usize;
        self.timeline.select(Some(next));
    }

    fn toggle_pane(&mut self) {
        self.pane = match self.pane {
            Pane::Board => Pane::Timeline,
            Pane::Timeline => Pane::Board,
        };
    }
}
