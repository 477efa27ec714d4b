use super::job::{Job, JobPoll};
use crate::cards::{Card, Rank, Suit};
use crate::hand::{Flop, HoleCards};
use crate::simulation::{Method, SimulationConfig, SimulationError, SimulationResult, Simulator};
use std::time::Duration;

/// Two hole cards then three flop cards.
pub const MAX_SELECTED: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Picker,
    Menu,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    ToggleCard,
    Run,
    Cancel,
    Clear,
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    /// Grid cursor as (suit row, rank column).
    pub cursor: (usize, usize),
    pub config: SimulationConfig,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg_trials: u64,
    pub cfg_threads: Option<usize>,
    pub cfg_method: Method,
    selected: Vec<Card>,
    job: Option<Job>,
    last: Option<(HoleCards, Flop, SimulationResult)>,
    status: Option<String>,
    help_open: bool,
    ticks: usize,
}

impl Default for AppState {
    fn default() -> Self {
        let config = SimulationConfig::default();
        Self {
            scene: Scene::Picker,
            cursor: (0, 0),
            menu_index: 0,
            cfg_trials: config.trials,
            cfg_threads: config.threads,
            cfg_method: config.method,
            config,
            selected: Vec::with_capacity(MAX_SELECTED),
            job: None,
            last: None,
            status: None,
            help_open: false,
            ticks: 0,
        }
    }
}

impl AppState {
    pub const GRID_ROWS: usize = Suit::ALL.len();
    pub const GRID_COLS: usize = Rank::ALL.len();

    /// Card shown at a grid position.
    pub fn card_at(row: usize, col: usize) -> Card {
        Card::new(Rank::ALL[col % Self::GRID_COLS], Suit::ALL[row % Self::GRID_ROWS])
    }

    pub fn cursor_card(&self) -> Card {
        Self::card_at(self.cursor.0, self.cursor.1)
    }

    pub fn selected(&self) -> &[Card] {
        &self.selected
    }

    pub fn hole_selection(&self) -> &[Card] {
        &self.selected[..self.selected.len().min(2)]
    }

    pub fn flop_selection(&self) -> &[Card] {
        self.selected.get(2..).unwrap_or(&[])
    }

    /// Position of `card` in the selection, if chosen.
    pub fn selection_index(&self, card: Card) -> Option<usize> {
        self.selected.iter().position(|&c| c == card)
    }

    pub fn last_result(&self) -> Option<&(HoleCards, Flop, SimulationResult)> {
        self.last.as_ref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn running(&self) -> bool {
        self.job.is_some()
    }

    pub fn running_for(&self) -> Option<Duration> {
        self.job.as_ref().map(Job::elapsed)
    }

    pub fn spinner(&self) -> char {
        const FRAMES: [char; 4] = ['|', '/', '-', '\\'];
        FRAMES[self.ticks % FRAMES.len()]
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    fn move_cursor(&mut self, drow: isize, dcol: isize) {
        let (row, col) = self.cursor;
        self.cursor = (
            (row as isize + drow).rem_euclid(Self::GRID_ROWS as isize) as usize,
            (col as isize + dcol).rem_euclid(Self::GRID_COLS as isize) as usize,
        );
    }

    /// Select or deselect the card under the cursor.
    pub fn toggle_card(&mut self) -> bool {
        if self.running() {
            return false;
        }
        let card = self.cursor_card();
        if let Some(i) = self.selection_index(card) {
            self.selected.remove(i);
            self.status = None;
            return true;
        }
        if self.selected.len() >= MAX_SELECTED {
            self.status = Some(format!("Already {MAX_SELECTED} cards; deselect one first"));
            return false;
        }
        self.selected.push(card);
        self.status = None;
        true
    }

    pub fn clear_selection(&mut self) {
        if self.running() {
            return;
        }
        self.selected.clear();
        self.status = None;
    }

    /// Start a simulation for the current selection.
    pub fn start_run(&mut self) -> bool {
        if self.running() {
            return false;
        }
        if self.selected.len() != MAX_SELECTED {
            self.status = Some(format!("Select 2 hole cards and 3 flop cards ({}/5)", self.selected.len()));
            return false;
        }
        match self.build_simulator() {
            Ok((sim, hole, flop)) => {
                self.job = Some(Job::spawn(sim, hole, flop));
                self.status = Some(format!("Running {}...", self.config.method.label()));
                true
            }
            Err(e) => {
                self.status = Some(format!("Error: {e}"));
                false
            }
        }
    }

    fn build_simulator(&self) -> Result<(Simulator, HoleCards, Flop), SimulationError> {
        let hole = HoleCards::from_slice(&self.selected[..2])?;
        let flop = Flop::from_slice(&self.selected[2..])?;
        let sim = Simulator::new(hole, flop, self.config.clone())?;
        Ok((sim, hole, flop))
    }

    pub fn cancel_run(&mut self) -> bool {
        match &self.job {
            Some(job) => {
                job.cancel();
                self.status = Some("Cancelling...".to_string());
                true
            }
            None => false,
        }
    }

    /// Collect a finished job, if any. Returns true when one completed.
    pub fn poll_job(&mut self) -> bool {
        let Some(job) = self.job.as_ref() else {
            return false;
        };
        let outcome = match job.poll() {
            JobPoll::Running => return false,
            JobPoll::Done(outcome) => outcome,
        };
        let Some(job) = self.job.take() else {
            return false;
        };
        match outcome {
            Ok(result) => {
                self.status = Some(format!(
                    "Done: {} hands in {:.1?}",
                    result.trials,
                    job.elapsed()
                ));
                self.last = Some((job.hole, job.flop, result));
            }
            Err(SimulationError::Cancelled) => self.status = Some("Cancelled".to_string()),
            Err(e) => self.status = Some(format!("Error: {e}")),
        }
        true
    }

    /// Called by the controller on every tick.
    pub fn on_tick(&mut self) {
        if self.running() {
            self.ticks = self.ticks.wrapping_add(1);
        }
        self.poll_job();
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                if self.scene == Scene::Picker {
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Menu {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Menu {
                    self.menu_dec();
                }
                false
            }
            InputAction::MenuApply => {
                if self.scene == Scene::Menu {
                    self.apply_menu();
                }
                false
            }
            InputAction::MenuCancel => {
                if self.scene == Scene::Menu {
                    self.cancel_menu();
                }
                false
            }
            _ if self.scene != Scene::Picker => false,
            InputAction::CursorUp => {
                self.move_cursor(-1, 0);
                false
            }
            InputAction::CursorDown => {
                self.move_cursor(1, 0);
                false
            }
            InputAction::CursorLeft => {
                self.move_cursor(0, -1);
                false
            }
            InputAction::CursorRight => {
                self.move_cursor(0, 1);
                false
            }
            InputAction::ToggleCard => self.toggle_card(),
            InputAction::Run => self.start_run(),
            InputAction::Cancel => self.cancel_run(),
            InputAction::Clear => {
                self.clear_selection();
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pick(app: &mut AppState, text: &str) {
        let card: Card = text.parse().unwrap();
        let row = Suit::ALL.iter().position(|&s| s == card.suit()).unwrap();
        let col = Rank::ALL.iter().position(|&r| r == card.rank()).unwrap();
        app.cursor = (row, col);
        assert!(app.handle_input(InputAction::ToggleCard));
    }

    #[test]
    fn sixth_card_is_refused() {
        let mut app = AppState::default();
        for c in ["As", "Ah", "Ad", "Kc", "Kh"] {
            pick(&mut app, c);
        }
        app.cursor = (0, 0);
        assert!(!app.handle_input(InputAction::ToggleCard));
        assert_eq!(app.selected().len(), 5);
        assert!(app.status().is_some());
    }

    #[test]
    fn run_needs_five_cards() {
        let mut app = AppState::default();
        pick(&mut app, "As");
        assert!(!app.handle_input(InputAction::Run));
        assert!(!app.running());
    }

    #[test]
    fn cursor_wraps_around_the_grid() {
        let mut app = AppState::default();
        let _ = app.handle_input(InputAction::CursorLeft);
        assert_eq!(app.cursor, (0, AppState::GRID_COLS - 1));
        let _ = app.handle_input(InputAction::CursorUp);
        assert_eq!(app.cursor, (AppState::GRID_ROWS - 1, AppState::GRID_COLS - 1));
        assert_eq!(app.cursor_card(), "As".parse().unwrap());
    }
}
