use super::{AppState, Scene};

/// Trial counts offered by the settings menu.
const TRIAL_STEPS: [u64; 8] = [1_000, 5_000, 10_000, 50_000, 100_000, 200_000, 500_000, 1_000_000];
const MAX_THREADS: usize = 64;

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    Trials,
    Threads,
    Mode,
}

const MENU_ITEMS: [MenuItem; 3] = [MenuItem::Trials, MenuItem::Threads, MenuItem::Mode];

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::Trials => format!("Trials: {}", app.cfg_trials),
            MenuItem::Threads => match app.cfg_threads {
                Some(n) => format!("Worker Threads: {n}"),
                None => "Worker Threads: auto".to_string(),
            },
            MenuItem::Mode => format!("Mode: {}", app.cfg_method.label()),
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::Trials => {
                app.cfg_trials = TRIAL_STEPS
                    .iter()
                    .copied()
                    .find(|&t| t > app.cfg_trials)
                    .unwrap_or(app.cfg_trials);
            }
            MenuItem::Threads => {
                app.cfg_threads = match app.cfg_threads {
                    None => Some(1),
                    Some(n) => Some((n + 1).min(MAX_THREADS)),
                };
            }
            MenuItem::Mode => app.cfg_method = app.cfg_method.toggle(),
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::Trials => {
                app.cfg_trials = TRIAL_STEPS
                    .iter()
                    .rev()
                    .copied()
                    .find(|&t| t < app.cfg_trials)
                    .unwrap_or(app.cfg_trials);
            }
            MenuItem::Threads => {
                app.cfg_threads = match app.cfg_threads {
                    None | Some(1) => None,
                    Some(n) => Some(n - 1),
                };
            }
            MenuItem::Mode => app.cfg_method = app.cfg_method.toggle(),
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        match self.scene {
            Scene::Menu => self.cancel_menu(),
            _ => self.open_menu(),
        }
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_help();
        self.menu_index = 0;
        self.cfg_trials = self.config.trials;
        self.cfg_threads = self.config.threads;
        self.cfg_method = self.config.method;
        self.scene = Scene::Menu;
    }

    /// Copy the edited values into the config used by the next run.
    pub fn apply_menu(&mut self) {
        self.config.trials = self.cfg_trials.max(1);
        self.config.threads = self.cfg_threads.filter(|&n| n > 0);
        self.config.method = self.cfg_method;
        self.scene = Scene::Picker;
    }

    pub fn cancel_menu(&mut self) {
        self.scene = Scene::Picker;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::Method;

    #[test]
    fn trials_step_along_the_ladder() {
        let mut app = AppState::default();
        app.open_menu();
        app.menu_inc();
        assert_eq!(app.cfg_trials, 50_000);
        app.menu_dec();
        app.menu_dec();
        assert_eq!(app.cfg_trials, 5_000);
    }

    #[test]
    fn threads_go_from_auto_to_fixed_and_back() {
        let mut app = AppState::default();
        app.open_menu();
        app.menu_next();
        app.menu_inc();
        app.menu_inc();
        assert_eq!(app.cfg_threads, Some(2));
        app.menu_dec();
        app.menu_dec();
        assert_eq!(app.cfg_threads, None);
    }

    #[test]
    fn cancel_discards_edits_apply_keeps_them() {
        let mut app = AppState::default();
        app.open_menu();
        app.menu_prev();
        app.menu_inc();
        app.cancel_menu();
        assert_eq!(app.config.method, Method::MonteCarlo);

        app.open_menu();
        app.menu_prev();
        app.menu_inc();
        app.apply_menu();
        assert_eq!(app.config.method, Method::Exact);
        assert_eq!(app.scene, Scene::Picker);
    }
}
