use casino_holdem_ev::cards::{Card, Rank, Suit};
use casino_holdem_ev::tui::app::{AppState, InputAction, Scene};
use casino_holdem_ev::tui::controller::handle_key;
use crossterm::event::KeyCode;
use std::thread;
use std::time::{Duration, Instant};

fn move_to(app: &mut AppState, text: &str) {
    let card: Card = text.parse().unwrap();
    let row = Suit::ALL.iter().position(|&s| s == card.suit()).unwrap();
    let col = Rank::ALL.iter().position(|&r| r == card.rank()).unwrap();
    app.cursor = (row, col);
}

fn pick_all(app: &mut AppState, cards: &[&str]) {
    for c in cards {
        move_to(app, c);
        assert!(app.handle_input(InputAction::ToggleCard), "could not pick {c}");
    }
}

fn wait_for_job(app: &mut AppState) {
    let deadline = Instant::now() + Duration::from_secs(30);
    while app.running() && Instant::now() < deadline {
        app.on_tick();
        thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn menu_navigation_and_apply() {
    let mut app = AppState::default();
    assert!(matches!(app.scene, Scene::Picker));
    let _ = app.handle_input(InputAction::ToggleMenu);
    assert!(matches!(app.scene, Scene::Menu));
    let start = app.menu_index;
    let _ = app.handle_input(InputAction::MenuNext);
    assert_ne!(app.menu_index, start);
    let _ = app.handle_input(InputAction::MenuPrev);
    assert_eq!(app.menu_index, start);
    let _ = app.handle_input(InputAction::MenuDec);
    let _ = app.handle_input(InputAction::MenuApply);
    assert!(matches!(app.scene, Scene::Picker));
    assert_eq!(app.config.trials, 5_000);
}

#[test]
fn first_two_picks_are_hole_cards() {
    let mut app = AppState::default();
    pick_all(&mut app, &["As", "Kd", "2c", "Jh", "9s"]);
    assert_eq!(app.hole_selection().len(), 2);
    assert_eq!(app.flop_selection().len(), 3);
    assert_eq!(app.hole_selection()[1], "Kd".parse::<Card>().unwrap());

    // Deselecting a hole card promotes the first flop card
    move_to(&mut app, "As");
    assert!(app.handle_input(InputAction::ToggleCard));
    assert_eq!(app.hole_selection()[1], "2c".parse::<Card>().unwrap());

    let _ = app.handle_input(InputAction::Clear);
    assert!(app.selected().is_empty());
}

#[test]
fn run_shows_results_panel() {
    let mut app = AppState::default();
    app.config = app.config.clone().with_trials(2_000).with_seed(3);
    pick_all(&mut app, &["As", "Ah", "Ad", "Kc", "Kh"]);
    assert!(app.handle_input(InputAction::Run));
    assert!(app.running());
    // Selection is frozen while running
    move_to(&mut app, "2c");
    assert!(!app.handle_input(InputAction::ToggleCard));

    wait_for_job(&mut app);
    assert!(!app.running());
    let (_, _, result) = app.last_result().expect("result");
    assert_eq!(result.trials, 2_000);
    assert!(app.status().is_some_and(|s| s.starts_with("Done")));
}

#[test]
fn cancel_stops_a_long_run() {
    let mut app = AppState::default();
    app.config = app.config.clone().with_trials(500_000_000);
    pick_all(&mut app, &["Qs", "Jh", "Tc", "9d", "2s"]);
    assert!(app.handle_input(InputAction::Run));
    assert!(app.handle_input(InputAction::Cancel));
    wait_for_job(&mut app);
    assert!(!app.running());
    assert!(app.last_result().is_none());
    assert_eq!(app.status(), Some("Cancelled"));
}

#[test]
fn help_toggle_and_quit_keys() {
    let mut app = AppState::default();
    assert!(!handle_key(&mut app, KeyCode::Char('?')));
    assert!(app.help_open());
    // Other keys are swallowed while help is open
    assert!(!handle_key(&mut app, KeyCode::Char('q')));
    assert!(!handle_key(&mut app, KeyCode::Esc));
    assert!(!app.help_open());
    assert!(handle_key(&mut app, KeyCode::Char('q')));
}
