//! casino-holdem-ev: call/fold expected value for Casino Hold'em
//!
//! Goals:
//! - Exact, allocation-light hand evaluation for 5 to 7 cards
//! - Casino pay tables for the ante, play and bonus bets
//! - Reproducible Monte Carlo and exhaustive drivers on rayon
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: should I call?
//! ```
//! use casino_holdem_ev::simulation::{simulate, Decision, SimulationConfig};
//!
//! let config = SimulationConfig::default().with_trials(5_000).with_seed(42);
//! let result = simulate("As Ah", "Ad Kc Kh", &config).unwrap();
//! assert_eq!(result.recommendation, Decision::Call);
//! assert_eq!(result.fold_ev_without_bonus, -1.0);
//! ```
//!
//! ## Evaluate a hand
//! ```
//! use casino_holdem_ev::cards::parse_cards;
//! use casino_holdem_ev::evaluator::{evaluate, Category};
//!
//! let board = parse_cards("Kc Qd Jh 3s 2c").unwrap();
//! let hole = parse_cards("As Ah").unwrap();
//! let eval = evaluate(&board, &[hole[0], hole[1]]).unwrap();
//! assert_eq!(eval.category, Category::Pair);
//! ```
//!
//! ## Command line and TUI
//! ```sh
//! cargo run --release -- --hole "As Kd" --flop "2c Jh 9s" -n 200000
//! cargo run --release -- --tui
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod payout;
pub mod qualify;
pub mod report;
pub mod simulation;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
