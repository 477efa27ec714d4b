//! Plain text rendering of a [`SimulationResult`].

use crate::hand::{Flop, HoleCards};
use crate::simulation::SimulationResult;
use std::fmt::Write;

/// Build the multi-section report printed by the command line tool.
///
/// Only hand classes that occurred are listed.
pub fn render(hole: &HoleCards, flop: &Flop, result: &SimulationResult) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_report(&mut out, hole, flop, result);
    out
}

fn write_report(
    out: &mut String,
    hole: &HoleCards,
    flop: &Flop,
    r: &SimulationResult,
) -> std::fmt::Result {
    let [a, b] = hole.as_array();
    let [c, d, e] = flop.as_array();
    writeln!(out, "--- Casino Hold'em Simulation Results ---")?;
    writeln!(out, "Hand: {a} {b}   Flop: {c} {d} {e}")?;
    if r.exact {
        writeln!(out, "Exact enumeration of {} completions", r.trials)?;
    } else {
        match r.seed {
            Some(seed) => writeln!(out, "Monte Carlo, {} trials (seed {seed})", r.trials)?,
            None => writeln!(out, "Monte Carlo, {} trials", r.trials)?,
        }
    }

    writeln!(out, "\nExpected Values (per unit wagered):")?;
    line(out, "EV from Ante bet:", format_args!("{:.4} units", r.ante_ev))?;
    line(out, "EV from Play bet:", format_args!("{:.4} units", r.play_ev))?;
    line(out, "EV from Bonus bet:", format_args!("{:.4} units", r.bonus_ev))?;

    writeln!(out, "\nStrategy Options:")?;
    line(out, "EV if Call with Bonus:", format_args!("{:.4} units", r.call_ev_with_bonus))?;
    if r.exact {
        line(out, "EV if Call without Bonus:", format_args!("{:.4} units", r.call_ev_without_bonus))?;
    } else {
        line(
            out,
            "EV if Call without Bonus:",
            format_args!("{:.4} units (± {:.4})", r.call_ev_without_bonus, r.call_ev_stderr),
        )?;
    }
    line(out, "EV if Fold with Bonus:", format_args!("{:.4} units", r.fold_ev_with_bonus))?;
    line(out, "EV if Fold without Bonus:", format_args!("{:.4} units", r.fold_ev_without_bonus))?;

    writeln!(out, "\nBonus Bet Analysis:")?;
    line(out, "Bonus Hit Rate:", format_args!("{:.2}%", r.bonus_hit_rate))?;
    line(out, "Average Bonus Win:", format_args!("{:.2} units", r.bonus_average_win))?;

    writeln!(out, "\nOutcome Frequencies:")?;
    line(out, "Win percentage:", format_args!("{:.2}%", r.win_pct))?;
    line(out, "Push percentage:", format_args!("{:.2}%", r.push_pct))?;
    line(out, "Loss percentage:", format_args!("{:.2}%", r.loss_pct))?;

    writeln!(out, "\nHand Frequencies:")?;
    for f in r.hand_frequencies.iter().filter(|f| f.count > 0) {
        writeln!(out, "  {:<20} {:.2}%", format!("{}:", f.class), f.pct)?;
    }

    writeln!(out, "\nRecommendations:")?;
    writeln!(out, "Main Game: {}", r.recommendation)?;
    writeln!(out, "Bonus Bet: {}", r.bonus_recommendation)?;
    Ok(())
}

fn line(out: &mut String, label: &str, value: std::fmt::Arguments<'_>) -> std::fmt::Result {
    writeln!(out, "{label:<27}{value}")
}
