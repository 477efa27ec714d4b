use crate::simulation::{BonusDecision, Decision, SimulationResult};
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

pub(super) fn draw_results(f: &mut Frame, area: Rect, app: &AppState) {
    let Some((hole, flop, r)) = app.last_result() else {
        let para = Paragraph::new("No results yet. Pick five cards and press S.")
            .wrap(Wrap { trim: true })
            .block(Block::default().title("Results").borders(Borders::ALL));
        f.render_widget(para, area);
        return;
    };

    let [a, b] = hole.as_array();
    let [c, d, e] = flop.as_array();
    let title = format!("Results: {} {} | {} {} {}", a.pretty(), b.pretty(), c.pretty(), d.pretty(), e.pretty());
    let bold = Style::default().add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::raw("Main game: "),
            Span::styled(r.recommendation.to_string(), decision_style(r.recommendation)),
            Span::raw("   Bonus: "),
            Span::styled(r.bonus_recommendation.to_string(), bonus_style(r.bonus_recommendation)),
        ]),
        Line::from(sample_line(r)),
        Line::from(""),
        Line::from(Span::styled("Expected values", bold)),
        ev_line("Ante", r.ante_ev),
        ev_line("Play", r.play_ev),
        ev_line("Bonus", r.bonus_ev),
        ev_line("Call + bonus", r.call_ev_with_bonus),
        ev_line("Call", r.call_ev_without_bonus),
        ev_line("Fold + bonus", r.fold_ev_with_bonus),
        ev_line("Fold", r.fold_ev_without_bonus),
        Line::from(""),
        Line::from(format!(
            "Win {:.2}%  Push {:.2}%  Loss {:.2}%",
            r.win_pct, r.push_pct, r.loss_pct
        )),
        Line::from(format!(
            "Bonus hits {:.2}%, avg win {:.2}",
            r.bonus_hit_rate, r.bonus_average_win
        )),
        Line::from(""),
        Line::from(Span::styled("Hand frequencies", bold)),
    ];
    for freq in r.hand_frequencies.iter().filter(|f| f.count > 0) {
        lines.push(Line::from(format!("  {:<16}{:>7.2}%", freq.class.name(), freq.pct)));
    }

    let para = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(para, area);
}

fn sample_line(r: &SimulationResult) -> String {
    if r.exact {
        format!("Exact over {} completions", r.trials)
    } else {
        format!("{} trials, call EV ± {:.4}", r.trials, r.call_ev_stderr)
    }
}

fn ev_line(label: &str, ev: f64) -> Line<'static> {
    let color = if ev >= 0.0 { Color::Green } else { Color::Red };
    Line::from(vec![
        Span::raw(format!("  {label:<14}")),
        Span::styled(format!("{ev:>+9.4}"), Style::default().fg(color)),
    ])
}

fn decision_style(d: Decision) -> Style {
    let color = match d {
        Decision::Call => Color::Green,
        Decision::Fold => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn bonus_style(d: BonusDecision) -> Style {
    let color = match d {
        BonusDecision::Place => Color::Green,
        BonusDecision::Skip => Color::Red,
    };
    Style::default().fg(color)
}
