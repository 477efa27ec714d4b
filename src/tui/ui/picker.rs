use crate::cards::Card;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};
use super::results::draw_results;

const HOLE_COLOR: Color = Color::Green;
const FLOP_COLOR: Color = Color::Blue;

pub(super) fn draw_picker(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(10),   // grid + results
            Constraint::Length(3), // status bar
        ])
        .split(f.area());

    let cfg = &app.config;
    let header = Paragraph::new(Line::from(format!(
        "Mode: {}   Trials: {}   Threads: {}",
        cfg.method.label(),
        cfg.trials,
        cfg.threads.map_or_else(|| "auto".to_string(), |n| n.to_string()),
    )))
    .block(Block::default().title("Casino Hold'em EV").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(58), Constraint::Min(30)])
        .split(chunks[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(10), Constraint::Min(4)])
        .split(body[0]);

    draw_grid(f, left[0], app);
    draw_selection(f, left[1], app);
    draw_results(f, body[1], app);
    draw_status(f, chunks[2], app);

    if app.help_open() {
        draw_help(f);
    }
}

fn draw_grid(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default().title("Deck").borders(Borders::ALL);
    let mut lines: Vec<Line> = Vec::with_capacity(AppState::GRID_ROWS * 2);
    for row in 0..AppState::GRID_ROWS {
        let mut spans = Vec::with_capacity(AppState::GRID_COLS);
        for col in 0..AppState::GRID_COLS {
            let card = AppState::card_at(row, col);
            let mut style = card_style(card);
            match app.selection_index(card) {
                Some(i) if i < 2 => style = style.bg(HOLE_COLOR).fg(Color::Black),
                Some(_) => style = style.bg(FLOP_COLOR).fg(Color::White),
                None => {}
            }
            if app.cursor == (row, col) {
                style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
            }
            spans.push(Span::styled(format!(" {}{} ", card.rank(), card.suit().symbol()), style));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_selection(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default().title("Hand").borders(Borders::ALL);
    let slots = |cards: &[Card], n: usize, color: Color| -> Vec<Span<'static>> {
        (0..n)
            .map(|i| match cards.get(i) {
                Some(&c) => Span::styled(format!("[{}]", c.pretty()), card_style(c).fg(color)),
                None => Span::raw("[  ]"),
            })
            .flat_map(|s| [s, Span::raw(" ")])
            .collect()
    };

    let mut hole = vec![Span::raw("Hole: ")];
    hole.extend(slots(app.hole_selection(), 2, HOLE_COLOR));
    let mut flop = vec![Span::raw("Flop: ")];
    flop.extend(slots(app.flop_selection(), 3, FLOP_COLOR));

    let para = Paragraph::new(vec![Line::from(hole), Line::from(flop)]).block(block);
    f.render_widget(para, area);
}

fn draw_status(f: &mut Frame, area: Rect, app: &AppState) {
    let left = match (app.running_for(), app.status()) {
        (Some(elapsed), _) => format!("{} running {:.1?}   x cancel", app.spinner(), elapsed),
        (None, Some(status)) => status.to_string(),
        (None, None) => String::from("Pick 2 hole cards then 3 flop cards"),
    };
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner(area));
    f.render_widget(Block::default().borders(Borders::ALL), area);
    f.render_widget(Paragraph::new(left), cols[0]);
    f.render_widget(
        Paragraph::new("s run • c clear • m menu • ? help • q quit").alignment(Alignment::Right),
        cols[1],
    );
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(60, 70, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let lines = vec![
        Line::from(Span::styled("Picker:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- Arrows: move cursor"),
        Line::from("- Space / Enter: select or deselect card"),
        Line::from("- First two picks are the hole cards, next three the flop"),
        Line::from("- S: run simulation"),
        Line::from("- X: cancel a running simulation"),
        Line::from("- C: clear selection"),
        Line::from(""),
        Line::from(Span::styled("Menu:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- M: open / close menu"),
        Line::from("- Up / Down: move selection"),
        Line::from("- + / -: adjust value"),
        Line::from("- Enter: apply"),
        Line::from("- Esc: cancel"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn card_style(card: Card) -> Style {
    if card.suit().is_red() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::White)
    }
}
