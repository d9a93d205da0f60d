use super::theme;
use crate::app::App;
use crate::types::DialogKind;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Draw the currently active modal dialog overlay.
pub fn draw_dialog(f: &mut Frame, area: Rect, app: &App) {
    match &app.dialog {
        Some(DialogKind::Help) => draw_help(f, area, app),
        None => {}
    }
}

fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vert[1])[1]
}

fn draw_help(f: &mut Frame, area: Rect, app: &App) {
    let popup = centered_rect(60, 16, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .title(Line::from(vec![Span::styled(
            " Help - Drop Catch ",
            theme::panel_title_style(),
        )]))
        .borders(Borders::ALL)
        .border_style(theme::border_style(true))
        .style(Style::default().bg(theme::SURFACE));

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let hl = theme::key_hint_style();
    let nl = Style::default().fg(theme::TEXT);
    let dim = Style::default().fg(theme::TEXT_DIM);
    let section = Style::default()
        .fg(theme::ACCENT)
        .add_modifier(Modifier::BOLD);

    let rules = app.game.rules();
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("  CONTROLS", section)),
        Line::from(vec![
            Span::styled("  ←/→ or h/l", hl),
            Span::styled("     Move the falling icon", nl),
        ]),
        Line::from(vec![
            Span::styled("  Mouse drag", hl),
            Span::styled("     Grab the icon and slide it", nl),
        ]),
        Line::from(vec![
            Span::styled("  ?", hl),
            Span::styled("              Toggle help (pauses)", nl),
        ]),
        Line::from(vec![
            Span::styled("  q / Esc", hl),
            Span::styled("        Quit", nl),
        ]),
        Line::from(""),
        Line::from(Span::styled("  SCORING", section)),
        Line::from(Span::styled(
            format!("  Land on any of the four targets: +{}", rules.catch_points),
            nl,
        )),
        Line::from(Span::styled("  Reach the bottom: +0", nl)),
        Line::from(""),
        Line::from(Span::styled("  Press any key to close", dim)),
    ];

    f.render_widget(Paragraph::new(lines), inner);
}
