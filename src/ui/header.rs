use super::theme;
use crate::app::App;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const SPARKLE_CHARS: &[char] = &['.', '+', '*', '+', '.', ' '];

pub fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let tick = app.tick as usize;

    // Sparkle animation: cycle through characters at different phases
    let left_sparkle = SPARKLE_CHARS[tick / 4 % SPARKLE_CHARS.len()];
    let right_sparkle = SPARKLE_CHARS[(tick / 4 + 3) % SPARKLE_CHARS.len()];

    let screen = app.game.screen();
    let message = app.game.message();

    let mut score_line = vec![
        Span::styled("Score: ", theme::eyebrow_style()),
        Span::styled(format!("{}", app.game.score()), theme::score_style()),
    ];
    if !message.is_empty() {
        score_line.push(Span::styled(
            format!("  ({})", message),
            theme::subtitle_style(),
        ));
    }

    let lines = vec![
        Line::from(Span::styled(
            format!("{} D r o p   C a t c h {}", left_sparkle, right_sparkle),
            theme::title_style(),
        )),
        Line::from(Span::styled(app.config.author.as_str(), theme::eyebrow_style())),
        Line::from(Span::styled(
            format!("Screen: {} * {} px", screen.width, screen.height),
            theme::subtitle_style(),
        )),
        Line::from(score_line),
    ];

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
