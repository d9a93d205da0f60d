use super::{header, playfield, theme};
use crate::app::App;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Vertical: header | playfield | footer
fn split(area: Rect) -> [Rect; 3] {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // header
            Constraint::Min(4),    // playfield
            Constraint::Length(1), // footer
        ])
        .split(area);
    [vert[0], vert[1], vert[2]]
}

/// Inner cell area of the playfield for a terminal of size `area`.
pub fn playfield_area(area: Rect) -> Rect {
    playfield::playfield_block(true).inner(split(area)[1])
}

pub fn draw_layout(f: &mut Frame, area: Rect, app: &App) {
    let [head, body, foot] = split(area);
    header::draw_header(f, head, app);
    playfield::draw_playfield(f, body, app);
    draw_footer(f, foot);
}

fn draw_footer(f: &mut Frame, area: Rect) {
    let footer = Line::from(vec![
        Span::styled(" [←→]", theme::key_hint_style()),
        Span::styled(" Move  ", theme::footer_style()),
        Span::styled("[drag]", theme::key_hint_style()),
        Span::styled(" Move with mouse  ", theme::footer_style()),
        Span::styled("[?]", theme::key_hint_style()),
        Span::styled(" Help  ", theme::footer_style()),
        Span::styled("[q]", theme::key_hint_style()),
        Span::styled(" Quit", theme::footer_style()),
    ]);

    f.render_widget(Paragraph::new(footer), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playfield_area_inside_body() {
        let area = Rect::new(0, 0, 82, 26);
        // 5 header rows + border; 1 footer row + border
        assert_eq!(playfield_area(area), Rect::new(1, 6, 80, 18));
    }
}
