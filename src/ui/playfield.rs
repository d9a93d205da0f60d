use super::theme;
use crate::app::App;
use crate::game::{self, Game, Role, ScreenSize, ServiceIcon};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Widget};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Pixels per terminal cell. The game runs in pixels; this is the only
/// place cells and pixels meet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellScale {
    pub cell_w: f32,
    pub cell_h: f32,
}

impl CellScale {
    pub fn new(cell_w: f32, cell_h: f32) -> Self {
        Self {
            cell_w: cell_w.max(1.0),
            cell_h: cell_h.max(1.0),
        }
    }

    /// Pixel size of a playfield `area` cells large.
    pub fn screen_for(&self, area: Rect) -> ScreenSize {
        ScreenSize::new(
            (area.width as f32 * self.cell_w) as u32,
            (area.height as f32 * self.cell_h) as u32,
        )
    }

    /// Horizontal drag of `cols` columns, in pixels.
    pub fn cols_to_px(&self, cols: i32) -> f32 {
        cols as f32 * self.cell_w
    }

    /// Cell rectangle covering a pixel box, clipped to `area`.
    pub fn to_cells(&self, rect: &game::Rect, area: Rect) -> Option<Rect> {
        let col = |px: f32| (px / self.cell_w).round().max(0.0) as u16;
        let row = |px: f32| (px / self.cell_h).round().max(0.0) as u16;

        let x0 = col(rect.left());
        let y0 = row(rect.top());
        let x1 = col(rect.right()).max(x0.saturating_add(1));
        let y1 = row(rect.bottom()).max(y0.saturating_add(1));

        let cells = Rect::new(
            area.x.saturating_add(x0),
            area.y.saturating_add(y0),
            x1 - x0,
            y1 - y0,
        )
        .intersection(area);

        if cells.is_empty() {
            None
        } else {
            Some(cells)
        }
    }
}

/// Dimmed border while an overlay has focus.
pub fn playfield_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style(focused))
        .style(Style::default().bg(theme::PLAYFIELD_BG))
}

pub fn draw_playfield(f: &mut Frame, area: Rect, app: &App) {
    let block = playfield_block(app.dialog.is_none());
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
        PlayfieldWidget {
            game: &app.game,
            scale: app.scale,
        },
        inner,
    );
}

struct PlayfieldWidget<'a> {
    game: &'a Game,
    scale: CellScale,
}

impl Widget for PlayfieldWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        for target in self.game.targets() {
            if let Some(cells) = self.scale.to_cells(&target.rect, area) {
                let style = theme::role_style(target.role);
                buf.set_style(cells, style);
                put_centered(buf, cells, role_label(target.role), style);
            }
        }

        let icon = self.game.icon();
        if let Some(cells) = self.scale.to_cells(&self.game.icon_rect(), area) {
            let style = theme::icon_style(icon.is_settled());
            buf.set_style(cells, style);
            let glyph = icon_glyph(icon.kind).to_string();
            put_centered(buf, cells, &glyph, style.add_modifier(Modifier::BOLD));
        }
    }
}

pub fn icon_glyph(kind: ServiceIcon) -> char {
    match kind {
        ServiceIcon::Heart => '♥',
        ServiceIcon::Star => '★',
        ServiceIcon::Clover => '♣',
    }
}

fn role_label(role: Role) -> &'static str {
    match role {
        Role::Infant => "Infant",
        Role::Child => "Child",
        Role::Adult => "Adult",
        Role::Public => "Public",
    }
}

/// Write `text` on the middle row of `area`, cut to fit.
fn put_centered(buf: &mut Buffer, area: Rect, text: &str, style: Style) {
    let max = area.width as usize;
    let mut fitted = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max {
            break;
        }
        fitted.push(ch);
        width += w;
    }

    let x = area.x + (max.saturating_sub(fitted.width()) / 2) as u16;
    let y = area.y + area.height / 2;
    buf.set_string(x, y, fitted, style);
}
