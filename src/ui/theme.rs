use crate::game::Role;
use ratatui::style::{Color, Modifier, Style};

// ── Base palette ────────────────────────────────────────────────
pub const SURFACE: Color = Color::Rgb(18, 18, 18);
pub const BORDER: Color = Color::Rgb(50, 50, 50);
pub const BORDER_FOCUS: Color = Color::Rgb(140, 140, 140);

pub const TEXT: Color = Color::Rgb(235, 235, 235);
pub const TEXT_DIM: Color = Color::Rgb(130, 130, 130);
pub const ACCENT: Color = Color::Rgb(250, 214, 60);

pub const SUCCESS: Color = Color::Rgb(0, 255, 0);

// ── Playfield ───────────────────────────────────────────────────
pub const PLAYFIELD_BG: Color = Color::Rgb(235, 205, 40);
pub const INK: Color = Color::Rgb(20, 20, 20);

pub const INFANT: Color = Color::Rgb(244, 143, 177);
pub const CHILD: Color = Color::Rgb(129, 199, 132);
pub const ADULT: Color = Color::Rgb(100, 181, 246);
pub const PUBLIC: Color = Color::Rgb(186, 104, 200);

pub const ICON: Color = Color::Rgb(255, 255, 255);
pub const ICON_SETTLED: Color = Color::Rgb(200, 200, 200);

// ── Composite styles ────────────────────────────────────────────
pub fn title_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn eyebrow_style() -> Style {
    Style::default().fg(TEXT)
}

pub fn subtitle_style() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn score_style() -> Style {
    Style::default().fg(SUCCESS).add_modifier(Modifier::BOLD)
}

pub fn panel_title_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn key_hint_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(BORDER_FOCUS)
    } else {
        Style::default().fg(BORDER)
    }
}

pub fn footer_style() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn role_style(role: Role) -> Style {
    let bg = match role {
        Role::Infant => INFANT,
        Role::Child => CHILD,
        Role::Adult => ADULT,
        Role::Public => PUBLIC,
    };
    Style::default().fg(INK).bg(bg)
}

pub fn icon_style(settled: bool) -> Style {
    let bg = if settled { ICON_SETTLED } else { ICON };
    Style::default().fg(Color::Rgb(220, 40, 60)).bg(bg)
}
