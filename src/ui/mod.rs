pub mod dialogs;
pub mod header;
pub mod layout;
pub mod playfield;
pub mod theme;

use crate::app::App;
use ratatui::Frame;

/// Master render function: draws layout and playfield, then modal overlay.
pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();

    layout::draw_layout(f, area, app);

    if app.dialog.is_some() {
        dialogs::draw_dialog(f, area, app);
    }
}
