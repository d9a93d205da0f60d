use crate::game::{Game, TickOutcome};
use crate::notify;
use crate::types::*;
use crate::ui::playfield::CellScale;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::layout::{Position, Rect};

/// Top-level application state.
pub struct App {
    pub config: GameConfig,
    pub game: Game,
    pub scale: CellScale,
    /// Inner playfield area in terminal cells, as of the last resize.
    pub playfield: Rect,
    pub dialog: Option<DialogKind>,
    pub should_quit: bool,
    /// Frame counter, drives header animation only.
    pub tick: u64,
    /// Column of the last mouse position while dragging the icon.
    pub drag_anchor: Option<u16>,
}

impl App {
    pub fn new(config: GameConfig, playfield: Rect) -> Self {
        let scale = CellScale::new(config.cell_width_px, config.cell_height_px);
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let screen = scale.screen_for(playfield);
        let game = Game::new(screen, config.rules(), rng);
        log::info!(
            "session started: screen {}x{} px, first icon {}",
            screen.width,
            screen.height,
            game.icon().kind
        );

        Self {
            config,
            game,
            scale,
            playfield,
            dialog: None,
            should_quit: false,
            tick: 0,
            drag_anchor: None,
        }
    }

    /// The game stands still while a dialog is open.
    pub fn is_paused(&self) -> bool {
        self.dialog.is_some()
    }

    /// Advance the game by one fixed tick.
    pub fn step(&mut self) -> TickOutcome {
        let outcome = self.game.tick();
        match outcome {
            TickOutcome::Caught(role) => {
                log::info!("caught by {} (score {})", role, self.game.score());
                if self.config.sounds {
                    notify::on_catch();
                }
            }
            TickOutcome::Landed => {
                log::info!("reached the bottom (score {})", self.game.score());
                if self.config.sounds {
                    notify::on_miss();
                }
            }
            TickOutcome::Reset(kind) => log::info!("new fall: {}", kind),
            TickOutcome::Waiting | TickOutcome::Falling => {}
        }
        outcome
    }

    pub fn resize_playfield(&mut self, playfield: Rect) {
        if playfield == self.playfield {
            return;
        }
        self.playfield = playfield;
        self.drag_anchor = None;
        let screen = self.scale.screen_for(playfield);
        self.game.resize(screen);
        log::info!("screen resized to {}x{} px", screen.width, screen.height);
    }

    pub fn drag_by(&mut self, dx: f32) {
        if self.is_paused() {
            return;
        }
        let x = self.game.drag(dx);
        log::debug!("drag {:+} px -> x {}", dx, x);
    }

    pub fn nudge_left(&mut self) {
        self.drag_by(-self.config.drag_step_px);
    }

    pub fn nudge_right(&mut self) {
        self.drag_by(self.config.drag_step_px);
    }

    /// Start a mouse drag if the press lands on the falling icon.
    pub fn begin_drag(&mut self, column: u16, row: u16) {
        let on_icon = self
            .scale
            .to_cells(&self.game.icon_rect(), self.playfield)
            .is_some_and(|cells| cells.contains(Position::new(column, row)));
        self.drag_anchor = on_icon.then_some(column);
    }

    /// Forward the column delta since the last drag event.
    pub fn drag_to(&mut self, column: u16) {
        let Some(anchor) = self.drag_anchor else {
            return;
        };
        let cols = i32::from(column) - i32::from(anchor);
        if cols != 0 {
            self.drag_by(self.scale.cols_to_px(cols));
            self.drag_anchor = Some(column);
        }
    }

    pub fn end_drag(&mut self) {
        self.drag_anchor = None;
    }

    pub fn open_help(&mut self) {
        self.drag_anchor = None;
        self.dialog = Some(DialogKind::Help);
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Role;

    fn app() -> App {
        let config = GameConfig {
            seed: Some(1),
            sounds: false,
            ..GameConfig::default()
        };
        // 80x24 cells at 10x20 px -> 800x480 px
        App::new(config, Rect::new(1, 6, 80, 24))
    }

    #[test]
    fn test_new_uses_playfield_size() {
        let app = app();
        let screen = app.game.screen();
        assert_eq!((screen.width, screen.height), (800, 480));
        assert_eq!(app.game.icon().x, 370.0);
    }

    #[test]
    fn test_keyboard_nudges_by_step() {
        let mut app = app();
        app.nudge_left();
        assert_eq!(app.game.icon().x, 350.0);
        app.nudge_right();
        app.nudge_right();
        assert_eq!(app.game.icon().x, 390.0);
    }

    #[test]
    fn test_mouse_drag_on_icon_moves_it() {
        let mut app = app();
        // Icon spans columns 38..44 and rows 6..9 on screen
        app.begin_drag(40, 7);
        assert_eq!(app.drag_anchor, Some(40));
        app.drag_to(35);
        assert_eq!(app.game.icon().x, 320.0);
        app.drag_to(37);
        assert_eq!(app.game.icon().x, 340.0);
        app.end_drag();
        app.drag_to(0);
        assert_eq!(app.game.icon().x, 340.0);
    }

    #[test]
    fn test_mouse_press_off_icon_ignored() {
        let mut app = app();
        app.begin_drag(2, 20);
        assert_eq!(app.drag_anchor, None);
        app.drag_to(70);
        assert_eq!(app.game.icon().x, 370.0);
    }

    #[test]
    fn test_help_pauses_drag() {
        let mut app = app();
        app.open_help();
        assert!(app.is_paused());
        app.nudge_left();
        assert_eq!(app.game.icon().x, 370.0);
        app.close_dialog();
        app.nudge_left();
        assert_eq!(app.game.icon().x, 350.0);
    }

    #[test]
    fn test_step_reports_catch() {
        let mut app = app();
        app.drag_by(-1000.0);
        let outcome = (0..10)
            .map(|_| app.step())
            .find(|o| *o != TickOutcome::Falling);
        assert_eq!(outcome, Some(TickOutcome::Caught(Role::Infant)));
        assert_eq!(app.game.score(), 10);
    }

    #[test]
    fn test_resize_updates_screen() {
        let mut app = app();
        app.resize_playfield(Rect::new(1, 6, 40, 12));
        let screen = app.game.screen();
        assert_eq!((screen.width, screen.height), (400, 240));
        assert!(app.game.icon().x <= 340.0);
    }
}
