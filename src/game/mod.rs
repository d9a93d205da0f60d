//! Falling-icon simulation, independent of the terminal.

pub mod geometry;
pub mod state;
pub mod tick;

pub use geometry::{Rect, ScreenSize};
pub use state::{Game, Role, Rules, ServiceIcon};
pub use tick::TickOutcome;
