//! The fixed-tick update cycle: drop, collide, score, settle, reset.

use super::state::{Game, Phase, Role, ServiceIcon};

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Settled, counting down to the next fall.
    Waiting,
    /// Moved down without touching anything.
    Falling,
    /// Hit a target region and scored.
    Caught(Role),
    /// Reached the bottom edge without a catch.
    Landed,
    /// A new fall started with this icon.
    Reset(ServiceIcon),
}

impl Game {
    /// Advances the game by one tick.
    pub fn tick(&mut self) -> TickOutcome {
        if let Phase::Settled { resets_in } = self.icon.phase {
            if resets_in > 1 {
                self.icon.phase = Phase::Settled {
                    resets_in: resets_in - 1,
                };
                return TickOutcome::Waiting;
            }
            return TickOutcome::Reset(self.reset_icon());
        }

        let new_y = self.icon.y + self.rules.drop_px;

        if let Some(role) = self.collision_at(new_y) {
            self.award(self.rules.catch_points, format!("Caught by {}", role));
            self.icon.y = new_y;
            self.settle();
            return TickOutcome::Caught(role);
        }

        let height = self.screen.height as f32;
        if new_y + self.rules.icon_px >= height {
            self.award(0, "Reached the bottom".to_string());
            self.icon.y = (height - self.rules.icon_px).max(0.0);
            self.settle();
            return TickOutcome::Landed;
        }

        self.icon.y = new_y;
        TickOutcome::Falling
    }

    /// First target the icon would overlap at vertical offset `y`.
    fn collision_at(&self, y: f32) -> Option<Role> {
        let icon = self.icon.rect_at(y, self.rules.icon_px);
        self.targets
            .iter()
            .find(|t| icon.overlaps(&t.rect))
            .map(|t| t.role)
    }

    fn award(&mut self, points: u32, message: String) {
        self.score = self.score.saturating_add(points);
        self.message = message;
    }

    fn settle(&mut self) {
        self.icon.phase = Phase::Settled {
            resets_in: self.rules.settle_ticks.max(1),
        };
    }
}
