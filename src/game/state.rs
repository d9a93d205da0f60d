//! Game state: the falling icon, the four catch targets and the score.

use rand::rngs::StdRng;
use rand::Rng;

use super::geometry::{Rect, ScreenSize};

/// Identity of the falling icon. Purely visual; every icon scores the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceIcon {
    Heart,
    Star,
    Clover,
}

impl ServiceIcon {
    pub const ALL: [ServiceIcon; 3] = [ServiceIcon::Heart, ServiceIcon::Star, ServiceIcon::Clover];

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

impl std::fmt::Display for ServiceIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceIcon::Heart => write!(f, "heart"),
            ServiceIcon::Star => write!(f, "star"),
            ServiceIcon::Clover => write!(f, "clover"),
        }
    }
}

/// Who a target region stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Infant,
    Child,
    Adult,
    Public,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Infant => write!(f, "Infant"),
            Role::Child => write!(f, "Child"),
            Role::Adult => write!(f, "Adult"),
            Role::Public => write!(f, "General public"),
        }
    }
}

/// A fixed catch region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub role: Role,
    pub rect: Rect,
}

/// Lays out the four targets: upper row sits on the horizontal midline,
/// lower row on the bottom edge, one column flush left and one flush right.
///
/// Order matters: collisions are tested in this order and the first hit wins.
pub fn target_regions(screen: ScreenSize, role_px: f32) -> [Target; 4] {
    let width = screen.width as f32;
    let height = screen.height as f32;

    let upper_top = height / 2.0 - role_px;
    let lower_top = height - role_px;
    let right_left = width - role_px;

    [
        Target {
            role: Role::Infant,
            rect: Rect::square(0.0, upper_top, role_px),
        },
        Target {
            role: Role::Child,
            rect: Rect::square(right_left, upper_top, role_px),
        },
        Target {
            role: Role::Adult,
            rect: Rect::square(0.0, lower_top, role_px),
        },
        Target {
            role: Role::Public,
            rect: Rect::square(right_left, lower_top, role_px),
        },
    ]
}

/// Falling or waiting for the delayed reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Falling,
    /// Stopped; a new fall starts when `resets_in` reaches zero.
    Settled { resets_in: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallingIcon {
    pub kind: ServiceIcon,
    pub x: f32,
    pub y: f32,
    pub phase: Phase,
}

impl FallingIcon {
    pub fn is_settled(&self) -> bool {
        matches!(self.phase, Phase::Settled { .. })
    }

    pub fn rect_at(&self, y: f32, size: f32) -> Rect {
        Rect::square(self.x, y, size)
    }
}

/// Tunable constants of the update cycle, in pixels and ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rules {
    pub drop_px: f32,
    pub icon_px: f32,
    pub role_px: f32,
    pub catch_points: u32,
    /// Ticks between settling and the next fall.
    pub settle_ticks: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            drop_px: 20.0,
            icon_px: 60.0,
            role_px: 120.0,
            catch_points: 10,
            settle_ticks: 5,
        }
    }
}

/// The whole mutable game record. One writer: the app loop.
pub struct Game {
    pub(super) rules: Rules,
    pub(super) screen: ScreenSize,
    pub(super) targets: [Target; 4],
    pub(super) score: u32,
    pub(super) icon: FallingIcon,
    pub(super) message: String,
    pub(super) rng: StdRng,
}

impl Game {
    pub fn new(screen: ScreenSize, rules: Rules, rng: StdRng) -> Self {
        let mut game = Self {
            rules,
            screen,
            targets: target_regions(screen, rules.role_px),
            score: 0,
            icon: FallingIcon {
                kind: ServiceIcon::Heart,
                x: 0.0,
                y: 0.0,
                phase: Phase::Falling,
            },
            message: String::new(),
            rng,
        };
        game.reset_icon();
        game
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn icon(&self) -> &FallingIcon {
        &self.icon
    }

    pub fn icon_rect(&self) -> Rect {
        self.icon.rect_at(self.icon.y, self.rules.icon_px)
    }

    pub fn targets(&self) -> &[Target; 4] {
        &self.targets
    }

    pub fn screen(&self) -> ScreenSize {
        self.screen
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    fn max_x(&self) -> f32 {
        (self.screen.width as f32 - self.rules.icon_px).max(0.0)
    }

    fn max_y(&self) -> f32 {
        (self.screen.height as f32 - self.rules.icon_px).max(0.0)
    }

    /// Moves the icon horizontally by `dx` pixels, clamped to the screen.
    /// Returns the new offset.
    pub fn drag(&mut self, dx: f32) -> f32 {
        self.icon.x = (self.icon.x + dx).clamp(0.0, self.max_x());
        self.icon.x
    }

    /// Starts a new fall from the top center with a random icon.
    pub fn reset_icon(&mut self) -> ServiceIcon {
        let kind = ServiceIcon::random(&mut self.rng);
        let centered = self.screen.width as f32 / 2.0 - self.rules.icon_px / 2.0;
        self.icon = FallingIcon {
            kind,
            x: centered.clamp(0.0, self.max_x()),
            y: 0.0,
            phase: Phase::Falling,
        };
        self.message.clear();
        kind
    }

    /// Applies a new screen size, rebuilding targets and pulling the icon
    /// back inside the screen. Score and phase are untouched.
    pub fn resize(&mut self, screen: ScreenSize) {
        self.screen = screen;
        self.targets = target_regions(screen, self.rules.role_px);
        self.icon.x = self.icon.x.clamp(0.0, self.max_x());
        self.icon.y = self.icon.y.clamp(0.0, self.max_y());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn game(width: u32, height: u32) -> Game {
        Game::new(
            ScreenSize::new(width, height),
            Rules::default(),
            StdRng::seed_from_u64(7),
        )
    }

    #[test]
    fn test_targets_layout() {
        let targets = target_regions(ScreenSize::new(800, 480), 120.0);
        let roles: Vec<Role> = targets.iter().map(|t| t.role).collect();
        assert_eq!(roles, vec![Role::Infant, Role::Child, Role::Adult, Role::Public]);

        assert_eq!(targets[0].rect, Rect::square(0.0, 120.0, 120.0));
        assert_eq!(targets[1].rect, Rect::square(680.0, 120.0, 120.0));
        assert_eq!(targets[2].rect, Rect::square(0.0, 360.0, 120.0));
        assert_eq!(targets[3].rect, Rect::square(680.0, 360.0, 120.0));
        // Upper row ends on the midline, lower row on the bottom edge
        assert_eq!(targets[0].rect.bottom(), 240.0);
        assert_eq!(targets[3].rect.bottom(), 480.0);
    }

    #[test]
    fn test_new_game_starts_centered_at_top() {
        let g = game(800, 480);
        assert_eq!(g.score(), 0);
        assert_eq!(g.icon().x, 370.0);
        assert_eq!(g.icon().y, 0.0);
        assert!(!g.icon().is_settled());
        assert!(g.message().is_empty());
    }

    #[test]
    fn test_drag_clamps_to_screen() {
        let mut g = game(800, 480);
        assert_eq!(g.drag(-10_000.0), 0.0);
        assert_eq!(g.drag(10_000.0), 740.0);
        assert_eq!(g.drag(-40.0), 700.0);
    }

    #[test]
    fn test_drag_stays_in_bounds_for_any_delta() {
        let mut g = game(640, 400);
        let deltas = [-3.5, 1000.0, -0.1, 250.0, -999.0, 42.0, 17.25, -600.0];
        for dx in deltas {
            let x = g.drag(dx);
            assert!((0.0..=640.0 - 60.0).contains(&x), "x out of range: {x}");
        }
    }

    #[test]
    fn test_drag_on_screen_narrower_than_icon() {
        let mut g = game(40, 480);
        assert_eq!(g.icon().x, 0.0);
        assert_eq!(g.drag(15.0), 0.0);
    }

    #[test]
    fn test_resize_reclamps_icon() {
        let mut g = game(800, 480);
        g.drag(10_000.0);
        g.icon.y = 400.0;
        g.resize(ScreenSize::new(400, 300));
        assert_eq!(g.icon().x, 340.0);
        assert_eq!(g.icon().y, 240.0);
        assert_eq!(g.targets()[1].rect.x, 280.0);
    }

    #[test]
    fn test_reset_clears_message_and_phase() {
        let mut g = game(800, 480);
        g.message = "Caught by Infant".into();
        g.icon.phase = Phase::Settled { resets_in: 3 };
        g.icon.y = 200.0;
        g.drag(-100.0);
        g.reset_icon();
        assert!(g.message().is_empty());
        assert_eq!(g.icon().phase, Phase::Falling);
        assert_eq!(g.icon().y, 0.0);
        assert_eq!(g.icon().x, 370.0);
    }

    #[test]
    fn test_random_icon_covers_all_kinds() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            seen.insert(ServiceIcon::random(&mut rng));
        }
        assert_eq!(seen.len(), ServiceIcon::ALL.len());
    }
}
