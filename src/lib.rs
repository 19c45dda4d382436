//! Sui Miners - A single-screen gold-miner arcade game
//!
//! Core modules:
//! - `sim`: Hook physics, item placement and round state
//! - `runner`: Frame scheduling and the one-second round timer
//! - `tuning`: Data-driven game balance

pub mod runner;
pub mod sim;
pub mod tuning;

pub use runner::{Clock, ManualClock, RoundRunner, SystemClock};
pub use tuning::{GameConfig, HookConfig, PlacementConfig};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Round length in seconds
    pub const GAME_DURATION_SECONDS: u32 = 30;
    /// Items placed at round start
    pub const TOTAL_ITEMS: usize = 12;
    /// Ceiling for tuning overrides of the item count
    pub const MAX_TOTAL_ITEMS: usize = 256;

    /// Hook pivot, percent of playfield width/height
    pub const PIVOT_X_PCT: f32 = 50.0;
    pub const PIVOT_Y_PCT: f32 = 15.0;

    /// Hook length bounds (pixels)
    pub const HOOK_BASE_LENGTH: f32 = 40.0;
    pub const HOOK_MAX_LENGTH: f32 = 700.0;

    /// Degrees from vertical to each side
    pub const SWING_ANGLE_RANGE: f32 = 70.0;
    /// Multiplier on wall-clock milliseconds for the swing oscillation
    pub const SWING_SPEED: f64 = 0.001;

    /// Pixels per tick
    pub const EXTEND_SPEED: f32 = 10.0;
    pub const BASE_RETRACT_SPEED: f32 = 8.0;
    /// Empty hook comes back faster
    pub const EMPTY_RETRACT_MULTIPLIER: f32 = 1.5;
    /// Slowest a loaded hook may retract
    pub const MIN_RETRACT_SPEED: f32 = 1.0;
    /// Points per pixel/tick of retract slowdown
    pub const POINTS_PER_RETRACT_PENALTY: f32 = 10.0;

    /// Item hit radius = max(HIT_RADIUS_FLOOR, size * HIT_RADIUS_FACTOR)
    pub const HIT_RADIUS_FLOOR: f32 = 10.0;
    pub const HIT_RADIUS_FACTOR: f32 = 0.55;

    /// Placement: horizontal margin (percent)
    pub const PLACEMENT_MARGIN_PCT: f32 = 6.0;
    /// Placement: minimum depth below the pivot (percent)
    pub const PLACEMENT_DEPTH_OFFSET_PCT: f32 = 12.0;
    /// Placement: keep-out band at the bottom edge (percent)
    pub const PLACEMENT_FLOOR_OFFSET_PCT: f32 = 6.0;
    /// Rejection-sampling attempts per item before it is skipped
    pub const PLACEMENT_MAX_ATTEMPTS: u32 = 600;
    /// Two items may not be closer than (size_a + size_b) * this
    pub const PLACEMENT_SPACING_FACTOR: f32 = 0.55;
}

/// Degrees to radians
#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}

/// Convert a percent position (0-100 on each axis) to pixels inside a `width` x `height` area
#[inline]
pub fn percent_to_px(x_pct: f32, y_pct: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new(x_pct / 100.0 * width, y_pct / 100.0 * height)
}

/// Unit direction of the hook for an angle in degrees from vertical.
///
/// Screen space: y grows downward, so angle 0 points straight down and
/// positive angles swing toward +x.
#[inline]
pub fn hook_direction(angle_deg: f32) -> Vec2 {
    let rad = deg_to_rad(angle_deg);
    Vec2::new(rad.sin(), rad.cos())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_to_px() {
        let p = percent_to_px(50.0, 15.0, 800.0, 600.0);
        assert!((p.x - 400.0).abs() < 1e-4);
        assert!((p.y - 90.0).abs() < 1e-4);
    }

    #[test]
    fn test_hook_direction() {
        let down = hook_direction(0.0);
        assert!(down.x.abs() < 1e-6);
        assert!((down.y - 1.0).abs() < 1e-6);

        let right = hook_direction(90.0);
        assert!((right.x - 1.0).abs() < 1e-6);
        assert!(right.y.abs() < 1e-6);
    }
}
