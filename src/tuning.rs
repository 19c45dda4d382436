//! Data-driven game balance
//!
//! Every value defaults to the fixed constants in [`crate::consts`]. The
//! native binary can override them from a JSON file; the web build never
//! does, so the defaults are the real game.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::GameItem;

/// Hook geometry and kinematics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HookConfig {
    /// Pivot x (% of playfield width)
    pub pivot_x_pct: f32,
    /// Pivot y (% of playfield height)
    pub pivot_y_pct: f32,
    /// Retracted length (pixels)
    pub base_length: f32,
    /// Longest the hook may extend (pixels)
    pub max_length: f32,
    /// Degrees from vertical to each side
    pub swing_angle_range: f32,
    /// Multiplier on wall-clock milliseconds
    pub swing_speed: f64,
    /// Pixels per tick while extending
    pub extend_speed: f32,
    /// Pixels per tick while retracting, before item weight
    pub base_retract_speed: f32,
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            pivot_x_pct: PIVOT_X_PCT,
            pivot_y_pct: PIVOT_Y_PCT,
            base_length: HOOK_BASE_LENGTH,
            max_length: HOOK_MAX_LENGTH,
            swing_angle_range: SWING_ANGLE_RANGE,
            swing_speed: SWING_SPEED,
            extend_speed: EXTEND_SPEED,
            base_retract_speed: BASE_RETRACT_SPEED,
        }
    }
}

impl HookConfig {
    /// Per-tick retract speed. Heavier (higher value) items come back slower.
    pub fn retract_speed(&self, caught_points: Option<u32>) -> f32 {
        match caught_points {
            Some(points) => (self.base_retract_speed
                - points as f32 / POINTS_PER_RETRACT_PENALTY)
                .max(MIN_RETRACT_SPEED),
            None => self.base_retract_speed * EMPTY_RETRACT_MULTIPLIER,
        }
    }
}

/// Rejection-sampling parameters for item placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Horizontal keep-out on both sides (%)
    pub margin_pct: f32,
    /// Items spawn at least this far below the pivot (%)
    pub depth_offset_pct: f32,
    /// Keep-out band at the bottom (%)
    pub floor_offset_pct: f32,
    /// Attempts per item before giving up on it
    pub max_attempts: u32,
    /// Minimum center distance as a fraction of the summed sizes
    pub spacing_factor: f32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            margin_pct: PLACEMENT_MARGIN_PCT,
            depth_offset_pct: PLACEMENT_DEPTH_OFFSET_PCT,
            floor_offset_pct: PLACEMENT_FLOOR_OFFSET_PCT,
            max_attempts: PLACEMENT_MAX_ATTEMPTS,
            spacing_factor: PLACEMENT_SPACING_FACTOR,
        }
    }
}

/// The stock catalog of collectibles
pub fn default_catalog() -> Vec<GameItem> {
    [
        ("Walrus", 50, 40.0),
        ("Seal", 45, 45.0),
        ("Deepbook", 35, 50.0),
        ("Enoki", 35, 50.0),
        ("Suiplay", 25, 65.0),
        ("SuiNS", 25, 60.0),
        ("Nautilus", 20, 70.0),
        ("Slush", 20, 70.0),
    ]
    .into_iter()
    .map(|(name, points, size)| GameItem::new(name, points, size))
    .collect()
}

/// Complete game balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub round_duration_secs: u32,
    pub total_items: usize,
    pub hook: HookConfig,
    pub placement: PlacementConfig,
    pub catalog: Vec<GameItem>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            round_duration_secs: GAME_DURATION_SECONDS,
            total_items: TOTAL_ITEMS,
            hook: HookConfig::default(),
            placement: PlacementConfig::default(),
            catalog: default_catalog(),
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON override. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut config: GameConfig = serde_json::from_str(json)?;
        config.validate();
        Ok(config)
    }

    /// Repair values the simulation cannot work with
    pub fn validate(&mut self) {
        if self.hook.base_length < 0.0 {
            log::warn!("base_length {} < 0, using 0", self.hook.base_length);
            self.hook.base_length = 0.0;
        }
        if self.hook.max_length < self.hook.base_length {
            log::warn!(
                "max_length {} < base_length {}, clamping",
                self.hook.max_length,
                self.hook.base_length
            );
            self.hook.max_length = self.hook.base_length;
        }
        if self.hook.extend_speed.is_nan() || self.hook.extend_speed <= 0.0 {
            log::warn!("extend_speed {} <= 0, using {}", self.hook.extend_speed, EXTEND_SPEED);
            self.hook.extend_speed = EXTEND_SPEED;
        }
        if self.hook.base_retract_speed.is_nan() || self.hook.base_retract_speed <= 0.0 {
            log::warn!(
                "base_retract_speed {} <= 0, using {}",
                self.hook.base_retract_speed,
                BASE_RETRACT_SPEED
            );
            self.hook.base_retract_speed = BASE_RETRACT_SPEED;
        }
        if self.total_items > MAX_TOTAL_ITEMS {
            log::warn!("total_items {} too large, using {}", self.total_items, MAX_TOTAL_ITEMS);
            self.total_items = MAX_TOTAL_ITEMS;
        }
        if self.placement.max_attempts == 0 {
            log::warn!("placement.max_attempts is 0, using 1");
            self.placement.max_attempts = 1;
        }
        if self.round_duration_secs == 0 {
            log::warn!("round_duration_secs is 0, using {}", GAME_DURATION_SECONDS);
            self.round_duration_secs = GAME_DURATION_SECONDS;
        }
        self.catalog.retain(|item| {
            let ok = item.points > 0 && item.size > 0.0;
            if !ok {
                log::warn!(
                    "Dropping catalog entry {:?}: points and size must be positive",
                    item.name
                );
            }
            ok
        });
    }
}
