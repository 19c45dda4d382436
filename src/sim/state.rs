//! Game state and core simulation types
//!
//! One `GameState` per session owns everything a round touches: the
//! active items, the hook, the countdown and the score.

use glam::Vec2;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::percent_to_px;
use crate::tuning::{GameConfig, HookConfig};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, no round yet
    Start,
    /// Round in progress
    Playing,
    /// Countdown hit zero
    GameOver,
}

/// Catalog entry for a kind of collectible. Never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameItem {
    pub name: String,
    /// Reward when scored
    pub points: u32,
    /// Diameter in playfield pixels
    pub size: f32,
    /// Sprite reference for the presentation layer
    pub image: String,
}

impl GameItem {
    pub fn new(name: &str, points: u32, size: f32) -> Self {
        Self {
            name: name.to_string(),
            points,
            size,
            image: format!("{}.webp", name.to_lowercase()),
        }
    }
}

/// A catalog item placed on the playfield for one round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedItem {
    /// Unique within the round, assigned at placement
    pub id: u32,
    pub item: GameItem,
    /// Center, percent of playfield width
    pub x: f32,
    /// Center, percent of playfield height
    pub y: f32,
}

impl PlacedItem {
    #[inline]
    pub fn points(&self) -> u32 {
        self.item.points
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.item.size
    }

    /// Center in pixels
    pub fn center_px(&self, playfield: &Playfield) -> Vec2 {
        playfield.to_px(self.x, self.y)
    }
}

/// Measured size of the play area in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// False until the host has measured a non-degenerate area
    pub fn is_laid_out(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    #[inline]
    pub fn to_px(&self, x_pct: f32, y_pct: f32) -> Vec2 {
        percent_to_px(x_pct, y_pct, self.width, self.height)
    }

    /// Hook pivot in pixels
    pub fn pivot_px(&self, hook: &HookConfig) -> Vec2 {
        self.to_px(hook.pivot_x_pct, hook.pivot_y_pct)
    }

    /// Left, right and bottom edges. The top is open.
    pub fn contains_tip(&self, tip: Vec2) -> bool {
        tip.x >= 0.0 && tip.x <= self.width && tip.y <= self.height
    }
}

/// Hook state machine status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HookStatus {
    /// Oscillating at base length, waiting for a shot
    Swinging,
    /// Moving outward along a frozen angle
    Extending,
    /// Coming back, with or without a catch
    Retracting,
    /// Back at the pivot with a catch; resolved within the same tick
    Scoring,
}

/// The hook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookState {
    pub status: HookStatus,
    /// Degrees from vertical
    pub angle: f32,
    /// Pivot to tip (pixels), always within [base_length, max_length]
    pub length: f32,
    /// Id of the caught item in the active set
    pub caught_item: Option<u32>,
}

impl HookState {
    /// Fresh hook for a new round
    pub fn new(config: &HookConfig) -> Self {
        Self {
            status: HookStatus::Swinging,
            angle: 0.0,
            length: config.base_length,
            caught_item: None,
        }
    }

    /// Tip position in pixels for a given pivot
    pub fn tip(&self, pivot: Vec2) -> Vec2 {
        super::collision::tip_position(pivot, self.angle, self.length)
    }
}

/// Notifications for the presentation layer, drained once per frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    RoundStarted { seed: u64, items: usize },
    Shot { angle: f32 },
    Caught { item_id: u32 },
    Missed,
    Scored { item_id: u32, name: String, points: u32 },
    RoundEnded { final_score: u64 },
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    /// Advanced once per round so every round gets its own layout
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::new(self.seed, self.stream)
    }
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub seed: u64,
    pub rng_state: RngState,
    pub config: GameConfig,
    pub phase: GamePhase,
    /// Seconds left in the round
    pub time_remaining: u32,
    pub score: u64,
    /// Active items, in placement order
    pub items: Vec<PlacedItem>,
    pub hook: HookState,
    /// Last measured play area
    pub playfield: Playfield,
    /// Rounds started this session
    pub rounds_played: u32,
    /// Pending notifications
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a session on the start screen
    pub fn new(seed: u64, config: GameConfig) -> Self {
        let hook = HookState::new(&config.hook);
        Self {
            seed,
            rng_state: RngState::new(seed),
            time_remaining: config.round_duration_secs,
            config,
            phase: GamePhase::Start,
            score: 0,
            items: Vec::new(),
            hook,
            playfield: Playfield::default(),
            rounds_played: 0,
            events: Vec::new(),
        }
    }

    /// Look up an active item
    pub fn item(&self, id: u32) -> Option<&PlacedItem> {
        self.items.iter().find(|it| it.id == id)
    }

    /// The item hanging from the hook, if any
    pub fn caught_item(&self) -> Option<&PlacedItem> {
        self.hook.caught_item.and_then(|id| self.item(id))
    }

    /// Shoot request from input. Honoured only while playing with a swinging hook.
    pub fn shoot(&mut self) -> bool {
        if self.phase != GamePhase::Playing || self.hook.status != HookStatus::Swinging {
            return false;
        }
        self.hook.status = HookStatus::Extending;
        log::debug!("Shot at {:.1} degrees", self.hook.angle);
        self.events.push(GameEvent::Shot {
            angle: self.hook.angle,
        });
        true
    }

    /// Stop the round now. Later ticks are no-ops.
    pub fn end_round(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.phase = GamePhase::GameOver;
        log::info!("Round over, final score {}", self.score);
        self.events.push(GameEvent::RoundEnded {
            final_score: self.score,
        });
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_waits_on_start_screen() {
        let state = GameState::new(7, GameConfig::default());
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.hook.status, HookStatus::Swinging);
        assert_eq!(state.hook.length, state.config.hook.base_length);
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_shoot_ignored_outside_round() {
        let mut state = GameState::new(7, GameConfig::default());
        assert!(!state.shoot());
        assert_eq!(state.hook.status, HookStatus::Swinging);
    }

    #[test]
    fn test_playfield_layout_guard() {
        assert!(!Playfield::default().is_laid_out());
        assert!(!Playfield::new(800.0, 0.0).is_laid_out());
        assert!(Playfield::new(800.0, 600.0).is_laid_out());
    }

    #[test]
    fn test_playfield_top_is_open() {
        let field = Playfield::new(100.0, 100.0);
        assert!(field.contains_tip(Vec2::new(50.0, -20.0)));
        assert!(!field.contains_tip(Vec2::new(-1.0, 50.0)));
        assert!(!field.contains_tip(Vec2::new(101.0, 50.0)));
        assert!(!field.contains_tip(Vec2::new(50.0, 101.0)));
    }
}
