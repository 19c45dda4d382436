//! Deterministic simulation module
//!
//! All gameplay logic lives here:
//! - Seeded RNG only
//! - Stable iteration order (placement order of items)
//! - Time enters only through the `now_ms` passed to each tick
//! - No rendering or platform dependencies

pub mod autoplay;
pub mod collision;
pub mod placement;
pub mod state;
pub mod tick;

pub use collision::{first_hit, hit_radius, tip_hits_item, tip_position};
pub use placement::generate_items;
pub use state::{
    GameEvent, GameItem, GamePhase, GameState, HookState, HookStatus, PlacedItem, Playfield,
    RngState,
};
pub use tick::{TickInput, advance, second_elapsed, start_round, swing_angle, tick};
