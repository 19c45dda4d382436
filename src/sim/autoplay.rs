//! Idle/demo mode - decides when to fire the hook without a player
//!
//! Looks along the current swing direction and fires as soon as the line
//! from the pivot to full extension passes through an item's hit radius.

use super::collision::{hit_radius, point_segment_distance};
use super::state::{GamePhase, GameState, HookStatus};
use crate::hook_direction;

/// Item the hook would reach first if fired right now
pub fn aim_target(state: &GameState) -> Option<u32> {
    if state.phase != GamePhase::Playing
        || state.hook.status != HookStatus::Swinging
        || !state.playfield.is_laid_out()
    {
        return None;
    }

    let config = &state.config.hook;
    let pivot = state.playfield.pivot_px(config);
    let dir = hook_direction(state.hook.angle);
    let start = pivot + dir * config.base_length;
    let end = pivot + dir * config.max_length;

    state
        .items
        .iter()
        .filter(|it| {
            let center = it.center_px(&state.playfield);
            point_segment_distance(center, start, end) < hit_radius(it.size())
        })
        .min_by(|a, b| {
            let da = (a.center_px(&state.playfield) - pivot).dot(dir);
            let db = (b.center_px(&state.playfield) - pivot).dot(dir);
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|it| it.id)
}

/// Whether the demo player should fire this frame
pub fn should_shoot(state: &GameState) -> bool {
    aim_target(state).is_some()
}
