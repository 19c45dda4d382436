//! Per-frame simulation tick
//!
//! `advance` is the hook physics step and is pure. `tick` wraps it with
//! input handling, events and the scoring step for a whole round.

use super::collision::{first_hit, tip_position};
use super::placement::generate_items;
use super::state::{GameEvent, GamePhase, GameState, HookState, HookStatus, PlacedItem, Playfield};
use crate::tuning::HookConfig;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Fire the hook (space/tap)
    pub shoot: bool,
}

/// Swing angle (degrees) at wall-clock time `now_ms`.
///
/// The phase is a function of absolute time, not of accumulated frame
/// deltas: it never drifts with frame rate, but after a pause the hook
/// jumps to wherever the clock puts it instead of resuming smoothly.
/// Computed in f64 because epoch milliseconds overflow f32 precision.
pub fn swing_angle(config: &HookConfig, now_ms: f64) -> f32 {
    (config.swing_angle_range as f64 * (now_ms * config.swing_speed).sin()) as f32
}

/// Advance the hook by one frame.
///
/// Extension and retraction move a fixed number of pixels per call, so hook
/// speed follows the display refresh rate. A hook in `Scoring` is returned
/// unchanged; resolving it is the caller's job.
pub fn advance(
    hook: &HookState,
    items: &[PlacedItem],
    playfield: &Playfield,
    config: &HookConfig,
    now_ms: f64,
) -> HookState {
    let mut next = hook.clone();
    if next.status == HookStatus::Scoring || !playfield.is_laid_out() {
        return next;
    }

    match next.status {
        HookStatus::Swinging => {
            next.angle = swing_angle(config, now_ms);
        }

        HookStatus::Extending => {
            next.length = (next.length + config.extend_speed).min(config.max_length);

            let pivot = playfield.pivot_px(config);
            let tip = tip_position(pivot, next.angle, next.length);

            if next.caught_item.is_none() {
                if let Some(hit) = first_hit(tip, items, playfield) {
                    next.caught_item = Some(hit.id);
                    next.status = HookStatus::Retracting;
                }
            }

            if !playfield.contains_tip(tip) || next.length >= config.max_length {
                next.status = HookStatus::Retracting;
            }
        }

        HookStatus::Retracting => {
            // The handle may outlive its item if the host removed it
            let caught = next
                .caught_item
                .and_then(|id| items.iter().find(|it| it.id == id));
            if caught.is_none() {
                next.caught_item = None;
            }

            next.length -= config.retract_speed(caught.map(|it| it.points()));

            if next.length <= config.base_length {
                next.length = config.base_length;
                next.status = if next.caught_item.is_some() {
                    HookStatus::Scoring
                } else {
                    HookStatus::Swinging
                };
            }
        }

        HookStatus::Scoring => {}
    }

    next
}

/// Begin a new round (also used for replay after game over).
///
/// Returns false, leaving the state untouched, if the playfield has not been
/// measured yet.
pub fn start_round(state: &mut GameState, playfield: Playfield) -> bool {
    if !playfield.is_laid_out() {
        log::warn!(
            "Playfield not laid out ({}x{}), round not started",
            playfield.width,
            playfield.height
        );
        return false;
    }

    state.rng_state.stream = state.rounds_played as u64;
    let mut rng = state.rng_state.to_rng();
    let config = &state.config;

    state.items = generate_items(
        &mut rng,
        config.total_items,
        &config.catalog,
        &playfield,
        config.hook.pivot_y_pct,
        &config.placement,
    );
    state.hook = HookState::new(&config.hook);
    state.time_remaining = config.round_duration_secs;
    state.score = 0;
    state.playfield = playfield;
    state.phase = GamePhase::Playing;
    state.rounds_played += 1;

    log::info!(
        "Round {} started (seed {}, {} items)",
        state.rounds_played,
        state.seed,
        state.items.len()
    );
    state.events.push(GameEvent::RoundStarted {
        seed: state.seed,
        items: state.items.len(),
    });
    true
}

/// Advance the round by one animation frame
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: f64) {
    if state.phase != GamePhase::Playing {
        return;
    }

    if input.shoot {
        state.shoot();
    }

    let prev = state.hook.status;
    let next = advance(
        &state.hook,
        &state.items,
        &state.playfield,
        &state.config.hook,
        now_ms,
    );

    if prev == HookStatus::Extending && next.status == HookStatus::Retracting {
        match next.caught_item {
            Some(item_id) => {
                log::debug!("Caught item {}", item_id);
                state.events.push(GameEvent::Caught { item_id });
            }
            None => {
                log::debug!("Missed at length {:.0}", next.length);
                state.events.push(GameEvent::Missed);
            }
        }
    }

    state.hook = next;

    if state.hook.status == HookStatus::Scoring {
        resolve_scoring(state);
    }
}

/// Credit the caught item, remove it from play and free the hook, all at once
fn resolve_scoring(state: &mut GameState) {
    if let Some(item_id) = state.hook.caught_item.take() {
        if let Some(idx) = state.items.iter().position(|it| it.id == item_id) {
            let item = state.items.remove(idx);
            state.score += item.points() as u64;
            log::debug!(
                "Scored {} (+{}), total {}",
                item.item.name,
                item.points(),
                state.score
            );
            state.events.push(GameEvent::Scored {
                item_id,
                name: item.item.name,
                points: item.item.points,
            });
        }
    }
    state.hook.status = HookStatus::Swinging;
}

/// One second of round time has passed
pub fn second_elapsed(state: &mut GameState) {
    if state.phase != GamePhase::Playing {
        return;
    }
    state.time_remaining = state.time_remaining.saturating_sub(1);
    if state.time_remaining == 0 {
        state.end_round();
    }
}
