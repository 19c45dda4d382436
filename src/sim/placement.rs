//! Item placement
//!
//! Rejection sampling: draw a random catalog entry and position, keep it if
//! it is far enough from everything placed so far, otherwise draw again.
//! An item that cannot be placed within the attempt budget is skipped, so a
//! crowded playfield yields fewer items rather than overlapping ones.

use rand::Rng;

use super::state::{GameItem, PlacedItem, Playfield};
use crate::tuning::PlacementConfig;

/// Place up to `count` non-overlapping items below the pivot.
///
/// Ids run 0.. over the items actually placed. Returns an empty set when the
/// playfield has not been measured yet or the catalog is empty.
pub fn generate_items<R: Rng>(
    rng: &mut R,
    count: usize,
    catalog: &[GameItem],
    playfield: &Playfield,
    pivot_y_pct: f32,
    config: &PlacementConfig,
) -> Vec<PlacedItem> {
    if !playfield.is_laid_out() || catalog.is_empty() {
        return Vec::new();
    }

    let x_min = config.margin_pct;
    let x_max = (100.0 - config.margin_pct).max(x_min);
    let y_min = pivot_y_pct + config.depth_offset_pct;
    let y_max = (100.0 - config.floor_offset_pct).max(y_min);

    let mut out: Vec<PlacedItem> = Vec::with_capacity(count);
    let mut skipped = 0;

    for _ in 0..count {
        let mut placed = false;
        for _ in 0..config.max_attempts {
            let kind = &catalog[rng.random_range(0..catalog.len())];
            let x = sample(rng, x_min, x_max);
            let y = sample(rng, y_min, y_max);

            let center = playfield.to_px(x, y);
            let overlaps = out.iter().any(|p| {
                center.distance(p.center_px(playfield))
                    < (kind.size + p.size()) * config.spacing_factor
            });
            if overlaps {
                continue;
            }

            out.push(PlacedItem {
                id: out.len() as u32,
                item: kind.clone(),
                x,
                y,
            });
            placed = true;
            break;
        }
        if !placed {
            skipped += 1;
        }
    }

    if skipped > 0 {
        log::debug!(
            "Placement skipped {} of {} items after {} attempts each",
            skipped,
            count,
            config.max_attempts
        );
    }
    out
}

/// Uniform in [lo, hi]; degenerate ranges collapse to `lo`
fn sample<R: Rng>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo { rng.random_range(lo..=hi) } else { lo }
}
