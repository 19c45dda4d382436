//! Hook tip collision
//!
//! Everything here works in pixel space: item centers are converted from
//! percent positions with the measured playfield before any distance test.

use glam::Vec2;

use super::state::{PlacedItem, Playfield};
use crate::consts::{HIT_RADIUS_FACTOR, HIT_RADIUS_FLOOR};
use crate::hook_direction;

/// Tip of a hook hanging from `pivot` at `angle_deg` from vertical
#[inline]
pub fn tip_position(pivot: Vec2, angle_deg: f32, length: f32) -> Vec2 {
    pivot + hook_direction(angle_deg) * length
}

/// Catch distance around an item center. The floor keeps tiny items catchable.
#[inline]
pub fn hit_radius(size: f32) -> f32 {
    (size * HIT_RADIUS_FACTOR).max(HIT_RADIUS_FLOOR)
}

/// Whether the tip is inside an item's hit radius
pub fn tip_hits_item(tip: Vec2, item: &PlacedItem, playfield: &Playfield) -> bool {
    tip.distance(item.center_px(playfield)) < hit_radius(item.size())
}

/// First item (in iteration order) whose hit radius contains the tip
pub fn first_hit<'a>(
    tip: Vec2,
    items: &'a [PlacedItem],
    playfield: &Playfield,
) -> Option<&'a PlacedItem> {
    items.iter().find(|it| tip_hits_item(tip, it, playfield))
}

/// Distance from point `p` to the segment `a`-`b`
pub fn point_segment_distance(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameItem;

    fn item_at(id: u32, x: f32, y: f32, size: f32) -> PlacedItem {
        PlacedItem {
            id,
            item: GameItem::new("Test", 10, size),
            x,
            y,
        }
    }

    #[test]
    fn test_tip_straight_down() {
        let tip = tip_position(Vec2::new(100.0, 50.0), 0.0, 40.0);
        assert!((tip.x - 100.0).abs() < 1e-4);
        assert!((tip.y - 90.0).abs() < 1e-4);
    }

    #[test]
    fn test_tip_positive_angle_swings_right() {
        let tip = tip_position(Vec2::ZERO, 30.0, 100.0);
        assert!((tip.x - 50.0).abs() < 1e-3);
        assert!((tip.y - 86.602_54).abs() < 1e-3);
    }

    #[test]
    fn test_hit_radius_floor() {
        assert_eq!(hit_radius(10.0), 10.0);
        assert!((hit_radius(40.0) - 22.0).abs() < 1e-4);
    }

    #[test]
    fn test_tip_hits_item() {
        let field = Playfield::new(1000.0, 1000.0);
        // Center at (500, 500), size 40 -> radius 22
        let it = item_at(0, 50.0, 50.0, 40.0);
        assert!(tip_hits_item(Vec2::new(510.0, 510.0), &it, &field));
        assert!(!tip_hits_item(Vec2::new(523.0, 500.0), &it, &field));
        assert!(!tip_hits_item(Vec2::new(530.0, 500.0), &it, &field));
    }

    #[test]
    fn test_first_hit_uses_iteration_order() {
        let field = Playfield::new(1000.0, 1000.0);
        let items = vec![item_at(3, 50.0, 50.0, 70.0), item_at(1, 51.0, 50.0, 70.0)];
        let hit = first_hit(Vec2::new(505.0, 500.0), &items, &field).map(|it| it.id);
        assert_eq!(hit, Some(3));
    }

    #[test]
    fn test_point_segment_distance() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(0.0, 100.0);
        assert!((point_segment_distance(Vec2::new(5.0, 50.0), a, b) - 5.0).abs() < 1e-4);
        assert!((point_segment_distance(Vec2::new(0.0, 110.0), a, b) - 10.0).abs() < 1e-4);
        assert!((point_segment_distance(Vec2::new(3.0, 4.0), a, a) - 5.0).abs() < 1e-4);
    }
}
