//! Property tests for placement and hook invariants

use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use sui_miners::sim::{
    GameState, HookStatus, Playfield, TickInput, generate_items, start_round, tick,
};
use sui_miners::tuning::default_catalog;
use sui_miners::{GameConfig, PlacementConfig};

proptest! {
    #[test]
    fn placed_items_never_crowd(
        seed in any::<u64>(),
        width in 200.0f32..2000.0,
        height in 200.0f32..1500.0,
        count in 0usize..20,
    ) {
        let config = PlacementConfig { max_attempts: 200, ..Default::default() };
        let field = Playfield::new(width, height);
        let items = generate_items(
            &mut Pcg32::seed_from_u64(seed),
            count,
            &default_catalog(),
            &field,
            15.0,
            &config,
        );

        prop_assert!(items.len() <= count);
        for (i, a) in items.iter().enumerate() {
            prop_assert!(a.y >= 15.0 + config.depth_offset_pct);
            prop_assert!(a.y <= 100.0 - config.floor_offset_pct);
            prop_assert!(a.x >= config.margin_pct && a.x <= 100.0 - config.margin_pct);
            prop_assert_eq!(a.id, i as u32);
            for b in &items[i + 1..] {
                let d = a.center_px(&field).distance(b.center_px(&field));
                prop_assert!(d >= (a.size() + b.size()) * config.spacing_factor);
            }
        }
    }

    #[test]
    fn hook_length_stays_in_bounds(
        seed in any::<u64>(),
        frames in prop::collection::vec((any::<bool>(), 1u32..50), 1..600),
    ) {
        let mut state = GameState::new(seed, GameConfig::default());
        prop_assert!(start_round(&mut state, Playfield::new(1024.0, 768.0)));
        let base = state.config.hook.base_length;
        let max = state.config.hook.max_length;

        let mut now = 0.0f64;
        for (shoot, dt) in frames {
            now += dt as f64;
            let prev = state.hook.clone();
            tick(&mut state, &TickInput { shoot }, now);

            prop_assert!(state.hook.length >= base && state.hook.length <= max);
            prop_assert!(state.hook.status != HookStatus::Scoring);
            if prev.status != HookStatus::Swinging {
                prop_assert_eq!(prev.angle, state.hook.angle);
            }
            if state.hook.caught_item.is_some() {
                prop_assert_eq!(state.hook.status, HookStatus::Retracting);
            }
            if let (Some(a), Some(b)) = (prev.caught_item, state.hook.caught_item) {
                prop_assert_eq!(a, b);
            }
        }
    }
}
