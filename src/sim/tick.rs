//! Fixed timestep simulation tick
//!
//! One tick: camera → input/physics → collisions → recycling → score.

use super::collision::{collect_coins, enemy_contact, resolve_platforms};
use super::effects::Effects;
use super::input::InputState;
use super::physics::step_player;
use super::scroll::{advance_enemies, camera_offset, recycle_platforms};
use super::state::{GamePhase, GameState};
use crate::consts::VIEW_WIDTH;

/// Advance the game state by one tick and return the resulting phase.
///
/// Paused and finished games are left untouched. Rendering is up to the
/// caller; only sound cues go through `fx` here.
pub fn tick(state: &mut GameState, input: &InputState, fx: &mut impl Effects) -> GamePhase {
    if state.phase != GamePhase::Running {
        return state.phase;
    }

    state.time_ticks += 1;

    // Camera follows the player as of the start of the tick
    state.camera_x = camera_offset(state.player.pos.x, state.tuning.camera_lead);
    let camera_x = state.camera_x;

    step_player(&mut state.player, input, state.tuning.gravity, fx);

    resolve_platforms(&mut state.player, &state.platforms);
    recycle_platforms(
        &mut state.platforms,
        camera_x,
        VIEW_WIDTH,
        &state.tuning,
        &mut state.rng,
    );

    advance_enemies(
        &mut state.enemies,
        camera_x,
        VIEW_WIDTH,
        &state.tuning,
        &mut state.rng,
    );
    if let Some(i) = enemy_contact(&state.player, &state.enemies) {
        log::info!("Hit enemy {i} at x={:.1}", state.player.pos.x);
        state.trigger_game_over();
        return state.phase;
    }

    state.score += collect_coins(
        &state.player,
        &mut state.coins,
        state.tuning.coin_bonus,
        fx,
    );
    state.score += state.tuning.score_per_tick;

    state.phase
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::effects::{NullEffects, RecordingEffects, SoundCue};
    use crate::sim::state::Platform;
    use glam::Vec2;
    use proptest::prelude::*;

    /// A state with nothing to collide with except what the test adds
    fn empty_state() -> GameState {
        let mut state = GameState::new(12345);
        state.platforms.clear();
        state.enemies.clear();
        state.coins.clear();
        state
    }

    #[test]
    fn test_free_fall_scenario() {
        let mut state = empty_state();
        let phase = tick(&mut state, &InputState::default(), &mut NullEffects);
        assert_eq!(phase, GamePhase::Running);
        assert_eq!(state.player.vel.y, 0.5);
        assert_eq!(state.player.pos, Vec2::new(50.0, 300.5));
        assert_eq!(state.camera_x, -50.0);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_lands_on_ground_and_stays() {
        let mut state = empty_state();
        state.platforms.push(Platform {
            pos: Vec2::new(0.0, 370.0),
            size: Vec2::new(800.0, 30.0),
        });

        let input = InputState::default();
        for _ in 0..100 {
            tick(&mut state, &input, &mut NullEffects);
        }
        assert!(state.player.grounded);
        assert_eq!(state.player.pos.y + state.player.size.y, 370.0);
        assert_eq!(state.player.vel.y, 0.0);
    }

    #[test]
    fn test_jump_from_ground() {
        let mut state = empty_state();
        state.platforms.push(Platform {
            pos: Vec2::new(0.0, 370.0),
            size: Vec2::new(800.0, 30.0),
        });
        for _ in 0..100 {
            tick(&mut state, &InputState::default(), &mut NullEffects);
        }
        assert!(state.player.grounded);

        let mut fx = RecordingEffects::default();
        let jump = InputState {
            jump: true,
            ..Default::default()
        };
        tick(&mut state, &jump, &mut fx);
        assert!(!state.player.grounded);
        assert!(state.player.vel.y < 0.0);

        // Holding jump in the air does not jump again
        tick(&mut state, &jump, &mut fx);
        assert_eq!(fx.count(SoundCue::Jump), 1);
    }

    #[test]
    fn test_enemy_contact_ends_game_same_tick() {
        let mut state = GameState::new(1);
        // Large enough to cover the player wherever the first platform puts it
        state.enemies[0].pos = Vec2::new(40.0, 200.0);
        state.enemies[0].size = Vec2::new(100.0, 200.0);
        let score_before = state.score;

        let phase = tick(&mut state, &InputState::default(), &mut NullEffects);
        assert_eq!(phase, GamePhase::GameOver);
        assert_eq!(state.score, score_before);

        // Nothing moves afterwards
        let player_pos = state.player.pos;
        let enemy_pos = state.enemies[0].pos;
        let ticks = state.time_ticks;
        let right = InputState {
            right: true,
            ..Default::default()
        };
        for _ in 0..10 {
            assert_eq!(tick(&mut state, &right, &mut NullEffects), GamePhase::GameOver);
        }
        assert_eq!(state.player.pos, player_pos);
        assert_eq!(state.enemies[0].pos, enemy_pos);
        assert_eq!(state.time_ticks, ticks);
        assert_eq!(state.score, score_before);
    }

    #[test]
    fn test_coin_scores_once() {
        let mut state = empty_state();
        state.coins.push(crate::sim::state::Coin {
            pos: Vec2::new(55.0, 305.0),
            size: Vec2::new(20.0, 20.0),
            collected: false,
        });
        let mut fx = RecordingEffects::default();

        tick(&mut state, &InputState::default(), &mut fx);
        assert!(state.coins[0].collected);
        assert_eq!(state.score, 10 + 1);

        tick(&mut state, &InputState::default(), &mut fx);
        assert_eq!(state.score, 10 + 2);
        assert_eq!(fx.count(SoundCue::Coin), 1);
    }

    #[test]
    fn test_pause_twice_changes_nothing() {
        let mut state = GameState::new(5);
        let right = InputState {
            right: true,
            ..Default::default()
        };
        for _ in 0..5 {
            tick(&mut state, &right, &mut NullEffects);
        }
        let player_pos = state.player.pos;
        let enemy_pos = state.enemies[0].pos;
        let score = state.score;

        state.toggle_pause();
        for _ in 0..5 {
            assert_eq!(tick(&mut state, &right, &mut NullEffects), GamePhase::Paused);
        }
        assert_eq!(state.score, score);
        state.toggle_pause();

        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.player.pos, player_pos);
        assert_eq!(state.enemies[0].pos, enemy_pos);
        assert_eq!(state.score, score);
    }

    #[test]
    fn test_platforms_recycle_when_running_right() {
        let mut state = GameState::new(77);
        // Keep the player from falling or dying while the level scrolls
        state.enemies.clear();
        let right = InputState {
            right: true,
            ..Default::default()
        };
        let count = state.platforms.len();
        for _ in 0..600 {
            state.player.pos.y = 0.0;
            state.player.vel.y = 0.0;
            tick(&mut state, &right, &mut NullEffects);
        }
        assert_eq!(state.platforms.len(), count);
        let camera = state.camera_x;
        for plat in &state.platforms {
            assert!(plat.pos.x + plat.size.x >= camera - 100.0 - 4.0);
        }
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        let inputs = [
            InputState {
                right: true,
                ..Default::default()
            },
            InputState {
                right: true,
                jump: true,
                ..Default::default()
            },
            InputState::default(),
        ];

        for i in 0..900 {
            let input = &inputs[i % inputs.len()];
            tick(&mut state1, input, &mut NullEffects);
            tick(&mut state2, input, &mut NullEffects);
        }

        assert_eq!(state1.phase, state2.phase);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.player.pos, state2.player.pos);
        for (a, b) in state1.platforms.iter().zip(&state2.platforms) {
            assert_eq!(a.pos, b.pos);
        }
    }

    fn arb_input() -> impl Strategy<Value = InputState> {
        (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(left, right, jump)| InputState {
            left,
            right,
            jump,
        })
    }

    proptest! {
        #[test]
        fn prop_score_never_decreases(
            seed in any::<u64>(),
            inputs in proptest::collection::vec(arb_input(), 1..300),
        ) {
            let mut state = GameState::new(seed);
            let mut last = state.score;
            for input in &inputs {
                let was_running = state.is_running();
                tick(&mut state, input, &mut NullEffects);
                prop_assert!(state.score >= last);
                if !was_running {
                    prop_assert_eq!(state.score, last);
                }
                last = state.score;
            }
        }

        #[test]
        fn prop_collections_keep_their_size(
            seed in any::<u64>(),
            inputs in proptest::collection::vec(arb_input(), 1..300),
        ) {
            let mut state = GameState::new(seed);
            let (p, e, c) = (state.platforms.len(), state.enemies.len(), state.coins.len());
            for input in &inputs {
                tick(&mut state, input, &mut NullEffects);
            }
            prop_assert_eq!(state.platforms.len(), p);
            prop_assert_eq!(state.enemies.len(), e);
            prop_assert_eq!(state.coins.len(), c);
        }
    }
}
