//! Camera tracking and endless-level recycling
//!
//! Platforms and enemies that fall behind the camera are moved ahead of the
//! view instead of being despawned, so the collections never change size.
//! Coins are placed once and never recycled.

use rand::Rng;

use super::state::{Enemy, Platform};
use crate::tuning::Tuning;

/// Camera offset for a player x position
#[inline]
pub fn camera_offset(player_x: f32, lead: f32) -> f32 {
    player_x - lead
}

/// Move platforms whose right edge is further than `recycle_slack` behind
/// the camera to a random spot ahead of the view. Returns how many moved.
pub fn recycle_platforms<R: Rng + ?Sized>(
    platforms: &mut [Platform],
    camera_x: f32,
    view_width: f32,
    tuning: &Tuning,
    rng: &mut R,
) -> usize {
    let (band_lo, band_hi) = tuning.platform_band;
    let mut moved = 0;

    for (i, plat) in platforms.iter_mut().enumerate() {
        if plat.pos.x + plat.size.x >= camera_x - tuning.recycle_slack {
            continue;
        }
        plat.pos.x = camera_x + view_width + rng.random::<f32>() * tuning.platform_jitter;
        plat.pos.y = rng.random_range(band_lo..band_hi);
        moved += 1;
        log::trace!("Platform {i} recycled to ({:.1}, {:.1})", plat.pos.x, plat.pos.y);
    }

    moved
}

/// Walk every enemy left by its speed, then wrap any that left the view back
/// ahead of it on the enemy lane. Returns how many wrapped.
pub fn advance_enemies<R: Rng + ?Sized>(
    enemies: &mut [Enemy],
    camera_x: f32,
    view_width: f32,
    tuning: &Tuning,
    rng: &mut R,
) -> usize {
    let mut moved = 0;

    for (i, enemy) in enemies.iter_mut().enumerate() {
        enemy.pos.x -= enemy.speed;
        if enemy.pos.x >= camera_x - enemy.size.x {
            continue;
        }
        enemy.pos.x = camera_x + view_width + rng.random::<f32>() * tuning.enemy_jitter;
        enemy.pos.y = tuning.enemy_lane_y;
        moved += 1;
        log::trace!("Enemy {i} recycled to x={:.1}", enemy.pos.x);
    }

    moved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::VIEW_WIDTH;
    use glam::Vec2;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn platform(x: f32, y: f32) -> Platform {
        Platform {
            pos: Vec2::new(x, y),
            size: Vec2::new(100.0, 10.0),
        }
    }

    #[test]
    fn test_camera_offset() {
        assert_eq!(camera_offset(50.0, 100.0), -50.0);
        assert_eq!(camera_offset(1234.0, 100.0), 1134.0);
    }

    #[test]
    fn test_platform_behind_camera_recycles() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let camera = 1000.0;
        // Right edge at 850, behind camera - 100 = 900
        let mut plats = [platform(750.0, 300.0), platform(1000.0, 300.0)];

        let moved = recycle_platforms(&mut plats, camera, VIEW_WIDTH, &tuning, &mut rng);
        assert_eq!(moved, 1);
        assert!(plats[0].pos.x >= camera + VIEW_WIDTH);
        assert!(plats[0].pos.x < camera + VIEW_WIDTH + 200.0);
        assert!((150.0..350.0).contains(&plats[0].pos.y));
        assert_eq!(plats[1].pos, Vec2::new(1000.0, 300.0));
    }

    #[test]
    fn test_platform_at_slack_boundary_stays() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(3);
        // Right edge exactly at camera - 100
        let mut plats = [platform(800.0, 300.0)];
        let moved = recycle_platforms(&mut plats, 1000.0, VIEW_WIDTH, &tuning, &mut rng);
        assert_eq!(moved, 0);
        assert_eq!(plats[0].pos.x, 800.0);
    }

    #[test]
    fn test_enemy_walks_left_and_wraps() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(9);
        let mut enemies = [Enemy {
            pos: Vec2::new(600.0, 340.0),
            size: Vec2::new(30.0, 30.0),
            speed: 2.0,
        }];

        assert_eq!(advance_enemies(&mut enemies, 0.0, VIEW_WIDTH, &tuning, &mut rng), 0);
        assert_eq!(enemies[0].pos.x, 598.0);

        // Camera far ahead: enemy is now behind the left edge
        let camera = 700.0;
        assert_eq!(advance_enemies(&mut enemies, camera, VIEW_WIDTH, &tuning, &mut rng), 1);
        assert!(enemies[0].pos.x >= camera + VIEW_WIDTH);
        assert!(enemies[0].pos.x < camera + VIEW_WIDTH + 300.0);
        assert_eq!(enemies[0].pos.y, 340.0);
    }

    proptest! {
        #[test]
        fn prop_recycled_platform_lands_ahead_in_band(
            seed in any::<u64>(),
            camera in -1000.0f32..100_000.0,
            behind in 0.5f32..5000.0,
        ) {
            let tuning = Tuning::default();
            let mut rng = Pcg32::seed_from_u64(seed);
            // Right edge strictly behind camera - slack
            let x = camera - tuning.recycle_slack - behind - 100.0;
            let mut plats = [platform(x, 300.0)];

            let moved = recycle_platforms(&mut plats, camera, VIEW_WIDTH, &tuning, &mut rng);
            prop_assert_eq!(moved, 1);
            prop_assert!(plats[0].pos.x >= camera + VIEW_WIDTH);
            prop_assert!(plats[0].pos.y >= 150.0 && plats[0].pos.y < 350.0);
        }
    }
}
