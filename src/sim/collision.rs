//! Collision detection and response
//!
//! Every check is an open-interval AABB overlap against the player. Only
//! landing on a platform while falling is resolved; side and underside
//! contacts with platforms pass through.

use super::effects::{Effects, SoundCue};
use super::state::{Coin, Enemy, Platform, Player};

/// Resolve landings. Clears `grounded` first so a player with nothing
/// underneath keeps falling.
///
/// Returns the index of the last platform landed on, if any.
pub fn resolve_platforms(player: &mut Player, platforms: &[Platform]) -> Option<usize> {
    player.grounded = false;
    let mut landed = None;

    for (i, plat) in platforms.iter().enumerate() {
        if player.vel.y > 0.0 && player.bounds().overlaps(&plat.bounds()) {
            player.pos.y = plat.pos.y - player.size.y;
            player.vel.y = 0.0;
            player.grounded = true;
            landed = Some(i);
        }
    }

    landed
}

/// Index of the first enemy touching the player
pub fn enemy_contact(player: &Player, enemies: &[Enemy]) -> Option<usize> {
    let bounds = player.bounds();
    enemies.iter().position(|e| bounds.overlaps(&e.bounds()))
}

/// Collect every uncollected coin the player touches. Returns the points
/// earned.
pub fn collect_coins(
    player: &Player,
    coins: &mut [Coin],
    bonus: u64,
    fx: &mut impl Effects,
) -> u64 {
    let bounds = player.bounds();
    let mut earned = 0;

    for (i, coin) in coins.iter_mut().enumerate() {
        if coin.collected || !bounds.overlaps(&coin.bounds()) {
            continue;
        }
        coin.collected = true;
        earned += bonus;
        fx.play_sound(SoundCue::Coin);
        log::debug!("Coin {i} collected");
    }

    earned
}
