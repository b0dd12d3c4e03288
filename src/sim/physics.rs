//! Player movement: input to velocity, jumping, gravity and integration

use super::effects::{Effects, SoundCue};
use super::input::InputState;
use super::state::Player;

/// Advance the player by one tick.
///
/// Horizontal velocity is replaced (not accumulated) from the held
/// direction. A jump is honored only while grounded; airborne requests are
/// dropped, not buffered.
pub fn step_player(player: &mut Player, input: &InputState, gravity: f32, fx: &mut impl Effects) {
    player.vel.x = input.horizontal() * player.speed;
    try_jump(player, input.jump, fx);
    player.vel.y += gravity;
    player.pos += player.vel;
}

/// Apply the jump impulse if requested while grounded. Returns whether the
/// jump happened.
pub fn try_jump(player: &mut Player, requested: bool, fx: &mut impl Effects) -> bool {
    if !(requested && player.grounded) {
        return false;
    }
    player.vel.y = player.jump_power;
    player.grounded = false;
    fx.play_sound(SoundCue::Jump);
    log::debug!("Jump from y={:.1}", player.pos.y);
    true
}
