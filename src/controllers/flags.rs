use glam::Vec2;

use crate::components::{is_zero_approx, Animation, Character, DIVE_VELOCITY, JUMP_VELOCITY};

/// Flag-based controller: three booleans and a chain of `if`s.
///
/// Every branch has to remember which flags to check and which to reset,
/// which is exactly what the enum and state-machine controllers remove.
#[derive(Debug, Default)]
pub struct FlagController {
    is_jumping: bool,
    is_ducking: bool,
    is_diving: bool,
    is_moving: bool,
}

impl FlagController {
    pub fn new(player: &mut Character) -> Self {
        player.sprite.play(Animation::Stand);
        player.velocity = Vec2::ZERO;
        Self::default()
    }

    pub fn label(&self) -> &'static str {
        if self.is_diving {
            "Diving"
        } else if self.is_ducking {
            "Ducking"
        } else if self.is_jumping {
            "Jumping"
        } else if self.is_moving {
            "Moving"
        } else {
            "Standing"
        }
    }

    pub fn physics_process(&mut self, player: &mut Character, _dt: f32) {
        let input = player.input;

        // No floor check: a press while airborne jumps again.
        if input.jump.pressed && !self.is_ducking {
            player.velocity.y = JUMP_VELOCITY;
            player.sprite.play(Animation::Jump);
            self.is_jumping = true;
            self.is_moving = false;
        } else if input.duck.held {
            if self.is_jumping && !self.is_diving {
                player.sprite.play(Animation::Dive);
                player.velocity.x = 0.0;
                player.velocity.y += DIVE_VELOCITY;
                self.is_diving = true;
            }

            if self.is_diving {
                // Landed with duck still down: go straight into a crouch.
                if player.on_floor {
                    player.sprite.play(Animation::Duck);
                    player.velocity = Vec2::ZERO;
                    self.is_diving = false;
                    self.is_jumping = false;
                    self.is_ducking = true;
                }
            } else if !self.is_jumping {
                player.sprite.play(Animation::Duck);
                player.velocity = Vec2::ZERO;
                self.is_ducking = true;
                self.is_moving = false;
            }
        } else if input.duck.released && self.is_ducking {
            self.is_ducking = false;
        } else if player.on_floor && is_zero_approx(input.axis) && !self.is_ducking {
            player.velocity = Vec2::ZERO;
            player.sprite.play(Animation::Stand);
            self.is_diving = false;
            self.is_ducking = false;
            self.is_jumping = false;
            self.is_moving = false;
        } else {
            if player.on_floor {
                self.is_diving = false;
                self.is_jumping = false;
            }
            if !self.is_jumping {
                player.sprite.play(Animation::Move);
                self.is_moving = true;
            }
            player.steer();
        }
    }
}
