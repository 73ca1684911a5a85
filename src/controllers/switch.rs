use glam::Vec2;

use crate::components::{
    is_zero_approx, Animation, Character, Stance, DIVE_VELOCITY, JUMP_VELOCITY,
};

/// Enum-and-match controller.
///
/// Every stance's transitions and effects sit in one `match`, so adding a
/// stance means touching every arm. Behaves tick-for-tick like the state
/// machine: same priorities, same entry effects, entry only on change.
#[derive(Debug)]
pub struct SwitchController {
    stance: Stance,
}

impl SwitchController {
    pub fn new(player: &mut Character) -> Self {
        enter(Stance::Standing, player);
        Self { stance: Stance::Standing }
    }

    pub fn stance(&self) -> Stance {
        self.stance
    }

    pub fn physics_process(&mut self, player: &mut Character, _dt: f32) {
        let input = player.input;
        let next = match self.stance {
            Stance::Standing => {
                if input.jump.pressed {
                    Some(Stance::Jumping)
                } else if input.duck.pressed {
                    Some(Stance::Ducking)
                } else if !is_zero_approx(input.axis) {
                    Some(Stance::Moving)
                } else {
                    None
                }
            }
            Stance::Jumping => {
                if player.on_floor {
                    Some(Stance::Standing)
                } else if input.duck.pressed {
                    Some(Stance::Diving)
                } else {
                    player.steer();
                    None
                }
            }
            Stance::Ducking => input.duck.released.then_some(Stance::Standing),
            Stance::Diving => match (player.on_floor, input.duck.held) {
                (false, _) => None,
                (true, true) => Some(Stance::Ducking),
                (true, false) => Some(Stance::Standing),
            },
            Stance::Moving => {
                if input.jump.pressed {
                    Some(Stance::Jumping)
                } else if input.duck.held {
                    Some(Stance::Ducking)
                } else if is_zero_approx(input.axis) {
                    Some(Stance::Standing)
                } else {
                    player.steer();
                    None
                }
            }
        };

        if let Some(next) = next {
            if next != self.stance {
                self.stance = next;
                enter(next, player);
            }
        }
    }
}

fn enter(stance: Stance, player: &mut Character) {
    match stance {
        Stance::Standing => {
            player.sprite.play(Animation::Stand);
            player.velocity = Vec2::ZERO;
        }
        Stance::Jumping => {
            player.velocity.y = JUMP_VELOCITY;
            player.sprite.play(Animation::Jump);
        }
        Stance::Ducking => {
            player.sprite.play(Animation::Duck);
            player.velocity = Vec2::ZERO;
        }
        Stance::Diving => {
            player.velocity = Vec2::new(0.0, player.velocity.y + DIVE_VELOCITY);
            player.sprite.play(Animation::Dive);
        }
        Stance::Moving => player.sprite.play(Animation::Move),
    }
}
