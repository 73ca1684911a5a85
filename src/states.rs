//! The five player states.
//!
//! Each state's `update` is a small decision table: conditions are checked in
//! priority order and the first match requests a transition. Jump always wins
//! over duck when both fire on the same tick.

use crate::components::{
    is_zero_approx, Animation, Character, PlayerFsm, Stance, DIVE_VELOCITY, JUMP_VELOCITY,
};
use crate::fsm::{FsmError, State, StateMachine};

use glam::Vec2;

/// Build the player machine with every stance registered, starting in
/// [`Stance::Standing`].
pub fn player_machine(character: &mut Character) -> Result<PlayerFsm, FsmError<Stance>> {
    StateMachine::builder()
        .with(Standing)
        .with(Jumping)
        .with(Ducking)
        .with(Diving)
        .with(Moving)
        .build(character, Stance::Standing)
}

pub struct Standing;

impl State<Character, Stance> for Standing {
    fn key(&self) -> Stance {
        Stance::Standing
    }

    fn enter(&self, player: &mut Character) {
        player.sprite.play(Animation::Stand);
        player.velocity = Vec2::ZERO;
    }

    fn update(&self, player: &mut Character, _dt: f32) -> Option<Stance> {
        if player.input.jump.pressed {
            Some(Stance::Jumping)
        } else if player.input.duck.pressed {
            Some(Stance::Ducking)
        } else if !is_zero_approx(player.direction()) {
            Some(Stance::Moving)
        } else {
            None
        }
    }
}

pub struct Jumping;

impl State<Character, Stance> for Jumping {
    fn key(&self) -> Stance {
        Stance::Jumping
    }

    fn enter(&self, player: &mut Character) {
        player.velocity.y = JUMP_VELOCITY;
        player.sprite.play(Animation::Jump);
    }

    fn update(&self, player: &mut Character, _dt: f32) -> Option<Stance> {
        if player.on_floor {
            return Some(Stance::Standing);
        }
        if player.input.duck.pressed {
            return Some(Stance::Diving);
        }

        player.steer();
        None
    }
}

pub struct Ducking;

impl State<Character, Stance> for Ducking {
    fn key(&self) -> Stance {
        Stance::Ducking
    }

    fn enter(&self, player: &mut Character) {
        player.sprite.play(Animation::Duck);
        player.velocity = Vec2::ZERO;
    }

    // Jump and movement are ignored until duck is let go.
    fn update(&self, player: &mut Character, _dt: f32) -> Option<Stance> {
        player.input.duck.released.then_some(Stance::Standing)
    }
}

pub struct Diving;

impl State<Character, Stance> for Diving {
    fn key(&self) -> Stance {
        Stance::Diving
    }

    fn enter(&self, player: &mut Character) {
        player.velocity = Vec2::new(0.0, player.velocity.y + DIVE_VELOCITY);
        player.sprite.play(Animation::Dive);
    }

    fn update(&self, player: &mut Character, _dt: f32) -> Option<Stance> {
        if !player.on_floor {
            return None;
        }
        if player.input.duck.held {
            Some(Stance::Ducking)
        } else {
            Some(Stance::Standing)
        }
    }
}

pub struct Moving;

impl State<Character, Stance> for Moving {
    fn key(&self) -> Stance {
        Stance::Moving
    }

    fn enter(&self, player: &mut Character) {
        player.sprite.play(Animation::Move);
    }

    fn update(&self, player: &mut Character, _dt: f32) -> Option<Stance> {
        if player.input.jump.pressed {
            return Some(Stance::Jumping);
        }
        if player.input.duck.held {
            return Some(Stance::Ducking);
        }
        if is_zero_approx(player.direction()) {
            return Some(Stance::Standing);
        }

        player.steer();
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::{ActionInput, Button};

    #[test]
    fn every_stance_is_registered() {
        let mut player = Character::new();
        let fsm = player_machine(&mut player).unwrap();
        for stance in Stance::ALL {
            assert!(fsm.is_registered(stance), "{stance:?} missing");
        }
    }

    #[test]
    fn standing_prefers_jump_over_duck() {
        let mut player = Character::new();
        player.input = ActionInput::default()
            .with_jump(Button::PRESSED)
            .with_duck(Button::PRESSED)
            .with_axis(1.0);
        assert_eq!(Standing.update(&mut player, 0.0), Some(Stance::Jumping));
    }

    #[test]
    fn moving_prefers_jump_over_duck() {
        let mut player = Character::new();
        player.input = ActionInput::default()
            .with_jump(Button::PRESSED)
            .with_duck(Button::HELD)
            .with_axis(-1.0);
        assert_eq!(Moving.update(&mut player, 0.0), Some(Stance::Jumping));
    }

    #[test]
    fn jumping_steers_and_mirrors() {
        let mut player = Character::new();
        player.input = ActionInput::default().with_axis(-1.0);
        assert_eq!(Jumping.update(&mut player, 0.0), None);
        assert_eq!(player.velocity.x, -300.0);
        assert!(player.sprite.flip_h);
    }

    #[test]
    fn diving_keeps_falling_while_airborne() {
        let mut player = Character::new();
        player.input = ActionInput::default().with_duck(Button::HELD);
        assert_eq!(Diving.update(&mut player, 0.0), None);
        player.on_floor = true;
        assert_eq!(Diving.update(&mut player, 0.0), Some(Stance::Ducking));
        player.input = ActionInput::default();
        assert_eq!(Diving.update(&mut player, 0.0), Some(Stance::Standing));
    }
}
