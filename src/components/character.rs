use glam::Vec2;

use crate::engine::input::ActionInput;
use crate::fsm::{StateKey, StateMachine};

use super::render::Sprite;

// ---------------------------------------------------------------------------
// Tuning
// ---------------------------------------------------------------------------

/// Horizontal run speed, pixels/s.
pub const SPEED: f32 = 300.0;
/// Vertical velocity set on take-off. Negative is up.
pub const JUMP_VELOCITY: f32 = -650.0;
/// Downward kick added to the current vertical velocity when diving.
pub const DIVE_VELOCITY: f32 = -JUMP_VELOCITY * 0.75;

/// Axis values closer to zero than this count as "no input".
const AXIS_EPSILON: f32 = 1e-5;

pub fn is_zero_approx(value: f32) -> bool {
    value.abs() < AXIS_EPSILON
}

// ---------------------------------------------------------------------------
// Actor
// ---------------------------------------------------------------------------

/// Kinematic 2D body driven by a controller.
///
/// `on_floor` and `input` are refreshed by the player system right before the
/// controller runs, so controllers always see this tick's signals.
#[derive(Debug, Clone, Default)]
pub struct Character {
    pub velocity: Vec2,
    pub on_floor: bool,
    pub input: ActionInput,
    pub sprite: Sprite,
}

impl Character {
    pub fn new() -> Self {
        Self::default()
    }

    /// Horizontal input axis for this tick.
    pub fn direction(&self) -> f32 {
        self.input.axis
    }

    /// Drive horizontal velocity from the axis and face the sprite the same
    /// way.
    pub fn steer(&mut self) {
        let direction = self.direction();
        self.velocity.x = direction * SPEED;
        self.sprite.set_flip_h(direction < 0.0);
    }
}

// ---------------------------------------------------------------------------
// Player state machine
// ---------------------------------------------------------------------------

/// All discrete states the player can be in.
///
/// Transition logic lives in `src/states.rs` alongside each state's entry
/// effects; this file stays pure data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stance {
    /// On the floor, not moving.
    Standing,
    /// Airborne after take-off, steerable.
    Jumping,
    /// Crouched in place until duck is released.
    Ducking,
    /// Fast drop started from a jump.
    Diving,
    /// Running along the floor.
    Moving,
}

impl Stance {
    pub const ALL: [Stance; 5] = [
        Stance::Standing,
        Stance::Jumping,
        Stance::Ducking,
        Stance::Diving,
        Stance::Moving,
    ];
}

impl StateKey for Stance {
    const COUNT: usize = Self::ALL.len();

    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            Stance::Standing => "Standing",
            Stance::Jumping => "Jumping",
            Stance::Ducking => "Ducking",
            Stance::Diving => "Diving",
            Stance::Moving => "Moving",
        }
    }
}

/// FSM driving a [`Character`].
pub type PlayerFsm = StateMachine<Character, Stance>;
