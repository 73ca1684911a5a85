//! Interchangeable ways of driving a [`Character`], from ad-hoc flags up to
//! the registry-backed state machine. All of them read the same per-tick
//! signals and write the same velocity and sprite fields.

mod flags;
mod switch;

pub use flags::FlagController;
pub use switch::SwitchController;

use clap::ValueEnum;

use crate::components::{Character, PlayerFsm, Stance};
use crate::fsm::{FsmError, StateKey};
use crate::states::player_machine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ControllerKind {
    /// Boolean flags and nested branches.
    Flags,
    /// One `match` arm per stance.
    Switch,
    /// Reusable state objects behind a state machine.
    #[default]
    Machine,
}

/// Controller component attached to the player entity.
pub enum Controller {
    Flags(FlagController),
    Switch(SwitchController),
    Machine(PlayerFsm),
}

impl Controller {
    /// Build a controller and put `character` into its initial stance.
    pub fn new(kind: ControllerKind, character: &mut Character) -> Result<Self, FsmError<Stance>> {
        Ok(match kind {
            ControllerKind::Flags => Self::Flags(FlagController::new(character)),
            ControllerKind::Switch => Self::Switch(SwitchController::new(character)),
            ControllerKind::Machine => Self::Machine(player_machine(character)?),
        })
    }

    pub fn kind(&self) -> ControllerKind {
        match self {
            Self::Flags(_) => ControllerKind::Flags,
            Self::Switch(_) => ControllerKind::Switch,
            Self::Machine(_) => ControllerKind::Machine,
        }
    }

    /// Run one physics step. `character` must already hold this tick's floor
    /// and input samples.
    pub fn physics_process(&mut self, character: &mut Character, dt: f32) {
        match self {
            Self::Flags(c) => c.physics_process(character, dt),
            Self::Switch(c) => c.physics_process(character, dt),
            Self::Machine(fsm) => {
                fsm.tick(character, dt);
            }
        }
    }

    /// Name of the current behaviour, for diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Flags(c) => c.label(),
            Self::Switch(c) => c.stance().name(),
            Self::Machine(fsm) => fsm.current_name(),
        }
    }
}
