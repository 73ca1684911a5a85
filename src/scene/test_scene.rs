use glam::Vec2;
use hecs::{Entity, World};

use crate::components::{Character, Floor, GravityAffected, Grounded, Player, Position, Stance};
use crate::controllers::{Controller, ControllerKind};
use crate::fsm::FsmError;

/// Height of the ground plane. Screen space, so larger is lower.
pub const GROUND_Y: f32 = 400.0;

/// Spawn a grounded player driven by `kind`. The controller is built against
/// the player's character so its initial stance is applied before the first
/// physics step.
pub fn spawn_player(world: &mut World, position: Vec2, kind: ControllerKind) -> Result<Entity, FsmError<Stance>> {
    let mut character = Character::new();
    character.on_floor = true;
    let controller = Controller::new(kind, &mut character)?;

    Ok(world.spawn((
        Player,
        Position(position),
        character,
        controller,
        GravityAffected,
        Grounded,
    )))
}

/// Build the test scene: an endless floor with the player standing on it.
/// Returns the player entity.
pub fn load_test_scene(world: &mut World, kind: ControllerKind) -> Result<Entity, FsmError<Stance>> {
    world.spawn((Floor::infinite(GROUND_Y),));
    spawn_player(world, Vec2::new(0.0, GROUND_Y), kind)
}
