mod physics;
mod player;

pub use physics::{gravity_system, move_and_slide_system};
pub use player::player_control_system;

use hecs::World;

use crate::engine::input::ActionInput;

/// One fixed physics step: gravity, then the controllers, then integration
/// and floor detection.
pub fn fixed_update(world: &mut World, input: &ActionInput, dt: f32) {
    gravity_system(world, dt);
    player_control_system(world, input, dt);
    move_and_slide_system(world, dt);
}
