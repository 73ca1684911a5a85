use hecs::World;
use tracing::debug;

use crate::components::{Character, Grounded, Player};
use crate::controllers::Controller;
use crate::engine::input::ActionInput;

/// Drive every player's controller for one physics step.
///
/// Floor contact is sampled from the `Grounded` marker left by the previous
/// `move_and_slide_system`, and the input snapshot is copied in, before the
/// controller runs, so it only ever sees this tick's signals.
pub fn player_control_system(world: &mut World, input: &ActionInput, dt: f32) {
    for (_entity, (controller, character, grounded)) in world
        .query_mut::<(&mut Controller, &mut Character, Option<&Grounded>)>()
        .with::<&Player>()
    {
        character.on_floor = grounded.is_some();
        character.input = *input;

        let before = controller.label();
        controller.physics_process(character, dt);
        let after = controller.label();

        if before != after {
            debug!(controller = ?controller.kind(), from = before, to = after, "player state changed");
        }
    }
}
