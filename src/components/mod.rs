mod character;
mod physics;
mod render;

pub use character::*;
pub use physics::*;
pub use render::*;

/// Marker: this entity is the player.
pub struct Player;
