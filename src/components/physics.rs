use glam::Vec2;

/// Fixed physics step, in seconds.
pub const PHYSICS_DT: f32 = 1.0 / 60.0;

/// Downward acceleration in pixels/s². Screen space: y grows downward.
pub const GRAVITY: f32 = 980.0;

/// World-space position of a body's feet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position(pub Vec2);

/// Marker: entity is affected by gravity.
pub struct GravityAffected;

/// Marker: entity is resting on a floor (set each physics step).
pub struct Grounded;

/// Horizontal walkable surface spanning `left..=right` at height `y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Floor {
    pub y: f32,
    pub left: f32,
    pub right: f32,
}

impl Floor {
    pub fn infinite(y: f32) -> Self {
        Self {
            y,
            left: f32::NEG_INFINITY,
            right: f32::INFINITY,
        }
    }

    pub fn spans(&self, x: f32) -> bool {
        (self.left..=self.right).contains(&x)
    }
}
