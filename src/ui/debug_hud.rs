use glam::Vec2;

use crate::components::{Animation, Character};

/// Text status line for the player: state label, position, velocity and
/// facing. Stands in for the on-screen label above the sprite.
pub struct DebugHud {
    visible: bool,
    label: Option<&'static str>,
    changes: u32,
}

impl DebugHud {
    pub fn new(visible: bool) -> Self {
        Self {
            visible,
            label: None,
            changes: 0,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Record this frame's label. Returns `true` when it differs from the
    /// previous frame's (always on the first call).
    pub fn update(&mut self, label: &'static str) -> bool {
        if self.label == Some(label) {
            return false;
        }
        if self.label.is_some() {
            self.changes += 1;
        }
        self.label = Some(label);
        true
    }

    /// Label changes seen since the first frame.
    pub fn changes(&self) -> u32 {
        self.changes
    }

    pub fn line(&self, frame: u64, position: Vec2, character: &Character) -> String {
        let facing = if character.sprite.flip_h { '<' } else { '>' };
        let anim: Animation = character.sprite.animation;
        format!(
            "{frame:>5}  {:<9} {facing} {:<5}  pos {:>7.1} {:>7.1}  vel {:>7.1} {:>7.1}",
            self.label.unwrap_or("-"),
            anim.name(),
            position.x,
            position.y,
            character.velocity.x,
            character.velocity.y,
        )
    }
}
