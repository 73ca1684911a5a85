/// Sprite sheet animations available to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animation {
    Stand,
    Jump,
    Duck,
    Dive,
    Move,
}

impl Animation {
    pub fn name(self) -> &'static str {
        match self {
            Self::Stand => "stand",
            Self::Jump => "jump",
            Self::Duck => "duck",
            Self::Dive => "dive",
            Self::Move => "move",
        }
    }
}

/// Presentation side of the actor. Controllers fire and forget into it; the
/// renderer that would consume it is not part of this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub animation: Animation,
    /// Mirror horizontally (facing left).
    pub flip_h: bool,
    /// How many times playback switched to a different animation.
    pub restarts: u32,
}

impl Sprite {
    pub fn new() -> Self {
        Self {
            animation: Animation::Stand,
            flip_h: false,
            restarts: 0,
        }
    }

    /// Play `animation`. Already playing it is a no-op, like most sprite
    /// players: the running loop is not restarted.
    pub fn play(&mut self, animation: Animation) {
        if self.animation != animation {
            self.animation = animation;
            self.restarts += 1;
        }
    }

    pub fn set_flip_h(&mut self, flip: bool) {
        self.flip_h = flip;
    }
}

impl Default for Sprite {
    fn default() -> Self {
        Self::new()
    }
}
