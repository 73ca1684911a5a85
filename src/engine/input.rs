use std::collections::HashSet;

/// Logical input actions. The physical binding (keys, pads, scripts) lives
/// with whoever feeds [`InputState::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    Duck,
}

impl Action {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "left" => Some(Self::MoveLeft),
            "right" => Some(Self::MoveRight),
            "jump" => Some(Self::Jump),
            "duck" => Some(Self::Duck),
            _ => None,
        }
    }
}

/// Edge and level signals for one button, valid for a single tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Button {
    /// Went down this tick.
    pub pressed: bool,
    pub held: bool,
    /// Went up this tick.
    pub released: bool,
}

/// Everything a controller may read about player input on one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ActionInput {
    /// Horizontal axis in [-1, 1], negative is left.
    pub axis: f32,
    pub jump: Button,
    pub duck: Button,
}

impl ActionInput {
    /// Builder used by tests and scripted drivers.
    pub fn with_axis(mut self, axis: f32) -> Self {
        self.axis = axis.clamp(-1.0, 1.0);
        self
    }

    pub fn with_jump(mut self, jump: Button) -> Self {
        self.jump = jump;
        self
    }

    pub fn with_duck(mut self, duck: Button) -> Self {
        self.duck = duck;
        self
    }
}

impl Button {
    pub const PRESSED: Self = Self { pressed: true, held: true, released: false };
    pub const HELD: Self = Self { pressed: false, held: true, released: false };
    pub const RELEASED: Self = Self { pressed: false, held: false, released: true };
}

/// Tracks which actions are held this frame and last frame, and derives the
/// per-tick edge signals from the difference.
#[derive(Debug, Default)]
pub struct InputState {
    held: HashSet<Action>,
    previous: HashSet<Action>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Roll the current held set into `previous` and replace it. Call once
    /// per physics step, before sampling.
    pub fn update(&mut self, held_now: impl IntoIterator<Item = Action>) {
        self.previous = std::mem::take(&mut self.held);
        self.held.extend(held_now);
    }

    pub fn is_held(&self, action: Action) -> bool {
        self.held.contains(&action)
    }

    pub fn just_pressed(&self, action: Action) -> bool {
        self.held.contains(&action) && !self.previous.contains(&action)
    }

    pub fn just_released(&self, action: Action) -> bool {
        !self.held.contains(&action) && self.previous.contains(&action)
    }

    /// `right - left`, so holding both cancels out.
    pub fn axis(&self) -> f32 {
        let strength = |a| if self.is_held(a) { 1.0 } else { 0.0 };
        strength(Action::MoveRight) - strength(Action::MoveLeft)
    }

    fn button(&self, action: Action) -> Button {
        Button {
            pressed: self.just_pressed(action),
            held: self.is_held(action),
            released: self.just_released(action),
        }
    }

    pub fn snapshot(&self) -> ActionInput {
        ActionInput {
            axis: self.axis(),
            jump: self.button(Action::Jump),
            duck: self.button(Action::Duck),
        }
    }
}
