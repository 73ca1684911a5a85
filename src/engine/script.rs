use std::path::Path;

use thiserror::Error;

use super::input::Action;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("line {line}: invalid frame count `{value}`")]
    BadFrameCount { line: usize, value: String },
    #[error("line {line}: unknown action `{name}` (expected left, right, jump or duck)")]
    UnknownAction { line: usize, name: String },
    #[error("failed to read input script: {0}")]
    Io(#[from] std::io::Error),
}

/// Held actions for a run of consecutive physics frames.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptStep {
    pub frames: u32,
    pub held: Vec<Action>,
}

/// Headless replacement for live input: a list of held-action spans.
///
/// Text format, one step per line:
/// ```text
/// # frames  actions...
/// 30 right
/// 1  right jump
/// 20
/// ```
/// Blank lines and `#` comments are skipped. A step with no actions holds
/// nothing, which is how releases are expressed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputScript {
    pub steps: Vec<ScriptStep>,
}

impl InputScript {
    pub fn parse(text: &str) -> Result<Self, ScriptError> {
        let mut steps = Vec::new();
        for (i, raw) in text.lines().enumerate() {
            let line = i + 1;
            let content = raw.split('#').next().unwrap_or("").trim();
            if content.is_empty() {
                continue;
            }

            let mut words = content.split_whitespace();
            let count = words.next().unwrap_or_default();
            let frames = count.parse::<u32>().map_err(|_| ScriptError::BadFrameCount {
                line,
                value: count.to_string(),
            })?;

            let held = words
                .map(|name| {
                    Action::from_name(name).ok_or_else(|| ScriptError::UnknownAction {
                        line,
                        name: name.to_string(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            steps.push(ScriptStep { frames, held });
        }
        Ok(Self { steps })
    }

    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn total_frames(&self) -> u64 {
        self.steps.iter().map(|s| u64::from(s.frames)).sum()
    }

    /// One held-action set per physics frame.
    pub fn frames(&self) -> impl Iterator<Item = &[Action]> + '_ {
        self.steps
            .iter()
            .flat_map(|s| std::iter::repeat(s.held.as_slice()).take(s.frames as usize))
    }
}
