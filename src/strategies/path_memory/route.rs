use std::fmt;

use color_eyre::{eyre::eyre, Result};
use itertools::Itertools;

use crate::world::types::Action;

/// A movement the ant actually made, as recorded for later replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Forward,
    Left,
    Right,
}

impl Step {
    /// The same step seen from someone walking the route backwards.
    #[must_use]
    pub const fn mirrored(self) -> Step {
        match self {
            Step::Forward => Step::Forward,
            Step::Left => Step::Right,
            Step::Right => Step::Left,
        }
    }
}

impl From<Step> for Action {
    fn from(step: Step) -> Self {
        match step {
            Step::Forward => Action::MoveForward,
            Step::Left => Action::TurnLeft,
            Step::Right => Action::TurnRight,
        }
    }
}

impl TryFrom<Action> for Step {
    type Error = Action;

    fn try_from(action: Action) -> Result<Self, Self::Error> {
        match action {
            Action::MoveForward => Ok(Step::Forward),
            Action::TurnLeft => Ok(Step::Left),
            Action::TurnRight => Ok(Step::Right),
            other => Err(other),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Step::Forward => "F",
                Step::Left => "L",
                Step::Right => "R",
            }
        )
    }
}

/// Four quarter turns on an 8-point compass: a full reversal.
pub const TURNAROUND: [Step; 4] = [Step::Left; 4];

/// The recorded steps between colony and food, plus a replay cursor.
///
/// A non-negative cursor reads from the head and counts up; a negative one
/// reads from the tail (`-1` is the last step) and counts down.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    steps:  Vec<Step>,
    cursor: i64,
}

impl Route {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_steps(steps: Vec<Step>) -> Self {
        Self { steps, cursor: 0 }
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    #[must_use]
    pub const fn cursor(&self) -> i64 {
        self.cursor
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[must_use]
    pub fn forward_moves(&self) -> usize {
        self.steps.iter().filter(|s| **s == Step::Forward).count()
    }

    pub fn record(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// How many steps the cursor has already replayed.
    #[must_use]
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub const fn consumed(&self) -> usize {
        if self.cursor >= 0 {
            self.cursor as usize
        } else {
            (-self.cursor - 1) as usize
        }
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.consumed() >= self.steps.len()
    }

    /// Returns the step under the cursor and moves the cursor along.
    ///
    /// # Errors
    ///
    /// Fails when the cursor points outside the route.
    #[allow(clippy::cast_possible_wrap)]
    pub fn next_step(&mut self) -> Result<Step> {
        let len = self.steps.len() as i64;
        let index = if self.cursor >= 0 {
            self.cursor
        } else {
            len + self.cursor
        };

        let step = usize::try_from(index)
            .ok()
            .and_then(|index| self.steps.get(index))
            .copied()
            .ok_or_else(|| {
                eyre!(
                    "cursor {} is outside a route of {} steps",
                    self.cursor,
                    len
                )
            })?;

        self.cursor += if self.cursor >= 0 { 1 } else { -1 };
        Ok(step)
    }

    pub fn mirror(&mut self) {
        for step in &mut self.steps {
            *step = step.mirrored();
        }
    }

    /// Rebuilds the route for the walk home after reaching food.
    ///
    /// When the ant got here by replaying, anything past the cursor is a
    /// route to somewhere else and is dropped. A turnaround left at the head
    /// by the previous trip is spliced out, the turns are mirrored and a
    /// fresh turnaround is appended; the cursor then reads from the tail.
    pub fn turn_homeward(&mut self, replaying: bool, strip_leading: bool) {
        if replaying {
            let consumed = self.consumed().min(self.steps.len());
            self.steps.truncate(consumed);
        }
        if strip_leading {
            let leading = TURNAROUND.len().min(self.steps.len());
            self.steps.drain(..leading);
        }
        self.mirror();
        self.steps.extend(TURNAROUND);
        self.cursor = -1;
    }

    /// Rebuilds the route for the walk out after reaching the colony.
    ///
    /// Only the replayed suffix led here. The turns are mirrored back,
    /// the trailing turnaround is trimmed and a new one prepended; the
    /// cursor then reads from the head.
    pub fn turn_outward(&mut self) {
        let consumed = self.consumed().min(self.steps.len());
        self.steps.drain(..self.steps.len() - consumed);
        self.mirror();
        let kept = self.steps.len().saturating_sub(TURNAROUND.len());
        self.steps.truncate(kept);
        let mut rebuilt = TURNAROUND.to_vec();
        rebuilt.append(&mut self.steps);
        self.steps = rebuilt;
        self.cursor = 0;
    }

    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    pub fn clear(&mut self) {
        self.steps.clear();
        self.cursor = 0;
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}] @ {}", self.steps.iter().join(""), self.cursor)
    }
}
