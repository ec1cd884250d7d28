//! Focus/lock state machine.
//!
//! # Invariants
//! - `focused_index` is always a valid index into the registry it was
//!   created for; callers bound-check before calling [`FocusState::request`].
//! - While `locked`, the only accepted request is the one targeting the
//!   already focused index, and it unlocks instead of shifting.

use serde::{Deserialize, Serialize};

/// Current focus selection and lock flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FocusState {
    pub focused_index: usize,
    pub locked: bool,
}

/// Outcome of one focus request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusTransition {
    /// Focus moved (or was re-applied) and the spotlight reset must run.
    Shifted,
    /// Focus was locked on the requested index; the lock was released.
    Unlocked,
    /// Focus is locked on another index; nothing changed.
    Ignored,
}

impl FocusTransition {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Shifted => "shifted",
            Self::Unlocked => "unlocked",
            Self::Ignored => "ignored",
        }
    }
}

impl FocusState {
    /// Applies one focus request and reports which transition was taken.
    pub fn request(&mut self, index: usize) -> FocusTransition {
        if self.locked {
            if index == self.focused_index {
                self.locked = false;
                return FocusTransition::Unlocked;
            }
            return FocusTransition::Ignored;
        }
        self.focused_index = index;
        FocusTransition::Shifted
    }

    /// Flips the lock flag and returns the new value.
    pub fn toggle_lock(&mut self) -> bool {
        self.locked = !self.locked;
        self.locked
    }
}
