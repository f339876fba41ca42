// SPDX-License-Identifier: MPL-2.0
//! Keyboard shortcuts for the player surface.
//!
//! Keys are identified by their physical code (`"Space"`, `"KeyF"`,
//! `"ArrowLeft"`, `"ArrowRight"`), so layouts and Shift do not matter.
//! Only bound keys suppress the host's default action.

/// A key-down event as delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub code: String,
    /// True for auto-repeat events while the key is held.
    pub repeat: bool,
}

impl KeyPress {
    /// A fresh (non-repeat) key-down.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            repeat: false,
        }
    }

    /// An auto-repeat key-down.
    pub fn repeated(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            repeat: true,
        }
    }
}

/// What a bound key asks the player to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    TogglePlayback,
    ToggleFullscreen,
    SkipBackward,
    SkipForward,
}

impl KeyAction {
    /// Looks up the action bound to a physical key code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Space" => Some(Self::TogglePlayback),
            "KeyF" => Some(Self::ToggleFullscreen),
            "ArrowLeft" => Some(Self::SkipBackward),
            "ArrowRight" => Some(Self::SkipForward),
            _ => None,
        }
    }

    /// Whether holding the key keeps triggering the action.
    ///
    /// Toggles fire once per press; skips follow the key repeat rate.
    #[must_use]
    pub fn repeats(self) -> bool {
        matches!(self, Self::SkipBackward | Self::SkipForward)
    }
}

/// How a key press was routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// Not a player key; the host keeps its default behavior.
    Unbound,
    /// A held toggle key; swallowed without acting.
    Suppressed,
    /// The action should run.
    Trigger(KeyAction),
}

impl KeyDisposition {
    /// Routes a key-down event.
    #[must_use]
    pub fn route(press: &KeyPress) -> Self {
        match KeyAction::from_code(&press.code) {
            None => Self::Unbound,
            Some(action) if press.repeat && !action.repeats() => Self::Suppressed,
            Some(action) => Self::Trigger(action),
        }
    }

    /// Whether the host should suppress its default action (page scroll).
    #[must_use]
    pub fn prevents_default(self) -> bool {
        !matches!(self, Self::Unbound)
    }
}
