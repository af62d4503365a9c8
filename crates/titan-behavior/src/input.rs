//! Keyboard keys the page reacts to.

/// A keyboard key, decoded from a DOM `KeyboardEvent.key` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Enter,
    Space,
    Escape,
    /// Any key no behavior listens for.
    Other,
}

impl Key {
    /// Decode a `KeyboardEvent.key` string.
    #[must_use]
    pub fn from_dom(key: &str) -> Self {
        match key {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            "Enter" => Self::Enter,
            " " => Self::Space,
            "Escape" => Self::Escape,
            _ => Self::Other,
        }
    }

    /// Whether this key activates a focused control (Enter or Space).
    #[must_use]
    pub const fn is_activation(self) -> bool {
        matches!(self, Self::Enter | Self::Space)
    }
}
