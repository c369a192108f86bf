//! Terminal colors used to frame a rendered line

use super::log_level::LogLevel;
use std::fmt;

/// Escape sequence that terminates any colorized span
pub const COLOR_SUFFIX: &str = "\x1b[0m";

/// Named output colors.
///
/// `None` is the sentinel meaning "no framing applied".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    None,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
    DarkGreen,
    White,
}

impl Color {
    pub const ALL: [Color; 9] = [
        Color::None,
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Purple,
        Color::DarkGreen,
        Color::White,
    ];

    /// Escape prefix opening a span in this color; empty for `None`
    pub fn prefix(&self) -> &'static str {
        match self {
            Color::None => "",
            Color::Black => "\x1b[030m",
            Color::Red => "\x1b[031m",
            Color::Green => "\x1b[032m",
            Color::Yellow => "\x1b[033m",
            Color::Blue => "\x1b[034m",
            Color::Purple => "\x1b[035m",
            Color::DarkGreen => "\x1b[036m",
            Color::White => "\x1b[037m",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Color::None => "none",
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Purple => "purple",
            Color::DarkGreen => "darkgreen",
            Color::White => "white",
        }
    }

    /// Case-insensitive lookup; unknown names resolve to `None`
    pub fn from_name(name: &str) -> Self {
        let lower = name.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.name() == lower)
            .unwrap_or(Color::None)
    }

    /// Fixed color a severity forces onto its line, if any
    pub fn for_level(level: LogLevel) -> Self {
        match level {
            LogLevel::Warn => Color::Yellow,
            LogLevel::Error => Color::Red,
            _ => Color::None,
        }
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        *self == Color::None
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
