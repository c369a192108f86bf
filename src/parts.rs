//! Built-in render parts
//!
//! Each part appends to the output buffer; the separating space after a
//! field is written by the field itself so parts can be reordered freely.

use crate::core::color::COLOR_SUFFIX;
use crate::core::pipeline::{Part, RenderState};
use crate::core::timestamp::TimestampFormat;
use chrono::Utc;

/// Opens the color span when the call resolved a color and color is allowed
pub fn color_begin(state: &RenderState<'_>, buf: &mut Vec<u8>) {
    if state.should_colorize() {
        buf.extend_from_slice(state.color().prefix().as_bytes());
    }
}

/// Closes the color span opened by [`color_begin`]
pub fn color_end(state: &RenderState<'_>, buf: &mut Vec<u8>) {
    if state.should_colorize() {
        buf.extend_from_slice(COLOR_SUFFIX.as_bytes());
    }
}

pub fn line_end(_state: &RenderState<'_>, buf: &mut Vec<u8>) {
    buf.push(b'\n');
}

/// The message text
pub fn text(state: &RenderState<'_>, buf: &mut Vec<u8>) {
    buf.extend_from_slice(state.text().as_bytes());
}

/// `[INFO] `
pub fn level_label(state: &RenderState<'_>, buf: &mut Vec<u8>) {
    buf.extend_from_slice(state.level().label().as_bytes());
    buf.push(b' ');
}

pub fn name(state: &RenderState<'_>, buf: &mut Vec<u8>) {
    buf.extend_from_slice(state.name().as_bytes());
    buf.push(b' ');
}

/// Package name of the code that created the logger; skipped when unknown
pub fn pkg_name(state: &RenderState<'_>, buf: &mut Vec<u8>) {
    if !state.pkg_name().is_empty() {
        buf.extend_from_slice(state.pkg_name().as_bytes());
        buf.push(b' ');
    }
}

/// Current UTC time in [`TimestampFormat::Classic`]
pub fn time(_state: &RenderState<'_>, buf: &mut Vec<u8>) {
    let stamp = TimestampFormat::Classic.format(&Utc::now());
    buf.extend_from_slice(stamp.as_bytes());
    buf.push(b' ');
}

/// Current UTC time in the given format
pub fn time_with(format: TimestampFormat) -> impl Part {
    move |_state: &RenderState<'_>, buf: &mut Vec<u8>| {
        buf.extend_from_slice(format.format(&Utc::now()).as_bytes());
        buf.push(b' ');
    }
}

/// Fixed bytes, e.g. a separator
pub fn literal(s: impl Into<String>) -> impl Part {
    let s = s.into();
    move |_state: &RenderState<'_>, buf: &mut Vec<u8>| buf.extend_from_slice(s.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::Color;
    use crate::core::log_level::LogLevel;
    use crate::core::pipeline::test_state;

    fn render(p: impl Part, state: &RenderState<'_>) -> Vec<u8> {
        let mut buf = Vec::new();
        p.render(state, &mut buf);
        buf
    }

    #[test]
    fn test_color_parts_need_every_switch() {
        let mut state = test_state("t", LogLevel::Info, Color::Green);
        assert_eq!(render(color_begin, &state), b"\x1b[032m");
        assert_eq!(render(color_end, &state), b"\x1b[0m");

        state.colorable = false;
        assert!(render(color_begin, &state).is_empty());

        state.colorable = true;
        state.color_enabled = false;
        assert!(render(color_end, &state).is_empty());

        let state = test_state("t", LogLevel::Info, Color::None);
        assert!(render(color_begin, &state).is_empty());
    }

    #[test]
    fn test_field_parts() {
        let state = test_state("msg", LogLevel::Error, Color::None);
        assert_eq!(render(level_label, &state), b"[ERRO] ");
        assert_eq!(render(name, &state), b"test ");
        assert_eq!(render(pkg_name, &state), b"pkg ");
        assert_eq!(render(text, &state), b"msg");
        assert_eq!(render(line_end, &state), b"\n");
        assert_eq!(render(literal("| "), &state), b"| ");
    }

    #[test]
    fn test_time_parts() {
        let state = test_state("msg", LogLevel::Info, Color::None);
        let classic = String::from_utf8(render(time, &state)).expect("utf8");
        // "YYYY/MM/DD HH:MM:SS "
        assert_eq!(classic.len(), 20);
        assert!(classic.ends_with(' '));

        let unix = String::from_utf8(render(time_with(TimestampFormat::Unix), &state))
            .expect("utf8");
        assert!(unix.trim_end().parse::<i64>().is_ok());
    }
}
