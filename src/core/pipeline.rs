//! Render pipeline
//!
//! A [`Pipeline`] is an ordered list of [`Part`]s. Each part reads the
//! in-flight call through a [`RenderState`] and appends bytes to the shared
//! output buffer. Parts run strictly in order.

use super::color::Color;
use super::log_level::LogLevel;
use crate::parts;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Opaque per-call value handed through to parts
pub type Context = Arc<dyn Any + Send + Sync>;

/// Read-only view of a logger's transient state during one call
#[derive(Clone, Copy)]
pub struct RenderState<'a> {
    pub(crate) name: &'a str,
    pub(crate) pkg_name: &'a str,
    pub(crate) level: LogLevel,
    pub(crate) text: &'a str,
    pub(crate) color: Color,
    pub(crate) color_enabled: bool,
    pub(crate) colorable: bool,
    pub(crate) context: Option<&'a (dyn Any + Send + Sync)>,
    pub(crate) user_data: Option<&'a (dyn Any + Send + Sync)>,
}

impl<'a> RenderState<'a> {
    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn pkg_name(&self) -> &'a str {
        self.pkg_name
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Color resolved for this call
    pub fn color(&self) -> Color {
        self.color
    }

    /// True when color escapes should frame this line
    pub fn should_colorize(&self) -> bool {
        self.colorable && self.color_enabled && !self.color.is_none()
    }

    pub fn context(&self) -> Option<&'a (dyn Any + Send + Sync)> {
        self.context
    }

    /// Context downcast to a concrete type
    pub fn context_as<T: Any>(&self) -> Option<&'a T> {
        self.context.and_then(|c| c.downcast_ref::<T>())
    }

    pub fn user_data_as<T: Any>(&self) -> Option<&'a T> {
        self.user_data.and_then(|d| d.downcast_ref::<T>())
    }
}

impl fmt::Debug for RenderState<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderState")
            .field("name", &self.name)
            .field("level", &self.level)
            .field("text", &self.text)
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}

/// One formatting step
pub trait Part: Send + Sync {
    fn render(&self, state: &RenderState<'_>, buf: &mut Vec<u8>);
}

impl<F> Part for F
where
    F: Fn(&RenderState<'_>, &mut Vec<u8>) + Send + Sync,
{
    fn render(&self, state: &RenderState<'_>, buf: &mut Vec<u8>) {
        self(state, buf)
    }
}

/// Box a part for use in a pipeline
pub fn part<P: Part + 'static>(p: P) -> Arc<dyn Part> {
    Arc::new(p)
}

/// Ordered sequence of parts
#[derive(Clone)]
pub struct Pipeline {
    parts: Vec<Arc<dyn Part>>,
}

impl Pipeline {
    /// Wrap caller parts with color framing, the message text and a line end.
    ///
    /// Resulting order: open-color, `middle`..., text, close-color, newline.
    pub fn framed(middle: impl IntoIterator<Item = Arc<dyn Part>>) -> Self {
        let mut all = vec![part(parts::color_begin)];
        all.extend(middle);
        all.push(part(parts::text));
        all.push(part(parts::color_end));
        all.push(part(parts::line_end));
        Self { parts: all }
    }

    /// Use exactly `parts`; no framing or line termination is added.
    pub fn raw(parts: impl IntoIterator<Item = Arc<dyn Part>>) -> Self {
        Self {
            parts: parts.into_iter().collect(),
        }
    }

    /// Default middle parts: level label, logger name, time
    pub fn default_middle() -> Vec<Arc<dyn Part>> {
        vec![
            part(parts::level_label),
            part(parts::name),
            part(parts::time),
        ]
    }

    /// Truncate `buf` and run every part into it
    pub fn run(&self, state: &RenderState<'_>, buf: &mut Vec<u8>) {
        buf.clear();
        for p in &self.parts {
            p.render(state, buf);
        }
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::framed(Self::default_middle())
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("parts", &self.parts.len())
            .finish()
    }
}

#[cfg(test)]
pub(crate) fn test_state(text: &str, level: LogLevel, color: Color) -> RenderState<'_> {
    RenderState {
        name: "test",
        pkg_name: "pkg",
        level,
        text,
        color,
        color_enabled: true,
        colorable: true,
        context: None,
        user_data: None,
    }
}
