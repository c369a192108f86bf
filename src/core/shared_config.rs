//! Process-wide configuration shared by every logger
//!
//! Holds the global severity threshold, the terminal-colorable flag and the
//! default sink used by loggers without a sink of their own.
//!
//! The threshold and the colorable flag are plain relaxed atomics. A reader
//! racing a writer may see either the old or the new value; nothing orders
//! these stores against emission on other threads. Last writer wins.

use super::log_level::LogLevel;
use super::sink::Sink;
use crate::sinks::ConsoleSink;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{Arc, OnceLock};

static GLOBAL: OnceLock<Arc<SharedConfig>> = OnceLock::new();

pub struct SharedConfig {
    level: AtomicU8,
    colorable: AtomicBool,
    default_sink: Mutex<Box<dyn Sink>>,
}

impl SharedConfig {
    /// Fresh configuration: threshold `Debug`, colorable, stdout as default sink
    pub fn new() -> Self {
        Self::with_default_sink(Box::new(ConsoleSink::stdout()))
    }

    pub fn with_default_sink(sink: Box<dyn Sink>) -> Self {
        Self {
            level: AtomicU8::new(LogLevel::Debug as u8),
            colorable: AtomicBool::new(true),
            default_sink: Mutex::new(sink),
        }
    }

    /// The process instance. Its colorable flag starts from
    /// [`detect_colorable`] when the `console` feature is enabled.
    pub fn global() -> Arc<SharedConfig> {
        Arc::clone(GLOBAL.get_or_init(|| {
            let config = SharedConfig::new();
            config.set_colorable(detect_colorable());
            Arc::new(config)
        }))
    }

    #[inline]
    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::Relaxed))
    }

    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    #[inline]
    pub fn is_colorable(&self) -> bool {
        self.colorable.load(Ordering::Relaxed)
    }

    pub fn set_colorable(&self, colorable: bool) {
        self.colorable.store(colorable, Ordering::Relaxed);
    }

    /// Replace the default sink, returning the previous one
    pub fn set_default_sink(&self, sink: Box<dyn Sink>) -> Box<dyn Sink> {
        std::mem::replace(&mut *self.default_sink.lock(), sink)
    }

    pub(crate) fn write_default(&self, buf: &[u8]) -> super::error::Result<()> {
        self.default_sink.lock().write(buf)
    }

    pub(crate) fn flush_default(&self) -> super::error::Result<()> {
        self.default_sink.lock().flush()
    }
}

impl Default for SharedConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SharedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedConfig")
            .field("level", &self.level())
            .field("colorable", &self.is_colorable())
            .finish_non_exhaustive()
    }
}

/// Whether stdout should receive color escapes.
///
/// Honours `NO_COLOR`, `CLICOLOR` and `CLICOLOR_FORCE`, then falls back to
/// checking whether stdout is a terminal.
#[cfg(feature = "console")]
pub fn detect_colorable() -> bool {
    colored::control::ShouldColorize::from_env().should_colorize()
}

#[cfg(not(feature = "console"))]
pub fn detect_colorable() -> bool {
    use std::io::IsTerminal;
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

/// Set the process-wide severity threshold
pub fn set_global_level(level: LogLevel) {
    SharedConfig::global().set_level(level);
}

pub fn global_level() -> LogLevel {
    SharedConfig::global().level()
}

/// Set the process-wide terminal-colorable flag
pub fn set_colorable(colorable: bool) {
    SharedConfig::global().set_colorable(colorable);
}

pub fn is_colorable() -> bool {
    SharedConfig::global().is_colorable()
}

/// Replace the process-wide default sink, returning the previous one
pub fn set_default_sink(sink: Box<dyn Sink>) -> Box<dyn Sink> {
    SharedConfig::global().set_default_sink(sink)
}
