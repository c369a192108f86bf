//! Main logger implementation
//!
//! A [`Logger`] is a named, long-lived handle. Every call runs one critical
//! section: populate the transient call state, filter, resolve the color,
//! render through the pipeline, write to the sink, and reset the transient
//! state. The reset runs from a drop guard, so it also happens on the early
//! return taken by a filtered call.
//!
//! Filtering has two layers that deliberately do not agree:
//!
//! - `debug`/`info`/`warn` first compare the logger's own threshold with the
//!   process-wide threshold and return at once when the logger's threshold is
//!   lower, whatever the message severity.
//! - Inside the emission routine a message is dropped when its severity is
//!   below the logger's threshold or when the one-shot condition gate is off.
//!
//! `error` and `fatal` skip the first layer.

use super::{
    color::Color,
    color_rule::ColorRuleSet,
    error::Result,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    pipeline::{Context, Part, Pipeline, RenderState},
    resolve::resolve_color,
    shared_config::SharedConfig,
    sink::Sink,
};
use parking_lot::{Mutex, MutexGuard};
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Exit status used after a fatal line has been written
pub const FATAL_EXIT_CODE: i32 = 1;

const LINE_BUFFER: usize = 32;

/// Fields valid for a single call only
#[derive(Default)]
struct CallState {
    level: LogLevel,
    text: String,
    color: Color,
    condition: bool,
    context: Option<Context>,
}

impl CallState {
    fn new() -> Self {
        Self {
            condition: true,
            ..Self::default()
        }
    }

    fn reset(&mut self) {
        self.color = Color::None;
        self.condition = true;
        self.context = None;
        self.text.clear();
    }
}

struct Inner {
    level: LogLevel,
    color_enabled: bool,
    sink: Option<Box<dyn Sink>>,
    rules: Option<Arc<ColorRuleSet>>,
    pipeline: Pipeline,
    user_data: Option<Context>,
    call: CallState,
    buf: Vec<u8>,
}

/// Lock held for one emission; resets the call state when released.
struct CallGuard<'a>(MutexGuard<'a, Inner>);

impl Deref for CallGuard<'_> {
    type Target = Inner;

    fn deref(&self) -> &Inner {
        &self.0
    }
}

impl DerefMut for CallGuard<'_> {
    fn deref_mut(&mut self) -> &mut Inner {
        &mut self.0
    }
}

impl Drop for CallGuard<'_> {
    fn drop(&mut self) {
        self.0.call.reset();
    }
}

pub struct Logger {
    name: String,
    pkg_name: String,
    shared: Arc<SharedConfig>,
    metrics: LoggerMetrics,
    inner: Mutex<Inner>,
}

impl Logger {
    /// Logger with default configuration bound to the process-wide settings
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        LoggerBuilder::new(name).build()
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use tinted_logger::prelude::*;
    ///
    /// let logger = Logger::builder("server")
    ///     .level(LogLevel::Info)
    ///     .enable_color(true)
    ///     .build();
    /// assert_eq!(logger.name(), "server");
    /// ```
    #[must_use]
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pkg_name(&self) -> &str {
        &self.pkg_name
    }

    /// Process-wide settings this logger reads
    pub fn shared_config(&self) -> &Arc<SharedConfig> {
        &self.shared
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    // ------------------------------------------------------------------
    // Instance configuration
    // ------------------------------------------------------------------

    pub fn set_level(&self, level: LogLevel) -> &Self {
        self.inner.lock().level = level;
        self
    }

    /// Set the threshold from a name; unknown names mean `Debug`
    pub fn set_level_by_string(&self, level: &str) -> &Self {
        self.set_level(LogLevel::from_name_lossy(level))
    }

    pub fn level(&self) -> LogLevel {
        self.inner.lock().level
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.level() == LogLevel::Debug
    }

    pub fn enable_color(&self, enable: bool) {
        self.inner.lock().color_enabled = enable;
    }

    pub fn color_enabled(&self) -> bool {
        self.inner.lock().color_enabled
    }

    /// Attach a rule set, replacing any previous one
    pub fn set_color_rules(&self, rules: Arc<ColorRuleSet>) {
        self.inner.lock().rules = Some(rules);
    }

    pub fn clear_color_rules(&self) {
        self.inner.lock().rules = None;
    }

    pub fn color_rules(&self) -> Option<Arc<ColorRuleSet>> {
        self.inner.lock().rules.clone()
    }

    /// Route output to `sink` instead of the shared default sink
    pub fn set_sink(&self, sink: Box<dyn Sink>) {
        self.inner.lock().sink = Some(sink);
    }

    /// Fall back to the shared default sink again
    pub fn clear_sink(&self) -> Option<Box<dyn Sink>> {
        self.inner.lock().sink.take()
    }

    /// Replace the middle parts; color framing, text and newline are kept
    pub fn set_parts(&self, middle: impl IntoIterator<Item = Arc<dyn Part>>) {
        self.inner.lock().pipeline = Pipeline::framed(middle);
    }

    /// Replace the whole pipeline. No color framing or newline is added.
    pub fn set_full_parts(&self, parts: impl IntoIterator<Item = Arc<dyn Part>>) {
        self.inner.lock().pipeline = Pipeline::raw(parts);
    }

    pub fn set_pipeline(&self, pipeline: Pipeline) {
        self.inner.lock().pipeline = pipeline;
    }

    pub fn set_user_data(&self, data: Context) {
        self.inner.lock().user_data = Some(data);
    }

    pub fn user_data(&self) -> Option<Context> {
        self.inner.lock().user_data.clone()
    }

    // ------------------------------------------------------------------
    // One-shot settings for the next call
    // ------------------------------------------------------------------

    /// Gate the next emitted call; `false` suppresses it
    pub fn condition(&self, value: bool) -> &Self {
        self.inner.lock().call.condition = value;
        self
    }

    /// Color the next call by name; unknown names clear the preset
    pub fn set_color(&self, name: &str) -> &Self {
        self.set_vcolor(Color::from_name(name))
    }

    pub fn set_vcolor(&self, color: Color) -> &Self {
        self.inner.lock().call.color = color;
        self
    }

    pub fn col_black(&self) -> &Self {
        self.set_vcolor(Color::Black)
    }

    pub fn col_red(&self) -> &Self {
        self.set_vcolor(Color::Red)
    }

    pub fn col_green(&self) -> &Self {
        self.set_vcolor(Color::Green)
    }

    pub fn col_yellow(&self) -> &Self {
        self.set_vcolor(Color::Yellow)
    }

    pub fn col_blue(&self) -> &Self {
        self.set_vcolor(Color::Blue)
    }

    pub fn col_purple(&self) -> &Self {
        self.set_vcolor(Color::Purple)
    }

    pub fn col_dark_green(&self) -> &Self {
        self.set_vcolor(Color::DarkGreen)
    }

    pub fn col_white(&self) -> &Self {
        self.set_vcolor(Color::White)
    }

    /// Color currently preset for the next call
    pub fn current_color(&self) -> Color {
        self.inner.lock().call.color
    }

    /// Condition gate currently set for the next call
    pub fn current_condition(&self) -> bool {
        self.inner.lock().call.condition
    }

    // ------------------------------------------------------------------
    // Emission
    // ------------------------------------------------------------------

    /// Emit `text` at `level`, skipping the entry pre-filter
    pub fn log_text(&self, level: LogLevel, text: impl Into<String>) {
        self.emit(level, text.into(), None);
    }

    /// Emit with an opaque context value readable by parts
    pub fn log_with_context(&self, level: LogLevel, text: impl Into<String>, context: Context) {
        self.emit(level, text.into(), Some(context));
    }

    fn emit(&self, level: LogLevel, text: String, context: Option<Context>) {
        let mut call = CallGuard(self.inner.lock());

        call.call.level = level;
        call.call.text = text;
        call.call.context = context;

        if call.call.level < call.level || !call.call.condition {
            self.metrics.record_suppressed();
            return;
        }

        let colorable = self.shared.is_colorable();
        let inner: &mut Inner = &mut call;
        inner.call.color = resolve_color(
            inner.call.color,
            inner.call.level,
            &inner.call.text,
            inner.rules.as_deref(),
            inner.color_enabled && colorable,
        );

        let Inner {
            color_enabled,
            sink,
            pipeline,
            user_data,
            call: state,
            buf,
            ..
        } = inner;

        let render = RenderState {
            name: &self.name,
            pkg_name: &self.pkg_name,
            level: state.level,
            text: &state.text,
            color: state.color,
            color_enabled: *color_enabled,
            colorable,
            context: state.context.as_deref(),
            user_data: user_data.as_deref(),
        };
        pipeline.run(&render, buf);

        let written = match sink {
            Some(sink) => sink.write(buf),
            None => self.shared.write_default(buf),
        };
        match written {
            Ok(()) => {
                self.metrics.record_written();
            }
            Err(e) => self.absorb_write_failure(e),
        }
    }

    /// Sink failures never reach the caller; they are counted and reported
    /// on stderr for the first failure and every 1000th after it.
    fn absorb_write_failure(&self, err: super::error::LoggerError) {
        let failed = self.metrics.record_write_failure();
        if failed == 0 || (failed + 1) % 1000 == 0 {
            eprintln!(
                "[LOGGER ERROR] Logger '{}' sink write failed ({} so far): {}",
                self.name,
                failed + 1,
                err
            );
        }
    }

    /// True when `debug`/`info`/`warn` should return without emitting
    #[inline]
    fn entry_filtered(&self) -> bool {
        if self.level() < self.shared.level() {
            self.metrics.record_suppressed();
            return true;
        }
        false
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        if self.entry_filtered() {
            return;
        }
        self.log_text(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        if self.entry_filtered() {
            return;
        }
        self.log_text(LogLevel::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        if self.entry_filtered() {
            return;
        }
        self.log_text(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log_text(LogLevel::Error, message);
    }

    /// Emit at `Fatal`, flush, and exit the process with [`FATAL_EXIT_CODE`]
    pub fn fatal(&self, message: impl Into<String>) -> ! {
        self.log_text(LogLevel::Fatal, message);
        self.exit_fatal()
    }

    /// Format arguments are only rendered when the entry pre-filter passes.
    pub fn debug_fmt(&self, args: fmt::Arguments<'_>) {
        if self.entry_filtered() {
            return;
        }
        self.log_text(LogLevel::Debug, fmt::format(args));
    }

    pub fn info_fmt(&self, args: fmt::Arguments<'_>) {
        if self.entry_filtered() {
            return;
        }
        self.log_text(LogLevel::Info, fmt::format(args));
    }

    pub fn warn_fmt(&self, args: fmt::Arguments<'_>) {
        if self.entry_filtered() {
            return;
        }
        self.log_text(LogLevel::Warn, fmt::format(args));
    }

    pub fn error_fmt(&self, args: fmt::Arguments<'_>) {
        self.log_text(LogLevel::Error, fmt::format(args));
    }

    pub fn fatal_fmt(&self, args: fmt::Arguments<'_>) -> ! {
        self.log_text(LogLevel::Fatal, fmt::format(args));
        self.exit_fatal()
    }

    fn exit_fatal(&self) -> ! {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush before exit: {}", e);
        }
        std::process::exit(FATAL_EXIT_CODE)
    }

    /// Flush this logger's sink, or the shared default sink when it has none
    pub fn flush(&self) -> Result<()> {
        let mut inner = self.inner.lock();
        match inner.sink.as_mut() {
            Some(sink) => sink.flush(),
            None => self.shared.flush_default(),
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("pkg_name", &self.pkg_name)
            .finish_non_exhaustive()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Some(sink) = self.inner.get_mut().sink.as_mut() {
            if let Err(e) = sink.flush() {
                eprintln!(
                    "[LOGGER ERROR] Logger '{}' failed to flush on drop: {}",
                    self.name, e
                );
            }
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use tinted_logger::prelude::*;
/// use std::sync::Arc;
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder("db")
///     .level(LogLevel::Info)
///     .sink(sink.clone())
///     .parts([part(parts::level_label)])
///     .shared_config(Arc::new(SharedConfig::new()))
///     .build();
///
/// logger.info("connected");
/// assert_eq!(sink.contents_string(), "[INFO] connected\n");
/// ```
pub struct LoggerBuilder {
    name: String,
    pkg_name: String,
    level: LogLevel,
    color_enabled: bool,
    sink: Option<Box<dyn Sink>>,
    rules: Option<Arc<ColorRuleSet>>,
    pipeline: Pipeline,
    shared: Option<Arc<SharedConfig>>,
}

impl LoggerBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pkg_name: String::new(),
            level: LogLevel::Debug,
            color_enabled: false,
            sink: None,
            rules: None,
            pipeline: Pipeline::default(),
            shared: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Package name shown by the `pkg_name` part
    #[must_use = "builder methods return a new value"]
    pub fn pkg_name(mut self, pkg_name: impl Into<String>) -> Self {
        self.pkg_name = pkg_name.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn enable_color(mut self, enable: bool) -> Self {
        self.color_enabled = enable;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn color_rules(mut self, rules: Arc<ColorRuleSet>) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Middle parts, framed by color, text and newline
    #[must_use = "builder methods return a new value"]
    pub fn parts(mut self, middle: impl IntoIterator<Item = Arc<dyn Part>>) -> Self {
        self.pipeline = Pipeline::framed(middle);
        self
    }

    /// Complete pipeline with no automatic framing
    #[must_use = "builder methods return a new value"]
    pub fn full_parts(mut self, parts: impl IntoIterator<Item = Arc<dyn Part>>) -> Self {
        self.pipeline = Pipeline::raw(parts);
        self
    }

    /// Bind to a private configuration instead of the process-wide one
    #[must_use = "builder methods return a new value"]
    pub fn shared_config(mut self, shared: Arc<SharedConfig>) -> Self {
        self.shared = Some(shared);
        self
    }

    pub fn build(self) -> Logger {
        Logger {
            name: self.name,
            pkg_name: self.pkg_name,
            shared: self.shared.unwrap_or_else(SharedConfig::global),
            metrics: LoggerMetrics::new(),
            inner: Mutex::new(Inner {
                level: self.level,
                color_enabled: self.color_enabled,
                sink: self.sink,
                rules: self.rules,
                pipeline: self.pipeline,
                user_data: None,
                call: CallState::new(),
                buf: Vec::with_capacity(LINE_BUFFER),
            }),
        }
    }
}
