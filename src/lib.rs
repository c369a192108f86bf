//! # Tinted Logger
//!
//! Named, per-process text loggers that filter by severity, render each line
//! through a composable pipeline of parts, and optionally frame the line in
//! a terminal color chosen by severity or by substring rules.
//!
//! ## Features
//!
//! - **Named loggers**: each with its own threshold, sink, rules and parts
//! - **Color rules**: JSON-defined substring-to-color rules, first match wins
//! - **Render pipeline**: reorder, extend or replace the formatting steps
//! - **Thread safe**: one critical section per call, no interleaved lines
//!
//! ```
//! use tinted_logger::prelude::*;
//! use std::sync::Arc;
//!
//! let sink = MemorySink::new();
//! let logger = Logger::builder("app")
//!     .sink(sink.clone())
//!     .parts([part(parts::level_label), part(parts::name)])
//!     .shared_config(Arc::new(SharedConfig::new()))
//!     .build();
//!
//! tinted_logger::info!(logger, "listening on {}", 8080);
//! assert_eq!(sink.contents_string(), "[INFO] app listening on 8080\n");
//! ```

pub mod core;
pub mod macros;
pub mod parts;
pub mod registry;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        part, Color, ColorRule, ColorRuleSet, Context, LogLevel, Logger, LoggerBuilder,
        LoggerError, LoggerMetrics, Part, Pipeline, RenderState, Result, SharedConfig, Sink,
        TimestampFormat,
    };
    pub use crate::parts;
    pub use crate::registry::{LoggerRegistry, NamePattern, NameRegistry};
    pub use crate::sinks::{ConsoleSink, FileSink, MemorySink, WriterSink};
}

pub use crate::core::{
    detect_colorable, global_level, is_colorable, part, resolve_color, set_colorable,
    set_default_sink, set_global_level, Color, ColorRule, ColorRuleSet, Context, LogLevel, Logger,
    LoggerBuilder, LoggerError, LoggerMetrics, Part, Pipeline, RenderState, Result, SharedConfig,
    Sink, TimestampFormat, COLOR_SUFFIX, FATAL_EXIT_CODE,
};
pub use registry::{LoggerRegistry, NamePattern, NameRegistry};
pub use sinks::{ConsoleSink, FileSink, MemorySink, WriterSink};
