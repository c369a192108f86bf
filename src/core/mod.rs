//! Core logger types and traits

pub mod color;
pub mod color_rule;
pub mod error;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod pipeline;
pub mod resolve;
pub mod shared_config;
pub mod sink;
pub mod timestamp;

pub use color::{Color, COLOR_SUFFIX};
pub use color_rule::{ColorRule, ColorRuleSet};
pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder, FATAL_EXIT_CODE};
pub use metrics::LoggerMetrics;
pub use pipeline::{part, Context, Part, Pipeline, RenderState};
pub use resolve::resolve_color;
pub use shared_config::{
    detect_colorable, global_level, is_colorable, set_colorable, set_default_sink,
    set_global_level, SharedConfig,
};
pub use sink::Sink;
pub use timestamp::TimestampFormat;
