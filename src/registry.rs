//! Looking up loggers by name to reconfigure many at once
//!
//! The [`LoggerRegistry`] trait is the seam: anything that can map a name
//! pattern to logger handles can drive the broadcast helpers below.
//! [`NameRegistry`] is a plain in-memory implementation.
//!
//! Patterns are globs compiled with `globset`: `*` matches any run of
//! characters, e.g. `"net.*"` or `"*"`. A name without wildcards matches
//! only itself.

use crate::core::{ColorRuleSet, Logger, LoggerError, Result};
use globset::{GlobBuilder, GlobMatcher};
use parking_lot::RwLock;
use std::path::Path;
use std::sync::Arc;

/// Compiled logger name pattern
#[derive(Debug, Clone)]
pub struct NamePattern {
    matcher: GlobMatcher,
}

impl NamePattern {
    pub fn new(pattern: &str) -> Result<Self> {
        let glob = GlobBuilder::new(pattern).build().map_err(|e| {
            LoggerError::config("registry", format!("invalid logger pattern '{}': {}", pattern, e))
        })?;
        Ok(Self {
            matcher: glob.compile_matcher(),
        })
    }

    pub fn as_str(&self) -> &str {
        self.matcher.glob().glob()
    }

    pub fn matches(&self, name: &str) -> bool {
        self.matcher.is_match(name)
    }
}

pub trait LoggerRegistry {
    /// Call `f` for each logger matching `pattern` until it returns `false`.
    /// Returns how many loggers were visited.
    fn visit(&self, pattern: &NamePattern, f: &mut dyn FnMut(&Logger) -> bool) -> usize;
}

#[derive(Debug, Default)]
pub struct NameRegistry {
    loggers: RwLock<Vec<Arc<Logger>>>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a logger and hand back the shared handle
    pub fn register(&self, logger: Logger) -> Arc<Logger> {
        let logger = Arc::new(logger);
        self.loggers.write().push(Arc::clone(&logger));
        logger
    }

    /// First logger registered under exactly `name`
    pub fn get(&self, name: &str) -> Option<Arc<Logger>> {
        self.loggers
            .read()
            .iter()
            .find(|l| l.name() == name)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.loggers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.read().is_empty()
    }
}

impl LoggerRegistry for NameRegistry {
    fn visit(&self, pattern: &NamePattern, f: &mut dyn FnMut(&Logger) -> bool) -> usize {
        // Snapshot so callbacks may register more loggers.
        let loggers: Vec<Arc<Logger>> = self.loggers.read().clone();
        let mut visited = 0;
        for logger in loggers.iter().filter(|l| pattern.matches(l.name())) {
            visited += 1;
            if !f(logger) {
                break;
            }
        }
        visited
    }
}

fn apply_all(
    registry: &dyn LoggerRegistry,
    pattern: &str,
    mut f: impl FnMut(&Logger),
) -> Result<usize> {
    let pattern = NamePattern::new(pattern)?;
    Ok(registry.visit(&pattern, &mut |l: &Logger| {
        f(l);
        true
    }))
}

/// Parse `json` once and attach the resulting rules to every match.
///
/// Nothing is touched when parsing fails or the pattern is invalid.
pub fn set_color_define(
    registry: &dyn LoggerRegistry,
    pattern: &str,
    json: &str,
) -> Result<usize> {
    let pattern = NamePattern::new(pattern)?;
    let rules = Arc::new(ColorRuleSet::load(json)?);
    Ok(registry.visit(&pattern, &mut |l: &Logger| {
        l.set_color_rules(Arc::clone(&rules));
        true
    }))
}

/// Load rules from a file and attach them to every match
pub fn set_color_file(
    registry: &dyn LoggerRegistry,
    pattern: &str,
    path: impl AsRef<Path>,
) -> Result<usize> {
    let pattern = NamePattern::new(pattern)?;
    let rules = Arc::new(ColorRuleSet::from_file(path)?);
    Ok(registry.visit(&pattern, &mut |l: &Logger| {
        l.set_color_rules(Arc::clone(&rules));
        true
    }))
}

pub fn enable_color_logger(
    registry: &dyn LoggerRegistry,
    pattern: &str,
    enable: bool,
) -> Result<usize> {
    apply_all(registry, pattern, |l| {
        l.enable_color(enable);
    })
}

/// Set the threshold of every match; unknown level names mean `Debug`
pub fn set_level_by_string(
    registry: &dyn LoggerRegistry,
    pattern: &str,
    level: &str,
) -> Result<usize> {
    apply_all(registry, pattern, |l| {
        l.set_level_by_string(level);
    })
}
