//! Substring-to-color rules
//!
//! A [`ColorRuleSet`] is an ordered list of `(substring, color)` pairs. The
//! first rule whose substring occurs in the logged text decides the color.
//! Rule sets are parsed from JSON:
//!
//! ```json
//! { "Rule": [ { "Text": "fail", "Color": "red" }, { "Text": "ok", "Color": "green" } ] }
//! ```
//!
//! A bare array of rules is accepted as well. Keys may also be written in
//! lower case (`rule`, `text`, `color`); any other key fails the load.

use super::color::Color;
use super::error::{LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One substring match rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRule {
    #[serde(rename = "Text", alias = "text")]
    pub pattern: String,
    #[serde(rename = "Color", alias = "color")]
    pub color_name: String,
    #[serde(skip)]
    color: Color,
}

impl ColorRule {
    /// Build a rule, resolving the color name immediately.
    pub fn new(pattern: impl Into<String>, color_name: impl Into<String>) -> Result<Self> {
        let mut rule = Self {
            pattern: pattern.into(),
            color_name: color_name.into(),
            color: Color::None,
        };
        rule.resolve()?;
        Ok(rule)
    }

    /// Resolved color
    pub fn color(&self) -> Color {
        self.color
    }

    fn resolve(&mut self) -> Result<()> {
        self.color = Color::from_name(&self.color_name);
        if self.color.is_none() {
            return Err(LoggerError::unknown_color(&self.pattern, &self.color_name));
        }
        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RuleWrapper {
    #[serde(rename = "Rule", alias = "rule")]
    rule: Vec<ColorRule>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RuleDocument {
    Bare(Vec<ColorRule>),
    Wrapped(RuleWrapper),
}

/// Ordered rule list, read-only once loaded
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColorRuleSet {
    #[serde(rename = "Rule")]
    rules: Vec<ColorRule>,
}

impl ColorRuleSet {
    pub fn new(rules: Vec<ColorRule>) -> Self {
        Self { rules }
    }

    /// Parse a JSON rule definition.
    ///
    /// All-or-nothing: a single rule naming an unknown color fails the whole
    /// load and nothing is returned.
    pub fn load(json: &str) -> Result<Self> {
        let document: RuleDocument = serde_json::from_str(json)?;
        let mut rules = match document {
            RuleDocument::Bare(rules) => rules,
            RuleDocument::Wrapped(wrapper) => wrapper.rule,
        };
        for rule in &mut rules {
            rule.resolve()?;
        }
        Ok(Self { rules })
    }

    /// Read and parse a JSON rule definition from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation("reading color file", path.display().to_string(), e)
        })?;
        Self::load(&data)
    }

    /// Color of the first rule whose pattern occurs in `text`
    pub fn color_for(&self, text: &str) -> Color {
        self.rules
            .iter()
            .find(|rule| text.contains(rule.pattern.as_str()))
            .map(ColorRule::color)
            .unwrap_or(Color::None)
    }

    pub fn rules(&self) -> &[ColorRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
