//! Per-call color resolution
//!
//! Two sources decide the color of a line:
//!
//! 1. Text rules: consulted only when rules are active (color enabled on the
//!    logger, terminal colorable, a rule set attached) and no color was set
//!    explicitly for the call. First matching rule wins.
//! 2. Severity: runs last and unconditionally. `Warn` and `Error` overwrite
//!    whatever was chosen so far; other levels leave it alone.

use super::color::Color;
use super::color_rule::ColorRuleSet;
use super::log_level::LogLevel;

/// Resolve the color for one call.
///
/// `preset` is the color set explicitly before the call, or `Color::None`.
/// `rules_active` is false when color is disabled for the logger or the
/// terminal cannot show color.
pub fn resolve_color(
    preset: Color,
    level: LogLevel,
    text: &str,
    rules: Option<&ColorRuleSet>,
    rules_active: bool,
) -> Color {
    let mut color = preset;

    if rules_active && color.is_none() {
        if let Some(rules) = rules {
            color = rules.color_for(text);
        }
    }

    match Color::for_level(level) {
        Color::None => color,
        forced => forced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> ColorRuleSet {
        ColorRuleSet::load(r#"[{"Text":"fail","Color":"red"},{"Text":"ok","Color":"green"}]"#)
            .expect("valid rules")
    }

    #[test]
    fn test_rule_match() {
        let rules = rules();
        let r = Some(&rules);
        assert_eq!(
            resolve_color(Color::None, LogLevel::Info, "operation fail now", r, true),
            Color::Red
        );
        assert_eq!(resolve_color(Color::None, LogLevel::Info, "all ok", r, true), Color::Green);
        assert_eq!(resolve_color(Color::None, LogLevel::Info, "neutral", r, true), Color::None);
    }

    #[test]
    fn test_preset_beats_rule() {
        let rules = rules();
        assert_eq!(
            resolve_color(Color::Blue, LogLevel::Debug, "fail", Some(&rules), true),
            Color::Blue
        );
    }

    #[test]
    fn test_severity_beats_everything() {
        let rules = rules();
        assert_eq!(
            resolve_color(Color::Blue, LogLevel::Warn, "all ok", Some(&rules), true),
            Color::Yellow
        );
        assert_eq!(
            resolve_color(Color::Green, LogLevel::Error, "neutral", None, false),
            Color::Red
        );
    }

    #[test]
    fn test_inactive_rules_skipped() {
        let rules = rules();
        assert_eq!(
            resolve_color(Color::None, LogLevel::Info, "fail", Some(&rules), false),
            Color::None
        );
        assert_eq!(resolve_color(Color::None, LogLevel::Info, "fail", None, true), Color::None);
    }

    #[test]
    fn test_fatal_keeps_preset() {
        assert_eq!(
            resolve_color(Color::Purple, LogLevel::Fatal, "x", None, true),
            Color::Purple
        );
    }
}
