//! Basic logger usage example
//!
//! Demonstrates severity colors, rule-based colors and one-shot settings.
//!
//! Run with: cargo run --example basic_usage

use std::sync::Arc;
use tinted_logger::prelude::*;
use tinted_logger::{info, warn};

const RULES: &str = r#"{"Rule":[{"Text":"fail","Color":"red"},{"Text":"ok","Color":"green"}]}"#;

fn main() -> Result<()> {
    println!("=== Tinted Logger - Basic Usage Example ===\n");

    let logger = tinted_logger::new_logger!("demo");
    logger.enable_color(true);
    logger.set_color_rules(Arc::new(ColorRuleSet::load(RULES)?));

    println!("1. Severity colors:");
    logger.debug("debug is uncolored");
    logger.info("info is uncolored");
    logger.warn("warn is always yellow");
    logger.error("error is always red");

    println!("\n2. Rule colors:");
    info!(logger, "health check ok after {}ms", 12);
    info!(logger, "upload fail, retrying");

    println!("\n3. One-shot settings:");
    logger.col_purple().info("explicit color beats the ok rule");
    logger.condition(false).info("this line is never written");
    logger.condition(true).info("this one is");

    println!("\n4. Raising the logger threshold:");
    logger.set_level(LogLevel::Warn);
    logger.info("hidden");
    warn!(logger, "{} retries left", 2);

    logger.flush()?;
    println!("\n=== Example completed successfully! ===");
    Ok(())
}
