//! Cache CLI commands.

use clap::{Parser, Subcommand};

/// Cache commands.
#[derive(Debug, Parser)]
pub struct CacheCommand {
    #[command(subcommand)]
    pub action: CacheAction,
}

/// Available cache actions.
///
/// Keys may be written as templates, e.g. `service-{service_id}-templates`,
/// with each placeholder filled by an `--arg name=value`.
#[derive(Debug, Subcommand)]
pub enum CacheAction {
    /// Show the raw cached value for a key.
    Get {
        /// Cache key or key template.
        key: String,
        /// Placeholder value as `name=value` (repeatable).
        #[arg(long = "arg", value_parser = parse_key_value)]
        args: Vec<(String, String)>,
    },
    /// Delete a key, or every key matching a glob pattern.
    Purge {
        /// Cache key, glob pattern or template. Defaults to every key.
        #[arg(default_value = "*")]
        key: String,
        /// Placeholder value as `name=value` (repeatable).
        #[arg(long = "arg", value_parser = parse_key_value)]
        args: Vec<(String, String)>,
    },
}

/// Parse a `name=value` pair.
pub fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{}'", s))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing name in '{}'", s));
    }
    Ok((name.to_string(), value.to_string()))
}
