//! Parsed configuration containers and file entry points
//!
//! [`load_config`] reads a file line by line (one line in memory at a time),
//! feeds each line through the parsing pipeline, applies any override
//! directives in order, and returns the finished [`Config`]. [`parse_str`]
//! runs the same pipeline over an in-memory string.
//!
//! # Example
//!
//! ```no_run
//! use groupconf::config::load_config;
//!
//! let config = load_config("app.conf", &["server.port=9090"]).unwrap();
//! if let Some(port) = config.get("server", "port").and_then(|v| v.as_int()) {
//!     println!("port: {port}");
//! }
//! ```

pub mod map;

pub use map::{Config, Group};

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Result;
use crate::parse::ConfigBuilder;

/// Load a configuration file, then apply override directives in order
///
/// Overrides use the `group.key=value` form with the same value grammar as
/// file settings; the last one applied wins per (group, key) pair. Fails on
/// the first grammar violation or on I/O failure; there is no partial
/// success.
pub fn load_config<P: AsRef<Path>>(path: P, overrides: &[&str]) -> Result<Config> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading config");

    let file = File::open(path)?;
    let mut builder = ConfigBuilder::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        builder.feed(index + 1, &line?)?;
    }
    apply_overrides(&mut builder, overrides)?;
    Ok(builder.finish())
}

/// Parse configuration text already held in memory
pub fn parse_str(input: &str, overrides: &[&str]) -> Result<Config> {
    let mut builder = ConfigBuilder::new();
    for (index, line) in input.lines().enumerate() {
        builder.feed(index + 1, line)?;
    }
    apply_overrides(&mut builder, overrides)?;
    Ok(builder.finish())
}

fn apply_overrides(builder: &mut ConfigBuilder, overrides: &[&str]) -> Result<()> {
    for (index, directive) in overrides.iter().enumerate() {
        builder.apply_override(index + 1, directive)?;
    }
    Ok(())
}
