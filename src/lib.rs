pub mod config;
pub mod error;
pub mod parse;

pub use config::{load_config, parse_str, Config, Group};
pub use error::{ConfigError, Result};
pub use parse::Value;
