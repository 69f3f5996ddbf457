//! Configuration types
//!
//! Board-agnostic game configuration and the parser for `game.toml`.

pub mod parse;
pub mod types;

pub use parse::{parse_config, ParseError};
pub use types::*;
