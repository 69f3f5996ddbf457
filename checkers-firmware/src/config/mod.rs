//! Configuration loading
//!
//! The game configuration is compiled in from `game.toml` and parsed at
//! boot with the `no_std` parser from checkers-core.

pub mod loader;

pub use loader::load_config;
