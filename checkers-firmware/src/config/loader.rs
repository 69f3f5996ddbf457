//! Embedded configuration loader
//!
//! Parses and validates the compiled-in `game.toml`. A file that fails
//! either step is reported and replaced by the built-in defaults, so the
//! board always boots into a playable game.

use defmt::*;

use checkers_core::config::{parse_config, GameConfig};

/// Embedded configuration (compiled into firmware)
/// Edit game.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../../game.toml");

/// Load the game configuration, falling back to defaults
pub fn load_config() -> GameConfig {
    let config = match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to parse game.toml: {:?}, using defaults", e);
            return GameConfig::default();
        }
    };

    if let Err(e) = config.validate() {
        error!("Invalid game.toml: {:?}, using defaults", e);
        return GameConfig::default();
    }

    info!(
        "Configuration loaded: tick={}ms render={}ms cursor={}ms move={}ms policy={:?}",
        config.timing.tick_ms,
        config.timing.render_period_ms,
        config.timing.cursor_period_ms,
        config.timing.move_period_ms,
        config.rules.move_policy
    );
    config
}
