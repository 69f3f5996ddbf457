//! Build script for checkers-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates game.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

const BOARD_SIZE: i64 = 8;
const GLYPH_SIZE: i64 = 14;
const COLOR_NAMES: &[&str] = &["black", "red", "green", "blue", "white"];

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate game.toml at compile time
///
/// Mirrors `GameConfig::validate` in checkers-core.
fn validate_config() {
    println!("cargo:rerun-if-changed=game.toml");

    let config_path = Path::new("game.toml");
    if !config_path.exists() {
        fail(&["game.toml not found next to Cargo.toml".to_string()]);
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail(&[format!("failed to read game.toml: {}", e)]),
    };

    let config: toml::Value = match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => fail(&[format!("game.toml is not valid TOML: {}", e)]),
    };

    let mut errors = Vec::new();

    if let Some(table) = config.as_table() {
        for section in table.keys() {
            if !["timing", "joystick", "rules", "palette", "layout"].contains(&section.as_str()) {
                errors.push(format!("unknown section [{}]", section));
            }
        }
    }

    validate_timing(&config, &mut errors);
    validate_joystick(&config, &mut errors);
    validate_rules(&config, &mut errors);
    validate_palette(&config, &mut errors);
    validate_layout(&config, &mut errors);

    if !errors.is_empty() {
        fail(&errors);
    }
}

fn fail(errors: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: Invalid game.toml                                        ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        errors
            .iter()
            .map(|e| format!("║  • {:<62} ║", e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Integer value of `section.key`, or `default` if absent
fn int(config: &toml::Value, section: &str, key: &str, default: i64, errors: &mut Vec<String>) -> i64 {
    match config.get(section).and_then(|s| s.get(key)) {
        None => default,
        Some(toml::Value::Integer(v)) => *v,
        Some(_) => {
            errors.push(format!("[{}] {} must be an integer", section, key));
            default
        }
    }
}

fn validate_timing(config: &toml::Value, errors: &mut Vec<String>) {
    let tick = int(config, "timing", "tick_ms", 50, errors);
    if tick <= 0 {
        errors.push("[timing] tick_ms must be positive".to_string());
        return;
    }

    for (key, default) in [
        ("render_period_ms", 500),
        ("cursor_period_ms", 50),
        ("move_period_ms", 50),
    ] {
        let period = int(config, "timing", key, default, errors);
        if period <= 0 || period % tick != 0 {
            errors.push(format!("[timing] {} must be a multiple of tick_ms ({})", key, tick));
        }
    }
}

fn validate_joystick(config: &toml::Value, errors: &mut Vec<String>) {
    let low = int(config, "joystick", "low_threshold", 256, errors);
    let high = int(config, "joystick", "high_threshold", 768, errors);
    if !(0 <= low && low < 512 && 512 < high && high < 1024) {
        errors.push("[joystick] need low_threshold < 512 < high_threshold < 1024".to_string());
    }

    for key in ["invert_x", "invert_y"] {
        if let Some(value) = config.get("joystick").and_then(|j| j.get(key)) {
            if !value.is_bool() {
                errors.push(format!("[joystick] {} must be true or false", key));
            }
        }
    }
}

fn validate_rules(config: &toml::Value, errors: &mut Vec<String>) {
    if let Some(policy) = config.get("rules").and_then(|r| r.get("move_policy")) {
        if !matches!(policy.as_str(), Some("permissive" | "strict")) {
            errors.push("[rules] move_policy must be \"permissive\" or \"strict\"".to_string());
        }
    }
}

fn validate_palette(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(palette) = config.get("palette").and_then(|p| p.as_table()) else {
        return;
    };

    for (key, value) in palette {
        let ok = match value {
            toml::Value::String(name) => COLOR_NAMES.contains(&name.as_str()),
            toml::Value::Integer(raw) => (0..=0xFFFF).contains(raw),
            _ => false,
        };
        if !ok {
            errors.push(format!("[palette] {} is not a colour name or RGB565 value", key));
        }
    }
}

fn validate_layout(config: &toml::Value, errors: &mut Vec<String>) {
    let width = int(config, "layout", "panel_width", 128, errors);
    let height = int(config, "layout", "panel_height", 128, errors);
    let origin_x = int(config, "layout", "origin_x", 0, errors);
    let origin_y = int(config, "layout", "origin_y", 0, errors);
    let cell = int(config, "layout", "cell_size", 16, errors);
    let frame = int(config, "layout", "frame_width", 2, errors);

    if cell < GLYPH_SIZE || frame * 2 > cell {
        errors.push(format!("[layout] cell_size must be at least {}", GLYPH_SIZE));
    }
    if origin_x + cell * BOARD_SIZE > width || origin_y + cell * BOARD_SIZE > height {
        errors.push("[layout] board does not fit on the panel".to_string());
    }
}
