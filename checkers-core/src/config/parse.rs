//! Simple TOML parser for the game configuration
//!
//! A minimal, allocation-free parser for the subset of TOML used by
//! `game.toml`. It does NOT support the full TOML grammar.
//!
//! Supported features:
//! - `[section]` headers
//! - Key = value pairs (integer, hex integer, boolean, string)
//! - Comments (# ...), including trailing comments
//!
//! Unknown keys are ignored; unknown sections are rejected.

use super::types::GameConfig;
use crate::rules::MovePolicy;
use crate::traits::Rgb565;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Value has the wrong type or is out of range
    InvalidValue,
    /// Line is neither a header, a comment nor `key = value`
    InvalidLine,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Timing,
    Joystick,
    Rules,
    Palette,
    Layout,
}

/// Parse TOML text on top of the default configuration
///
/// Keys that are absent keep their default value. The result is not
/// validated; call [`GameConfig::validate`] before use.
pub fn parse_config(input: &str) -> Result<GameConfig, ParseError> {
    let mut config = GameConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = strip_comment(line).trim();

        // Skip empty lines and comments
        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidLine)?;
        apply_value(section, key, value, &mut config)?;
    }

    Ok(config)
}

fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "timing" => Ok(Section::Timing),
        "joystick" => Ok(Section::Joystick),
        "rules" => Ok(Section::Rules),
        "palette" => Ok(Section::Palette),
        "layout" => Ok(Section::Layout),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Drop a trailing `# comment` unless the `#` sits inside a string
fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    for (i, ch) in line.char_indices() {
        match ch {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..i],
            _ => {}
        }
    }
    line
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let (key, value) = (key.trim(), value.trim());

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a quoted string value (removes quotes)
fn parse_string(value: &str) -> Result<&str, ParseError> {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .ok_or(ParseError::InvalidValue)
}

/// Parse a decimal or `0x` hexadecimal integer, `_` separators allowed
fn parse_int<T: TryFrom<u64>>(value: &str) -> Result<T, ParseError> {
    let mut digits: heapless::String<24> = heapless::String::new();
    for ch in value.chars().filter(|&c| c != '_') {
        digits.push(ch).map_err(|_| ParseError::InvalidValue)?;
    }

    let raw = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => digits.parse::<u64>(),
    }
    .map_err(|_| ParseError::InvalidValue)?;

    T::try_from(raw).map_err(|_| ParseError::InvalidValue)
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}

/// Parse a quoted colour name or a raw RGB565 integer
fn parse_color(value: &str) -> Result<Rgb565, ParseError> {
    if !value.starts_with('"') {
        return parse_int(value).map(Rgb565);
    }
    match parse_string(value)? {
        "black" => Ok(Rgb565::BLACK),
        "red" => Ok(Rgb565::RED),
        "green" => Ok(Rgb565::GREEN),
        "blue" => Ok(Rgb565::BLUE),
        "white" => Ok(Rgb565::WHITE),
        _ => Err(ParseError::InvalidValue),
    }
}

fn parse_move_policy(value: &str) -> Result<MovePolicy, ParseError> {
    match parse_string(value)? {
        "permissive" => Ok(MovePolicy::Permissive),
        "strict" => Ok(MovePolicy::Strict),
        _ => Err(ParseError::InvalidValue),
    }
}

fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut GameConfig,
) -> Result<(), ParseError> {
    match section {
        Section::Root => {}
        Section::Timing => {
            let t = &mut config.timing;
            match key {
                "tick_ms" => t.tick_ms = parse_int(value)?,
                "render_period_ms" => t.render_period_ms = parse_int(value)?,
                "cursor_period_ms" => t.cursor_period_ms = parse_int(value)?,
                "move_period_ms" => t.move_period_ms = parse_int(value)?,
                _ => {} // Ignore unknown keys
            }
        }
        Section::Joystick => {
            let j = &mut config.joystick;
            match key {
                "low_threshold" => j.thresholds.low = parse_int(value)?,
                "high_threshold" => j.thresholds.high = parse_int(value)?,
                "invert_x" => j.invert_x = parse_bool(value)?,
                "invert_y" => j.invert_y = parse_bool(value)?,
                _ => {}
            }
        }
        Section::Rules => {
            if key == "move_policy" {
                config.rules.move_policy = parse_move_policy(value)?;
            }
        }
        Section::Palette => {
            let p = &mut config.palette;
            let slot = match key {
                "square_light" => &mut p.square_light,
                "square_dark" => &mut p.square_dark,
                "piece_light" => &mut p.piece_light,
                "piece_dark" => &mut p.piece_dark,
                "outline" => &mut p.outline,
                "cursor" => &mut p.cursor,
                "selection" => &mut p.selection,
                _ => return Ok(()),
            };
            *slot = parse_color(value)?;
        }
        Section::Layout => {
            let l = &mut config.layout;
            match key {
                "panel_width" => l.panel_width = parse_int(value)?,
                "panel_height" => l.panel_height = parse_int(value)?,
                "origin_x" => l.origin_x = parse_int(value)?,
                "origin_y" => l.origin_y = parse_int(value)?,
                "cell_size" => l.cell_size = parse_int(value)?,
                "frame_width" => l.frame_width = parse_int(value)?,
                _ => {}
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_gives_defaults() {
        assert_eq!(parse_config("").unwrap(), GameConfig::default());
        assert_eq!(
            parse_config("# only a comment\n\n").unwrap(),
            GameConfig::default()
        );
    }

    #[test]
    fn test_parse_full_config() {
        let config_str = r#"
# Stock handheld
[timing]
tick_ms = 25
render_period_ms = 1_000   # slow panel
cursor_period_ms = 50
move_period_ms = 75

[joystick]
low_threshold = 200
high_threshold = 824
invert_x = true
invert_y = false

[rules]
move_policy = "strict"

[palette]
square_light = 0x0010
square_dark = "black"
selection = "blue"

[layout]
origin_x = 0
cell_size = 16
"#;

        let config = parse_config(config_str).unwrap();
        assert_eq!(config.timing.tick_ms, 25);
        assert_eq!(config.timing.render_period_ms, 1000);
        assert_eq!(config.timing.move_period_ms, 75);
        assert_eq!(config.joystick.thresholds.low, 200);
        assert_eq!(config.joystick.thresholds.high, 824);
        assert!(config.joystick.invert_x);
        assert!(!config.joystick.invert_y);
        assert_eq!(config.rules.move_policy, MovePolicy::Strict);
        assert_eq!(config.palette.square_light, Rgb565(0x0010));
        assert_eq!(config.palette.square_dark, Rgb565::BLACK);
        assert_eq!(config.palette.selection, Rgb565::BLUE);
        // Untouched keys keep defaults
        assert_eq!(config.palette.outline, Rgb565::WHITE);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_unknown_section_rejected() {
        assert_eq!(
            parse_config("[sound]\nvolume = 3"),
            Err(ParseError::InvalidSection)
        );
    }

    #[test]
    fn test_unknown_key_ignored() {
        let config = parse_config("[timing]\nwatchdog_ms = 10").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_bad_values() {
        assert_eq!(
            parse_config("[joystick]\ninvert_x = yes"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[layout]\ncell_size = 70000"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[rules]\nmove_policy = \"lenient\""),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(parse_config("[timing]\ntick_ms"), Err(ParseError::InvalidLine));
    }

    #[test]
    fn test_strings_must_be_quoted() {
        assert_eq!(
            parse_config("[palette]\nselection = blue"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[rules]\nmove_policy = strict"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[palette]\nselection = \"0x07E0\""),
            Err(ParseError::InvalidValue)
        );
        let config = parse_config("[palette]\nselection = 0x07E0").unwrap();
        assert_eq!(config.palette.selection, Rgb565::GREEN);
    }

    #[test]
    fn test_strip_comment_respects_strings() {
        assert_eq!(strip_comment("a = 1 # note"), "a = 1 ");
        assert_eq!(strip_comment("a = \"#fff\""), "a = \"#fff\"");
    }

    #[test]
    fn test_parse_int_forms() {
        assert_eq!(parse_int::<u16>("0xF800"), Ok(0xF800));
        assert_eq!(parse_int::<u32>("1_000"), Ok(1000));
        assert_eq!(parse_int::<u8>("256"), Err(ParseError::InvalidValue));
        assert_eq!(parse_int::<u8>("-1"), Err(ParseError::InvalidValue));
    }
}
