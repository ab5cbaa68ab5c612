//! Theme registry and loader

use ratatui::style::Color;
use showcase_core::config::{ThemeColorOverrides, ThemeConfig};
use tracing::warn;

use crate::theme::Theme;

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => Some(Color::Rgb(
            channel(&hex[0..1])? * 17,
            channel(&hex[1..2])? * 17,
            channel(&hex[2..3])? * 17,
        )),
        6 => Some(Color::Rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => None,
    }
}

pub fn gruvbox_dark() -> Theme {
    Theme {
        bg0: Color::Rgb(0x28, 0x28, 0x28),
        bg1: Color::Rgb(0x32, 0x30, 0x2f),
        bg2: Color::Rgb(0x45, 0x40, 0x3d),
        fg0: Color::Rgb(0xd4, 0xbe, 0x98),
        fg1: Color::Rgb(0xdd, 0xc7, 0xa1),
        grey0: Color::Rgb(0x7c, 0x6f, 0x64),
        grey1: Color::Rgb(0x92, 0x83, 0x74),
        red: Color::Rgb(0xea, 0x69, 0x62),
        orange: Color::Rgb(0xe7, 0x8a, 0x4e),
        yellow: Color::Rgb(0xd8, 0xa6, 0x57),
        blue: Color::Rgb(0x7d, 0xae, 0xa3),
        purple: Color::Rgb(0xd3, 0x86, 0x9b),
        accent: Color::Rgb(0xe7, 0x8a, 0x4e),
        selection: Color::Rgb(0x45, 0x40, 0x3d),
        highlight: Color::Rgb(0xd8, 0xa6, 0x57),
    }
}

pub fn gruvbox_light() -> Theme {
    Theme {
        bg0: Color::Rgb(0xfb, 0xf1, 0xc7),
        bg1: Color::Rgb(0xf4, 0xe8, 0xbe),
        bg2: Color::Rgb(0xeb, 0xdb, 0xb2),
        fg0: Color::Rgb(0x65, 0x47, 0x35),
        fg1: Color::Rgb(0x4f, 0x38, 0x29),
        grey0: Color::Rgb(0xa8, 0x99, 0x84),
        grey1: Color::Rgb(0x92, 0x83, 0x74),
        red: Color::Rgb(0xc1, 0x4a, 0x4a),
        orange: Color::Rgb(0xc3, 0x5e, 0x0a),
        yellow: Color::Rgb(0xb4, 0x71, 0x09),
        blue: Color::Rgb(0x45, 0x70, 0x7a),
        purple: Color::Rgb(0x94, 0x5e, 0x80),
        accent: Color::Rgb(0xc3, 0x5e, 0x0a),
        selection: Color::Rgb(0xeb, 0xdb, 0xb2),
        highlight: Color::Rgb(0xb4, 0x71, 0x09),
    }
}

pub fn nord() -> Theme {
    Theme {
        bg0: Color::Rgb(0x2e, 0x34, 0x40),
        bg1: Color::Rgb(0x3b, 0x42, 0x52),
        bg2: Color::Rgb(0x43, 0x4c, 0x5e),
        fg0: Color::Rgb(0xd8, 0xde, 0xe9),
        fg1: Color::Rgb(0xe5, 0xe9, 0xf0),
        grey0: Color::Rgb(0x4c, 0x56, 0x6a),
        grey1: Color::Rgb(0x61, 0x6e, 0x88),
        red: Color::Rgb(0xbf, 0x61, 0x6a),
        orange: Color::Rgb(0xd0, 0x87, 0x70),
        yellow: Color::Rgb(0xeb, 0xcb, 0x8b),
        blue: Color::Rgb(0x81, 0xa1, 0xc1),
        purple: Color::Rgb(0xb4, 0x8e, 0xad),
        accent: Color::Rgb(0x88, 0xc0, 0xd0),
        selection: Color::Rgb(0x43, 0x4c, 0x5e),
        highlight: Color::Rgb(0xeb, 0xcb, 0x8b),
    }
}

pub fn dracula() -> Theme {
    Theme {
        bg0: Color::Rgb(0x28, 0x2a, 0x36),
        bg1: Color::Rgb(0x34, 0x37, 0x46),
        bg2: Color::Rgb(0x44, 0x47, 0x5a),
        fg0: Color::Rgb(0xf8, 0xf8, 0xf2),
        fg1: Color::Rgb(0xff, 0xff, 0xff),
        grey0: Color::Rgb(0x44, 0x47, 0x5a),
        grey1: Color::Rgb(0x62, 0x72, 0xa4),
        red: Color::Rgb(0xff, 0x55, 0x55),
        orange: Color::Rgb(0xff, 0xb8, 0x6c),
        yellow: Color::Rgb(0xf1, 0xfa, 0x8c),
        blue: Color::Rgb(0x8b, 0xe9, 0xfd),
        purple: Color::Rgb(0xbd, 0x93, 0xf9),
        accent: Color::Rgb(0xff, 0x79, 0xc6),
        selection: Color::Rgb(0x44, 0x47, 0x5a),
        highlight: Color::Rgb(0xf1, 0xfa, 0x8c),
    }
}

/// Load a theme by name from config
pub fn load_theme(config: &ThemeConfig) -> Theme {
    let base = match config.name.to_lowercase().as_str() {
        "gruvbox-dark" | "gruvbox" => gruvbox_dark(),
        "gruvbox-light" => gruvbox_light(),
        "nord" => nord(),
        "dracula" => dracula(),
        other => {
            warn!("Unknown theme '{}', falling back to gruvbox-dark", other);
            gruvbox_dark()
        }
    };

    apply_overrides(base, &config.colors)
}

/// Apply user color overrides to a base theme
fn apply_overrides(mut theme: Theme, overrides: &ThemeColorOverrides) -> Theme {
    let slots: [(&Option<String>, &mut Color); 6] = [
        (&overrides.bg0, &mut theme.bg0),
        (&overrides.bg1, &mut theme.bg1),
        (&overrides.fg0, &mut theme.fg0),
        (&overrides.accent, &mut theme.accent),
        (&overrides.selection, &mut theme.selection),
        (&overrides.highlight, &mut theme.highlight),
    ];

    for (hex, slot) in slots {
        let Some(hex) = hex else { continue };
        match parse_hex_color(hex) {
            Some(color) => *slot = color,
            None => warn!("Invalid color override '{}', keeping theme default", hex),
        }
    }

    theme
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#ff8000"), Some(Color::Rgb(255, 128, 0)));
        assert_eq!(parse_hex_color("ff8000"), Some(Color::Rgb(255, 128, 0)));
        assert_eq!(parse_hex_color("#f80"), Some(Color::Rgb(255, 136, 0)));
        assert_eq!(parse_hex_color("#ff80"), None);
        assert_eq!(parse_hex_color("zzzzzz"), None);
        assert_eq!(parse_hex_color("é12"), None);
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let config = ThemeConfig {
            name: "no-such-theme".to_string(),
            colors: ThemeColorOverrides::default(),
        };
        let theme = load_theme(&config);
        assert_eq!(theme.bg0, gruvbox_dark().bg0);
    }

    #[test]
    fn test_overrides_applied() {
        let config = ThemeConfig {
            name: "Nord".to_string(),
            colors: ThemeColorOverrides {
                accent: Some("#010203".to_string()),
                bg0: Some("not-a-color".to_string()),
                ..Default::default()
            },
        };
        let theme = load_theme(&config);
        assert_eq!(theme.accent, Color::Rgb(1, 2, 3));
        assert_eq!(theme.bg0, nord().bg0);
    }
}
