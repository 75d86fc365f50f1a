use ratatui::style::Color;

/// Colors used by the showcase widgets
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub grey: Color,

    // Semantic colors
    pub accent: Color,
    pub card_border: Color,
    pub card_title: Color,
    pub paused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Pond blues with a duck-yellow accent
        Self {
            bg0: Color::Rgb(0x1d, 0x2a, 0x30),
            bg1: Color::Rgb(0x24, 0x36, 0x3d),
            bg2: Color::Rgb(0x2b, 0x5f, 0x6f),
            fg0: Color::Rgb(0xf4, 0xee, 0xe0),
            fg1: Color::Rgb(0xd9, 0xd2, 0xc0),
            grey: Color::Rgb(0x6b, 0x7b, 0x80),
            accent: Color::Rgb(0xf6, 0xc3, 0x44),
            card_border: Color::Rgb(0x7d, 0xae, 0xa3),
            card_title: Color::Rgb(0xf6, 0xc3, 0x44),
            paused: Color::Rgb(0xe7, 0x8a, 0x4e),
        }
    }
}

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        // Short form: RGB -> RRGGBB
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        // Full form: RRGGBB
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#2B5F6F"), Some(Color::Rgb(0x2b, 0x5f, 0x6f)));
        assert_eq!(parse_hex_color("d32f2f"), Some(Color::Rgb(0xd3, 0x2f, 0x2f)));
        assert_eq!(parse_hex_color("#fff"), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("zzzzzz"), None);
        assert_eq!(parse_hex_color("ééé"), None);
    }
}
