//! Line colors: a small RGBA type and a parser for user-supplied colors.

use crate::config::STREAM_COUNT;
use serde::{Deserialize, Serialize};

/// RGBA color independent of any GUI toolkit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

impl Rgba {
    pub const GREEN: Rgba = Rgba(0x00, 0xFF, 0x00, 0xFF);
    pub const RED: Rgba = Rgba(0xFF, 0x00, 0x00, 0xFF);
    pub const BLUE: Rgba = Rgba(0x00, 0x00, 0xFF, 0xFF);
    pub const YELLOW: Rgba = Rgba(0xFF, 0xFF, 0x00, 0xFF);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Rgba(r, g, b, 0xFF)
    }
}

/// Colors of the four quadrant polylines.
pub const DEFAULT_PALETTE: [Rgba; STREAM_COUNT] = [Rgba::GREEN, Rgba::RED, Rgba::BLUE, Rgba::YELLOW];

/// Parse a color given as a name, `#rrggbb`, or an `[r,g,b]` array of 0..1 floats.
pub fn parse_color(val: &str) -> Option<Rgba> {
    let val = val.trim();
    if val.starts_with('[') && val.ends_with(']') {
        // e.g. [1.0, 0.411765, 0.380392]
        let inner = &val[1..val.len() - 1];
        let parts: Vec<&str> = inner.split(',').map(|s| s.trim()).collect();
        if parts.len() != 3 {
            return None;
        }
        let mut channels = [0u8; 3];
        for (dst, part) in channels.iter_mut().zip(&parts) {
            let f = part.parse::<f32>().ok()?;
            *dst = (f.clamp(0.0, 1.0) * 255.0).round() as u8;
        }
        Some(Rgba::opaque(channels[0], channels[1], channels[2]))
    } else if let Some(hex) = val.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Rgba::opaque(channel(0)?, channel(2)?, channel(4)?))
    } else {
        let named = match val.to_ascii_lowercase().as_str() {
            "white" => Rgba::opaque(0xff, 0xff, 0xff),
            "black" => Rgba::opaque(0x00, 0x00, 0x00),
            "red" => Rgba::RED,
            "green" | "lime" => Rgba::GREEN,
            "blue" => Rgba::BLUE,
            "yellow" => Rgba::YELLOW,
            "orange" => Rgba::opaque(0xff, 0xa5, 0x00),
            "cyan" => Rgba::opaque(0x00, 0xff, 0xff),
            "magenta" => Rgba::opaque(0xff, 0x00, 0xff),
            "gray" | "grey" => Rgba::opaque(0x80, 0x80, 0x80),
            "purple" => Rgba::opaque(0x80, 0x00, 0x80),
            "brown" => Rgba::opaque(0xa5, 0x2a, 0x2a),
            "navy" => Rgba::opaque(0x00, 0x00, 0x80),
            "teal" => Rgba::opaque(0x00, 0x80, 0x80),
            _ => return None,
        };
        Some(named)
    }
}

/// Parse a comma-separated list of exactly four colors, e.g. `red,#00ff00,blue,yellow`.
///
/// Array colors contain commas themselves, so `[...]` groups are kept intact.
pub fn parse_palette(val: &str) -> Result<[Rgba; STREAM_COUNT], String> {
    let mut items = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in val.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                items.push(&val[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    items.push(&val[start..]);

    if items.len() != STREAM_COUNT {
        return Err(format!(
            "expected {} colors, got {}",
            STREAM_COUNT,
            items.len()
        ));
    }
    let mut palette = DEFAULT_PALETTE;
    for (slot, item) in palette.iter_mut().zip(items) {
        *slot = parse_color(item).ok_or_else(|| format!("unknown color {:?}", item.trim()))?;
    }
    Ok(palette)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_hex_and_arrays() {
        assert_eq!(parse_color("Yellow"), Some(Rgba::YELLOW));
        assert_eq!(parse_color("#ff0000"), Some(Rgba::RED));
        assert_eq!(parse_color("[0, 0, 1.0]"), Some(Rgba::BLUE));
        assert_eq!(parse_color("chartreuse-ish"), None);
        assert_eq!(parse_color("#ff00"), None);
    }

    #[test]
    fn palette_keeps_array_groups() {
        let p = parse_palette("[0,1,0], red , #0000ff,yellow").unwrap();
        assert_eq!(p, DEFAULT_PALETTE);
        assert!(parse_palette("red,green").is_err());
    }
}
