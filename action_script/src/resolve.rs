//! Pure resolvers for colors, coordinate lists and scale factors.

use aw_action_data::{Color, Vec3};

const SCALE_MIN: f64 = 0.2;
const SCALE_MAX: f64 = 5.0;

/// Named color presets, matched case-sensitively.
const PRESET_COLORS: [(&str, Color); 32] = [
    ("aquamarine", Color::new(112, 219, 147)),
    ("black", Color::new(0, 0, 0)),
    ("blue", Color::new(0, 0, 255)),
    ("brass", Color::new(181, 166, 66)),
    ("bronze", Color::new(140, 120, 83)),
    ("brown", Color::new(166, 42, 42)),
    ("copper", Color::new(184, 115, 51)),
    ("cyan", Color::new(0, 255, 255)),
    ("darkgrey", Color::new(48, 48, 48)),
    ("forestgreen", Color::new(35, 142, 35)),
    ("gold", Color::new(205, 127, 50)),
    ("green", Color::new(0, 255, 0)),
    ("grey", Color::new(112, 112, 112)),
    ("lightblue", Color::new(192, 217, 217)),
    ("lightgrey", Color::new(192, 192, 192)),
    ("magenta", Color::new(255, 0, 255)),
    ("maroon", Color::new(142, 35, 107)),
    ("navyblue", Color::new(35, 35, 142)),
    ("orange", Color::new(255, 127, 0)),
    ("orangered", Color::new(255, 36, 0)),
    ("orchid", Color::new(219, 112, 219)),
    ("pink", Color::new(188, 143, 143)),
    ("red", Color::new(255, 0, 0)),
    ("salmon", Color::new(111, 66, 66)),
    ("silver", Color::new(230, 232, 250)),
    ("skyblue", Color::new(50, 153, 204)),
    ("slateblue", Color::new(0, 127, 255)),
    ("steelblue", Color::new(35, 107, 142)),
    ("tan", Color::new(219, 147, 112)),
    ("violet", Color::new(79, 47, 79)),
    ("white", Color::new(255, 255, 255)),
    ("yellow", Color::new(255, 255, 0)),
];

/// Resolve a color token: a preset name, else its leading run of hex digits.
///
/// Returns `None` when the token neither names a preset nor starts with a hex
/// digit. A hex run too large for a `u64` resolves to white.
pub fn resolve_color(token: &str) -> Option<Color> {
    if let Some((_, color)) = PRESET_COLORS.iter().find(|(name, _)| *name == token) {
        return Some(*color);
    }
    let end = token
        .char_indices()
        .find(|(_, c)| !c.is_ascii_hexdigit())
        .map_or(token.len(), |(i, _)| i);
    let hex = &token[..end];
    if hex.is_empty() {
        return None;
    }
    let Ok(value) = u64::from_str_radix(hex, 16) else {
        return Some(Color::WHITE);
    };
    let channel = |shift: u32| ((value >> shift) & 0xff) as u8;
    Some(Color::new(channel(16), channel(8), channel(0)))
}

/// Spread one to three values over `{x, y, z}`: a lone value is the y axis.
pub fn resolve_coordinates(values: &[f64]) -> Vec3 {
    match *values {
        [y] => Vec3::new(0.0, y, 0.0),
        [x, y] => Vec3::new(x, y, 0.0),
        [x, y, z] => Vec3::new(x, y, z),
        _ => Vec3::new(0.0, 0.0, 0.0),
    }
}

/// Clamp a single scale factor; non-positive factors fall back to 1.
pub fn clamp_scale(value: f64) -> f64 {
    if value > 0.0 { value.clamp(SCALE_MIN, SCALE_MAX) } else { 1.0 }
}

/// Clamp every factor, then spread: one value scales uniformly, a missing z is 1.
pub fn resolve_scale(values: &[f64]) -> Vec3 {
    let clamped: Vec<f64> = values.iter().copied().map(clamp_scale).collect();
    match clamped[..] {
        [v] => Vec3::new(v, v, v),
        [x, y] => Vec3::new(x, y, 1.0),
        [x, y, z, ..] => Vec3::new(x, y, z),
        [] => Vec3::new(1.0, 1.0, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_win_over_hex_reading() {
        // "beef" would read as hex; "blue" must not.
        assert_eq!(resolve_color("blue"), Some(Color::new(0, 0, 255)));
        assert_eq!(resolve_color("beef"), Some(Color::new(0, 0xbe, 0xef)));
        assert_eq!(resolve_color("orangered"), Some(Color::new(255, 36, 0)));
    }

    #[test]
    fn presets_are_case_sensitive() {
        // "Red" is no preset and has no leading hex digit.
        assert_eq!(resolve_color("Red"), None);
        // "Blue" falls back to its hex prefix "B".
        assert_eq!(resolve_color("Blue"), Some(Color::new(0, 0, 11)));
    }

    #[test]
    fn hex_prefix_is_used_up_to_first_non_hex_char() {
        assert_eq!(resolve_color("abcdef"), Some(Color::new(171, 205, 239)));
        assert_eq!(resolve_color("ABCDEFzz"), Some(Color::new(171, 205, 239)));
        assert_eq!(resolve_color("ff"), Some(Color::new(0, 0, 255)));
        assert_eq!(resolve_color("zzz"), None);
    }

    #[test]
    fn wide_hex_keeps_low_24_bits() {
        assert_eq!(resolve_color("12345678"), Some(Color::new(0x34, 0x56, 0x78)));
        assert_eq!(resolve_color("ffffffffffffffff"), Some(Color::new(255, 255, 255)));
        assert_eq!(resolve_color("00000000000000000000ff0000"), Some(Color::new(255, 0, 0)));
    }

    #[test]
    fn hex_overflow_resolves_to_white() {
        assert_eq!(resolve_color("10000000000000000"), Some(Color::WHITE));
        assert_eq!(resolve_color("123456789abcdef0123"), Some(Color::WHITE));
    }

    #[test]
    fn coordinate_arity() {
        assert_eq!(resolve_coordinates(&[1.0]), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(resolve_coordinates(&[1.0, 2.0]), Vec3::new(1.0, 2.0, 0.0));
        assert_eq!(resolve_coordinates(&[1.0, 2.0, 3.0]), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(resolve_coordinates(&[]), Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(resolve_coordinates(&[1.0, 2.0, 3.0, 4.0]), Vec3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn scale_clamp() {
        assert_eq!(clamp_scale(0.0), 1.0);
        assert_eq!(clamp_scale(-3.0), 1.0);
        assert_eq!(clamp_scale(9.0), 5.0);
        assert_eq!(clamp_scale(0.1), 0.2);
        assert_eq!(clamp_scale(2.5), 2.5);
    }

    #[test]
    fn scale_arity() {
        assert_eq!(resolve_scale(&[2.0]), Vec3::new(2.0, 2.0, 2.0));
        assert_eq!(resolve_scale(&[2.0, 0.0]), Vec3::new(2.0, 1.0, 1.0));
        assert_eq!(resolve_scale(&[2.0, 3.0, 10.0]), Vec3::new(2.0, 3.0, 5.0));
        assert_eq!(resolve_scale(&[1.0, 2.0, 3.0, 4.0]), Vec3::new(1.0, 2.0, 3.0));
    }
}
