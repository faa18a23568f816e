//! HSV color handling for shape tinting

use serde::{Deserialize, Serialize};

/// An 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// CSS `rgb(...)` string for canvas fill styles
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Convert HSV (all components in [0, 1]) to 8-bit RGB
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Rgb {
    let i = (h * 6.0).floor();
    let f = h * 6.0 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match (i as i32).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb {
        r: (r * 255.0).round() as u8,
        g: (g * 255.0).round() as u8,
        b: (b * 255.0).round() as u8,
    }
}

/// HSV straight to a CSS color string
pub fn hsv_to_css(h: f32, s: f32, v: f32) -> String {
    hsv_to_rgb(h, s, v).to_css()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_hues() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(
            hsv_to_rgb(1.0 / 3.0, 1.0, 1.0),
            Rgb { r: 0, g: 255, b: 0 }
        );
        assert_eq!(
            hsv_to_rgb(2.0 / 3.0, 1.0, 1.0),
            Rgb { r: 0, g: 0, b: 255 }
        );
    }

    #[test]
    fn test_zero_saturation_is_gray() {
        let c = hsv_to_rgb(0.37, 0.0, 0.5);
        assert_eq!(c.r, c.g);
        assert_eq!(c.g, c.b);
    }

    #[test]
    fn test_zero_value_is_black() {
        assert_eq!(hsv_to_rgb(0.8, 0.9, 0.0), Rgb { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn test_css_format() {
        assert_eq!(
            Rgb { r: 1, g: 20, b: 255 }.to_css(),
            "rgb(1, 20, 255)"
        );
    }
}
