use serde::{Deserialize, Serialize};

use crate::error::{PlotError, Result};

/// Fixed-size list of gnuplot colors, picked cyclically by series index.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ColorPalette {
    colors: Vec<String>,
}

impl ColorPalette {
    /// Colors used as-is (`#RRGGBB`).
    pub fn opaque(colors: &[&str]) -> Self {
        Self {
            colors: colors.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// `#AARRGGBB` colors: every base `RRGGBB` gets the same alpha prefix.
    pub fn with_alpha(alpha_pct: u32, base_colors: &[&str]) -> Result<Self> {
        if base_colors.is_empty() {
            return Err(PlotError::invalid("palette needs at least one color"));
        }
        let alpha = alpha_hex(alpha_pct)?;
        let colors = base_colors
            .iter()
            .map(|base| rgb_hex(base).map(|rgb| format!("#{}{}", alpha, rgb)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { colors })
    }

    /// Palette rotation: `i` wraps around the palette size.
    pub fn color(&self, i: usize) -> &str {
        &self.colors[i % self.colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }
}

/// Alpha percentage -> two uppercase hex digits, `round(alpha * 256 / 100)`.
/// 100% would be 0x100, so the channel is clamped to `FF`.
pub fn alpha_hex(alpha_pct: u32) -> Result<String> {
    if alpha_pct > 100 {
        return Err(PlotError::invalid(format!(
            "alpha must be a percentage in [0, 100], got {}",
            alpha_pct
        )));
    }
    let channel = (alpha_pct as f64 * 256.0 / 100.0).round().min(255.0) as u8;
    Ok(format!("{:02X}", channel))
}

/// Normalizes any color colorgrad understands (`CC0000`, `#c00`, `rgb(..)`) to `RRGGBB`.
fn rgb_hex(color: &str) -> Result<String> {
    let html = if color.chars().all(|c| c.is_ascii_hexdigit()) {
        format!("#{}", color)
    } else {
        color.to_string()
    };
    let parsed = colorgrad::Color::from_html(&html)
        .map_err(|e| PlotError::invalid(format!("unrecognised color {:?}: {}", color, e)))?;
    let [r, g, b, _] = parsed.to_rgba8();
    Ok(format!("{:02X}{:02X}{:02X}", r, g, b))
}

/// Background color for the histogram band, as gnuplot expects it.
///
/// Eight hex digits are already gnuplot `AARRGGBB` and pass through; anything
/// else goes through colorgrad and comes back as `#RRGGBB`.
pub fn background_hex(color: &str) -> Result<String> {
    let trimmed = color.trim().trim_start_matches('#');
    if trimmed.len() == 8 && trimmed.chars().all(|c| c.is_ascii_hexdigit()) {
        return Ok(format!("#{}", trimmed.to_uppercase()));
    }
    Ok(format!("#{}", rgb_hex(trimmed)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_is_rounded_and_clamped() {
        assert_eq!(alpha_hex(0).unwrap(), "00");
        assert_eq!(alpha_hex(33).unwrap(), "54"); // 84.48 -> 84
        assert_eq!(alpha_hex(60).unwrap(), "9A"); // 153.6 -> 154
        assert_eq!(alpha_hex(100).unwrap(), "FF");
        assert!(matches!(alpha_hex(101), Err(PlotError::InvalidInput(_))));
    }

    #[test]
    fn palette_prefixes_alpha_and_wraps() {
        let palette = ColorPalette::with_alpha(60, &["CC0000", "00CC00", "0000CC", "AAAA00"]).unwrap();
        assert_eq!(palette.len(), 4);
        assert_eq!(palette.color(0), "#9ACC0000");
        assert_eq!(palette.color(3), "#9AAAAA00");
        assert_eq!(palette.color(4), palette.color(0));
        assert_eq!(palette.color(9), palette.color(1));
    }

    #[test]
    fn background_accepts_argb_and_rgb() {
        assert_eq!(background_hex("#20ffffff").unwrap(), "#20FFFFFF");
        assert_eq!(background_hex("dddddd").unwrap(), "#DDDDDD");
        assert!(background_hex("not-a-color").is_err());
    }
}
