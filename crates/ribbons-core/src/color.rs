//! Palette cycling and alpha rewriting for plotly color strings.
//!
//! Colors stay plain strings end-to-end. Anything this module does not recognise is passed
//! through untouched and left for plotly.js to accept or reject.

use serde::{Deserialize, Serialize};

/// plotly.js default template colorway.
pub const PLOTLY_COLORWAY: [&str; 10] = [
    "#636efa", "#EF553B", "#00cc96", "#ab63fa", "#FFA15A", "#19d3f3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

/// Used when a caller supplies an explicitly empty palette.
pub const FALLBACK_COLORWAY: [&str; 5] = ["#4c78a8", "#72b7b2", "#f58518", "#e45756", "#54a24b"];

pub const DEFAULT_TARGET_COLOR: &str = "#111827";

/// A non-empty, ordered list of colors assigned to categories by index, wrapping around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Palette(Vec<String>);

impl From<Vec<String>> for Palette {
    fn from(colors: Vec<String>) -> Self {
        Self::from_colors(colors)
    }
}

impl From<Palette> for Vec<String> {
    fn from(palette: Palette) -> Self {
        palette.0
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::plotly()
    }
}

impl Palette {
    pub fn plotly() -> Self {
        Self(PLOTLY_COLORWAY.iter().map(|c| c.to_string()).collect())
    }

    pub fn fallback() -> Self {
        Self(FALLBACK_COLORWAY.iter().map(|c| c.to_string()).collect())
    }

    /// An empty input yields [`Palette::fallback`].
    pub fn from_colors<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        if colors.is_empty() {
            return Self::fallback();
        }
        Self(colors)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn colors(&self) -> &[String] {
        &self.0
    }

    pub fn color_for(&self, index: usize) -> &str {
        &self.0[index % self.0.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

fn parse_hex_rgb(s: &str) -> Option<Rgb> {
    let hex = s.strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let (r, g, b) = match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            (r, g, b)
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            (r, g, b)
        }
        _ => return None,
    };
    Some(Rgb { r, g, b })
}

fn named_rgb(name: &str) -> Option<Rgb> {
    let (r, g, b) = match name {
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "red" => (255, 0, 0),
        "green" => (0, 128, 0),
        "blue" => (0, 0, 255),
        "yellow" => (255, 255, 0),
        "cyan" | "aqua" => (0, 255, 255),
        "magenta" | "fuchsia" => (255, 0, 255),
        "gray" | "grey" => (128, 128, 128),
        "orange" => (255, 165, 0),
        "purple" => (128, 0, 128),
        "gold" => (255, 215, 0),
        "midnightblue" => (25, 25, 112),
        "lightskyblue" => (135, 206, 250),
        "mediumturquoise" => (72, 209, 204),
        "lightgreen" => (144, 238, 144),
        _ => return None,
    };
    Some(Rgb { r, g, b })
}

/// Splits `prefix(a, b, c)` into trimmed components.
fn functional_args<'a>(s: &'a str, prefix: &str) -> Option<Vec<&'a str>> {
    let inner = s.strip_prefix(prefix)?.strip_suffix(')')?;
    Some(inner.split(',').map(str::trim).collect())
}

fn rgba(r: &str, g: &str, b: &str, alpha: f64) -> String {
    format!("rgba({r}, {g}, {b}, {alpha})")
}

/// Returns `color` with its alpha channel set to `alpha` (clamped to `[0, 1]`).
///
/// Handles `rgba(...)`, `rgb(...)`, `#rgb`, `#rrggbb` and a small set of CSS color names.
/// Unrecognised input is returned unchanged.
pub fn with_alpha(color: &str, alpha: f64) -> String {
    let alpha = if alpha.is_nan() {
        1.0
    } else {
        alpha.clamp(0.0, 1.0)
    };
    let trimmed = color.trim();
    let lower = trimmed.to_ascii_lowercase();

    if let Some(args) = functional_args(&lower, "rgba(") {
        if args.len() == 4 {
            return rgba(args[0], args[1], args[2], alpha);
        }
        return color.to_string();
    }
    if let Some(args) = functional_args(&lower, "rgb(") {
        if args.len() == 3 {
            return rgba(args[0], args[1], args[2], alpha);
        }
        return color.to_string();
    }

    let rgb = parse_hex_rgb(&lower).or_else(|| named_rgb(&lower));
    match rgb {
        Some(Rgb { r, g, b }) => rgba(&r.to_string(), &g.to_string(), &b.to_string(), alpha),
        None => color.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles_by_index() {
        let p = Palette::from_colors(["red", "blue"]);
        let assigned: Vec<&str> = (0..5).map(|i| p.color_for(i)).collect();
        assert_eq!(assigned, ["red", "blue", "red", "blue", "red"]);
    }

    #[test]
    fn empty_palette_falls_back() {
        let p = Palette::from_colors(Vec::<String>::new());
        assert_eq!(p, Palette::fallback());
        assert_eq!(p.len(), 5);
    }

    #[test]
    fn deserialized_empty_palette_falls_back() {
        let p: Palette = serde_json::from_str("[]").unwrap();
        assert_eq!(p, Palette::fallback());
    }

    #[test]
    fn default_palette_is_plotly_colorway() {
        assert_eq!(Palette::default().color_for(0), "#636efa");
        assert_eq!(Palette::default().color_for(10), "#636efa");
    }

    #[test]
    fn with_alpha_rewrites_rgba() {
        assert_eq!(
            with_alpha("rgba(31, 119, 180, 0.8)", 0.4),
            "rgba(31, 119, 180, 0.4)"
        );
        assert_eq!(with_alpha("rgba(255,0,255, 0.8)", 0.4), "rgba(255, 0, 255, 0.4)");
    }

    #[test]
    fn with_alpha_expands_hex_rgb_and_names() {
        assert_eq!(with_alpha("#4c78a8", 0.5), "rgba(76, 120, 168, 0.5)");
        assert_eq!(with_alpha("#fff", 1.0), "rgba(255, 255, 255, 1)");
        assert_eq!(with_alpha("rgb(1,2,3)", 0.25), "rgba(1, 2, 3, 0.25)");
        assert_eq!(with_alpha("Magenta", 0.4), "rgba(255, 0, 255, 0.4)");
    }

    #[test]
    fn with_alpha_clamps_and_passes_unknown_through() {
        assert_eq!(with_alpha("#000000", 3.0), "rgba(0, 0, 0, 1)");
        assert_eq!(with_alpha("hsl(10, 20%, 30%)", 0.3), "hsl(10, 20%, 30%)");
        assert_eq!(with_alpha("#12", 0.3), "#12");
    }
}
