//! Colors and compositing

use serde::{Deserialize, Serialize};

use crate::error::{BorderError, Result};

/// An RGBA color with components in `0.0..=1.0`
///
/// Serialized as a `"#rrggbb"` or `"#rrggbbaa"` hex string.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
    pub const MAGENTA: Color = Color::rgb(1.0, 0.0, 1.0);
    pub const GRAY: Color = Color::rgb(128.0 / 255.0, 128.0 / 255.0, 128.0 / 255.0);
    pub const LIGHT_GRAY: Color = Color::rgb(192.0 / 255.0, 192.0 / 255.0, 192.0 / 255.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Parse `#rrggbb` or `#rrggbbaa`
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || BorderError::InvalidColor(s.to_string());
        let digits = s.strip_prefix('#').ok_or_else(invalid)?;
        if !matches!(digits.len(), 6 | 8) || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
        Ok(if digits.len() == 6 {
            Self::from_hex(value)
        } else {
            Self::from_hex(value >> 8).with_alpha((value & 0xFF) as f32 / 255.0)
        })
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque
    pub fn to_hex_string(&self) -> String {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        let rgb = format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        );
        if channel(self.a) == 0xFF {
            rgb
        } else {
            format!("{rgb}{:02x}", channel(self.a))
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl TryFrom<String> for Color {
    type Error = BorderError;

    fn try_from(value: String) -> Result<Self> {
        Color::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex_string()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Compositing
// ─────────────────────────────────────────────────────────────────────────────

/// Porter-Duff compositing rule
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompositeRule {
    Clear,
    Src,
    #[default]
    SrcOver,
    DstOver,
    SrcIn,
    DstIn,
    SrcOut,
    DstOut,
    Dst,
    SrcAtop,
    DstAtop,
    Xor,
}

/// A compositing rule paired with a constant source alpha
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Composite {
    rule: CompositeRule,
    alpha: f32,
}

impl Composite {
    /// Fully opaque source-over
    pub const SRC_OVER: Composite = Composite {
        rule: CompositeRule::SrcOver,
        alpha: 1.0,
    };

    /// Create a composite; `alpha` must lie in `0.0..=1.0`
    pub fn new(rule: CompositeRule, alpha: f32) -> Result<Self> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(BorderError::InvalidConfiguration {
                border: "composite",
                reason: format!("alpha {alpha} is outside 0.0..=1.0"),
            });
        }
        Ok(Self { rule, alpha })
    }

    /// Same rule, different alpha. `alpha` is clamped into range.
    pub fn derive(&self, alpha: f32) -> Self {
        Self {
            rule: self.rule,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    pub fn rule(&self) -> CompositeRule {
        self.rule
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }
}

impl Default for Composite {
    fn default() -> Self {
        Self::SRC_OVER
    }
}
