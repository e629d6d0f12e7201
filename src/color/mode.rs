//! Channel-layout decision and fill-color handling
//!
//! One mode is decided per run, up front, from the fill value and the
//! source image's format; every later stage receives it unchanged so
//! extraction, matching, and assembly always agree on channel count.

use std::path::Path;
use std::str::FromStr;

// Formats whose encoders keep an alpha channel
const ALPHA_EXTENSIONS: [&str; 2] = ["png", "gif"];

/// Channel layout for palette colors and the output canvas
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMode {
    /// Opaque three-channel output
    Rgb,
    /// Alpha-aware four-channel output
    Rgba,
}

impl ColorMode {
    /// Number of meaningful channels per color
    #[must_use]
    pub const fn channels(self) -> usize {
        match self {
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }

    /// Whether colors carry a meaningful alpha channel
    #[must_use]
    pub const fn has_alpha(self) -> bool {
        matches!(self, Self::Rgba)
    }

    /// Decide the channel layout for a run
    ///
    /// Alpha-aware output requires both a four-component fill value and a
    /// source format whose encoder keeps alpha (`png` or `gif`); every
    /// other combination composites opaque.
    #[must_use]
    pub fn decide(source: &Path, fill: FillColor) -> Self {
        let alpha_capable = source
            .extension()
            .and_then(|extension| extension.to_str())
            .is_some_and(|extension| {
                ALPHA_EXTENSIONS
                    .iter()
                    .any(|known| extension.eq_ignore_ascii_case(known))
            });

        if alpha_capable && fill.component_count() == 4 {
            Self::Rgba
        } else {
            Self::Rgb
        }
    }
}

/// User-facing transparent/background fill value
///
/// Three components request opaque composition; four request alpha-aware
/// composition when the source format supports it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillColor {
    /// Opaque fill
    Rgb([u8; 3]),
    /// Fill with explicit alpha
    Rgba([u8; 4]),
}

impl FillColor {
    /// Number of components the user supplied
    #[must_use]
    pub const fn component_count(self) -> usize {
        match self {
            Self::Rgb(_) => 3,
            Self::Rgba(_) => 4,
        }
    }

    /// Canonical RGBA form under the decided mode
    ///
    /// Opaque mode keeps the RGB components and pins alpha to full
    /// opacity, mirroring how a four-component fill is truncated when the
    /// output cannot carry alpha.
    #[must_use]
    pub const fn canonical(self, mode: ColorMode) -> [u8; 4] {
        let [r, g, b, a] = match self {
            Self::Rgb([r, g, b]) => [r, g, b, 255],
            Self::Rgba(rgba) => rgba,
        };
        match mode {
            ColorMode::Rgb => [r, g, b, 255],
            ColorMode::Rgba => [r, g, b, a],
        }
    }
}

impl FromStr for FillColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let components = s
            .split(',')
            .map(|part| part.trim().parse::<u8>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|error| format!("fill components must be integers in 0-255: {error}"))?;

        match components.as_slice() {
            &[r, g, b] => Ok(Self::Rgb([r, g, b])),
            &[r, g, b, a] => Ok(Self::Rgba([r, g, b, a])),
            other => Err(format!(
                "fill needs 3 or 4 comma-separated components, got {}",
                other.len()
            )),
        }
    }
}
