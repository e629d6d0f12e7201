//! Canvas export with format-aware encoding
//!
//! PNG output honors the configured compression effort through the
//! encoder directly; every other format goes through its own encoder
//! via the path extension. Opaque runs drop the alpha channel right
//! before encoding, so alpha-less formats such as JPEG work unchanged.

use std::fmt;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use clap::ValueEnum;
use image::buffer::ConvertBuffer;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{DynamicImage, RgbImage, RgbaImage};

use crate::color::mode::ColorMode;
use crate::io::error::{MosaicError, Result, file_system};

/// PNG compression effort for the saved mosaic
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Compression {
    /// Fastest encode, largest file
    Fast,
    /// Encoder default trade-off
    Default,
    /// Smallest file, slowest encode
    Best,
}

impl Compression {
    const fn png_compression(self) -> CompressionType {
        match self {
            Self::Fast => CompressionType::Fast,
            Self::Default => CompressionType::Default,
            Self::Best => CompressionType::Best,
        }
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_possible_value()
            .map_or(Err(fmt::Error), |value| write!(f, "{}", value.get_name()))
    }
}

/// Write the finished canvas to disk
///
/// # Errors
///
/// Returns [`MosaicError::FileSystem`] when the output's parent
/// directory cannot be created or the file cannot be opened, and
/// [`MosaicError::ImageExport`] when encoding fails, including for
/// extensions no encoder supports.
pub fn save_canvas(
    canvas: &RgbaImage,
    mode: ColorMode,
    path: &Path,
    compression: Compression,
) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|source| file_system(parent, "create directory", source))?;
    }

    let is_png = path
        .extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extension.eq_ignore_ascii_case("png"));

    if is_png {
        let file = File::create(path).map_err(|source| file_system(path, "create file", source))?;
        let encoder = PngEncoder::new_with_quality(
            BufWriter::new(file),
            compression.png_compression(),
            FilterType::Adaptive,
        );
        let written = match mode {
            ColorMode::Rgb => {
                let rgb: RgbImage = canvas.convert();
                rgb.write_with_encoder(encoder)
            }
            ColorMode::Rgba => canvas.write_with_encoder(encoder),
        };
        return written.map_err(|source| MosaicError::ImageExport {
            path: path.to_path_buf(),
            source,
        });
    }

    let image = match mode {
        ColorMode::Rgb => DynamicImage::ImageRgb8(canvas.convert()),
        ColorMode::Rgba => DynamicImage::ImageRgba8(canvas.clone()),
    };
    image.save(path).map_err(|source| MosaicError::ImageExport {
        path: path.to_path_buf(),
        source,
    })
}
