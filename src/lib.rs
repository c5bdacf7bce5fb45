//! A library to extract a dominant color palette from an image.
//!
//! The palette is produced by a fixed pipeline: exact pixel colors are counted
//! into a histogram, colors within a configurable RGB distance threshold are
//! optionally merged by a single greedy pass, and the surviving groups are
//! projected into ranked, percentage-annotated entries.
//!
//! The pipeline is pure and holds no state across calls; independent buffers
//! may be analyzed from any number of threads without coordination.

mod entry;
mod error;
mod group;
mod histogram;

/// The builder's default merge threshold. Zero disables grouping entirely.
pub const DEFAULT_GROUPING_THRESHOLD: f64 = 0.0;

pub use crate::{
    entry::PaletteEntry,
    error::{AnalyzeError, AnalyzeResult},
    group::ColorGroup,
    histogram::ColorCount,
};
pub use image;

use image::ImageBuffer;

/// The ranked result of analyzing one image.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    groups: Vec<ColorGroup>,
    entries: Vec<PaletteEntry>,
    total_pixels: u64,
}

pub struct PaletteBuilder<P>
where
    P: image::Pixel<Subpixel = u8>,
{
    image: ImageBuffer<P, Vec<u8>>,
    threshold: f64,
}

impl Palette {
    pub fn from_image<P>(image: ImageBuffer<P, Vec<u8>>) -> PaletteBuilder<P>
    where
        P: image::Pixel<Subpixel = u8>,
    {
        PaletteBuilder::from_image(image)
    }

    /// Palette entries in descending count order.
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// The underlying color groups, in the same order as the entries.
    pub fn groups(&self) -> &[ColorGroup] {
        &self.groups
    }

    pub fn total_pixels(&self) -> u64 {
        self.total_pixels
    }

    /// Number of distinct colors the palette covers, counting leaders and
    /// merged members alike.
    pub fn distinct_colors(&self) -> usize {
        self.groups
            .iter()
            .map(|group| 1 + group.merged_count() as usize)
            .sum()
    }

    /// The color covering the most pixels, if the image had any.
    pub fn dominant_color(&self) -> Option<(u8, u8, u8)> {
        self.groups.first().map(|group| group.rgb())
    }

    fn generate(counts: Vec<ColorCount>, threshold: f64, total_pixels: u64) -> Palette {
        log::debug!(
            "counted {} distinct colors across {} pixels",
            counts.len(),
            total_pixels
        );

        let groups = group::group_colors(counts, threshold);
        log::debug!(
            "grouped into {} palette entries with threshold {}",
            groups.len(),
            threshold
        );

        let entries = entry::format_entries(&groups, total_pixels);

        Self {
            groups,
            entries,
            total_pixels,
        }
    }
}

impl<P> PaletteBuilder<P>
where
    P: image::Pixel<Subpixel = u8>,
{
    pub fn from_image(image: ImageBuffer<P, Vec<u8>>) -> Self {
        Self {
            image,
            threshold: DEFAULT_GROUPING_THRESHOLD,
        }
    }

    /// Merge colors whose Euclidean RGB distance to a more frequent color is
    /// within `threshold`. Zero, the default, keeps every exact color as its
    /// own entry.
    pub fn threshold(self, threshold: f64) -> Self {
        Self { threshold, ..self }
    }

    pub fn generate(self) -> AnalyzeResult<Palette> {
        validate_threshold(self.threshold)?;

        let (width, height) = self.image.dimensions();
        let total_pixels = width as u64 * height as u64;
        let counts = histogram::count_pixels(self.image.pixels().map(pixel_to_rgb));

        Ok(Palette::generate(counts, self.threshold, total_pixels))
    }
}

/// Analyze a raw RGBA pixel buffer and return the ranked palette it contains.
///
/// `pixels` must hold exactly `width * height` 4-byte RGBA pixels in row-major
/// order; the alpha byte of each pixel is ignored. An image with no pixels
/// yields an empty palette, not an error.
pub fn analyze_colors(
    pixels: &[u8],
    width: u32,
    height: u32,
    threshold: f64,
) -> AnalyzeResult<Vec<PaletteEntry>> {
    validate_threshold(threshold)?;

    if pixels.len() % 4 != 0 {
        return Err(AnalyzeError::RaggedPixelBuffer(pixels.len()));
    }

    let total_pixels = width as u64 * height as u64;
    let expected = total_pixels * 4;

    if pixels.len() as u64 != expected {
        return Err(AnalyzeError::DimensionMismatch {
            actual: pixels.len(),
            expected,
            width,
            height,
        });
    }

    let counts = histogram::count_rgba_bytes(pixels);

    Ok(Palette::generate(counts, threshold, total_pixels).entries)
}

fn validate_threshold(threshold: f64) -> AnalyzeResult<()> {
    if threshold < 0.0 || threshold.is_nan() {
        return Err(AnalyzeError::InvalidThreshold(threshold));
    }

    Ok(())
}

fn pixel_to_rgb<P>(pixel: &P) -> (u8, u8, u8)
where
    P: image::Pixel<Subpixel = u8>,
{
    let rgb = pixel.to_rgb();
    (rgb.0[0], rgb.0[1], rgb.0[2])
}
