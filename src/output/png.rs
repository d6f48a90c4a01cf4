//! Converting the pixel grid to a PNG image.
use color_eyre::{Result, eyre::ContextCompat as _};

/// How many output pixels each logical pixel is scaled up to, per axis.
pub const IMAGE_SCALE: u32 = 40;

/// The side length of the smallest square that fits `count` values.
pub fn side_length(count: usize) -> Result<u32> {
    let count = u32::try_from(count)?;
    let root = count.isqrt();
    Ok(if root * root < count { root + 1 } else { root })
}

/// Assemble the pixel grid into an image buffer, scale it up with nearest-neighbor sampling
/// (each logical pixel has to stay a crisp block, this is a data visualisation not a photo) and
/// save it as a PNG.
pub fn save(
    pixel_rows: &[Vec<image::Rgb<u8>>],
    score_count: usize,
    path: &std::path::Path,
) -> Result<()> {
    let width = u32::try_from(crate::tile::BASE_IMAGE_WIDTH)?;
    let height = u32::try_from(pixel_rows.len())?;

    let bytes: Vec<u8> = pixel_rows
        .iter()
        .flatten()
        .flat_map(|pixel| pixel.0)
        .collect();

    let count = bytes.len();
    let canvas: image::RgbImage = image::RgbImage::from_vec(width, height, bytes).context(
        format!("Pixel grid ({width}x{height}) doesn't match the amount of data ({count})."),
    )?;

    let output_size = side_length(score_count)? * IMAGE_SCALE;
    tracing::debug!("Scaling the {width}x{height} canvas up to {output_size}x{output_size}");
    let resized = image::imageops::resize(
        &canvas,
        output_size,
        output_size,
        image::imageops::FilterType::Nearest,
    );
    resized.save(path)?;

    Ok(())
}
