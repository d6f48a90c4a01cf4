//! Convert remapped values into RGB pixels.

/// Convert one remapped intensity into a pixel: the full intensity in the red channel, a third
/// of it in the green channel, nothing in the blue channel. The padding sentinel comes out
/// black through the same formula.
pub fn from_intensity(value: u8) -> image::Rgb<u8> {
    image::Rgb([value, value / 3, 0])
}

/// Convert tiled rows of intensities into a 2-D pixel grid of identical shape.
pub fn convert_rows(rows: impl Iterator<Item = Vec<u8>>) -> Vec<Vec<image::Rgb<u8>>> {
    rows.map(|row| row.into_iter().map(from_intensity).collect())
        .collect()
}

#[expect(clippy::indexing_slicing, reason = "They're just tests")]
#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn intensity_fills_red_and_a_third_of_green() {
        assert_eq!(from_intensity(255), image::Rgb([255, 85, 0]));
        assert_eq!(from_intensity(127), image::Rgb([127, 42, 0]));
        assert_eq!(from_intensity(3), image::Rgb([3, 1, 0]));
    }

    #[test]
    fn the_padding_sentinel_is_black() {
        assert_eq!(
            from_intensity(crate::tile::PADDING_SENTINEL),
            image::Rgb([0, 0, 0])
        );
    }

    #[test]
    fn conversion_preserves_the_grid_shape() {
        let grid = convert_rows(crate::tile::rows(&[10, 20, 30]));
        assert_eq!(grid.len(), 1);
        assert_eq!(grid[0].len(), crate::tile::BASE_IMAGE_WIDTH);
        assert_eq!(grid[0][0], image::Rgb([10, 3, 0]));
    }
}
