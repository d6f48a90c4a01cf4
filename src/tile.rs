//! Tile remapped values into fixed-width rows.

/// The width of the logical image, in values. Every row is exactly this long.
pub const BASE_IMAGE_WIDTH: usize = 30;

/// The value used to fill out the final row when the total count isn't a multiple of
/// [`BASE_IMAGE_WIDTH`].
pub const PADDING_SENTINEL: u8 = 0;

/// Lazily split `values` into contiguous rows of exactly [`BASE_IMAGE_WIDTH`] entries, keeping
/// input order. The final row is right-padded with [`PADDING_SENTINEL`]; values are never
/// truncated or reordered.
pub fn rows(values: &[u8]) -> impl Iterator<Item = Vec<u8>> + '_ {
    values.chunks(BASE_IMAGE_WIDTH).map(|chunk| {
        let mut row = chunk.to_vec();
        row.resize(BASE_IMAGE_WIDTH, PADDING_SENTINEL);
        row
    })
}

#[expect(clippy::indexing_slicing, reason = "They're just tests")]
#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn every_row_is_exactly_base_width() {
        for count in 1..=(BASE_IMAGE_WIDTH * 2) {
            let values = vec![7u8; count];
            assert!(rows(&values).all(|row| row.len() == BASE_IMAGE_WIDTH));
        }
    }

    #[test]
    fn padding_appends_without_truncating_or_reordering() {
        let values: Vec<u8> = (1..=31).collect();
        let flat: Vec<u8> = rows(&values).flatten().collect();
        assert_eq!(flat.len(), BASE_IMAGE_WIDTH * 2);
        assert_eq!(&flat[..values.len()], values.as_slice());
        assert!(
            flat[values.len()..]
                .iter()
                .all(|&value| value == PADDING_SENTINEL)
        );
    }

    #[test]
    fn thirty_one_values_make_two_rows() {
        let values = vec![9u8; 31];
        let collected: Vec<Vec<u8>> = rows(&values).collect();
        assert_eq!(collected.len(), 2);
        assert_eq!(collected[1][0], 9);
        assert_eq!(collected[1][1..], [PADDING_SENTINEL; 29]);
    }

    #[test]
    fn exact_multiples_need_no_padding() {
        let values = vec![200u8; BASE_IMAGE_WIDTH * 2];
        let flat: Vec<u8> = rows(&values).flatten().collect();
        assert_eq!(flat, values);
    }

    #[test]
    fn no_values_make_no_rows() {
        assert_eq!(rows(&[]).count(), 0);
    }
}
