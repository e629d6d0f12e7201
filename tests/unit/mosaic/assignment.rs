//! Tests for the row-major color-ID assignment grid

#[cfg(test)]
mod tests {
    use tessera::MosaicError;
    use tessera::mosaic::assignment::Assignment;

    // Tests construction from a row-major sequence and per-cell lookup
    // Verified by transposing the grid shape during construction
    #[test]
    fn test_from_row_major_lookup() {
        let assignment = Assignment::from_row_major(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();

        assert_eq!(assignment.width(), 3);
        assert_eq!(assignment.height(), 2);
        assert_eq!(assignment.cell_count(), 6);

        assert_eq!(assignment.get(0, 0), Some(1));
        assert_eq!(assignment.get(0, 2), Some(3));
        assert_eq!(assignment.get(1, 0), Some(4));
        assert_eq!(assignment.get(1, 2), Some(6));
    }

    // Tests out-of-bounds lookups return nothing
    // Verified by wrapping indices into range
    #[test]
    fn test_get_out_of_bounds() {
        let assignment = Assignment::from_row_major(2, 2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(assignment.get(2, 0), None);
        assert_eq!(assignment.get(0, 2), None);
    }

    // Tests cell iteration preserves row-major order
    // Verified by iterating in column-major order
    #[test]
    fn test_cells_row_major() {
        let assignment = Assignment::from_row_major(2, 2, vec![1, 2, 3, 4]).unwrap();

        let cells: Vec<_> = assignment.cells().collect();
        assert_eq!(
            cells,
            vec![(0, 0, 1), (0, 1, 2), (1, 0, 3), (1, 1, 4)]
        );
    }

    // Tests a mismatched sequence length is rejected
    // Verified by truncating the sequence to fit
    #[test]
    fn test_length_mismatch_rejected() {
        let result = Assignment::from_row_major(3, 2, vec![1, 2, 3]);
        assert!(matches!(result, Err(MosaicError::InvalidParameter { .. })));
    }
}
