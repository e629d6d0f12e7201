//! Tests for canvas composition from assignments and tile sets

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use std::fs;
    use std::path::Path;
    use tempfile::{TempDir, tempdir};
    use tessera::MosaicError;
    use tessera::color::mode::ColorMode;
    use tessera::io::progress::SilentProgress;
    use tessera::mosaic::assembler::MosaicAssembler;
    use tessera::mosaic::assignment::Assignment;
    use tessera::palette::entry::Palette;
    use tessera::palette::extractor::TileSet;

    fn write_tile(dir: &Path, name: &str, size: u32, color: [u8; 4]) {
        RgbaImage::from_pixel(size, size, Rgba(color))
            .save(dir.join(name))
            .unwrap();
    }

    fn red_blue_tiles(tile_size: u32) -> (TempDir, TileSet) {
        let dir = tempdir().unwrap();
        write_tile(dir.path(), "red.png", tile_size, [255, 0, 0, 255]);
        write_tile(dir.path(), "blue.png", tile_size, [0, 0, 255, 255]);

        let mut palette = Palette::new(ColorMode::Rgba, [7, 8, 9, 0]);
        palette.insert([255, 0, 0, 255], "red.png".to_string());
        palette.insert([0, 0, 255, 255], "blue.png".to_string());

        let tiles = TileSet {
            directory: dir.path().to_path_buf(),
            tile_size,
            palette,
        };
        (dir, tiles)
    }

    // Tests canvas dimensions are the assignment grid times the tile size
    // Verified by sizing the canvas from the assignment alone
    #[test]
    fn test_canvas_dimensions() {
        let (_dir, tiles) = red_blue_tiles(4);
        let assignment = Assignment::from_row_major(2, 1, vec![1, 2]).unwrap();

        let mut progress = SilentProgress;
        let canvas = MosaicAssembler::new(&tiles)
            .assemble(&assignment, &mut progress)
            .unwrap();

        assert_eq!(canvas.width(), 8);
        assert_eq!(canvas.height(), 4);
    }

    // Tests each cell receives its assigned tile at the right offset
    // Verified by swapping column and row in the paste offset
    #[test]
    fn test_tiles_land_on_their_cells() {
        let (_dir, tiles) = red_blue_tiles(4);
        let assignment = Assignment::from_row_major(2, 2, vec![1, 2, 2, 1]).unwrap();

        let mut progress = SilentProgress;
        let canvas = MosaicAssembler::new(&tiles)
            .assemble(&assignment, &mut progress)
            .unwrap();

        assert_eq!(canvas.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(canvas.get_pixel(7, 0).0, [0, 0, 255, 255]);
        assert_eq!(canvas.get_pixel(0, 7).0, [0, 0, 255, 255]);
        assert_eq!(canvas.get_pixel(7, 7).0, [255, 0, 0, 255]);
        // Cell interiors too, not just corners.
        assert_eq!(canvas.get_pixel(2, 1).0, [255, 0, 0, 255]);
        assert_eq!(canvas.get_pixel(5, 2).0, [0, 0, 255, 255]);
    }

    // Tests background cells keep the initial canvas fill
    // Verified by pasting a tile for the background ID as well
    #[test]
    fn test_background_cells_keep_fill() {
        let (_dir, tiles) = red_blue_tiles(4);
        let assignment = Assignment::from_row_major(2, 1, vec![0, 1]).unwrap();

        let mut progress = SilentProgress;
        let canvas = MosaicAssembler::new(&tiles)
            .assemble(&assignment, &mut progress)
            .unwrap();

        assert_eq!(canvas.get_pixel(0, 0).0, [7, 8, 9, 0]);
        assert_eq!(canvas.get_pixel(3, 3).0, [7, 8, 9, 0]);
        assert_eq!(canvas.get_pixel(4, 0).0, [255, 0, 0, 255]);
    }

    // Tests an all-background assignment produces a plain filled canvas
    // Verified by requiring at least one tile placement
    #[test]
    fn test_all_background_assignment() {
        let (_dir, tiles) = red_blue_tiles(4);
        let assignment = Assignment::from_row_major(2, 1, vec![0, 0]).unwrap();

        let mut progress = SilentProgress;
        let canvas = MosaicAssembler::new(&tiles)
            .assemble(&assignment, &mut progress)
            .unwrap();

        for pixel in canvas.pixels() {
            assert_eq!(pixel.0, [7, 8, 9, 0]);
        }
    }

    // Tests IDs without a palette entry abort assembly
    // Verified by painting unknown IDs with the background fill
    #[test]
    fn test_unknown_id_fails() {
        let (_dir, tiles) = red_blue_tiles(4);
        let assignment = Assignment::from_row_major(2, 1, vec![1, 9]).unwrap();

        let mut progress = SilentProgress;
        let result = MosaicAssembler::new(&tiles).assemble(&assignment, &mut progress);

        assert!(matches!(result, Err(MosaicError::PaletteLookup { id: 9 })));
    }

    // Tests a tile that shrank on disk is rejected at paste time
    // Verified by pasting whatever dimensions the file has
    #[test]
    fn test_resized_tile_on_disk_fails() {
        let (dir, tiles) = red_blue_tiles(4);
        write_tile(dir.path(), "red.png", 3, [255, 0, 0, 255]);

        let assignment = Assignment::from_row_major(1, 1, vec![1]).unwrap();
        let mut progress = SilentProgress;
        let result = MosaicAssembler::new(&tiles).assemble(&assignment, &mut progress);

        assert!(matches!(result, Err(MosaicError::TileGeometry { .. })));
    }

    // Tests a tile that became undecodable is reported with its path
    // Verified by skipping tiles that fail to load
    #[test]
    fn test_corrupt_tile_on_disk_fails() {
        let (dir, tiles) = red_blue_tiles(4);
        fs::write(dir.path().join("blue.png"), b"garbage").unwrap();

        let assignment = Assignment::from_row_major(1, 1, vec![2]).unwrap();
        let mut progress = SilentProgress;
        let result = MosaicAssembler::new(&tiles).assemble(&assignment, &mut progress);

        match result {
            Err(MosaicError::CorruptTile { path, .. }) => {
                assert!(path.ends_with("blue.png"));
            }
            other => panic!("expected CorruptTile, got {other:?}"),
        }
    }
}
