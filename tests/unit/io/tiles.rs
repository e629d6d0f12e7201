//! Tests for tile directory listing and collision-free path allocation

#[cfg(test)]
mod tests {
    use crate::io::error::MosaicError;
    use crate::io::tiles::{
        create_directory, file_name_of, first_available_path, list_tile_files, remove_directory,
    };
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    // Tests listing returns files in lexicographic name order
    // Verified by returning the raw directory order
    #[test]
    fn test_list_is_sorted() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("c.png"), b"c").unwrap();
        fs::write(dir.path().join("a.png"), b"a").unwrap();
        fs::write(dir.path().join("b.png"), b"b").unwrap();

        let files = list_tile_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.png", "b.png", "c.png"]);
    }

    // Tests subdirectories are not treated as tiles
    // Verified by pushing every directory entry into the listing
    #[test]
    fn test_list_skips_directories() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.png"), b"a").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        let files = list_tile_files(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
    }

    // Tests an empty directory is rejected
    // Verified by returning an empty listing as success
    #[test]
    fn test_list_rejects_empty_directory() {
        let dir = tempdir().unwrap();
        let result = list_tile_files(dir.path());
        assert!(matches!(result, Err(MosaicError::EmptyTileSet { .. })));
    }

    // Tests an unreadable directory reports a filesystem error
    // Verified by mapping read failures to an empty tile set
    #[test]
    fn test_list_missing_directory() {
        let result = list_tile_files(Path::new("/no/such/dir"));
        assert!(matches!(result, Err(MosaicError::FileSystem { .. })));
    }

    // Tests a non-existing path is returned unchanged
    // Verified by always appending a suffix
    #[test]
    fn test_first_available_keeps_free_path() {
        let dir = tempdir().unwrap();
        let desired = dir.path().join("mosaic.png");
        assert_eq!(first_available_path(&desired), desired);
    }

    // Tests numbered siblings are tried in order, keeping the extension
    // Verified by appending the suffix after the extension
    #[test]
    fn test_first_available_numbers_collisions() {
        let dir = tempdir().unwrap();
        let desired = dir.path().join("mosaic.png");
        fs::write(&desired, b"x").unwrap();

        assert_eq!(
            first_available_path(&desired),
            dir.path().join("mosaic_1.png")
        );

        fs::write(dir.path().join("mosaic_1.png"), b"x").unwrap();
        assert_eq!(
            first_available_path(&desired),
            dir.path().join("mosaic_2.png")
        );
    }

    // Tests extension-less paths such as work directories number cleanly
    // Verified by inserting a bare dot before the suffix
    #[test]
    fn test_first_available_without_extension() {
        let dir = tempdir().unwrap();
        let desired = dir.path().join("frames");
        fs::create_dir(&desired).unwrap();

        assert_eq!(first_available_path(&desired), dir.path().join("frames_1"));
    }

    // Tests directory creation and removal round-trip
    // Verified by leaving the tree in place on removal
    #[test]
    fn test_create_and_remove_directory() {
        let dir = tempdir().unwrap();
        let work = dir.path().join("work").join("tiles");

        create_directory(&work).unwrap();
        assert!(work.is_dir());

        fs::write(work.join("a.png"), b"a").unwrap();
        remove_directory(&work).unwrap();
        assert!(!work.exists());
    }

    // Tests removal of a missing tree reports a filesystem error
    // Verified by swallowing removal failures
    #[test]
    fn test_remove_missing_directory() {
        let result = remove_directory(Path::new("/no/such/work"));
        assert!(matches!(result, Err(MosaicError::FileSystem { .. })));
    }

    // Tests file-name resolution for ordinary paths
    // Verified by resolving the full path instead of the name
    #[test]
    fn test_file_name_of() {
        assert_eq!(
            file_name_of(Path::new("frames/tile_01.png")).unwrap(),
            "tile_01.png"
        );
        assert!(file_name_of(Path::new("/")).is_err());
    }
}
