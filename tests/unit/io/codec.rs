//! Tests for parsing, formatting, loading and saving grid files

#[cfg(test)]
mod tests {
    use crate::SceneError;
    use crate::io::codec::{format_grid, load_grid, parse_grid, save_grid};
    use std::fs;
    use std::path::Path;

    fn parse(text: &str) -> crate::Result<Vec<Vec<i32>>> {
        parse_grid(text, Path::new("test.csv"))
    }

    // Tests rows and cells are read top to bottom, left to right
    // Verified by reversing the row order in parse_grid
    #[test]
    fn test_parse_rectangular() {
        let grid = parse("-1,0,1\n2,-1,3\n");
        assert!(grid.is_ok_and(|grid| grid == vec![vec![-1, 0, 1], vec![2, -1, 3]]));
    }

    // Tests ragged rows keep their authored length
    // Verified by padding short rows with -1
    #[test]
    fn test_parse_ragged() {
        let grid = parse("1,2,3\n4\n\n5,6");
        assert!(grid.is_ok_and(|grid| grid == vec![vec![1, 2, 3], vec![4], vec![], vec![5, 6]]));
    }

    // Tests whitespace, CRLF endings and one trailing comma are tolerated
    // Verified by parsing tokens without trimming
    #[test]
    fn test_parse_tolerant_formatting() {
        let grid = parse(" 1, 2 ,3,\r\n-1,-1\r\n");
        assert!(grid.is_ok_and(|grid| grid == vec![vec![1, 2, 3], vec![-1, -1]]));
    }

    // Tests a non-integer token rejects the whole file with its location
    // Verified by skipping unparsable tokens
    #[test]
    fn test_parse_malformed_cell() {
        let result = parse("1,2\n3,x4,5\n");
        assert!(matches!(
            result,
            Err(SceneError::MalformedCell { line: 2, column: 2, ref token, .. }) if token == "x4"
        ));
        assert!(parse("1,,2").is_err());
        assert!(parse("1,2,,").is_err());
    }

    // Tests formatting writes one comma-separated line per row
    // Verified by separating cells with spaces
    #[test]
    fn test_format_grid() {
        assert_eq!(format_grid(&[vec![-1, 3], vec![7]]), "-1,3\n7\n");
        assert_eq!(format_grid(&[]), "");
    }

    // Tests a saved grid loads back unchanged, creating directories
    // Verified by not creating parent directories in save_grid
    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("scenes").join("demo").join("demo_terrain.csv");
        let grid = vec![vec![0, 1, -1], vec![15], vec![]];

        assert!(save_grid(&path, &grid).is_ok());
        assert!(load_grid(&path).is_ok_and(|loaded| loaded == grid));
    }

    // Tests saving overwrites an existing file
    // Verified by appending in save_grid
    #[test]
    fn test_save_overwrites() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("grid.csv");

        assert!(save_grid(&path, &[vec![1, 1, 1], vec![1, 1, 1]]).is_ok());
        assert!(save_grid(&path, &[vec![2]]).is_ok());
        assert!(fs::read_to_string(&path).is_ok_and(|text| text == "2\n"));
    }

    // Tests a missing file loads as an empty grid
    // Verified by propagating the open error from load_grid
    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let grid = load_grid(&dir.path().join("absent.csv"));
        assert!(grid.is_ok_and(|grid| grid.is_empty()));
    }

    // Tests a malformed existing file is an error on load
    // Verified by treating malformed files as empty
    #[test]
    fn test_load_malformed_file_fails() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("bad.csv");
        assert!(fs::write(&path, "1,2\nthree\n").is_ok());

        assert!(matches!(
            load_grid(&path),
            Err(SceneError::MalformedCell { line: 2, column: 1, .. })
        ));
    }

    // Tests a write into a path under a file reports a file system error
    // Verified by ignoring the create_dir_all result
    #[test]
    fn test_save_into_file_path_fails() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let blocker = dir.path().join("blocker");
        assert!(fs::write(&blocker, "").is_ok());

        let result = save_grid(&blocker.join("grid.csv"), &[vec![1]]);
        assert!(matches!(result, Err(SceneError::FileSystem { .. })));
    }
}
