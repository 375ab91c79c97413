//! Comma-separated integer grid files
//!
//! One row per line, cells separated by commas, `-1` for an empty cell. No
//! header. Rows keep the length they were written with.

use std::fs;
use std::path::Path;

use log::{debug, error, info};

use crate::io::error::{Result, SceneError, WithPath};

/// Rows of cell values, top to bottom; rows may differ in length
pub type Grid = Vec<Vec<i32>>;

/// Parse grid text read from `path`
///
/// Tokens are trimmed, so CRLF files parse. One empty token after a trailing
/// comma is ignored; blank lines become empty rows.
///
/// # Errors
///
/// Returns [`SceneError::MalformedCell`] for the first token that is not an
/// `i32`. The whole file is rejected.
pub fn parse_grid(text: &str, path: &Path) -> Result<Grid> {
    text.lines()
        .enumerate()
        .map(|(line_index, line)| parse_row(line, line_index + 1, path))
        .collect()
}

fn parse_row(line: &str, line_number: usize, path: &Path) -> Result<Vec<i32>> {
    if line.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut tokens: Vec<&str> = line.split(',').collect();
    if tokens.len() > 1 && tokens.last().is_some_and(|last| last.trim().is_empty()) {
        tokens.pop();
    }

    tokens
        .into_iter()
        .enumerate()
        .map(|(column_index, token)| {
            token
                .trim()
                .parse::<i32>()
                .map_err(|source| SceneError::MalformedCell {
                    path: path.to_path_buf(),
                    line: line_number,
                    column: column_index + 1,
                    token: token.to_string(),
                    source,
                })
        })
        .collect()
}

/// Render a grid in file form, each row terminated by a newline
pub fn format_grid(grid: &[Vec<i32>]) -> String {
    let mut text = String::new();
    for row in grid {
        let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
        text.push_str(&cells.join(","));
        text.push('\n');
    }
    text
}

/// Read a grid file
///
/// A missing or unreadable file is logged and yields an empty grid; a new
/// scene has no files yet.
///
/// # Errors
///
/// Returns [`SceneError::MalformedCell`] when the file exists but contains a
/// non-integer cell.
pub fn load_grid(path: &Path) -> Result<Grid> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            error!("Could not open layout file '{}': {err}", path.display());
            return Ok(Grid::new());
        }
    };

    let grid = parse_grid(&text, path)?;
    debug!("Loaded {} row(s) from '{}'", grid.len(), path.display());
    Ok(grid)
}

/// Write a grid file, creating parent directories and replacing any old file
///
/// # Errors
///
/// Returns [`SceneError::FileSystem`] if a directory cannot be created or
/// the file cannot be written.
pub fn save_grid(path: &Path, grid: &[Vec<i32>]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }
    fs::write(path, format_grid(grid)).with_path(path, "write")?;
    info!("Saved '{}'", path.display());
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/io/codec.rs"]
mod tests;
