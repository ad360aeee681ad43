//! File I/O operations for Game of Life boards
//!
//! Boards persist as a bare JSON array of rows, e.g. `[[false,true],[true,false]]`.

use super::board::{Board, FormatError};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info};

/// Load a board from a JSON file
pub fn load_board_from_file<P: AsRef<Path>>(path: P) -> Result<Board> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read board file: {}", path.as_ref().display()))?;

    let board = parse_board(&content)
        .with_context(|| format!("Failed to parse board from file: {}", path.as_ref().display()))?;

    debug!(
        path = %path.as_ref().display(),
        size = board.size(),
        living = board.living_count(),
        "loaded board"
    );
    Ok(board)
}

/// Parse a board from its JSON representation
pub fn parse_board(content: &str) -> Result<Board, FormatError> {
    let cells: Vec<Vec<bool>> = serde_json::from_str(content)?;
    Board::from_cells(cells)
}

/// Convert a board to its JSON representation
pub fn board_to_json(board: &Board) -> String {
    // A Vec<Vec<bool>> cannot fail to serialize
    serde_json::to_string(&board.to_cells()).unwrap_or_default()
}

/// Save a board to a JSON file
pub fn save_board_to_file<P: AsRef<Path>>(board: &Board, path: P) -> Result<()> {
    let content = board_to_json(board);

    // Create parent directories if they don't exist
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write board to file: {}", path.as_ref().display()))?;

    info!(path = %path.as_ref().display(), size = board.size(), "saved board");
    Ok(())
}

/// Create example board files
pub fn create_example_boards<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let patterns: [(&str, usize, &[(usize, usize)]); 4] = [
        ("glider", 10, &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]),
        ("blinker", 5, &[(2, 1), (2, 2), (2, 3)]),
        ("block", 4, &[(1, 1), (1, 2), (2, 1), (2, 2)]),
        ("beacon", 6, &[(1, 1), (1, 2), (2, 1), (3, 4), (4, 3), (4, 4)]),
    ];

    for (name, size, live) in patterns {
        let mut board = Board::blank(size)?;
        for &(row, col) in live {
            board.set(row, col, true)?;
        }
        save_board_to_file(&board, dir.join(format!("{name}.json")))
            .with_context(|| format!("Failed to write {name}.json"))?;
    }

    Ok(())
}
