//! Interactive board creation over any line-oriented input

use crate::config::DisplayConfig;
use crate::game_of_life::{Board, FormatError};
use crate::utils::BoardFormatter;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use thiserror::Error;

/// Problems with a single `row, col` address line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("Expected an address in the form \"a, b\", got \"{0}\"")]
    Malformed(String),

    #[error("Addresses must be in the range [0, {size} - 1]!")]
    OutOfRange { size: usize },
}

/// A board built at the prompt, plus where the user asked to keep it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedBoard {
    pub board: Board,
    pub save_path: Option<PathBuf>,
}

/// Parse a `row, col` address and check it against the board size
pub fn parse_address(line: &str, size: usize) -> Result<(usize, usize), AddressError> {
    let malformed = || AddressError::Malformed(line.to_string());

    let parts: Vec<i64> = line
        .split(',')
        .map(|part| part.trim().parse::<i64>())
        .collect::<Result<_, _>>()
        .map_err(|_| malformed())?;

    let [row, col] = parts[..] else {
        return Err(malformed());
    };

    let in_range = |value: i64| usize::try_from(value).ok().filter(|&v| v < size);
    match (in_range(row), in_range(col)) {
        (Some(row), Some(col)) => Ok((row, col)),
        _ => Err(AddressError::OutOfRange { size }),
    }
}

fn read_trimmed_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buffer = String::new();
    let read = input.read_line(&mut buffer).context("Unable to read line")?;
    if read == 0 {
        Ok(None)
    } else {
        Ok(Some(buffer.trim().to_string()))
    }
}

/// Prompt for a board size, live cells and, unless `save_path` is already
/// known, where to save the result.
///
/// Cell entry ends on `-1`, a blank line or end of input.
pub fn create_board_interactively<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    display: &DisplayConfig,
    save_path: Option<PathBuf>,
) -> Result<CreatedBoard> {
    let mut board = loop {
        write!(output, "How many lines on each side is this board: ")?;
        output.flush()?;

        let line = read_trimmed_line(input)?
            .context("Input ended before a board size was given")?;
        let Ok(size) = line.parse::<usize>() else {
            writeln!(output, "Board size must be a positive whole number, got \"{line}\"")?;
            continue;
        };
        match Board::blank(size) {
            Ok(board) => break board,
            Err(FormatError::Empty) => {
                writeln!(output, "Board size must be a positive whole number, got \"{line}\"")?
            }
            Err(err) => writeln!(output, "{err}")?,
        }
    };
    let size = board.size();
    writeln!(
        output,
        "Add \"live\" cell addresses in the form \"a, b\" in the range {size}x{size}"
    )?;
    writeln!(output, "(non-inclusive; enter -1 or a blank to continue)")?;

    while let Some(line) = read_trimmed_line(input)? {
        if line.is_empty() || line == "-1" {
            break;
        }

        let (row, col) = match parse_address(&line, size) {
            Ok(address) => address,
            Err(err) => {
                writeln!(output, "{err}")?;
                continue;
            }
        };

        if board.get(row, col)? {
            writeln!(output, "[{row}, {col}] is already alive!")?;
        } else {
            board.set(row, col, true)?;
            write!(output, "{}", BoardFormatter::format_board(&board, display))?;
        }
    }

    let save_path = match save_path {
        Some(path) => Some(path),
        None => {
            writeln!(output, "Where should this board be saved? (blank for no save): ")?;
            output.flush()?;
            read_trimmed_line(input)?
                .filter(|path| !path.is_empty())
                .map(PathBuf::from)
        }
    };

    Ok(CreatedBoard { board, save_path })
}
