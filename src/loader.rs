use std::fs::File;
use std::io::Read;
use std::path::Path;

use itertools::Itertools;
use thiserror::Error;

use crate::board::{Board, BOARD_SIZE};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("expected 9 rows, found {0}")]
    WrongRowCount(usize),
    #[error("row {row}: expected 9 cells, found {found}")]
    WrongCellCount { row: usize, found: usize },
    #[error("row {row}: invalid cell {token:?}, expected a digit 0-9")]
    BadCell { row: usize, token: String },
}

/// Read a board from the puzzle file at `path`.
pub fn read_board<P: AsRef<Path>>(path: P) -> Result<Board, LoadError> {
    let mut text = String::new();
    File::open(path)?.read_to_string(&mut text)?;
    parse_board(&text)
}

/// Parse puzzle text: nine lines of nine whitespace-separated cells, each
/// a digit 0-9 with 0 standing for an empty cell. Blank lines are skipped.
pub fn parse_board(text: &str) -> Result<Board, LoadError> {
    let rows = text.lines().filter(|line| !line.trim().is_empty()).collect_vec();
    if rows.len() != BOARD_SIZE {
        return Err(LoadError::WrongRowCount(rows.len()));
    }

    let mut board = Board::empty();
    for (r, line) in rows.into_iter().enumerate() {
        let cells = line.split_ascii_whitespace().collect_vec();
        if cells.len() != BOARD_SIZE {
            return Err(LoadError::WrongCellCount { row: r, found: cells.len() });
        }
        for (c, token) in cells.into_iter().enumerate() {
            let digit = token
                .parse::<u8>()
                .ok()
                .filter(|&d| d <= 9)
                .ok_or_else(|| LoadError::BadCell { row: r, token: token.to_string() })?;
            board[(r, c)] = digit;
        }
    }

    Ok(board)
}
