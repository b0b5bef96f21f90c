#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use crate::{
    board::Board,
    common::Token,
    config::EMPTY_CELL,
    player::Player,
};
use rand::rngs::SmallRng;
use rand::Rng;

/// Interactive player reading moves from a line-oriented input (stdin by default).
pub struct CliPlayer<R: BufRead> {
    input: R,
}

impl CliPlayer<io::StdinLock<'static>> {
    pub fn new() -> Self {
        Self {
            input: io::stdin().lock(),
        }
    }
}

impl Default for CliPlayer<io::StdinLock<'static>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead> CliPlayer<R> {
    pub fn from_reader(input: R) -> Self {
        Self { input }
    }

    /// Reads one trimmed line; `None` on end of input or a read error.
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()),
            Err(e) => {
                log::warn!("failed to read move: {}", e);
                None
            }
        }
    }
}

/// Spreadsheet-style column label: `A`..`Z`, then `AA`, `AB`, ...
pub fn column_label(col: usize) -> String {
    let mut label = Vec::new();
    let mut n = col + 1;
    while n > 0 {
        n -= 1;
        label.push(b'A' + (n % 26) as u8);
        n /= 26;
    }
    label.iter().rev().map(|&b| b as char).collect()
}

/// Inverse of [`column_label`]; `None` if empty, not all letters, or too long.
fn parse_column(letters: &str) -> Option<usize> {
    if letters.is_empty() {
        return None;
    }
    let mut n: usize = 0;
    for ch in letters.chars() {
        if !ch.is_ascii_alphabetic() {
            return None;
        }
        let digit = (ch.to_ascii_uppercase() as u8 - b'A') as usize + 1;
        n = n.checked_mul(26)?.checked_add(digit)?;
    }
    Some(n - 1)
}

/// Human-readable name of a cell, e.g. `B3` for row 2, column 1.
pub fn cell_to_string(cell: usize, dimension: usize) -> String {
    let (r, c) = (cell / dimension, cell % dimension);
    std::format!("{}{}", column_label(c), r + 1)
}

/// Parse either a coordinate such as `B3` or a raw cell index such as `7`.
pub fn parse_cell(input: &str, dimension: usize) -> Result<usize, String> {
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    let size = dimension * dimension;
    if input.chars().all(|ch| ch.is_ascii_digit()) {
        let idx: usize = input
            .parse()
            .map_err(|_| format!("Invalid cell index '{}'", input))?;
        if idx >= size {
            return Err(format!("Cell {} out of bounds - must be 0-{}", idx, size - 1));
        }
        return Ok(idx);
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., B2)".to_string());
    }
    let last_col = column_label(dimension.saturating_sub(1));
    let split = input
        .find(|ch: char| !ch.is_ascii_alphabetic())
        .unwrap_or(input.len());
    let (letters, row_str) = input.split_at(split);
    let col = parse_column(letters)
        .ok_or_else(|| format!("Invalid column '{}' - must be letters A-{}", letters, last_col))?;
    if col >= dimension {
        return Err(format!(
            "Column '{}' out of bounds - must be A-{}",
            letters.to_ascii_uppercase(),
            last_col
        ));
    }
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-{}", row_str, dimension))?;
    if row == 0 || row > dimension {
        return Err(format!("Row {} out of bounds - must be 1-{}", row, dimension));
    }
    Ok((row - 1) * dimension + col)
}

/// Print the board with column letters and row numbers.
pub fn print_board<T: Token>(board: &Board<T>) {
    let dim = board.dimension();
    let width = column_label(dim.saturating_sub(1)).len();
    let row_width = dim.to_string().len().max(2);
    std::print!("{:row_width$} ", "");
    for c in 0..dim {
        std::print!(" {:>width$}", column_label(c));
    }
    std::println!();
    for (r, row) in board.cells().chunks(dim.max(1)).enumerate() {
        std::print!("{:>row_width$} ", r + 1);
        for cell in row {
            match cell {
                Some(token) => std::print!(" {:>width$}", token.to_string()),
                None => std::print!(" {:>width$}", EMPTY_CELL),
            }
        }
        std::println!();
    }
}

impl<T: Token, R: BufRead> Player<T> for CliPlayer<R> {
    fn select_cell(&mut self, rng: &mut SmallRng, board: &Board<T>, available: &[usize]) -> usize {
        let dim = board.dimension();
        let suggestion = available[rng.random_range(0..available.len())];
        print_board(board);
        loop {
            std::print!(
                "Enter move [suggested: {}] (or 'help'): ",
                cell_to_string(suggestion, dim)
            );
            let _ = io::stdout().flush();
            let line = match self.read_line() {
                Some(line) => line,
                None => {
                    std::println!("\nNo more input, playing {}", cell_to_string(suggestion, dim));
                    return suggestion;
                }
            };
            if line.is_empty() {
                return suggestion;
            }
            if line.eq_ignore_ascii_case("help") {
                print_move_help(dim);
                continue;
            }
            match parse_cell(&line, dim) {
                Ok(cell) if available.contains(&cell) => return cell,
                Ok(cell) => {
                    std::println!("✗ {} is already taken. Choose another cell.", cell_to_string(cell, dim));
                }
                Err(e) => std::println!("✗ Invalid move: {}", e),
            }
        }
    }

    fn handle_move(&mut self, cell: usize, token: T) {
        std::println!("You placed {} at cell {}", token, cell);
    }

    fn handle_game_over(&mut self, winner: Option<T>, own_token: T) {
        match winner {
            Some(token) if token == own_token => std::println!("\nVICTORY! You completed a line."),
            Some(token) => std::println!("\nDEFEAT. {} completed a line.", token),
            None => std::println!("\nDraw. The board is full."),
        }
    }
}

fn print_move_help(dimension: usize) {
    let last_col = column_label(dimension.saturating_sub(1));
    std::println!("\nMove format:");
    std::println!("  <COLUMN><ROW>  e.g. A1 is the top-left cell");
    std::println!("  <INDEX>        row-major cell index, 0 is the top-left cell");
    std::println!("Valid columns: A-{}, valid rows: 1-{}", last_col, dimension);
    std::println!("Press ENTER to play the suggested move.\n");
}
