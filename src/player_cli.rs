#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use rand::rngs::SmallRng;
use thiserror::Error;

use crate::grid::Coordinate;
use crate::player::{Strategy, TargetView};

/// Why a piece of user text is not a coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordinateError {
    #[error("Empty input - enter a column letter and a row number (e.g. A5)")]
    Empty,
    #[error("Invalid column '{0}' - must be a letter A-{1}")]
    InvalidColumn(char, char),
    #[error("Invalid row '{0}' - must be a number 1-{1}")]
    InvalidRow(String, usize),
}

fn last_column<const N: usize>() -> char {
    (b'A' + N.saturating_sub(1).min(25) as u8) as char
}

/// Parse `A1`-style input: a column letter followed by a 1-based row.
pub fn parse_coordinate<const N: usize>(input: &str) -> Result<Coordinate, CoordinateError> {
    let input = input.trim();
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or(CoordinateError::Empty)?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return Err(CoordinateError::InvalidColumn(col_ch, last_column::<N>()));
    }
    let col = (col_ch as u8 - b'A') as usize;
    if col >= N {
        return Err(CoordinateError::InvalidColumn(col_ch, last_column::<N>()));
    }
    let row_str = chars.as_str().trim();
    let row: usize = row_str
        .parse()
        .map_err(|_| CoordinateError::InvalidRow(row_str.into(), N))?;
    if row == 0 || row > N {
        return Err(CoordinateError::InvalidRow(row_str.into(), N));
    }
    Ok(Coordinate::new(row - 1, col))
}

/// Format a coordinate the way [`parse_coordinate`] reads it.
pub fn format_coordinate(coord: Coordinate) -> String {
    let col = (b'A' + coord.col.min(25) as u8) as char;
    format!("{}{}", col, coord.row + 1)
}

fn is_quit(input: &str) -> bool {
    matches!(input.trim().to_ascii_lowercase().as_str(), "q" | "quit" | "exit")
}

/// Human player typing coordinates on a console.
pub struct ConsoleStrategy<R, W> {
    name: String,
    input: R,
    output: W,
}

impl ConsoleStrategy<io::StdinLock<'static>, io::Stdout> {
    /// Console strategy bound to the process's stdin and stdout.
    pub fn stdio<S: Into<String>>(name: S) -> Self {
        Self::new(name, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleStrategy<R, W> {
    pub fn new<S: Into<String>>(name: S, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Prompt until the user types a valid coordinate. `None` on quit or EOF.
    fn prompt<const N: usize>(&mut self) -> io::Result<Option<Coordinate>> {
        loop {
            write!(self.output, "{}, enter coordinates (q to quit): ", self.name)?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            if is_quit(&line) {
                return Ok(None);
            }
            match parse_coordinate::<N>(&line) {
                Ok(coord) => return Ok(Some(coord)),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }
}

impl<R: BufRead, W: Write, const N: usize> Strategy<N> for ConsoleStrategy<R, W> {
    fn select_target(&mut self, _view: TargetView<'_, N>, _rng: &mut SmallRng) -> Option<Coordinate> {
        match self.prompt::<N>() {
            Ok(target) => target,
            Err(e) => {
                log::warn!("console input failed: {}", e);
                None
            }
        }
    }
}
