//! Parser for the maze text format.
//!
//! A maze is a block of lines, one grid row per non-blank line. Each cell is
//! one token:
//!
//! | token | meaning |
//! |---|---|
//! | `#` | wall |
//! | `S` | start (exactly one) |
//! | `G` | goal (exactly one) |
//! | `"12"` | open cell with traversal weight 12 |
//!
//! Tokens are separated by whitespace or commas. Every row must have as many
//! tokens as the first one.

use std::path::Path as FsPath;
use std::str::FromStr;

use thiserror::Error;

use crate::cell::Cell;
use crate::geom::Pos;
use crate::grid::{Grid, GridError};

/// Errors produced while reading a maze.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read maze file: {0}")]
    Io(#[from] std::io::Error),
    #[error("maze is empty")]
    Empty,
    #[error("line {line}, column {column}: unexpected character {found:?}")]
    UnexpectedToken {
        line: usize,
        column: usize,
        found: char,
    },
    #[error("line {line}, column {column}: unterminated weight literal")]
    UnterminatedWeight { line: usize, column: usize },
    #[error("line {line}, column {column}: invalid weight {text:?}")]
    InvalidWeight {
        line: usize,
        column: usize,
        text: String,
    },
    #[error("line {line}: expected {expected} cells, found {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error(transparent)]
    Grid(#[from] GridError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Wall,
    Start,
    Goal,
    Weight(u32),
}

impl Token {
    fn into_cell(self, pos: Pos) -> Cell {
        let mut cell = Cell::new(pos);
        match self {
            Token::Wall => cell.is_wall = true,
            Token::Start => cell.is_start = true,
            Token::Goal => cell.is_goal = true,
            Token::Weight(w) => cell.weight = w,
        }
        cell
    }
}

/// Split one line into tokens. `line` is the 1-based source line number.
fn tokenize(text: &str, line: usize) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut chars = text.chars().enumerate();

    while let Some((at, ch)) = chars.next() {
        let column = at + 1;
        match ch {
            c if c.is_whitespace() || c == ',' => {}
            '#' => tokens.push(Token::Wall),
            'S' => tokens.push(Token::Start),
            'G' => tokens.push(Token::Goal),
            '"' => {
                let mut literal = String::new();
                let mut closed = false;
                for (_, c) in chars.by_ref() {
                    if c == '"' {
                        closed = true;
                        break;
                    }
                    literal.push(c);
                }
                if !closed {
                    return Err(ParseError::UnterminatedWeight { line, column });
                }
                let valid = !literal.is_empty() && literal.bytes().all(|b| b.is_ascii_digit());
                let weight = valid.then(|| literal.parse::<u32>().ok()).flatten();
                match weight {
                    Some(w) => tokens.push(Token::Weight(w)),
                    None => {
                        return Err(ParseError::InvalidWeight {
                            line,
                            column,
                            text: literal,
                        });
                    }
                }
            }
            found => {
                return Err(ParseError::UnexpectedToken {
                    line,
                    column,
                    found,
                });
            }
        }
    }

    Ok(tokens)
}

/// Parse a maze from text.
pub fn parse_maze(text: &str) -> Result<Grid, ParseError> {
    let mut rows: Vec<Vec<Token>> = Vec::new();
    let mut cols = 0usize;

    for (n, raw) in text.lines().enumerate() {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        let line = n + 1;
        let offset = raw.chars().count() - raw.trim_start().chars().count();
        let tokens = tokenize(trimmed, line).map_err(|e| shift_column(e, offset))?;

        if rows.is_empty() {
            cols = tokens.len();
        } else if tokens.len() != cols {
            return Err(ParseError::RaggedRow {
                line,
                expected: cols,
                found: tokens.len(),
            });
        }
        rows.push(tokens);
    }

    if rows.is_empty() || cols == 0 {
        return Err(ParseError::Empty);
    }

    let n_rows = rows.len() as i32;
    let cells = rows
        .into_iter()
        .enumerate()
        .flat_map(|(r, row)| {
            row.into_iter()
                .enumerate()
                .map(move |(c, tok)| tok.into_cell(Pos::new(r as i32, c as i32)))
        })
        .collect();

    Ok(Grid::from_cells(n_rows, cols as i32, cells)?)
}

/// Read and parse a maze file.
pub fn load_maze(path: impl AsRef<FsPath>) -> Result<Grid, ParseError> {
    let text = std::fs::read_to_string(path)?;
    parse_maze(&text)
}

fn shift_column(err: ParseError, offset: usize) -> ParseError {
    match err {
        ParseError::UnexpectedToken {
            line,
            column,
            found,
        } => ParseError::UnexpectedToken {
            line,
            column: column + offset,
            found,
        },
        ParseError::UnterminatedWeight { line, column } => ParseError::UnterminatedWeight {
            line,
            column: column + offset,
        },
        ParseError::InvalidWeight { line, column, text } => ParseError::InvalidWeight {
            line,
            column: column + offset,
            text,
        },
        other => other,
    }
}

impl FromStr for Grid {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_maze(s)
    }
}
