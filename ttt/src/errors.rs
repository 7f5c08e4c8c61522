use crate::{Marker, MAX_SIDE, MIN_SIDE, MIN_WIN_LENGTH};

/// The error type for [`Board::new()`](crate::Board::new).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    EvenSide { side: usize },
    SideOutOfRange { side: usize },
    WinLengthOutOfRange { win_length: usize, side: usize },
}

impl std::error::Error for ConfigError {}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::EvenSide { side } => {
                write!(f, "The board side must be odd, but {} was given", side)
            }
            ConfigError::SideOutOfRange { side } => write!(
                f,
                "The board side must be between {} and {}, but {} was given",
                MIN_SIDE, MAX_SIDE, side
            ),
            ConfigError::WinLengthOutOfRange { win_length, side } => write!(
                f,
                "The win length must be between {} and the board side {}, but {} was given",
                MIN_WIN_LENGTH, side, win_length
            ),
        }
    }
}

/// The error type for [`Board::set()`](crate::Board::set), i.e. for marking a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalMark {
    OutOfBounds { number: usize, num_cells: usize },
    AlreadyMarked { number: usize, existing: Marker },
}

impl std::error::Error for IllegalMark {}

impl std::fmt::Display for IllegalMark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMark::OutOfBounds { number, num_cells } => write!(
                f,
                "Cell {} does not exist, cells are numbered 1 to {}",
                number, num_cells
            ),
            IllegalMark::AlreadyMarked { number, existing } => {
                write!(f, "Cell {} is already marked with {}", number, existing)
            }
        }
    }
}

/// The error type for creating or registering a [`Marker`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidMarker {
    Empty,
    MoreThanOneGlyph { input: String },
    Whitespace,
    NotPrintable { codepoint: u32 },
    AlreadyRegistered { marker: Marker },
}

impl std::error::Error for InvalidMarker {}

impl std::fmt::Display for InvalidMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMarker::Empty => write!(f, "A marker can't be empty"),
            InvalidMarker::MoreThanOneGlyph { input } => {
                write!(f, "A marker is a single character, but '{}' was given", input)
            }
            InvalidMarker::Whitespace => write!(f, "A marker can't be whitespace"),
            InvalidMarker::NotPrintable { codepoint } => {
                write!(f, "U+{:04X} is not a printable character", codepoint)
            }
            InvalidMarker::AlreadyRegistered { marker } => {
                write!(f, "The marker {} is already used by another player", marker)
            }
        }
    }
}
