use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{IllegalMark, InvalidMarker};

/// The symbol a player marks cells with.
///
/// Always a single printable, non-whitespace character. The only ways to get a
/// `Marker` go through validation, so every `Marker` in existence is valid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Marker(char);

impl Marker {
    pub fn new(glyph: char) -> Result<Self, InvalidMarker> {
        if glyph.is_whitespace() {
            return Err(InvalidMarker::Whitespace);
        }
        if glyph.is_control() {
            return Err(InvalidMarker::NotPrintable {
                codepoint: u32::from(glyph),
            });
        }
        Ok(Marker(glyph))
    }

    pub fn glyph(self) -> char {
        self.0
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<char> for Marker {
    type Error = InvalidMarker;

    fn try_from(glyph: char) -> Result<Self, Self::Error> {
        Marker::new(glyph)
    }
}

impl FromStr for Marker {
    type Err = InvalidMarker;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let glyph = chars.next().ok_or(InvalidMarker::Empty)?;
        if chars.next().is_some() {
            return Err(InvalidMarker::MoreThanOneGlyph {
                input: String::from(s),
            });
        }
        Marker::new(glyph)
    }
}

impl TryFrom<String> for Marker {
    type Error = InvalidMarker;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Marker> for String {
    fn from(marker: Marker) -> String {
        marker.0.to_string()
    }
}

/// Shorthand for creating markers from a one-character string.
///
/// This macro is just calling the [`FromStr`] instance of [`Marker`].
/// ```
/// # use ttt::{marker, Marker};
/// assert_eq!(marker!("X"), Marker::new('X').unwrap());
/// ```
#[macro_export]
macro_rules! marker {
    ($m:literal) => {
        <$crate::Marker as std::str::FromStr>::from_str($m)
            .expect("Invalid marker given to marker! macro")
    };
}

/// A single position on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    number: usize,
    marker: Option<Marker>,
}

impl Cell {
    pub fn new(number: usize) -> Self {
        Self {
            number,
            marker: None,
        }
    }

    /// The 1-based, row-major cell number.
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn marker(&self) -> Option<Marker> {
        self.marker
    }

    pub fn is_empty(&self) -> bool {
        self.marker.is_none()
    }

    /// Marks the cell. A cell can only be marked once.
    pub fn mark(&mut self, marker: Marker) -> Result<(), IllegalMark> {
        match self.marker {
            Some(existing) => Err(IllegalMark::AlreadyMarked {
                number: self.number,
                existing,
            }),
            None => {
                self.marker = Some(marker);
                Ok(())
            }
        }
    }

    pub(crate) fn clear(&mut self) {
        self.marker = None;
    }
}
