use rand::seq::SliceRandom;
use rand::Rng;

use crate::{InvalidMarker, Marker};

/// The markers in use in one game session, in turn order.
///
/// Markers are unique within a registry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MarkerRegistry {
    markers: Vec<Marker>,
}

impl MarkerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, marker: Marker) -> Result<(), InvalidMarker> {
        if self.contains(marker) {
            return Err(InvalidMarker::AlreadyRegistered { marker });
        }
        self.markers.push(marker);
        Ok(())
    }

    /// Validates a marker given as text, then registers it.
    pub fn register_glyph(&mut self, glyph: &str) -> Result<Marker, InvalidMarker> {
        let marker: Marker = glyph.parse()?;
        self.register(marker)?;
        Ok(marker)
    }

    /// Registers a random capital letter that is not in use yet, ignoring case.
    ///
    /// Returns `None` when all 26 letters are taken.
    pub fn pick_unused<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Marker> {
        let free: Vec<char> = ('A'..='Z')
            .filter(|letter| {
                !self
                    .markers
                    .iter()
                    .any(|m| m.glyph().to_uppercase().eq(letter.to_uppercase()))
            })
            .collect();
        let marker = Marker::new(*free.choose(rng)?).ok()?;
        self.markers.push(marker);
        Some(marker)
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn contains(&self, marker: Marker) -> bool {
        self.markers.contains(&marker)
    }

    /// The turn index of a marker.
    pub fn position(&self, marker: Marker) -> Option<usize> {
        self.markers.iter().position(|&m| m == marker)
    }

    /// The marker that moves after `marker`, wrapping around after the last one.
    pub fn next_after(&self, marker: Marker) -> Option<Marker> {
        let idx = self.position(marker)?;
        Some(self.markers[(idx + 1) % self.markers.len()])
    }
}
