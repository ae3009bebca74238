//! Accumulated artist values.

use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::card::{ARTIST_COUNT, Artist};

/// Value tiles awarded across rounds, per artist.
///
/// Tiles are only ever appended, one per artist per round, so an artist's
/// value never decreases.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArtistValueBoard {
    tiles: [Vec<usize>; ARTIST_COUNT],
}

impl ArtistValueBoard {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tiles: [Vec::new(), Vec::new(), Vec::new(), Vec::new(), Vec::new()],
        }
    }

    /// Appends a round's tile for an artist.
    pub fn append(&mut self, artist: Artist, tile: usize) {
        self.tiles[artist.index()].push(tile);
    }

    /// Returns the tiles awarded to an artist, oldest first.
    #[must_use]
    pub fn tiles(&self, artist: Artist) -> &[usize] {
        &self.tiles[artist.index()]
    }

    /// Returns the current value of one painting by this artist.
    #[must_use]
    pub fn value(&self, artist: Artist) -> usize {
        self.tiles[artist.index()].iter().sum()
    }

    /// Returns the number of rounds scored on this board.
    #[must_use]
    pub fn rounds_scored(&self) -> usize {
        self.tiles[0].len()
    }
}
