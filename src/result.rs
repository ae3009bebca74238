//! Round scoring, bank sale, and final standings records.

use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::card::{ARTIST_COUNT, Artist};

/// One artist's result for a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArtistScore {
    /// The artist.
    pub artist: Artist,
    /// Rank this round (1 = most cards).
    pub rank: usize,
    /// Cards counted this round, unsold round-ending card included.
    pub sold: u8,
    /// Tile appended this round.
    pub tile: usize,
    /// Accumulated value after this round's tile.
    pub value: usize,
}

/// Result of scoring a round.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoundScore {
    /// The round scored.
    pub round: u8,
    /// Artists in rank order.
    pub artists: [ArtistScore; ARTIST_COUNT],
}

impl RoundScore {
    /// Returns the score of a single artist.
    #[must_use]
    pub fn artist(&self, artist: Artist) -> Option<&ArtistScore> {
        self.artists.iter().find(|score| score.artist == artist)
    }
}

/// Bank payout to a single player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Payout {
    /// The player ID.
    pub player_id: u8,
    /// Paintings sold to the bank.
    pub paintings: usize,
    /// Money received.
    pub amount: usize,
}

/// A player's place in the final standings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Standing {
    /// The player ID.
    pub player_id: u8,
    /// Final money.
    pub money: usize,
    /// Paintings held in the final round.
    pub paintings: usize,
}

/// Result of the bank sale at the end of a round.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BankSale {
    /// The round that was closed.
    pub round: u8,
    /// Payouts in seating order.
    pub payouts: Vec<Payout>,
    /// Final standings, best first; present only after the last round.
    pub standings: Option<Vec<Standing>>,
    /// Winning player IDs (more than one on a full tie); empty until the game ends.
    pub winners: Vec<u8>,
}
