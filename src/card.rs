//! Card types and deck composition.

use alloc::vec::Vec;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of artists in the game.
pub const ARTIST_COUNT: usize = 5;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 70;

/// Identifier of a single card, unique within a deck.
pub type CardId = u8;

/// One of the five artists whose paintings are auctioned.
///
/// Artists are listed from rarest to most common.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Artist {
    /// Lite Metal (12 paintings).
    LiteMetal,
    /// Yoko (13 paintings).
    Yoko,
    /// Christin P. (14 paintings).
    ChristinP,
    /// Karl Gitter (15 paintings).
    KarlGitter,
    /// Krypto (16 paintings).
    Krypto,
}

impl Artist {
    /// All artists, rarest first.
    pub const ALL: [Self; ARTIST_COUNT] = [
        Self::LiteMetal,
        Self::Yoko,
        Self::ChristinP,
        Self::KarlGitter,
        Self::Krypto,
    ];

    /// Total number of this artist's paintings printed in the deck.
    ///
    /// Print counts are distinct, which makes them a total tie-break order.
    #[must_use]
    pub const fn print_count(self) -> u8 {
        match self {
            Self::LiteMetal => 12,
            Self::Yoko => 13,
            Self::ChristinP => 14,
            Self::KarlGitter => 15,
            Self::Krypto => 16,
        }
    }

    /// Index of the artist into per-artist arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Auction types printed on this artist's cards, as
    /// `[open, one offer, hidden, fixed price, double]` counts.
    const fn auction_mix(self) -> [u8; 5] {
        match self {
            Self::LiteMetal => [3, 2, 2, 3, 2],
            Self::Yoko => [3, 3, 2, 3, 2],
            Self::ChristinP => [3, 3, 3, 3, 2],
            Self::KarlGitter => [3, 3, 3, 3, 3],
            Self::Krypto => [4, 3, 3, 3, 3],
        }
    }
}

impl fmt::Display for Artist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LiteMetal => "Lite Metal",
            Self::Yoko => "Yoko",
            Self::ChristinP => "Christin P.",
            Self::KarlGitter => "Karl Gitter",
            Self::Krypto => "Krypto",
        };
        f.write_str(name)
    }
}

/// The auction protocol printed on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AuctionType {
    /// Open bidding in any order until the auctioneer closes.
    Open,
    /// One bid per player in seating order, auctioneer decides last.
    OneOffer,
    /// Sealed simultaneous bids.
    Hidden,
    /// Auctioneer names a price, players may buy in turn.
    FixedPrice,
    /// May be paired with a second card of the same artist.
    Double,
}

impl AuctionType {
    const ALL: [Self; 5] = [
        Self::Open,
        Self::OneOffer,
        Self::Hidden,
        Self::FixedPrice,
        Self::Double,
    ];
}

/// A painting card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Card {
    /// Unique card identifier.
    pub id: CardId,
    /// The painting's artist.
    pub artist: Artist,
    /// The auction type printed on the card.
    pub auction_type: AuctionType,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(id: CardId, artist: Artist, auction_type: AuctionType) -> Self {
        Self {
            id,
            artist,
            auction_type,
        }
    }

    /// Returns whether this is a double auction card.
    #[must_use]
    pub fn is_double(&self) -> bool {
        self.auction_type == AuctionType::Double
    }
}

/// Builds an unshuffled full deck with ids `0..DECK_SIZE`.
///
/// ```
/// use gavel::card::{full_deck, Artist, DECK_SIZE};
///
/// let deck = full_deck();
/// assert_eq!(deck.len(), DECK_SIZE);
/// assert_eq!(deck.iter().filter(|c| c.artist == Artist::Krypto).count(), 16);
/// ```
#[must_use]
pub fn full_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    let mut next_id: CardId = 0;

    for artist in Artist::ALL {
        for (auction_type, count) in AuctionType::ALL.into_iter().zip(artist.auction_mix()) {
            for _ in 0..count {
                cards.push(Card::new(next_id, artist, auction_type));
                next_id += 1;
            }
        }
    }

    cards
}
