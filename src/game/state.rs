//! Game state types.

use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::auction::Auction;
use crate::board::ArtistValueBoard;
use crate::card::{ARTIST_COUNT, Artist, Card};
use crate::player::Player;

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundPhase {
    /// Waiting for cards to be dealt.
    Dealing,
    /// Players play cards into auctions.
    Auction,
    /// The round has ended and awaits scoring.
    RoundEnding,
    /// Artists are scored; paintings await the bank sale.
    SellingToBank,
    /// The last round has been sold and winners are decided.
    GameOver,
}

/// Why a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundEnd {
    /// A player played the round-ending card of this artist.
    ArtistLimit(Artist),
    /// No player had a card left to play.
    HandsExhausted,
}

/// Cards counted per artist in the current round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArtistCounts([u8; ARTIST_COUNT]);

impl ArtistCounts {
    /// Returns the count for an artist.
    #[must_use]
    pub const fn get(&self, artist: Artist) -> u8 {
        self.0[artist.index()]
    }

    /// Adds to an artist's count.
    pub const fn add(&mut self, artist: Artist, cards: u8) {
        self.0[artist.index()] += cards;
    }
}

/// State of the current round.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Round {
    /// Round number, starting at 1.
    pub number: u8,
    /// Cards counted per artist this round, unsold round-ending card included.
    pub cards_sold_by_artist: ArtistCounts,
    /// Current phase.
    pub phase: RoundPhase,
    /// The auction in progress, if any.
    pub active_auction: Option<Auction>,
    /// Cards that ended the round without being auctioned.
    pub unsold_cards: Vec<Card>,
    /// Why the round ended, once it has.
    pub end_reason: Option<RoundEnd>,
}

impl Round {
    /// Creates a round waiting to be dealt.
    #[must_use]
    pub const fn new(number: u8) -> Self {
        Self {
            number,
            cards_sold_by_artist: ArtistCounts([0; ARTIST_COUNT]),
            phase: RoundPhase::Dealing,
            active_auction: None,
            unsold_cards: Vec::new(),
            end_reason: None,
        }
    }
}

/// The complete state of a game.
///
/// Restoring this value with [`Game::from_state`](crate::Game::from_state)
/// reproduces identical future behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameState {
    /// Players in seating order.
    pub players: Vec<Player>,
    /// The current round.
    pub round: Round,
    /// Accumulated artist values.
    pub artist_board: ArtistValueBoard,
    /// The player whose turn it is to play a card.
    pub turn_pointer: u8,
    /// Winners, decided after the last round.
    pub winners: Vec<u8>,
    /// Undealt cards, drawn from the end.
    pub deck: Vec<Card>,
}

impl GameState {
    /// Creates the state of a game with no players seated.
    #[must_use]
    pub const fn new(deck: Vec<Card>) -> Self {
        Self {
            players: Vec::new(),
            round: Round::new(1),
            artist_board: ArtistValueBoard::new(),
            turn_pointer: 0,
            winners: Vec::new(),
            deck,
        }
    }

    /// Returns a player by ID.
    #[must_use]
    pub fn player(&self, player_id: u8) -> Option<&Player> {
        self.players.iter().find(|player| player.id == player_id)
    }

    pub(crate) fn player_mut(&mut self, player_id: u8) -> Option<&mut Player> {
        self.players.iter_mut().find(|player| player.id == player_id)
    }

    /// Returns the first player clockwise of `from`, `from` excluded, with
    /// cards in hand; `from` itself is the last candidate.
    pub(crate) fn next_with_cards(&self, from: u8) -> Option<u8> {
        let seat = self.players.iter().position(|player| player.id == from)?;
        let count = self.players.len();
        (1..=count)
            .map(|offset| &self.players[(seat + offset) % count])
            .find(|player| !player.hand.is_empty())
            .map(|player| player.id)
    }

    /// Returns the player clockwise of `from`.
    pub(crate) fn next_seat(&self, from: u8) -> u8 {
        let count = self.players.len();
        self.players
            .iter()
            .position(|player| player.id == from)
            .map_or(from, |seat| self.players[(seat + 1) % count].id)
    }
}
