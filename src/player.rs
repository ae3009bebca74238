//! Player financial and ownership state.

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::card::{Card, CardId};

/// A seated player.
///
/// Seating order is the order of players in [`GameState::players`](crate::GameState);
/// clockwise means increasing seat index, wrapping around.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Player {
    /// Player identifier.
    pub id: u8,
    /// Display name.
    pub name: String,
    /// Money on hand. Only settlement changes it.
    pub money: usize,
    /// Cards held and not yet played.
    pub hand: Vec<Card>,
    /// Paintings bought this round, in purchase order.
    pub purchases: Vec<Card>,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub const fn new(id: u8, name: String, money: usize) -> Self {
        Self {
            id,
            name,
            money,
            hand: Vec::new(),
            purchases: Vec::new(),
        }
    }

    /// Returns the card with the given id if it is in this player's hand.
    #[must_use]
    pub fn holds(&self, card_id: CardId) -> Option<Card> {
        self.hand.iter().copied().find(|card| card.id == card_id)
    }

    /// Removes a card from the hand.
    pub fn take_card(&mut self, card_id: CardId) -> Option<Card> {
        let position = self.hand.iter().position(|card| card.id == card_id)?;
        Some(self.hand.remove(position))
    }
}

/// Returns the seat index of a player.
pub(crate) fn seat_of(players: &[Player], player_id: u8) -> Option<usize> {
    players.iter().position(|player| player.id == player_id)
}

/// Returns the money of a player.
pub(crate) fn money_of(players: &[Player], player_id: u8) -> Option<usize> {
    players
        .iter()
        .find(|player| player.id == player_id)
        .map(|player| player.money)
}

/// Player ids clockwise from `from`, excluding `from` itself.
pub(crate) fn clockwise_from(players: &[Player], from: u8) -> Vec<u8> {
    let Some(seat) = seat_of(players, from) else {
        return Vec::new();
    };
    let count = players.len();
    (1..count)
        .map(|offset| players[(seat + offset) % count].id)
        .collect()
}
