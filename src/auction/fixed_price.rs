use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::error::ActionError;
use crate::player::{Player, clockwise_from, money_of};

use super::{Intent, Sale, ensure_funds};

/// Fixed price auction.
///
/// The auctioneer names a price, then each other player clockwise may buy at
/// that price or pass. If everyone passes the auctioneer must buy it. An
/// auctioneer with no money cannot name a price and keeps the painting for
/// free as soon as the auction starts.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FixedPriceAuction {
    /// The player selling the painting.
    pub auctioneer: u8,
    /// The painting on offer.
    pub card: Card,
    /// Asking price; 0 while the auctioneer has not named one.
    pub price: usize,
    /// Other players clockwise from the auctioneer.
    pub turn_order: Vec<u8>,
    /// Index into `turn_order` of the player to act.
    pub current_turn_index: usize,
    /// Players who declined to buy.
    pub passed_players: Vec<u8>,
    /// Whether the painting has been bought.
    pub sold: bool,
    /// The buyer, once sold.
    pub winner: Option<u8>,
}

impl FixedPriceAuction {
    pub(crate) fn new(card: Card, auctioneer: u8, players: &[Player]) -> Self {
        Self {
            auctioneer,
            card,
            price: 0,
            turn_order: clockwise_from(players, auctioneer),
            current_turn_index: 0,
            passed_players: Vec::new(),
            sold: false,
            winner: None,
        }
    }

    /// Returns whether the auctioneer has named the price.
    #[must_use]
    pub const fn is_price_set(&self) -> bool {
        self.price > 0
    }

    /// Returns the player who must act next.
    #[must_use]
    pub fn current_player(&self) -> u8 {
        if !self.is_price_set() {
            return self.auctioneer;
        }
        self.turn_order
            .get(self.current_turn_index)
            .copied()
            .unwrap_or(self.auctioneer)
    }

    /// Closes the auction at once if the auctioneer has no money to name a
    /// price with.
    pub(super) fn open(&mut self, players: &[Player]) -> Option<Sale> {
        (money_of(players, self.auctioneer) == Some(0)).then(|| self.sell_to(self.auctioneer))
    }

    pub(super) fn apply(
        &mut self,
        player: u8,
        intent: Intent,
        players: &[Player],
    ) -> Result<Option<Sale>, ActionError> {
        if self.sold || player != self.current_player() {
            return Err(ActionError::OutOfTurn);
        }

        match intent {
            Intent::SetPrice(amount) if !self.is_price_set() => {
                let money = money_of(players, player).ok_or(ActionError::PlayerNotFound)?;
                if amount == 0 || amount > money {
                    return Err(ActionError::InvalidPrice);
                }

                self.price = amount;
                Ok(self.close_if_nobody_left())
            }
            Intent::BuyAtPrice if self.is_price_set() => {
                ensure_funds(players, player, self.price)?;
                Ok(Some(self.sell_to(player)))
            }
            Intent::Pass if self.is_price_set() => {
                self.passed_players.push(player);
                self.current_turn_index += 1;
                Ok(self.close_if_nobody_left())
            }
            _ => Err(ActionError::OutOfTurn),
        }
    }

    fn sell_to(&mut self, winner: u8) -> Sale {
        self.sold = true;
        self.winner = Some(winner);
        Sale::to(winner, self.price)
    }

    /// Forces the auctioneer to buy once every other player has passed.
    fn close_if_nobody_left(&mut self) -> Option<Sale> {
        if self.current_turn_index >= self.turn_order.len() {
            Some(self.sell_to(self.auctioneer))
        } else {
            None
        }
    }
}
