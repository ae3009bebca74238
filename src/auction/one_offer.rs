use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::error::ActionError;
use crate::options::{GameOptions, OutbidPayment};
use crate::player::{Player, clockwise_from};

use super::{Intent, Sale, ensure_funds};

/// Phase of a one offer auction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OneOfferPhase {
    /// Players left of the auctioneer bid or pass, once each.
    Bidding,
    /// The auctioneer accepts, outbids, or takes the painting for free.
    AuctioneerDecision,
}

/// One offer auction.
///
/// Each player clockwise from the auctioneer gets exactly one chance to bid
/// above the current bid or pass. The auctioneer decides last.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OneOfferAuction {
    /// The player selling the painting.
    pub auctioneer: u8,
    /// The painting on offer.
    pub card: Card,
    /// Other players clockwise from the auctioneer, then the auctioneer.
    pub turn_order: Vec<u8>,
    /// Index into `turn_order` of the player to act.
    pub current_turn_index: usize,
    /// Highest bid so far (0 if none).
    pub current_bid: usize,
    /// Player holding the highest bid.
    pub current_bidder: Option<u8>,
    /// Current phase.
    pub phase: OneOfferPhase,
}

impl OneOfferAuction {
    pub(crate) fn new(card: Card, auctioneer: u8, players: &[Player]) -> Self {
        let mut turn_order = clockwise_from(players, auctioneer);
        turn_order.push(auctioneer);
        let phase = if turn_order.len() > 1 {
            OneOfferPhase::Bidding
        } else {
            OneOfferPhase::AuctioneerDecision
        };

        Self {
            auctioneer,
            card,
            turn_order,
            current_turn_index: 0,
            current_bid: 0,
            current_bidder: None,
            phase,
        }
    }

    /// Returns the player who must act next.
    #[must_use]
    pub fn current_player(&self) -> u8 {
        self.turn_order
            .get(self.current_turn_index)
            .copied()
            .unwrap_or(self.auctioneer)
    }

    fn advance(&mut self) {
        self.current_turn_index += 1;
        if self.current_turn_index + 1 >= self.turn_order.len() {
            self.current_turn_index = self.turn_order.len().saturating_sub(1);
            self.phase = OneOfferPhase::AuctioneerDecision;
        }
    }

    pub(super) fn apply(
        &mut self,
        player: u8,
        intent: Intent,
        players: &[Player],
        options: &GameOptions,
    ) -> Result<Option<Sale>, ActionError> {
        if player != self.current_player() {
            return Err(ActionError::OutOfTurn);
        }

        match self.phase {
            OneOfferPhase::Bidding => match intent {
                Intent::Bid(amount) => {
                    if amount <= self.current_bid {
                        return Err(ActionError::InvalidBid);
                    }
                    ensure_funds(players, player, amount)?;

                    self.current_bid = amount;
                    self.current_bidder = Some(player);
                    self.advance();
                    Ok(None)
                }
                Intent::Pass => {
                    self.advance();
                    Ok(None)
                }
                _ => Err(ActionError::OutOfTurn),
            },
            OneOfferPhase::AuctioneerDecision => self.decide(intent, players, options),
        }
    }

    fn decide(
        &self,
        intent: Intent,
        players: &[Player],
        options: &GameOptions,
    ) -> Result<Option<Sale>, ActionError> {
        match (intent, self.current_bidder) {
            (Intent::AcceptBid, Some(bidder)) => Ok(Some(Sale::to(bidder, self.current_bid))),
            (Intent::Outbid, Some(_)) => {
                let price = match options.outbid_payment {
                    OutbidPayment::Free => 0,
                    OutbidPayment::Bank => {
                        let price = self.current_bid + 1;
                        ensure_funds(players, self.auctioneer, price)?;
                        price
                    }
                };
                Ok(Some(Sale::to(self.auctioneer, price)))
            }
            (Intent::TakeFree, None) => Ok(Some(Sale::to(self.auctioneer, 0))),
            _ => Err(ActionError::OutOfTurn),
        }
    }
}
