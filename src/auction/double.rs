use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::error::ActionError;
use crate::options::GameOptions;
use crate::player::{Player, clockwise_from};

use super::{Auction, AuctionOutcome, Awaiting, Intent, Progress};

/// Double auction.
///
/// Before any bidding, the other players are asked clockwise whether they add
/// a second painting of the same artist. The first to do so becomes the
/// auctioneer of the pair, which is then sold under the auction type of the
/// second card. If nobody adds one, the original auctioneer keeps the double
/// card for free.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DoubleAuction {
    /// The player who played the double card.
    pub auctioneer: u8,
    /// The double card.
    pub card: Card,
    /// The second card, once offered.
    pub second_card: Option<Card>,
    /// Players asked for a second card, clockwise from the auctioneer.
    pub second_card_turn_order: Vec<u8>,
    /// Index into `second_card_turn_order` of the player to decide.
    pub second_card_index: usize,
    /// The auction selling the pair, once a second card is offered.
    pub resolved_auction: Option<Box<Auction>>,
    /// Cards of this artist counted this round before the double card.
    pub sold_before: u8,
}

impl DoubleAuction {
    pub(crate) fn new(card: Card, auctioneer: u8, players: &[Player], sold_before: u8) -> Self {
        Self {
            auctioneer,
            card,
            second_card: None,
            second_card_turn_order: clockwise_from(players, auctioneer),
            second_card_index: 0,
            resolved_auction: None,
            sold_before,
        }
    }

    /// Returns whether `card` may be added as the second card.
    ///
    /// The pair must not push the artist's count to the round-ending count,
    /// since that would end the round with the pair's fate undecided.
    #[must_use]
    pub fn accepts(&self, card: &Card, options: &GameOptions) -> bool {
        card.artist == self.card.artist
            && !card.is_double()
            && self.sold_before + 2 < options.round_ending_count
    }

    /// Returns the player receiving the proceeds.
    #[must_use]
    pub fn current_auctioneer(&self) -> u8 {
        self.resolved_auction
            .as_ref()
            .map_or(self.auctioneer, |inner| inner.auctioneer())
    }

    fn offerer(&self) -> Option<u8> {
        self.second_card_turn_order
            .get(self.second_card_index)
            .copied()
    }

    pub(super) fn awaiting(&self) -> Awaiting {
        match &self.resolved_auction {
            Some(inner) => inner.awaiting(),
            None => Awaiting::Player(self.offerer().unwrap_or(self.auctioneer)),
        }
    }

    pub(super) fn turn_order(&self) -> &[u8] {
        match &self.resolved_auction {
            Some(inner) => inner.turn_order(),
            None => &self.second_card_turn_order,
        }
    }

    pub(super) fn apply(
        &mut self,
        player: u8,
        intent: Intent,
        players: &[Player],
        options: &GameOptions,
    ) -> Result<Progress, ActionError> {
        if let Some(inner) = self.resolved_auction.as_mut() {
            let progress = inner.apply(player, intent, players, options)?;
            return Ok(match progress {
                Progress::Closed(mut outcome) => {
                    outcome.lot.insert(0, self.card);
                    Progress::Closed(outcome)
                }
                Progress::Pending => Progress::Pending,
            });
        }

        if self.offerer() != Some(player) {
            return Err(ActionError::OutOfTurn);
        }

        match intent {
            Intent::OfferSecondCard(Some(second)) => {
                if !self.accepts(&second, options) {
                    return Err(ActionError::IneligibleSecondCard);
                }

                let mut inner = Auction::start(second, player, players, self.sold_before + 1);
                let progress = match inner.open(players) {
                    Progress::Closed(mut outcome) => {
                        outcome.lot.insert(0, self.card);
                        Progress::Closed(outcome)
                    }
                    Progress::Pending => Progress::Pending,
                };
                self.second_card = Some(second);
                self.resolved_auction = Some(Box::new(inner));
                Ok(progress)
            }
            Intent::OfferSecondCard(None) | Intent::Pass => {
                self.second_card_index += 1;
                if self.second_card_index < self.second_card_turn_order.len() {
                    return Ok(Progress::Pending);
                }

                Ok(Progress::Closed(AuctionOutcome {
                    auctioneer: self.auctioneer,
                    winner: self.auctioneer,
                    price: 0,
                    lot: vec![self.card],
                }))
            }
            _ => Err(ActionError::OutOfTurn),
        }
    }
}
