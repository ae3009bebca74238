#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::error::ActionError;
use crate::player::Player;

use super::{Intent, Sale, ensure_funds};

/// Open auction: anyone, the auctioneer included, may raise at any time
/// until the auctioneer closes bidding.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OpenAuction {
    /// The player selling the painting.
    pub auctioneer: u8,
    /// The painting on offer.
    pub card: Card,
    /// Highest bid so far (0 if none).
    pub current_bid: usize,
    /// Player holding the highest bid.
    pub current_bidder: Option<u8>,
}

impl OpenAuction {
    pub(crate) const fn new(card: Card, auctioneer: u8) -> Self {
        Self {
            auctioneer,
            card,
            current_bid: 0,
            current_bidder: None,
        }
    }

    pub(super) fn apply(
        &mut self,
        player: u8,
        intent: Intent,
        players: &[Player],
    ) -> Result<Option<Sale>, ActionError> {
        match intent {
            Intent::Bid(amount) => {
                if amount <= self.current_bid {
                    return Err(ActionError::InvalidBid);
                }
                ensure_funds(players, player, amount)?;

                self.current_bid = amount;
                self.current_bidder = Some(player);
                Ok(None)
            }
            Intent::Close => {
                if player != self.auctioneer {
                    return Err(ActionError::OutOfTurn);
                }

                Ok(Some(match self.current_bidder {
                    Some(bidder) => Sale::to(bidder, self.current_bid),
                    None => Sale::to(self.auctioneer, 0),
                }))
            }
            _ => Err(ActionError::OutOfTurn),
        }
    }
}
