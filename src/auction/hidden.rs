use alloc::collections::BTreeMap;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::error::ActionError;
use crate::player::{Player, clockwise_from, seat_of};

use super::{Intent, Sale, ensure_funds};

/// Hidden auction: every player, the auctioneer included, seals one bid.
///
/// The highest bid wins. Ties go to the tied player seated nearest the
/// auctioneer going clockwise, the auctioneer first. If nobody bids above 0
/// the auctioneer keeps the painting for free.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HiddenAuction {
    /// The player selling the painting.
    pub auctioneer: u8,
    /// The painting on offer.
    pub card: Card,
    /// Bids sealed so far.
    pub sealed_bids: BTreeMap<u8, usize>,
    /// Players who have not sealed a bid yet, auctioneer first then clockwise.
    pub pending: Vec<u8>,
    /// Every bidder in tie-break order, auctioneer first then clockwise.
    seating: Vec<u8>,
}

impl HiddenAuction {
    pub(crate) fn new(card: Card, auctioneer: u8, players: &[Player]) -> Self {
        let mut seating = Vec::with_capacity(players.len());
        if seat_of(players, auctioneer).is_some() {
            seating.push(auctioneer);
        }
        seating.extend(clockwise_from(players, auctioneer));

        Self {
            auctioneer,
            card,
            sealed_bids: BTreeMap::new(),
            pending: seating.clone(),
            seating,
        }
    }

    pub(super) fn apply(
        &mut self,
        player: u8,
        intent: Intent,
        players: &[Player],
    ) -> Result<Option<Sale>, ActionError> {
        match intent {
            Intent::Bid(amount) => self.seal(player, amount, players),
            Intent::Pass => self.seal(player, 0, players),
            Intent::ForceSealed => {
                for bidder in core::mem::take(&mut self.pending) {
                    self.sealed_bids.insert(bidder, 0);
                }
                Ok(Some(self.resolve()))
            }
            _ => Err(ActionError::OutOfTurn),
        }
    }

    fn seal(
        &mut self,
        player: u8,
        amount: usize,
        players: &[Player],
    ) -> Result<Option<Sale>, ActionError> {
        let Some(position) = self.pending.iter().position(|&id| id == player) else {
            return Err(ActionError::OutOfTurn);
        };
        ensure_funds(players, player, amount)?;

        self.pending.remove(position);
        self.sealed_bids.insert(player, amount);

        if self.pending.is_empty() {
            Ok(Some(self.resolve()))
        } else {
            Ok(None)
        }
    }

    fn resolve(&self) -> Sale {
        // `seating` is already in tie-break order, so the first maximum wins.
        let mut best: Option<(u8, usize)> = None;
        for &bidder in &self.seating {
            let bid = self.sealed_bids.get(&bidder).copied().unwrap_or(0);
            if best.is_none_or(|(_, top)| bid > top) {
                best = Some((bidder, bid));
            }
        }

        match best {
            Some((winner, price)) if price > 0 => Sale::to(winner, price),
            _ => Sale::to(self.auctioneer, 0),
        }
    }
}
