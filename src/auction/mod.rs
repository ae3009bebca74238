//! Auction state machines, one per auction type.
//!
//! An [`Auction`] only collects decisions and decides who wins at what price.
//! It reads players' money for funds checks but never changes money, hands,
//! or purchases; the game applies a finished [`AuctionOutcome`] through
//! [`settlement`](crate::settlement).

use alloc::vec;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::card::{AuctionType, Card};
use crate::error::ActionError;
use crate::options::GameOptions;
use crate::player::{Player, money_of};

mod double;
mod fixed_price;
mod hidden;
mod one_offer;
mod open;

pub use double::DoubleAuction;
pub use fixed_price::FixedPriceAuction;
pub use hidden::HiddenAuction;
pub use one_offer::{OneOfferAuction, OneOfferPhase};
pub use open::OpenAuction;

/// A decision submitted by a player to the active auction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Bid an amount (a sealed bid in a hidden auction).
    Bid(usize),
    /// Decline to act. In a hidden auction this seals a bid of 0.
    Pass,
    /// Open auction: the auctioneer accepts no more bids.
    Close,
    /// Fixed price auction: the auctioneer names the price.
    SetPrice(usize),
    /// Fixed price auction: buy at the named price.
    BuyAtPrice,
    /// Double auction: add a second card, or decline with `None`.
    OfferSecondCard(Option<Card>),
    /// One offer auction: the auctioneer sells to the highest bidder.
    AcceptBid,
    /// One offer auction: the auctioneer keeps the painting over the highest bid.
    Outbid,
    /// One offer auction: the auctioneer takes the unbid painting for free.
    TakeFree,
    /// Hidden auction: seal a bid of 0 for everyone still pending.
    ForceSealed,
}

/// Winner and price decided by an auction variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Sale {
    pub winner: u8,
    pub price: usize,
}

impl Sale {
    pub(crate) const fn to(winner: u8, price: usize) -> Self {
        Self { winner, price }
    }
}

/// The terminal result of an auction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AuctionOutcome {
    /// The player receiving the proceeds.
    pub auctioneer: u8,
    /// The player who gets the paintings. May equal `auctioneer`.
    pub winner: u8,
    /// Price paid by the winner. May be 0.
    pub price: usize,
    /// Paintings changing hands: one card, or two for a double pair.
    pub lot: Vec<Card>,
}

impl AuctionOutcome {
    /// Returns whether the auctioneer bought their own lot.
    #[must_use]
    pub const fn is_self_purchase(&self) -> bool {
        self.winner == self.auctioneer
    }
}

/// Result of applying an intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    /// The auction is still collecting decisions.
    Pending,
    /// The auction has finished.
    Closed(AuctionOutcome),
}

/// Who the auction is waiting on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Awaiting {
    /// Anyone may bid; the given auctioneer closes the auction.
    Anyone {
        /// The player who may close the auction.
        closer: u8,
    },
    /// A single player must decide.
    Player(u8),
    /// These players still have to seal a bid.
    Sealed(Vec<u8>),
}

/// The active auction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Auction {
    /// Open auction.
    Open(OpenAuction),
    /// One offer auction.
    OneOffer(OneOfferAuction),
    /// Hidden auction.
    Hidden(HiddenAuction),
    /// Fixed price auction.
    FixedPrice(FixedPriceAuction),
    /// Double auction.
    Double(DoubleAuction),
}

impl Auction {
    /// Starts an auction of the type printed on `card`.
    ///
    /// `sold_before` is the number of cards of the card's artist already
    /// counted this round; double auctions use it to refuse second cards that
    /// would end the round.
    #[must_use]
    pub fn start(card: Card, auctioneer: u8, players: &[Player], sold_before: u8) -> Self {
        match card.auction_type {
            AuctionType::Open => Self::Open(OpenAuction::new(card, auctioneer)),
            AuctionType::OneOffer => {
                Self::OneOffer(OneOfferAuction::new(card, auctioneer, players))
            }
            AuctionType::Hidden => Self::Hidden(HiddenAuction::new(card, auctioneer, players)),
            AuctionType::FixedPrice => {
                Self::FixedPrice(FixedPriceAuction::new(card, auctioneer, players))
            }
            AuctionType::Double => {
                Self::Double(DoubleAuction::new(card, auctioneer, players, sold_before))
            }
        }
    }

    /// Returns the auction type.
    #[must_use]
    pub const fn kind(&self) -> AuctionType {
        match self {
            Self::Open(_) => AuctionType::Open,
            Self::OneOffer(_) => AuctionType::OneOffer,
            Self::Hidden(_) => AuctionType::Hidden,
            Self::FixedPrice(_) => AuctionType::FixedPrice,
            Self::Double(_) => AuctionType::Double,
        }
    }

    /// Returns the card that started this auction.
    #[must_use]
    pub const fn card(&self) -> &Card {
        match self {
            Self::Open(auction) => &auction.card,
            Self::OneOffer(auction) => &auction.card,
            Self::Hidden(auction) => &auction.card,
            Self::FixedPrice(auction) => &auction.card,
            Self::Double(auction) => &auction.card,
        }
    }

    /// Returns the player who will receive the proceeds.
    ///
    /// For a double auction with a second card, this is the player who added it.
    #[must_use]
    pub fn auctioneer(&self) -> u8 {
        match self {
            Self::Open(auction) => auction.auctioneer,
            Self::OneOffer(auction) => auction.auctioneer,
            Self::Hidden(auction) => auction.auctioneer,
            Self::FixedPrice(auction) => auction.auctioneer,
            Self::Double(auction) => auction.current_auctioneer(),
        }
    }

    /// Returns who must act next.
    #[must_use]
    pub fn awaiting(&self) -> Awaiting {
        match self {
            Self::Open(auction) => Awaiting::Anyone {
                closer: auction.auctioneer,
            },
            Self::OneOffer(auction) => Awaiting::Player(auction.current_player()),
            Self::Hidden(auction) => Awaiting::Sealed(auction.pending.clone()),
            Self::FixedPrice(auction) => Awaiting::Player(auction.current_player()),
            Self::Double(auction) => auction.awaiting(),
        }
    }

    /// Returns the seating order the auction visits, if it has one.
    ///
    /// Open and hidden auctions have no turn order and return an empty slice.
    #[must_use]
    pub fn turn_order(&self) -> &[u8] {
        match self {
            Self::Open(_) | Self::Hidden(_) => &[],
            Self::OneOffer(auction) => &auction.turn_order,
            Self::FixedPrice(auction) => &auction.turn_order,
            Self::Double(auction) => auction.turn_order(),
        }
    }

    /// Closes the auction before any decision if it cannot take one.
    ///
    /// Call once right after [`Auction::start`]. Only a fixed price auction
    /// whose auctioneer has no money closes here, as a free self-purchase;
    /// every other auction stays pending.
    #[must_use]
    pub fn open(&mut self, players: &[Player]) -> Progress {
        let auctioneer = self.auctioneer();
        let sale = match self {
            Self::FixedPrice(auction) => auction.open(players),
            Self::Open(_) | Self::OneOffer(_) | Self::Hidden(_) | Self::Double(_) => None,
        };

        sale.map_or(Progress::Pending, |sale| {
            Progress::Closed(AuctionOutcome {
                auctioneer,
                winner: sale.winner,
                price: sale.price,
                lot: vec![*self.card()],
            })
        })
    }

    /// Applies an intent from `player`.
    ///
    /// The auction is unchanged when an error is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the player may not act now or the intent breaks
    /// the auction's bidding or funds rules.
    pub fn apply(
        &mut self,
        player: u8,
        intent: Intent,
        players: &[Player],
        options: &GameOptions,
    ) -> Result<Progress, ActionError> {
        let auctioneer = self.auctioneer();
        let sale = match self {
            Self::Open(auction) => auction.apply(player, intent, players)?,
            Self::OneOffer(auction) => auction.apply(player, intent, players, options)?,
            Self::Hidden(auction) => auction.apply(player, intent, players)?,
            Self::FixedPrice(auction) => auction.apply(player, intent, players)?,
            Self::Double(auction) => return auction.apply(player, intent, players, options),
        };

        Ok(sale.map_or(Progress::Pending, |sale| {
            Progress::Closed(AuctionOutcome {
                auctioneer,
                winner: sale.winner,
                price: sale.price,
                lot: vec![*self.card()],
            })
        }))
    }
}

/// Checks that `player` can afford `amount`.
pub(crate) fn ensure_funds(
    players: &[Player],
    player: u8,
    amount: usize,
) -> Result<(), ActionError> {
    let money = money_of(players, player).ok_or(ActionError::PlayerNotFound)?;
    if amount > money {
        return Err(ActionError::InsufficientFunds);
    }
    Ok(())
}
