//! Error types for game operations.
//!
//! Every error is a rejection of a single request; the game state is left
//! exactly as it was before the call.

use thiserror::Error;

/// Errors that can occur while seating players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JoinError {
    /// Players can only join before the first deal.
    #[error("players can only join before the first deal")]
    InvalidState,
    /// All seats are taken.
    #[error("the table is full")]
    TableFull,
}

/// Errors that can occur during player intents (card plays and auction decisions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// It is not this player's turn to play a card.
    #[error("not this player's turn")]
    NotYourTurn,
    /// The player cannot act now within the current auction.
    #[error("player cannot act at this point of the auction")]
    OutOfTurn,
    /// The card is not in the player's hand.
    #[error("card is not in the player's hand")]
    CardNotInHand,
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// Bid is not strictly greater than the current bid.
    #[error("bid must be greater than the current bid")]
    InvalidBid,
    /// Price is zero or exceeds the auctioneer's money.
    #[error("price must be positive and within the auctioneer's money")]
    InvalidPrice,
    /// Second card is of another artist, is a double card, or would end the round.
    #[error("card cannot be offered as a second card")]
    IneligibleSecondCard,
    /// There is no auction in progress.
    #[error("no active auction")]
    NoActiveAuction,
    /// An auction is already in progress.
    #[error("an auction is already active")]
    AuctionAlreadyActive,
    /// The game has ended.
    #[error("the game has already ended")]
    GameAlreadyEnded,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Invalid round phase for this action.
    #[error("invalid round phase for this action")]
    InvalidState,
}

/// Errors that can occur while dealing, scoring, or closing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Invalid round phase for this operation.
    #[error("invalid round phase for this operation")]
    InvalidState,
    /// Fewer than three or more than five players are seated.
    #[error("the game needs three to five players")]
    PlayerCount,
    /// Not enough cards left in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
    /// The game has ended.
    #[error("the game has already ended")]
    GameAlreadyEnded,
}
