//! An auction and round-scoring rules engine for sealed-hand art auction card
//! games for three to five players.
//!
//! The crate provides a [`Game`] type that runs the full game: dealing,
//! five auction protocols (open, one offer, hidden, fixed price, double),
//! round ending when an artist's fifth painting appears, artist ranking and
//! value tiles, bank sales, and final standings.
//!
//! Players act by submitting intents ([`Game::play_card`],
//! [`Game::submit_bid`], [`Game::pass`], ...). Each intent is either applied
//! completely or rejected with an error and no change to the state.
//!
//! # Example
//!
//! ```
//! use gavel::{Game, GameOptions, RoundPhase};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! for name in ["Ana", "Ben", "Cy"] {
//!     game.join(name).unwrap();
//! }
//! game.start_round().unwrap();
//! assert_eq!(game.phase(), RoundPhase::Auction);
//! assert_eq!(game.current_player(), Some(0));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod auction;
pub mod board;
pub mod card;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod result;
pub mod scoring;
pub mod settlement;
mod sync;

// Re-export main types
pub use auction::{Auction, AuctionOutcome, Awaiting, Intent, Progress};
pub use board::ArtistValueBoard;
pub use card::{Artist, AuctionType, Card, CardId, DECK_SIZE};
pub use error::{ActionError, JoinError, RoundError};
pub use game::{ArtistCounts, Game, GameState, PlayOutcome, Round, RoundEnd, RoundPhase};
pub use options::{GameOptions, OutbidPayment};
pub use player::Player;
pub use result::{ArtistScore, BankSale, Payout, RoundScore, Standing};
