//! Game engine and round control.

use alloc::string::String;
use alloc::vec::Vec;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::sync::Mutex;

use crate::auction::{Auction, Awaiting};
use crate::board::ArtistValueBoard;
use crate::card::{Artist, Card, full_deck};
use crate::error::JoinError;
use crate::options::GameOptions;
use crate::player::Player;

mod play;
mod round_end;
mod setup;
pub mod state;

pub use play::PlayOutcome;
pub use setup::cards_dealt;
pub use state::{ArtistCounts, GameState, Round, RoundEnd, RoundPhase};

/// Maximum number of seated players.
pub const MAX_PLAYERS: usize = 5;

/// Minimum number of players needed to deal.
pub const MIN_PLAYERS: usize = 3;

/// An art auction game that manages players, auctions, and round scoring.
///
/// All state lives in a single [`GameState`] behind one lock, and every
/// operation holds that lock for its whole duration: an intent either applies
/// completely or is rejected with the state untouched.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    pub state: Mutex<GameState>,
}

impl Game {
    /// Creates a new game, shuffling the deck with the given seed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gavel::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// for name in ["Ana", "Ben", "Cy"] {
    ///     game.join(name).unwrap();
    /// }
    /// game.start_round().unwrap();
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = full_deck();
        deck.shuffle(&mut rng);

        Self::from_state(options, GameState::new(deck))
    }

    /// Resumes a game from a state snapshot.
    #[must_use]
    pub const fn from_state(options: GameOptions, state: GameState) -> Self {
        Self {
            options,
            state: Mutex::new(state),
        }
    }

    /// Consumes the game and returns its state.
    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state.into_inner()
    }

    /// Seats a new player with the starting money.
    ///
    /// Returns the assigned player ID. Seating order is join order.
    ///
    /// # Errors
    ///
    /// Returns an error if cards have already been dealt or all seats are taken.
    pub fn join(&self, name: impl Into<String>) -> Result<u8, JoinError> {
        let mut state = self.state.lock();
        if state.round.number != 1 || state.round.phase != RoundPhase::Dealing {
            return Err(JoinError::InvalidState);
        }
        if state.players.len() >= MAX_PLAYERS {
            return Err(JoinError::TableFull);
        }

        let id = state.players.len() as u8;
        let name = name.into();
        debug!(player = id, name = %name, "player joined");
        state
            .players
            .push(Player::new(id, name, self.options.starting_money));
        drop(state);

        Ok(id)
    }

    /// Returns the number of seated players.
    pub fn player_count(&self) -> usize {
        self.state.lock().players.len()
    }

    /// Returns a copy of the full game state.
    pub fn snapshot(&self) -> GameState {
        self.state.lock().clone()
    }

    /// Returns the current round phase.
    pub fn phase(&self) -> RoundPhase {
        self.state.lock().round.phase
    }

    /// Returns the current round number.
    pub fn round_number(&self) -> u8 {
        self.state.lock().round.number
    }

    /// Returns the player whose turn it is to play a card.
    ///
    /// Returns `None` outside the auction phase or while an auction is running.
    pub fn current_player(&self) -> Option<u8> {
        let state = self.state.lock();
        (state.round.phase == RoundPhase::Auction && state.round.active_auction.is_none())
            .then_some(state.turn_pointer)
    }

    /// Returns a copy of the auction in progress.
    pub fn active_auction(&self) -> Option<Auction> {
        self.state.lock().round.active_auction.clone()
    }

    /// Returns who the auction in progress is waiting on.
    pub fn awaiting(&self) -> Option<Awaiting> {
        self.state
            .lock()
            .round
            .active_auction
            .as_ref()
            .map(Auction::awaiting)
    }

    /// Returns a copy of the artist value board.
    pub fn artist_board(&self) -> ArtistValueBoard {
        self.state.lock().artist_board.clone()
    }

    /// Returns the current value of one painting by `artist`.
    pub fn artist_value(&self, artist: Artist) -> usize {
        self.state.lock().artist_board.value(artist)
    }

    /// Returns the cards of `artist` counted so far this round.
    pub fn cards_sold(&self, artist: Artist) -> u8 {
        self.state.lock().round.cards_sold_by_artist.get(artist)
    }

    /// Returns the current money for the specified player.
    pub fn get_money(&self, player_id: u8) -> Option<usize> {
        self.state.lock().player(player_id).map(|p| p.money)
    }

    /// Returns the player's hand.
    pub fn get_hand(&self, player_id: u8) -> Option<Vec<Card>> {
        self.state.lock().player(player_id).map(|p| p.hand.clone())
    }

    /// Returns the paintings the player bought this round.
    pub fn get_purchases(&self, player_id: u8) -> Option<Vec<Card>> {
        self.state.lock().player(player_id).map(|p| p.purchases.clone())
    }

    /// Returns the winners; empty until the game is over.
    pub fn winners(&self) -> Vec<u8> {
        self.state.lock().winners.clone()
    }

    /// Returns the number of undealt cards.
    pub fn cards_remaining(&self) -> usize {
        self.state.lock().deck.len()
    }
}

/// Ends the round in progress. The next round opens clockwise of `ender`.
fn end_round(state: &mut GameState, reason: RoundEnd, ender: u8) {
    state.round.phase = RoundPhase::RoundEnding;
    state.round.end_reason = Some(reason);
    state.turn_pointer = state.next_seat(ender);
    info!(round = state.round.number, reason = ?reason, "round ended");
}
