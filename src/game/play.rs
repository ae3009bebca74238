use tracing::debug;

use crate::auction::{Auction, AuctionOutcome, Intent, Progress};
use crate::card::{AuctionType, CardId};
use crate::error::ActionError;
use crate::settlement;

use super::{Game, GameState, RoundEnd, RoundPhase, end_round};

/// What happened when a card was played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    /// An auction of this type is now active.
    AuctionStarted(AuctionType),
    /// The auction closed as soon as it started and has been settled.
    AuctionClosed(AuctionOutcome),
    /// The card was the artist's round-ending card; it stays unsold.
    RoundEnded,
}

impl Game {
    /// Plays a card from the player's hand.
    ///
    /// If the card would bring its artist to the round-ending count, it is not
    /// auctioned: it is set aside unsold, still counts for its artist, and the
    /// round ends at once.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, the round is not in the auction
    /// phase, an auction is already running, it is not the player's turn, or
    /// the player does not hold the card.
    pub fn play_card(&self, player_id: u8, card_id: CardId) -> Result<PlayOutcome, ActionError> {
        let mut guard = self.state.lock();
        let state = &mut *guard;

        match state.round.phase {
            RoundPhase::GameOver => return Err(ActionError::GameAlreadyEnded),
            RoundPhase::Auction => {}
            _ => return Err(ActionError::InvalidState),
        }
        if state.round.active_auction.is_some() {
            return Err(ActionError::AuctionAlreadyActive);
        }

        if state.player(player_id).is_none() {
            return Err(ActionError::PlayerNotFound);
        }
        if state.turn_pointer != player_id {
            return Err(ActionError::NotYourTurn);
        }
        let card = state
            .player_mut(player_id)
            .and_then(|player| player.take_card(card_id))
            .ok_or(ActionError::CardNotInHand)?;

        let sold_before = state.round.cards_sold_by_artist.get(card.artist);
        debug!(player = player_id, card = card.id, artist = %card.artist, kind = ?card.auction_type, "card played");

        if sold_before + 1 >= self.options.round_ending_count {
            state.round.cards_sold_by_artist.add(card.artist, 1);
            state.round.unsold_cards.push(card);
            end_round(state, RoundEnd::ArtistLimit(card.artist), player_id);
            return Ok(PlayOutcome::RoundEnded);
        }

        let mut auction = Auction::start(card, player_id, &state.players, sold_before);
        if let Progress::Closed(outcome) = auction.open(&state.players) {
            self.settle(state, &outcome);
            return Ok(PlayOutcome::AuctionClosed(outcome));
        }
        state.round.active_auction = Some(auction);
        drop(guard);

        Ok(PlayOutcome::AuctionStarted(card.auction_type))
    }

    /// Bids in the active auction. In a hidden auction this seals the bid.
    ///
    /// Returns the outcome if the bid finished the auction.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no auction, the player may not bid now,
    /// the bid does not beat the current bid, or the player lacks funds.
    pub fn submit_bid(
        &self,
        player_id: u8,
        amount: usize,
    ) -> Result<Option<AuctionOutcome>, ActionError> {
        self.apply_intent(player_id, Intent::Bid(amount))
    }

    /// Declines to act: passes a one offer or fixed price turn, declines to
    /// add a double's second card, or seals a 0 bid in a hidden auction.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no auction or the player may not pass now.
    pub fn pass(&self, player_id: u8) -> Result<Option<AuctionOutcome>, ActionError> {
        self.apply_intent(player_id, Intent::Pass)
    }

    /// Closes an open auction. Only its auctioneer may close it.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no open auction or the player is not its
    /// auctioneer.
    pub fn close_auction(&self, player_id: u8) -> Result<Option<AuctionOutcome>, ActionError> {
        self.apply_intent(player_id, Intent::Close)
    }

    /// Names the price of a fixed price auction.
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not the auctioneer of a fixed price
    /// auction awaiting its price, or the price is 0 or above their money.
    pub fn set_price(
        &self,
        player_id: u8,
        amount: usize,
    ) -> Result<Option<AuctionOutcome>, ActionError> {
        self.apply_intent(player_id, Intent::SetPrice(amount))
    }

    /// Buys the painting of a fixed price auction at the named price.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn to buy or they lack funds.
    pub fn buy_at_price(&self, player_id: u8) -> Result<Option<AuctionOutcome>, ActionError> {
        self.apply_intent(player_id, Intent::BuyAtPrice)
    }

    /// Adds a second card to a double auction, or declines with `None`.
    ///
    /// A player who adds a card becomes the auctioneer of the pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the player does not hold the card, it is not their
    /// turn to decide, or the card is not eligible.
    pub fn offer_second_card(
        &self,
        player_id: u8,
        card_id: Option<CardId>,
    ) -> Result<Option<AuctionOutcome>, ActionError> {
        let mut guard = self.state.lock();
        self.apply_locked(&mut guard, player_id, |state| {
            let card = match card_id {
                Some(id) => Some(
                    state
                        .player(player_id)
                        .and_then(|player| player.holds(id))
                        .ok_or(ActionError::CardNotInHand)?,
                ),
                None => None,
            };
            Ok(Intent::OfferSecondCard(card))
        })
    }

    /// Accepts the highest bid of a one offer auction.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the auctioneer's decision or nobody bid.
    pub fn accept_bid(&self, player_id: u8) -> Result<Option<AuctionOutcome>, ActionError> {
        self.apply_intent(player_id, Intent::AcceptBid)
    }

    /// Keeps a one offer painting over the highest bid.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the auctioneer's decision, nobody bid, or
    /// the auctioneer cannot pay under [`OutbidPayment::Bank`](crate::OutbidPayment::Bank).
    pub fn outbid(&self, player_id: u8) -> Result<Option<AuctionOutcome>, ActionError> {
        self.apply_intent(player_id, Intent::Outbid)
    }

    /// Takes an unbid one offer painting for free.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the auctioneer's decision or a bid exists.
    pub fn take_free(&self, player_id: u8) -> Result<Option<AuctionOutcome>, ActionError> {
        self.apply_intent(player_id, Intent::TakeFree)
    }

    /// Seals a 0 bid for every player still pending in a hidden auction and
    /// resolves it.
    ///
    /// # Errors
    ///
    /// Returns an error if no hidden auction is collecting bids.
    pub fn force_sealed_bids(&self) -> Result<Option<AuctionOutcome>, ActionError> {
        let mut guard = self.state.lock();
        let auctioneer = guard
            .round
            .active_auction
            .as_ref()
            .map(Auction::auctioneer)
            .ok_or(ActionError::NoActiveAuction)?;
        self.apply_locked(&mut guard, auctioneer, |_| Ok(Intent::ForceSealed))
    }

    fn apply_intent(
        &self,
        player_id: u8,
        intent: Intent,
    ) -> Result<Option<AuctionOutcome>, ActionError> {
        let mut guard = self.state.lock();
        self.apply_locked(&mut guard, player_id, |_| Ok(intent))
    }

    fn apply_locked(
        &self,
        state: &mut GameState,
        player_id: u8,
        intent: impl FnOnce(&GameState) -> Result<Intent, ActionError>,
    ) -> Result<Option<AuctionOutcome>, ActionError> {
        if state.round.phase == RoundPhase::GameOver {
            return Err(ActionError::GameAlreadyEnded);
        }
        if state.round.active_auction.is_none() {
            return Err(ActionError::NoActiveAuction);
        }
        if state.player(player_id).is_none() {
            return Err(ActionError::PlayerNotFound);
        }

        let intent = intent(state)?;
        let Some(auction) = state.round.active_auction.as_mut() else {
            return Err(ActionError::NoActiveAuction);
        };
        let progress = auction.apply(player_id, intent, &state.players, &self.options)?;
        debug!(player = player_id, intent = ?intent, "intent applied");

        if let Intent::OfferSecondCard(Some(card)) = intent {
            if let Some(player) = state.player_mut(player_id) {
                player.take_card(card.id);
            }
        }

        match progress {
            Progress::Pending => Ok(None),
            Progress::Closed(outcome) => {
                state.round.active_auction = None;
                self.settle(state, &outcome);
                Ok(Some(outcome))
            }
        }
    }

    /// Applies a finished auction and moves the turn on.
    fn settle(&self, state: &mut GameState, outcome: &AuctionOutcome) {
        settlement::settle_auction(&mut state.players, outcome);
        for card in &outcome.lot {
            state.round.cards_sold_by_artist.add(card.artist, 1);
        }
        debug!(
            auctioneer = outcome.auctioneer,
            winner = outcome.winner,
            price = outcome.price,
            paintings = outcome.lot.len(),
            "auction settled"
        );

        // The player who played the last card is the auctioneer of the lot.
        match state.next_with_cards(outcome.auctioneer) {
            Some(next) => state.turn_pointer = next,
            None => end_round(state, RoundEnd::HandsExhausted, outcome.auctioneer),
        }
    }
}
