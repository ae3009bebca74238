use alloc::vec::Vec;

use tracing::info;

use crate::error::RoundError;
use crate::result::{BankSale, RoundScore};
use crate::{scoring, settlement};

use super::{Game, Round, RoundPhase};

impl Game {
    /// Ranks the artists for the ended round and appends their value tiles.
    ///
    /// Moves the round to the bank sale. The round's artist counts are final
    /// from here on.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over or the round has not ended.
    pub fn score_round(&self) -> Result<RoundScore, RoundError> {
        let mut guard = self.state.lock();
        let state = &mut *guard;

        match state.round.phase {
            RoundPhase::GameOver => return Err(RoundError::GameAlreadyEnded),
            RoundPhase::RoundEnding => {}
            _ => return Err(RoundError::InvalidState),
        }

        let artists = scoring::score_round(
            &state.round.cards_sold_by_artist,
            &mut state.artist_board,
        );
        state.round.phase = RoundPhase::SellingToBank;
        info!(round = state.round.number, leader = %artists[0].artist, "round scored");

        Ok(RoundScore {
            round: state.round.number,
            artists,
        })
    }

    /// Sells every player's paintings to the bank at current artist values.
    ///
    /// After the last round this decides the winners and ends the game;
    /// otherwise the next round waits to be dealt.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over or the round has not been scored.
    pub fn sell_to_bank(&self) -> Result<BankSale, RoundError> {
        let mut guard = self.state.lock();
        let state = &mut *guard;

        match state.round.phase {
            RoundPhase::GameOver => return Err(RoundError::GameAlreadyEnded),
            RoundPhase::SellingToBank => {}
            _ => return Err(RoundError::InvalidState),
        }

        let round = state.round.number;
        let payouts = settlement::sell_to_bank(&mut state.players, &state.artist_board);

        if round >= self.options.rounds {
            let (standings, winners) = settlement::final_standings(&state.players, &payouts);
            state.winners.clone_from(&winners);
            state.round.phase = RoundPhase::GameOver;
            info!(round, winners = ?winners, "game over");

            return Ok(BankSale {
                round,
                payouts,
                standings: Some(standings),
                winners,
            });
        }

        state.round = Round::new(round + 1);
        info!(round, "paintings sold to the bank");

        Ok(BankSale {
            round,
            payouts,
            standings: None,
            winners: Vec::new(),
        })
    }
}
