use tracing::info;

use crate::error::RoundError;

use super::{Game, MAX_PLAYERS, MIN_PLAYERS, RoundEnd, RoundPhase};

/// Cards dealt to each player at the start of each round, by player count.
const DEAL_SCHEDULE: [[usize; 4]; 3] = [
    [10, 6, 6, 0], // 3 players
    [9, 4, 4, 0],  // 4 players
    [8, 3, 3, 0],  // 5 players
];

/// Returns how many cards each player is dealt at the start of `round`.
///
/// Returns 0 for player counts or rounds outside the schedule.
///
/// ```
/// use gavel::game::cards_dealt;
///
/// assert_eq!(cards_dealt(4, 1), 9);
/// assert_eq!(cards_dealt(5, 4), 0);
/// ```
#[must_use]
pub const fn cards_dealt(player_count: usize, round: u8) -> usize {
    if player_count < MIN_PLAYERS || player_count > MAX_PLAYERS || round == 0 || round > 4 {
        return 0;
    }
    DEAL_SCHEDULE[player_count - MIN_PLAYERS][round as usize - 1]
}

impl Game {
    /// Deals the current round's cards and opens the auction phase.
    ///
    /// Cards are dealt one at a time in seating order. If the player whose
    /// turn it is has no cards, the turn passes clockwise; if nobody has any,
    /// the round ends immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, the round is not waiting to be
    /// dealt, fewer than three or more than five players are seated, or the
    /// deck runs short.
    pub fn start_round(&self) -> Result<(), RoundError> {
        let mut guard = self.state.lock();
        let state = &mut *guard;

        match state.round.phase {
            RoundPhase::GameOver => return Err(RoundError::GameAlreadyEnded),
            RoundPhase::Dealing => {}
            _ => return Err(RoundError::InvalidState),
        }

        let player_count = state.players.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return Err(RoundError::PlayerCount);
        }

        let per_player = cards_dealt(player_count, state.round.number);
        if state.deck.len() < per_player * player_count {
            return Err(RoundError::NotEnoughCards);
        }

        for _ in 0..per_player {
            for player in &mut state.players {
                if let Some(card) = state.deck.pop() {
                    player.hand.push(card);
                }
            }
        }

        state.round.phase = RoundPhase::Auction;
        info!(
            round = state.round.number,
            dealt = per_player,
            deck = state.deck.len(),
            "round started"
        );

        let pointer = state.turn_pointer;
        let has_cards = state
            .player(pointer)
            .is_some_and(|player| !player.hand.is_empty());
        if !has_cards {
            match state.next_with_cards(pointer) {
                Some(next) => state.turn_pointer = next,
                None => {
                    state.round.phase = RoundPhase::RoundEnding;
                    state.round.end_reason = Some(RoundEnd::HandsExhausted);
                    info!(round = state.round.number, "round ended with no cards to play");
                }
            }
        }

        Ok(())
    }
}
