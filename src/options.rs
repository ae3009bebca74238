//! Game configuration options.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What an auctioneer pays when outbidding the highest One Offer bid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum OutbidPayment {
    /// The auctioneer keeps the painting and pays nothing.
    #[default]
    Free,
    /// The auctioneer pays the current bid plus one to the bank.
    Bank,
}

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use gavel::{GameOptions, OutbidPayment};
///
/// let options = GameOptions::default()
///     .with_starting_money(80)
///     .with_outbid_payment(OutbidPayment::Bank);
/// assert_eq!(options.rounds, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameOptions {
    /// Money each player starts with.
    pub starting_money: usize,
    /// Number of rounds in a game.
    pub rounds: u8,
    /// Cards of one artist that end the round when reached.
    pub round_ending_count: u8,
    /// Payment rule for a One Offer auctioneer outbid.
    pub outbid_payment: OutbidPayment,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_money: 100,
            rounds: 4,
            round_ending_count: 5,
            outbid_payment: OutbidPayment::Free,
        }
    }
}

impl GameOptions {
    /// Sets the starting money.
    ///
    /// # Example
    ///
    /// ```
    /// use gavel::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_money(120);
    /// assert_eq!(options.starting_money, 120);
    /// ```
    #[must_use]
    pub const fn with_starting_money(mut self, money: usize) -> Self {
        self.starting_money = money;
        self
    }

    /// Sets the number of rounds.
    ///
    /// Values outside `1..=4` are clamped, since the deal schedule covers four rounds.
    #[must_use]
    pub const fn with_rounds(mut self, rounds: u8) -> Self {
        self.rounds = if rounds == 0 {
            1
        } else if rounds > 4 {
            4
        } else {
            rounds
        };
        self
    }

    /// Sets how many cards of one artist end a round.
    ///
    /// # Example
    ///
    /// ```
    /// use gavel::GameOptions;
    ///
    /// let options = GameOptions::default().with_round_ending_count(6);
    /// assert_eq!(options.round_ending_count, 6);
    /// ```
    #[must_use]
    pub const fn with_round_ending_count(mut self, count: u8) -> Self {
        self.round_ending_count = count;
        self
    }

    /// Sets the One Offer outbid payment rule.
    #[must_use]
    pub const fn with_outbid_payment(mut self, payment: OutbidPayment) -> Self {
        self.outbid_payment = payment;
        self
    }
}
