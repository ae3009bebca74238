//! Money and ownership transfers.
//!
//! These functions are the only place money changes hands. Each is applied
//! once per terminal event; the game removes a settled auction from its slot
//! before settling, so a settlement cannot be replayed.

use alloc::vec::Vec;

use crate::auction::AuctionOutcome;
use crate::board::ArtistValueBoard;
use crate::player::Player;
use crate::result::{Payout, Standing};

/// Transfers money and paintings for a finished auction.
///
/// A buyer other than the auctioneer pays the auctioneer. An auctioneer
/// buying their own lot pays the bank, which removes the money from play.
pub fn settle_auction(players: &mut [Player], outcome: &AuctionOutcome) {
    if let Some(buyer) = players.iter_mut().find(|p| p.id == outcome.winner) {
        debug_assert!(buyer.money >= outcome.price, "auction closed above the buyer's funds");
        buyer.money -= outcome.price;
        buyer.purchases.extend_from_slice(&outcome.lot);
    }

    if !outcome.is_self_purchase() {
        if let Some(seller) = players.iter_mut().find(|p| p.id == outcome.auctioneer) {
            seller.money += outcome.price;
        }
    }
}

/// Pays every player the current value of each painting they bought this
/// round, then clears their purchases.
pub fn sell_to_bank(players: &mut [Player], board: &ArtistValueBoard) -> Vec<Payout> {
    players
        .iter_mut()
        .map(|player| {
            let amount = player
                .purchases
                .iter()
                .map(|card| board.value(card.artist))
                .sum();
            let paintings = player.purchases.len();

            player.money += amount;
            player.purchases.clear();

            Payout {
                player_id: player.id,
                paintings,
                amount,
            }
        })
        .collect()
}

/// Ranks players by money, then by paintings sold in the final bank sale,
/// best first.
///
/// Returns the standings and the winner set: every player tied with the
/// leader on both keys.
#[must_use]
pub fn final_standings(players: &[Player], payouts: &[Payout]) -> (Vec<Standing>, Vec<u8>) {
    let mut standings: Vec<Standing> = players
        .iter()
        .map(|player| Standing {
            player_id: player.id,
            money: player.money,
            paintings: payouts
                .iter()
                .find(|payout| payout.player_id == player.id)
                .map_or(0, |payout| payout.paintings),
        })
        .collect();

    standings.sort_by(|a, b| {
        b.money
            .cmp(&a.money)
            .then_with(|| b.paintings.cmp(&a.paintings))
    });

    let winners = standings.first().map_or_else(Vec::new, |leader| {
        standings
            .iter()
            .take_while(|s| s.money == leader.money && s.paintings == leader.paintings)
            .map(|s| s.player_id)
            .collect()
    });

    (standings, winners)
}
