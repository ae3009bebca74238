//! Property tests for ranking, value accumulation, and money conservation.

use gavel::auction::{DoubleAuction, OneOfferPhase};
use gavel::scoring::{rank_artists, score_round};
use gavel::{
    Artist, ArtistCounts, ArtistValueBoard, Auction, AuctionOutcome, AuctionType, Awaiting, Card,
    Game, GameOptions, OutbidPayment, PlayOutcome, RoundPhase,
};
use proptest::prelude::*;

const KINDS: [AuctionType; 5] = [
    AuctionType::Open,
    AuctionType::OneOffer,
    AuctionType::Hidden,
    AuctionType::FixedPrice,
    AuctionType::Double,
];

fn counts_from(sold: [u8; 5]) -> ArtistCounts {
    let mut counts = ArtistCounts::default();
    for (artist, count) in Artist::ALL.into_iter().zip(sold) {
        counts.add(artist, count);
    }
    counts
}

fn open_table(seed: u64) -> Game {
    table_with(seed, GameOptions::default())
}

fn table_with(seed: u64, options: GameOptions) -> Game {
    let game = Game::new(options, seed);
    for name in ["Ana", "Ben", "Cy", "Dee"] {
        game.join(name).unwrap();
    }
    game.start_round().unwrap();
    game
}

fn total_money(game: &Game) -> usize {
    game.snapshot().players.iter().map(|p| p.money).sum()
}

/// Submits one arbitrary decision; rejected decisions are ignored.
fn decide(game: &Game, player: u8, choice: u8, amount: usize) -> Option<AuctionOutcome> {
    let result = match choice {
        0 => game.submit_bid(player, amount),
        1 => game.pass(player),
        2 => game.set_price(player, amount),
        3 => game.buy_at_price(player),
        4 => game.accept_bid(player),
        5 => game.outbid(player),
        6 => game.take_free(player),
        7 => game.close_auction(player),
        _ => {
            let first = game.get_hand(player).and_then(|hand| hand.first().map(|c| c.id));
            game.offer_second_card(player, first)
        }
    };
    result.ok().flatten()
}

/// Drives the active auction to its end and returns every outcome seen.
fn finish(game: &Game) -> Vec<AuctionOutcome> {
    let mut outcomes = Vec::new();
    let mut steps = 0;
    while let Some(auction) = game.active_auction() {
        steps += 1;
        assert!(steps < 64, "auction did not finish");

        let auctioneer = auction.auctioneer();
        let auction = match auction {
            Auction::Double(DoubleAuction {
                resolved_auction: Some(inner),
                ..
            }) => *inner,
            other => other,
        };
        let closed = match auction {
            Auction::Open(_) => game.close_auction(auctioneer),
            Auction::Hidden(_) => game.force_sealed_bids(),
            Auction::OneOffer(one_offer) => match one_offer.phase {
                OneOfferPhase::AuctioneerDecision if one_offer.current_bidder.is_some() => {
                    game.accept_bid(auctioneer)
                }
                OneOfferPhase::AuctioneerDecision => game.take_free(auctioneer),
                OneOfferPhase::Bidding => game.pass(one_offer.current_player()),
            },
            Auction::FixedPrice(fixed) if fixed.is_price_set() => game.pass(fixed.current_player()),
            Auction::FixedPrice(_) => game.set_price(auctioneer, 1),
            Auction::Double(_) => {
                let Some(Awaiting::Player(player)) = game.awaiting() else {
                    panic!("double auction should wait for a second card");
                };
                game.offer_second_card(player, None)
            }
        };
        outcomes.extend(closed.unwrap());
    }
    outcomes
}

proptest! {
    #[test]
    fn ranking_is_sorted_with_rarer_artist_first_on_ties(sold in prop::array::uniform5(0u8..=5)) {
        let counts = counts_from(sold);
        let ranking = rank_artists(&counts);

        for pair in ranking.windows(2) {
            let (higher, lower) = (pair[0], pair[1]);
            prop_assert!(counts.get(higher) >= counts.get(lower));
            if counts.get(higher) == counts.get(lower) {
                prop_assert!(higher.print_count() < lower.print_count());
            }
        }
    }

    #[test]
    fn artist_value_is_sum_of_tiles_and_never_decreases(
        rounds in prop::collection::vec(prop::array::uniform5(0u8..=5), 1..=4)
    ) {
        let mut board = ArtistValueBoard::new();
        for sold in rounds {
            let before: Vec<usize> = Artist::ALL.iter().map(|&a| board.value(a)).collect();
            score_round(&counts_from(sold), &mut board);

            for (artist, previous) in Artist::ALL.into_iter().zip(before) {
                prop_assert!(board.value(artist) >= previous);
                prop_assert_eq!(board.value(artist), board.tiles(artist).iter().sum::<usize>());
            }
        }
    }

    #[test]
    fn completed_auctions_conserve_money(
        seed in any::<u64>(),
        kind in 0usize..5,
        second_kind in 0usize..4,
        money in prop::array::uniform4(0usize..=60),
        decisions in prop::collection::vec((0u8..4, 0u8..9, 0usize..=60), 0..16),
    ) {
        let options = GameOptions::default().with_outbid_payment(OutbidPayment::Bank);
        let game = table_with(seed, options);
        {
            let mut state = game.state.lock();
            for (player, amount) in state.players.iter_mut().zip(money) {
                player.money = amount;
            }
            state.players[0].hand = vec![Card::new(200, Artist::Yoko, KINDS[kind])];
            // A candidate second card for a double auction.
            state.players[1]
                .hand
                .insert(0, Card::new(201, Artist::Yoko, KINDS[second_kind]));
        }
        let before = total_money(&game);

        let mut outcomes = Vec::new();
        if let PlayOutcome::AuctionClosed(outcome) = game.play_card(0, 200).unwrap() {
            outcomes.push(outcome);
        }
        for (player, choice, amount) in decisions {
            if game.active_auction().is_none() {
                break;
            }
            outcomes.extend(decide(&game, player, choice, amount));
        }
        outcomes.extend(finish(&game));

        prop_assert_eq!(outcomes.len(), 1);
        let outcome = &outcomes[0];
        let after = total_money(&game);
        if outcome.is_self_purchase() {
            prop_assert_eq!(after + outcome.price, before);
        } else {
            prop_assert_eq!(after, before);
        }
        prop_assert_eq!(
            usize::from(game.cards_sold(Artist::Yoko)),
            outcome.lot.len()
        );
    }

    #[test]
    fn fifth_card_always_ends_round(seed in any::<u64>(), artist_index in 0usize..5) {
        let game = open_table(seed);
        let artist = Artist::ALL[artist_index];
        {
            let mut state = game.state.lock();
            state.round.cards_sold_by_artist.add(artist, 4);
            state.players[0].hand.push(Card::new(200, artist, AuctionType::Hidden));
        }

        game.play_card(0, 200).unwrap();
        prop_assert_eq!(game.phase(), RoundPhase::RoundEnding);
        prop_assert!(game.active_auction().is_none());
        prop_assert_eq!(game.cards_sold(artist), 5);
        prop_assert!(game.play_card(1, 0).is_err());
    }
}
