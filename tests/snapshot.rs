//! State snapshot round-trip tests.

#![cfg(feature = "serde")]

use gavel::{Artist, AuctionType, Card, Game, GameOptions, GameState};

#[test]
fn snapshot_mid_auction_resumes_identically() {
    let options = GameOptions::default();
    let game = Game::new(options.clone(), 11);
    for name in ["Ana", "Ben", "Cy", "Dee"] {
        game.join(name).unwrap();
    }
    game.start_round().unwrap();
    {
        let mut state = game.state.lock();
        state.players[0].hand.push(Card::new(200, Artist::Krypto, AuctionType::Double));
        state.players[1].hand.push(Card::new(201, Artist::Krypto, AuctionType::Hidden));
    }
    game.play_card(0, 200).unwrap();
    game.offer_second_card(1, Some(201)).unwrap();
    game.submit_bid(2, 18).unwrap();

    let json = serde_json::to_string(&game.snapshot()).unwrap();
    let restored: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, game.snapshot());

    let resumed = Game::from_state(options, restored);
    for other in [&game, &resumed] {
        other.submit_bid(0, 7).unwrap();
        other.pass(3).unwrap();
        let outcome = other.pass(1).unwrap().unwrap();
        assert_eq!(outcome.winner, 2);
        assert_eq!(outcome.auctioneer, 1);
    }
    assert_eq!(game.into_state(), resumed.into_state());
}
