mod utils;

use std::collections::HashSet;

use poker_sim::game::{play_showdown, Game, DECK_SIZE};
use poker_sim::{
    evaluate, run_showdown_batch, run_single_batch, Card, Deck, GameError, HandCategory, Outcome,
    Rank, Suit, Summary,
};
use utils::{assert_category, assert_matched_ranks, seeded_rng, HandBuilder};

// ============================================================================
// Deck
// ============================================================================

#[test]
fn test_fresh_decks_hold_every_card_once() {
    let mut rng = seeded_rng(100);
    let all: HashSet<Card> = Card::all_cards().into_iter().collect();

    for _ in 0..100 {
        let mut deck = Deck::with_rng(&mut rng);
        let mut drawn = HashSet::new();
        for _ in 0..DECK_SIZE {
            let card = deck.draw(1).unwrap()[0];
            assert!(drawn.insert(card));
        }
        assert_eq!(drawn, all);
        assert!(deck.is_empty());
    }
}

#[test]
fn test_short_deck_refuses_to_deal() {
    let mut deck = Deck::with_rng(&mut seeded_rng(1));
    deck.draw(DECK_SIZE - 3).unwrap();
    let before = deck.cards().to_vec();

    assert_eq!(
        deck.draw(5),
        Err(GameError::InsufficientCards {
            requested: 5,
            remaining: 3
        })
    );
    assert_eq!(deck.cards(), before.as_slice());
}

// ============================================================================
// Evaluation examples
// ============================================================================

#[test]
fn test_low_straight_flush_ranks_as_royal_flush() {
    let hand = cards![Spades Two, Spades Three, Spades Four, Spades Five, Spades Six];
    assert_category(&hand, HandCategory::RoyalFlush);
}

#[test]
fn test_four_aces() {
    let hand = cards![Spades Ace, Diamonds Ace, Hearts Ace, Clubs Ace, Spades Two];
    let result = assert_category(&hand, HandCategory::FourOfAKind);

    assert_eq!(result.cards, hand[..4].to_vec());
}

#[test]
fn test_two_pair() {
    let hand = cards![Spades Two, Diamonds Two, Hearts Three, Clubs Three, Spades Nine];
    let result = assert_category(&hand, HandCategory::TwoPair);

    assert_matched_ranks(&result, &[Rank::Two, Rank::Two, Rank::Three, Rank::Three]);
}

#[test]
fn test_high_card_is_the_ace() {
    let hand = HandBuilder::new()
        .parsed("S 2")
        .parsed("D 5")
        .parsed("H 9")
        .parsed("C J")
        .parsed("S A")
        .build();
    let result = assert_category(&hand, HandCategory::HighCard);

    assert_eq!(result.cards, vec![Card::new(Suit::Spades, Rank::Ace)]);
}

#[test]
fn test_ace_low_straight() {
    let hand = cards![Spades Ace, Diamonds Two, Hearts Three, Clubs Four, Spades Five];
    assert_category(&hand, HandCategory::Straight);
}

#[test]
fn test_royal_flush() {
    let hand = HandBuilder::new()
        .suited(
            Suit::Spades,
            &[Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace],
        )
        .build();
    assert_category(&hand, HandCategory::RoyalFlush);
}

#[test]
fn test_plain_flush_is_its_own_category() {
    let hand = HandBuilder::new()
        .suited(Suit::Hearts, &[Rank::Two, Rank::Six, Rank::Nine, Rank::Jack])
        .card(Suit::Hearts, Rank::King)
        .build();
    assert_category(&hand, HandCategory::Flush);
}

#[test]
fn test_wrong_hand_size_is_rejected() {
    let four = cards![Spades Ace, Diamonds Ace, Hearts Ace, Clubs Ace];
    assert_eq!(evaluate(&four), Err(GameError::InvalidHandSize(4)));
}

#[test]
fn test_bad_card_text_is_rejected() {
    assert_eq!(
        Card::from_string("Z 9"),
        Err(GameError::InvalidCardSpec("Z 9".to_string()))
    );
}

// ============================================================================
// Games and batches
// ============================================================================

#[test]
fn test_showdown_players_never_share_a_deck() {
    let mut rng = seeded_rng(12);
    for _ in 0..100 {
        let showdown = play_showdown(&mut rng).unwrap();
        assert_eq!(showdown.decks_remaining, [DECK_SIZE - 5, DECK_SIZE - 5]);
    }
}

#[test]
fn test_game_keeps_dealing_from_its_own_deck() {
    let mut game = Game::with_rng(&mut seeded_rng(14));
    game.deal_hand().unwrap();
    game.deal_hand().unwrap();

    assert_eq!(game.deck().remaining(), DECK_SIZE - 10);
}

#[test]
fn test_showdown_outcome_follows_hands() {
    let mut rng = seeded_rng(13);
    for _ in 0..100 {
        let showdown = play_showdown(&mut rng).unwrap();
        let expected = match showdown.player_one.showdown_cmp(&showdown.player_two) {
            std::cmp::Ordering::Greater => Outcome::PlayerOneWins,
            std::cmp::Ordering::Less => Outcome::PlayerTwoWins,
            std::cmp::Ordering::Equal => Outcome::Tie,
        };
        assert_eq!(showdown.outcome, expected);
    }
}

#[test]
fn test_full_run_summary() {
    let mut rng = seeded_rng(2024);
    let summary = Summary {
        single: Some(run_single_batch(1000, &mut rng)),
        showdown: Some(run_showdown_batch(1000, &mut rng)),
    };

    let single = summary.single.as_ref().unwrap();
    let showdown = summary.showdown.as_ref().unwrap();
    assert_eq!(single.completed(), 1000);
    assert_eq!(showdown.completed(), 1000);

    let text = summary.to_string();
    assert!(text.contains("Single-player hands (1000 games, 0 aborted"));
    assert!(text.contains("Player 1 wins"));

    let json: serde_json::Value = serde_json::from_str(&summary.to_json().unwrap()).unwrap();
    assert_eq!(json["single"]["games"], 1000);
    assert_eq!(json["showdown"]["aborted"], 0);
}
