//! Deck and card tests.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use warrs::{Card, DECK_SIZE, Deck, Rank, Suit};

#[test]
fn standard_deck_has_52_distinct_cards() {
    let deck = Deck::standard();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
    assert!(deck.iter().all(|card| card.rank != Rank::Joker));
}

#[test]
fn pop_top_and_push_bottom() {
    let mut deck = Deck::empty();
    assert!(deck.is_empty());
    assert_eq!(deck.pop_top(), None);

    deck.push_bottom(Card::new(Suit::Hearts, Rank::Two));
    deck.push_bottom(Card::new(Suit::Hearts, Rank::Three));

    assert_eq!(deck.peek_top(), Some(&Card::new(Suit::Hearts, Rank::Two)));
    assert_eq!(deck.pop_top(), Some(Card::new(Suit::Hearts, Rank::Two)));
    assert_eq!(deck.pop_top(), Some(Card::new(Suit::Hearts, Rank::Three)));
    assert_eq!(deck.pop_top(), None);
    assert_eq!(deck.len(), 0);
}

#[test]
fn collected_deck_keeps_first_card_on_top() {
    let mut deck: Deck = [Rank::King, Rank::Queen]
        .into_iter()
        .map(|rank| Card::new(Suit::Spades, rank))
        .collect();

    assert_eq!(deck.pop_top(), Some(Card::new(Suit::Spades, Rank::King)));
}

#[test]
fn shuffle_keeps_cards_and_is_seeded() {
    let mut first = Deck::standard();
    let mut second = Deck::standard();
    first.shuffle(&mut ChaCha8Rng::seed_from_u64(5));
    second.shuffle(&mut ChaCha8Rng::seed_from_u64(5));

    assert_eq!(first, second);
    assert_ne!(first, Deck::standard());

    let before: HashSet<Card> = Deck::standard().into_iter().collect();
    let after: HashSet<Card> = first.into_iter().collect();
    assert_eq!(before, after);
}

#[test]
fn rank_values_are_ace_high_with_joker_lowest() {
    assert_eq!(Rank::Joker.value(), 0);
    assert_eq!(Rank::Two.value(), 2);
    assert_eq!(Rank::Ten.value(), 10);
    assert_eq!(Rank::Jack.value(), 11);
    assert_eq!(Rank::Ace.value(), 14);
    assert!(
        Rank::STANDARD
            .windows(2)
            .all(|pair| pair[0].value() < pair[1].value())
    );
    assert_eq!(
        Card::new(Suit::Clubs, Rank::Queen).value(),
        Card::new(Suit::Hearts, Rank::Queen).value()
    );
}

#[test]
fn cards_display_compactly() {
    assert_eq!(Card::new(Suit::Spades, Rank::Ace).to_string(), "♠A");
    assert_eq!(Card::new(Suit::Hearts, Rank::Ten).to_string(), "♥10");
    assert_eq!(Card::new(Suit::Diamonds, Rank::Seven).to_string(), "♦7");
    assert_eq!(Card::new(Suit::Clubs, Rank::Joker).to_string(), "JK");
}
