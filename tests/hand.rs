//! Hand integration tests.

use deckhand::{Card, CardError, Deck, DeckError, Hand, HandError, Rank, Suit, Variant};

fn hand(variant: Variant, cards: &[(Rank, Suit)]) -> Hand {
    let cards: Vec<Card> = cards
        .iter()
        .map(|&(rank, suit)| Card::new(variant, rank, suit).unwrap())
        .collect();
    Hand::new(variant, cards).unwrap()
}

fn belote_hand(cards: &[(Rank, Suit)]) -> Hand {
    hand(Variant::Belote, cards)
}

fn sixty_six_hand(cards: &[(Rank, Suit)]) -> Hand {
    hand(Variant::SixtySix, cards)
}

#[test]
fn war_hand_plays_from_the_front() {
    let mut deck = Deck::new(Variant::War);
    let mut hand = deck.deal().unwrap();
    assert_eq!(hand.len(), 26);
    assert!(!hand.allow_face_up().unwrap());

    let first = hand.play_card().unwrap();
    assert_eq!(first, Card::new(Variant::War, Rank::Two, Suit::Clubs).unwrap());
    assert_eq!(hand.len(), 25);

    for _ in 0..21 {
        hand.play_card().unwrap();
    }
    assert_eq!(hand.len(), 4);
    assert!(!hand.allow_face_up().unwrap());

    hand.play_card().unwrap();
    assert!(hand.allow_face_up().unwrap());

    while hand.play_card().is_ok() {}
    assert!(hand.is_empty());
    assert!(hand.allow_face_up().unwrap());
    assert_eq!(hand.play_card().unwrap_err(), HandError::EmptyHand);
}

#[test]
fn empty_war_hand_cannot_play() {
    let mut hand = Hand::new(Variant::War, Vec::new()).unwrap();
    assert_eq!(hand.play_card().unwrap_err(), HandError::EmptyHand);
}

#[test]
fn new_hand_rebuilds_cards_for_variant() {
    let standard = [Rank::Nine, Rank::Ten, Rank::Jack]
        .map(|rank| Card::new(Variant::Standard, rank, Suit::Clubs).unwrap());

    let hand = Hand::new(Variant::Belote, standard).unwrap();
    assert!(hand.iter().all(|card| card.variant() == Variant::Belote));
    // Ten sits between king and ace in Belote, so 9, 10, J is no run.
    assert!(!hand.tierce().unwrap());
    assert_eq!(
        hand.highest_of_suit(Suit::Clubs).unwrap(),
        Some(Card::new(Variant::Belote, Rank::Ten, Suit::Clubs).unwrap())
    );

    let two = Card::new(Variant::Standard, Rank::Two, Suit::Hearts).unwrap();
    assert_eq!(
        Hand::new(Variant::SixtySix, [two]).unwrap_err(),
        CardError::InvalidCard {
            rank: Rank::Two,
            variant: Variant::SixtySix,
        }
    );
}

#[test]
fn predicates_check_hand_variant() {
    let mut belote = belote_hand(&[(Rank::Seven, Suit::Clubs)]);
    assert_eq!(
        belote.play_card().unwrap_err(),
        HandError::UnsupportedVariant(Variant::Belote)
    );
    assert_eq!(belote.len(), 1);
    assert!(belote.twenty(Suit::Clubs).is_err());

    let war = hand(Variant::War, &[(Rank::Queen, Suit::Hearts)]);
    assert_eq!(
        war.belote().unwrap_err(),
        HandError::UnsupportedVariant(Variant::War)
    );
    assert!(war.forty(Suit::Hearts).is_err());

    let mut standard = Deck::new(Variant::Standard).deal().unwrap();
    assert_eq!(standard.len(), 52);
    assert_eq!(
        standard.play_card().unwrap_err(),
        HandError::UnsupportedVariant(Variant::Standard)
    );
    assert!(standard.tierce().is_err());
    assert!(standard.highest_of_suit(Suit::Spades).is_err());

    let sixty_six = sixty_six_hand(&[(Rank::Nine, Suit::Clubs)]);
    assert!(sixty_six.carre_of_jacks().is_err());
    assert!(sixty_six.allow_face_up().is_err());
}

#[test]
fn highest_of_suit_uses_variant_order() {
    let hand = belote_hand(&[
        (Rank::Queen, Suit::Hearts),
        (Rank::King, Suit::Hearts),
        (Rank::Ten, Suit::Hearts),
        (Rank::Ace, Suit::Clubs),
        (Rank::Seven, Suit::Spades),
        (Rank::Eight, Suit::Spades),
        (Rank::Nine, Suit::Diamonds),
        (Rank::Jack, Suit::Diamonds),
    ]);

    assert_eq!(
        hand.highest_of_suit(Suit::Hearts).unwrap(),
        Some(Card::new(Variant::Belote, Rank::Ten, Suit::Hearts).unwrap())
    );
    assert_eq!(
        hand.highest_of_suit(Suit::Diamonds).unwrap(),
        Some(Card::new(Variant::Belote, Rank::Jack, Suit::Diamonds).unwrap())
    );

    let no_spades = belote_hand(&[(Rank::Ace, Suit::Hearts)]);
    assert_eq!(no_spades.highest_of_suit(Suit::Spades).unwrap(), None);
}

#[test]
fn belote_needs_queen_and_king_of_one_suit() {
    let hand = belote_hand(&[
        (Rank::Queen, Suit::Hearts),
        (Rank::King, Suit::Hearts),
        (Rank::Seven, Suit::Clubs),
        (Rank::Eight, Suit::Clubs),
        (Rank::Nine, Suit::Clubs),
        (Rank::Jack, Suit::Spades),
        (Rank::Ace, Suit::Diamonds),
        (Rank::Ten, Suit::Diamonds),
    ]);
    assert!(hand.belote().unwrap());

    let split = belote_hand(&[
        (Rank::Queen, Suit::Hearts),
        (Rank::King, Suit::Spades),
        (Rank::Queen, Suit::Clubs),
        (Rank::King, Suit::Diamonds),
    ]);
    assert!(!split.belote().unwrap());
}

#[test]
fn tierce_follows_belote_rank_order() {
    let hand = belote_hand(&[
        (Rank::Queen, Suit::Hearts),
        (Rank::King, Suit::Hearts),
        (Rank::Nine, Suit::Clubs),
        (Rank::Seven, Suit::Clubs),
        (Rank::Eight, Suit::Clubs),
        (Rank::Jack, Suit::Spades),
        (Rank::Ace, Suit::Diamonds),
        (Rank::Ten, Suit::Diamonds),
    ]);
    assert!(hand.tierce().unwrap());
    assert!(!hand.quarte().unwrap());

    // Jack follows nine in Belote.
    let skipping_ten = belote_hand(&[
        (Rank::Queen, Suit::Spades),
        (Rank::Nine, Suit::Spades),
        (Rank::Jack, Suit::Spades),
    ]);
    assert!(skipping_ten.tierce().unwrap());

    let mixed_suits = belote_hand(&[
        (Rank::Seven, Suit::Spades),
        (Rank::Eight, Suit::Spades),
        (Rank::Nine, Suit::Hearts),
    ]);
    assert!(!mixed_suits.tierce().unwrap());

    let gapped = belote_hand(&[
        (Rank::Seven, Suit::Spades),
        (Rank::Eight, Suit::Spades),
        (Rank::Jack, Suit::Spades),
    ]);
    assert!(!gapped.tierce().unwrap());
}

#[test]
fn quarte_and_quint() {
    let quarte = belote_hand(&[
        (Rank::Ace, Suit::Diamonds),
        (Rank::Queen, Suit::Diamonds),
        (Rank::Ten, Suit::Diamonds),
        (Rank::King, Suit::Diamonds),
        (Rank::Seven, Suit::Clubs),
        (Rank::Nine, Suit::Clubs),
        (Rank::Seven, Suit::Hearts),
        (Rank::Eight, Suit::Spades),
    ]);
    assert!(quarte.tierce().unwrap());
    assert!(quarte.quarte().unwrap());
    assert!(!quarte.quint().unwrap());

    let quint = belote_hand(&[
        (Rank::Jack, Suit::Hearts),
        (Rank::Queen, Suit::Hearts),
        (Rank::King, Suit::Hearts),
        (Rank::Ten, Suit::Hearts),
        (Rank::Ace, Suit::Hearts),
        (Rank::Seven, Suit::Clubs),
        (Rank::Seven, Suit::Spades),
        (Rank::Seven, Suit::Diamonds),
    ]);
    assert!(quint.quarte().unwrap());
    assert!(quint.quint().unwrap());
}

#[test]
fn ace_does_not_run_into_next_suit() {
    let hand = belote_hand(&[
        (Rank::Ten, Suit::Clubs),
        (Rank::Ace, Suit::Clubs),
        (Rank::Seven, Suit::Diamonds),
    ]);
    assert!(!hand.tierce().unwrap());
}

#[test]
fn carre_of_jacks() {
    let hand = belote_hand(&[
        (Rank::Jack, Suit::Clubs),
        (Rank::Jack, Suit::Diamonds),
        (Rank::Jack, Suit::Hearts),
        (Rank::Jack, Suit::Spades),
        (Rank::Seven, Suit::Clubs),
        (Rank::Eight, Suit::Clubs),
        (Rank::Ten, Suit::Hearts),
        (Rank::Ace, Suit::Spades),
    ]);
    assert!(hand.carre_of_jacks().unwrap());

    let three = belote_hand(&[
        (Rank::Jack, Suit::Clubs),
        (Rank::Jack, Suit::Diamonds),
        (Rank::Jack, Suit::Hearts),
    ]);
    assert!(!three.carre_of_jacks().unwrap());
}

#[test]
fn carre_of_nines_and_aces_are_always_false() {
    let nines = belote_hand(&[
        (Rank::Nine, Suit::Clubs),
        (Rank::Nine, Suit::Diamonds),
        (Rank::Nine, Suit::Hearts),
        (Rank::Nine, Suit::Spades),
        (Rank::Ace, Suit::Clubs),
        (Rank::Ace, Suit::Diamonds),
        (Rank::Ace, Suit::Hearts),
        (Rank::Ace, Suit::Spades),
    ]);
    assert!(!nines.carre_of_nines().unwrap());
    assert!(!nines.carre_of_aces().unwrap());
    assert!(!nines.carre_of_jacks().unwrap());
}

#[test]
fn forty_and_twenty_split_on_trump() {
    let hand = sixty_six_hand(&[
        (Rank::Queen, Suit::Spades),
        (Rank::King, Suit::Spades),
        (Rank::Nine, Suit::Hearts),
        (Rank::Jack, Suit::Hearts),
        (Rank::Ace, Suit::Clubs),
        (Rank::Ten, Suit::Diamonds),
    ]);

    assert!(hand.forty(Suit::Spades).unwrap());
    assert!(!hand.twenty(Suit::Spades).unwrap());

    assert!(!hand.forty(Suit::Hearts).unwrap());
    assert!(hand.twenty(Suit::Hearts).unwrap());
}

#[test]
fn twenty_needs_a_full_pair() {
    let hand = sixty_six_hand(&[
        (Rank::Queen, Suit::Spades),
        (Rank::King, Suit::Hearts),
        (Rank::Queen, Suit::Clubs),
        (Rank::King, Suit::Clubs),
        (Rank::Nine, Suit::Diamonds),
        (Rank::Ten, Suit::Diamonds),
    ]);

    assert!(hand.twenty(Suit::Spades).unwrap());
    assert!(!hand.twenty(Suit::Clubs).unwrap());
    assert!(hand.forty(Suit::Clubs).unwrap());
    assert!(!hand.forty(Suit::Diamonds).unwrap());
}

#[test]
fn sixty_six_deals_four_hands() {
    let mut deck = Deck::new(Variant::SixtySix);
    let hands: Vec<Hand> = (0..4).map(|_| deck.deal().unwrap()).collect();

    // The third hand holds the hearts in table order.
    assert!(hands[2].forty(Suit::Hearts).unwrap());
    assert!(hands[2].twenty(Suit::Clubs).unwrap());
    assert!(!hands[2].twenty(Suit::Hearts).unwrap());

    assert!(matches!(
        deck.deal(),
        Err(DeckError::InsufficientCards {
            requested: 6,
            remaining: 0,
        })
    ));
}

#[test]
fn hand_error_messages() {
    assert_eq!(HandError::EmptyHand.to_string(), "no cards left in the hand");
    assert_eq!(
        HandError::UnsupportedVariant(Variant::SixtySix).to_string(),
        "operation not available for a Sixty-Six hand"
    );
}
