//! Decks of cards.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::collections::vec_deque;
use alloc::vec::Vec;
use core::fmt;

use log::{debug, trace};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::Card;
use crate::error::{CardError, DeckError};
use crate::hand::Hand;
use crate::options::DeckOptions;
use crate::rng::with_shuffle_rng;
use crate::variant::Variant;

/// An ordered deck of cards of one variant.
///
/// The first card is the top of the deck. A deck only ever shrinks: cards
/// leave it through draws and deals.
///
/// # Example
///
/// ```
/// use deckhand::{Deck, Variant};
///
/// let mut deck = Deck::new(Variant::SixtySix);
/// assert_eq!(deck.len(), 24);
///
/// deck.shuffle();
/// let hand = deck.deal().unwrap();
/// assert_eq!(hand.len(), 6);
/// assert_eq!(deck.len(), 18);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Cards in the deck, top first.
    cards: VecDeque<Card>,
    /// Deck options.
    options: DeckOptions,
}

impl Deck {
    /// Creates a full deck of the given variant.
    ///
    /// Cards are ordered by suit, then by rank, both lowest first.
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        Self::with_options(DeckOptions::new(variant))
    }

    /// Creates a full deck with the given options.
    #[must_use]
    pub fn with_options(options: DeckOptions) -> Self {
        let cards = Self::create_cards(options.variant);
        debug!(
            "created {} deck with {} cards",
            options.variant,
            cards.len()
        );
        Self {
            cards: cards.into(),
            options,
        }
    }

    /// Creates a deck of the given variant from existing cards.
    ///
    /// Every card is rebuilt as a card of `variant`, keeping its rank and
    /// suit. An empty input produces a full deck.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidCard`] if a card's rank is not used by
    /// `variant`, or [`CardError::DuplicateCard`] if the same rank and suit
    /// appear twice.
    pub fn from_cards<I>(variant: Variant, cards: I) -> Result<Self, CardError>
    where
        I: IntoIterator<Item = Card>,
    {
        let cards = cards
            .into_iter()
            .map(|card| Card::new(variant, card.rank(), card.suit()))
            .collect::<Result<Vec<_>, _>>()?;

        if cards.is_empty() {
            return Ok(Self::new(variant));
        }

        let mut sorted = cards.clone();
        sorted.sort_unstable();
        if let Some(pair) = sorted.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(CardError::DuplicateCard {
                rank: pair[0].rank(),
                suit: pair[0].suit(),
            });
        }

        Ok(Self {
            cards: cards.into(),
            options: DeckOptions::new(variant),
        })
    }

    fn create_cards(variant: Variant) -> Vec<Card> {
        let config = variant.config();
        let mut cards = Vec::with_capacity(config.deck_size());

        for &suit in config.suits {
            for &rank in config.ranks {
                if let Ok(card) = Card::new(variant, rank, suit) {
                    cards.push(card);
                }
            }
        }

        cards
    }

    /// Returns the deck variant.
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.options.variant
    }

    /// Returns the number of cards per dealt hand.
    #[must_use]
    pub const fn hand_size(&self) -> usize {
        self.options.hand_size
    }

    /// Returns the cards in the deck, top first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        // Cards are only ever removed from the ends, so the buffer never wraps.
        self.cards.as_slices().0
    }

    /// Returns an iterator over the cards, top first.
    pub fn iter(&self) -> vec_deque::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffles the deck in place using the process-wide random source.
    ///
    /// See [`set_shuffle_seed`](crate::set_shuffle_seed) for reproducible
    /// shuffles.
    pub fn shuffle(&mut self) {
        with_shuffle_rng(|rng| self.shuffle_with(rng));
    }

    /// Shuffles the deck in place using `rng`.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
        debug!("shuffled {} deck of {} cards", self.variant(), self.len());
    }

    /// Sorts the deck from the highest card to the lowest.
    pub fn sort(&mut self) {
        self.cards.make_contiguous().sort_unstable_by(|a, b| b.cmp(a));
        debug!("sorted {} deck of {} cards", self.variant(), self.len());
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if no cards remain.
    pub fn draw_top(&mut self) -> Result<Card, DeckError> {
        let card = self.cards.pop_front().ok_or(DeckError::EmptyDeck)?;
        trace!("drew {card} from the top");
        Ok(card)
    }

    /// Removes and returns the bottom card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if no cards remain.
    pub fn draw_bottom(&mut self) -> Result<Card, DeckError> {
        let card = self.cards.pop_back().ok_or(DeckError::EmptyDeck)?;
        trace!("drew {card} from the bottom");
        Ok(card)
    }

    /// Returns the top card without removing it.
    #[must_use]
    pub fn top_card(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Returns the bottom card without removing it.
    #[must_use]
    pub fn bottom_card(&self) -> Option<&Card> {
        self.cards.back()
    }

    /// Deals a hand from the top of the deck.
    ///
    /// The hand takes [`hand_size`](Self::hand_size) cards and the deck's
    /// variant.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::ZeroHandSize`] if the deck was configured with
    /// a hand size of zero, or [`DeckError::InsufficientCards`] if fewer
    /// than [`hand_size`](Self::hand_size) cards remain. The deck is left
    /// unchanged in both cases.
    pub fn deal(&mut self) -> Result<Hand, DeckError> {
        let requested = self.hand_size();
        if requested == 0 {
            return Err(DeckError::ZeroHandSize);
        }
        let remaining = self.len();
        if remaining < requested {
            return Err(DeckError::InsufficientCards {
                requested,
                remaining,
            });
        }

        let cards: Vec<Card> = self.cards.drain(..requested).collect();
        debug!(
            "dealt {} hand of {} cards, {} left",
            self.variant(),
            cards.len(),
            self.len()
        );
        Ok(Hand::dealt(self.variant(), cards))
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::with_options(DeckOptions::default())
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = vec_deque::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = vec_deque::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
