//! Dealt hands and their per-variant predicates.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::collections::vec_deque;
use alloc::vec::Vec;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use log::trace;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{Card, Rank, Suit};
use crate::error::{CardError, HandError};
use crate::variant::Variant;

/// Groups cards by suit, keeping their relative order.
fn suit_groups(cards: &[Card]) -> HashMap<Suit, Vec<Card>> {
    let mut groups: HashMap<Suit, Vec<Card>> = HashMap::new();
    for &card in cards {
        groups.entry(card.suit()).or_default().push(card);
    }
    groups
}

fn has_queen_and_king(group: &[Card]) -> bool {
    let has = |rank: Rank| group.iter().any(|card| card.rank() == rank);
    has(Rank::Queen) && has(Rank::King)
}

/// A hand of cards dealt from a [`Deck`](crate::Deck).
///
/// The hand carries its variant; variant specific operations check it and
/// return [`HandError::UnsupportedVariant`] for other variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, front first.
    cards: VecDeque<Card>,
    /// Variant the hand was dealt for.
    variant: Variant,
}

impl Hand {
    /// Creates a hand of the given variant from existing cards.
    ///
    /// Every card is rebuilt as a card of `variant`, keeping its rank and
    /// suit, so the predicates always use the variant's rank table.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidCard`] if a card's rank is not used by
    /// `variant`.
    pub fn new<I>(variant: Variant, cards: I) -> Result<Self, CardError>
    where
        I: IntoIterator<Item = Card>,
    {
        let cards = cards
            .into_iter()
            .map(|card| Card::new(variant, card.rank(), card.suit()))
            .collect::<Result<VecDeque<_>, _>>()?;

        Ok(Self { cards, variant })
    }

    /// Wraps cards already belonging to `variant`.
    pub(crate) fn dealt(variant: Variant, cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
            variant,
        }
    }

    /// Returns the variant of the hand.
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns the cards in the hand, front first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        // Cards are only ever removed from the front, so the buffer never wraps.
        self.cards.as_slices().0
    }

    /// Returns an iterator over the cards, front first.
    pub fn iter(&self) -> vec_deque::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    fn require(&self, variant: Variant) -> Result<(), HandError> {
        if self.variant == variant {
            Ok(())
        } else {
            Err(HandError::UnsupportedVariant(self.variant))
        }
    }

    // War

    /// Removes and returns the front card (War).
    ///
    /// # Errors
    ///
    /// Returns [`HandError::EmptyHand`] if no cards remain, or
    /// [`HandError::UnsupportedVariant`] for a non-War hand.
    pub fn play_card(&mut self) -> Result<Card, HandError> {
        self.require(Variant::War)?;
        let card = self.cards.pop_front().ok_or(HandError::EmptyHand)?;
        trace!("played {card}, {} left", self.cards.len());
        Ok(card)
    }

    /// Returns whether cards may be played face up (War).
    ///
    /// This is the case once three or fewer cards remain.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::UnsupportedVariant`] for a non-War hand.
    pub fn allow_face_up(&self) -> Result<bool, HandError> {
        self.require(Variant::War)?;
        Ok(self.cards.len() <= 3)
    }

    // Belote

    /// Returns the highest card of `suit`, if any (Belote).
    ///
    /// # Errors
    ///
    /// Returns [`HandError::UnsupportedVariant`] for a non-Belote hand.
    pub fn highest_of_suit(&self, suit: Suit) -> Result<Option<Card>, HandError> {
        self.require(Variant::Belote)?;
        Ok(self
            .cards
            .iter()
            .filter(|card| card.suit() == suit)
            .max()
            .copied())
    }

    /// Returns whether some suit holds both its queen and king (Belote).
    ///
    /// # Errors
    ///
    /// Returns [`HandError::UnsupportedVariant`] for a non-Belote hand.
    pub fn belote(&self) -> Result<bool, HandError> {
        self.require(Variant::Belote)?;
        Ok(suit_groups(self.cards())
            .values()
            .any(|group| has_queen_and_king(group)))
    }

    /// Returns whether the hand holds three consecutive cards of a suit (Belote).
    ///
    /// # Errors
    ///
    /// Returns [`HandError::UnsupportedVariant`] for a non-Belote hand.
    pub fn tierce(&self) -> Result<bool, HandError> {
        self.require(Variant::Belote)?;
        Ok(self.has_sequence_of(3))
    }

    /// Returns whether the hand holds four consecutive cards of a suit (Belote).
    ///
    /// # Errors
    ///
    /// Returns [`HandError::UnsupportedVariant`] for a non-Belote hand.
    pub fn quarte(&self) -> Result<bool, HandError> {
        self.require(Variant::Belote)?;
        Ok(self.has_sequence_of(4))
    }

    /// Returns whether the hand holds five consecutive cards of a suit (Belote).
    ///
    /// # Errors
    ///
    /// Returns [`HandError::UnsupportedVariant`] for a non-Belote hand.
    pub fn quint(&self) -> Result<bool, HandError> {
        self.require(Variant::Belote)?;
        Ok(self.has_sequence_of(5))
    }

    /// Returns whether the hand holds all four jacks (Belote).
    ///
    /// # Errors
    ///
    /// Returns [`HandError::UnsupportedVariant`] for a non-Belote hand.
    pub fn carre_of_jacks(&self) -> Result<bool, HandError> {
        self.require(Variant::Belote)?;
        Ok(self.four_of_a_kind("jack"))
    }

    /// Carre of nines (Belote).
    ///
    /// Looks up the rank labelled `"nine"`. Nines are labelled `"9"`, so
    /// this never holds.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::UnsupportedVariant`] for a non-Belote hand.
    pub fn carre_of_nines(&self) -> Result<bool, HandError> {
        self.require(Variant::Belote)?;
        Ok(self.four_of_a_kind("nine"))
    }

    /// Carre of aces (Belote).
    ///
    /// Looks up the rank labelled `"aces"`, which names no rank, so this
    /// never holds.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::UnsupportedVariant`] for a non-Belote hand.
    pub fn carre_of_aces(&self) -> Result<bool, HandError> {
        self.require(Variant::Belote)?;
        Ok(self.four_of_a_kind("aces"))
    }

    fn has_sequence_of(&self, size: usize) -> bool {
        let mut sorted: Vec<Card> = self.cards.iter().copied().collect();
        sorted.sort_unstable();

        suit_groups(&sorted).values().any(|group| {
            group
                .windows(size)
                .any(|run| run.windows(2).all(|pair| pair[1] == pair[0].next()))
        })
    }

    fn four_of_a_kind(&self, label: &str) -> bool {
        label.parse::<Rank>().is_ok_and(|rank| {
            self.cards.iter().filter(|card| card.rank() == rank).count() == 4
        })
    }

    // Sixty-Six

    /// Returns whether a non-trump suit holds both its queen and king (Sixty-Six).
    ///
    /// # Errors
    ///
    /// Returns [`HandError::UnsupportedVariant`] for a non-Sixty-Six hand.
    pub fn twenty(&self, trump: Suit) -> Result<bool, HandError> {
        self.require(Variant::SixtySix)?;
        Ok(suit_groups(self.cards())
            .iter()
            .filter(|(suit, _)| **suit != trump)
            .any(|(_, group)| has_queen_and_king(group)))
    }

    /// Returns whether the trump suit holds both its queen and king (Sixty-Six).
    ///
    /// # Errors
    ///
    /// Returns [`HandError::UnsupportedVariant`] for a non-Sixty-Six hand.
    pub fn forty(&self, trump: Suit) -> Result<bool, HandError> {
        self.require(Variant::SixtySix)?;
        Ok(suit_groups(self.cards())
            .get(&trump)
            .is_some_and(|group| has_queen_and_king(group)))
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = vec_deque::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
