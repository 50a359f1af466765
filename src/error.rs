//! Error types for card, deck and hand operations.

use thiserror::Error;

use crate::card::{Rank, Suit};
use crate::variant::Variant;

/// Errors that can occur while building cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// The rank is not part of the variant's rank table.
    #[error("rank {rank} is not used by the {variant} deck")]
    InvalidCard {
        /// Offending rank.
        rank: Rank,
        /// Variant the card was built for.
        variant: Variant,
    },
    /// The same card appears more than once.
    #[error("{rank} of {suit} appears more than once")]
    DuplicateCard {
        /// Rank of the repeated card.
        rank: Rank,
        /// Suit of the repeated card.
        suit: Suit,
    },
}

/// Errors that can occur while drawing or dealing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
    /// The deck deals hands of zero cards.
    #[error("hand size is zero")]
    ZeroHandSize,
    /// Not enough cards in the deck to deal a hand.
    #[error("not enough cards to deal a hand: need {requested}, {remaining} left")]
    InsufficientCards {
        /// Hand size of the deck.
        requested: usize,
        /// Cards remaining in the deck.
        remaining: usize,
    },
}

/// Errors that can occur during hand operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// No cards left in the hand.
    #[error("no cards left in the hand")]
    EmptyHand,
    /// The operation is not available for this hand's variant.
    #[error("operation not available for a {0} hand")]
    UnsupportedVariant(Variant),
}

/// Errors that can occur while parsing ranks and suits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Unknown rank label.
    #[error("unknown rank")]
    UnknownRank,
    /// Unknown suit label.
    #[error("unknown suit")]
    UnknownSuit,
}
