//! Playing cards, decks and hands with optional `no_std` support.
//!
//! A [`Deck`] is built for one [`Variant`] (Standard, War, Belote or
//! Sixty-Six). The variant fixes the rank order, the deck size and the size
//! of each dealt [`Hand`]. Hands expose the predicates of their variant,
//! such as [`Hand::belote`] or [`Hand::forty`].
//!
//! # Example
//!
//! ```
//! use deckhand::{Deck, Suit, Variant};
//!
//! let mut deck = Deck::new(Variant::Belote);
//! deck.shuffle();
//!
//! let hand = deck.deal().unwrap();
//! assert_eq!(hand.len(), 8);
//! let _ = hand.highest_of_suit(Suit::Hearts).unwrap();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
mod rng;
pub mod variant;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{CardError, DeckError, HandError, ParseError};
pub use hand::Hand;
pub use options::DeckOptions;
pub use rng::set_shuffle_seed;
pub use variant::{Variant, VariantConfig};
