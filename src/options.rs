//! Deck construction options.

use crate::variant::Variant;

/// Configuration options for a deck.
///
/// The hand size defaults to the variant's configured one and can be
/// overridden with the builder:
///
/// ```
/// use deckhand::{DeckOptions, Variant};
///
/// let options = DeckOptions::new(Variant::War).with_hand_size(13);
/// assert_eq!(options.hand_size, 13);
/// assert_eq!(DeckOptions::new(Variant::Belote).hand_size, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeckOptions {
    /// Deck variant.
    pub variant: Variant,
    /// Number of cards per dealt hand.
    pub hand_size: usize,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self::new(Variant::default())
    }
}

impl DeckOptions {
    /// Creates options with the variant's default hand size.
    #[must_use]
    pub const fn new(variant: Variant) -> Self {
        Self {
            variant,
            hand_size: variant.config().hand_size,
        }
    }

    /// Sets the variant, resetting the hand size to its default.
    ///
    /// # Example
    ///
    /// ```
    /// use deckhand::{DeckOptions, Variant};
    ///
    /// let options = DeckOptions::default().with_variant(Variant::SixtySix);
    /// assert_eq!(options.variant, Variant::SixtySix);
    /// assert_eq!(options.hand_size, 6);
    /// ```
    #[must_use]
    pub const fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self.hand_size = variant.config().hand_size;
        self
    }

    /// Sets the number of cards per dealt hand.
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }
}
