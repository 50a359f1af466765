//! Deck variants and their static configuration.

use core::fmt;

use crate::card::{Rank, Suit};

/// A deck variant.
///
/// The variant is the tag [`Card`](crate::Card), [`Deck`](crate::Deck) and
/// [`Hand`](crate::Hand) dispatch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Variant {
    /// Standard 52 card deck, dealt as a single hand.
    #[default]
    Standard,
    /// War: standard ranks, two hands of 26.
    War,
    /// Belote: 32 cards, hands of 8.
    Belote,
    /// Sixty-Six: 24 cards, hands of 6.
    SixtySix,
}

impl Variant {
    /// All variants.
    pub const ALL: [Self; 4] = [Self::Standard, Self::War, Self::Belote, Self::SixtySix];

    /// Returns the static configuration of the variant.
    #[must_use]
    pub const fn config(self) -> &'static VariantConfig {
        match self {
            Self::Standard => &STANDARD,
            Self::War => &WAR,
            Self::Belote => &BELOTE,
            Self::SixtySix => &SIXTY_SIX,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config().name)
    }
}

/// Rank table, suit table and hand size of a variant.
#[derive(Debug, PartialEq, Eq)]
pub struct VariantConfig {
    /// Human readable name.
    pub name: &'static str,
    /// Ranks from lowest to highest.
    pub ranks: &'static [Rank],
    /// Suits from lowest to highest.
    pub suits: &'static [Suit],
    /// Number of cards in a dealt hand.
    pub hand_size: usize,
}

impl VariantConfig {
    /// Position of `rank` in the rank table, if the variant uses it.
    #[must_use]
    pub fn rank_index(&self, rank: Rank) -> Option<usize> {
        self.ranks.iter().position(|&r| r == rank)
    }

    /// Position of `suit` in the suit table.
    #[must_use]
    pub fn suit_index(&self, suit: Suit) -> Option<usize> {
        self.suits.iter().position(|&s| s == suit)
    }

    /// Number of cards in a full deck of this variant.
    #[must_use]
    pub const fn deck_size(&self) -> usize {
        self.ranks.len() * self.suits.len()
    }
}

const BELOTE_RANKS: [Rank; 8] = [
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ten,
    Rank::Ace,
];

const SIXTY_SIX_RANKS: [Rank; 6] = [
    Rank::Nine,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ten,
    Rank::Ace,
];

static STANDARD: VariantConfig = VariantConfig {
    name: "Standard",
    ranks: &Rank::ALL,
    suits: &Suit::ALL,
    hand_size: 52,
};

static WAR: VariantConfig = VariantConfig {
    name: "War",
    ranks: &Rank::ALL,
    suits: &Suit::ALL,
    hand_size: 26,
};

static BELOTE: VariantConfig = VariantConfig {
    name: "Belote",
    ranks: &BELOTE_RANKS,
    suits: &Suit::ALL,
    hand_size: 8,
};

static SIXTY_SIX: VariantConfig = VariantConfig {
    name: "Sixty-Six",
    ranks: &SIXTY_SIX_RANKS,
    suits: &Suit::ALL,
    hand_size: 6,
};
