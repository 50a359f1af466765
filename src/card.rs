//! Card types, ranks and suits.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::error::{CardError, ParseError};
use crate::variant::Variant;

/// Card suit.
///
/// Every variant uses all four suits, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits, lowest first.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Lower-case label, as accepted by [`FromStr`].
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Clubs => "clubs",
            Self::Diamonds => "diamonds",
            Self::Hearts => "hearts",
            Self::Spades => "spades",
        }
    }

    const fn title(self) -> &'static str {
        match self {
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Suit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|suit| suit.label() == s)
            .ok_or(ParseError::UnknownSuit)
    }
}

/// Card rank.
///
/// The declaration order is the standard one; each [`Variant`] defines its
/// own ordering and may leave some ranks out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// 2.
    Two,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks in standard order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Lower-case label, as accepted by [`FromStr`].
    ///
    /// Number ranks use their digits, so nines are labelled `"9"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "jack",
            Self::Queen => "queen",
            Self::King => "king",
            Self::Ace => "ace",
        }
    }

    const fn title(self) -> &'static str {
        match self {
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Ace => "Ace",
            other => other.label(),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Rank {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rank| rank.label() == s)
            .ok_or(ParseError::UnknownRank)
    }
}

/// A playing card belonging to one deck variant.
///
/// Cards order by suit first and by rank second, both according to the
/// variant's tables. A queen of clubs is therefore lower than a two of
/// diamonds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    variant: Variant,
}

impl Card {
    /// Creates a new card for the given variant.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidCard`] if the variant does not use `rank`.
    ///
    /// # Example
    ///
    /// ```
    /// use deckhand::{Card, Rank, Suit, Variant};
    ///
    /// let card = Card::new(Variant::Belote, Rank::Ten, Suit::Hearts).unwrap();
    /// assert_eq!(card.to_string(), "10 of Hearts");
    /// assert!(Card::new(Variant::Belote, Rank::Two, Suit::Hearts).is_err());
    /// ```
    pub fn new(variant: Variant, rank: Rank, suit: Suit) -> Result<Self, CardError> {
        if variant.config().rank_index(rank).is_none() {
            return Err(CardError::InvalidCard { rank, variant });
        }

        Ok(Self {
            rank,
            suit,
            variant,
        })
    }

    /// Returns the rank of the card.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the variant the card belongs to.
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns the card one rank higher.
    ///
    /// The highest rank wraps to the lowest rank of the next suit, and
    /// spades wrap to clubs.
    #[must_use]
    pub fn next(&self) -> Self {
        self.step(1)
    }

    /// Returns the card one rank lower.
    ///
    /// The lowest rank wraps to the highest rank of the previous suit, and
    /// clubs wrap to spades.
    #[must_use]
    pub fn previous(&self) -> Self {
        self.step(-1)
    }

    #[expect(
        clippy::cast_possible_wrap,
        reason = "variant tables hold at most 13 ranks and 4 suits"
    )]
    fn step(&self, delta: isize) -> Self {
        let config = self.variant.config();
        let ranks = config.ranks.len() as isize;
        let suits = config.suits.len() as isize;

        // Cards can only be built with ranks from the variant table.
        let rank_index = config.rank_index(self.rank).unwrap_or_default() as isize;
        let suit_index = config.suit_index(self.suit).unwrap_or_default() as isize;

        let position = (suit_index * ranks + rank_index + delta).rem_euclid(ranks * suits);

        Self {
            rank: config.ranks[(position % ranks) as usize],
            suit: config.suits[(position / ranks) as usize],
            variant: self.variant,
        }
    }

    fn sort_key(&self) -> (Option<usize>, Option<usize>, Variant) {
        let config = self.variant.config();
        (
            config.suit_index(self.suit),
            config.rank_index(self.rank),
            self.variant,
        )
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank.title(), self.suit.title())
    }
}

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;
