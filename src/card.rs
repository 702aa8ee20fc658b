//! Card ranks and their blackjack point values.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseRankError;

/// Card rank.
///
/// Suit is not tracked: it has no bearing on blackjack scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Ace, worth 1 or 11.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack, worth 10.
    Jack,
    /// Queen, worth 10.
    Queen,
    /// King, worth 10.
    King,
}

impl Rank {
    /// All thirteen ranks, Ace first.
    pub const ALL: [Self; 13] = [
        Self::Ace,
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
    ];

    /// Returns the point value of the rank.
    ///
    /// Two through Nine score their face value, Ten and the face cards all
    /// score 10, and an Ace scores 1 unless `high_ace` is set, in which
    /// case it scores 11.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::Rank;
    ///
    /// assert_eq!(Rank::Ace.value(false), 1);
    /// assert_eq!(Rank::Ace.value(true), 11);
    /// assert_eq!(Rank::Queen.value(false), 10);
    /// ```
    #[must_use]
    pub const fn value(self, high_ace: bool) -> u8 {
        match self {
            Self::Ace => {
                if high_ace {
                    11
                } else {
                    1
                }
            }
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
        }
    }

    /// Returns whether the rank is an Ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        matches!(self, Self::Ace)
    }

    /// Returns the canonical rank name, e.g. `"Ace"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rank {
    type Err = ParseRankError;

    /// Parses a canonical rank name such as `"Ace"` or `"Ten"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Ace" => Ok(Self::Ace),
            "Two" => Ok(Self::Two),
            "Three" => Ok(Self::Three),
            "Four" => Ok(Self::Four),
            "Five" => Ok(Self::Five),
            "Six" => Ok(Self::Six),
            "Seven" => Ok(Self::Seven),
            "Eight" => Ok(Self::Eight),
            "Nine" => Ok(Self::Nine),
            "Ten" => Ok(Self::Ten),
            "Jack" => Ok(Self::Jack),
            "Queen" => Ok(Self::Queen),
            "King" => Ok(Self::King),
            _ => Err(ParseRankError::UnknownRank),
        }
    }
}
