//! Round result types for showdown against the dealer.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Resolved value of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandValue {
    /// Best point total reachable by the hand; exceeds 21 only when the
    /// hand is unavoidably bust.
    Points(u8),
    /// Automatic win by card count. Not comparable to any point total and
    /// displayed as a dash rather than a number.
    FiveCardCharlie,
}

impl HandValue {
    /// Returns the numeric point total, or `None` for a five-card charlie.
    #[must_use]
    pub const fn points(self) -> Option<u8> {
        match self {
            Self::Points(points) => Some(points),
            Self::FiveCardCharlie => None,
        }
    }

    /// Returns whether the value is a bust total (over 21).
    ///
    /// A five-card charlie is never bust.
    #[must_use]
    pub const fn is_bust(self) -> bool {
        matches!(self, Self::Points(points) if points > 21)
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Points(points) => write!(f, "{points}"),
            Self::FiveCardCharlie => f.write_str("-"),
        }
    }
}

/// Outcome of a hand compared against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Automatic win with five cards that avoid busting.
    FiveCardCharlie,
    /// Player holds the higher total.
    Win,
    /// Player busts or the dealer holds the higher total.
    Lose,
    /// Push (tie).
    Push,
}

impl fmt::Display for HandOutcome {
    /// Formats the outcome with its traditional report label.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::FiveCardCharlie => "beats dealer (5 cards)",
            Self::Win => "beats dealer",
            Self::Lose => "loses",
            Self::Push => "draw",
        };
        f.write_str(label)
    }
}

/// Resolved result for a single hand.
///
/// A result is produced once per hand and never re-resolved; a dealer
/// result is only ever read when comparing player hands against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandResult {
    /// The hand owner's name (a player name or the dealer key).
    pub name: String,
    /// The resolved hand value.
    pub value: HandValue,
    /// Outcome against the dealer. `None` for the dealer's own result,
    /// unless the hand is a five-card charlie.
    pub outcome: Option<HandOutcome>,
}

/// Result of evaluating an entire round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The dealer's resolved result (no opponent comparison).
    pub dealer: HandResult,
    /// Player results, in the round's insertion order.
    pub players: Vec<HandResult>,
}
