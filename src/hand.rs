//! Hand representation and value resolution.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Rank;

/// Number of cards that makes a five-card charlie.
pub const CHARLIE_SIZE: usize = 5;

/// An ordered hand of card ranks.
///
/// Hands are evaluation inputs: build one with [`Hand::add_card`] or from a
/// `Vec<Rank>`, then read values off it. Evaluation never mutates the hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, in the order they were received.
    cards: Vec<Rank>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, rank: Rank) {
        self.cards.push(rank);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Rank] {
        &self.cards
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

    /// Returns the number of Aces in the hand.
    #[must_use]
    pub fn aces(&self) -> usize {
        self.cards.iter().filter(|rank| rank.is_ace()).count()
    }

    /// Returns the hand total with every Ace at its low value.
    ///
    /// This is the minimal attainable total; the five-card charlie rule
    /// checks it against 21.
    #[must_use]
    pub fn low_value(&self) -> u8 {
        self.cards
            .iter()
            .fold(0u8, |total, rank| total.saturating_add(rank.value(false)))
    }

    /// Calculates the best value of the hand.
    ///
    /// Aces are promoted from 1 to 11 one at a time as long as the total
    /// stays within 21, which yields the highest total not exceeding 21
    /// over every high/low assignment of the Aces. A hand that busts even
    /// with all Aces low keeps that minimal total.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Hand, Rank};
    ///
    /// let hand = Hand::from(vec![Rank::Ace, Rank::Seven, Rank::Ace]);
    /// assert_eq!(hand.value(), 19);
    /// ```
    #[must_use]
    pub fn value(&self) -> u8 {
        let mut value = self.low_value();
        let mut aces = self.aces();

        // Each promotion adds 10; stop before the total would pass 21.
        while aces > 0 && value <= 11 {
            value += 10;
            aces -= 1;
        }

        value
    }

    /// Returns whether the hand is a five-card charlie: exactly five cards
    /// that stay within 21 with every Ace at its low value.
    #[must_use]
    pub fn is_five_card_charlie(&self) -> bool {
        self.cards.len() == CHARLIE_SIZE && self.low_value() <= 21
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<Rank>> for Hand {
    fn from(cards: Vec<Rank>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Rank> for Hand {
    fn from_iter<I: IntoIterator<Item = Rank>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
