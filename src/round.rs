//! Round assembly and hand resolution against the dealer.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::error::RoundError;
use crate::hand::Hand;
use crate::result::{HandOutcome, HandResult, HandValue, RoundResult};

/// Conventional dealer key used by round tables.
pub const DEALER: &str = "Dealer";

/// A round of hands keyed by participant name.
///
/// Insertion order is preserved: players are evaluated and reported in the
/// order their hands were added. Re-inserting an existing name replaces its
/// hand without moving it. One entry is designated the dealer at evaluation
/// time via its key.
#[derive(Debug, Clone, Default)]
pub struct Round {
    /// Participant names in insertion order.
    order: Vec<String>,
    /// Hands keyed by participant name.
    hands: HashMap<String, Hand>,
}

impl Round {
    /// Creates a new empty round.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Hand, Rank, Round};
    ///
    /// let mut round = Round::new();
    /// round.insert("Dealer", Hand::from(vec![Rank::Six, Rank::Nine]));
    /// assert_eq!(round.len(), 1);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            hands: HashMap::new(),
        }
    }

    /// Adds a hand for the given participant.
    ///
    /// A name already present keeps its position in the round and has its
    /// hand replaced.
    pub fn insert(&mut self, name: impl Into<String>, hand: Hand) {
        let name = name.into();
        if self.hands.insert(name.clone(), hand).is_none() {
            self.order.push(name);
        }
    }

    /// Returns the hand for the given participant.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Hand> {
        self.hands.get(name)
    }

    /// Returns the number of hands in the round.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns whether the round holds no hands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates over `(name, hand)` entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Hand)> {
        self.order
            .iter()
            .filter_map(|name| self.hands.get(name).map(|hand| (name.as_str(), hand)))
    }
}

impl<S: Into<String>> FromIterator<(S, Hand)> for Round {
    fn from_iter<I: IntoIterator<Item = (S, Hand)>>(iter: I) -> Self {
        let mut round = Self::new();
        for (name, hand) in iter {
            round.insert(name, hand);
        }
        round
    }
}

/// Resolves a single hand, optionally comparing it against the dealer's
/// already resolved result.
///
/// Pass `None` for the dealer's own hand: its outcome stays empty unless
/// the five-card charlie rule applies, which marks an automatic win even
/// with nobody to compare against.
///
/// # Example
///
/// ```
/// use twentyone::{resolve_hand, Hand, HandOutcome, HandValue, Rank};
///
/// let dealer_hand = Hand::from(vec![Rank::Jack, Rank::Nine]);
/// let dealer = resolve_hand("Dealer", &dealer_hand, None);
/// assert_eq!(dealer.value, HandValue::Points(19));
/// assert_eq!(dealer.outcome, None);
///
/// let player_hand = Hand::from(vec![Rank::Ace, Rank::Seven, Rank::Ace]);
/// let player = resolve_hand("Lemmy", &player_hand, Some(&dealer));
/// assert_eq!(player.outcome, Some(HandOutcome::Push));
/// ```
#[must_use]
pub fn resolve_hand(name: &str, hand: &Hand, dealer: Option<&HandResult>) -> HandResult {
    // Five cards without busting win outright; the value is not a number
    // and no dealer total can override the outcome.
    if hand.is_five_card_charlie() {
        return HandResult {
            name: String::from(name),
            value: HandValue::FiveCardCharlie,
            outcome: Some(HandOutcome::FiveCardCharlie),
        };
    }

    let points = hand.value();
    let outcome = dealer.map(|dealer| outcome_against(points, dealer.value));

    HandResult {
        name: String::from(name),
        value: HandValue::Points(points),
        outcome,
    }
}

/// Compares a player's points against the dealer's resolved value.
///
/// A charlie dealer value has no points: it exceeds nothing and ties
/// nothing, so only the player's own bust loses the hand.
fn outcome_against(points: u8, dealer: HandValue) -> HandOutcome {
    let dealer_points = dealer.points();

    if points > 21 || dealer_points.is_some_and(|dealer| dealer > points) {
        HandOutcome::Lose
    } else if dealer_points == Some(points) {
        HandOutcome::Push
    } else {
        HandOutcome::Win
    }
}

/// Evaluates a full round: the dealer's hand first with no comparison,
/// then every other hand as a player against the dealer's result, in
/// insertion order.
///
/// # Errors
///
/// Returns an error if `dealer_key` has no hand in the round.
///
/// # Example
///
/// ```
/// use twentyone::{evaluate_round, Hand, HandOutcome, Rank, Round, DEALER};
///
/// let mut round = Round::new();
/// round.insert(DEALER, Hand::from(vec![Rank::Jack, Rank::Nine]));
/// round.insert("Andrew", Hand::from(vec![Rank::King, Rank::Four, Rank::Four]));
///
/// let result = evaluate_round(&round, DEALER).unwrap();
/// assert_eq!(result.players[0].outcome, Some(HandOutcome::Lose));
/// ```
pub fn evaluate_round(round: &Round, dealer_key: &str) -> Result<RoundResult, RoundError> {
    let dealer_hand = round.get(dealer_key).ok_or(RoundError::DealerMissing)?;
    let dealer = resolve_hand(dealer_key, dealer_hand, None);

    let players = round
        .entries()
        .filter(|(name, _)| *name != dealer_key)
        .map(|(name, hand)| resolve_hand(name, hand, Some(&dealer)))
        .collect();

    Ok(RoundResult { dealer, players })
}
