//! A blackjack hand evaluator with optional `no_std` support.
//!
//! The crate scores hands under blackjack (21) rules: every Ace counts as
//! 1 or 11, whichever combination yields the highest total within 21, and
//! a five-card hand that avoids busting wins outright (the five-card
//! charlie). A [`Round`] of named hands is settled against a dealer hand
//! with [`evaluate_round`], yielding win/lose/push outcomes per player.
//!
//! # Example
//!
//! ```
//! use twentyone::{evaluate_round, Hand, HandOutcome, Rank, Round, DEALER};
//!
//! let mut round = Round::new();
//! round.insert(DEALER, Hand::from(vec![Rank::Jack, Rank::Nine]));
//! round.insert("Lemmy", Hand::from(vec![Rank::Ace, Rank::Seven, Rank::Ace]));
//!
//! let result = evaluate_round(&round, DEALER).unwrap();
//! assert_eq!(result.players[0].outcome, Some(HandOutcome::Push));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod hand;
pub mod result;
pub mod round;

// Re-export main types
pub use card::Rank;
pub use error::{ParseRankError, RoundError};
pub use hand::{CHARLIE_SIZE, Hand};
pub use result::{HandOutcome, HandResult, HandValue, RoundResult};
pub use round::{DEALER, Round, evaluate_round, resolve_hand};
