//! Console round report example.
//!
//! Evaluates the two bundled rounds and prints each report in the classic
//! `name value outcome` form.

#![allow(clippy::missing_docs_in_private_items)]

use twentyone::{DEALER, Hand, Rank, Round, RoundError, evaluate_round};

fn main() -> Result<(), RoundError> {
    print_round(&example_hands())?;
    print_round(&test_case())?;
    Ok(())
}

fn print_round(round: &Round) -> Result<(), RoundError> {
    let result = evaluate_round(round, DEALER)?;

    println!("-- NEW TEST CASE --");
    println!("{} {}", result.dealer.name, result.dealer.value);
    for player in &result.players {
        match player.outcome {
            Some(outcome) => println!("{} {} {}", player.name, player.value, outcome),
            None => println!("{} {}", player.name, player.value),
        }
    }
    Ok(())
}

// Suits are ignored as they have no bearing on the totals.
fn example_hands() -> Round {
    [
        (DEALER, Hand::from(vec![Rank::Six, Rank::Nine])),
        ("Andrew", Hand::from(vec![Rank::Nine, Rank::Six, Rank::Jack])),
        ("Billy", Hand::from(vec![Rank::Queen, Rank::King])),
        ("Carla", Hand::from(vec![Rank::Two, Rank::Nine, Rank::King])),
    ]
    .into_iter()
    .collect()
}

fn test_case() -> Round {
    [
        (DEALER, Hand::from(vec![Rank::Jack, Rank::Nine])),
        ("Lemmy", Hand::from(vec![Rank::Ace, Rank::Seven, Rank::Ace])),
        ("Andrew", Hand::from(vec![Rank::King, Rank::Four, Rank::Four])),
        (
            "Billy",
            Hand::from(vec![
                Rank::Two,
                Rank::Two,
                Rank::Two,
                Rank::Four,
                Rank::Five,
            ]),
        ),
        ("Carla", Hand::from(vec![Rank::Queen, Rank::Six, Rank::Nine])),
    ]
    .into_iter()
    .collect()
}
