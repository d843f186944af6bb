//! Property-based tests for dice and scoring.

use proptest::prelude::*;

use kniffel::core::FixedDice;
use kniffel::dice::DiceSet;
use kniffel::scoring::{
    evaluate, evaluate_all, CategoryKind, ScoreBoard, EXTRA_KNIFFEL_BONUS, UPPER_BONUS,
    UPPER_BONUS_THRESHOLD,
};

/// Strategy: five rolled faces.
fn faces_strategy() -> impl Strategy<Value = [u8; 5]> {
    prop::array::uniform5(1..=6u8)
}

/// Strategy: any subset of die indices 1-5.
fn held_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::sample::subsequence(vec![1usize, 2, 3, 4, 5], 0..=5)
}

/// Strategy: any category.
fn category_strategy() -> impl Strategy<Value = CategoryKind> {
    prop::sample::select(CategoryKind::ALL.to_vec())
}

proptest! {
    // Rolling never changes a held die
    #[test]
    fn held_dice_survive_rolls(
        start in faces_strategy(),
        script in prop::collection::vec(1..=6u8, 1..20),
        held in held_strategy(),
    ) {
        let mut dice = DiceSet::from_values(start);
        dice.hold(&held).unwrap();

        dice.roll(&mut FixedDice::new(script));

        for &index in &held {
            prop_assert_eq!(dice.values()[index - 1], start[index - 1]);
            prop_assert!(dice.held()[index - 1]);
        }
    }

    // Scoring is deterministic and leaves the dice alone
    #[test]
    fn evaluate_is_pure(faces in faces_strategy(), kind in category_strategy()) {
        let dice = DiceSet::from_values(faces);
        let first = evaluate(kind, &dice);
        let second = evaluate(kind, &dice);
        prop_assert_eq!(first, second);
        prop_assert_eq!(dice, DiceSet::from_values(faces));
    }

    // Three and four of a kind score all five dice
    #[test]
    fn of_a_kind_sums_all_dice(faces in faces_strategy()) {
        let dice = DiceSet::from_values(faces);
        let three = evaluate(CategoryKind::ThreeOfAKind, &dice);
        let four = evaluate(CategoryKind::FourOfAKind, &dice);
        let sum: u32 = faces.iter().map(|&f| u32::from(f)).sum();

        prop_assert!(three == 0 || three == sum);
        prop_assert!(four == 0 || four == sum);
        if four > 0 {
            prop_assert_eq!(three, four);
        }
    }

    // Upper categories count only their face
    #[test]
    fn upper_counts_face(faces in faces_strategy()) {
        let dice = DiceSet::from_values(faces);
        for kind in CategoryKind::UPPER {
            let face = kind.face().unwrap();
            let expected = faces.iter().filter(|&&f| f == face).count() as u32 * u32::from(face);
            prop_assert_eq!(evaluate(kind, &dice), expected);
        }
    }

    // A large straight is always a small straight
    #[test]
    fn large_implies_small(faces in faces_strategy()) {
        let scores = evaluate_all(&DiceSet::from_values(faces));
        if scores[CategoryKind::LargeStraight.index() - 1] > 0 {
            prop_assert!(scores[CategoryKind::SmallStraight.index() - 1] > 0);
        }
    }

    // Scores never depend on dice order
    #[test]
    fn order_independent(faces in faces_strategy()) {
        let mut reversed = faces;
        reversed.reverse();
        prop_assert_eq!(
            evaluate_all(&DiceSet::from_values(faces)),
            evaluate_all(&DiceSet::from_values(reversed))
        );
    }

    // Five of a kind scores 50 in Kniffel and never counts as a full house
    #[test]
    fn five_of_a_kind(face in 1..=6u8) {
        let dice = DiceSet::from_values([face; 5]);
        prop_assert_eq!(evaluate(CategoryKind::FiveOfAKind, &dice), 50);
        prop_assert_eq!(evaluate(CategoryKind::FullHouse, &dice), 0);
    }

    // Totals always add up
    #[test]
    fn board_total_is_consistent(rolls in prop::collection::vec(faces_strategy(), 13)) {
        let mut board = ScoreBoard::new();
        for (kind, faces) in CategoryKind::ALL.into_iter().zip(rolls) {
            board.submit_kind(kind, DiceSet::from_values(faces)).unwrap();
        }

        prop_assert!(board.is_complete());
        prop_assert_eq!(
            board.total(),
            board.upper_total() + board.lower_total() + board.bonus_points()
        );
        let expected_bonus = if board.upper_subtotal() >= UPPER_BONUS_THRESHOLD {
            UPPER_BONUS
        } else {
            0
        };
        prop_assert_eq!(board.upper_bonus(), expected_bonus);
        prop_assert_eq!(board.bonus_points() % EXTRA_KNIFFEL_BONUS, 0);
    }
}
