//! Pure scoring functions: five dice in, one category score out.

use super::category::{CategoryKind, CATEGORY_COUNT};
use crate::core::{MAX_FACE, MIN_FACE};
use crate::dice::DiceSet;

/// Fixed score for a full house.
pub const FULL_HOUSE_SCORE: u32 = 25;

/// Fixed score for four consecutive faces.
pub const SMALL_STRAIGHT_SCORE: u32 = 30;

/// Fixed score for five consecutive faces.
pub const LARGE_STRAIGHT_SCORE: u32 = 40;

/// Fixed score for five of a kind.
pub const FIVE_OF_A_KIND_SCORE: u32 = 50;

/// Score `dice` in category `kind`.
///
/// Never mutates the dice. Unrolled dice (face 0) never match a face, so a
/// fresh set scores 0 everywhere.
///
/// ```
/// use kniffel::dice::DiceSet;
/// use kniffel::scoring::{evaluate, CategoryKind};
///
/// let dice = DiceSet::from_values([4, 4, 4, 5, 5]);
/// assert_eq!(evaluate(CategoryKind::ThreeOfAKind, &dice), 22);
/// assert_eq!(evaluate(CategoryKind::FourOfAKind, &dice), 0);
/// assert_eq!(evaluate(CategoryKind::FullHouse, &dice), 25);
/// ```
#[must_use]
pub fn evaluate(kind: CategoryKind, dice: &DiceSet) -> u32 {
    let counts = dice.face_counts();

    match kind {
        CategoryKind::Ones
        | CategoryKind::Twos
        | CategoryKind::Threes
        | CategoryKind::Fours
        | CategoryKind::Fives
        | CategoryKind::Sixes => {
            let face = kind.face().unwrap_or(0);
            u32::from(face) * u32::from(counts[face as usize])
        }
        CategoryKind::ThreeOfAKind => {
            if max_of_a_kind(&counts) >= 3 {
                dice.sum()
            } else {
                0
            }
        }
        CategoryKind::FourOfAKind => {
            if max_of_a_kind(&counts) >= 4 {
                dice.sum()
            } else {
                0
            }
        }
        CategoryKind::FullHouse => {
            if is_full_house(&counts) {
                FULL_HOUSE_SCORE
            } else {
                0
            }
        }
        CategoryKind::SmallStraight => {
            if longest_run(&counts) >= 4 {
                SMALL_STRAIGHT_SCORE
            } else {
                0
            }
        }
        CategoryKind::LargeStraight => {
            if longest_run(&counts) >= 5 {
                LARGE_STRAIGHT_SCORE
            } else {
                0
            }
        }
        CategoryKind::FiveOfAKind => {
            if max_of_a_kind(&counts) == 5 {
                FIVE_OF_A_KIND_SCORE
            } else {
                0
            }
        }
        CategoryKind::Chance => dice.sum(),
    }
}

/// Score `dice` in every category, in canonical order.
#[must_use]
pub fn evaluate_all(dice: &DiceSet) -> [u32; CATEGORY_COUNT] {
    CategoryKind::ALL.map(|kind| evaluate(kind, dice))
}

fn faces(counts: &[u8]) -> impl Iterator<Item = u8> + '_ {
    (MIN_FACE..=MAX_FACE).map(move |face| counts[face as usize])
}

/// Largest number of dice sharing a rolled face.
fn max_of_a_kind(counts: &[u8]) -> u8 {
    faces(counts).max().unwrap_or(0)
}

/// One face exactly three times and a different face exactly twice.
fn is_full_house(counts: &[u8]) -> bool {
    faces(counts).any(|c| c == 3) && faces(counts).any(|c| c == 2)
}

/// Length of the longest run of consecutive faces present at least once.
fn longest_run(counts: &[u8]) -> u8 {
    let mut best = 0;
    let mut run = 0;
    for count in faces(counts) {
        run = if count > 0 { run + 1 } else { 0 };
        best = best.max(run);
    }
    best
}
