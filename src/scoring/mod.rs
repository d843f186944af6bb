//! Scoring: categories, the pure per-category rules, and the scoreboard.
//!
//! - [`CategoryKind`]: the closed set of 13 categories and their 1..=13
//!   index table.
//! - [`evaluate`]: one pure function scoring any category for any dice.
//! - [`ScoreBoard`]: 13 [`CategorySlot`]s, totals and bonuses.

mod board;
mod category;
mod rules;

pub use board::{
    CategorySlot, ScoreBoard, Submission, EXTRA_KNIFFEL_BONUS, UPPER_BONUS,
    UPPER_BONUS_THRESHOLD,
};
pub use category::{CategoryKind, CATEGORY_COUNT, UPPER_COUNT};
pub use rules::{
    evaluate, evaluate_all, FIVE_OF_A_KIND_SCORE, FULL_HOUSE_SCORE, LARGE_STRAIGHT_SCORE,
    SMALL_STRAIGHT_SCORE,
};
