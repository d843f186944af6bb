//! Dice: a single [`Die`] and the five-die [`DiceSet`] each player rolls.

mod die;
mod set;

pub use die::Die;
pub use set::{DiceSet, DICE_COUNT};
