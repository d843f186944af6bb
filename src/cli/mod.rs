//! Terminal front end helpers: prompt commands and score tables.

mod command;
mod table;

pub use command::{Command, CommandError, HELP_TEXT};
pub use table::{render_dice, render_scores, NOT_ATTEMPTED};
