//! Text commands typed at the game prompt.
//!
//! Every command has a word and a numeric alias:
//!
//! | Word                  | Alias | Arguments          |
//! |-----------------------|-------|--------------------|
//! | `roll`                | `0`   |                    |
//! | `save` / `hold`       | `1`   | die indices 1-5    |
//! | `un-save` / `unhold`  | `2`   | die indices 1-5    |
//! | `submit`              | `3`   | category index     |
//! | `help`                | `4`   |                    |
//! | `score`               | `5`   |                    |
//! | `dice`                | `6`   |                    |
//! | `reset`               | `7`   |                    |
//! | `exit`                | `9`   |                    |
//!
//! Parsing only checks shape. Whether an index is in range is up to the
//! game.

use thiserror::Error;

use crate::core::DieIndices;

/// Command overview shown by `help`.
pub const HELP_TEXT: &str = "\
Commands:
[0] roll: Roll the dice
[1] save <die_index...>: Hold the dice with the given indices [1-5]
[2] un-save <die_index...>: Release the dice with the given indices [1-5]
[3] submit <category_index>: Score the dice in the given category [1-13]
[4] help: Show this help message
[5] score: Show the score table
[6] dice: Show the current dice
[7] reset: Restart the game
[9] exit: Leave the game";

/// A parsed prompt command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Roll,
    Hold(DieIndices),
    Unhold(DieIndices),
    Submit(usize),
    Help,
    Score,
    Dice,
    Reset,
    Exit,
}

/// Input that is not a command.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("invalid input {input:?}: {reason}")]
    Malformed { input: String, reason: String },

    #[error("unknown command: {command}")]
    Unknown { command: String },
}

impl Command {
    /// Parse one line of input.
    ///
    /// ```
    /// use kniffel::cli::Command;
    ///
    /// assert_eq!(Command::parse("3 12").unwrap(), Command::Submit(12));
    /// assert!(Command::parse("").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let mut words = input.split_whitespace();
        let Some(word) = words.next() else {
            return Err(malformed(input, "empty input"));
        };
        let args: Vec<&str> = words.collect();

        let command = match word.to_ascii_lowercase().as_str() {
            "roll" | "0" => Command::Roll,
            "save" | "hold" | "1" => Command::Hold(die_indices(input, &args)?),
            "un-save" | "unsave" | "unhold" | "2" => Command::Unhold(die_indices(input, &args)?),
            "submit" | "3" => {
                let first = args
                    .first()
                    .ok_or_else(|| malformed(input, "expected a category index"))?;
                Command::Submit(number(input, first)?)
            }
            "help" | "4" => Command::Help,
            "score" | "5" => Command::Score,
            "dice" | "6" => Command::Dice,
            "reset" | "7" => Command::Reset,
            "exit" | "quit" | "9" => Command::Exit,
            _ => {
                return Err(CommandError::Unknown {
                    command: word.to_string(),
                })
            }
        };
        Ok(command)
    }
}

impl std::str::FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn die_indices(input: &str, args: &[&str]) -> Result<DieIndices, CommandError> {
    if args.is_empty() {
        return Err(malformed(input, "expected at least one die index"));
    }
    args.iter().map(|arg| number(input, arg)).collect()
}

fn number(input: &str, arg: &str) -> Result<usize, CommandError> {
    arg.parse()
        .map_err(|_| malformed(input, &format!("{arg:?} is not a number")))
}

fn malformed(input: &str, reason: &str) -> CommandError {
    CommandError::Malformed {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_words_and_aliases() {
        assert_eq!(Command::parse("roll").unwrap(), Command::Roll);
        assert_eq!(Command::parse("0").unwrap(), Command::Roll);
        assert_eq!(Command::parse("help").unwrap(), Command::Help);
        assert_eq!(Command::parse("4").unwrap(), Command::Help);
        assert_eq!(Command::parse("score").unwrap(), Command::Score);
        assert_eq!(Command::parse("5").unwrap(), Command::Score);
        assert_eq!(Command::parse("dice").unwrap(), Command::Dice);
        assert_eq!(Command::parse("6").unwrap(), Command::Dice);
        assert_eq!(Command::parse("reset").unwrap(), Command::Reset);
        assert_eq!(Command::parse("7").unwrap(), Command::Reset);
        assert_eq!(Command::parse("exit").unwrap(), Command::Exit);
        assert_eq!(Command::parse("9").unwrap(), Command::Exit);
        assert_eq!(Command::parse("  ROLL  ").unwrap(), Command::Roll);
    }

    #[test]
    fn test_hold_and_unhold() {
        assert_eq!(
            Command::parse("save 1 3 5").unwrap(),
            Command::Hold(smallvec![1, 3, 5])
        );
        assert_eq!(Command::parse("hold 2").unwrap(), Command::Hold(smallvec![2]));
        assert_eq!(Command::parse("1 4").unwrap(), Command::Hold(smallvec![4]));
        assert_eq!(
            Command::parse("un-save 2 3").unwrap(),
            Command::Unhold(smallvec![2, 3])
        );
        assert_eq!(Command::parse("2 5").unwrap(), Command::Unhold(smallvec![5]));
    }

    #[test]
    fn test_submit() {
        assert_eq!(Command::parse("submit 13").unwrap(), Command::Submit(13));
        assert_eq!("3 1".parse::<Command>().unwrap(), Command::Submit(1));
        // range checks belong to the game
        assert_eq!(Command::parse("3 99").unwrap(), Command::Submit(99));
    }

    #[test]
    fn test_malformed() {
        for input in ["", "   ", "save", "1", "submit", "3 x", "hold 1 two", "submit -1"] {
            assert!(
                matches!(Command::parse(input), Err(CommandError::Malformed { .. })),
                "{input:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_unknown() {
        assert_eq!(
            Command::parse("jump 3"),
            Err(CommandError::Unknown {
                command: "jump".to_string()
            })
        );
        assert!(matches!(Command::parse("8"), Err(CommandError::Unknown { .. })));
    }

    #[test]
    fn test_help_lists_every_alias() {
        for alias in ["[0]", "[1]", "[2]", "[3]", "[4]", "[5]", "[6]", "[7]", "[9]"] {
            assert!(HELP_TEXT.contains(alias));
        }
    }
}
