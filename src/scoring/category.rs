//! The thirteen scoring categories.

use serde::{Deserialize, Serialize};

use crate::core::KniffelError;

/// Number of categories on a scoreboard.
pub const CATEGORY_COUNT: usize = 13;

/// Number of upper (face-value) categories.
pub const UPPER_COUNT: usize = 6;

/// A scoring category.
///
/// Variants are declared in canonical order, which is both the 1..=13 index
/// table used by the command line and the order the greedy strategy
/// enumerates them in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CategoryKind {
    Ones,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    ThreeOfAKind,
    FourOfAKind,
    FullHouse,
    SmallStraight,
    LargeStraight,
    FiveOfAKind,
    Chance,
}

impl CategoryKind {
    /// All categories in canonical order.
    pub const ALL: [CategoryKind; CATEGORY_COUNT] = [
        CategoryKind::Ones,
        CategoryKind::Twos,
        CategoryKind::Threes,
        CategoryKind::Fours,
        CategoryKind::Fives,
        CategoryKind::Sixes,
        CategoryKind::ThreeOfAKind,
        CategoryKind::FourOfAKind,
        CategoryKind::FullHouse,
        CategoryKind::SmallStraight,
        CategoryKind::LargeStraight,
        CategoryKind::FiveOfAKind,
        CategoryKind::Chance,
    ];

    /// The face-value categories.
    pub const UPPER: [CategoryKind; UPPER_COUNT] = [
        CategoryKind::Ones,
        CategoryKind::Twos,
        CategoryKind::Threes,
        CategoryKind::Fours,
        CategoryKind::Fives,
        CategoryKind::Sixes,
    ];

    /// Look up a category by its 1-based index.
    ///
    /// ```
    /// use kniffel::scoring::CategoryKind;
    ///
    /// assert_eq!(CategoryKind::from_index(12).unwrap(), CategoryKind::FiveOfAKind);
    /// assert!(CategoryKind::from_index(14).is_err());
    /// ```
    pub fn from_index(index: usize) -> Result<Self, KniffelError> {
        index
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(KniffelError::CategoryIndexOutOfRange { index })
    }

    /// The 1-based index (1..=13).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize + 1
    }

    /// Position in a 0-based slot array.
    #[must_use]
    pub(crate) const fn slot(self) -> usize {
        self as usize
    }

    /// The face counted by an upper category, `None` for lower ones.
    #[must_use]
    pub const fn face(self) -> Option<u8> {
        match self {
            CategoryKind::Ones => Some(1),
            CategoryKind::Twos => Some(2),
            CategoryKind::Threes => Some(3),
            CategoryKind::Fours => Some(4),
            CategoryKind::Fives => Some(5),
            CategoryKind::Sixes => Some(6),
            _ => None,
        }
    }

    /// Is this one of the six face-value categories?
    #[must_use]
    pub const fn is_upper(self) -> bool {
        self.face().is_some()
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CategoryKind::Ones => "Ones",
            CategoryKind::Twos => "Twos",
            CategoryKind::Threes => "Threes",
            CategoryKind::Fours => "Fours",
            CategoryKind::Fives => "Fives",
            CategoryKind::Sixes => "Sixes",
            CategoryKind::ThreeOfAKind => "Three of a kind",
            CategoryKind::FourOfAKind => "Four of a kind",
            CategoryKind::FullHouse => "Full house",
            CategoryKind::SmallStraight => "Small straight",
            CategoryKind::LargeStraight => "Large straight",
            CategoryKind::FiveOfAKind => "Kniffel",
            CategoryKind::Chance => "Chance",
        }
    }
}

impl std::fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, kind) in CategoryKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i + 1);
            assert_eq!(CategoryKind::from_index(i + 1).unwrap(), *kind);
        }
    }

    #[test]
    fn test_from_index_out_of_range() {
        assert_eq!(
            CategoryKind::from_index(0),
            Err(KniffelError::CategoryIndexOutOfRange { index: 0 })
        );
        assert_eq!(
            CategoryKind::from_index(14),
            Err(KniffelError::CategoryIndexOutOfRange { index: 14 })
        );
    }

    #[test]
    fn test_upper_partition() {
        let upper: Vec<_> = CategoryKind::ALL.iter().filter(|k| k.is_upper()).copied().collect();
        assert_eq!(upper, CategoryKind::UPPER.to_vec());

        for kind in CategoryKind::UPPER {
            assert_eq!(kind.face(), Some(kind.index() as u8));
        }
        assert_eq!(CategoryKind::Chance.face(), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(CategoryKind::FiveOfAKind.to_string(), "Kniffel");
        assert_eq!(CategoryKind::ThreeOfAKind.name(), "Three of a kind");
        assert_eq!(CategoryKind::Sixes.name(), "Sixes");
    }
}
