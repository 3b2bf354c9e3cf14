//! Ordering types for result sorting.
//!
//! Provides [`Dir`] for sort direction, [`SortKey`] for the attributes a
//! result can be sorted on, and [`OrderBy`] pairing the two into a
//! comparator.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::{Result, SeekerError};
use crate::field::{normalize, Field};
use crate::game::{compare_names, BoardGame};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Direction from an `ascending` flag.
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            Dir::Asc
        } else {
            Dir::Desc
        }
    }

    /// Returns `true` if this is ascending order.
    pub fn is_asc(self) -> bool {
        matches!(self, Dir::Asc)
    }

    /// Applies this direction to an ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An attribute results can be sorted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Rating,
    Difficulty,
    MinPlayers,
    MaxPlayers,
    MinPlayTime,
    MaxPlayTime,
    Rank,
    YearPublished,
    Id,
    Name,
}

impl SortKey {
    pub const ALL: [SortKey; 10] = [
        SortKey::Rating,
        SortKey::Difficulty,
        SortKey::MinPlayers,
        SortKey::MaxPlayers,
        SortKey::MinPlayTime,
        SortKey::MaxPlayTime,
        SortKey::Rank,
        SortKey::YearPublished,
        SortKey::Id,
        SortKey::Name,
    ];

    /// The field this key reads.
    pub fn field(self) -> Field {
        match self {
            SortKey::Rating => Field::Rating,
            SortKey::Difficulty => Field::Difficulty,
            SortKey::MinPlayers => Field::MinPlayers,
            SortKey::MaxPlayers => Field::MaxPlayers,
            SortKey::MinPlayTime => Field::MinPlayTime,
            SortKey::MaxPlayTime => Field::MaxPlayTime,
            SortKey::Rank => Field::Rank,
            SortKey::YearPublished => Field::YearPublished,
            SortKey::Id => Field::Id,
            SortKey::Name => Field::Name,
        }
    }

    /// Compares two games on this key, ascending.
    pub fn compare(self, a: &BoardGame, b: &BoardGame) -> Ordering {
        let field = self.field();
        match (field.value(a).as_number(), field.value(b).as_number()) {
            (Some(x), Some(y)) => x.total_cmp(y),
            _ => compare_names(a.name(), b.name()),
        }
    }

    pub fn as_str(self) -> &'static str {
        self.field().as_str()
    }
}

impl FromStr for SortKey {
    type Err = SeekerError;

    /// Parses a sort key with the same normalization as field names.
    fn from_str(s: &str) -> Result<Self> {
        let key = normalize(s);
        SortKey::ALL
            .into_iter()
            .find(|k| normalize(k.as_str()) == key)
            .or(match key.as_str() {
                "mintime" => Some(SortKey::MinPlayTime),
                "maxtime" => Some(SortKey::MaxPlayTime),
                _ => None,
            })
            .ok_or_else(|| SeekerError::UnknownSortKey(s.trim().to_string()))
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sort key with a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy {
    pub key: SortKey,
    pub dir: Dir,
}

impl OrderBy {
    pub fn new(key: SortKey, dir: Dir) -> Self {
        OrderBy { key, dir }
    }

    pub fn asc(key: SortKey) -> Self {
        OrderBy::new(key, Dir::Asc)
    }

    pub fn desc(key: SortKey) -> Self {
        OrderBy::new(key, Dir::Desc)
    }

    /// Compares two games according to this ordering.
    ///
    /// Equal keys compare `Equal`; there is no tie-break, so a stable sort
    /// keeps tied games in their incoming order.
    pub fn compare(&self, a: &BoardGame, b: &BoardGame) -> Ordering {
        self.dir.apply(self.key.compare(a, b))
    }
}

/// Returns a comparator for `key`, reversed when `ascending` is false.
pub fn comparator(key: SortKey, ascending: bool) -> impl Fn(&BoardGame, &BoardGame) -> Ordering {
    let order = OrderBy::new(key, Dir::from_ascending(ascending));
    move |a, b| order.compare(a, b)
}
