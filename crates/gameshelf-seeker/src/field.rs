//! Field registry.
//!
//! Every attribute a filter clause or sort key can name is a [`Field`]. Field
//! names are resolved once, at parse time, so evaluation never touches
//! strings. Resolution ignores case, underscores and whitespace, which makes
//! `min_players`, `minPlayers` and `MIN PLAYERS` the same field.

use std::str::FromStr;

use crate::error::{Result, SeekerError};
use crate::game::BoardGame;
use crate::value::{Number, Value};

/// The type of value a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    String,
    Number,
}

impl FieldKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Number => "number",
        }
    }
}

/// A queryable attribute of a [`BoardGame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Name,
    MinPlayers,
    MaxPlayers,
    MinPlayTime,
    MaxPlayTime,
    Difficulty,
    Rating,
    Rank,
    YearPublished,
}

impl Field {
    /// All fields, in declaration order.
    pub const ALL: [Field; 10] = [
        Field::Id,
        Field::Name,
        Field::MinPlayers,
        Field::MaxPlayers,
        Field::MinPlayTime,
        Field::MaxPlayTime,
        Field::Difficulty,
        Field::Rating,
        Field::Rank,
        Field::YearPublished,
    ];

    /// Looks up a field by name.
    ///
    /// ```
    /// use gameshelf_seeker::Field;
    ///
    /// assert_eq!(Field::resolve("min_players").unwrap(), Field::MinPlayers);
    /// assert_eq!(Field::resolve("minPlayers").unwrap(), Field::MinPlayers);
    /// assert!(Field::resolve("colour").is_err());
    /// ```
    pub fn resolve(name: &str) -> Result<Field> {
        let field = match normalize(name).as_str() {
            "id" => Field::Id,
            "name" => Field::Name,
            "minplayers" => Field::MinPlayers,
            "maxplayers" => Field::MaxPlayers,
            "minplaytime" | "mintime" => Field::MinPlayTime,
            "maxplaytime" | "maxtime" => Field::MaxPlayTime,
            "difficulty" => Field::Difficulty,
            "rating" => Field::Rating,
            "rank" => Field::Rank,
            "yearpublished" => Field::YearPublished,
            _ => return Err(SeekerError::UnknownField(name.trim().to_string())),
        };
        Ok(field)
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::Name => FieldKind::String,
            _ => FieldKind::Number,
        }
    }

    /// Reads this field from a game.
    pub fn value(self, game: &BoardGame) -> Value<'_> {
        match self {
            Field::Name => Value::String(game.name()),
            Field::Id => Value::Number(Number::I64(game.id())),
            Field::MinPlayers => Value::Number(Number::I64(game.min_players())),
            Field::MaxPlayers => Value::Number(Number::I64(game.max_players())),
            Field::MinPlayTime => Value::Number(Number::I64(game.min_play_time())),
            Field::MaxPlayTime => Value::Number(Number::I64(game.max_play_time())),
            Field::Difficulty => Value::Number(Number::F64(game.difficulty())),
            Field::Rating => Value::Number(Number::F64(game.rating())),
            Field::Rank => Value::Number(Number::I64(game.rank())),
            Field::YearPublished => Value::Number(Number::I64(game.year_published())),
        }
    }

    /// Canonical display name.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Name => "name",
            Field::MinPlayers => "minPlayers",
            Field::MaxPlayers => "maxPlayers",
            Field::MinPlayTime => "minPlayTime",
            Field::MaxPlayTime => "maxPlayTime",
            Field::Difficulty => "difficulty",
            Field::Rating => "rating",
            Field::Rank => "rank",
            Field::YearPublished => "yearPublished",
        }
    }
}

impl FromStr for Field {
    type Err = SeekerError;

    fn from_str(s: &str) -> Result<Self> {
        Field::resolve(s)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lowercases and drops underscores and whitespace.
pub(crate) fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_' && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
