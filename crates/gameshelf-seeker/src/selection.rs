//! Selection tokens.
//!
//! A selection token addresses games within an ordered candidate sequence:
//!
//! | Token     | Meaning                                  |
//! |-----------|------------------------------------------|
//! | `all`     | every candidate                          |
//! | `3`       | the third candidate (1-based)            |
//! | `2-5`     | candidates two through five, inclusive   |
//! | `Catan`   | the candidate named `Catan`, any case    |
//!
//! Index and range tokens are only meaningful against the sequence they
//! were read from, so callers must resolve against the same ordering they
//! displayed.

use std::borrow::Borrow;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, SeekerError};
use crate::game::BoardGame;
use crate::query::ALL;

static INDEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").expect("valid index regex"));
static RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)-(\d+)$").expect("valid range regex"));

/// A parsed selection token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Every candidate.
    All,
    /// One candidate by 1-based position.
    Index(usize),
    /// An inclusive 1-based range.
    Range(usize, usize),
    /// One candidate by exact, case-insensitive name.
    Name(String),
}

impl Selection {
    /// Parses a selection token.
    ///
    /// Patterns are tried in order: `all`, index, range, then name. Digits
    /// too large to represent fail with `InvalidToken`, as does an empty
    /// token.
    pub fn parse(token: &str) -> Result<Self> {
        let token = token.trim();
        if token.is_empty() {
            return Err(SeekerError::InvalidToken(token.to_string()));
        }
        if token.eq_ignore_ascii_case(ALL) {
            return Ok(Selection::All);
        }
        if INDEX.is_match(token) {
            return Ok(Selection::Index(parse_position(token, token)?));
        }
        if let Some(caps) = RANGE.captures(token) {
            let start = parse_position(&caps[1], token)?;
            let end = parse_position(&caps[2], token)?;
            return Ok(Selection::Range(start, end));
        }
        Ok(Selection::Name(token.to_string()))
    }

    /// Resolves this selection against an ordered candidate sequence.
    ///
    /// Fails with `OutOfRange` when an index or range does not fit the
    /// sequence, and `NotFound` when no candidate has the given name.
    pub fn resolve<'a, G>(&self, candidates: &'a [G]) -> Result<Vec<&'a BoardGame>>
    where
        G: Borrow<BoardGame>,
    {
        let len = candidates.len();
        let games: Vec<&'a BoardGame> = match self {
            Selection::All => candidates.iter().map(as_game).collect(),
            Selection::Index(index) => {
                if *index < 1 || *index > len {
                    return Err(SeekerError::out_of_range(self.to_string(), len));
                }
                vec![as_game(&candidates[index - 1])]
            }
            Selection::Range(start, end) => {
                if *start < 1 || *end > len || start > end {
                    return Err(SeekerError::out_of_range(self.to_string(), len));
                }
                candidates[start - 1..*end]
                    .iter()
                    .map(as_game)
                    .collect()
            }
            Selection::Name(name) => {
                let game = candidates
                    .iter()
                    .map(as_game)
                    .find(|game: &&BoardGame| game.name_eq(name))
                    .ok_or_else(|| SeekerError::NotFound(name.clone()))?;
                vec![game]
            }
        };

        debug!("selection {self} resolved to {} game(s)", games.len());
        Ok(games)
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selection::All => f.write_str(ALL),
            Selection::Index(index) => write!(f, "{index}"),
            Selection::Range(start, end) => write!(f, "{start}-{end}"),
            Selection::Name(name) => f.write_str(name),
        }
    }
}

/// Parses `token` and resolves it against `candidates` in one step.
pub fn resolve<'a, G>(token: &str, candidates: &'a [G]) -> Result<Vec<&'a BoardGame>>
where
    G: Borrow<BoardGame>,
{
    Selection::parse(token)?.resolve(candidates)
}

fn as_game<G: Borrow<BoardGame>>(game: &G) -> &BoardGame {
    <G as Borrow<BoardGame>>::borrow(game)
}

fn parse_position(digits: &str, token: &str) -> Result<usize> {
    digits
        .parse()
        .map_err(|_| SeekerError::InvalidToken(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit() -> Vec<BoardGame> {
        ["Apple", "Banana", "Orange"]
            .into_iter()
            .map(|name| BoardGame::builder(name).build())
            .collect()
    }

    fn names(games: &[&BoardGame]) -> Vec<String> {
        games.iter().map(|g| g.name().to_string()).collect()
    }

    #[test]
    fn parse_token_kinds() {
        assert_eq!(Selection::parse("ALL").unwrap(), Selection::All);
        assert_eq!(Selection::parse(" 2 ").unwrap(), Selection::Index(2));
        assert_eq!(Selection::parse("1-3").unwrap(), Selection::Range(1, 3));
        assert_eq!(
            Selection::parse("Ticket to Ride").unwrap(),
            Selection::Name("Ticket to Ride".to_string())
        );
        // Not a range: spaces around the dash make it a name.
        assert_eq!(
            Selection::parse("1 - 3").unwrap(),
            Selection::Name("1 - 3".to_string())
        );
    }

    #[test]
    fn parse_rejects_empty_and_overflow() {
        assert!(matches!(
            Selection::parse("  "),
            Err(SeekerError::InvalidToken(_))
        ));
        assert!(matches!(
            Selection::parse("99999999999999999999999"),
            Err(SeekerError::InvalidToken(_))
        ));
        assert!(matches!(
            Selection::parse("1-99999999999999999999999"),
            Err(SeekerError::InvalidToken(_))
        ));
    }

    #[test]
    fn resolve_all() {
        let games = fruit();
        assert_eq!(names(&resolve("all", &games).unwrap()), ["Apple", "Banana", "Orange"]);
    }

    #[test]
    fn resolve_index_is_one_based() {
        let games = fruit();
        assert_eq!(names(&resolve("2", &games).unwrap()), ["Banana"]);
        assert_eq!(names(&resolve("1", &games).unwrap()), ["Apple"]);
        assert_eq!(names(&resolve("3", &games).unwrap()), ["Orange"]);
    }

    #[test]
    fn resolve_index_out_of_range() {
        let games = fruit();
        for token in ["0", "4"] {
            match resolve(token, &games) {
                Err(SeekerError::OutOfRange { token: t, len }) => {
                    assert_eq!(t, token);
                    assert_eq!(len, 3);
                }
                other => panic!("expected OutOfRange for {token}, got {other:?}"),
            }
        }
    }

    #[test]
    fn resolve_range_is_inclusive() {
        let games = fruit();
        assert_eq!(names(&resolve("1-2", &games).unwrap()), ["Apple", "Banana"]);
        assert_eq!(names(&resolve("3-3", &games).unwrap()), ["Orange"]);
        assert_eq!(
            names(&resolve("1-3", &games).unwrap()),
            ["Apple", "Banana", "Orange"]
        );
    }

    #[test]
    fn resolve_range_bounds() {
        let games = fruit();
        for token in ["0-2", "2-4", "3-2"] {
            assert!(
                matches!(resolve(token, &games), Err(SeekerError::OutOfRange { .. })),
                "{token} should be out of range"
            );
        }
    }

    #[test]
    fn resolve_name_is_exact_and_case_insensitive() {
        let games = fruit();
        assert_eq!(names(&resolve("banana", &games).unwrap()), ["Banana"]);
        assert!(matches!(
            resolve("Ban", &games),
            Err(SeekerError::NotFound(n)) if n == "Ban"
        ));
    }

    #[test]
    fn resolve_against_borrowed_candidates() {
        let games = fruit();
        let refs: Vec<&BoardGame> = games.iter().rev().collect();
        assert_eq!(names(&resolve("1", &refs).unwrap()), ["Orange"]);
    }

    #[test]
    fn resolve_on_empty_sequence() {
        let games: Vec<BoardGame> = Vec::new();
        assert!(resolve("all", &games).unwrap().is_empty());
        assert!(matches!(
            resolve("1", &games),
            Err(SeekerError::OutOfRange { len: 0, .. })
        ));
    }
}
