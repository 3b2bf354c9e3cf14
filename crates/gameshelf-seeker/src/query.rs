//! Filter queries.
//!
//! A [`Query`] is a conjunction of [`Predicate`]s plus an optional sort
//! order. It is usually parsed from filter text:
//!
//! ```text
//! minPlayers>1, rating>=4.3, name~=cat
//! ```
//!
//! Clauses are separated by commas and all must hold for a game to be kept.
//! The literal `all` (any case) keeps every game and leaves the source
//! order untouched; any other query returns its matches in case-insensitive
//! name order unless an explicit [`OrderBy`] replaces it.

use log::debug;

use crate::clause::Predicate;
use crate::error::Result;
use crate::field::Field;
use crate::game::{sort_by_name, BoardGame};
use crate::op::Op;
use crate::ordering::{Dir, OrderBy, SortKey};

/// The filter text that selects every game without parsing.
pub const ALL: &str = "all";

/// A filter over board games.
///
/// # Example
///
/// ```
/// use gameshelf_seeker::{BoardGame, Query, SortKey};
///
/// let games = vec![
///     BoardGame::builder("Orange").players(1, 5).rating(4.7).build(),
///     BoardGame::builder("Apple").players(3, 4).rating(4.5).build(),
///     BoardGame::builder("Banana").players(2, 4).rating(4.3).build(),
/// ];
///
/// let query = Query::parse("minPlayers>1").unwrap().order_desc(SortKey::Rating);
/// let names: Vec<_> = query.filter(&games).iter().map(|g| g.name()).collect();
/// assert_eq!(names, ["Apple", "Banana"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Query {
    clauses: Vec<Predicate>,
    order: Option<OrderBy>,
    passthrough: bool,
}

impl Query {
    /// Creates an empty query.
    ///
    /// An empty query matches every game and returns them in name order.
    pub fn new() -> Self {
        Query::default()
    }

    /// Creates the `all` query: every game, in source order.
    pub fn all() -> Self {
        Query {
            passthrough: true,
            ..Query::default()
        }
    }

    /// Parses filter text.
    ///
    /// Any clause that fails to parse aborts the whole query with that
    /// clause's error. Empty pieces between commas are ignored, so blank
    /// text yields an empty query.
    pub fn parse(text: &str) -> Result<Self> {
        if text.trim().eq_ignore_ascii_case(ALL) {
            return Ok(Query::all());
        }

        let clauses = text
            .split(',')
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(Predicate::parse)
            .collect::<Result<Vec<_>>>()?;

        debug!("parsed filter {text:?} into {} clause(s)", clauses.len());
        Ok(Query {
            clauses,
            ..Query::default()
        })
    }

    // ========================================================================
    // Builders
    // ========================================================================

    /// Adds a parsed predicate.
    pub fn and(mut self, predicate: Predicate) -> Self {
        self.clauses.push(predicate);
        self.passthrough = false;
        self
    }

    /// Adds a clause from its parts.
    pub fn and_clause(self, field: Field, op: Op, operand: &str) -> Result<Self> {
        Ok(self.and(Predicate::new(field, op, operand)?))
    }

    /// Sorts results by `key`, replacing the default name order.
    pub fn order_by(mut self, key: SortKey, dir: Dir) -> Self {
        self.order = Some(OrderBy::new(key, dir));
        self
    }

    pub fn order_asc(self, key: SortKey) -> Self {
        self.order_by(key, Dir::Asc)
    }

    pub fn order_desc(self, key: SortKey) -> Self {
        self.order_by(key, Dir::Desc)
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    pub fn clauses(&self) -> &[Predicate] {
        &self.clauses
    }

    pub fn ordering(&self) -> Option<OrderBy> {
        self.order
    }

    /// Returns `true` for the `all` query.
    pub fn is_passthrough(&self) -> bool {
        self.passthrough
    }

    /// Returns `true` if this query has no clauses (matches everything).
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Tests if a single game matches every clause.
    pub fn matches(&self, game: &BoardGame) -> bool {
        self.clauses.iter().all(|clause| clause.matches(game))
    }

    /// Filters a slice, returning references to matching games in result
    /// order.
    pub fn filter<'a>(&self, games: &'a [BoardGame]) -> Vec<&'a BoardGame> {
        let mut results: Vec<&'a BoardGame> =
            games.iter().filter(|game| self.matches(game)).collect();

        match self.order {
            // `sort_by` is stable: ties keep their incoming order.
            Some(order) => results.sort_by(|a, b| order.compare(a, b)),
            None if !self.passthrough => sort_by_name(&mut results),
            None => {}
        }

        debug!(
            "filter kept {} of {} game(s)",
            results.len(),
            games.len()
        );
        results
    }

    /// Filters and clones matching games.
    pub fn filter_cloned(&self, games: &[BoardGame]) -> Vec<BoardGame> {
        self.filter(games).into_iter().cloned().collect()
    }

    /// Counts the number of matching games.
    pub fn count(&self, games: &[BoardGame]) -> usize {
        games.iter().filter(|game| self.matches(game)).count()
    }
}

/// Parses `text` and filters `games` in one step.
pub fn filter<'a>(text: &str, games: &'a [BoardGame]) -> Result<Vec<&'a BoardGame>> {
    Ok(Query::parse(text)?.filter(games))
}

/// Parses `text`, filters `games`, then sorts by `key`.
pub fn filter_sorted<'a>(
    text: &str,
    games: &'a [BoardGame],
    key: SortKey,
    ascending: bool,
) -> Result<Vec<&'a BoardGame>> {
    Ok(Query::parse(text)?
        .order_by(key, Dir::from_ascending(ascending))
        .filter(games))
}
