//! A planning session.
//!
//! A [`Session`] ties the pieces together the way an interactive front end
//! uses them: it filters a shared catalog, remembers the most recent result
//! as the candidate sequence, and moves games between that sequence and its
//! own [`GameList`].
//!
//! Note the asymmetry between [`Session::add`] and [`Session::remove`]:
//! `add` resolves index and range tokens against the last filter result,
//! while `remove` resolves them against the game list in name order.

use std::sync::Arc;

use log::debug;

use crate::error::Result;
use crate::game::BoardGame;
use crate::game_list::GameList;
use crate::ordering::{Dir, SortKey};
use crate::query::Query;
use crate::selection::Selection;

/// The immutable, shareable set of all games.
pub type Catalog = Arc<[BoardGame]>;

/// Builds a catalog from loaded games.
///
/// Games are stored in case-insensitive name order; when two games share a
/// name (any case) the first one wins.
pub fn catalog(games: impl IntoIterator<Item = BoardGame>) -> Catalog {
    let mut list = GameList::new();
    for game in games {
        list.insert(game);
    }
    list.games().cloned().collect::<Vec<_>>().into()
}

/// One user's view of a catalog.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    candidates: Vec<BoardGame>,
    list: GameList,
}

impl Session {
    /// Starts a session. Before the first filter, the candidate sequence is
    /// the whole catalog.
    pub fn new(catalog: Catalog) -> Self {
        let candidates = catalog.to_vec();
        Session {
            catalog,
            candidates,
            list: GameList::new(),
        }
    }

    pub fn catalog(&self) -> &[BoardGame] {
        &self.catalog
    }

    /// The result of the most recent filter.
    pub fn candidates(&self) -> &[BoardGame] {
        &self.candidates
    }

    pub fn list(&self) -> &GameList {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut GameList {
        &mut self.list
    }

    /// Filters the catalog and makes the result the new candidate sequence.
    ///
    /// On error the previous candidate sequence is kept.
    pub fn filter(&mut self, text: &str) -> Result<&[BoardGame]> {
        let query = Query::parse(text)?;
        self.run(&query)
    }

    /// Like [`filter`](Self::filter), then sorts by `key`.
    pub fn filter_sorted(
        &mut self,
        text: &str,
        key: SortKey,
        ascending: bool,
    ) -> Result<&[BoardGame]> {
        let query = Query::parse(text)?.order_by(key, Dir::from_ascending(ascending));
        self.run(&query)
    }

    /// Runs an already-built query against the catalog.
    pub fn run(&mut self, query: &Query) -> Result<&[BoardGame]> {
        self.candidates = query.filter_cloned(&self.catalog);
        debug!("candidate sequence now holds {} game(s)", self.candidates.len());
        Ok(&self.candidates)
    }

    /// Restores the candidate sequence to the whole catalog.
    pub fn reset(&mut self) {
        self.candidates = self.catalog.to_vec();
    }

    /// Resolves `token` against the candidate sequence and adds the matches
    /// to the game list. Returns how many games were newly added.
    pub fn add(&mut self, token: &str) -> Result<usize> {
        let selected = Selection::parse(token)?.resolve(&self.candidates)?;
        Ok(self.list.add(selected))
    }

    /// Removes games from the list; see [`GameList::remove`].
    pub fn remove(&mut self, token: &str) -> Result<Vec<BoardGame>> {
        self.list.remove(token)
    }
}
