//! The working game list.
//!
//! A [`GameList`] is the set of games a user has chosen to keep. Games are
//! keyed by case-insensitive name: adding a name that is already present
//! changes nothing, and listing or exporting always walks names in
//! case-insensitive ascending order.
//!
//! Each session owns its own list; there is no shared instance.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use log::debug;

use crate::error::{Result, SeekerError};
use crate::game::{name_key, BoardGame};
use crate::selection::Selection;

/// A name-ordered, name-deduplicated set of games.
#[derive(Debug, Clone, Default)]
pub struct GameList {
    games: BTreeMap<String, BoardGame>,
}

impl GameList {
    /// Creates an empty list.
    pub fn new() -> Self {
        GameList::default()
    }

    /// Inserts one game. Returns `false` if a game with the same name (any
    /// case) was already present; the existing entry is kept unchanged.
    pub fn insert(&mut self, game: BoardGame) -> bool {
        let key = name_key(game.name());
        if self.games.contains_key(&key) {
            return false;
        }
        self.games.insert(key, game);
        true
    }

    /// Adds every game, skipping names already present. Returns how many
    /// were newly added.
    pub fn add<'a, I>(&mut self, games: I) -> usize
    where
        I: IntoIterator<Item = &'a BoardGame>,
    {
        let added = games
            .into_iter()
            .filter(|game| self.insert((*game).clone()))
            .count();
        debug!("added {added} game(s), list now holds {}", self.count());
        added
    }

    /// Resolves `token` against the current list (in name order) and
    /// removes the matches. `all` clears the list.
    ///
    /// Returns the removed games in name order.
    pub fn remove(&mut self, token: &str) -> Result<Vec<BoardGame>> {
        let selection = Selection::parse(token)?;
        if selection == Selection::All {
            let removed = std::mem::take(&mut self.games).into_values().collect();
            debug!("cleared game list");
            return Ok(removed);
        }

        let keys: Vec<String> = {
            let ordered: Vec<&BoardGame> = self.games.values().collect();
            selection
                .resolve(&ordered)?
                .into_iter()
                .map(|game| name_key(game.name()))
                .collect()
        };

        let removed: Vec<BoardGame> = keys
            .iter()
            .filter_map(|key| self.games.remove(key))
            .collect();
        debug!("removed {} game(s) with {selection}", removed.len());
        Ok(removed)
    }

    /// Removes the game called `name` (any case).
    pub fn remove_by_name(&mut self, name: &str) -> Result<BoardGame> {
        self.games
            .remove(&name_key(name.trim()))
            .ok_or_else(|| SeekerError::NotFound(name.trim().to_string()))
    }

    /// Removes every game.
    pub fn clear(&mut self) {
        self.games.clear();
    }

    /// Number of games in the list.
    pub fn count(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Returns `true` if a game called `name` (any case) is present.
    pub fn contains(&self, name: &str) -> bool {
        self.games.contains_key(&name_key(name))
    }

    /// Games in case-insensitive name order.
    pub fn games(&self) -> impl Iterator<Item = &BoardGame> + '_ {
        self.games.values()
    }

    /// Game names in case-insensitive ascending order.
    pub fn names(&self) -> Vec<String> {
        self.games().map(|game| game.name().to_string()).collect()
    }

    /// Writes [`names`](Self::names) to `sink`, one per line.
    ///
    /// The whole listing is rendered before the first byte is written and
    /// handed to the sink in a single `write_all`, followed by a flush.
    pub fn export<W: Write>(&self, mut sink: W) -> Result<()> {
        let mut listing = String::new();
        for name in self.names() {
            listing.push_str(&name);
            listing.push('\n');
        }
        sink.write_all(listing.as_bytes())?;
        sink.flush()?;
        Ok(())
    }

    /// Exports the list to a file, replacing any existing content.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| {
            SeekerError::Io(io::Error::new(
                e.kind(),
                format!("{}: {e}", path.display()),
            ))
        })?;
        self.export(io::BufWriter::new(file))?;
        debug!("saved {} game(s) to {}", self.count(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(name: &str) -> BoardGame {
        BoardGame::builder(name).build()
    }

    fn fruit_list() -> GameList {
        let games = [game("Orange"), game("apple"), game("Banana")];
        let mut list = GameList::new();
        list.add(&games);
        list
    }

    #[test]
    fn names_are_case_insensitively_sorted() {
        assert_eq!(fruit_list().names(), ["apple", "Banana", "Orange"]);
    }

    #[test]
    fn re_adding_is_a_no_op() {
        let mut list = fruit_list();
        let replacement = BoardGame::builder("APPLE").rating(9.9).build();
        assert!(!list.insert(replacement));
        assert_eq!(list.count(), 3);
        let kept = list.games().find(|g| g.name_eq("apple")).unwrap();
        assert_eq!(kept.name(), "apple");
        assert_eq!(kept.rating(), 0.0);
    }

    #[test]
    fn add_reports_new_entries_only() {
        let mut list = fruit_list();
        let more = [game("banana"), game("Cherry")];
        assert_eq!(list.add(&more), 1);
        assert_eq!(list.count(), 4);
    }

    #[test]
    fn remove_by_index_uses_name_order() {
        let mut list = fruit_list();
        let removed = list.remove("2").unwrap();
        assert_eq!(removed[0].name(), "Banana");
        assert_eq!(list.names(), ["apple", "Orange"]);
    }

    #[test]
    fn remove_by_range() {
        let mut list = fruit_list();
        assert_eq!(list.remove("1-2").unwrap().len(), 2);
        assert_eq!(list.names(), ["Orange"]);
        assert!(matches!(
            list.remove("1-2"),
            Err(SeekerError::OutOfRange { len: 1, .. })
        ));
    }

    #[test]
    fn remove_by_name_fails_the_second_time() {
        let mut list = fruit_list();
        list.remove("APPLE").unwrap();
        assert!(!list.contains("apple"));
        assert!(matches!(
            list.remove("apple"),
            Err(SeekerError::NotFound(n)) if n == "apple"
        ));
        assert!(list.remove_by_name("banana").is_ok());
        assert!(list.remove_by_name("banana").is_err());
    }

    #[test]
    fn remove_all_clears() {
        let mut list = fruit_list();
        let removed = list.remove("All").unwrap();
        assert_eq!(removed.len(), 3);
        assert!(list.is_empty());
        assert!(list.remove("all").unwrap().is_empty());
    }

    #[test]
    fn export_writes_one_name_per_line() {
        let list = fruit_list();
        let mut sink = Vec::new();
        list.export(&mut sink).unwrap();
        assert_eq!(String::from_utf8(sink).unwrap(), "apple\nBanana\nOrange\n");
    }

    #[test]
    fn export_of_empty_list_writes_nothing() {
        let mut sink = Vec::new();
        GameList::new().export(&mut sink).unwrap();
        assert!(sink.is_empty());
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn export_surfaces_io_failure() {
        let list = fruit_list();
        assert!(matches!(list.export(BrokenSink), Err(SeekerError::Io(_))));
    }
}
