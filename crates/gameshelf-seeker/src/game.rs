//! The board game record.
//!
//! A [`BoardGame`] is immutable once built. Its name is stored as given but
//! compared case-insensitively everywhere a game's identity matters.

use std::borrow::Borrow;
use std::cmp::Ordering;

/// One catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardGame {
    name: String,
    id: i64,
    min_players: i64,
    max_players: i64,
    min_play_time: i64,
    max_play_time: i64,
    difficulty: f64,
    rank: i64,
    rating: f64,
    year_published: i64,
}

impl BoardGame {
    /// Starts building a game with the given name. Every other attribute
    /// defaults to zero.
    pub fn builder(name: impl Into<String>) -> BoardGameBuilder {
        BoardGameBuilder {
            game: BoardGame {
                name: name.into(),
                id: 0,
                min_players: 0,
                max_players: 0,
                min_play_time: 0,
                max_play_time: 0,
                difficulty: 0.0,
                rank: 0,
                rating: 0.0,
                year_published: 0,
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn min_players(&self) -> i64 {
        self.min_players
    }

    pub fn max_players(&self) -> i64 {
        self.max_players
    }

    pub fn min_play_time(&self) -> i64 {
        self.min_play_time
    }

    pub fn max_play_time(&self) -> i64 {
        self.max_play_time
    }

    pub fn difficulty(&self) -> f64 {
        self.difficulty
    }

    pub fn rank(&self) -> i64 {
        self.rank
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn year_published(&self) -> i64 {
        self.year_published
    }

    /// Returns `true` if this game's name equals `name`, ignoring case.
    pub fn name_eq(&self, name: &str) -> bool {
        name_key(&self.name) == name_key(name)
    }
}

/// Builder for [`BoardGame`].
///
/// ```
/// use gameshelf_seeker::BoardGame;
///
/// let game = BoardGame::builder("Catan")
///     .players(3, 4)
///     .play_time(60, 120)
///     .rating(7.1)
///     .build();
/// assert_eq!(game.max_players(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct BoardGameBuilder {
    game: BoardGame,
}

impl BoardGameBuilder {
    pub fn id(mut self, id: i64) -> Self {
        self.game.id = id;
        self
    }

    pub fn players(mut self, min: i64, max: i64) -> Self {
        self.game.min_players = min;
        self.game.max_players = max;
        self
    }

    pub fn play_time(mut self, min: i64, max: i64) -> Self {
        self.game.min_play_time = min;
        self.game.max_play_time = max;
        self
    }

    pub fn difficulty(mut self, difficulty: f64) -> Self {
        self.game.difficulty = difficulty;
        self
    }

    pub fn rank(mut self, rank: i64) -> Self {
        self.game.rank = rank;
        self
    }

    pub fn rating(mut self, rating: f64) -> Self {
        self.game.rating = rating;
        self
    }

    pub fn year_published(mut self, year: i64) -> Self {
        self.game.year_published = year;
        self
    }

    pub fn build(self) -> BoardGame {
        self.game
    }
}

/// The key used to order and deduplicate games by name.
pub(crate) fn name_key(name: &str) -> String {
    name.to_lowercase()
}

/// Case-insensitive comparison of two names.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    name_key(a).cmp(&name_key(b))
}

/// Sorts games in place by case-insensitive name.
pub(crate) fn sort_by_name<G: Borrow<BoardGame>>(games: &mut [G]) {
    games.sort_by(|a, b| {
        compare_names(
            <G as Borrow<BoardGame>>::borrow(a).name(),
            <G as Borrow<BoardGame>>::borrow(b).name(),
        )
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_attributes() {
        let game = BoardGame::builder("Apple")
            .id(1)
            .players(3, 4)
            .play_time(30, 60)
            .difficulty(2.5)
            .rank(1)
            .rating(4.5)
            .year_published(1995)
            .build();

        assert_eq!(game.name(), "Apple");
        assert_eq!(game.id(), 1);
        assert_eq!(game.min_players(), 3);
        assert_eq!(game.max_players(), 4);
        assert_eq!(game.min_play_time(), 30);
        assert_eq!(game.max_play_time(), 60);
        assert_eq!(game.difficulty(), 2.5);
        assert_eq!(game.rank(), 1);
        assert_eq!(game.rating(), 4.5);
        assert_eq!(game.year_published(), 1995);
    }

    #[test]
    fn name_identity_ignores_case() {
        let a = BoardGame::builder("Catan").build();
        assert!(a.name_eq("CATAN"));
        assert!(a.name_eq("catan"));
        assert!(!a.name_eq("catan "));
    }

    #[test]
    fn compare_names_ignores_case() {
        assert_eq!(compare_names("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_names("Zebra", "apple"), Ordering::Greater);
        assert_eq!(compare_names("GO", "go"), Ordering::Equal);
    }
}
