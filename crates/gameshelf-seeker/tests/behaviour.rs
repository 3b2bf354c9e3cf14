//! End-to-end behaviour of filtering, sorting, selection and export.

use std::collections::BTreeSet;
use std::fs;

use gameshelf_seeker::{
    catalog, filter, filter_sorted, resolve, BoardGame, GameList, SeekerError, Session, SortKey,
};

// ============================================================================
// Fixtures
// ============================================================================

fn apple() -> BoardGame {
    BoardGame::builder("Apple")
        .id(1)
        .players(3, 4)
        .play_time(30, 60)
        .difficulty(2.5)
        .rank(1)
        .rating(4.5)
        .year_published(1995)
        .build()
}

fn banana() -> BoardGame {
    BoardGame::builder("Banana")
        .id(2)
        .players(2, 4)
        .play_time(30, 45)
        .difficulty(1.8)
        .rank(5)
        .rating(4.3)
        .year_published(2017)
        .build()
}

fn orange() -> BoardGame {
    BoardGame::builder("Orange")
        .id(3)
        .players(1, 5)
        .play_time(90, 120)
        .difficulty(3.2)
        .rank(10)
        .rating(4.7)
        .year_published(2016)
        .build()
}

fn fruit() -> Vec<BoardGame> {
    vec![apple(), banana(), orange()]
}

fn names(games: &[&BoardGame]) -> Vec<String> {
    games.iter().map(|g| g.name().to_string()).collect()
}

fn name_set(games: &[&BoardGame]) -> BTreeSet<String> {
    games.iter().map(|g| g.name().to_string()).collect()
}

// ============================================================================
// Filtering
// ============================================================================

#[test]
fn all_returns_every_game() {
    let games = fruit();
    let results = filter("all", &games).unwrap();
    assert_eq!(names(&results), ["Apple", "Banana", "Orange"]);
}

#[test]
fn filter_by_min_players() {
    let games = fruit();
    assert_eq!(filter("minPlayers>=3", &games).unwrap().len(), 1);
}

#[test]
fn filter_by_rating() {
    let games = fruit();
    assert_eq!(names(&filter("rating>4.5", &games).unwrap()), ["Orange"]);
}

#[test]
fn filter_by_difficulty() {
    let games = fruit();
    assert_eq!(names(&filter("difficulty<=2.0", &games).unwrap()), ["Banana"]);
}

#[test]
fn filter_by_year_and_rank() {
    let games = fruit();
    assert_eq!(
        names(&filter("year_published>2000, rank<10", &games).unwrap()),
        ["Banana"]
    );
    assert_eq!(names(&filter("id!=2", &games).unwrap()), ["Apple", "Orange"]);
}

#[test]
fn numeric_equality_boundaries() {
    let games = vec![
        BoardGame::builder("Low").rating(4.49).build(),
        BoardGame::builder("Exact").rating(4.5).build(),
        BoardGame::builder("High").rating(4.51).build(),
    ];
    assert_eq!(names(&filter("rating==4.5", &games).unwrap()), ["Exact"]);
    assert_eq!(
        names(&filter("rating!=4.5", &games).unwrap()),
        ["High", "Low"]
    );
    assert_eq!(names(&filter("rating>=4.5", &games).unwrap()), ["Exact", "High"]);
    assert_eq!(names(&filter("rating<4.5", &games).unwrap()), ["Low"]);
}

#[test]
fn conjunction_is_subset_of_each_clause() {
    let games = fruit();
    let both = name_set(&filter("minPlayers>1,rating>=4.3", &games).unwrap());
    let left = name_set(&filter("minPlayers>1", &games).unwrap());
    let right = name_set(&filter("rating>=4.3", &games).unwrap());

    let intersection: BTreeSet<String> = left.intersection(&right).cloned().collect();
    assert_eq!(both, intersection);
    assert_eq!(both.len(), 2);
}

#[test]
fn name_substring_is_case_insensitive() {
    let games = vec![
        BoardGame::builder("Catan").build(),
        BoardGame::builder("concatenate-theme").build(),
        BoardGame::builder("Azul").build(),
    ];
    assert_eq!(
        names(&filter("name~=cat", &games).unwrap()),
        ["Catan", "concatenate-theme"]
    );
    assert_eq!(
        names(&filter("name ~= CAT", &games).unwrap()),
        ["Catan", "concatenate-theme"]
    );
}

#[test]
fn numeric_approx_boundary() {
    let games = vec![BoardGame::builder("Two").players(2, 2).build()];
    assert_eq!(filter("minPlayers~=2.099", &games).unwrap().len(), 1);
    assert_eq!(filter("minPlayers~=2.1", &games).unwrap().len(), 0);
}

#[test]
fn field_names_are_normalized() {
    let games = fruit();
    let a = names(&filter("min_players>1", &games).unwrap());
    let b = names(&filter("MinPlayers>1", &games).unwrap());
    let c = names(&filter("minplayers > 1", &games).unwrap());
    assert_eq!(a, b);
    assert_eq!(b, c);
}

#[test]
fn filter_errors() {
    let games = fruit();
    assert!(matches!(
        filter("colour==red", &games),
        Err(SeekerError::UnknownField(_))
    ));
    assert!(matches!(
        filter("rating", &games),
        Err(SeekerError::InvalidFilterSyntax(_))
    ));
    assert!(matches!(
        filter("rating>=good", &games),
        Err(SeekerError::BadOperand { .. })
    ));
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn sort_by_rating_ascending() {
    let games = fruit();
    let sorted = filter_sorted("all", &games, SortKey::Rating, true).unwrap();
    assert_eq!(names(&sorted), ["Banana", "Apple", "Orange"]);
    assert!(sorted.windows(2).all(|w| w[0].rating() <= w[1].rating()));
}

#[test]
fn sort_by_rating_descending() {
    let games = fruit();
    let sorted = filter_sorted("all", &games, SortKey::Rating, false).unwrap();
    assert_eq!(sorted[0].name(), "Orange");
    assert!(sorted.windows(2).all(|w| w[0].rating() >= w[1].rating()));
}

#[test]
fn sort_by_min_players() {
    let games = fruit();
    let asc = filter_sorted("all", &games, SortKey::MinPlayers, true).unwrap();
    assert_eq!(asc[0].name(), "Orange");
    let desc = filter_sorted("all", &games, SortKey::MinPlayers, false).unwrap();
    assert_eq!(desc[0].name(), "Apple");
}

#[test]
fn sort_by_play_time_and_difficulty() {
    let games = fruit();
    let by_time = filter_sorted("", &games, SortKey::MaxPlayTime, true).unwrap();
    assert_eq!(names(&by_time), ["Banana", "Apple", "Orange"]);
    let by_difficulty = filter_sorted("", &games, SortKey::Difficulty, false).unwrap();
    assert_eq!(names(&by_difficulty), ["Orange", "Apple", "Banana"]);
}

#[test]
fn unknown_sort_key() {
    assert!(matches!(
        "popularity".parse::<SortKey>(),
        Err(SeekerError::UnknownSortKey(_))
    ));
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn selection_tokens() {
    let games = fruit();
    assert_eq!(names(&resolve("2", &games).unwrap()), ["Banana"]);
    assert_eq!(names(&resolve("1-2", &games).unwrap()), ["Apple", "Banana"]);
    assert!(matches!(
        resolve("4", &games),
        Err(SeekerError::OutOfRange { .. })
    ));
    assert!(matches!(
        resolve("0", &games),
        Err(SeekerError::OutOfRange { .. })
    ));
}

#[test]
fn remove_by_name_is_case_insensitive_and_fails_when_repeated() {
    let mut list = GameList::new();
    list.add(&fruit());
    list.remove("apple").unwrap();
    assert_eq!(list.count(), 2);
    assert!(matches!(list.remove("apple"), Err(SeekerError::NotFound(_))));
}

#[test]
fn re_adding_keeps_count() {
    let mut list = GameList::new();
    list.add(&fruit());
    list.add(&[apple()]);
    list.insert(BoardGame::builder("APPLE").build());
    assert_eq!(list.count(), 3);
}

#[test]
fn session_walkthrough() {
    let mut session = Session::new(catalog(fruit()));

    session.filter("minPlayers>1").unwrap();
    assert_eq!(session.add("all").unwrap(), 2);

    session.filter_sorted("all", SortKey::Rating, false).unwrap();
    assert_eq!(session.add("1").unwrap(), 1);
    assert_eq!(session.list().names(), ["Apple", "Banana", "Orange"]);

    session.remove("2-3").unwrap();
    assert_eq!(session.list().names(), ["Apple"]);

    session.remove("all").unwrap();
    assert!(session.list().is_empty());
}

// ============================================================================
// Export
// ============================================================================

#[test]
fn export_round_trip() {
    let mut list = GameList::new();
    list.add(&[orange(), banana(), apple()]);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("games.txt");
    list.save(&path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines, list.names());
    assert!(content.ends_with('\n'));
}

#[test]
fn save_to_missing_directory_fails() {
    let mut list = GameList::new();
    list.add(&[apple()]);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("games.txt");
    assert!(matches!(list.save(&path), Err(SeekerError::Io(_))));
}
