//! Gameshelf seeker - filter, sort and pick board games from a catalog.
//!
//! The crate covers the logic behind a board game planner:
//!
//! - [`Field`]: the attributes a filter or sort can name
//! - [`Predicate`]: one parsed `field OP value` clause
//! - [`Query`]: a comma-separated conjunction of clauses, plus ordering
//! - [`SortKey`] / [`OrderBy`]: result ordering
//! - [`Selection`]: `all`, `3`, `2-5` or a game name, resolved against an
//!   ordered candidate sequence
//! - [`GameList`]: the user's working list, deduplicated by name
//! - [`Session`]: ties a shared catalog, the last filter result and a game
//!   list together
//!
//! # Quick Start
//!
//! ```rust
//! use gameshelf_seeker::{catalog, BoardGame, Session, SortKey};
//!
//! let games = catalog([
//!     BoardGame::builder("Apple").players(3, 4).rating(4.5).build(),
//!     BoardGame::builder("Banana").players(2, 4).rating(4.3).build(),
//!     BoardGame::builder("Orange").players(1, 5).rating(4.7).build(),
//! ]);
//!
//! let mut session = Session::new(games);
//! let found = session.filter_sorted("minPlayers>1", SortKey::Rating, true).unwrap();
//! assert_eq!(found[0].name(), "Banana");
//!
//! session.add("1-2").unwrap();
//! assert_eq!(session.list().names(), ["Apple", "Banana"]);
//!
//! session.remove("apple").unwrap();
//! assert_eq!(session.list().count(), 1);
//! ```
//!
//! # Filter Syntax
//!
//! Clauses are separated by commas; every clause must hold. Whitespace
//! around fields, operators and values is ignored.
//!
//! | Field kind | Operators |
//! |------------|-----------|
//! | `name`     | `==` `!=` (case-insensitive), `~=` (substring), `<` `<=` `>` `>=` (lexicographic) |
//! | numeric    | `==` `!=` `<` `<=` `>` `>=`, `~=` (within 0.1) |
//!
//! Numeric `==` is exact floating-point equality. Prefer `~=` for values
//! such as ratings.

mod clause;
mod error;
mod field;
mod game;
mod game_list;
mod op;
mod ordering;
mod query;
mod selection;
mod session;
mod value;

// Re-export public API
pub use clause::{Operand, Predicate};
pub use error::{Result, SeekerError};
pub use field::{Field, FieldKind};
pub use game::{compare_names, BoardGame, BoardGameBuilder};
pub use game_list::GameList;
pub use op::Op;
pub use ordering::{comparator, Dir, OrderBy, SortKey};
pub use query::{filter, filter_sorted, Query, ALL};
pub use selection::{resolve, Selection};
pub use session::{catalog, Catalog, Session};
pub use value::{Number, Value};
