//! Catalog loading from CSV.
//!
//! The file must start with a header row naming the columns:
//!
//! ```text
//! name,id,min_players,max_players,min_play_time,max_play_time,difficulty,rank,rating,year_published
//! ```
//!
//! Column order is free; header names are matched exactly. Surrounding
//! whitespace in each cell is ignored.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use gameshelf_seeker::BoardGame;
use log::debug;
use serde::Deserialize;
use thiserror::Error;

/// Why a catalog could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open catalog {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed catalog row at line {line}")]
    Row {
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("catalog row at line {line} has an empty name")]
    EmptyName { line: u64 },
}

#[derive(Debug, Deserialize)]
struct GameRow {
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

impl From<GameRow> for BoardGame {
    fn from(row: GameRow) -> Self {
        BoardGame::builder(row.name)
            .id(row.id)
            .players(row.min_players, row.max_players)
            .play_time(row.min_play_time, row.max_play_time)
            .difficulty(row.difficulty)
            .rank(row.rank)
            .rating(row.rating)
            .year_published(row.year_published)
            .build()
    }
}

/// Loads every row of the CSV file at `path`, in file order.
pub fn load(path: &Path) -> Result<Vec<BoardGame>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let games = read(file)?;
    debug!("read {} row(s) from {}", games.len(), path.display());
    Ok(games)
}

/// Reads CSV rows from any source. The first malformed row aborts the read.
pub fn read<R: io::Read>(source: R) -> Result<Vec<BoardGame>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut games = Vec::new();
    for (index, row) in reader.deserialize::<GameRow>().enumerate() {
        // Header is line 1.
        let fallback = index as u64 + 2;
        let row = row.map_err(|source| LoadError::Row {
            line: source.position().map_or(fallback, |p| p.line()),
            source,
        })?;
        if row.name.is_empty() {
            return Err(LoadError::EmptyName { line: fallback });
        }
        games.push(BoardGame::from(row));
    }
    Ok(games)
}
