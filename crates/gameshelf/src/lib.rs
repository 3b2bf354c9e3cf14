//! Gameshelf - an interactive board game planner.
//!
//! [`loader`] reads a catalog from CSV and [`Repl`] drives a
//! [`Session`](gameshelf_seeker::Session) from line-oriented commands. The
//! filtering itself lives in `gameshelf_seeker`.

pub mod loader;
mod repl;

pub use loader::LoadError;
pub use repl::{Flow, Repl};
