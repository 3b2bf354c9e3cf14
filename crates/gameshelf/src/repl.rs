//! The line-oriented command loop.
//!
//! Each input line is split into words and parsed as one subcommand. Core
//! failures are reported as `error: <reason>` and the loop keeps going;
//! only failures writing to the output end it.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use gameshelf_seeker::{BoardGame, SeekerError, Session, SortKey};
use log::{debug, trace};
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(
    name = "gameshelf",
    no_binary_name = true,
    disable_version_flag = true,
    override_usage = "<COMMAND> [ARGS]"
)]
struct Line {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Filter the catalog, e.g. `filter minPlayers>=2, rating>7 --sort rating --desc`
    Filter {
        /// Comma-separated clauses, or `all`
        #[arg(value_name = "EXPR", num_args = 0.., allow_negative_numbers = true)]
        expr: Vec<String>,

        /// Sort the result by this attribute
        #[arg(long, value_name = "KEY")]
        sort: Option<String>,

        /// Sort in descending order
        #[arg(long, requires = "sort")]
        desc: bool,
    },

    /// Add games from the last filter result: an index, a range, a name or `all`
    Add {
        #[arg(value_name = "TOKEN", required = true, num_args = 1.., allow_hyphen_values = true)]
        token: Vec<String>,
    },

    /// Remove games from the list: an index, a range, a name or `all`
    Remove {
        #[arg(value_name = "TOKEN", required = true, num_args = 1.., allow_hyphen_values = true)]
        token: Vec<String>,
    },

    /// Show the game list
    List,

    /// Show how many games are in the list
    Count,

    /// Empty the game list
    Clear,

    /// Write the game list to a file, one name per line
    Save {
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },

    /// Leave
    #[command(alias = "quit")]
    Exit,
}

/// Whether the loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Debug, Error)]
enum CommandError {
    #[error(transparent)]
    Seeker(#[from] SeekerError),

    #[error(transparent)]
    Output(#[from] io::Error),
}

/// Runs commands against a [`Session`], writing results to `out`.
pub struct Repl<W: Write> {
    session: Session,
    out: W,
    prompt: Option<String>,
}

impl<W: Write> Repl<W> {
    pub fn new(session: Session, out: W) -> Self {
        Repl {
            session,
            out,
            prompt: None,
        }
    }

    /// Prints `prompt` before reading each line.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Reads and executes lines until `exit` or end of input.
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        let mut lines = input.lines();
        loop {
            if let Some(prompt) = &self.prompt {
                write!(self.out, "{prompt}")?;
                self.out.flush()?;
            }
            let Some(line) = lines.next() else {
                break;
            };
            if self.execute(&line?)? == Flow::Exit {
                break;
            }
        }
        self.out.flush()
    }

    /// Executes one line of input.
    pub fn execute(&mut self, line: &str) -> io::Result<Flow> {
        let words = match split_line(line) {
            Ok(words) => words,
            Err(e) => {
                writeln!(self.out, "error: {e}")?;
                return Ok(Flow::Continue);
            }
        };
        if words.is_empty() {
            return Ok(Flow::Continue);
        }
        trace!("command words: {words:?}");

        let command = match Line::try_parse_from(&words) {
            Ok(parsed) => parsed.command,
            Err(err) => {
                self.report_usage(&err)?;
                return Ok(Flow::Continue);
            }
        };

        match self.dispatch(command) {
            Ok(flow) => Ok(flow),
            Err(CommandError::Seeker(e)) => {
                debug!("command failed: {e}");
                writeln!(self.out, "error: {e}")?;
                Ok(Flow::Continue)
            }
            Err(CommandError::Output(e)) => Err(e),
        }
    }

    fn report_usage(&mut self, err: &clap::Error) -> io::Result<()> {
        let rendered = err.render().to_string();
        match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                write!(self.out, "{rendered}")
            }
            _ => {
                let reason = rendered.lines().next().unwrap_or_default();
                let reason = reason.strip_prefix("error: ").unwrap_or(reason);
                writeln!(self.out, "error: {reason}")
            }
        }
    }

    fn dispatch(&mut self, command: Command) -> Result<Flow, CommandError> {
        match command {
            Command::Filter { expr, sort, desc } => {
                let text = expr.join(" ");
                let shown = match sort {
                    Some(key) => {
                        let key: SortKey = key.parse()?;
                        self.session.filter_sorted(&text, key, !desc)?
                    }
                    None => self.session.filter(&text)?,
                };
                if shown.is_empty() {
                    writeln!(self.out, "no games match")?;
                } else {
                    write_numbered(&mut self.out, shown)?;
                }
            }
            Command::Add { token } => {
                let added = self.session.add(unquote(&token.join(" ")))?;
                writeln!(self.out, "added {added} game(s)")?;
            }
            Command::Remove { token } => {
                let removed = self.session.remove(unquote(&token.join(" ")))?;
                writeln!(self.out, "removed {} game(s)", removed.len())?;
            }
            Command::List => {
                let list = self.session.list();
                if list.is_empty() {
                    writeln!(self.out, "the list is empty")?;
                } else {
                    write_numbered(&mut self.out, list.games())?;
                }
            }
            Command::Count => {
                writeln!(self.out, "{}", self.session.list().count())?;
            }
            Command::Clear => {
                self.session.list_mut().clear();
                writeln!(self.out, "list cleared")?;
            }
            Command::Save { path } => {
                self.session.list().save(&path)?;
                writeln!(
                    self.out,
                    "saved {} game(s) to {}",
                    self.session.list().count(),
                    path.display()
                )?;
            }
            Command::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }
}

/// Splits a command line into words.
///
/// Only `save` honours shell quoting, for paths with spaces. Other commands
/// split on whitespace so names keep their apostrophes, and `filter` also
/// breaks commas out into their own words so an operand such as `-1,` still
/// reads as a number.
fn split_line(line: &str) -> Result<Vec<String>, shell_words::ParseError> {
    let mut words = line.split_whitespace();
    let words: Vec<&str> = match words.next() {
        Some("save") => return shell_words::split(line),
        Some("filter") => std::iter::once("filter")
            .chain(words.flat_map(separate_commas))
            .collect(),
        _ => line.split_whitespace().collect(),
    };
    Ok(words.into_iter().map(String::from).collect())
}

fn separate_commas(word: &str) -> impl Iterator<Item = &str> + '_ {
    word.split_inclusive(',')
        .flat_map(|piece| match piece.strip_suffix(',') {
            Some(head) => [head, ","],
            None => [piece, ""],
        })
        .filter(|part| !part.is_empty())
}

/// Drops one pair of matching quotes around a selection token.
fn unquote(token: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = token
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    token
}

fn write_numbered<'a, W: Write>(
    out: &mut W,
    games: impl IntoIterator<Item = &'a BoardGame>,
) -> io::Result<()> {
    for (index, game) in games.into_iter().enumerate() {
        writeln!(out, "{:>3}. {}", index + 1, game.name())?;
    }
    Ok(())
}
