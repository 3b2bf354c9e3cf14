use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use gameshelf::{loader, Repl};
use gameshelf_seeker::{catalog, Session};
use log::{info, LevelFilter};

/// Filter a board game catalog and build a list of games to play.
#[derive(Debug, Parser)]
#[command(name = "gameshelf", version)]
struct Cli {
    /// Catalog CSV file
    #[arg(long, value_name = "PATH", env = "GAMESHELF_GAMES", default_value = "games.csv")]
    games: PathBuf,

    /// Read commands from a file instead of standard input
    #[arg(long, value_name = "PATH")]
    script: Option<PathBuf>,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG, when set, wins over the flag.
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let rows = loader::load(&cli.games)
        .with_context(|| format!("failed to load games from {}", cli.games.display()))?;
    let loaded = rows.len();
    let games = catalog(rows);
    info!(
        "loaded {} game(s) from {} ({} duplicate name(s) skipped)",
        games.len(),
        cli.games.display(),
        loaded - games.len()
    );

    let stdout = io::stdout().lock();
    let mut repl = Repl::new(Session::new(games), stdout);

    match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            repl.run(BufReader::new(file))?;
        }
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                repl = repl.with_prompt("> ");
            }
            repl.run(stdin.lock())?;
        }
    }
    Ok(())
}
