//! Fighterdle - CLI
//!
//! Daily guess-the-fighter game with TUI and simple CLI modes.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use fighterdle::{
    commands::{daily_info, run_simple, score_guess},
    config::{DEFAULT_INITIAL_BLUR, DEFAULT_MAX_ATTEMPTS, DEFAULT_ORGANIZATION, GameConfig},
    core::RosterEntry,
    game::{DailySelector, GameMode, GameSession, today},
    logging::{LogTarget, init_tracing},
    output::{print_daily_info, print_score_result, print_suggestions},
    roster::{Roster, SUGGESTION_LIMIT, loader},
    store::{FileStore, default_state_path},
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "fighterdle",
    about = "Guess the daily mystery fighter from letter tiles, trait badges and a blurred photo",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Game mode: autocomplete (default), freetext, hangman
    #[arg(short, long, global = true, default_value = "autocomplete")]
    mode: String,

    /// JSON fighter dataset (default: built-in roster)
    #[arg(short, long, global = true)]
    dataset: Option<PathBuf>,

    /// Keep only fighters whose organization contains this tag ("" keeps everyone)
    #[arg(short, long, global = true, default_value = DEFAULT_ORGANIZATION)]
    organization: String,

    /// Attempts per game
    #[arg(
        short,
        long,
        global = true,
        default_value_t = DEFAULT_MAX_ATTEMPTS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    attempts: u32,

    /// Initial image blur in pixels
    #[arg(short, long, global = true, default_value_t = DEFAULT_INITIAL_BLUR)]
    blur: u32,

    /// State file holding the daily pick (default: user data dir)
    #[arg(long, global = true)]
    state: Option<PathBuf>,

    /// Play against a random fighter instead of the daily pick
    #[arg(short, long, global = true)]
    practice: bool,

    /// Log filter, e.g. "debug" or "fighterdle=trace" (RUST_LOG overrides)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode (no TUI)
    Simple,

    /// Score a guess against a target name
    Score {
        /// Target fighter name
        target: String,

        /// Guessed name or text
        guess: String,
    },

    /// Show today's pick
    Daily {
        /// Print the fighter's name and details
        #[arg(long)]
        reveal: bool,
    },

    /// List fighters whose name starts with a prefix
    Suggest {
        /// Name prefix
        prefix: String,

        /// Maximum number of names
        #[arg(short = 'n', long, default_value_t = SUGGESTION_LIMIT)]
        limit: usize,
    },
}

/// Load the roster and apply the organization filter
///
/// Uses the embedded dataset unless a path is given.
fn load_roster(dataset: Option<&Path>, organization: &str) -> Result<Roster> {
    let entries = match dataset {
        Some(path) => loader::load_from_file(path)?,
        None => loader::load_embedded()?,
    };
    tracing::info!(entries = entries.len(), "dataset loaded");

    let roster = Roster::new(entries)?
        .filter_organization(organization)
        .with_context(|| format!("no fighters match organization '{organization}'"))?;
    Ok(roster)
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    // The TUI owns the terminal, so it only logs to a file
    let log_target = match (&cli.log_file, &command) {
        (Some(path), _) => LogTarget::File(path),
        (None, Commands::Play) => LogTarget::Off,
        (None, _) => LogTarget::Stderr,
    };
    init_tracing(&cli.log_level, log_target)?;

    let config = GameConfig {
        max_attempts: cli.attempts,
        initial_blur: cli.blur,
        organization: cli.organization.clone(),
        mode: cli.mode.parse::<GameMode>().map_err(anyhow::Error::msg)?,
    };

    let roster = load_roster(cli.dataset.as_deref(), &config.organization)
        .context("cannot start the game")?;

    match command {
        Commands::Play => run_play_command(&cli, &config, &roster),
        Commands::Simple => run_simple_command(&cli, &config, &roster),
        Commands::Score { target, guess } => run_score_command(&roster, &target, &guess),
        Commands::Daily { reveal } => run_daily_command(&cli, &roster, reveal),
        Commands::Suggest { prefix, limit } => {
            print_suggestions(&prefix, &roster.suggestions(&prefix, limit));
            Ok(())
        }
    }
}

fn state_path(cli: &Cli) -> PathBuf {
    cli.state.clone().unwrap_or_else(default_state_path)
}

/// Today's pick from the state file, or a random fighter in practice mode
///
/// Returns the target and, for daily games, the date it belongs to.
fn pick_target(cli: &Cli, roster: &Roster) -> Result<(RosterEntry, Option<NaiveDate>)> {
    let mut rng = rand::rng();

    if cli.practice {
        let entry = roster.choose(&mut rng).clone();
        tracing::info!("practice round");
        return Ok((entry, None));
    }

    let mut selector = DailySelector::new(FileStore::new(state_path(cli)));
    let pick = selector.select(roster.entries(), today(), &mut rng)?;
    Ok((pick.entry, Some(pick.date)))
}

fn run_play_command(cli: &Cli, config: &GameConfig, roster: &Roster) -> Result<()> {
    use fighterdle::interactive::{App, run_tui};

    let (target, date) = pick_target(cli, roster)?;
    let session = GameSession::new(target, config);
    let app = App::new(roster, session, date);
    run_tui(app)
}

fn run_simple_command(cli: &Cli, config: &GameConfig, roster: &Roster) -> Result<()> {
    let (target, _) = pick_target(cli, roster)?;
    let mut session = GameSession::new(target, config);
    run_simple(&mut session, roster).map_err(|e| anyhow::anyhow!(e))
}

fn run_score_command(roster: &Roster, target: &str, guess: &str) -> Result<()> {
    let result = score_guess(roster, target, guess).map_err(|e| anyhow::anyhow!(e))?;
    print_score_result(&result);
    Ok(())
}

fn run_daily_command(cli: &Cli, roster: &Roster, reveal: bool) -> Result<()> {
    let info = daily_info(roster, state_path(cli))?;
    print_daily_info(&info, reveal);
    Ok(())
}
