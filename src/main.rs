//! Word Scramble - CLI
//!
//! Word scramble game with TUI and CLI modes, plus tools to inspect the word lists.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use word_scramble::{
    commands::{run_simple, run_survey, solve_root},
    config::Settings,
    core::{Game, ScoreBasis},
    dictionary::{LanguageTag, WordSetDictionary},
    logging::{self, LogTarget, TUI_LOG_FILE},
    output::{print_solutions, print_survey},
    wordlists::WordListSource,
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Build as many words as you can from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary language tag (e.g. fr, fr-CA, en)
    #[arg(short, long, global = true, default_value = "fr")]
    language: LanguageTag,

    /// Root word list file, one word per line (default: embedded French list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Dictionary file, one word per line (default: embedded French dictionary)
    #[arg(short = 'd', long, global = true)]
    dictionary: Option<PathBuf>,

    /// Which input length earns points: trimmed input or raw input
    #[arg(long, global = true, value_enum, default_value_t = ScoreBasis::Trimmed)]
    score_basis: ScoreBasis,

    /// Seed for root word selection (default: random)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-by-line play without TUI)
    Simple,

    /// List every dictionary word playable from a root word
    Solutions {
        /// The root word to solve
        root: String,
    },

    /// Count playable words for every root word in the list
    Survey {
        /// Limit number of root words to survey
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

impl Cli {
    fn settings(&self) -> Settings {
        Settings {
            language: self.language.clone(),
            wordlist: self.wordlist.clone(),
            dictionary: self.dictionary.clone(),
            score_basis: self.score_basis,
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = cli.settings();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            logging::init(LogTarget::File(Path::new(TUI_LOG_FILE)))?;
            run_play_command(&settings)
        }
        Commands::Simple => {
            logging::init(LogTarget::Stderr)?;
            run_simple_command(&settings)
        }
        Commands::Solutions { root } => {
            logging::init(LogTarget::Stderr)?;
            run_solutions_command(&settings, &root)
        }
        Commands::Survey { limit } => {
            logging::init(LogTarget::Stderr)?;
            run_survey_command(&settings, limit)
        }
    }
}

fn load_game(settings: &Settings) -> Result<Game<WordSetDictionary>> {
    let validator = settings.validator()?;
    let source = settings.word_list_source();

    // Without a root word there is no game to play
    let game = Game::new(&source, validator)
        .with_context(|| format!("cannot start: no root words from {}", source.origin()))?;

    info!(
        language = %settings.language,
        roots = game.root_words().len(),
        "game loaded"
    );
    Ok(game)
}

fn run_play_command(settings: &Settings) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let game = load_game(settings)?;
    let app = App::new(game, settings.rng(), settings.locale());
    run_tui(app)
}

fn run_simple_command(settings: &Settings) -> Result<()> {
    let mut game = load_game(settings)?;
    let mut rng = settings.rng();
    run_simple(&mut game, &mut rng, settings.locale())
}

fn run_solutions_command(settings: &Settings, root: &str) -> Result<()> {
    let dictionary = settings.load_dictionary()?;
    let result = solve_root(root, &dictionary);
    print_solutions(&result);
    Ok(())
}

fn run_survey_command(settings: &Settings, limit: Option<usize>) -> Result<()> {
    let dictionary = settings.load_dictionary()?;
    let roots = settings
        .word_list_source()
        .load_words()
        .context("cannot read root word list")?;

    let stats = run_survey(&roots, &dictionary, limit);
    print_survey(&stats);
    Ok(())
}
