//! Simple interactive CLI mode
//!
//! Line-oriented play without the full-screen interface. Lines starting with
//! `/` are commands; anything else is submitted as a word.

use crate::core::{Game, Locale, Rejection, Session};
use crate::dictionary::DictionaryOracle;
use crate::output::formatters::word_with_badge;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input<'a> {
    Quit,
    NewGame,
    ListWords,
    Help,
    Word(&'a str),
}

fn parse_input(line: &str) -> Input<'_> {
    match line.trim() {
        "/quit" | "/q" | "/exit" => Input::Quit,
        "/new" | "/n" => Input::NewGame,
        "/words" | "/w" => Input::ListWords,
        "/help" | "/h" | "/?" => Input::Help,
        // Only the line terminator goes; other whitespace is part of the input
        _ => Input::Word(line.trim_end_matches(['\r', '\n'])),
    }
}

/// Run the simple interactive mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple<D: DictionaryOracle, R: Rng + ?Sized>(
    game: &mut Game<D>,
    rng: &mut R,
    locale: Locale,
) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(game, rng, locale, stdin.lock(), stdout.lock())
}

/// Run the simple interactive mode over arbitrary input and output
///
/// Ends on `/quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<D, R, I, W>(
    game: &mut Game<D>,
    rng: &mut R,
    locale: Locale,
    mut input: I,
    mut output: W,
) -> Result<()>
where
    D: DictionaryOracle,
    R: Rng + ?Sized,
    I: BufRead,
    W: Write,
{
    writeln!(output, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(output, " {} ", "WORD SCRAMBLE".bright_cyan().bold())?;
    writeln!(output, "{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        output,
        "{}",
        format!("{}: /new  /words  /help  /quit", locale.commands_label()).bright_black()
    )?;

    let session = game.start_game_with_rng(rng);
    print_root(&mut output, session)?;

    let mut line = String::new();
    loop {
        write!(output, "{}: ", locale.input_prompt())?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        match parse_input(&line) {
            Input::Quit => break,
            Input::NewGame => {
                writeln!(output, "\n🔄 {}", locale.restart_label().bright_cyan())?;
                let session = game.start_game_with_rng(rng);
                print_root(&mut output, session)?;
            }
            Input::ListWords => {
                if let Some(session) = game.session() {
                    print_words(&mut output, session, locale)?;
                }
            }
            Input::Help => {
                for (command, description) in locale.command_help() {
                    writeln!(output, "  {command:<7} {description}")?;
                }
            }
            Input::Word(raw) => match game.submit(raw) {
                Ok(Some(accepted)) => {
                    let score = game.session().map_or(0, Session::score);
                    writeln!(
                        output,
                        "  {} {} {}  {} {}",
                        "✓".green().bold(),
                        word_with_badge(&accepted.word).bright_white().bold(),
                        format!("+{}", accepted.points).green(),
                        format!("{}:", locale.score_label()).bright_black(),
                        score.to_string().bright_yellow().bold()
                    )?;
                }
                Ok(None) => {}
                Err(rejection) => print_rejection(&mut output, rejection, locale)?,
            },
        }
    }

    if let Some(session) = game.session() {
        writeln!(
            output,
            "👋 {} {}",
            format!("{}:", locale.score_label()).bright_cyan(),
            session.score().to_string().bright_yellow().bold()
        )?;
    }

    Ok(())
}

fn print_root<W: Write>(output: &mut W, session: &Session) -> io::Result<()> {
    writeln!(
        output,
        "\n  {}\n",
        session.root_word().to_uppercase().bright_yellow().bold()
    )
}

fn print_rejection<W: Write>(
    output: &mut W,
    rejection: Rejection,
    locale: Locale,
) -> io::Result<()> {
    writeln!(
        output,
        "  {} {} {}",
        "✗".red().bold(),
        rejection.title(locale).red().bold(),
        rejection.message(locale)
    )
}

fn print_words<W: Write>(output: &mut W, session: &Session, locale: Locale) -> io::Result<()> {
    writeln!(
        output,
        "\n  {} ({})",
        locale.words_label().bright_cyan().bold(),
        session.used_words().len()
    )?;
    for word in session.used_words() {
        writeln!(output, "    {}", word_with_badge(word))?;
    }
    writeln!(output, "  {}: {}\n", locale.score_label(), session.score())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ScoreBasis, WordValidator};
    use crate::dictionary::{LanguageTag, WordSetDictionary};
    use crate::wordlists::StaticWordList;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn play(lines: &str) -> (Game<WordSetDictionary>, String) {
        play_with(ScoreBasis::Trimmed, Locale::French, lines)
    }

    fn play_with(
        score_basis: ScoreBasis,
        locale: Locale,
        lines: &str,
    ) -> (Game<WordSetDictionary>, String) {
        colored::control::set_override(false);

        let dictionary =
            WordSetDictionary::from_words(LanguageTag::new("fr"), ["loge", "gel", "logo"]);
        let validator = WordValidator::new(dictionary, LanguageTag::new("fr"))
            .with_score_basis(score_basis);
        let mut game =
            Game::new(&StaticWordList::new("test", &["geologie"]), validator).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let mut output = Vec::new();

        run_simple_with(
            &mut game,
            &mut rng,
            locale,
            Cursor::new(lines.to_string()),
            &mut output,
        )
        .unwrap();

        (game, String::from_utf8(output).unwrap())
    }

    #[test]
    fn parse_commands() {
        assert_eq!(parse_input("/quit\n"), Input::Quit);
        assert_eq!(parse_input(" /n "), Input::NewGame);
        assert_eq!(parse_input("/words"), Input::ListWords);
        assert_eq!(parse_input("loge\n"), Input::Word("loge"));
        assert_eq!(parse_input("loge\r\n"), Input::Word("loge"));
        assert_eq!(parse_input(" loge \n"), Input::Word(" loge "));
        assert_eq!(parse_input("quit"), Input::Word("quit"));
    }

    #[test]
    fn shows_root_word() {
        let (_, output) = play("/quit\n");
        assert!(output.contains("GEOLOGIE"));
    }

    #[test]
    fn accepted_word_is_scored() {
        let (game, output) = play("loge\n/quit\n");

        assert!(output.contains("④ loge"));
        assert!(output.contains("+5"));
        assert_eq!(game.session().unwrap().score(), 5);
    }

    #[test]
    fn rejection_shows_localized_title() {
        let (game, output) = play("loge\nloge\nox\n/quit\n");

        assert!(output.contains("Mot déjà utilisé"));
        assert!(output.contains("Mot trop court"));
        assert_eq!(game.session().unwrap().used_words(), &["loge"]);
    }

    #[test]
    fn new_game_resets_session() {
        let (game, output) = play("loge\n/new\n/quit\n");

        assert!(output.contains("Rejouer"));
        assert_eq!(game.session().unwrap().score(), 0);
    }

    #[test]
    fn end_of_input_finishes_cleanly() {
        let (game, output) = play("loge\ngel");

        assert_eq!(game.session().unwrap().score(), 9);
        assert!(output.contains("Score:"));
    }

    #[test]
    fn list_words_shows_badges() {
        let (_, output) = play("gel\nlogo\n/words\n");

        assert!(output.contains("Mots trouvés (2)"));
        assert!(output.contains("③ gel"));
        assert!(output.contains("④ logo"));
    }

    #[test]
    fn blank_line_is_ignored() {
        let (game, output) = play("\n   \n/quit\n");

        assert!(!output.contains('✗'));
        assert!(game.session().unwrap().used_words().is_empty());
    }

    #[test]
    fn raw_basis_ignores_line_terminator() {
        let (game, output) = play_with(ScoreBasis::Raw, Locale::French, "loge\r\ngel\n/quit\n");

        assert!(output.contains("+5"));
        assert_eq!(game.session().unwrap().score(), 5 + 4);
    }

    #[test]
    fn raw_basis_keeps_typed_spaces() {
        let (game, _) = play_with(ScoreBasis::Raw, Locale::French, " loge \n/quit\n");
        assert_eq!(game.session().unwrap().score(), 7);
    }

    #[test]
    fn help_follows_locale() {
        let (_, french) = play("/help\n/quit\n");
        assert!(french.contains("Commandes:"));
        assert!(french.contains("quitter la partie"));

        let (_, english) = play_with(ScoreBasis::Trimmed, Locale::English, "/help\n/quit\n");
        assert!(english.contains("Commands:"));
        assert!(english.contains("leave the game"));
    }
}
