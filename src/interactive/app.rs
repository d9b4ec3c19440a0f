//! TUI application state and logic

use crate::core::{AcceptedWord, Game, Locale, Rejection, normalize};
use crate::dictionary::DictionaryOracle;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info};

/// Longest input accepted in the text field
const MAX_INPUT_LEN: usize = 32;

/// Application state
pub struct App<D> {
    pub game: Game<D>,
    pub rng: StdRng,
    pub locale: Locale,
    pub input_buffer: String,
    pub alert: Option<Alert>,
    pub messages: Vec<Message>,
    pub last_accepted: Option<AcceptedWord>,
    pub games_played: usize,
    pub best_score: usize,
    pub should_quit: bool,
}

/// Modal notification shown after a rejected word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: &'static str,
    pub message: &'static str,
}

impl Alert {
    #[must_use]
    pub const fn from_rejection(rejection: Rejection, locale: Locale) -> Self {
        Self {
            title: rejection.title(locale),
            message: rejection.message(locale),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<D: DictionaryOracle> App<D> {
    #[must_use]
    pub fn new(game: Game<D>, rng: StdRng, locale: Locale) -> Self {
        Self {
            game,
            rng,
            locale,
            input_buffer: String::new(),
            alert: None,
            messages: Vec::new(),
            last_accepted: None,
            games_played: 0,
            best_score: 0,
            should_quit: false,
        }
    }

    /// Start (or restart) a game with a fresh root word
    pub fn start_game(&mut self) {
        if let Some(session) = self.game.session() {
            self.best_score = self.best_score.max(session.score());
        }

        let root = self
            .game
            .start_game_with_rng(&mut self.rng)
            .root_word()
            .to_uppercase();
        self.games_played += 1;
        self.input_buffer.clear();
        self.alert = None;
        self.last_accepted = None;
        self.add_message(&format!("🔤 {root}"), MessageStyle::Info);
    }

    /// Submit the text field
    pub fn submit_input(&mut self) {
        let raw = std::mem::take(&mut self.input_buffer);

        match self.game.submit(&raw) {
            Ok(Some(accepted)) => {
                self.add_message(
                    &format!("✓ {} +{}", accepted.word, accepted.points),
                    MessageStyle::Success,
                );
                self.last_accepted = Some(accepted);
            }
            Ok(None) => {}
            Err(rejection) => {
                self.add_message(&format!("✗ {}", normalize(&raw)), MessageStyle::Error);
                self.alert = Some(Alert::from_rejection(rejection, self.locale));
                // Keep the rejected text so it can be corrected
                self.input_buffer = raw;
            }
        }
    }

    /// React to a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.alert = None;
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') if ctrl => self.start_game(),
            KeyCode::F(5) => self.start_game(),
            KeyCode::Enter => self.submit_input(),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) if !ctrl => {
                if self.input_buffer.chars().count() < MAX_INPUT_LEN {
                    self.input_buffer.push(c);
                }
            }
            _ => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<D: DictionaryOracle>(app: App<D>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = %err, "terminal UI failed");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, D: DictionaryOracle>(
    terminal: &mut Terminal<B>,
    mut app: App<D>,
) -> Result<()> {
    app.start_game();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    info!(
        games = app.games_played,
        score = app.game.session().map_or(0, crate::core::Session::score),
        "leaving terminal UI"
    );

    Ok(())
}
