//! TUI (Terminal User Interface) module for Hangman
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # State Machine
//! The UI follows these state transitions:
//! - `ChoosingDifficulty` → `Guessing` → `RoundOver` → back to `Guessing`
//! - Terminal state: `Finished`

use crate::gallows::{MAX_WRONG_GUESSES, gallows_lines};
use crate::game_state::{
    DifficultyInput, GameInterface, GuessInput, RoundState, RoundView, SessionSummary,
};
use crate::guess::{GuessOutcome, phrase_with_blanks};
use crate::selection::Difficulty;
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const GALLOWS_PANEL_WIDTH: u16 = 20;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);
const PHRASE_STYLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Rejected guesses are shown as errors; recorded ones by their result.
fn outcome_style(outcome: GuessOutcome) -> Style {
    match outcome {
        _ if !outcome.is_recorded() => ERROR_STYLE,
        GuessOutcome::Correct(_) => SUCCESS_STYLE,
        _ => INFO_STYLE,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TuiState {
    ChoosingDifficulty,
    Guessing,
    /// Round finished; waiting for the play-again answer.
    RoundOver,
    Finished,
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    state: TuiState,
    view: Option<&'a RoundView>,
    difficulty: Option<Difficulty>,
    message: &'a str,
    message_style: Style,
    error_message: &'a str,
    status: &'a str,
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and game state display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    state: TuiState,
    view: Option<RoundView>,
    difficulty: Option<Difficulty>,
    message: String,
    message_style: Style,
    error_message: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete: alternate screen, cursor hidden");

        Ok(Self {
            terminal,
            state: TuiState::ChoosingDifficulty,
            view: None,
            difficulty: None,
            message: String::new(),
            message_style: MESSAGE_STYLE,
            error_message: String::new(),
            status: "Ready to start".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            state: self.state,
            view: self.view.as_ref(),
            difficulty: self.difficulty,
            message: &self.message,
            message_style: self.message_style,
            error_message: &self.error_message,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(11),   // Gallows and phrase
                Constraint::Length(3), // Status line
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(GALLOWS_PANEL_WIDTH), Constraint::Min(20)])
            .split(chunks[1]);

        Self::render_title(f, chunks[0], ctx.difficulty);
        Self::render_gallows(f, body[0], ctx.view);
        Self::render_info(f, body[1], ctx);
        Self::render_status(f, chunks[2], ctx.status);
        Self::render_instructions(f, chunks[3], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect, difficulty: Option<Difficulty>) {
        let text = match difficulty {
            Some(difficulty) => format!("HANGMAN - {difficulty}"),
            None => "HANGMAN".to_string(),
        };
        let title = Paragraph::new(text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_gallows(f: &mut Frame, area: Rect, view: Option<&RoundView>) {
        let misses = view.map_or(0, |v| v.wrong_count);
        let style = if misses >= MAX_WRONG_GUESSES {
            ERROR_STYLE
        } else {
            Style::default()
        };
        let lines: Vec<Line> = gallows_lines(misses)
            .into_iter()
            .map(|l| Line::from(Span::styled(l, style)))
            .collect();
        let paragraph =
            Paragraph::new(lines).block(Block::default().title("Gallows").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_info(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let mut lines = Vec::new();

        if ctx.state == TuiState::ChoosingDifficulty {
            lines.push(Line::from(Span::styled("Difficulty levels:", HEADER_STYLE)));
            for difficulty in Difficulty::ALL {
                lines.push(Line::from(format!(
                    "  {}  {}",
                    difficulty.tier() + 1,
                    difficulty
                )));
            }
            lines.push(Line::from(""));
        }

        if let Some(view) = ctx.view {
            lines.push(Line::from(Span::styled(view.masked.clone(), PHRASE_STYLE)));
            lines.push(Line::from(""));
            let remaining = MAX_WRONG_GUESSES.saturating_sub(view.wrong_count);
            lines.push(Line::from(Span::styled(
                format!(
                    "Previous incorrect guesses: {} ({remaining} left)",
                    view.wrong_guesses
                ),
                INFO_STYLE,
            )));
            lines.push(Line::from(""));
        }

        if !ctx.message.is_empty() {
            lines.push(Line::from(Span::styled(ctx.message, ctx.message_style)));
        }

        if !ctx.error_message.is_empty() {
            lines.push(Line::from(Span::styled(ctx.error_message, ERROR_STYLE)));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Phrase").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let text = match state {
            TuiState::ChoosingDifficulty => "1: Easy | 2: Medium | 3: Hard | ESC: Quit",
            TuiState::Guessing => "Type a letter to guess | ESC: Quit",
            TuiState::RoundOver => "Y: Play again | any other key: Stop",
            TuiState::Finished => "Press any key to exit",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    /// Poll for one key press. Returns `Ok(None)` when nothing usable arrived.
    fn handle_input() -> Result<Option<KeyEvent>, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => {
                // Only process Press events, ignore Release and Repeat to avoid double input
                if key.kind != event::KeyEventKind::Press {
                    debug_log!("handle_input() - Ignoring non-Press key event: {:?}", key.kind);
                    return Ok(None);
                }
                if let KeyCode::Char(c) = key.code
                    && (c == '\u{FFFD}' || c.is_control())
                {
                    debug_log!("handle_input() - Ignoring control character: {:?}", c);
                    return Ok(None);
                }
                debug_log!(
                    "handle_input() - Key event received: code={:?}, modifiers={:?}",
                    key.code,
                    key.modifiers
                );
                Ok(Some(key))
            }
            other => {
                debug_log!("handle_input() - Ignoring event: {:?}", other);
                Ok(None)
            }
        }
    }

    /// Redraw and block until a key is pressed. `None` means the terminal failed.
    fn wait_for_key(&mut self) -> Option<KeyEvent> {
        loop {
            if self.draw().is_err() {
                info_log!("wait_for_key() - Draw failed");
                return None;
            }
            match Self::handle_input() {
                Ok(Some(key)) => return Some(key),
                Ok(None) => {}
                Err(e) => {
                    info_log!("wait_for_key() - Input error: {}", e);
                    return None;
                }
            }
        }
    }

    fn is_interrupt(key: &KeyEvent) -> bool {
        key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
    }

    fn set_message(&mut self, message: String, style: Style) {
        self.message = message;
        self.message_style = style;
    }
}

impl GameInterface for TuiInterface {
    fn read_difficulty(&mut self, retry: bool) -> DifficultyInput {
        self.state = TuiState::ChoosingDifficulty;
        self.status = "Pick a difficulty level (1 to 3)".to_string();
        if retry {
            self.error_message = "Please choose a difficulty level between 1 and 3".to_string();
        }

        let Some(key) = self.wait_for_key() else {
            return DifficultyInput::Exit;
        };
        if Self::is_interrupt(&key) {
            return DifficultyInput::Exit;
        }
        self.error_message.clear();

        let choice = match key.code {
            KeyCode::Char(c) => c.to_digit(10).and_then(|d| Difficulty::from_choice(i64::from(d))),
            _ => None,
        };
        match choice {
            Some(difficulty) => {
                info_log!("read_difficulty() - {} chosen", difficulty);
                self.difficulty = Some(difficulty);
                DifficultyInput::Chosen(difficulty)
            }
            None => DifficultyInput::Invalid,
        }
    }

    fn display_round(&mut self, view: &RoundView) {
        if self.state != TuiState::Guessing {
            self.message.clear();
        }
        self.state = TuiState::Guessing;
        self.view = Some(view.clone());
        self.status = "Enter guess".to_string();
        self.draw_or_log();
    }

    fn read_guess(&mut self) -> GuessInput {
        loop {
            let Some(key) = self.wait_for_key() else {
                return GuessInput::Exit;
            };
            if Self::is_interrupt(&key) {
                info_log!("read_guess() - ESC pressed, returning Exit");
                return GuessInput::Exit;
            }
            if Self::has_modifier_keys(&key) {
                debug_log!("read_guess() - Ignoring key with modifier: {:?}", key.modifiers);
                continue;
            }
            if let KeyCode::Char(c) = key.code {
                if c.is_whitespace() {
                    return GuessInput::Empty;
                }
                return GuessInput::Letter(c);
            }
        }
    }

    fn display_guess_outcome(&mut self, outcome: GuessOutcome) {
        self.set_message(outcome.message(), outcome_style(outcome));
        self.draw_or_log();
    }

    fn display_result(&mut self, view: &RoundView, state: RoundState, phrase: &str) {
        self.view = Some(view.clone());
        self.state = TuiState::RoundOver;
        if state == RoundState::Lost {
            let revealed = phrase_with_blanks(phrase, phrase);
            self.set_message(
                format!("You're Dead! The phrase was: \"{revealed}\""),
                ERROR_STYLE,
            );
        } else {
            self.set_message("You Win!".to_string(), SUCCESS_STYLE);
        }
        self.status = "Round over".to_string();
        self.draw_or_log();
    }

    fn display_phrases_exhausted(&mut self) {
        self.error_message = "Every phrase has been used.".to_string();
        self.draw_or_log();
    }

    fn display_no_phrases(&mut self, difficulty: Difficulty) {
        self.state = TuiState::Finished;
        self.error_message = format!("No phrases are available for {difficulty}.");
        self.draw_or_log();
    }

    fn read_play_again(&mut self) -> bool {
        self.status = "Would you like to play again? (y/n)".to_string();
        let answer = matches!(
            self.wait_for_key(),
            Some(KeyEvent {
                code: KeyCode::Char('y'),
                ..
            })
        );
        self.error_message.clear();
        answer
    }

    fn display_summary(&mut self, summary: &SessionSummary) {
        self.state = TuiState::Finished;
        self.status = format!(
            "You played {} times. ({} won, {} lost)",
            summary.rounds_played, summary.wins, summary.losses
        );
        let _ = self.wait_for_key();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
