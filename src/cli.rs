use crate::gallows::draw_gallows;
use crate::game_state::{
    DifficultyInput, GameInterface, GuessInput, RoundState, RoundView, SessionSummary,
};
use crate::guess::{GuessOutcome, phrase_with_blanks};
use crate::phrases::DEFAULT_PHRASE_FILE;
use crate::selection::Difficulty;
use clap::Parser;
use std::io::BufRead;

/// Lines printed after each guess so the next board starts on a fresh screen.
const CLEAR_LINES: usize = 19;

/// Console hangman options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited phrase file
    #[arg(short = 'i', long = "input", default_value = DEFAULT_PHRASE_FILE)]
    pub phrase_path: String,

    /// Difficulty level (1 = Easy, 2 = Medium, 3 = Hard); prompts when omitted
    #[arg(short = 'd', long = "difficulty", value_parser = clap::value_parser!(u8).range(1..=3))]
    pub difficulty: Option<u8>,

    /// Seed for phrase selection (defaults to the current time)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Play in the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,

    /// Print the sorted phrase table and exit
    #[arg(long)]
    pub list: bool,
}

impl Cli {
    #[must_use]
    pub fn preset_difficulty(&self) -> Option<Difficulty> {
        self.difficulty
            .and_then(|choice| Difficulty::from_choice(i64::from(choice)))
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Read one line, or `None` at end of input.
fn read_input<R: BufRead>(reader: &mut R) -> Option<String> {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => None,
        Ok(_) => Some(input),
        Err(e) => {
            log::warn!("failed to read console input: {e}");
            None
        }
    }
}

/// Read the leading integer of the first token, so `3abc` picks 3.
fn parse_difficulty(input: &str) -> Option<Difficulty> {
    let token = input.split_whitespace().next()?;
    let sign_len = usize::from(token.starts_with(['+', '-']));
    let digits = token[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(token.len() - sign_len);
    token[..sign_len + digits]
        .parse::<i64>()
        .ok()
        .and_then(Difficulty::from_choice)
}

fn parse_guess(input: &str) -> GuessInput {
    match input.trim().chars().next() {
        Some(c) => GuessInput::Letter(c),
        None => GuessInput::Empty,
    }
}

fn parse_play_again(input: &str) -> bool {
    input.trim().starts_with('y')
}

pub fn display_difficulty_menu() {
    println!("Difficulty levels:");
    for difficulty in Difficulty::ALL {
        println!("{:>5}  {}", difficulty.tier() + 1, difficulty);
    }
}

pub fn read_difficulty<R: BufRead>(reader: &mut R, retry: bool) -> DifficultyInput {
    if retry {
        println!("Please choose a difficulty level between 1 and 3: ");
    } else {
        display_difficulty_menu();
        println!("Pick a difficulty level (1 to 3): ");
    }
    let Some(input) = read_input(reader) else {
        return DifficultyInput::Exit;
    };
    println!();
    match parse_difficulty(&input) {
        Some(difficulty) => DifficultyInput::Chosen(difficulty),
        None => DifficultyInput::Invalid,
    }
}

pub fn display_round(view: &RoundView) {
    print!("{}", draw_gallows(view.wrong_count));
    println!();
    println!("{}", view.masked);
    println!("Previous incorrect guesses: {}", view.wrong_guesses);
}

pub fn read_guess<R: BufRead>(reader: &mut R) -> GuessInput {
    println!("Enter guess: ");
    let Some(input) = read_input(reader) else {
        return GuessInput::Exit;
    };
    print!("{}", "\n".repeat(CLEAR_LINES));
    parse_guess(&input)
}

pub fn display_guess_outcome(outcome: GuessOutcome) {
    println!("{}", outcome.message());
}

pub fn display_result(view: &RoundView, state: RoundState, phrase: &str) {
    print!("{}", draw_gallows(view.wrong_count));
    println!();
    println!("{}", view.masked);
    if state == RoundState::Lost {
        println!("You're Dead! The phrase was:");
        println!("\"{}\"", phrase_with_blanks(phrase, phrase));
    } else {
        println!("You Win!");
    }
}

pub fn display_phrases_exhausted() {
    println!("Every phrase has been used.");
}

pub fn display_no_phrases(difficulty: Difficulty) {
    println!("No phrases are available for {difficulty}.");
}

pub fn read_play_again<R: BufRead>(reader: &mut R) -> bool {
    println!("Would you like to play again? (y/n): ");
    let answer = read_input(reader).is_some_and(|input| parse_play_again(&input));
    println!();
    answer
}

pub fn display_summary(summary: &SessionSummary) {
    println!(
        "You played {} times. ({} won, {} lost)",
        summary.rounds_played, summary.wins, summary.losses
    );
}

/// CLI implementation of the `GameInterface` trait.
/// Wraps a `BufRead` reader and prints to stdout.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn read_difficulty(&mut self, retry: bool) -> DifficultyInput {
        read_difficulty(&mut self.reader, retry)
    }

    fn display_round(&mut self, view: &RoundView) {
        display_round(view);
    }

    fn read_guess(&mut self) -> GuessInput {
        read_guess(&mut self.reader)
    }

    fn display_guess_outcome(&mut self, outcome: GuessOutcome) {
        display_guess_outcome(outcome);
    }

    fn display_result(&mut self, view: &RoundView, state: RoundState, phrase: &str) {
        display_result(view, state, phrase);
    }

    fn display_phrases_exhausted(&mut self) {
        display_phrases_exhausted();
    }

    fn display_no_phrases(&mut self, difficulty: Difficulty) {
        display_no_phrases(difficulty);
    }

    fn read_play_again(&mut self) -> bool {
        read_play_again(&mut self.reader)
    }

    fn display_summary(&mut self, summary: &SessionSummary) {
        display_summary(summary);
    }
}
