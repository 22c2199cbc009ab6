use crate::gallows::MAX_WRONG_GUESSES;
use crate::guess::{GuessLog, GuessOutcome, check_victory, phrase_with_blanks};
use crate::phrases::Phrase;
use crate::selection::{Difficulty, select_phrase};
use crate::{debug_log, info_log};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    Guessing,
    Won,
    Lost,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DifficultyInput {
    Chosen(Difficulty),
    Invalid,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessInput {
    Letter(char),
    /// Nothing usable was entered; ask again.
    Empty,
    Exit,
}

/// Snapshot of a round handed to the interface for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundView {
    pub wrong_count: usize,
    pub masked: String,
    pub wrong_guesses: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds_played: usize,
    pub wins: usize,
    pub losses: usize,
}

/// Everything the game needs from a front-end.
///
/// Implemented by the line-based console interface and by the terminal UI.
pub trait GameInterface {
    /// Ask for a difficulty; `retry` is set after an invalid answer.
    fn read_difficulty(&mut self, retry: bool) -> DifficultyInput;
    fn display_round(&mut self, view: &RoundView);
    fn read_guess(&mut self) -> GuessInput;
    fn display_guess_outcome(&mut self, outcome: GuessOutcome);
    fn display_result(&mut self, view: &RoundView, state: RoundState, phrase: &str);
    fn display_phrases_exhausted(&mut self);
    fn display_no_phrases(&mut self, difficulty: Difficulty);
    fn read_play_again(&mut self) -> bool;
    fn display_summary(&mut self, summary: &SessionSummary);
}

/// One hangman round over a single phrase.
#[derive(Debug, Clone)]
pub struct Round {
    phrase: String,
    guesses: GuessLog,
}

impl Round {
    pub fn new(phrase: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
            guesses: GuessLog::new(),
        }
    }

    #[must_use]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    #[must_use]
    pub fn guesses(&self) -> &GuessLog {
        &self.guesses
    }

    pub fn guess(&mut self, input: char) -> GuessOutcome {
        self.guesses.classify(input, &self.phrase)
    }

    #[must_use]
    pub fn masked(&self) -> String {
        phrase_with_blanks(&self.phrase, &self.guesses.correct())
    }

    #[must_use]
    pub fn state(&self) -> RoundState {
        if check_victory(&self.masked()) {
            RoundState::Won
        } else if self.guesses.wrong_count() >= MAX_WRONG_GUESSES {
            RoundState::Lost
        } else {
            RoundState::Guessing
        }
    }

    #[must_use]
    pub fn view(&self) -> RoundView {
        RoundView {
            wrong_count: self.guesses.wrong_count(),
            masked: self.masked(),
            wrong_guesses: self.guesses.wrong(),
        }
    }
}

/// Play one round to completion.
///
/// The player always gets at least one guess, even on a phrase with nothing
/// to reveal. Returns `None` when the player quits mid-round.
pub fn play_round<I: GameInterface + ?Sized>(phrase: &str, interface: &mut I) -> Option<RoundState> {
    let mut round = Round::new(phrase);
    loop {
        interface.display_round(&round.view());

        let input = match interface.read_guess() {
            GuessInput::Exit => {
                info_log!("play_round() - player quit mid-round");
                return None;
            }
            GuessInput::Empty => continue,
            GuessInput::Letter(c) => c,
        };

        let outcome = round.guess(input);
        debug_log!("play_round() - '{}' -> {:?}", input, outcome);
        interface.display_guess_outcome(outcome);

        let state = round.state();
        if state != RoundState::Guessing {
            interface.display_result(&round.view(), state, round.phrase());
            return Some(state);
        }
    }
}

/// Prompt until a valid difficulty is chosen, or `None` if the player quits.
pub fn choose_difficulty<I: GameInterface + ?Sized>(interface: &mut I) -> Option<Difficulty> {
    let mut retry = false;
    loop {
        match interface.read_difficulty(retry) {
            DifficultyInput::Chosen(difficulty) => return Some(difficulty),
            DifficultyInput::Invalid => retry = true,
            DifficultyInput::Exit => return None,
        }
    }
}

/// Run rounds until the player declines to continue.
///
/// `phrases` must be sorted by score. Each finished round marks its phrase
/// used. An empty difficulty band ends the session immediately.
pub fn game_loop<I, R>(
    phrases: &mut [Phrase],
    preset: Option<Difficulty>,
    rng: &mut R,
    interface: &mut I,
) -> SessionSummary
where
    I: GameInterface + ?Sized,
    R: Rng + ?Sized,
{
    let mut summary = SessionSummary::default();

    let difficulty = match preset {
        Some(difficulty) => difficulty,
        None => match choose_difficulty(interface) {
            Some(difficulty) => difficulty,
            None => {
                interface.display_summary(&summary);
                return summary;
            }
        },
    };
    info_log!("game_loop() - difficulty {}", difficulty);

    loop {
        let selection = match select_phrase(phrases, difficulty, rng) {
            Ok(selection) => selection,
            Err(e) => {
                log::warn!("{e}");
                interface.display_no_phrases(difficulty);
                break;
            }
        };
        if selection.exhausted {
            interface.display_phrases_exhausted();
        }

        let phrase = &mut phrases[selection.index];
        debug_log!("game_loop() - next phrase is: {}", phrase.text);

        let Some(state) = play_round(&phrase.text, interface) else {
            break;
        };
        phrase.used = true;
        summary.rounds_played += 1;
        match state {
            RoundState::Won => summary.wins += 1,
            RoundState::Lost => summary.losses += 1,
            RoundState::Guessing => {}
        }

        if !interface.read_play_again() {
            break;
        }
    }

    interface.display_summary(&summary);
    summary
}
