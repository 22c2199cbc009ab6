// Library interface for hangman
// This allows integration tests to access internal modules

pub mod cli;
pub mod gallows;
pub mod game_state;
pub mod guess;
pub mod logging;
pub mod phrases;
pub mod selection;
pub mod tui;

// Re-export commonly used functions for easier testing
pub use game_state::{GameInterface, Round, RoundState, SessionSummary, game_loop, play_round};
pub use guess::{GuessOutcome, check_victory, phrase_with_blanks};
pub use phrases::{
    MAX_PHRASES, Phrase, load_phrases_from_file, load_phrases_from_str, required_guesses,
    sort_phrases,
};
pub use selection::{Difficulty, Selection, SelectionError, band, select_phrase};
