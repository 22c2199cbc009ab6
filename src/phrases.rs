use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader, ErrorKind};
use std::path::Path;

/// Default phrase file, relative to the working directory.
pub const DEFAULT_PHRASE_FILE: &str = "phrases.txt";

/// Maximum number of phrases read from a phrase source.
pub const MAX_PHRASES: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    pub text: String,
    /// Distinct letters a player has to find; the difficulty score.
    pub required_guesses: usize,
    pub used: bool,
}

impl Phrase {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let required_guesses = required_guesses(&text);
        Self {
            text,
            required_guesses,
            used: false,
        }
    }
}

/// Count the distinct letters `a..=z` in `text`, ignoring case.
/// Digits, punctuation and whitespace do not count.
#[must_use]
pub fn required_guesses(text: &str) -> usize {
    let mut seen = HashSet::new();
    for ch in text.chars() {
        let lower = ch.to_ascii_lowercase();
        if lower.is_ascii_lowercase() {
            seen.insert(lower);
        }
    }
    seen.len()
}

pub fn load_phrases_from_str(data: &str, capacity: usize) -> Vec<Phrase> {
    data.lines().take(capacity).map(Phrase::new).collect()
}

pub fn load_phrases_from_file<P: AsRef<Path>>(path: P, capacity: usize) -> io::Result<Vec<Phrase>> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut phrases = Vec::new();
    let mut buf = Vec::new();
    while phrases.len() < capacity {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        // Lines are not required to be UTF-8; undecodable bytes become U+FFFD.
        phrases.push(Phrase::new(String::from_utf8_lossy(&buf)));
    }
    Ok(phrases)
}

/// Console message for a phrase file that could not be loaded.
///
/// Only a missing file is reported as such; any other error is a read failure.
#[must_use]
pub fn load_failure_message(path: &str, err: &io::Error) -> String {
    if err.kind() == ErrorKind::NotFound {
        "File does not exist".to_string()
    } else {
        format!("Failed to read phrase file '{path}': {err}")
    }
}

/// Selection sort, ascending by `required_guesses`.
///
/// The smallest remaining phrase is always swapped into place, so phrases
/// with equal scores may change their relative order.
pub fn sort_phrases(phrases: &mut [Phrase]) {
    for index in 0..phrases.len() {
        let mut smallest = index;
        for iter in index + 1..phrases.len() {
            if phrases[iter].required_guesses < phrases[smallest].required_guesses {
                smallest = iter;
            }
        }
        phrases.swap(index, smallest);
    }
}

/// Render the phrase table printed by `--list`.
#[must_use]
pub fn format_phrase_table(phrases: &[Phrase]) -> String {
    let mut table = format!("{:>3} {:<49}{:<5}\n", "#", "Phrase", "State");
    for phrase in phrases {
        let state = if phrase.used { "used" } else { "unused" };
        table.push_str(&format!(
            "{:>3} {:<49}{}\n",
            phrase.required_guesses, phrase.text, state
        ));
    }
    table
}
