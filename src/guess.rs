//! Letter guesses, their classification, and the masked phrase.

/// Placeholder shown for a letter that has not been guessed yet.
pub const BLANK: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessKind {
    Correct,
    Wrong,
}

/// Result of submitting one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    NotALetter(char),
    /// Holds the letter as it was first recorded.
    Repeated(char),
    Correct(char),
    Wrong(char),
}

impl GuessOutcome {
    /// Whether the guess was recorded in the log.
    #[must_use]
    pub fn is_recorded(self) -> bool {
        matches!(self, Self::Correct(_) | Self::Wrong(_))
    }

    #[must_use]
    pub fn message(self) -> String {
        match self {
            Self::NotALetter(c) => format!("'{c}' is not a valid guess. Please enter a letter."),
            Self::Repeated(c) => format!("You have already guessed an '{c}'."),
            Self::Correct(_) => "Good guess!".to_string(),
            Self::Wrong(_) => "Sorry, bad guess.".to_string(),
        }
    }
}

/// Ordered record of every accepted guess.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessLog {
    entries: Vec<(char, GuessKind)>,
}

impl GuessLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Letters guessed so far, in order.
    #[must_use]
    pub fn all(&self) -> String {
        self.entries.iter().map(|(c, _)| *c).collect()
    }

    #[must_use]
    pub fn correct(&self) -> String {
        self.of_kind(GuessKind::Correct)
    }

    #[must_use]
    pub fn wrong(&self) -> String {
        self.of_kind(GuessKind::Wrong)
    }

    #[must_use]
    pub fn wrong_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, kind)| *kind == GuessKind::Wrong)
            .count()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find an earlier guess of `letter`, ignoring case.
    #[must_use]
    pub fn find(&self, letter: char) -> Option<char> {
        self.entries
            .iter()
            .map(|(c, _)| *c)
            .find(|c| c.eq_ignore_ascii_case(&letter))
    }

    /// Classify `input` against `phrase` and record it when it is a new letter.
    pub fn classify(&mut self, input: char, phrase: &str) -> GuessOutcome {
        let letter = input.to_ascii_lowercase();
        if !letter.is_ascii_alphabetic() {
            return GuessOutcome::NotALetter(letter);
        }
        if let Some(previous) = self.find(letter) {
            return GuessOutcome::Repeated(previous);
        }

        if phrase.chars().any(|c| c.eq_ignore_ascii_case(&letter)) {
            self.entries.push((letter, GuessKind::Correct));
            GuessOutcome::Correct(letter)
        } else {
            self.entries.push((letter, GuessKind::Wrong));
            GuessOutcome::Wrong(letter)
        }
    }

    fn of_kind(&self, wanted: GuessKind) -> String {
        self.entries
            .iter()
            .filter(|(_, kind)| *kind == wanted)
            .map(|(c, _)| *c)
            .collect()
    }
}

/// Characters that are never hidden: anything that is not an ASCII letter.
#[must_use]
pub fn is_always_shown(ch: char) -> bool {
    !ch.is_ascii_alphabetic()
}

/// Render `phrase` with unguessed letters blanked, one space between positions.
#[must_use]
pub fn phrase_with_blanks(phrase: &str, correct_guesses: &str) -> String {
    let mut masked = String::with_capacity(phrase.len() * 2);
    for (i, ch) in phrase.chars().enumerate() {
        if i > 0 {
            masked.push(' ');
        }
        let guessed = correct_guesses.chars().any(|g| g.eq_ignore_ascii_case(&ch));
        if is_always_shown(ch) || guessed {
            masked.push(ch);
        } else {
            masked.push(BLANK);
        }
    }
    masked
}

/// True once the masked phrase has no blanks left.
#[must_use]
pub fn check_victory(masked: &str) -> bool {
    !masked.contains(BLANK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrase_with_blanks_no_guesses() {
        assert_eq!(phrase_with_blanks("ab-c", ""), "_ _ - _");
        assert_eq!(phrase_with_blanks("Hi, you!", ""), "_ _ ,   _ _ _ !");
    }

    #[test]
    fn test_phrase_with_blanks_partial_and_full() {
        assert_eq!(phrase_with_blanks("cat", "c"), "c _ _");
        assert_eq!(phrase_with_blanks("cat", "cat"), "c a t");
        assert_eq!(phrase_with_blanks("cat", "tac"), "c a t");
    }

    #[test]
    fn test_phrase_with_blanks_case_insensitive() {
        assert_eq!(phrase_with_blanks("Cat", "c"), "C _ _");
        assert_eq!(phrase_with_blanks("cat", "C"), "c _ _");
    }

    #[test]
    fn test_phrase_with_blanks_digits_always_shown() {
        assert_eq!(phrase_with_blanks("R2D2", ""), "_ 2 _ 2");
        assert_eq!(phrase_with_blanks("", "abc"), "");
    }

    #[test]
    fn test_check_victory() {
        assert!(check_victory("c a t"));
        assert!(!check_victory("c _ t"));
        assert!(check_victory(""));
    }

    #[test]
    fn test_is_always_shown() {
        for ch in [' ', ',', '!', '-', '\'', '0', '9', '[', '`'] {
            assert!(is_always_shown(ch), "{ch:?} should be shown");
        }
        for ch in ['a', 'z', 'A', 'Z'] {
            assert!(!is_always_shown(ch), "{ch:?} should be hidden");
        }
    }

    #[test]
    fn test_classify_correct_and_wrong() {
        let mut log = GuessLog::new();
        assert_eq!(log.classify('c', "cat"), GuessOutcome::Correct('c'));
        assert_eq!(log.classify('x', "cat"), GuessOutcome::Wrong('x'));
        assert_eq!(log.correct(), "c");
        assert_eq!(log.wrong(), "x");
        assert_eq!(log.all(), "cx");
        assert_eq!(log.wrong_count(), 1);
    }

    #[test]
    fn test_classify_lowercases_input() {
        let mut log = GuessLog::new();
        assert_eq!(log.classify('A', "cat"), GuessOutcome::Correct('a'));
        assert_eq!(log.classify('T', "CAT"), GuessOutcome::Correct('t'));
        assert_eq!(log.correct(), "at");
    }

    #[test]
    fn test_classify_repeat_leaves_log_unchanged() {
        let mut log = GuessLog::new();
        log.classify('a', "cat");
        log.classify('q', "cat");
        let before = log.clone();

        assert_eq!(log.classify('a', "cat"), GuessOutcome::Repeated('a'));
        assert_eq!(log.classify('A', "cat"), GuessOutcome::Repeated('a'));
        assert_eq!(log.classify('Q', "cat"), GuessOutcome::Repeated('q'));
        assert_eq!(log, before);
    }

    #[test]
    fn test_classify_rejects_non_letters() {
        let mut log = GuessLog::new();
        for ch in ['1', ' ', '!', '_', '{', 'é'] {
            assert_eq!(log.classify(ch, "a_b!"), GuessOutcome::NotALetter(ch));
        }
        assert!(log.is_empty());
    }

    #[test]
    fn test_log_views_partition_all() {
        let mut log = GuessLog::new();
        for ch in "hello world".chars().chain("zqxe".chars()) {
            log.classify(ch, "Hello");
        }
        assert_eq!(log.len(), log.correct().len() + log.wrong().len());
        assert_eq!(log.all().len(), log.len());
        for ch in log.all().chars() {
            let in_correct = log.correct().contains(ch);
            let in_wrong = log.wrong().contains(ch);
            assert!(in_correct != in_wrong);
        }
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(
            GuessOutcome::NotALetter('3').message(),
            "'3' is not a valid guess. Please enter a letter."
        );
        assert_eq!(
            GuessOutcome::Repeated('e').message(),
            "You have already guessed an 'e'."
        );
        assert_eq!(GuessOutcome::Correct('e').message(), "Good guess!");
        assert_eq!(GuessOutcome::Wrong('e').message(), "Sorry, bad guess.");
        assert!(GuessOutcome::Correct('e').is_recorded());
        assert!(!GuessOutcome::Repeated('e').is_recorded());
    }
}
