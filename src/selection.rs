use crate::phrases::Phrase;
use rand::Rng;
use std::fmt;
use std::ops::Range;
use thiserror::Error;

/// Draws made before giving up on finding an unused phrase.
pub const MAX_DRAW_ATTEMPTS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Map the 1-based menu choice to a difficulty.
    #[must_use]
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Self::Easy),
            2 => Some(Self::Medium),
            3 => Some(Self::Hard),
            _ => None,
        }
    }

    /// Zero-based tier: 0 = Easy, 1 = Medium, 2 = Hard.
    #[must_use]
    pub fn tier(self) -> usize {
        match self {
            Self::Easy => 0,
            Self::Medium => 1,
            Self::Hard => 2,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("no phrases are available for {difficulty} ({total} phrases loaded)")]
    EmptyBand { difficulty: Difficulty, total: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub index: usize,
    /// Every draw landed on a used phrase; `index` is the last one drawn.
    pub exhausted: bool,
}

/// Index range of the sorted phrase list that belongs to `difficulty`.
///
/// Each band is a third of the list; Hard also takes the remainder.
#[must_use]
pub fn band(difficulty: Difficulty, total: usize) -> Range<usize> {
    let third = total / 3;
    match difficulty {
        Difficulty::Easy => 0..third,
        Difficulty::Medium => third..third * 2,
        Difficulty::Hard => third * 2..total,
    }
}

/// Pick a random unused phrase from the band for `difficulty`.
///
/// `phrases` must already be sorted by score. When every one of
/// [`MAX_DRAW_ATTEMPTS`] draws hits a used phrase the last draw is returned
/// with `exhausted` set.
pub fn select_phrase<R: Rng + ?Sized>(
    phrases: &[Phrase],
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<Selection, SelectionError> {
    let range = band(difficulty, phrases.len());
    if range.is_empty() {
        return Err(SelectionError::EmptyBand {
            difficulty,
            total: phrases.len(),
        });
    }

    let mut index = range.start;
    for _ in 0..MAX_DRAW_ATTEMPTS {
        index = rng.gen_range(range.clone());
        if !phrases[index].used {
            return Ok(Selection {
                index,
                exhausted: false,
            });
        }
    }

    log::warn!(
        "every {difficulty} phrase has been used; replaying index {index} of band {range:?}"
    );
    Ok(Selection {
        index,
        exhausted: true,
    })
}
