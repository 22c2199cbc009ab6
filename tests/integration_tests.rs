// Integration tests for the hangman application
// These tests verify that all modules work together correctly

use hangman::cli::CliInterface;
use hangman::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Cursor;

#[test]
fn test_end_to_end_cat_round() {
    // Guesses c (correct), x (wrong), a, t -> won with one miss
    let mut round = Round::new("cat");
    for c in ['c', 'x', 'a', 't'] {
        assert_eq!(round.state(), RoundState::Guessing);
        round.guess(c);
    }
    assert_eq!(round.state(), RoundState::Won);
    assert_eq!(round.guesses().wrong_count(), 1);
    assert_eq!(round.masked(), "c a t");
    assert!(check_victory(&round.masked()));
}

#[test]
fn test_end_to_end_cli_session() {
    let mut phrases = load_phrases_from_str("cat", MAX_PHRASES);
    sort_phrases(&mut phrases);
    let mut rng = StdRng::seed_from_u64(1);

    // Difficulty 3, then the four guesses, then decline to continue
    let input = "3\nc\nx\na\nt\nn\n";
    let mut interface = CliInterface::new(Cursor::new(input));
    let summary = game_loop(&mut phrases, None, &mut rng, &mut interface);

    assert_eq!(
        summary,
        SessionSummary {
            rounds_played: 1,
            wins: 1,
            losses: 0
        }
    );
    assert!(phrases[0].used);
}

#[test]
fn test_invalid_difficulty_reprompts() {
    let mut phrases = load_phrases_from_str("cat", MAX_PHRASES);
    let mut rng = StdRng::seed_from_u64(2);

    let input = "0\nseven\n4\n3\ncat\na\nt\nn\n";
    let mut interface = CliInterface::new(Cursor::new(input));
    let summary = game_loop(&mut phrases, None, &mut rng, &mut interface);

    // "cat" on the guess line only submits 'c'
    assert_eq!(summary.rounds_played, 1);
    assert_eq!(summary.wins, 1);
}

#[test]
fn test_rejected_guesses_do_not_cost_a_miss() {
    let mut phrases = load_phrases_from_str("Hi!", MAX_PHRASES);
    let mut rng = StdRng::seed_from_u64(3);

    // digits, punctuation, blank lines and repeats are all rejected
    let input = "1\n!\n\nh\nH\nh\nq\nQ\ni\nn\n";
    let mut interface = CliInterface::new(Cursor::new(input));
    let summary = game_loop(&mut phrases, Some(Difficulty::Hard), &mut rng, &mut interface);

    assert_eq!(summary.wins, 1);
    assert_eq!(summary.losses, 0);
}

#[test]
fn test_lost_round_then_stop() {
    let mut phrases = load_phrases_from_str("zebra", MAX_PHRASES);
    let mut rng = StdRng::seed_from_u64(4);

    let input = "c\nd\nf\ng\nh\ny\n";
    let mut interface = CliInterface::new(Cursor::new(input));
    let summary = game_loop(&mut phrases, Some(Difficulty::Hard), &mut rng, &mut interface);

    // play-again was answered with "y" but input then runs out at the next guess
    assert_eq!(summary.rounds_played, 1);
    assert_eq!(summary.losses, 1);
}

#[test]
fn test_multiple_rounds_use_distinct_phrases() {
    let mut phrases = load_phrases_from_str("ef\na\nb\nfe\nc\nd", MAX_PHRASES);
    sort_phrases(&mut phrases);
    let mut rng = StdRng::seed_from_u64(5);

    // Hard band holds "ef" and "fe"; each round is won with e then f
    let input = "e\nf\ny\ne\nf\nn\n";
    let mut interface = CliInterface::new(Cursor::new(input));
    let summary = game_loop(&mut phrases, Some(Difficulty::Hard), &mut rng, &mut interface);

    assert_eq!(summary.rounds_played, 2);
    let hard = band(Difficulty::Hard, phrases.len());
    assert!(phrases[hard].iter().all(|p| p.used));
    assert_eq!(phrases.iter().filter(|p| p.used).count(), 2);
}

#[test]
fn test_missing_phrase_file_is_empty_band() {
    let path = std::env::temp_dir().join("hangman_integration_missing.txt");
    let _ = std::fs::remove_file(&path);
    assert!(load_phrases_from_file(&path, MAX_PHRASES).is_err());

    // Zero phrases: every band is empty and the session ends without a round
    let mut phrases: Vec<Phrase> = Vec::new();
    let mut rng = StdRng::seed_from_u64(6);
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        assert_eq!(
            select_phrase(&phrases, difficulty, &mut rng),
            Err(SelectionError::EmptyBand {
                difficulty,
                total: 0
            })
        );
    }
    let mut interface = CliInterface::new(Cursor::new("1\n"));
    let summary = game_loop(&mut phrases, None, &mut rng, &mut interface);
    assert_eq!(summary.rounds_played, 0);
}

#[test]
fn test_phrase_file_to_sorted_bands() {
    use std::fs::File;
    use std::io::Write;

    let path = std::env::temp_dir().join("hangman_integration_phrases.txt");
    {
        let mut file = File::create(&path).unwrap();
        writeln!(file, "The quick brown fox jumps over the lazy dog").unwrap();
        writeln!(file, "Hello, World!").unwrap();
        writeln!(file, "aaa").unwrap();
        writeln!(file, "Bob").unwrap();
        writeln!(file, "Time flies like an arrow").unwrap();
        writeln!(file, "I am").unwrap();
    }

    let mut phrases = load_phrases_from_file(&path, MAX_PHRASES).unwrap();
    assert_eq!(phrases.len(), 6);
    sort_phrases(&mut phrases);
    assert!(
        phrases
            .windows(2)
            .all(|w| w[0].required_guesses <= w[1].required_guesses)
    );
    assert_eq!(phrases[0].text, "aaa");
    assert_eq!(phrases[5].required_guesses, 26);

    let mut rng = StdRng::seed_from_u64(7);
    let selection = select_phrase(&phrases, Difficulty::Easy, &mut rng).unwrap();
    assert!(selection.index < 2);
    assert!(phrases[selection.index].required_guesses <= 2);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_phrase_file_capacity() {
    let data: String = (0..150).map(|i| format!("phrase number {i}\n")).collect();
    let phrases = load_phrases_from_str(&data, MAX_PHRASES);
    assert_eq!(phrases.len(), MAX_PHRASES);
    assert_eq!(phrases.last().unwrap().text, "phrase number 99");
}

#[test]
fn test_scores_match_distinct_letters() {
    for (text, expected) in [
        ("Hello, World!", 7),
        ("", 0),
        ("12 34", 0),
        ("AbC abc", 3),
        ("The quick brown fox jumps over the lazy dog", 26),
    ] {
        assert_eq!(required_guesses(text), expected, "{text:?}");
        assert_eq!(Phrase::new(text).required_guesses, expected);
    }
}

#[test]
fn test_masking_examples() {
    assert_eq!(phrase_with_blanks("ab-c", ""), "_ _ - _");
    assert_eq!(phrase_with_blanks("cat", "c"), "c _ _");
    assert_eq!(phrase_with_blanks("cat", "cat"), "c a t");
    assert!(check_victory("c a t"));
    assert!(!check_victory("c _ t"));
}
