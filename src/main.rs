use chrono::Utc;
use hangman::cli::{CliInterface, parse_cli};
use hangman::logging::init_logging;
use hangman::phrases::{
    MAX_PHRASES, format_phrase_table, load_failure_message, load_phrases_from_file, sort_phrases,
};
use hangman::tui::TuiInterface;
use hangman::{GameInterface, debug_log, game_loop, info_log};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;

fn main() {
    let cli = parse_cli();
    init_logging(cli.tui);

    let mut phrases = match load_phrases_from_file(&cli.phrase_path, MAX_PHRASES) {
        Ok(phrases) => phrases,
        Err(e) => {
            log::warn!("failed to load phrases from '{}': {e}", cli.phrase_path);
            println!("{}", load_failure_message(&cli.phrase_path, &e));
            Vec::new()
        }
    };
    sort_phrases(&mut phrases);
    info_log!("loaded {} phrases from '{}'", phrases.len(), cli.phrase_path);

    if cli.list {
        print!("{}", format_phrase_table(&phrases));
        return;
    }

    let seed = cli
        .seed
        .unwrap_or_else(|| Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64);
    debug_log!("phrase selection seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);

    let mut interface: Box<dyn GameInterface> = if cli.tui {
        match TuiInterface::new() {
            Ok(tui) => Box::new(tui),
            Err(e) => {
                eprintln!("Failed to start the terminal interface: {e}");
                return;
            }
        }
    } else {
        Box::new(CliInterface::new(io::stdin().lock()))
    };

    let summary = game_loop(
        &mut phrases,
        cli.preset_difficulty(),
        &mut rng,
        interface.as_mut(),
    );
    info_log!(
        "session over: {} rounds, {} won, {} lost",
        summary.rounds_played,
        summary.wins,
        summary.losses
    );
}
