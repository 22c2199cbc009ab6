/// Wrong guesses that complete the figure and end the round.
pub const MAX_WRONG_GUESSES: usize = 5;

const TOP: [&str; 2] = ["   +----+     ", "   |    |     "];
const BASE: &str = "  =============";

const STAGES: [[&str; 4]; MAX_WRONG_GUESSES + 1] = [
    ["   |       ", "   |       ", "   |       ", "   |       "],
    ["   |    O  ", "   |    |  ", "   |       ", "   |       "],
    ["   |    O  ", "   |   /|  ", "   |       ", "   |       "],
    ["   |    O   ", "   |   /|\\ ", "   |        ", "   |        "],
    ["   |    O   ", "   |   /|\\ ", "   |     \\ ", "   |        "],
    ["   |    O    ", "   |   /|\\  ", "   |   / \\  ", "   |You're Dead"],
];

/// Lines of the gallows drawing for `miss_count` wrong guesses.
/// Anything past [`MAX_WRONG_GUESSES`] draws the finished figure.
#[must_use]
pub fn gallows_lines(miss_count: usize) -> Vec<&'static str> {
    let stage = &STAGES[miss_count.min(MAX_WRONG_GUESSES)];
    TOP.iter()
        .chain(stage.iter())
        .copied()
        .chain(std::iter::once(BASE))
        .collect()
}

#[must_use]
pub fn draw_gallows(miss_count: usize) -> String {
    let mut art = gallows_lines(miss_count).join("\n");
    art.push('\n');
    art
}
