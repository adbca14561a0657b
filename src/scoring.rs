//! Session measurement: words per minute, character accuracy and error count.
//!
//! Characters are compared index by index with no alignment, so a single
//! insertion or deletion shifts every later comparison. This is a known
//! approximation of "real" accuracy and is kept deliberately simple.

/// Lower bound on elapsed time, avoids dividing by zero.
pub const MIN_ELAPSED_SECS: f64 = 0.001;

/// Result of scoring a finished session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub words: usize,
    /// rounded to two decimal places
    pub wpm: f64,
    pub correct_chars: usize,
    pub accuracy: u8,
    pub errors: usize,
}

/// In-progress feedback shown while the user is still typing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiveScore {
    /// truncated, never rounded
    pub wpm: u32,
    pub accuracy: u8,
    pub errors: usize,
}

#[derive(Debug, Clone, Copy)]
struct Tally {
    words: usize,
    raw_wpm: f64,
    correct_chars: usize,
    accuracy: u8,
    errors: usize,
}

fn tally(reference: &str, typed: &str, elapsed_secs: f64) -> Tally {
    let words = word_count(typed);
    let elapsed = elapsed_secs.max(MIN_ELAPSED_SECS);
    let raw_wpm = words as f64 / (elapsed / 60.0);

    let correct_chars = correct_chars(reference, typed);
    let reference_len = reference.chars().count();
    let typed_len = typed.chars().count();

    Tally {
        words,
        raw_wpm,
        correct_chars,
        accuracy: accuracy(correct_chars, reference_len),
        errors: reference_len.saturating_sub(correct_chars)
            + typed_len.saturating_sub(correct_chars),
    }
}

/// Positions where `typed` matches `reference` exactly, within both bounds.
pub fn correct_chars(reference: &str, typed: &str) -> usize {
    reference
        .chars()
        .zip(typed.chars())
        .filter(|(expected, actual)| expected == actual)
        .count()
}

/// Integer percent of reference characters matched, floored.
pub fn accuracy(correct_chars: usize, reference_len: usize) -> u8 {
    let ratio = correct_chars as f64 / reference_len.max(1) as f64;
    (ratio * 100.0).floor().clamp(0.0, 100.0) as u8
}

/// Whitespace-separated tokens. The ASCII separators 0x1C-0x1F also split
/// words, alongside Unicode whitespace.
pub fn word_count(typed: &str) -> usize {
    typed
        .split(|c: char| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
        .filter(|word| !word.is_empty())
        .count()
}

/// Two decimal places, exact halves go to the even neighbour.
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Score a finished session.
pub fn score(reference: &str, typed: &str, elapsed_secs: f64) -> Score {
    let t = tally(reference, typed, elapsed_secs);
    Score {
        words: t.words,
        wpm: round2(t.raw_wpm),
        correct_chars: t.correct_chars,
        accuracy: t.accuracy,
        errors: t.errors,
    }
}

/// Score an in-progress session. WPM is truncated to a whole number.
pub fn score_live(reference: &str, typed: &str, elapsed_secs: f64) -> LiveScore {
    let t = tally(reference, typed, elapsed_secs);
    let wpm = if t.words > 0 { t.raw_wpm as u32 } else { 0 };
    LiveScore {
        wpm,
        accuracy: t.accuracy,
        errors: t.errors,
    }
}
