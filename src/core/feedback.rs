//! Guess scoring
//!
//! Feedback is the classic pair of key-peg counts:
//! - exact: right color in the right position
//! - misplaced: right color, wrong position
//!
//! Duplicate colors are handled as multisets, so a color is never credited
//! more times than it occurs in either sequence.

use super::Sequence;
use std::fmt;

/// Key-peg feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback {
    pub exact: usize,
    pub misplaced: usize,
}

impl Feedback {
    #[must_use]
    pub const fn new(exact: usize, misplaced: usize) -> Self {
        Self { exact, misplaced }
    }

    /// Score `guess` against the `hidden` code
    ///
    /// # Algorithm
    /// 1. Count positions where both sequences hold the same color (exact)
    /// 2. For every color, take the smaller of its two occurrence counts and sum
    /// 3. Misplaced is that sum minus the exact matches
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Color::*, Feedback, Sequence};
    ///
    /// let guess = Sequence::from(vec![Red, Green, Blue, Yellow]);
    /// let hidden = Sequence::from(vec![Blue, Green, Red, Yellow]);
    ///
    /// // G and Y in place, R and B swapped
    /// assert_eq!(Feedback::score(&guess, &hidden), Feedback::new(2, 2));
    /// ```
    #[must_use]
    pub fn score(guess: &Sequence, hidden: &Sequence) -> Self {
        debug_assert_eq!(guess.len(), hidden.len(), "scored sequences differ in length");

        let exact = guess
            .iter()
            .zip(hidden.iter())
            .filter(|(g, h)| g == h)
            .count();

        let hidden_counts = hidden.counts();
        let shared: usize = guess
            .counts()
            .into_iter()
            .map(|(color, count)| count.min(hidden_counts.get(&color).copied().unwrap_or(0)))
            .sum();

        Self {
            exact,
            misplaced: shared - exact,
        }
    }

    /// True when every one of `len` positions matched exactly
    #[inline]
    #[must_use]
    pub const fn is_perfect(self, len: usize) -> bool {
        self.exact == len
    }

    /// Total pegs shown: exact plus misplaced
    #[inline]
    #[must_use]
    pub const fn total(self) -> usize {
        self.exact + self.misplaced
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} exact, {} misplaced", self.exact, self.misplaced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color::{self, Black, Blue, Green, Pink, Red, Yellow};

    fn seq(colors: &[Color]) -> Sequence {
        Sequence::from(colors.to_vec())
    }

    #[test]
    fn feedback_identical_sequences() {
        let code = seq(&[Green, Black, Pink, Red]);
        assert_eq!(Feedback::score(&code, &code), Feedback::new(4, 0));
        assert!(Feedback::score(&code, &code).is_perfect(4));
    }

    #[test]
    fn feedback_no_shared_colors() {
        let guess = seq(&[Red, Red, Red, Red]);
        let hidden = seq(&[Blue, Green, Yellow, Pink]);
        assert_eq!(Feedback::score(&guess, &hidden), Feedback::default());
    }

    #[test]
    fn feedback_swapped_pairs() {
        let guess = seq(&[Red, Green, Blue, Yellow]);
        let hidden = seq(&[Blue, Green, Red, Yellow]);
        assert_eq!(Feedback::score(&guess, &hidden), Feedback::new(2, 2));
    }

    #[test]
    fn feedback_all_misplaced() {
        // GKPR against BGRY: green and red shared, neither in place
        let guess = seq(&[Green, Black, Pink, Red]);
        let hidden = seq(&[Blue, Green, Red, Yellow]);
        assert_eq!(Feedback::score(&guess, &hidden), Feedback::new(0, 2));
    }

    #[test]
    fn feedback_repeated_guess_color_credited_once() {
        let guess = seq(&[Red, Red]);
        let hidden = seq(&[Red, Green]);
        assert_eq!(Feedback::score(&guess, &hidden), Feedback::new(1, 0));
    }

    #[test]
    fn feedback_duplicates_on_both_sides() {
        let guess = seq(&[Red, Red, Green, Blue]);
        let hidden = seq(&[Red, Green, Green, Yellow]);
        assert_eq!(Feedback::score(&guess, &hidden), Feedback::new(2, 0));
    }

    #[test]
    fn feedback_repeated_hidden_color() {
        // Hidden has two yellows, guess one misplaced yellow
        let guess = seq(&[Yellow, Blue, Blue, Blue]);
        let hidden = seq(&[Green, Yellow, Pink, Yellow]);
        assert_eq!(Feedback::score(&guess, &hidden), Feedback::new(0, 1));
    }

    #[test]
    fn feedback_total_bounded_by_length() {
        let guess = seq(&[Red, Green, Red, Green]);
        let hidden = seq(&[Green, Red, Green, Red]);
        let feedback = Feedback::score(&guess, &hidden);
        assert_eq!(feedback, Feedback::new(0, 4));
        assert!(feedback.total() <= 4);
    }

    #[test]
    fn feedback_empty_sequences() {
        let empty = Sequence::empty();
        assert_eq!(Feedback::score(&empty, &empty), Feedback::new(0, 0));
    }

    #[test]
    fn feedback_display() {
        assert_eq!(Feedback::new(1, 2).to_string(), "1 exact, 2 misplaced");
    }
}
