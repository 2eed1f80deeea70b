//! Color sequences: the hidden code and the player's guesses

use super::Color;
use crate::error::IndexOutOfRange;
use rustc_hash::FxHashMap;
use std::fmt;

/// An ordered run of colors
///
/// Operations that change the contents return a new sequence and leave the
/// receiver untouched, so a game state can hand out references freely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Sequence {
    colors: Vec<Color>,
}

impl Sequence {
    #[must_use]
    pub const fn empty() -> Self {
        Self { colors: Vec::new() }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at a 0-based position
    ///
    /// # Errors
    /// Returns `IndexOutOfRange` if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<Color, IndexOutOfRange> {
        self.colors.get(index).copied().ok_or(IndexOutOfRange {
            index,
            len: self.colors.len(),
        })
    }

    #[must_use]
    pub fn append(&self, color: Color) -> Self {
        let mut colors = Vec::with_capacity(self.colors.len() + 1);
        colors.extend_from_slice(&self.colors);
        colors.push(color);
        Self { colors }
    }

    /// Drop the last color; an empty sequence stays empty
    #[must_use]
    pub fn remove_last(&self) -> Self {
        let end = self.colors.len().saturating_sub(1);
        Self {
            colors: self.colors[..end].to_vec(),
        }
    }

    /// Remove the first occurrence of `color`, if any
    #[must_use]
    pub fn remove(&self, color: Color) -> Self {
        let mut colors = self.colors.clone();
        if let Some(pos) = colors.iter().position(|&c| c == color) {
            colors.remove(pos);
        }
        Self { colors }
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }

    /// How many times each color occurs
    #[must_use]
    pub fn counts(&self) -> FxHashMap<Color, usize> {
        let mut counts = FxHashMap::default();
        for &color in &self.colors {
            *counts.entry(color).or_insert(0) += 1;
        }
        counts
    }

    /// True when no color occurs twice
    #[must_use]
    pub fn is_distinct(&self) -> bool {
        self.counts().values().all(|&count| count == 1)
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.colors.iter().copied()
    }
}

impl From<Vec<Color>> for Sequence {
    fn from(colors: Vec<Color>) -> Self {
        Self { colors }
    }
}

impl FromIterator<Color> for Sequence {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Self {
            colors: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in &self.colors {
            write!(f, "{}", color.code())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Color::{Black, Blue, Green, Pink, Red, Yellow};

    fn bgry() -> Sequence {
        Sequence::from(vec![Blue, Green, Red, Yellow])
    }

    #[test]
    fn sequence_len() {
        assert_eq!(bgry().len(), 4);
        assert_eq!(Sequence::empty().len(), 0);
        assert!(Sequence::empty().is_empty());
    }

    #[test]
    fn sequence_get() {
        let seq = Sequence::from(vec![Green, Black, Pink, Red]);
        assert_eq!(seq.get(0), Ok(Green));
        assert_eq!(seq.get(3), Ok(Red));
        assert_eq!(seq.get(10), Err(IndexOutOfRange { index: 10, len: 4 }));
    }

    #[test]
    fn sequence_append() {
        let seq = bgry().append(Pink);
        assert_eq!(seq.colors(), &[Blue, Green, Red, Yellow, Pink]);
        assert_eq!(Sequence::empty().append(Pink).colors(), &[Pink]);
    }

    #[test]
    fn sequence_append_leaves_receiver() {
        let seq = bgry();
        let _ = seq.append(Pink);
        assert_eq!(seq, bgry());
    }

    #[test]
    fn sequence_remove_last() {
        assert_eq!(bgry().remove_last().colors(), &[Blue, Green, Red]);
        assert_eq!(Sequence::empty().remove_last(), Sequence::empty());
    }

    #[test]
    fn sequence_remove_first_occurrence() {
        let seq = Sequence::from(vec![Red, Green, Red]);
        assert_eq!(seq.remove(Red).colors(), &[Green, Red]);
        assert_eq!(seq.remove(Yellow), seq);
    }

    #[test]
    fn sequence_contains() {
        assert!(bgry().contains(Red));
        assert!(!bgry().contains(Black));
    }

    #[test]
    fn sequence_counts_with_duplicates() {
        let seq = Sequence::from(vec![Red, Red, Green, Red]);
        let counts = seq.counts();
        assert_eq!(counts.get(&Red), Some(&3));
        assert_eq!(counts.get(&Green), Some(&1));
        assert_eq!(counts.get(&Blue), None);
        assert!(!seq.is_distinct());
        assert!(bgry().is_distinct());
    }

    #[test]
    fn sequence_display_codes() {
        let seq = Sequence::from(vec![Blue, Black, Red]);
        assert_eq!(seq.to_string(), "BKR");
    }
}
