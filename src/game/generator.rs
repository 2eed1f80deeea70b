//! Hidden code generation

use crate::core::{Palette, Sequence};
use crate::error::ConfigError;
use rand::Rng;

/// Source of uniform index draws
///
/// Every `rand::Rng` is a source. Tests can supply scripted draws instead.
pub trait RandomSource {
    /// A uniformly random index in `0..bound`; `bound` is never zero
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn next_index(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}

/// Draw a random code of `length` colors from `palette`
///
/// Each draw picks a uniform index into the remaining colors. Without
/// duplicates, a drawn color leaves the pool for the rest of the code.
/// The same sequence of draws always yields the same code.
///
/// # Errors
/// Returns `InsufficientColors` if duplicates are disallowed and the palette
/// has fewer colors than `length`.
pub fn generate<R: RandomSource + ?Sized>(
    length: usize,
    palette: &Palette,
    duplicates_allowed: bool,
    rng: &mut R,
) -> Result<Sequence, ConfigError> {
    if length > 0 && palette.is_empty() {
        return Err(ConfigError::PaletteTooSmall(0));
    }
    if !duplicates_allowed && palette.len() < length {
        return Err(ConfigError::InsufficientColors {
            palette_len: palette.len(),
            sequence_len: length,
        });
    }

    let mut pool = palette.clone();
    let mut code = Sequence::empty();

    for _ in 0..length {
        // Out-of-range draws wrap into the pool
        let index = rng.next_index(pool.len()) % pool.len();
        let color = pool.colors()[index];
        code = code.append(color);

        if !duplicates_allowed {
            pool = pool.remove(color);
        }
    }

    Ok(code)
}
