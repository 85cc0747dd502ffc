//! Per-tick line synthesis.

use unicode_width::UnicodeWidthChar;

use super::charset::{special_pool, CharClass};

/// Glyph used to measure the column width of the display font.
const MEASURE_GLYPH: char = '0';

/// Columns one glyph of the fixed-width display font occupies.
pub fn glyph_width() -> u16 {
    MEASURE_GLYPH.width().unwrap_or(1).max(1) as u16
}

/// Characters that fit between the horizontal padding at the given
/// surface width: `floor((width - 2 * padding_x) / glyph_width)`.
pub fn fit_line_length(width: u16, padding_x: u16, glyph_width: u16) -> usize {
    let usable = width.saturating_sub(padding_x.saturating_mul(2));
    (usable / glyph_width.max(1)) as usize
}

/// Generates one line of rain per tick.
///
/// Owns the special-character pool and the RNG; the fitted line length is
/// fixed at construction and constant for the program's lifetime.
pub struct RainGenerator {
    pool: Vec<char>,
    rng: fastrand::Rng,
    line_length: usize,
}

impl RainGenerator {
    pub fn new(line_length: usize) -> Self {
        Self {
            pool: special_pool(),
            rng: fastrand::Rng::new(),
            line_length,
        }
    }

    /// Deterministic generator for repeatable output.
    pub fn with_seed(line_length: usize, seed: u64) -> Self {
        Self {
            pool: special_pool(),
            rng: fastrand::Rng::with_seed(seed),
            line_length,
        }
    }

    pub fn line_length(&self) -> usize {
        self.line_length
    }

    /// Pick one of the four classes with equal probability and resolve it
    /// to a character.
    pub fn random_char(&mut self) -> char {
        let class = CharClass::ALL[self.rng.usize(..CharClass::ALL.len())];
        match class {
            CharClass::Zero => '0',
            CharClass::One => '1',
            CharClass::Space => ' ',
            CharClass::Special => self.pool[self.rng.usize(..self.pool.len())],
        }
    }

    /// Build one full line, sampling `line_length` characters in order.
    pub fn next_line(&mut self) -> String {
        (0..self.line_length).map(|_| self.random_char()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(pool: &[char], c: char) -> CharClass {
        match c {
            '0' => CharClass::Zero,
            '1' => CharClass::One,
            ' ' => CharClass::Space,
            other => {
                assert!(pool.contains(&other), "unexpected character {other:?}");
                CharClass::Special
            }
        }
    }

    #[test]
    fn test_fit_line_length_matches_measured_screen() {
        // 1920px-wide screen, 10 units of padding per side, 10px glyphs
        assert_eq!(fit_line_length(1920, 10, 10), 190);
    }

    #[test]
    fn test_fit_line_length_floors() {
        assert_eq!(fit_line_length(1919, 10, 10), 189);
        assert_eq!(fit_line_length(109, 10, 10), 8);
    }

    #[test]
    fn test_fit_line_length_degenerate_inputs() {
        // Padding wider than the surface leaves no room
        assert_eq!(fit_line_length(15, 10, 1), 0);
        // A zero glyph width cannot divide; treat it as one column
        assert_eq!(fit_line_length(100, 0, 0), 100);
    }

    #[test]
    fn test_glyph_width_is_single_column() {
        assert_eq!(glyph_width(), 1);
    }

    #[test]
    fn test_next_line_has_exact_length() {
        let mut rain = RainGenerator::with_seed(189, 7);
        for _ in 0..50 {
            assert_eq!(rain.next_line().chars().count(), 189);
        }
    }

    #[test]
    fn test_characters_come_from_the_four_classes() {
        let pool = special_pool();
        let mut rain = RainGenerator::with_seed(80, 42);
        for _ in 0..2000 {
            classify(&pool, rain.random_char());
        }
    }

    #[test]
    fn test_class_distribution_is_uniform() {
        let pool = special_pool();
        let mut rain = RainGenerator::with_seed(1, 0xdead_beef);

        let samples = 100_000usize;
        let mut counts = [0usize; 4];
        for _ in 0..samples {
            counts[classify(&pool, rain.random_char()) as usize] += 1;
        }

        // Expected 25% each; 2% absolute tolerance is dozens of standard
        // deviations at this sample size.
        let expected = samples / 4;
        let tolerance = samples / 50;
        for (class, &count) in CharClass::ALL.iter().zip(counts.iter()) {
            assert!(
                count.abs_diff(expected) < tolerance,
                "{class:?} drawn {count} times out of {samples}"
            );
        }
    }

    #[test]
    fn test_zero_length_line_is_empty() {
        let mut rain = RainGenerator::with_seed(0, 1);
        assert_eq!(rain.next_line(), "");
    }
}
