//! Character classes and the special-character pool.

use std::ops::RangeInclusive;

/// Printable ASCII codes considered for the special pool.
const PRINTABLE: RangeInclusive<u8> = 33..=126;

/// The four shapes a rain cell can take.
///
/// The mapping from variant to selection rule lives in
/// `RainGenerator::random_char` and is an exhaustive match, so adding a
/// class is a compile-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Zero,
    One,
    Space,
    Special,
}

impl CharClass {
    /// All variants, in sampling order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Zero,
        CharClass::One,
        CharClass::Space,
        CharClass::Special,
    ];
}

/// Build the special-character pool: every printable ASCII character that
/// is not a letter or digit, in code-point order.
///
/// Built once at startup and never mutated afterwards.
pub fn special_pool() -> Vec<char> {
    PRINTABLE
        .map(char::from)
        .filter(|c| !c.is_ascii_alphanumeric())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_covers_non_alphanumeric_printables() {
        let pool = special_pool();

        for code in 33u8..=126 {
            let c = char::from(code);
            if c.is_ascii_alphanumeric() {
                assert!(!pool.contains(&c), "{c:?} should not be in the pool");
            } else {
                assert_eq!(
                    pool.iter().filter(|&&p| p == c).count(),
                    1,
                    "{c:?} should appear exactly once"
                );
            }
        }
    }

    #[test]
    fn test_pool_has_no_duplicates_and_expected_size() {
        let pool = special_pool();

        // 94 printable codes minus 62 alphanumerics
        assert_eq!(pool.len(), 32);

        let mut sorted = pool.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), pool.len());
    }

    #[test]
    fn test_pool_excludes_space_and_controls() {
        let pool = special_pool();
        assert!(!pool.contains(&' '));
        assert!(pool.iter().all(|c| (33..=126).contains(&(*c as u32))));
    }

    #[test]
    fn test_pool_is_ordered_by_code_point() {
        let pool = special_pool();
        assert!(pool.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(pool.first(), Some(&'!'));
        assert_eq!(pool.last(), Some(&'~'));
    }
}
