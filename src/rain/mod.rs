//! Rain generation: character classes, the special-character pool, and
//! per-tick line synthesis.

pub mod charset;
pub mod generator;

pub use charset::{special_pool, CharClass};
pub use generator::{fit_line_length, glyph_width, RainGenerator};
