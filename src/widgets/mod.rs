//! Rendering-agnostic widget state.

pub mod text_window;

pub use text_window::TextWindowState;
