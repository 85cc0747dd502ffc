//! Frontend abstraction layer
//!
//! Defines the `Frontend` trait the terminal implementation fulfils. The
//! seam keeps the core free of rendering concerns and lets tests drive the
//! core without a live terminal.

pub mod events;
pub mod tui;

use anyhow::Result;

use crate::core::AppCore;
pub use events::FrontendEvent;
pub use tui::TuiFrontend;

/// Rendering seam between the app core and the display surface.
pub trait Frontend {
    /// Drain pending input, converted to frontend-agnostic events.
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>>;

    /// Paint the current core state.
    fn render(&mut self, core: &mut AppCore) -> Result<()>;

    /// Restore the host terminal.
    fn cleanup(&mut self) -> Result<()>;

    /// Current surface size in cells.
    fn size(&self) -> (u16, u16);
}
