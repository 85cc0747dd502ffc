use crate::config::Config;
use crate::frontend::FrontendEvent;
use crate::rain::{fit_line_length, glyph_width, RainGenerator};
use crate::stats::TickStats;
use crate::theme::Theme;
use crate::widgets::TextWindowState;
use crossterm::event::{KeyCode, KeyModifiers};
use std::time::Duration;

/// Lines moved per page-scroll key while paused.
const SCROLL_STEP: usize = 10;

/// Core application state (frontend-agnostic)
///
/// Owns the rain generator, the display buffer, and the animation flags.
/// The frontend reads from it to paint and feeds events back into it.
pub struct AppCore {
    /// Application configuration
    pub config: Config,

    /// Resolved display colors
    pub theme: Theme,

    /// Line generator
    pub rain: RainGenerator,

    /// Display buffer the frontend paints from
    pub display: TextWindowState,

    /// Application running flag
    pub running: bool,

    /// While paused no lines are appended and scrollback keys are live
    pub paused: bool,

    /// Set when the visible state changed since the last paint
    pub needs_render: bool,

    /// Tick and render timing
    pub stats: TickStats,

    /// Total update cycles run this session
    pub tick_count: u64,
}

impl AppCore {
    /// Build the core against a measured surface size.
    ///
    /// The configured line length, width, and height are replaced here by
    /// the measured values before first use.
    pub fn new(mut config: Config, screen_width: u16, screen_height: u16) -> Self {
        config.animation.width = screen_width;
        config.animation.height = screen_height;

        let glyph = glyph_width();
        let line_length = fit_line_length(screen_width, config.ui.padding_x, glyph);
        config.animation.line_length = line_length;

        tracing::info!(
            screen_width,
            screen_height,
            glyph,
            line_length,
            "Sized rain surface"
        );

        let theme = Theme::from_config(&config.theme);
        let rain = RainGenerator::new(line_length);
        let display = TextWindowState::new(config.ui.scrollback_lines);

        Self {
            config,
            theme,
            rain,
            display,
            running: true,
            paused: false,
            needs_render: true,
            stats: TickStats::new(),
            tick_count: 0,
        }
    }

    /// Time between appended lines.
    pub fn update_interval(&self) -> Duration {
        Duration::from_millis(self.config.animation.update_interval_ms)
    }

    /// One update cycle: build a line, append it, snap the view to the end.
    pub fn tick(&mut self) {
        let line = self.rain.next_line();
        self.display.push_line(line);
        self.display.scroll_to_bottom();
        self.tick_count += 1;
        self.needs_render = true;
    }

    /// Route a frontend event into state changes.
    pub fn handle_event(&mut self, event: &FrontendEvent) {
        match event {
            FrontendEvent::Key { code, modifiers } => self.handle_key(*code, *modifiers),
            FrontendEvent::Resize { width, height } => {
                // Line length stays fixed for the life of the program; a
                // resize only repaints at the new size.
                tracing::debug!(width, height, "Terminal resized");
                self.needs_render = true;
            }
        }
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Char(' ') => {
                self.paused = !self.paused;
                if !self.paused {
                    self.display.scroll_to_bottom();
                }
                self.needs_render = true;
            }
            KeyCode::Up | KeyCode::PageUp if self.paused => {
                let step = if code == KeyCode::PageUp { SCROLL_STEP } else { 1 };
                self.display.scroll_up(step);
                self.needs_render = true;
            }
            KeyCode::Down | KeyCode::PageDown if self.paused => {
                let step = if code == KeyCode::PageDown { SCROLL_STEP } else { 1 };
                self.display.scroll_down(step);
                self.needs_render = true;
            }
            _ => {}
        }
    }

    fn quit(&mut self) {
        tracing::info!(lines = self.tick_count, "Shutting down");
        self.running = false;
    }
}
