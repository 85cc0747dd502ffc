use crate::core::AppCore;
use crate::frontend::{Frontend, FrontendEvent};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    text::Line,
    widgets::{Block, Padding, Paragraph, Wrap},
    Terminal,
};
use std::io;
use std::time::Duration;

/// Title applied to the hosting terminal window.
const WINDOW_TITLE: &str = "Matrix Screen";

/// Terminal frontend
///
/// Owns the alternate-screen session for the process lifetime: acquired in
/// `new`, released in `cleanup` (and on drop as a backstop).
pub struct TuiFrontend {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    /// Input is drained without blocking; pacing comes from the runtime
    poll_timeout: Duration,
}

impl TuiFrontend {
    /// Create a new TUI frontend
    ///
    /// Enters raw mode and the alternate screen, titles the window, and
    /// hides the cursor.
    pub fn new() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, SetTitle(WINDOW_TITLE))
            .context("Failed to setup terminal")?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor()?;

        Ok(Self {
            terminal,
            poll_timeout: Duration::ZERO,
        })
    }

    /// Convert a crossterm event to a FrontendEvent
    fn convert_event(event: Event) -> Option<FrontendEvent> {
        match event {
            Event::Key(key_event) => {
                // Only key presses; ignore repeats and releases
                if key_event.kind != KeyEventKind::Press {
                    return None;
                }
                Some(FrontendEvent::key(key_event.code, key_event.modifiers))
            }
            Event::Resize(w, h) => Some(FrontendEvent::resize(w, h)),
            _ => None,
        }
    }
}

impl Frontend for TuiFrontend {
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>> {
        let mut events = Vec::new();

        while event::poll(self.poll_timeout)? {
            if let Ok(ev) = event::read() {
                if let Some(frontend_event) = Self::convert_event(ev) {
                    events.push(frontend_event);
                }
            }
        }

        Ok(events)
    }

    fn render(&mut self, core: &mut AppCore) -> Result<()> {
        let style = core.theme.text_style();
        let padding = Padding::new(
            core.config.ui.padding_x,
            core.config.ui.padding_x,
            core.config.ui.padding_y,
            core.config.ui.padding_y,
        );

        self.terminal.draw(|f| {
            let area = f.area();
            let block = Block::default().style(style).padding(padding);
            let inner = block.inner(area);

            let lines: Vec<Line> = core
                .display
                .visible_lines(inner.height as usize)
                .map(Line::from)
                .collect();
            let paragraph = Paragraph::new(lines)
                .style(style)
                .wrap(Wrap { trim: false });

            f.render_widget(block, area);
            f.render_widget(paragraph, inner);
        })?;

        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    fn size(&self) -> (u16, u16) {
        let size = self.terminal.size().unwrap_or_default();
        (size.width, size.height)
    }
}

impl Drop for TuiFrontend {
    fn drop(&mut self) {
        // Restore the terminal even if cleanup() was never called
        let _ = self.cleanup();
    }
}
