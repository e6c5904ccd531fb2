//! TUI rendering and terminal management (impure shell)

pub mod constants;
pub mod layout;
mod message;
pub mod report;
mod styles;

pub use layout::{CellLayout, ConversationLayout, LayoutSettings};
pub use message::{
    render_cell, row_spans, total_rows, CellFrame, ConversationView, PointRect,
    FAILED_STRIP_TEXT,
};
pub use report::{format_cell, format_report};
pub use styles::{border_type, CellStyles, ColorConfig};

use constants::{PAGE_SCROLL_ROWS, STATUS_BAR_HEIGHT};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout},
    text::Line,
    widgets::Paragraph,
    Terminal,
};
use std::io::{self, Stdout};
use tracing::debug;

/// Scrollable conversation screen.
///
/// Generic over backend to support testing with TestBackend
pub struct ConversationScreen<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    layout: ConversationLayout,
    styles: CellStyles,
    total_rows: usize,
    scroll: usize,
}

impl ConversationScreen<CrosstermBackend<Stdout>> {
    /// Create the screen on the real terminal.
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn open(layout: ConversationLayout, styles: CellStyles) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self::with_terminal(terminal, layout, styles))
    }
}

impl<B> ConversationScreen<B>
where
    B: Backend,
{
    /// Screen drawing into an existing terminal.
    pub fn with_terminal(
        terminal: Terminal<B>,
        layout: ConversationLayout,
        styles: CellStyles,
    ) -> Self {
        let total_rows = total_rows(&layout);
        Self {
            terminal,
            layout,
            styles,
            total_rows,
            scroll: 0,
        }
    }

    /// First visible row.
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// The terminal being drawn to.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    fn viewport_rows(&self) -> usize {
        let height = self.terminal.size().map(|size| size.height).unwrap_or(0);
        usize::from(height.saturating_sub(STATUS_BAR_HEIGHT))
    }

    fn max_scroll(&self) -> usize {
        self.total_rows.saturating_sub(self.viewport_rows())
    }

    fn scroll_by(&mut self, delta: isize) {
        let target = self.scroll.saturating_add_signed(delta);
        self.scroll = target.min(self.max_scroll());
    }

    /// Apply a key press. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let page = PAGE_SCROLL_ROWS as isize;
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Char('j') | KeyCode::Down => self.scroll_by(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_by(-1),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_by(page),
            KeyCode::PageUp => self.scroll_by(-page),
            KeyCode::Char('g') | KeyCode::Home => self.scroll = 0,
            KeyCode::Char('G') | KeyCode::End => self.scroll = self.max_scroll(),
            _ => {}
        }
        false
    }

    fn status_line(&self) -> String {
        let viewport = self.viewport_rows();
        let last = (self.scroll + viewport).min(self.total_rows);
        format!(
            " {} cells  rows {}-{}/{}  {}pt  j/k scroll  q quit",
            self.layout.len(),
            if self.total_rows == 0 { 0 } else { self.scroll + 1 },
            last,
            self.total_rows,
            self.layout.total_height(),
        )
    }

    /// Render the current frame
    pub fn draw(&mut self) -> io::Result<()> {
        // Clamp after resizes shrink the content below the scroll position.
        self.scroll = self.scroll.min(self.max_scroll());
        let status = self.status_line();
        let layout = &self.layout;
        let styles = &self.styles;
        let scroll = self.scroll;

        self.terminal.draw(|frame| {
            let [content, status_area] = Layout::vertical([
                Constraint::Min(0),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .areas(frame.area());
            frame.render_widget(ConversationView::new(layout, styles, scroll), content);
            frame.render_widget(
                Paragraph::new(Line::styled(status, styles.status_bar)).style(styles.status_bar),
                status_area,
            );
        })?;
        Ok(())
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q, Esc or Ctrl+C)
    pub fn run(&mut self) -> io::Result<()> {
        self.draw()?;
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        debug!("Quit requested");
                        return Ok(());
                    }
                }
                Event::Resize(width, height) => {
                    debug!("Handling resize to {}x{}", width, height);
                }
                _ => continue,
            }
            self.draw()?;
        }
    }
}

/// Initialize and run the screen for `layout`.
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// even when the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(layout: ConversationLayout, styles: CellStyles) -> io::Result<()> {
    let mut screen = ConversationScreen::open(layout, styles)?;
    let result = screen.run();
    restore_terminal()?;
    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample::announcement_conversation;
    use chrono::{DateTime, Utc};
    use ratatui::backend::TestBackend;

    fn create_test_screen(height: u16) -> ConversationScreen<TestBackend> {
        let now: DateTime<Utc> = "2019-08-27T10:00:00Z".parse().unwrap();
        let layout =
            ConversationLayout::build(&announcement_conversation(now), &LayoutSettings::default());
        let terminal = Terminal::new(TestBackend::new(60, height)).unwrap();
        let styles = CellStyles::new(ColorConfig::fixed(false));
        ConversationScreen::with_terminal(terminal, layout, styles)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen_text(screen: &ConversationScreen<TestBackend>) -> String {
        let buffer = screen.terminal().backend().buffer();
        buffer
            .content()
            .chunks(usize::from(buffer.area.width))
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn handle_key_q_returns_true() {
        let mut screen = create_test_screen(12);
        assert!(screen.handle_key(press(KeyCode::Char('q'))));
    }

    #[test]
    fn handle_key_ctrl_c_returns_true() {
        let mut screen = create_test_screen(12);
        assert!(screen.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn handle_key_other_returns_false() {
        let mut screen = create_test_screen(12);
        assert!(!screen.handle_key(press(KeyCode::Char('x'))));
    }

    #[test]
    fn scrolling_stays_within_content() {
        let mut screen = create_test_screen(12);
        screen.handle_key(press(KeyCode::Char('k')));
        assert_eq!(screen.scroll(), 0);

        screen.handle_key(press(KeyCode::Char('j')));
        assert_eq!(screen.scroll(), 1);

        screen.handle_key(press(KeyCode::Char('G')));
        let bottom = screen.scroll();
        assert_eq!(bottom, screen.total_rows - 11);
        screen.handle_key(press(KeyCode::Down));
        assert_eq!(screen.scroll(), bottom);

        screen.handle_key(press(KeyCode::Home));
        assert_eq!(screen.scroll(), 0);
    }

    #[test]
    fn tall_terminal_cannot_scroll() {
        let mut screen = create_test_screen(200);
        screen.handle_key(press(KeyCode::PageDown));
        assert_eq!(screen.scroll(), 0);
    }

    #[test]
    fn draw_renders_first_cell_and_status_bar() {
        let mut screen = create_test_screen(12);
        screen.draw().unwrap();
        let text = screen_text(&screen);
        assert!(text.contains("2019/08/27"), "date separator missing:\n{text}");
        assert!(text.contains("First announcement"), "banner missing:\n{text}");
        assert!(text.contains("6 cells"), "status bar missing:\n{text}");
    }
}
