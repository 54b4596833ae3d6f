use crate::core::state::AppState;
use crate::terminal::Terminal;
use crate::ui::steps::{self, StepFrame};
use crate::ui::theme::Theme;
use std::io;

/// Repaints the active step in place, anchored at the row where the wizard
/// started drawing.
pub struct Renderer {
    origin_row: Option<u16>,
}

impl Renderer {
    pub fn new() -> Self {
        Self { origin_row: None }
    }

    pub fn render(
        &mut self,
        state: &AppState,
        theme: &Theme,
        terminal: &mut Terminal,
    ) -> io::Result<()> {
        let frame = steps::step_view(
            state.wizard.current(),
            &state.form,
            state.editor.cursor_offset(),
            theme,
        );
        self.draw(&frame, terminal)
    }

    /// Erase the frame and leave the cursor at its top, ready for normal
    /// output once the wizard is done.
    pub fn finish(&mut self, terminal: &mut Terminal) -> io::Result<()> {
        if let Some(origin) = self.origin_row.take() {
            terminal.queue_move_cursor(0, origin)?;
            terminal.queue_clear_from_cursor_down()?;
            terminal.queue_show_cursor()?;
            terminal.flush()?;
        }
        Ok(())
    }

    fn draw(&mut self, frame: &StepFrame, terminal: &mut Terminal) -> io::Result<()> {
        let origin = match self.origin_row {
            Some(row) => row,
            None => terminal.cursor_position().y,
        };

        terminal.queue_hide_cursor()?;
        terminal.queue_move_cursor(0, origin)?;
        terminal.queue_clear_from_cursor_down()?;

        for (i, line) in frame.lines.iter().enumerate() {
            if i > 0 {
                terminal.queue_newline()?;
            }
            terminal.queue_line(line)?;
        }
        terminal.flush()?;

        // Drawing near the bottom of the screen scrolls, so re-anchor on the
        // row the last line actually landed on.
        terminal.refresh_cursor_position()?;
        let last_row = terminal.cursor_position().y;
        let height = frame.lines.len().saturating_sub(1) as u16;
        let origin = last_row.saturating_sub(height);
        self.origin_row = Some(origin);

        if let Some(cursor) = frame.cursor {
            terminal.queue_move_cursor(cursor.col, origin + cursor.row)?;
            terminal.queue_show_cursor()?;
            terminal.flush()?;
        }

        Ok(())
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
