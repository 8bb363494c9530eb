//! Viewer state management.
//!
//! Contains the central `ViewerState` struct that holds scroll and
//! viewport state, as well as shared types used across viewer modules.

/// Result of processing an input event.
///
/// Returned by input handlers to signal control flow decisions to the
/// main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue normal operation
    Continue,
    /// Exit the viewer
    Quit,
    /// Switch to the next theme in the cycle
    CycleTheme,
}

/// Central scroll/viewport state for the viewer.
///
/// The portfolio document is a virtual column of rows; the viewer shows
/// `view_rows` of it starting at `scroll`.
#[derive(Debug)]
pub struct ViewerState {
    /// Current terminal width
    pub term_cols: u16,
    /// Current terminal height
    pub term_rows: u16,
    /// Number of visible document rows (term_rows - chrome)
    pub view_rows: usize,
    /// Number of visible document columns
    pub view_cols: usize,
    /// Vertical scroll offset into the document
    pub scroll: usize,
    /// Whether the help overlay is visible
    pub show_help: bool,
    /// True when the screen needs to be redrawn
    pub needs_render: bool,
}

impl ViewerState {
    /// Number of chrome lines (nav bar + progress bar + footer)
    pub const CHROME_LINES: u16 = 3;

    /// Rows scrolled per mouse wheel notch
    pub const WHEEL_ROWS: usize = 3;

    /// Create a new ViewerState for the given terminal size.
    pub fn new(term_cols: u16, term_rows: u16) -> Self {
        Self {
            term_cols,
            term_rows,
            view_rows: (term_rows.saturating_sub(Self::CHROME_LINES)) as usize,
            view_cols: term_cols as usize,
            scroll: 0,
            show_help: false,
            needs_render: true,
        }
    }

    /// Maximum scroll offset for a document of `doc_height` rows.
    pub fn max_scroll(&self, doc_height: usize) -> usize {
        doc_height.saturating_sub(self.view_rows)
    }

    /// Handle terminal resize: update viewport dimensions and clamp the
    /// scroll offset back into range.
    pub fn handle_resize(&mut self, new_cols: u16, new_rows: u16, doc_height: usize) {
        self.term_cols = new_cols;
        self.term_rows = new_rows;
        self.view_rows = (new_rows.saturating_sub(Self::CHROME_LINES)) as usize;
        self.view_cols = new_cols as usize;
        self.scroll = self.scroll.min(self.max_scroll(doc_height));
        self.needs_render = true;
    }

    /// Scroll up by `rows`.
    pub fn scroll_up(&mut self, rows: usize) {
        let new = self.scroll.saturating_sub(rows);
        if new != self.scroll {
            self.scroll = new;
            self.needs_render = true;
        }
    }

    /// Scroll down by `rows`, clamped to the document end.
    pub fn scroll_down(&mut self, rows: usize, doc_height: usize) {
        let new = (self.scroll + rows).min(self.max_scroll(doc_height));
        if new != self.scroll {
            self.scroll = new;
            self.needs_render = true;
        }
    }

    /// Scroll up one viewport page.
    pub fn page_up(&mut self) {
        self.scroll_up(self.view_rows.max(1));
    }

    /// Scroll down one viewport page.
    pub fn page_down(&mut self, doc_height: usize) {
        self.scroll_down(self.view_rows.max(1), doc_height);
    }

    /// Jump to the top of the document.
    pub fn scroll_to_top(&mut self) {
        if self.scroll != 0 {
            self.scroll = 0;
            self.needs_render = true;
        }
    }

    /// Jump to the bottom of the document.
    pub fn scroll_to_bottom(&mut self, doc_height: usize) {
        let max = self.max_scroll(doc_height);
        if self.scroll != max {
            self.scroll = max;
            self.needs_render = true;
        }
    }

    /// Jump so that document row `row` is at the top of the viewport
    /// (clamped to the document end).
    pub fn scroll_to(&mut self, row: usize, doc_height: usize) {
        let new = row.min(self.max_scroll(doc_height));
        if new != self.scroll {
            self.scroll = new;
            self.needs_render = true;
        }
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.needs_render = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_has_correct_defaults() {
        let state = ViewerState::new(80, 27);

        assert_eq!(state.scroll, 0);
        assert_eq!(state.view_rows, 24); // 27 - 3 chrome lines
        assert_eq!(state.view_cols, 80);
        assert!(!state.show_help);
        assert!(state.needs_render);
    }

    #[test]
    fn handle_resize_updates_dimensions() {
        let mut state = ViewerState::new(80, 27);
        state.handle_resize(120, 40, 200);

        assert_eq!(state.term_cols, 120);
        assert_eq!(state.view_rows, 37); // 40 - 3
        assert_eq!(state.view_cols, 120);
    }

    #[test]
    fn handle_resize_clamps_scroll() {
        let mut state = ViewerState::new(80, 27);
        state.scroll = 500;
        state.handle_resize(80, 27, 100);
        assert_eq!(state.scroll, 100 - 24);
    }

    #[test]
    fn scroll_down_clamps_to_document_end() {
        let mut state = ViewerState::new(80, 27);
        state.scroll_down(1000, 100);
        assert_eq!(state.scroll, 100 - 24);
    }

    #[test]
    fn scroll_up_stops_at_zero() {
        let mut state = ViewerState::new(80, 27);
        state.scroll = 2;
        state.scroll_up(10);
        assert_eq!(state.scroll, 0);
    }

    #[test]
    fn short_document_never_scrolls() {
        let mut state = ViewerState::new(80, 27);
        state.scroll_down(10, 10); // document shorter than viewport
        assert_eq!(state.scroll, 0);
    }

    #[test]
    fn paging_moves_a_full_viewport() {
        let mut state = ViewerState::new(80, 27);
        state.page_down(200);
        assert_eq!(state.scroll, 24);
        state.page_up();
        assert_eq!(state.scroll, 0);
    }

    #[test]
    fn scroll_changes_mark_needs_render() {
        let mut state = ViewerState::new(80, 27);
        state.needs_render = false;
        state.scroll_up(1); // no-op at top
        assert!(!state.needs_render);
        state.scroll_down(1, 100);
        assert!(state.needs_render);
    }

    #[test]
    fn scroll_to_clamps_to_end() {
        let mut state = ViewerState::new(80, 27);
        state.scroll_to(9999, 100);
        assert_eq!(state.scroll, 76);
        state.scroll_to(10, 100);
        assert_eq!(state.scroll, 10);
    }

    #[test]
    fn toggle_help_flips_and_marks_render() {
        let mut state = ViewerState::new(80, 27);
        state.needs_render = false;
        state.toggle_help();
        assert!(state.show_help);
        assert!(state.needs_render);
    }
}
