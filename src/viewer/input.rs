//! Input handling for the portfolio viewer.
//!
//! Dispatches keyboard and mouse events to scroll/navigation actions
//! and returns control flow signals to the main loop.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind,
};

use crate::viewer::layout::{Layout, SectionKind};
use crate::viewer::state::{InputResult, ViewerState};

/// Handle any input event, dispatching to the appropriate handler.
pub fn handle_event(event: Event, state: &mut ViewerState, layout: &Layout) -> InputResult {
    match event {
        Event::Key(key) => handle_key_event(key, state, layout),
        Event::Mouse(mouse) => handle_mouse_event(mouse, state, layout),
        _ => InputResult::Continue,
    }
}

/// Handle a keyboard event.
pub fn handle_key_event(key: KeyEvent, state: &mut ViewerState, layout: &Layout) -> InputResult {
    // If help is showing, any key closes it
    if state.show_help {
        state.show_help = false;
        state.needs_render = true;
        return InputResult::Continue;
    }

    let doc_height = layout.height;

    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,

        // === Help / theme ===
        KeyCode::Char('?') => {
            state.toggle_help();
            InputResult::Continue
        }
        KeyCode::Char('t') => InputResult::CycleTheme,

        // === Row scrolling ===
        KeyCode::Up | KeyCode::Char('k') => {
            state.scroll_up(1);
            InputResult::Continue
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.scroll_down(1, doc_height);
            InputResult::Continue
        }

        // === Paging ===
        KeyCode::PageUp => {
            state.page_up();
            InputResult::Continue
        }
        KeyCode::PageDown | KeyCode::Char(' ') => {
            state.page_down(doc_height);
            InputResult::Continue
        }

        // === Jumps ===
        KeyCode::Home | KeyCode::Char('g') => {
            state.scroll_to_top();
            InputResult::Continue
        }
        KeyCode::End | KeyCode::Char('G') => {
            state.scroll_to_bottom(doc_height);
            InputResult::Continue
        }

        // === Section anchors ===
        KeyCode::Char(c @ '1'..='6') => {
            if let Some(kind) = SectionKind::ALL.iter().find(|k| k.digit() == c) {
                state.scroll_to(layout.top_of(*kind), doc_height);
            }
            InputResult::Continue
        }
        KeyCode::Tab => {
            jump_to_adjacent_section(state, layout, 1);
            InputResult::Continue
        }
        KeyCode::BackTab => {
            jump_to_adjacent_section(state, layout, -1);
            InputResult::Continue
        }

        _ => InputResult::Continue,
    }
}

/// Handle a mouse event (wheel scrolling).
pub fn handle_mouse_event(
    mouse: MouseEvent,
    state: &mut ViewerState,
    layout: &Layout,
) -> InputResult {
    match mouse.kind {
        MouseEventKind::ScrollUp => state.scroll_up(ViewerState::WHEEL_ROWS),
        MouseEventKind::ScrollDown => state.scroll_down(ViewerState::WHEEL_ROWS, layout.height),
        _ => {}
    }
    InputResult::Continue
}

/// Jump to the next (`+1`) or previous (`-1`) section anchor relative
/// to the section currently at the top of the viewport.
fn jump_to_adjacent_section(state: &mut ViewerState, layout: &Layout, direction: isize) {
    let current = layout.section_at(state.scroll).index() as isize;
    let count = SectionKind::ALL.len() as isize;
    let target = (current + direction).rem_euclid(count) as usize;
    state.scroll_to(layout.top_of(SectionKind::ALL[target]), layout.height);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Profile;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn setup() -> (ViewerState, Layout) {
        let layout = Layout::compute(&Profile::builtin(), 80);
        (ViewerState::new(80, 27), layout)
    }

    #[test]
    fn q_quits() {
        let (mut state, layout) = setup();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('q')), &mut state, &layout),
            InputResult::Quit
        );
    }

    #[test]
    fn ctrl_c_quits() {
        let (mut state, layout) = setup();
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(event, &mut state, &layout), InputResult::Quit);
    }

    #[test]
    fn any_key_closes_help_first() {
        let (mut state, layout) = setup();
        state.show_help = true;
        let result = handle_key_event(key(KeyCode::Char('q')), &mut state, &layout);
        assert_eq!(result, InputResult::Continue);
        assert!(!state.show_help);
    }

    #[test]
    fn arrows_scroll_one_row() {
        let (mut state, layout) = setup();
        handle_key_event(key(KeyCode::Down), &mut state, &layout);
        assert_eq!(state.scroll, 1);
        handle_key_event(key(KeyCode::Up), &mut state, &layout);
        assert_eq!(state.scroll, 0);
    }

    #[test]
    fn vim_keys_scroll() {
        let (mut state, layout) = setup();
        handle_key_event(key(KeyCode::Char('j')), &mut state, &layout);
        assert_eq!(state.scroll, 1);
        handle_key_event(key(KeyCode::Char('k')), &mut state, &layout);
        assert_eq!(state.scroll, 0);
    }

    #[test]
    fn digit_jumps_to_section_anchor() {
        let (mut state, layout) = setup();
        handle_key_event(key(KeyCode::Char('3')), &mut state, &layout);
        assert_eq!(state.scroll, layout.top_of(SectionKind::Skills));
    }

    #[test]
    fn tab_advances_to_next_section() {
        let (mut state, layout) = setup();
        handle_key_event(key(KeyCode::Tab), &mut state, &layout);
        assert_eq!(state.scroll, layout.top_of(SectionKind::Experience));
    }

    #[test]
    fn back_tab_wraps_to_last_section() {
        let (mut state, layout) = setup();
        handle_key_event(key(KeyCode::BackTab), &mut state, &layout);
        let expected = layout
            .top_of(SectionKind::Contact)
            .min(state.max_scroll(layout.height));
        assert_eq!(state.scroll, expected);
    }

    #[test]
    fn t_requests_theme_cycle() {
        let (mut state, layout) = setup();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('t')), &mut state, &layout),
            InputResult::CycleTheme
        );
    }

    #[test]
    fn wheel_scrolls_three_rows() {
        let (mut state, layout) = setup();
        let wheel = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse_event(wheel, &mut state, &layout);
        assert_eq!(state.scroll, ViewerState::WHEEL_ROWS);
    }

    #[test]
    fn end_then_home_round_trips() {
        let (mut state, layout) = setup();
        handle_key_event(key(KeyCode::End), &mut state, &layout);
        assert_eq!(state.scroll, state.max_scroll(layout.height));
        handle_key_event(key(KeyCode::Home), &mut state, &layout);
        assert_eq!(state.scroll, 0);
    }
}
