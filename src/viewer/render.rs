//! Frame rendering for the portfolio viewer.
//!
//! Draws the nav bar, the scrolled document viewport with per-section
//! reveal animation, the scroll progress bar with section markers, the
//! key-hint footer, and the help overlay.

use std::time::{Duration, Instant};

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout as RectLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::content::Profile;
use crate::theme::Theme;
use crate::viewer::app::Section;
use crate::viewer::layout::Layout;
use crate::viewer::sections::section_lines;
use crate::viewer::state::ViewerState;

/// Duration of a section's entrance animation once its latch fires.
pub const REVEAL_DURATION: Duration = Duration::from_millis(600);

/// Trailing rows of an in-progress reveal that render dimmed.
const REVEAL_DIM_ROWS: usize = 2;

/// Draw one full frame.
#[allow(clippy::too_many_arguments)]
pub fn draw(
    frame: &mut Frame,
    state: &ViewerState,
    layout: &Layout,
    sections: &[Section],
    profile: &Profile,
    theme: &Theme,
    typed: &str,
    now: Instant,
) {
    let chunks = RectLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // nav bar
            Constraint::Min(0),    // document
            Constraint::Length(1), // progress bar
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    render_nav_bar(frame, chunks[0], state, layout, profile, theme);
    render_document(frame, chunks[1], state, layout, sections, profile, theme, typed, now);
    render_progress_bar(frame, chunks[2], state, layout, theme);
    render_footer(frame, chunks[3], theme);

    if state.show_help {
        render_help_modal(frame, frame.area(), theme);
    }
}

/// Render the top nav bar: name plus one tab per section, the section
/// at the top of the viewport highlighted.
fn render_nav_bar(
    frame: &mut Frame,
    area: Rect,
    state: &ViewerState,
    layout: &Layout,
    profile: &Profile,
    theme: &Theme,
) {
    let current = layout.section_at(state.scroll);
    let mut spans = vec![
        Span::styled(format!(" {} ", profile.name), theme.heading_style()),
        Span::styled("│".to_string(), theme.text_secondary_style()),
    ];
    for extent in &layout.extents {
        let label = format!(" {}:{} ", extent.kind.digit(), extent.kind.title());
        let style = if extent.kind == current {
            theme.active_tab_style()
        } else {
            theme.text_secondary_style()
        };
        spans.push(Span::styled(label, style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Number of document rows of a section that are currently revealed.
///
/// Zero until the latch fires; then rows appear top-down over
/// [`REVEAL_DURATION`]. A section activated with no timestamp (reveal
/// animations disabled) is fully visible.
pub fn revealed_rows(section: &Section, height: usize, now: Instant) -> usize {
    if !section.reveal.is_activated() {
        return 0;
    }
    match section.activated_at {
        None => height,
        Some(at) => {
            let elapsed = now.saturating_duration_since(at);
            if elapsed >= REVEAL_DURATION {
                height
            } else {
                let ratio = elapsed.as_secs_f64() / REVEAL_DURATION.as_secs_f64();
                ((height as f64) * ratio).ceil() as usize
            }
        }
    }
}

/// Render the scrolled document viewport.
#[allow(clippy::too_many_arguments)]
fn render_document(
    frame: &mut Frame,
    area: Rect,
    state: &ViewerState,
    layout: &Layout,
    sections: &[Section],
    profile: &Profile,
    theme: &Theme,
    typed: &str,
    now: Instant,
) {
    let width = layout.width;
    let mut rows: Vec<Line<'static>> = Vec::with_capacity(area.height as usize);

    // Built lazily per section the first time the window touches it
    let mut built: Vec<Option<Vec<Line<'static>>>> = vec![None; layout.extents.len()];

    for row in state.scroll..state.scroll + area.height as usize {
        if row >= layout.height {
            rows.push(Line::default());
            continue;
        }
        let kind = layout.section_at(row);
        let idx = kind.index();
        let extent = layout.extent(kind);
        let section = &sections[idx];

        let visible = revealed_rows(section, extent.height, now);
        let line_in_section = row - extent.top;
        if line_in_section >= visible {
            // Not yet revealed: the row stays blank, keeping the layout
            // stable so later sections do not shift while animating.
            rows.push(Line::default());
            continue;
        }

        let lines = built[idx]
            .get_or_insert_with(|| section_lines(kind, profile, theme, width, typed));
        let mut line = lines[line_in_section].clone();
        if visible < extent.height && line_in_section + REVEAL_DIM_ROWS >= visible {
            // Newest rows of an in-flight reveal fade in
            line = line.style(Style::default().add_modifier(Modifier::DIM));
        }
        rows.push(line);
    }

    frame.render_widget(Paragraph::new(rows), area);
}

/// Build the scroll progress bar character array.
///
/// `marks` are document-relative positions (0.0..=1.0) of the section
/// anchors, drawn as `◆`; the playhead `⏺` sits at the current scroll
/// fraction.
pub fn build_scroll_bar_chars(
    bar_width: usize,
    scroll: usize,
    max_scroll: usize,
    marks: &[f64],
) -> (Vec<char>, usize) {
    if bar_width == 0 {
        return (Vec::new(), 0);
    }

    let progress = if max_scroll > 0 {
        (scroll as f64 / max_scroll as f64).clamp(0.0, 1.0)
    } else {
        1.0
    };

    let filled = (bar_width as f64 * progress) as usize;

    let mut bar: Vec<char> = vec!['─'; bar_width];

    for &mark in marks {
        let pos = ((mark.clamp(0.0, 1.0)) * bar_width as f64) as usize;
        let pos = pos.min(bar_width.saturating_sub(1));
        bar[pos] = '◆';
    }

    if filled < bar_width {
        bar[filled] = '⏺';
    }

    (bar, filled)
}

/// Scroll position as a percentage for the bar's right-hand label.
pub fn scroll_percent(scroll: usize, max_scroll: usize) -> u8 {
    if max_scroll == 0 {
        100
    } else {
        ((scroll as f64 / max_scroll as f64) * 100.0).round() as u8
    }
}

/// Render the scroll progress bar with section markers.
fn render_progress_bar(
    frame: &mut Frame,
    area: Rect,
    state: &ViewerState,
    layout: &Layout,
    theme: &Theme,
) {
    let label = format!(" {:>3}%", scroll_percent(state.scroll, state.max_scroll(layout.height)));
    let bar_width = (area.width as usize).saturating_sub(label.len() + 2);

    let marks: Vec<f64> = if layout.height > 0 {
        layout
            .extents
            .iter()
            .map(|e| e.top as f64 / layout.height as f64)
            .collect()
    } else {
        Vec::new()
    };

    let (bar, filled) =
        build_scroll_bar_chars(bar_width, state.scroll, state.max_scroll(layout.height), &marks);

    let mut spans = vec![Span::styled(" ".to_string(), theme.text_style())];
    for (i, &c) in bar.iter().enumerate() {
        let style = match c {
            '◆' => theme.accent_bold_style(),
            '⏺' => theme.accent_style(),
            _ if i < filled => theme.accent_style(),
            _ => theme.text_secondary_style(),
        };
        spans.push(Span::styled(c.to_string(), style));
    }
    spans.push(Span::styled(label, theme.text_secondary_style()));

    let bar_line = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.highlight_bg));
    frame.render_widget(bar_line, area);
}

/// Key hints shown in the footer.
const FOOTER_KEYS: &[(&str, &str)] = &[
    ("j/k", "scroll"),
    ("1-6", "sections"),
    ("Tab", "next"),
    ("t", "theme"),
    ("?", "help"),
    ("q", "quit"),
];

/// Render the centered footer with keybinding hints.
fn render_footer(frame: &mut Frame, area: Rect, theme: &Theme) {
    let mut spans: Vec<Span<'static>> = Vec::with_capacity(FOOTER_KEYS.len() * 3);
    for (i, (key, desc)) in FOOTER_KEYS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                " | ".to_string(),
                theme.text_secondary_style(),
            ));
        }
        spans.push(Span::styled(key.to_string(), theme.accent_style()));
        spans.push(Span::styled(
            format!(": {}", desc),
            theme.text_secondary_style(),
        ));
    }
    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Help text lines for the help overlay.
const HELP_LINES: &[(&str, &str)] = &[
    ("j / Down", "Scroll down one row"),
    ("k / Up", "Scroll up one row"),
    ("Space / PageDown", "Scroll down a page"),
    ("PageUp", "Scroll up a page"),
    ("g / Home", "Jump to top"),
    ("G / End", "Jump to bottom"),
    ("1-6", "Jump to section"),
    ("Tab / Shift-Tab", "Next / previous section"),
    ("t", "Cycle theme"),
    ("?", "Toggle this help"),
    ("q / Esc", "Quit"),
];

/// Render the help modal overlay.
fn render_help_modal(frame: &mut Frame, area: Rect, theme: &Theme) {
    let modal_width = 48.min(area.width.saturating_sub(4));
    let modal_height = (HELP_LINES.len() as u16 + 4).min(area.height.saturating_sub(2));
    let x = (area.width.saturating_sub(modal_width)) / 2;
    let y = (area.height.saturating_sub(modal_height)) / 2;
    let modal_area = Rect::new(x, y, modal_width, modal_height);

    // Clear the area behind the modal
    frame.render_widget(Clear, modal_area);

    let mut lines = vec![Line::default()];
    for (key, desc) in HELP_LINES {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<18}", key), theme.accent_style()),
            Span::styled((*desc).to_string(), theme.text_style()),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "      Press any key to close".to_string(),
        theme.text_secondary_style(),
    )));

    let help = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent))
                .title(" Help "),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(help, modal_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::Reveal;
    use crate::viewer::layout::SectionKind;

    fn section(kind: SectionKind) -> Section {
        Section {
            kind,
            reveal: Reveal::new(kind.threshold()),
            activated_at: None,
        }
    }

    #[test]
    fn unactivated_section_reveals_nothing() {
        let s = section(SectionKind::Skills);
        assert_eq!(revealed_rows(&s, 20, Instant::now()), 0);
    }

    #[test]
    fn activated_without_timestamp_reveals_everything() {
        let mut s = section(SectionKind::Skills);
        s.reveal.observe(1.0);
        assert_eq!(revealed_rows(&s, 20, Instant::now()), 20);
    }

    #[test]
    fn reveal_progresses_over_time() {
        let mut s = section(SectionKind::Skills);
        s.reveal.observe(1.0);
        let at = Instant::now();
        s.activated_at = Some(at);

        let half = revealed_rows(&s, 20, at + Duration::from_millis(300));
        assert!(half > 0 && half < 20, "half-way reveal was {}", half);

        assert_eq!(revealed_rows(&s, 20, at + REVEAL_DURATION), 20);
        // Never regresses afterwards
        assert_eq!(revealed_rows(&s, 20, at + Duration::from_secs(60)), 20);
    }

    #[test]
    fn scroll_bar_playhead_tracks_progress() {
        let (bar, filled) = build_scroll_bar_chars(10, 0, 100, &[]);
        assert_eq!(filled, 0);
        assert_eq!(bar[0], '⏺');

        let (bar, filled) = build_scroll_bar_chars(10, 50, 100, &[]);
        assert_eq!(filled, 5);
        assert_eq!(bar[5], '⏺');
    }

    #[test]
    fn scroll_bar_is_full_when_document_fits() {
        let (bar, filled) = build_scroll_bar_chars(10, 0, 0, &[]);
        assert_eq!(filled, 10);
        assert!(bar.iter().all(|&c| c == '─'));
    }

    #[test]
    fn scroll_bar_places_section_marks() {
        let (bar, _) = build_scroll_bar_chars(10, 90, 100, &[0.0, 0.5]);
        assert_eq!(bar[0], '◆');
        assert_eq!(bar[5], '◆');
    }

    #[test]
    fn zero_width_bar_is_empty() {
        // A terminal narrower than the percent label leaves no room for
        // the bar; marks must not be written into the empty vec.
        let (bar, filled) = build_scroll_bar_chars(0, 0, 100, &[0.0, 0.5]);
        assert!(bar.is_empty());
        assert_eq!(filled, 0);
    }

    #[test]
    fn playhead_wins_over_marks() {
        let (bar, _) = build_scroll_bar_chars(10, 0, 100, &[0.0]);
        assert_eq!(bar[0], '⏺');
    }

    #[test]
    fn scroll_percent_rounds_and_saturates() {
        assert_eq!(scroll_percent(0, 100), 0);
        assert_eq!(scroll_percent(50, 100), 50);
        assert_eq!(scroll_percent(100, 100), 100);
        assert_eq!(scroll_percent(0, 0), 100);
    }
}
