//! Per-section line builders.
//!
//! Each builder turns one block of the content model into styled
//! ratatui lines at a given width. The builders are pure: the renderer
//! calls them every frame, and the layout calls them once per resize to
//! measure heights, so line counts must depend only on the profile and
//! the width.

use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::content::{Profile, Proficiency};
use crate::theme::Theme;
use crate::viewer::layout::SectionKind;

/// Caret drawn after the typed role string.
pub const CARET: char = '▌';

/// Narrower terminals than this get wrapped as if they were this wide;
/// the paragraph builders need some minimum room.
const MIN_WRAP_WIDTH: usize = 24;

/// Build the lines for one section.
///
/// `typed` is the typewriter's current display string; it only affects
/// the hero section and never changes the line count.
pub fn section_lines(
    kind: SectionKind,
    profile: &Profile,
    theme: &Theme,
    width: usize,
    typed: &str,
) -> Vec<Line<'static>> {
    let width = width.max(MIN_WRAP_WIDTH);
    match kind {
        SectionKind::About => about_lines(profile, theme, width, typed),
        SectionKind::Experience => experience_lines(profile, theme, width),
        SectionKind::Skills => skills_lines(profile, theme),
        SectionKind::Projects => projects_lines(profile, theme, width),
        SectionKind::Education => education_lines(profile, theme, width),
        SectionKind::Contact => contact_lines(profile, theme, width),
    }
}

/// Word-wrap `text` to at most `width` columns (unicode-aware).
pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    for word in text.split_whitespace() {
        let word_width = word.width();
        if current_width > 0 && current_width + 1 + word_width > width {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Standard section heading: blank line, title, underline rule.
fn heading(title: &str, theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::default(),
        Line::from(Span::styled(title.to_uppercase(), theme.heading_style())),
        Line::from(Span::styled(
            "─".repeat(title.width() + 2),
            theme.text_secondary_style(),
        )),
    ]
}

fn blank() -> Line<'static> {
    Line::default()
}

fn about_lines(
    profile: &Profile,
    theme: &Theme,
    width: usize,
    typed: &str,
) -> Vec<Line<'static>> {
    let mut lines = vec![
        blank(),
        Line::from(Span::styled(
            format!("Hi, I'm {}", profile.name),
            theme.heading_style().add_modifier(Modifier::UNDERLINED),
        )),
        blank(),
        Line::from(vec![
            Span::styled("I'm a ".to_string(), theme.text_style()),
            Span::styled(typed.to_string(), theme.accent_bold_style()),
            Span::styled(CARET.to_string(), theme.accent_style()),
        ]),
        blank(),
    ];
    for row in wrap(&profile.tagline, width) {
        lines.push(Line::from(Span::styled(row, theme.text_style())));
    }
    lines.push(blank());
    lines
}

fn experience_lines(profile: &Profile, theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let mut lines = heading("Experience", theme);
    let body_width = width.saturating_sub(6).max(MIN_WRAP_WIDTH - 6);
    for entry in &profile.experience {
        lines.push(blank());
        lines.push(Line::from(vec![
            Span::styled("● ".to_string(), theme.accent_style()),
            Span::styled(entry.title.clone(), theme.accent_bold_style()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("│ ".to_string(), theme.text_secondary_style()),
            Span::styled(entry.company.clone(), theme.text_style()),
            Span::styled(format!("  {}", entry.period), theme.text_secondary_style()),
        ]));
        for highlight in &entry.highlights {
            for (i, row) in wrap(highlight, body_width).into_iter().enumerate() {
                let bullet = if i == 0 { "│ ▪ " } else { "│   " };
                lines.push(Line::from(vec![
                    Span::styled(bullet.to_string(), theme.text_secondary_style()),
                    Span::styled(row, theme.text_style()),
                ]));
            }
        }
    }
    lines.push(blank());
    lines
}

/// Render a five-cell proficiency meter like `■■■■□`.
fn meter_spans(proficiency: Proficiency, theme: &Theme) -> Vec<Span<'static>> {
    let filled = proficiency.meter();
    vec![
        Span::styled("■".repeat(filled), theme.accent_style()),
        Span::styled("□".repeat(5 - filled), theme.text_secondary_style()),
        Span::styled(format!("  {}", proficiency.label()), theme.text_secondary_style()),
    ]
}

fn skills_lines(profile: &Profile, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = heading("Skills", theme);
    let name_width = profile
        .skills
        .iter()
        .flat_map(|c| c.skills.iter())
        .map(|s| s.name.width())
        .max()
        .unwrap_or(0);
    for category in &profile.skills {
        lines.push(blank());
        lines.push(Line::from(Span::styled(
            category.title.clone(),
            theme.accent_bold_style(),
        )));
        for skill in &category.skills {
            let pad = " ".repeat(name_width.saturating_sub(skill.name.width()));
            let mut spans = vec![Span::styled(
                format!("  {}{}  ", skill.name, pad),
                theme.text_style(),
            )];
            spans.extend(meter_spans(skill.proficiency, theme));
            lines.push(Line::from(spans));
        }
    }
    lines.push(blank());
    lines
}

fn projects_lines(profile: &Profile, theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let mut lines = heading("Projects", theme);
    let body_width = width.saturating_sub(2).max(MIN_WRAP_WIDTH - 2);
    for project in &profile.projects {
        lines.push(blank());
        lines.push(Line::from(vec![
            Span::styled("▸ ".to_string(), theme.accent_style()),
            Span::styled(project.title.clone(), theme.accent_bold_style()),
        ]));
        for row in wrap(&project.description, body_width) {
            lines.push(Line::from(vec![
                Span::styled("  ".to_string(), theme.text_style()),
                Span::styled(row, theme.text_style()),
            ]));
        }
        // Technology tags on their own wrapped lines
        let tags = project
            .technologies
            .iter()
            .map(|t| format!("[{}]", t))
            .collect::<Vec<_>>()
            .join(" ");
        for row in wrap(&tags, body_width) {
            lines.push(Line::from(vec![
                Span::styled("  ".to_string(), theme.text_style()),
                Span::styled(row, theme.accent_style()),
            ]));
        }
        lines.push(Line::from(vec![
            Span::styled("  ".to_string(), theme.text_style()),
            Span::styled(
                project.repo.clone(),
                theme
                    .text_secondary_style()
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]));
    }
    lines.push(blank());
    lines
}

fn education_lines(profile: &Profile, theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let mut lines = heading("Education", theme);
    let body_width = width.saturating_sub(2).max(MIN_WRAP_WIDTH - 2);
    for entry in &profile.education {
        lines.push(blank());
        lines.push(Line::from(vec![
            Span::styled("● ".to_string(), theme.accent_style()),
            Span::styled(entry.degree.clone(), theme.accent_bold_style()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("  ".to_string(), theme.text_style()),
            Span::styled(entry.institution.clone(), theme.text_style()),
        ]));
        let period = match &entry.grade {
            Some(grade) => format!("  {}  ·  {}", entry.period, grade),
            None => format!("  {}", entry.period),
        };
        lines.push(Line::from(Span::styled(
            period,
            theme.text_secondary_style(),
        )));
        for row in wrap(&entry.description, body_width) {
            lines.push(Line::from(vec![
                Span::styled("  ".to_string(), theme.text_style()),
                Span::styled(row, theme.text_style()),
            ]));
        }
    }
    lines.push(blank());
    lines
}

fn contact_lines(profile: &Profile, theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let mut lines = heading("Contact", theme);
    lines.push(blank());
    lines.push(Line::from(Span::styled(
        "Let's Connect".to_string(),
        theme.accent_bold_style(),
    )));
    for row in wrap(&profile.contact.blurb, width) {
        lines.push(Line::from(Span::styled(row, theme.text_style())));
    }
    lines.push(blank());
    lines.push(Line::from(vec![
        Span::styled("✉ ".to_string(), theme.accent_style()),
        Span::styled(profile.contact.email.clone(), theme.text_style()),
        Span::styled("    ⌂ ".to_string(), theme.accent_style()),
        Span::styled(profile.contact.location.clone(), theme.text_style()),
    ]));
    lines.push(blank());
    let link_name_width = profile
        .contact
        .links
        .iter()
        .map(|l| l.name.width())
        .max()
        .unwrap_or(0);
    for link in &profile.contact.links {
        let pad = " ".repeat(link_name_width.saturating_sub(link.name.width()));
        lines.push(Line::from(vec![
            Span::styled(format!("  {}{}  ", link.name, pad), theme.accent_style()),
            Span::styled(
                link.url.clone(),
                theme
                    .text_secondary_style()
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]));
    }
    lines.push(blank());
    lines.push(Line::from(Span::styled(
        format!("© 2025 {}. All rights reserved.", profile.name),
        theme.text_secondary_style(),
    )));
    lines.push(blank());
    lines
}
