//! `print` subcommand: static ANSI render of the portfolio to stdout.
//!
//! A non-interactive rendition of the same content the viewer shows:
//! no typewriter, no reveal animation, every role listed up front.

use anyhow::Result;
use terminal_size::{terminal_size, Width};

use crate::content::Profile;
use crate::theme::{current_theme, Theme};
use crate::viewer::sections::wrap;

/// Widths are clamped into this range: below it the wrapping gets
/// unreadable, above it lines get hard to scan.
const MIN_WIDTH: usize = 40;
const MAX_WIDTH: usize = 100;

/// Resolve the output width: explicit flag, else terminal width, else 80.
fn resolve_width(requested: Option<usize>) -> usize {
    let width = requested.or_else(|| terminal_size().map(|(Width(w), _)| w as usize));
    width.unwrap_or(80).clamp(MIN_WIDTH, MAX_WIDTH)
}

fn heading(out: &mut Vec<String>, title: &str, theme: &Theme) {
    out.push(String::new());
    out.push(theme.heading_text(&title.to_uppercase()));
    out.push(theme.secondary_text(&"─".repeat(title.len() + 2)));
}

/// Build the full plain render as lines.
pub fn render_lines(profile: &Profile, theme: &Theme, width: usize) -> Vec<String> {
    let mut out = Vec::new();

    // Hero
    out.push(theme.heading_text(&format!("Hi, I'm {}", profile.name)));
    out.push(theme.accent_text(&format!("I'm a {}", profile.roles.join(" · "))));
    out.push(String::new());
    for row in wrap(&profile.tagline, width) {
        out.push(theme.primary_text(&row));
    }

    heading(&mut out, "Experience", theme);
    for entry in &profile.experience {
        out.push(String::new());
        out.push(theme.accent_text(&format!("● {}", entry.title)));
        out.push(format!(
            "{}{}",
            theme.primary_text(&entry.company),
            theme.secondary_text(&format!("  {}", entry.period))
        ));
        for highlight in &entry.highlights {
            for (i, row) in wrap(highlight, width.saturating_sub(4)).into_iter().enumerate() {
                let bullet = if i == 0 { "  ▪ " } else { "    " };
                out.push(format!("{}{}", bullet, theme.primary_text(&row)));
            }
        }
    }

    heading(&mut out, "Skills", theme);
    for category in &profile.skills {
        out.push(String::new());
        out.push(theme.accent_text(&category.title));
        for skill in &category.skills {
            out.push(format!(
                "  {} {}",
                theme.primary_text(&skill.name),
                theme.secondary_text(&format!("({})", skill.proficiency.label()))
            ));
        }
    }

    heading(&mut out, "Projects", theme);
    for project in &profile.projects {
        out.push(String::new());
        out.push(theme.accent_text(&format!("▸ {}", project.title)));
        for row in wrap(&project.description, width.saturating_sub(2)) {
            out.push(format!("  {}", theme.primary_text(&row)));
        }
        let tags = project
            .technologies
            .iter()
            .map(|t| format!("[{}]", t))
            .collect::<Vec<_>>()
            .join(" ");
        out.push(format!("  {}", theme.accent_text(&tags)));
        out.push(format!("  {}", theme.secondary_text(&project.repo)));
    }

    heading(&mut out, "Education", theme);
    for entry in &profile.education {
        out.push(String::new());
        out.push(theme.accent_text(&format!("● {}", entry.degree)));
        out.push(format!("  {}", theme.primary_text(&entry.institution)));
        let period = match &entry.grade {
            Some(grade) => format!("{}  ·  {}", entry.period, grade),
            None => entry.period.clone(),
        };
        out.push(format!("  {}", theme.secondary_text(&period)));
        for row in wrap(&entry.description, width.saturating_sub(2)) {
            out.push(format!("  {}", theme.primary_text(&row)));
        }
    }

    heading(&mut out, "Contact", theme);
    out.push(String::new());
    for row in wrap(&profile.contact.blurb, width) {
        out.push(theme.primary_text(&row));
    }
    out.push(String::new());
    out.push(format!(
        "{}    {}",
        theme.primary_text(&format!("✉ {}", profile.contact.email)),
        theme.primary_text(&format!("⌂ {}", profile.contact.location))
    ));
    for link in &profile.contact.links {
        out.push(format!(
            "  {}  {}",
            theme.accent_text(&link.name),
            theme.secondary_text(&link.url)
        ));
    }
    out.push(String::new());
    out.push(theme.secondary_text(&format!(
        "© 2025 {}. All rights reserved.",
        profile.name
    )));

    out
}

/// Print the portfolio to stdout.
#[cfg(not(tarpaulin_include))]
pub fn handle_print(width: Option<usize>) -> Result<()> {
    let profile = Profile::builtin();
    let theme = current_theme();
    for line in render_lines(&profile, &theme, resolve_width(width)) {
        println!("{}", line);
    }
    Ok(())
}
