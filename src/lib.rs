//! folio - an animated personal portfolio for the terminal.
//!
//! Renders a single-page portfolio (bio, work history, skills,
//! projects, education, contact) as a scrollable TUI document. Two
//! pieces of logic drive the presentation:
//!
//! - [`typewriter::Typewriter`]: the hero section's rotating role
//!   string, typed and deleted character by character
//! - [`reveal::Reveal`]: one-way latches that reveal each section the
//!   first time it is scrolled far enough into view
//!
//! The `viewer` module hosts the interactive TUI; the `commands`
//! module hosts the non-interactive subcommands (`print`, `export`,
//! `config`).

pub mod commands;
pub mod config;
pub mod content;
pub mod reveal;
pub mod theme;
pub mod typewriter;
pub mod viewer;

pub use config::Config;
pub use content::Profile;
pub use theme::Theme;

/// Version string for `--version`: crate version plus build metadata.
///
/// Dev builds carry the git SHA emitted by the build script; builds
/// with the `release` feature only carry the build date.
pub fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");
    let date = env!("FOLIO_BUILD_DATE");
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) => {
            let short = &sha[..sha.len().min(7)];
            format!("{} ({} {})", version, short, date)
        }
        None => format!("{} ({})", version, date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_string_contains_crate_version() {
        assert!(version_string().contains(env!("CARGO_PKG_VERSION")));
    }
}
