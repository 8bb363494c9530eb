//! Interactive viewer application.
//!
//! Owns the event loop that ties everything together: the typewriter's
//! self-rescheduling tick deadline, the reveal latches fed by scroll
//! visibility, input dispatch, and frame drawing. The pending tick is a
//! plain deadline owned by the loop, so quitting the loop is also the
//! cancellation of the timer - nothing can fire after teardown.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::content::Profile;
use crate::reveal::{visible_fraction, Reveal};
use crate::theme::Theme;
use crate::typewriter::{Timing, Typewriter};
use crate::viewer::input::handle_event;
use crate::viewer::layout::{Layout, SectionKind};
use crate::viewer::render::{self, REVEAL_DURATION};
use crate::viewer::state::{InputResult, ViewerState};

/// Poll timeout while a section entrance animation is playing.
const ANIM_POLL: Duration = Duration::from_millis(50);

/// Poll timeout when nothing is animating and the typewriter's next
/// tick is far away.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Options for starting the viewer, resolved from config + CLI flags.
#[derive(Debug, Clone)]
pub struct ViewerOptions {
    pub theme_name: String,
    pub timing: Timing,
    /// When false, sections start revealed and the typewriter is
    /// frozen at the first full role.
    pub animate: bool,
    pub mouse: bool,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            theme_name: "parchment".to_string(),
            timing: Timing::default(),
            animate: true,
            mouse: true,
        }
    }
}

/// Per-section reveal state: the latch plus the activation timestamp
/// the entrance animation runs from.
#[derive(Debug, Clone)]
pub struct Section {
    pub kind: SectionKind,
    pub reveal: Reveal,
    /// Set on the activation edge when animations are enabled; `None`
    /// means "activated, fully visible".
    pub activated_at: Option<Instant>,
}

/// The viewer application.
pub struct ViewerApp {
    profile: Profile,
    theme: Theme,
    theme_name: String,
    typewriter: Typewriter,
    animate: bool,
    layout: Layout,
    state: ViewerState,
    sections: Vec<Section>,
    /// Deadline of the single pending typewriter tick
    next_tick: Instant,
}

impl ViewerApp {
    /// Create the viewer for the given terminal size.
    pub fn new(profile: Profile, options: &ViewerOptions, term_cols: u16, term_rows: u16) -> Self {
        let theme = Theme::by_name(&options.theme_name).unwrap_or_default();
        let mut typewriter = Typewriter::with_timing(profile.roles.clone(), options.timing);
        if !options.animate {
            // Freeze the typewriter at the first full role
            while !typewriter.is_complete() {
                typewriter.advance();
            }
        }

        let state = ViewerState::new(term_cols, term_rows);
        let layout = Layout::compute(&profile, state.view_cols);
        let sections = SectionKind::ALL
            .iter()
            .map(|&kind| Section {
                kind,
                reveal: if options.animate {
                    Reveal::new(kind.threshold())
                } else {
                    Reveal::activated()
                },
                activated_at: None,
            })
            .collect();

        let mut app = Self {
            profile,
            theme,
            theme_name: options.theme_name.clone(),
            typewriter,
            animate: options.animate,
            layout,
            state,
            sections,
            next_tick: Instant::now(),
        };
        app.observe_sections(Instant::now());
        app
    }

    /// Feed the current visible fraction of every section to its latch.
    ///
    /// Called after anything that can change visibility (scroll,
    /// resize, startup). Latches that have already fired skip out in
    /// `observe`, so this is cheap and idempotent.
    fn observe_sections(&mut self, now: Instant) {
        for (section, extent) in self.sections.iter_mut().zip(&self.layout.extents) {
            let fraction = visible_fraction(
                extent.top,
                extent.height,
                self.state.scroll,
                self.state.view_rows,
            );
            if section.reveal.observe(fraction) {
                tracing::debug!(section = extent.kind.title(), fraction, "section revealed");
                if self.animate {
                    section.activated_at = Some(now);
                }
                self.state.needs_render = true;
            }
        }
    }

    /// Whether any entrance animation is still in flight at `now`.
    fn animating(&self, now: Instant) -> bool {
        self.sections.iter().any(|s| match s.activated_at {
            Some(at) => now.saturating_duration_since(at) < REVEAL_DURATION,
            None => false,
        })
    }

    /// Advance the typewriter if its deadline has passed and re-arm
    /// exactly one future tick.
    fn tick_typewriter(&mut self, now: Instant) {
        if !self.animate {
            return;
        }
        if now >= self.next_tick {
            let delay = self.typewriter.advance();
            self.next_tick = now + delay;
            self.state.needs_render = true;
            tracing::trace!(display = self.typewriter.display(), ?delay, "typewriter tick");
        }
    }

    /// How long the event poll may block without missing a deadline.
    fn poll_timeout(&self, now: Instant) -> Duration {
        let mut timeout = IDLE_POLL;
        if self.animate {
            timeout = timeout.min(self.next_tick.saturating_duration_since(now));
        }
        if self.animating(now) {
            timeout = timeout.min(ANIM_POLL);
        }
        timeout
    }

    /// Cycle to the next theme.
    fn cycle_theme(&mut self) {
        self.theme_name = Theme::next_name(&self.theme_name).to_string();
        self.theme = Theme::by_name(&self.theme_name).unwrap_or_default();
        self.state.needs_render = true;
    }

    /// Handle a terminal resize: recompute the layout at the new width
    /// and clamp the scroll offset.
    fn handle_resize(&mut self, cols: u16, rows: u16) {
        self.state.handle_resize(cols, rows, self.layout.height);
        if self.state.view_cols != self.layout.width {
            self.layout = Layout::compute(&self.profile, self.state.view_cols);
        }
        let max = self.state.max_scroll(self.layout.height);
        self.state.scroll = self.state.scroll.min(max);
    }

    /// Run the event loop until the user quits.
    #[cfg(not(tarpaulin_include))]
    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            let now = Instant::now();
            if self.state.needs_render || self.animating(now) {
                let frame_now = now;
                terminal.draw(|frame| {
                    render::draw(
                        frame,
                        &self.state,
                        &self.layout,
                        &self.sections,
                        &self.profile,
                        &self.theme,
                        self.typewriter.display(),
                        frame_now,
                    )
                })?;
                self.state.needs_render = false;
            }

            if event::poll(self.poll_timeout(now))? {
                match event::read()? {
                    Event::Resize(cols, rows) => self.handle_resize(cols, rows),
                    other => match handle_event(other, &mut self.state, &self.layout) {
                        InputResult::Quit => return Ok(()),
                        InputResult::CycleTheme => self.cycle_theme(),
                        InputResult::Continue => {}
                    },
                }
            }

            let now = Instant::now();
            self.tick_typewriter(now);
            self.observe_sections(now);
        }
    }
}

/// Restores the terminal on drop, so any exit path (including `?`
/// errors inside the loop) leaves the user's shell intact.
struct TerminalGuard {
    mouse: bool,
}

#[cfg(not(tarpaulin_include))]
impl TerminalGuard {
    fn new(mouse: bool) -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        if mouse {
            execute!(io::stdout(), EnableMouseCapture)?;
        }
        Ok(Self { mouse })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.mouse {
            let _ = execute!(io::stdout(), DisableMouseCapture);
        }
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Run the portfolio viewer until the user quits.
#[cfg(not(tarpaulin_include))]
pub fn run(profile: Profile, options: &ViewerOptions) -> Result<()> {
    let _guard = TerminalGuard::new(options.mouse)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let size = terminal.size()?;
    let mut app = ViewerApp::new(profile, options, size.width, size.height);
    app.event_loop(&mut terminal)
}
