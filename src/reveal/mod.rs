//! Scroll-triggered reveal activation for portfolio sections.
//!
//! Each section owns a [`Reveal`] latch. Whenever the scroll position
//! or viewport changes, the viewer computes what fraction of the
//! section's rows is on screen and feeds it to
//! [`Reveal::observe`]. The first time the fraction reaches the
//! section's threshold, the latch activates - permanently. Scrolling
//! past a section never hides it again; the presentation layer uses the
//! activation edge to start its one-shot entrance animation.

/// Minimum accepted activation threshold.
///
/// A threshold of exactly zero would activate sections that have never
/// been on screen, so thresholds are clamped away from it.
const MIN_THRESHOLD: f64 = 0.01;

/// One-way activation latch with a visible-fraction threshold.
///
/// State machine per section: watching -> activated, and that is the
/// only transition. Observations after activation are no-ops.
#[derive(Debug, Clone)]
pub struct Reveal {
    threshold: f64,
    activated: bool,
}

impl Reveal {
    /// Create a latch that activates once the visible fraction reaches
    /// `threshold`. The threshold is clamped into `[0.01, 1.0]`.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(MIN_THRESHOLD, 1.0),
            activated: false,
        }
    }

    /// Create a latch that is already activated (animations disabled).
    pub fn activated() -> Self {
        Self {
            threshold: MIN_THRESHOLD,
            activated: true,
        }
    }

    /// The activation threshold in effect.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Whether the latch has fired.
    pub fn is_activated(&self) -> bool {
        self.activated
    }

    /// Feed one visibility observation to the latch.
    ///
    /// Returns `true` only on the observation that activates the latch,
    /// so callers can react to the edge (start an animation, record a
    /// timestamp). Idempotent once activated.
    pub fn observe(&mut self, visible_fraction: f64) -> bool {
        if self.activated {
            return false;
        }
        if visible_fraction >= self.threshold {
            self.activated = true;
            return true;
        }
        false
    }
}

/// Fraction of a row range `[top, top + height)` that lies within the
/// viewport `[view_top, view_top + view_rows)`.
///
/// A zero-height range is never visible; it yields `0.0` and the
/// corresponding latch simply never fires.
pub fn visible_fraction(top: usize, height: usize, view_top: usize, view_rows: usize) -> f64 {
    if height == 0 || view_rows == 0 {
        return 0.0;
    }
    let bottom = top + height;
    let view_bottom = view_top + view_rows;
    let overlap_top = top.max(view_top);
    let overlap_bottom = bottom.min(view_bottom);
    if overlap_bottom <= overlap_top {
        return 0.0;
    }
    (overlap_bottom - overlap_top) as f64 / height as f64
}
