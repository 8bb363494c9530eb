//! Document layout for the portfolio viewer.
//!
//! The portfolio is laid out as one virtual column of rows. Each
//! section gets a contiguous row range (`top .. top + height`); the
//! scroll offset selects which rows are on screen. The row ranges are
//! what the reveal latches observe: a section's visible fraction is the
//! overlap between its range and the viewport.

use crate::content::Profile;
use crate::theme::Theme;
use crate::viewer::sections;

/// The page sections, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    About,
    Experience,
    Skills,
    Projects,
    Education,
    Contact,
}

impl SectionKind {
    /// All sections in document order.
    pub const ALL: [SectionKind; 6] = [
        SectionKind::About,
        SectionKind::Experience,
        SectionKind::Skills,
        SectionKind::Projects,
        SectionKind::Education,
        SectionKind::Contact,
    ];

    /// Nav/heading title.
    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::About => "About",
            SectionKind::Experience => "Experience",
            SectionKind::Skills => "Skills",
            SectionKind::Projects => "Projects",
            SectionKind::Education => "Education",
            SectionKind::Contact => "Contact",
        }
    }

    /// Keyboard shortcut digit for jumping to this section.
    pub fn digit(&self) -> char {
        match self {
            SectionKind::About => '1',
            SectionKind::Experience => '2',
            SectionKind::Skills => '3',
            SectionKind::Projects => '4',
            SectionKind::Education => '5',
            SectionKind::Contact => '6',
        }
    }

    /// Visible-fraction threshold at which this section's reveal latch
    /// fires. Values follow the original page: the hero animates on
    /// mount, the dense skills/projects sections fire at 10% visibility,
    /// the rest wait for 30%.
    pub fn threshold(&self) -> f64 {
        match self {
            SectionKind::About => 0.01,
            SectionKind::Experience => 0.3,
            SectionKind::Skills => 0.1,
            SectionKind::Projects => 0.1,
            SectionKind::Education => 0.3,
            SectionKind::Contact => 0.3,
        }
    }

    /// Index of this section in document order.
    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|k| k == self)
            .unwrap_or_default()
    }
}

/// Row range occupied by one section.
#[derive(Debug, Clone, Copy)]
pub struct SectionExtent {
    pub kind: SectionKind,
    /// First document row of the section
    pub top: usize,
    /// Number of rows, including the trailing separator line
    pub height: usize,
}

/// Computed row layout of the whole document at a given width.
#[derive(Debug, Clone)]
pub struct Layout {
    pub extents: Vec<SectionExtent>,
    /// Total document height in rows
    pub height: usize,
    /// Width the layout was computed for
    pub width: usize,
}

impl Layout {
    /// Compute the layout for `profile` at `width` columns.
    ///
    /// Section heights come from the same line builders the renderer
    /// uses, so layout and rendering can never disagree. Heights are
    /// independent of theme and of the typewriter's current text (the
    /// typed line never wraps), so the layout only changes on resize.
    pub fn compute(profile: &Profile, width: usize) -> Self {
        let theme = Theme::default();
        let mut extents = Vec::with_capacity(SectionKind::ALL.len());
        let mut top = 0;
        for kind in SectionKind::ALL {
            let height = sections::section_lines(kind, profile, &theme, width, "").len();
            extents.push(SectionExtent { kind, top, height });
            top += height;
        }
        Self {
            extents,
            height: top,
            width,
        }
    }

    /// The extent of a given section.
    pub fn extent(&self, kind: SectionKind) -> SectionExtent {
        self.extents[kind.index()]
    }

    /// First document row of a given section.
    pub fn top_of(&self, kind: SectionKind) -> usize {
        self.extent(kind).top
    }

    /// The section containing document row `row` (the last one for
    /// rows past the end).
    pub fn section_at(&self, row: usize) -> SectionKind {
        for extent in &self.extents {
            if row < extent.top + extent.height {
                return extent.kind;
            }
        }
        SectionKind::Contact
    }
}
