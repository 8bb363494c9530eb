//! Interactive portfolio viewer.
//!
//! Renders the portfolio as one scrollable document in the terminal.
//!
//! # Architecture
//!
//! The viewer is organized into submodules:
//! - `state`: ViewerState struct and shared types (InputResult)
//! - `layout`: section row ranges and the document layout
//! - `sections`: per-section styled line builders
//! - `input`: keyboard and mouse input handling
//! - `render`: frame rendering (nav bar, document, progress bar,
//!   footer, help overlay)
//! - `app`: the event loop tying typewriter ticks, reveal observation,
//!   input, and drawing together

pub mod app;
pub mod input;
pub mod layout;
pub mod render;
pub mod sections;
pub mod state;

pub use app::{run, ViewerApp, ViewerOptions};
pub use layout::{Layout, SectionKind};
pub use state::{InputResult, ViewerState};
