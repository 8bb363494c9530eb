//! Role typewriter effect for the hero section.
//!
//! Cycles through a fixed list of role strings, typing them out one
//! character at a time, holding the full string for a moment, then
//! deleting it twice as fast before moving on to the next role.
//!
//! The effect is a plain tick-driven state machine: the caller invokes
//! [`Typewriter::advance`] whenever the current delay elapses, and the
//! call returns the delay until the next tick. No timers live inside
//! this module, which keeps the machine directly unit-testable - tests
//! just feed ticks.

use std::time::Duration;

/// Default timing for the typewriter effect.
///
/// All values are in milliseconds. Deleting runs at twice the typing
/// speed, and the full string is held on screen before deletion starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Delay between ticks while typing
    pub type_ms: u64,
    /// Delay between ticks while deleting
    pub delete_ms: u64,
    /// Hold duration once the full role string is on screen
    pub hold_ms: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            type_ms: 100,
            delete_ms: 50,
            hold_ms: 2000,
        }
    }
}

/// Phase of the type/hold/delete cycle.
///
/// `Holding` is the window between the string becoming complete and
/// deletion starting. The hold applies only at full text - there is no
/// symmetric pause at empty text; the machine advances to the next role
/// and starts typing at the normal typing delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Growing toward the full role string
    Typing,
    /// Full string on screen, waiting out the hold delay
    Holding,
    /// Shrinking toward the empty string
    Deleting,
}

/// Tick-driven typewriter over a fixed, non-empty list of role strings.
///
/// Invariants maintained across every [`advance`](Self::advance) call:
/// - `display()` is always a prefix of the current role string
/// - deletion only begins once the full string has been shown (and held)
/// - the role index only advances when the display returns to empty,
///   wrapping around the list so iteration cycles forever
#[derive(Debug, Clone)]
pub struct Typewriter {
    roles: Vec<String>,
    displayed: String,
    role_idx: usize,
    phase: Phase,
    timing: Timing,
}

impl Typewriter {
    /// Create a typewriter over the given roles with default timing.
    ///
    /// # Panics
    /// Panics if `roles` is empty. A typewriter with nothing to type is
    /// a caller contract violation, not a runtime condition.
    pub fn new(roles: Vec<String>) -> Self {
        Self::with_timing(roles, Timing::default())
    }

    /// Create a typewriter with custom timing.
    ///
    /// # Panics
    /// Panics if `roles` is empty.
    pub fn with_timing(roles: Vec<String>, timing: Timing) -> Self {
        assert!(!roles.is_empty(), "typewriter requires at least one role");
        Self {
            roles,
            displayed: String::new(),
            role_idx: 0,
            phase: Phase::Typing,
            timing,
        }
    }

    /// The text currently on screen (a prefix of the current role).
    pub fn display(&self) -> &str {
        &self.displayed
    }

    /// Index of the role currently being typed or deleted.
    pub fn role_index(&self) -> usize {
        self.role_idx
    }

    /// The full string of the current role.
    pub fn current_role(&self) -> &str {
        &self.roles[self.role_idx]
    }

    /// Whether the machine is in the deleting phase.
    ///
    /// The hold window counts as "not deleting": deletion only becomes
    /// true once the hold delay has elapsed.
    pub fn is_deleting(&self) -> bool {
        self.phase == Phase::Deleting
    }

    /// Whether the full current role string is on screen.
    pub fn is_complete(&self) -> bool {
        self.displayed.len() == self.current_role().len()
    }

    /// Perform one tick of the cycle and return the delay until the
    /// next tick.
    ///
    /// Exactly one of the following happens per call:
    /// - typing: one more character of the current role is shown
    /// - hold expiry: the machine flips into the deleting phase
    /// - deleting: the last character is removed
    /// - wrap: the empty display moves the machine to the next role
    pub fn advance(&mut self) -> Duration {
        match self.phase {
            Phase::Typing => {
                let role = &self.roles[self.role_idx];
                if let Some(next) = role[self.displayed.len()..].chars().next() {
                    self.displayed.push(next);
                }
                if self.displayed.len() == role.len() {
                    // Hold the completed string before deleting. The
                    // hold is inserted once, at the instant the string
                    // first becomes complete.
                    self.phase = Phase::Holding;
                    Duration::from_millis(self.timing.hold_ms)
                } else {
                    Duration::from_millis(self.timing.type_ms)
                }
            }
            Phase::Holding => {
                self.phase = Phase::Deleting;
                Duration::from_millis(self.timing.delete_ms)
            }
            Phase::Deleting => {
                if self.displayed.is_empty() {
                    // Display reached empty on the previous tick; move
                    // on to the next role (wrapping) and resume typing.
                    self.phase = Phase::Typing;
                    self.role_idx = (self.role_idx + 1) % self.roles.len();
                    Duration::from_millis(self.timing.type_ms)
                } else {
                    self.displayed.pop();
                    Duration::from_millis(self.timing.delete_ms)
                }
            }
        }
    }
}
