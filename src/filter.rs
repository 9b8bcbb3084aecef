//! Suppression-aware line filter.
//!
//! Provides a line-by-line state machine that drops lines matching fixed
//! exclusion substrings and suppresses whole runs of lines between a
//! `SEVERE:` marker and the next restart marker (`[test`).

use chrono::{Datelike, Local};

/// Marker that opens a suppression window.
const SEVERE_MARKER: &str = "SEVERE:";

/// Marker that closes a suppression window (a service restart banner).
const RESTART_MARKER: &str = "[test";

/// Exclusion substring present on every run.
const INFO_MARKER: &str = "INFO:";

// ─────────────────────────────────────────────────────────────────────────────
// Types
// ─────────────────────────────────────────────────────────────────────────────

/// The fixed exclusion substrings for one run.
///
/// Matching is plain substring containment, never regex or anchoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionPatterns {
    /// Date string in `"Mon D"` form (e.g. `"Jan 5"`), no leading zero.
    today: String,
}

impl ExclusionPatterns {
    /// Build patterns with an explicit date string.
    ///
    /// Used by tests to keep the filter deterministic regardless of the
    /// system clock.
    pub fn new(today: impl Into<String>) -> Self {
        Self {
            today: today.into(),
        }
    }

    /// Build patterns from the local wall clock.
    ///
    /// Computed once per run; the date filter stays constant even if
    /// execution spans midnight.
    pub fn for_today() -> Self {
        let now = Local::now();
        Self::new(format!("{} {}", now.format("%b"), now.day()))
    }

    /// The date string lines are matched against.
    pub fn today(&self) -> &str {
        &self.today
    }

    /// Whether a line matches any exclusion substring.
    fn excludes(&self, line: &str) -> bool {
        line.contains(INFO_MARKER) || line.contains(&self.today)
    }
}

/// Decision for a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineDecision {
    /// Line passes all filters and goes to the output.
    Keep,

    /// Line falls inside a suppression window (or opened one).
    Suppressed,

    /// Line matched an exclusion substring.
    Excluded,
}

// ─────────────────────────────────────────────────────────────────────────────
// Filter
// ─────────────────────────────────────────────────────────────────────────────

/// Line-by-line filter state machine.
///
/// Feed lines in input order; the only carried state is whether the filter
/// is currently inside a suppression window.
#[derive(Debug)]
pub struct LineFilter {
    patterns: ExclusionPatterns,

    /// True while skipping lines after a `SEVERE:` marker.
    suppressing: bool,
}

impl LineFilter {
    pub fn new(patterns: ExclusionPatterns) -> Self {
        Self {
            patterns,
            suppressing: false,
        }
    }

    /// Whether the filter is currently inside a suppression window.
    pub fn is_suppressing(&self) -> bool {
        self.suppressing
    }

    /// Feed one line and decide its fate.
    ///
    /// The checks run in a fixed order: a restart marker first closes an
    /// open suppression window, then the same line is re-examined like any
    /// other — so a line carrying both `[test` and `SEVERE:` closes the
    /// window and immediately opens a new one.
    pub fn feed_line(&mut self, line: &str) -> LineDecision {
        if self.suppressing && line.contains(RESTART_MARKER) {
            self.suppressing = false;
        }

        if self.suppressing {
            return LineDecision::Suppressed;
        }

        if line.contains(SEVERE_MARKER) {
            self.suppressing = true;
            return LineDecision::Suppressed;
        }

        if self.patterns.excludes(line) {
            return LineDecision::Excluded;
        }

        LineDecision::Keep
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
