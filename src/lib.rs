//! # logsift - Suppression-Aware Log Line Filter
//!
//! Filters a plain-text log file in one sequential pass: lines matching
//! fixed exclusion substrings are dropped, and runs of lines between a
//! `SEVERE:` marker and the next restart marker (`[test`) are suppressed
//! wholesale.
//!
//! ## Public API
//!
//! ### Filtering (`filter`)
//! - [`LineFilter`] - Line-by-line state machine deciding each line's fate
//! - [`LineDecision`] - Result of feeding a line to the filter
//! - [`ExclusionPatterns`] - The run's fixed exclusion substrings
//!
//! ### Pipeline (`pipeline`)
//! - [`filter_file()`] - Filter one file into another
//! - [`FilterStats`] - Per-run line counters
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum for file access failures
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`

pub mod error;
pub mod filter;
pub mod logging;
pub mod pipeline;

pub use error::{Error, Result};
pub use filter::{ExclusionPatterns, LineDecision, LineFilter};
pub use pipeline::{filter_file, FilterStats};
