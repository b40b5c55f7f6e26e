//! # easetablib
//!
//! Samples named easing (tweening) functions over a fixed grid and formats
//! the results as a fixed-width fixture table, ready to paste into a unit
//! test suite as expected values.
//!
//! ## Overview
//!
//! Easing math is easy to get subtly wrong when porting between libraries.
//! The usual defense is a literal table of known-good samples checked into
//! the test suite. This library generates that table: for an ordered list
//! of function names it evaluates each one at t = 0.0, 0.1, ..., 1.0 with
//! the tween parameters pinned to start = 0, change = 1, duration = 1,
//! rounds to 4 decimal places, and renders 7-character fixed-width fields
//! so the pasted rows line up column for column.
//!
//! - **Explicit registry**: functions are looked up in a [`Registry`]
//!   passed by the caller, so tests can substitute stubs
//! - **Built-in set**: `linear`, `swing`, and the 30 classic `ease*`
//!   functions (Quad through Bounce, In/Out/InOut)
//! - **Fail-fast**: an unknown name or a non-finite sample aborts the run
//!   with no partial output
//! - **Pure data types**: sampling returns a [`FixtureTable`]; rendering
//!   to text is a separate, deterministic step
//!
//! ## Example
//!
//! ```rust
//! use easetablib::{sample_row, sample_table, Registry, FIXTURE_FUNCTIONS};
//!
//! let registry = Registry::builtin();
//!
//! // One row: easeInQuad starts at 0.0000 and ends at 1.0000.
//! let row = sample_row(&registry, "easeInQuad").unwrap();
//! assert_eq!(row.samples.len(), 11);
//! assert_eq!(row.samples[0], " 0.0000");
//! assert_eq!(row.samples[10], " 1.0000");
//!
//! // The full shipped table: 30 rows inside the outer brackets.
//! let table = sample_table(&registry, FIXTURE_FUNCTIONS).unwrap();
//! assert_eq!(table.rows.len(), 30);
//! assert!(table.render().starts_with("[\n\t[ 0.0000,"));
//!
//! // Stub substitution for testing the pipeline itself.
//! let stub = Registry::new().register("linear", |t, b, c, d| b + c * t / d);
//! let row = sample_row(&stub, "linear").unwrap();
//! assert_eq!(row.samples[3], " 0.3000");
//! ```

pub mod ease;
pub mod error;
pub mod registry;
pub mod sampler;
pub mod table;

pub use ease::EaseFn;
pub use error::EasetabError;
pub use registry::Registry;
pub use sampler::{sample_row, sample_table, FIXTURE_FUNCTIONS, SAMPLE_POINTS};
pub use table::{format_sample, round4, FixtureRow, FixtureTable};

/// Result type for easetablib operations
pub type Result<T> = std::result::Result<T, EasetabError>;
