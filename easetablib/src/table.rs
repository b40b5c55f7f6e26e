//! Table-ready fixture data and its text rendering.
//!
//! This module provides `FixtureTable`, a presentation-ready structure of
//! pre-formatted sample fields that serializes to the pasteable block.
//!
//! The data flow is:
//! 1. Raw samples (per-function f64 values from the sampler)
//! 2. FixtureRow (11 fixed-width fields + source name)
//! 3. FixtureTable (ordered rows, rendered to the final text block)

use serde::{Deserialize, Serialize};

/// Round to 4 decimal places, halves away from zero.
///
/// A result of `-0.0` is normalized to `0.0` so a vanishing negative
/// sample never renders as `-0.0000`.
pub fn round4(value: f64) -> f64 {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Render a sample as a fixed-width field: 4 fractional digits with a
/// reserved sign column (a space stands in for the missing `-` on
/// non-negative values), 7 characters for the usual easing range.
pub fn format_sample(value: f64) -> String {
    let rounded = round4(value);
    if rounded < 0.0 {
        format!("{rounded:.4}")
    } else {
        format!(" {rounded:.4}")
    }
}

/// One fixture row: the formatted samples for a single easing function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureRow {
    /// The easing function the samples came from
    pub name: String,
    /// Fixed-width fields, one per sample point, in increasing t order
    pub samples: Vec<String>,
}

impl FixtureRow {
    /// Build a row by formatting raw sample values.
    pub fn from_values(name: impl Into<String>, values: &[f64]) -> Self {
        Self {
            name: name.into(),
            samples: values.iter().copied().map(format_sample).collect(),
        }
    }

    /// Render the row as one fixture line:
    /// `[ v0, v1, ..., v10, ] //<name>,`
    pub fn render(&self) -> String {
        format!("[{}, ] //{},", self.samples.join(", "), self.name)
    }
}

/// The complete fixture table, rows in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureTable {
    /// Data rows, one per sampled function
    pub rows: Vec<FixtureRow>,
}

impl FixtureTable {
    /// Render the full pasteable block: an outer bracket pair with one
    /// tab-indented row line per function. No trailing newline.
    pub fn render(&self) -> String {
        let mut out = String::from("[\n");
        for row in &self.rows {
            out.push('\t');
            out.push_str(&row.render());
            out.push('\n');
        }
        out.push(']');
        out
    }
}
