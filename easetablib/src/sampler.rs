//! Sampling loop: evaluate named easing functions over the fixture grid.
//!
//! Every function is sampled at the 11 fixed points with the auxiliary
//! parameters pinned to `(b, c, d) = (0, 1, 1)`, the normalized tween the
//! fixture tables are written against.

use crate::error::EasetabError;
use crate::registry::Registry;
use crate::table::{format_sample, FixtureRow, FixtureTable};
use crate::Result;

/// The fixed sample grid: 11 evenly spaced points over the closed unit
/// interval, in increasing order.
pub const SAMPLE_POINTS: [f64; 11] = [0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0];

/// The functions the shipped fixture table covers, in output order.
pub const FIXTURE_FUNCTIONS: [&str; 30] = [
    "easeInQuad",
    "easeOutQuad",
    "easeInOutQuad",
    "easeInCubic",
    "easeOutCubic",
    "easeInOutCubic",
    "easeInQuart",
    "easeOutQuart",
    "easeInOutQuart",
    "easeInQuint",
    "easeOutQuint",
    "easeInOutQuint",
    "easeInSine",
    "easeOutSine",
    "easeInOutSine",
    "easeInExpo",
    "easeOutExpo",
    "easeInOutExpo",
    "easeInCirc",
    "easeOutCirc",
    "easeInOutCirc",
    "easeInElastic",
    "easeOutElastic",
    "easeInOutElastic",
    "easeInBack",
    "easeOutBack",
    "easeInOutBack",
    "easeInBounce",
    "easeOutBounce",
    "easeInOutBounce",
];

/// Sample one function over [`SAMPLE_POINTS`] into a formatted row.
///
/// Fails with [`EasetabError::UnknownFunction`] when `name` is not in the
/// registry, or [`EasetabError::NonFiniteSample`] when the evaluator
/// returns NaN or an infinity.
pub fn sample_row(registry: &Registry, name: &str) -> Result<FixtureRow> {
    let mut samples = Vec::with_capacity(SAMPLE_POINTS.len());
    for t in SAMPLE_POINTS {
        let value = registry.evaluate(name, t, 0.0, 1.0, 1.0)?;
        if !value.is_finite() {
            return Err(EasetabError::NonFiniteSample {
                name: name.to_string(),
                t,
                value,
            });
        }
        samples.push(format_sample(value));
    }
    Ok(FixtureRow {
        name: name.to_string(),
        samples,
    })
}

/// Sample every name in `names`, preserving input order verbatim.
///
/// Names are neither sorted nor deduplicated. The first failure aborts
/// the run; no partial table is returned.
pub fn sample_table<'a, I>(registry: &Registry, names: I) -> Result<FixtureTable>
where
    I: IntoIterator<Item = &'a str>,
{
    let rows = names
        .into_iter()
        .map(|name| sample_row(registry, name))
        .collect::<Result<Vec<_>>>()?;
    Ok(FixtureTable { rows })
}
