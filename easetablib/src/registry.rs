//! Name-to-evaluator registry for easing functions.
//!
//! The registry is an explicit, insertion-ordered table passed to the
//! sampler, so callers (and tests) can substitute stub evaluators instead
//! of relying on an ambient function table.

use crate::ease::{self, EaseFn};
use crate::error::EasetabError;
use crate::Result;

/// An ordered mapping from easing-function name to evaluator.
#[derive(Clone)]
pub struct Registry {
    entries: Vec<(String, EaseFn)>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The full built-in set: `linear`, `swing`, and the 30 classic
    /// `ease*` functions in their canonical family order.
    pub fn builtin() -> Self {
        Self::new()
            .register("linear", ease::linear)
            .register("swing", ease::swing)
            .register("easeInQuad", ease::ease_in_quad)
            .register("easeOutQuad", ease::ease_out_quad)
            .register("easeInOutQuad", ease::ease_in_out_quad)
            .register("easeInCubic", ease::ease_in_cubic)
            .register("easeOutCubic", ease::ease_out_cubic)
            .register("easeInOutCubic", ease::ease_in_out_cubic)
            .register("easeInQuart", ease::ease_in_quart)
            .register("easeOutQuart", ease::ease_out_quart)
            .register("easeInOutQuart", ease::ease_in_out_quart)
            .register("easeInQuint", ease::ease_in_quint)
            .register("easeOutQuint", ease::ease_out_quint)
            .register("easeInOutQuint", ease::ease_in_out_quint)
            .register("easeInSine", ease::ease_in_sine)
            .register("easeOutSine", ease::ease_out_sine)
            .register("easeInOutSine", ease::ease_in_out_sine)
            .register("easeInExpo", ease::ease_in_expo)
            .register("easeOutExpo", ease::ease_out_expo)
            .register("easeInOutExpo", ease::ease_in_out_expo)
            .register("easeInCirc", ease::ease_in_circ)
            .register("easeOutCirc", ease::ease_out_circ)
            .register("easeInOutCirc", ease::ease_in_out_circ)
            .register("easeInElastic", ease::ease_in_elastic)
            .register("easeOutElastic", ease::ease_out_elastic)
            .register("easeInOutElastic", ease::ease_in_out_elastic)
            .register("easeInBack", ease::ease_in_back)
            .register("easeOutBack", ease::ease_out_back)
            .register("easeInOutBack", ease::ease_in_out_back)
            .register("easeInBounce", ease::ease_in_bounce)
            .register("easeOutBounce", ease::ease_out_bounce)
            .register("easeInOutBounce", ease::ease_in_out_bounce)
    }

    /// Builder: add an evaluator under `name`.
    ///
    /// Duplicate names are not rejected; lookup scans newest-first, so a
    /// later registration shadows an earlier one.
    pub fn register(mut self, name: impl Into<String>, f: EaseFn) -> Self {
        self.entries.push((name.into(), f));
        self
    }

    /// Find the evaluator registered under `name`.
    pub fn lookup(&self, name: &str) -> Option<EaseFn> {
        self.entries
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, f)| *f)
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Evaluate the function registered under `name` at `(t, b, c, d)`.
    ///
    /// Fails with [`EasetabError::UnknownFunction`] when the name is not
    /// registered.
    pub fn evaluate(&self, name: &str, t: f64, b: f64, c: f64, d: f64) -> Result<f64> {
        let f = self.lookup(name).ok_or_else(|| EasetabError::UnknownFunction {
            name: name.to_string(),
        })?;
        Ok(f(t, b, c, d))
    }

    /// Registered names, in registration order (duplicates included).
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("names", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_builtin_has_core_set() {
        let reg = Registry::builtin();
        assert_eq!(reg.len(), 32);
        assert!(reg.contains("linear"));
        assert!(reg.contains("swing"));
        assert!(reg.contains("easeInQuad"));
        assert!(reg.contains("easeInOutBounce"));
        assert!(!reg.contains("easeInOutWobble"));
    }

    #[test]
    fn test_evaluate_dispatches_by_name() {
        let reg = Registry::builtin();
        let v = reg.evaluate("easeInQuad", 0.5, 0.0, 1.0, 1.0).unwrap();
        assert_relative_eq!(v, 0.25);
    }

    #[test]
    fn test_evaluate_unknown_name_fails() {
        let reg = Registry::builtin();
        let err = reg.evaluate("nope", 0.5, 0.0, 1.0, 1.0).unwrap_err();
        assert!(matches!(
            err,
            EasetabError::UnknownFunction { ref name } if name == "nope"
        ));
    }

    #[test]
    fn test_later_registration_shadows_earlier() {
        let reg = Registry::builtin().register("easeInQuad", |t, b, c, d| c * t / d + b);
        let v = reg.evaluate("easeInQuad", 0.5, 0.0, 1.0, 1.0).unwrap();
        assert_relative_eq!(v, 0.5);
        // Both entries remain; only lookup order changed.
        assert_eq!(reg.len(), 33);
    }

    #[test]
    fn test_empty_registry() {
        let reg = Registry::new();
        assert!(reg.is_empty());
        assert_eq!(reg.names().count(), 0);
    }
}
