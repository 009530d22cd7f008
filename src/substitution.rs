use indexmap::IndexMap;
use std::fmt;

use crate::term::{Atom, Term};

/// Variable bindings produced by unification
///
/// Maps a variable name to the atom it is bound to. A bound atom may itself
/// be a variable, and bindings are never chased: applying `{X: Y, Y: c}` to
/// `p(X)` gives `p(Y)`. Bindings keep their insertion order so results print
/// the way they were discovered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Substitution {
    bindings: IndexMap<String, Atom>,
}

impl Substitution {
    /// Create an empty substitution
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `variable` to `value`, replacing any previous binding
    ///
    /// A binding of a variable to itself is dropped, so a substitution never
    /// maps a variable onto its own name.
    pub fn bind(&mut self, variable: impl Into<String>, value: Atom) {
        let variable = variable.into();
        if variable == value.name() {
            return;
        }
        self.bindings.insert(variable, value);
    }

    /// Look up the binding of a variable
    #[must_use]
    pub fn get(&self, variable: &str) -> Option<&Atom> {
        self.bindings.get(variable)
    }

    /// Number of bindings
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns true if nothing is bound
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterate over the bindings in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Atom)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Replace every bound variable of `term` by its value, one level deep
    #[must_use]
    pub fn apply(&self, term: &Term) -> Term {
        term.map_arguments(|atom| match atom {
            Atom::Variable(name) => self.bindings.get(name).unwrap_or(atom).clone(),
            Atom::Constant(_) => atom.clone(),
        })
    }

    /// A new substitution holding `self` updated with every entry of `other`
    ///
    /// Neither input is modified. On a key present in both, `other` wins.
    #[must_use]
    pub fn merged_with(&self, other: &Self) -> Self {
        let mut combined = self.clone();
        for (variable, value) in &other.bindings {
            combined.bind(variable.clone(), value.clone());
        }
        combined
    }
}

impl<'a> IntoIterator for &'a Substitution {
    type Item = (&'a String, &'a Atom);
    type IntoIter = indexmap::map::Iter<'a, String, Atom>;

    fn into_iter(self) -> Self::IntoIter {
        self.bindings.iter()
    }
}

impl<K: Into<String>> FromIterator<(K, Atom)> for Substitution {
    fn from_iter<T: IntoIterator<Item = (K, Atom)>>(iter: T) -> Self {
        let mut substitution = Self::new();
        for (variable, value) in iter {
            substitution.bind(variable, value);
        }
        substitution
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (variable, value)) in self.bindings.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{variable}: {value}")?;
        }
        f.write_str("}")
    }
}

/// Render a result set as a JSON array of `{"Variable": "value"}` objects
///
/// # Errors
///
/// Fails only if `serde_json` cannot serialize a string map, which does not
/// happen for well-formed substitutions.
#[cfg(feature = "serde")]
pub fn substitutions_to_json(substitutions: &[Substitution]) -> serde_json::Result<String> {
    serde_json::to_string(substitutions)
}
