use smallvec::SmallVec;
use std::fmt;

use crate::error::{Error, Result};

/// A single argument of a term
///
/// The kind is decided once, from the text: a token starting with an
/// uppercase letter is a variable (`X`, `Person`), anything else is a
/// constant (`ivan`, `42`, `_x`).
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum Atom {
    /// A variable that can be bound during unification (e.g. `X`)
    Variable(String),
    /// A concrete constant (e.g. `ivan`)
    Constant(String),
}

impl Atom {
    /// Classify a token by the capitalization convention
    ///
    /// Only the first character counts, so `Ivan` is a variable. Programs
    /// written for the convention where only all-uppercase tokens are
    /// variables should lowercase names like `Ivan` to keep them constant.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        if token.chars().next().is_some_and(char::is_uppercase) {
            Self::Variable(token)
        } else {
            Self::Constant(token)
        }
    }

    /// The text of the atom, regardless of its kind
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Variable(name) | Self::Constant(name) => name,
        }
    }

    /// Returns true for variables
    #[must_use]
    pub fn is_variable(&self) -> bool {
        matches!(self, Self::Variable(_))
    }
}

impl From<&str> for Atom {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for Atom {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}

impl From<Atom> for String {
    fn from(atom: Atom) -> Self {
        match atom {
            Atom::Variable(name) | Atom::Constant(name) => name,
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Arguments are short in practice, so keep up to four inline
pub type Arguments = SmallVec<[Atom; 4]>;

/// A flat predicate application (e.g. `likes(ivan, X)`)
///
/// Terms are immutable: the symbol is non-empty and the arity is at least
/// one, both checked by [`Term::new`]. Two terms are equal when their
/// symbols and all their arguments are equal, which is what the resolver
/// uses to recognise a goal it is already working on.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Term {
    symbol: String,
    arguments: Arguments,
}

impl Term {
    /// Build a term from a symbol and its arguments
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySymbol`] for an empty symbol and
    /// [`Error::NoArguments`] when no arguments are given.
    pub fn new<I, A>(symbol: impl Into<String>, arguments: I) -> Result<Self>
    where
        I: IntoIterator<Item = A>,
        A: Into<Atom>,
    {
        let symbol = symbol.into();
        if symbol.is_empty() {
            return Err(Error::EmptySymbol);
        }
        let arguments: Arguments = arguments.into_iter().map(Into::into).collect();
        if arguments.is_empty() {
            return Err(Error::NoArguments { symbol });
        }
        Ok(Self { symbol, arguments })
    }

    /// The predicate symbol
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The arguments, in order
    #[must_use]
    pub fn arguments(&self) -> &[Atom] {
        &self.arguments
    }

    /// Number of arguments
    #[must_use]
    pub fn arity(&self) -> usize {
        self.arguments.len()
    }

    /// Returns true if any argument is a variable
    #[must_use]
    pub fn has_variables(&self) -> bool {
        self.arguments.iter().any(Atom::is_variable)
    }

    /// Same symbol, arguments rewritten one by one. Arity is preserved.
    pub(crate) fn map_arguments<F>(&self, f: F) -> Self
    where
        F: FnMut(&Atom) -> Atom,
    {
        Self {
            symbol: self.symbol.clone(),
            arguments: self.arguments.iter().map(f).collect(),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.symbol)?;
        for (i, argument) in self.arguments.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{argument}")?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalized_tokens_are_variables() {
        assert!(Atom::new("X").is_variable());
        assert!(Atom::new("Person").is_variable());
        assert!(Atom::new("Ivan").is_variable());
        assert!(!Atom::new("ivan").is_variable());
        assert!(!Atom::new("42").is_variable());
        assert!(!Atom::new("_X").is_variable());
    }

    #[test]
    fn test_capitalized_names_are_not_ground() {
        let fact = Term::new("voli", ["Ivan", "Ivana"]).unwrap();
        assert!(fact.arguments().iter().all(Atom::is_variable));

        let fact = Term::new("voli", ["ivan", "ivana"]).unwrap();
        assert!(!fact.arguments().iter().any(Atom::is_variable));
    }

    #[test]
    fn test_term_rejects_empty_symbol() {
        assert_eq!(Term::new("", ["a"]), Err(Error::EmptySymbol));
    }

    #[test]
    fn test_term_rejects_zero_arity() {
        let no_args: [&str; 0] = [];
        assert_eq!(
            Term::new("p", no_args),
            Err(Error::NoArguments {
                symbol: "p".to_string()
            })
        );
    }

    #[test]
    fn test_term_accessors() {
        let term = Term::new("likes", ["ivan", "X"]).unwrap();
        assert_eq!(term.symbol(), "likes");
        assert_eq!(term.arity(), 2);
        assert_eq!(
            term.arguments(),
            &[
                Atom::Constant("ivan".to_string()),
                Atom::Variable("X".to_string())
            ]
        );
        assert!(term.has_variables());
    }

    #[test]
    fn test_term_display() {
        let term = Term::new("voli", ["ivan", "ana"]).unwrap();
        assert_eq!(term.to_string(), "voli(ivan, ana)");
    }

    #[test]
    fn test_structural_equality() {
        let a = Term::new("p", ["a", "X"]).unwrap();
        let b = Term::new("p", ["a", "X"]).unwrap();
        let c = Term::new("q", ["a", "X"]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_map_arguments_keeps_symbol_and_arity() {
        let term = Term::new("p", ["X", "b"]).unwrap();
        let mapped = term.map_arguments(|_| Atom::new("z"));
        assert_eq!(mapped.symbol(), "p");
        assert_eq!(mapped.to_string(), "p(z, z)");
    }
}
