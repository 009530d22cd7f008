use log::trace;

use crate::config::SymbolMatching;
use crate::substitution::Substitution;
use crate::term::Term;

/// Unify a goal against a fact or rule head, argument by argument
///
/// A single left-to-right pass over the argument pairs:
/// - identical atoms match without binding anything
/// - a variable in the goal binds to the candidate's atom
/// - otherwise a variable in the candidate binds to the goal's atom
/// - two different constants fail
///
/// A later binding of the same variable overwrites an earlier one with no
/// consistency check, so `p(X, X)` unifies with `p(a, b)` giving `{X: b}`.
/// There is no occurs check. Terms of different arity never unify; symbols
/// are compared only under [`SymbolMatching::Exact`].
#[must_use]
pub fn unify(goal: &Term, candidate: &Term, symbols: SymbolMatching) -> Option<Substitution> {
    if goal.arity() != candidate.arity() {
        return None;
    }
    if symbols == SymbolMatching::Exact && goal.symbol() != candidate.symbol() {
        return None;
    }

    let mut substitution = Substitution::new();
    for (g, c) in goal.arguments().iter().zip(candidate.arguments()) {
        if g == c {
            continue;
        }
        if g.is_variable() {
            substitution.bind(g.name(), c.clone());
        } else if c.is_variable() {
            substitution.bind(c.name(), g.clone());
        } else {
            trace!("{goal} does not unify with {candidate}: {g} != {c}");
            return None;
        }
    }
    Some(substitution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::Atom;

    fn term(symbol: &str, args: &[&str]) -> Term {
        Term::new(symbol, args.iter().copied()).unwrap()
    }

    #[test]
    fn test_identical_terms_unify_with_empty_substitution() {
        let fact = term("likes", &["ivan", "ana"]);
        let result = unify(&fact, &fact, SymbolMatching::Ignore).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_goal_variable_binds_to_candidate() {
        let result = unify(
            &term("likes", &["X", "ana"]),
            &term("likes", &["ivan", "ana"]),
            SymbolMatching::Ignore,
        )
        .unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.get("X"), Some(&Atom::new("ivan")));
    }

    #[test]
    fn test_candidate_variable_binds_to_goal() {
        let result = unify(
            &term("likes", &["ivan", "ana"]),
            &term("likes", &["ivan", "Y"]),
            SymbolMatching::Ignore,
        )
        .unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.get("Y"), Some(&Atom::new("ana")));
    }

    #[test]
    fn test_goal_variable_wins_when_both_are_variables() {
        let result = unify(
            &term("p", &["X"]),
            &term("p", &["Y"]),
            SymbolMatching::Ignore,
        )
        .unwrap();
        assert_eq!(result.get("X"), Some(&Atom::new("Y")));
        assert_eq!(result.get("Y"), None);
    }

    #[test]
    fn test_distinct_constants_fail() {
        assert!(unify(
            &term("likes", &["ivan", "ana"]),
            &term("likes", &["ivan", "marko"]),
            SymbolMatching::Ignore,
        )
        .is_none());
    }

    #[test]
    fn test_arity_mismatch_fails() {
        assert!(unify(
            &term("likes", &["a", "b"]),
            &term("likes", &["a", "b", "c"]),
            SymbolMatching::Ignore,
        )
        .is_none());
        assert!(unify(
            &term("likes", &["X", "Y"]),
            &term("likes", &["X", "Y", "Z"]),
            SymbolMatching::Ignore,
        )
        .is_none());
    }

    #[test]
    fn test_symbols_compared_by_default() {
        assert_eq!(SymbolMatching::default(), SymbolMatching::Exact);
        assert!(unify(
            &term("prijatelj", &["ivan", "ana"]),
            &term("voli", &["ivan", "ana"]),
            SymbolMatching::default(),
        )
        .is_none());
    }

    #[test]
    fn test_symbols_ignored_when_requested() {
        let result = unify(
            &term("prijatelj", &["ivan", "ana"]),
            &term("voli", &["ivan", "ana"]),
            SymbolMatching::Ignore,
        );
        assert_eq!(result, Some(Substitution::new()));
    }

    #[test]
    fn test_symbols_compared_when_exact() {
        let result = unify(
            &term("prijatelj", &["ivan", "ana"]),
            &term("voli", &["ivan", "ana"]),
            SymbolMatching::Exact,
        );
        assert!(result.is_none());
    }

    #[test]
    fn test_repeated_variable_last_write_wins() {
        let result = unify(
            &term("p", &["X", "X"]),
            &term("p", &["a", "b"]),
            SymbolMatching::Ignore,
        )
        .unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.get("X"), Some(&Atom::new("b")));
    }
}
