use std::fmt;

use crate::term::Term;

/// A rule (e.g. `prijatelj(X, Y) :- voli(X, Y), voli(Y, X)`)
///
/// The head holds when every body term holds under one shared substitution.
/// A rule with an empty body behaves like a fact.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Rule {
    /// The conclusion of the rule
    pub head: Term,
    /// The conditions, proved left to right
    pub body: Vec<Term>,
}

impl Rule {
    /// Create a rule from its head and body
    #[must_use]
    pub fn new(head: Term, body: Vec<Term>) -> Self {
        Self { head, body }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.head)?;
        for (i, goal) in self.body.iter().enumerate() {
            f.write_str(if i == 0 { " :- " } else { ", " })?;
            write!(f, "{goal}")?;
        }
        Ok(())
    }
}

/// Append-only store of facts and rules
///
/// Both collections keep insertion order and allow duplicates. Nothing is
/// ever retracted, and resolution only reads from the store.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    facts: Vec<Term>,
    rules: Vec<Rule>,
}

impl KnowledgeBase {
    /// Create an empty knowledge base
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fact
    pub fn add_fact(&mut self, fact: Term) {
        self.facts.push(fact);
    }

    /// Append a rule
    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Facts in insertion order
    #[must_use]
    pub fn facts(&self) -> &[Term] {
        &self.facts
    }

    /// Rules in insertion order
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Total number of stored facts and rules
    #[must_use]
    pub fn len(&self) -> usize {
        self.facts.len() + self.rules.len()
    }

    /// Returns true if nothing has been added yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty() && self.rules.is_empty()
    }
}
