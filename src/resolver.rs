use indexmap::IndexSet;
use log::{trace, warn};

use crate::config::EngineConfig;
use crate::knowledge_base::KnowledgeBase;
use crate::substitution::Substitution;
use crate::term::Term;
use crate::unify::unify;

/// A non-fatal event reported during a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A sub-goal sat deeper than the configured bound and was abandoned.
    /// Its branch yields nothing; sibling branches carry on.
    DepthExceeded {
        /// The goal that was not resolved
        goal: Term,
        /// Depth the goal was reached at
        depth: usize,
        /// The configured bound
        max_depth: usize,
    },
}

/// State shared by every call of one search tree
///
/// The visited set is never cleared during a search: once a goal has been
/// entered anywhere in the tree, every later occurrence of the same goal
/// yields nothing.
#[derive(Debug, Default)]
pub struct SearchContext {
    visited: IndexSet<Term>,
    diagnostics: Vec<Diagnostic>,
}

impl SearchContext {
    /// Fresh context for a top-level query
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `goal` has been entered in this search
    #[must_use]
    pub fn is_visited(&self, goal: &Term) -> bool {
        self.visited.contains(goal)
    }

    /// Diagnostics reported so far
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consume the context, keeping its diagnostics
    #[must_use]
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

/// Outcome of a top-level query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Every substitution satisfying the goal, empty if unsatisfied
    pub substitutions: Vec<Substitution>,
    /// Conditions reported along the way
    pub diagnostics: Vec<Diagnostic>,
}

impl Resolution {
    /// Returns true if at least one substitution was found
    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        !self.substitutions.is_empty()
    }

    /// Returns true if some branch was cut off by the depth bound
    #[must_use]
    pub fn depth_exceeded(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d, Diagnostic::DepthExceeded { .. }))
    }
}

/// Backward-chaining search over a knowledge base
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'kb> {
    kb: &'kb KnowledgeBase,
    config: EngineConfig,
}

impl<'kb> Resolver<'kb> {
    /// Create a resolver reading from `kb`
    #[must_use]
    pub fn new(kb: &'kb KnowledgeBase, config: EngineConfig) -> Self {
        Self { kb, config }
    }

    /// Resolve `goal` from depth 0 with a fresh context
    #[must_use]
    pub fn solve(&self, goal: &Term) -> Resolution {
        let mut ctx = SearchContext::new();
        let substitutions = self.resolve(goal, &mut ctx, 0);
        Resolution {
            substitutions,
            diagnostics: ctx.into_diagnostics(),
        }
    }

    /// Find every substitution under which `goal` holds
    ///
    /// Facts are tried first, then rules, both in insertion order. For a
    /// rule whose head unifies, the body is proved left to right: each
    /// partial substitution is applied to the next body goal, that goal is
    /// resolved one level deeper, and each of its answers is merged into a
    /// copy of the partial. A body goal with no answers empties the working
    /// set, dropping the rule.
    ///
    /// Returns nothing when `depth` exceeds the bound (reported as
    /// [`Diagnostic::DepthExceeded`]) or when `goal` was already entered in
    /// this search. The bound is the configured one, clamped to
    /// [`crate::MAX_DEPTH_LIMIT`].
    pub fn resolve(&self, goal: &Term, ctx: &mut SearchContext, depth: usize) -> Vec<Substitution> {
        let max_depth = self.config.effective_max_depth();
        if depth > max_depth {
            warn!("maximum resolution depth {max_depth} exceeded for goal {goal}");
            ctx.diagnostics.push(Diagnostic::DepthExceeded {
                goal: goal.clone(),
                depth,
                max_depth,
            });
            return Vec::new();
        }

        if !ctx.visited.insert(goal.clone()) {
            trace!("goal {goal} already visited, skipping");
            return Vec::new();
        }

        let symbols = self.config.symbols;
        let mut results: Vec<Substitution> = self
            .kb
            .facts()
            .iter()
            .filter_map(|fact| unify(goal, fact, symbols))
            .collect();

        for rule in self.kb.rules() {
            let Some(seed) = unify(goal, &rule.head, symbols) else {
                continue;
            };
            trace!("goal {goal} matched rule {rule} with {seed}");
            results.extend(self.resolve_body(&rule.body, seed, ctx, depth));
        }

        results
    }

    fn resolve_body(
        &self,
        body: &[Term],
        seed: Substitution,
        ctx: &mut SearchContext,
        depth: usize,
    ) -> Vec<Substitution> {
        body.iter().fold(vec![seed], |partials, sub_goal| {
            let mut next = Vec::new();
            for partial in &partials {
                let specialized = partial.apply(sub_goal);
                for found in self.resolve(&specialized, ctx, depth + 1) {
                    next.push(partial.merged_with(&found));
                }
            }
            next
        })
    }
}
