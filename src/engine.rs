use log::debug;

use crate::config::EngineConfig;
use crate::error::Result;
use crate::knowledge_base::{KnowledgeBase, Rule};
use crate::parser::{parse_clause, parse_term, Clause};
use crate::resolver::{Resolution, Resolver};
use crate::substitution::Substitution;
use crate::term::Term;

/// A session: a knowledge base plus the settings used to query it
#[derive(Debug, Clone, Default)]
pub struct Engine {
    kb: KnowledgeBase,
    config: EngineConfig,
}

impl Engine {
    /// Create an engine with an empty knowledge base and default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with an empty knowledge base
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            kb: KnowledgeBase::new(),
            config,
        }
    }

    /// The settings in use
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The underlying store
    #[must_use]
    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Add a fact
    pub fn add_fact(&mut self, fact: Term) {
        debug!("adding fact {fact}");
        self.kb.add_fact(fact);
    }

    /// Add a rule `head :- body`
    pub fn add_rule(&mut self, head: Term, body: Vec<Term>) {
        let rule = Rule::new(head, body);
        debug!("adding rule {rule}");
        self.kb.add_rule(rule);
    }

    /// Parse and add a fact such as `voli(ivan, ana)`
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MalformedTerm`] if the text is not a term.
    pub fn add_fact_text(&mut self, fact: &str) -> Result<()> {
        let fact = parse_term(fact)?;
        self.add_fact(fact);
        Ok(())
    }

    /// Parse and add a rule given its head and its body terms one by one
    ///
    /// Nothing is added unless every part parses.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MalformedTerm`] for the first part that is not
    /// a term.
    pub fn add_rule_text<S: AsRef<str>>(&mut self, head: &str, body: &[S]) -> Result<()> {
        let head = parse_term(head)?;
        let body = body
            .iter()
            .map(|goal| parse_term(goal.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        self.add_rule(head, body);
        Ok(())
    }

    /// Parse and add a clause, either `fact.` or `head :- body.`
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MalformedTerm`] if the text is not a clause.
    pub fn add_clause_text(&mut self, clause: &str) -> Result<Clause> {
        let clause = parse_clause(clause)?;
        match &clause {
            Clause::Fact(fact) => self.add_fact(fact.clone()),
            Clause::Rule(rule) => self.add_rule(rule.head.clone(), rule.body.clone()),
        }
        Ok(clause)
    }

    /// Facts in insertion order
    #[must_use]
    pub fn list_facts(&self) -> &[Term] {
        self.kb.facts()
    }

    /// Rules in insertion order
    #[must_use]
    pub fn list_rules(&self) -> &[Rule] {
        self.kb.rules()
    }

    /// Resolve an already parsed goal, keeping diagnostics
    #[must_use]
    pub fn resolve(&self, goal: &Term) -> Resolution {
        let resolution = Resolver::new(&self.kb, self.config).solve(goal);
        debug!(
            "query {goal}: {} result(s), {} diagnostic(s)",
            resolution.substitutions.len(),
            resolution.diagnostics.len()
        );
        resolution
    }

    /// Returns all substitutions that make an already parsed goal true
    #[must_use]
    pub fn query_term(&self, goal: &Term) -> Vec<Substitution> {
        self.resolve(goal).substitutions
    }

    /// Parse `goal` and return all substitutions that make it true
    ///
    /// An empty result means the goal is not satisfied.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MalformedTerm`] if the goal text is not a term.
    pub fn query(&self, goal: &str) -> Result<Vec<Substitution>> {
        Ok(self.query_term(&parse_term(goal)?))
    }

    /// Like [`Engine::query`], also reporting depth cut-offs
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MalformedTerm`] if the goal text is not a term.
    pub fn query_with_diagnostics(&self, goal: &str) -> Result<Resolution> {
        Ok(self.resolve(&parse_term(goal)?))
    }

    /// Returns whether the goal has at least one solution
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MalformedTerm`] if the goal text is not a term.
    pub fn ask(&self, goal: &str) -> Result<bool> {
        Ok(!self.query(goal)?.is_empty())
    }
}
