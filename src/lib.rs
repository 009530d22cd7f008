//! # Microprolog
//!
//! A minimal backward-chaining resolution engine over flat terms.
//!
//! ## Features
//!
//! - Facts and Horn-style rules over single-level terms
//! - Depth-first resolution with a depth bound and a visited-goal guard
//! - Text syntax for terms and clauses
//!
//! ## Example
//!
//! ```rust
//! use microprolog::Engine;
//!
//! let mut engine = Engine::new();
//! engine.add_fact_text("voli(ivan, ana)").unwrap();
//! engine.add_fact_text("voli(ana, ivan)").unwrap();
//! engine
//!     .add_rule_text("prijatelj(X, Y)", &["voli(X, Y)", "voli(Y, X)"])
//!     .unwrap();
//!
//! let results = engine.query("prijatelj(ivan, ana)").unwrap();
//! assert!(!results.is_empty());
//! ```

/// Engine settings.
pub mod config;
/// Session facade.
pub mod engine;
/// Error types.
pub mod error;
/// Fact and rule storage.
pub mod knowledge_base;
/// Term and clause text syntax.
pub mod parser;
/// Goal resolution.
pub mod resolver;
/// Variable bindings.
pub mod substitution;
/// Atoms and terms.
pub mod term;
/// Argument-wise unification.
pub mod unify;

pub use config::{EngineConfig, SymbolMatching, DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT};
pub use engine::Engine;
pub use error::{Error, Result};
pub use knowledge_base::{KnowledgeBase, Rule};
pub use parser::{parse_clause, parse_term, Clause};
pub use resolver::{Diagnostic, Resolution, Resolver, SearchContext};
#[cfg(feature = "serde")]
pub use substitution::substitutions_to_json;
pub use substitution::Substitution;
pub use term::{Atom, Term};
pub use unify::unify;
