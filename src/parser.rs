//! Text syntax for terms and clauses
//!
//! A term is `symbol(arg1, arg2, ...)` with a symbol made of ASCII letters,
//! digits and underscores, and bare tokens as arguments. A clause is a fact
//! `voli(ivan, ana).` or a rule `prijatelj(X, Y) :- voli(X, Y), voli(Y, X).`,
//! the trailing period being optional.

use nom::{
    bytes::complete::{tag, take_while1},
    character::complete::{char, multispace0},
    combinator::{all_consuming, map, map_res, opt},
    multi::separated_list1,
    sequence::{delimited, pair, preceded, terminated, tuple},
    IResult,
};

use crate::error::{Error, Result};
use crate::knowledge_base::Rule;
use crate::term::{Atom, Term};

/// A parsed line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    /// `head.`
    Fact(Term),
    /// `head :- body.`
    Rule(Rule),
}

fn ws<'a, O, F>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    delimited(multispace0, inner, multispace0)
}

fn symbol(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_')(input)
}

fn argument(input: &str) -> IResult<&str, Atom> {
    map(
        take_while1(|c: char| !matches!(c, ',' | '(' | ')') && !c.is_whitespace()),
        Atom::new,
    )(input)
}

fn term(input: &str) -> IResult<&str, Term> {
    map_res(
        pair(
            symbol,
            delimited(char('('), separated_list1(char(','), ws(argument)), char(')')),
        ),
        |(symbol, arguments)| Term::new(symbol, arguments),
    )(input)
}

fn clause(input: &str) -> IResult<&str, Clause> {
    map(
        terminated(
            tuple((
                ws(term),
                opt(preceded(tag(":-"), separated_list1(char(','), ws(term)))),
            )),
            opt(ws(char('.'))),
        ),
        |(head, body)| match body {
            Some(body) => Clause::Rule(Rule::new(head, body)),
            None => Clause::Fact(head),
        },
    )(input)
}

fn malformed(input: &str) -> Error {
    Error::MalformedTerm {
        input: input.trim().to_string(),
    }
}

/// Parse a single term such as `likes(X, ana)`
///
/// Surrounding whitespace is ignored; anything else around the term is not.
///
/// # Errors
///
/// Returns [`Error::MalformedTerm`] if the text is not exactly one term.
pub fn parse_term(input: &str) -> Result<Term> {
    all_consuming(ws(term))(input)
        .map(|(_, term)| term)
        .map_err(|_| malformed(input))
}

/// Parse a fact or a rule, with an optional trailing period
///
/// # Errors
///
/// Returns [`Error::MalformedTerm`] if the text is not a single clause.
pub fn parse_clause(input: &str) -> Result<Clause> {
    all_consuming(clause)(input)
        .map(|(_, clause)| clause)
        .map_err(|_| malformed(input))
}
