//! Parser for serialized queries.
//!
//! A query arrives as `"<s>,<p>,<o>;<s>,<p>,<o>;...;"`: triples of
//! comma-separated integers, `;`-separated, with a trailing `;` after the
//! last triple. Parsing annotates every pattern with its join candidates
//! and fixes the row order used for the rest of the episode.

use crate::query::triple::Triple;
use thiserror::Error;

/// Errors raised while parsing a serialized query string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("query contains no triple patterns")]
    EmptyQuery,

    #[error("query must end with a ';' terminator")]
    UnterminatedQuery,

    #[error("invalid triple pattern '{0}': expected three comma-separated integers")]
    InvalidTriple(String),
}

pub type ParseResult<T> = Result<T, ParseError>;

/// One pattern of a query together with the other patterns it can join
/// with, in query order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPattern {
    pub triple: Triple,
    pub candidates: Vec<Triple>,
}

/// A parsed query: patterns sorted by predicate ascending, each carrying
/// its join candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    patterns: Vec<QueryPattern>,
}

impl ParsedQuery {
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn patterns(&self) -> &[QueryPattern] {
        &self.patterns
    }

    pub fn triples(&self) -> impl Iterator<Item = &Triple> {
        self.patterns.iter().map(|p| &p.triple)
    }
}

/// Parse a serialized query string.
///
/// Candidate discovery runs over the patterns in input order, so every
/// candidate list follows query order. A pair of patterns sharing several
/// variables still yields a single candidate entry per side. Afterwards
/// the pattern list is stably sorted by predicate; the resulting
/// positions are the grid row indices for the whole episode.
pub fn parse(input: &str) -> ParseResult<ParsedQuery> {
    let body = input
        .trim()
        .strip_suffix(';')
        .ok_or(ParseError::UnterminatedQuery)?;
    if body.is_empty() {
        return Err(ParseError::EmptyQuery);
    }

    let triples: Vec<Triple> = body
        .split(';')
        .map(parse_triple)
        .collect::<ParseResult<_>>()?;

    let mut patterns: Vec<QueryPattern> = triples
        .iter()
        .map(|triple| QueryPattern {
            triple: *triple,
            candidates: candidates_of(triple, &triples),
        })
        .collect();

    patterns.sort_by_key(|p| p.triple.predicate);

    Ok(ParsedQuery { patterns })
}

fn candidates_of(triple: &Triple, all: &[Triple]) -> Vec<Triple> {
    all.iter()
        .filter(|other| *other != triple && triple.shares_variable(other))
        .copied()
        .collect()
}

fn parse_triple(segment: &str) -> ParseResult<Triple> {
    let invalid = || ParseError::InvalidTriple(segment.trim().to_string());

    let mut components = [0i64; 3];
    let mut tokens = segment.split(',');
    for slot in &mut components {
        *slot = tokens
            .next()
            .and_then(|token| token.trim().parse().ok())
            .ok_or_else(invalid)?;
    }
    if tokens.next().is_some() {
        return Err(invalid());
    }

    Ok(Triple::new(components[0], components[1], components[2]))
}
