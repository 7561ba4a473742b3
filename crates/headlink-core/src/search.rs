use crate::heading::parse_heading_line;
use crate::model::{DocumentContent, MatchResult};

/// Collect every heading across `documents` whose heading line contains
/// `query` as a case-insensitive substring.
///
/// The comparison runs against the full heading line (markers included),
/// while the emitted `heading_text` is the stripped text. An empty query
/// matches everything. Results keep document enumeration order, then
/// in-document line order; no relevance ranking is applied.
///
/// Pure and stateless: meant to be re-invoked on every query change, each
/// result set fully replacing the previous one.
pub fn search_headings(documents: &[DocumentContent], query: &str) -> Vec<MatchResult> {
    let needle = query.to_lowercase();
    let mut results = Vec::new();

    for doc in documents {
        for line in doc.content.lines() {
            let Some((_, text)) = parse_heading_line(line) else {
                continue;
            };
            if line.to_lowercase().contains(&needle) {
                results.push(MatchResult {
                    path: doc.path.clone(),
                    heading_text: text,
                });
            }
        }
    }

    results
}

/// The single active search session.
///
/// Owns the document snapshot taken when the session opened, the live
/// query, and the current result set. `set_query` is a full recompute;
/// repeated rapid calls (one per keystroke) are safe since each call
/// replaces the results wholesale.
#[derive(Debug)]
pub struct SearchSession {
    documents: Vec<DocumentContent>,
    query: String,
    results: Vec<MatchResult>,
}

impl SearchSession {
    /// Open a session over `documents` with `initial_query` (lower-cased),
    /// computing the initial result set immediately so results are visible
    /// without further input.
    pub fn open(documents: Vec<DocumentContent>, initial_query: &str) -> Self {
        let query = initial_query.to_lowercase();
        let results = search_headings(&documents, &query);
        Self {
            documents,
            query,
            results,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[MatchResult] {
        &self.results
    }

    /// Replace the query and recompute the result set.
    pub fn set_query(&mut self, query: &str) -> &[MatchResult] {
        self.query = query.to_lowercase();
        self.results = search_headings(&self.documents, &self.query);
        &self.results
    }

    /// Look up a result by display index.
    pub fn select(&self, index: usize) -> Option<&MatchResult> {
        self.results.get(index)
    }
}
