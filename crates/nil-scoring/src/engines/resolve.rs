//! Ordered resolution of a single value from several candidate sources.
//!
//! Snapshots frequently carry the same fact in more than one place (a profile-level
//! follower count and per-platform stat rows, a deal jurisdiction and the athlete's
//! home state). `FieldResolver` makes the precedence explicit: candidates are
//! consulted in declaration order, the first present one wins, and a named default
//! applies when none is present.

use serde::Serialize;

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolvedFrom {
    Candidate(&'static str),
    Default,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<T> {
    pub value: T,
    pub source: ResolvedFrom,
}

impl<T> Resolved<T> {
    pub fn is_default(&self) -> bool {
        self.source == ResolvedFrom::Default
    }
}

#[derive(Debug)]
pub struct FieldResolver<T> {
    field: &'static str,
    winner: Option<(T, &'static str)>,
}

impl<T> FieldResolver<T> {
    pub fn new(field: &'static str) -> Self {
        Self {
            field,
            winner: None,
        }
    }

    /// Later candidates are ignored once an earlier one supplied a value.
    pub fn candidate(mut self, source: &'static str, value: Option<T>) -> Self {
        if self.winner.is_none() {
            if let Some(value) = value {
                self.winner = Some((value, source));
            }
        }
        self
    }

    /// Lazily evaluated candidate for sources that are costly to derive.
    pub fn candidate_with<F>(self, source: &'static str, derive: F) -> Self
    where
        F: FnOnce() -> Option<T>,
    {
        if self.winner.is_some() {
            return self;
        }
        self.candidate(source, derive())
    }

    pub fn or_default(self, default: T) -> Resolved<T> {
        match self.winner {
            Some((value, source)) => {
                tracing::debug!(field = self.field, source, "resolved from candidate");
                Resolved {
                    value,
                    source: ResolvedFrom::Candidate(source),
                }
            }
            None => {
                tracing::debug!(field = self.field, "no candidate present, using default");
                Resolved {
                    value: default,
                    source: ResolvedFrom::Default,
                }
            }
        }
    }
}

/// Treats blank strings the same as missing ones.
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
