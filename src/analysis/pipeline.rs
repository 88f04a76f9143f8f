use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::fmt;

use crate::upstream::RawComment;
use super::classification::Classification;
use super::sentiment::SentimentScorer;
use super::types::AnnotatedComment;

/// Inclusive creation-time window in Unix epoch seconds. An absent bound is
/// open; a bound of 0 is a real bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeRange {
    pub start: Option<i64>,
    pub end: Option<i64>,
}

impl TimeRange {
    pub fn new(start: Option<i64>, end: Option<i64>) -> Self {
        Self { start, end }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Comments without a timestamp only pass an unbounded range.
    pub fn contains(&self, created_at: Option<i64>) -> bool {
        match created_at {
            Some(t) => {
                self.start.map_or(true, |start| t >= start) && self.end.map_or(true, |end| t <= end)
            }
            None => self.is_unbounded(),
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn bound(ts: Option<i64>) -> String {
            match ts {
                Some(t) => DateTime::<Utc>::from_timestamp(t, 0)
                    .map(|dt| dt.to_rfc3339())
                    .unwrap_or_else(|| t.to_string()),
                None => "*".to_string(),
            }
        }
        write!(f, "[{} .. {}]", bound(self.start), bound(self.end))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommentFilter {
    pub range: TimeRange,
    pub sort_by_polarity: bool,
}

/// Drops comments outside the time range, scores and classifies the rest,
/// and optionally orders them by descending polarity. Ties keep upstream order.
pub fn annotate(
    comments: Vec<RawComment>,
    filter: &CommentFilter,
    scorer: &dyn SentimentScorer,
) -> Vec<AnnotatedComment> {
    let mut annotated: Vec<AnnotatedComment> = comments
        .into_iter()
        .filter(|c| filter.range.contains(c.created_at))
        .map(|c| {
            let polarity = scorer.score(&c.text);
            AnnotatedComment {
                id: c.id,
                text: c.text,
                polarity,
                classification: Classification::from_polarity(polarity),
            }
        })
        .collect();

    if filter.sort_by_polarity {
        // sort_by is stable
        annotated.sort_by(|a, b| b.polarity.partial_cmp(&a.polarity).unwrap_or(Ordering::Equal));
    }

    annotated
}
