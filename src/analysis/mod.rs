pub mod classification;
pub mod pipeline;
pub mod sentiment;
pub mod types;

pub use classification::Classification;
pub use pipeline::{annotate, CommentFilter, TimeRange};
pub use sentiment::{LexiconScorer, SentimentScorer};
pub use types::AnnotatedComment;
