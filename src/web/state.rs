use std::sync::Arc;

use crate::analysis::SentimentScorer;
use crate::upstream::CommentSource;

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn CommentSource>,
    pub scorer: Arc<dyn SentimentScorer>,
}

impl AppState {
    pub fn new(source: Arc<dyn CommentSource>, scorer: Arc<dyn SentimentScorer>) -> Self {
        Self { source, scorer }
    }
}
