use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::info;

use crate::analysis::{annotate, AnnotatedComment, CommentFilter, TimeRange};
use super::error::ApiError;
use super::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CommentsQuery {
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub sort_by_polarity: bool,
}

impl CommentsQuery {
    fn filter(&self) -> CommentFilter {
        CommentFilter {
            range: TimeRange::new(self.start_time, self.end_time),
            sort_by_polarity: self.sort_by_polarity,
        }
    }
}

/// Accepts the usual query-string spellings of a boolean.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_flag(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid boolean: {}", raw)))
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub message: &'static str,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { message: "Service is running." })
}

pub async fn get_comments(
    State(state): State<AppState>,
    Path(subfeddit_id): Path<i64>,
    Query(query): Query<CommentsQuery>,
) -> Result<Json<Vec<AnnotatedComment>>, ApiError> {
    let filter = query.filter();
    info!(
        "Comments requested for subfeddit {} (range {}, sort_by_polarity: {})",
        subfeddit_id, filter.range, filter.sort_by_polarity
    );

    let raw = state.source.fetch_comments(subfeddit_id).await?;
    let fetched = raw.len();
    let comments = annotate(raw, &filter, state.scorer.as_ref());

    info!("Returning {} of {} fetched comments", comments.len(), fetched);
    Ok(Json(comments))
}
