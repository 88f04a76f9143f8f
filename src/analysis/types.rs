use serde::Serialize;

use super::classification::Classification;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedComment {
    pub id: i64,
    pub text: String,
    /// In [-1.0, 1.0]
    pub polarity: f64,
    pub classification: Classification,
}
