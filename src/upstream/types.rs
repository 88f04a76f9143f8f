use serde::Deserialize;

/// A comment as the Feddit API returns it. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawComment {
    pub id: i64,
    pub text: String,
    /// Unix epoch seconds
    #[serde(default)]
    pub created_at: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommentPage {
    #[serde(default)]
    pub comments: Vec<RawComment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_ignores_extra_fields() {
        let page: CommentPage = serde_json::from_str(
            r#"{"subfeddit_id": 1, "limit": 25, "skip": 0, "comments": [
                {"id": 7, "username": "user_7", "text": "hello", "created_at": 1700000000}
            ]}"#,
        )
        .unwrap();
        assert_eq!(
            page.comments,
            vec![RawComment { id: 7, text: "hello".into(), created_at: Some(1700000000) }]
        );
    }

    #[test]
    fn missing_comments_key_is_empty_page() {
        let page: CommentPage = serde_json::from_str(r#"{"subfeddit_id": 1}"#).unwrap();
        assert!(page.comments.is_empty());
    }

    #[test]
    fn created_at_is_optional() {
        let comment: RawComment = serde_json::from_str(r#"{"id": 1, "text": "hi"}"#).unwrap();
        assert_eq!(comment.created_at, None);
    }

    #[test]
    fn comment_without_text_is_rejected() {
        assert!(serde_json::from_str::<RawComment>(r#"{"id": 1, "created_at": 5}"#).is_err());
        assert!(serde_json::from_str::<RawComment>(r#"{"text": "no id"}"#).is_err());
    }
}
