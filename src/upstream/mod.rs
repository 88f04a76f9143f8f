pub mod client;
pub mod error;
pub mod types;

pub use client::{CommentSource, FedditClient};
pub use error::UpstreamError;
pub use types::RawComment;
