use serde::{Deserialize, Serialize};

/// Aggregate channel metrics, fetched fresh on every page load.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct ChannelStats {
    pub subscriber_count: u64,
    pub video_count: u64,
    pub view_count: u64,
}

/// One entry of the latest-uploads feed, assembled from a playlist snippet
/// joined with that video's statistics record.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VideoSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub published_at: String,
    pub view_count: u64,
}
