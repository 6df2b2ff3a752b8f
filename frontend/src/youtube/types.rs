//! Response shapes for the three YouTube Data API v3 request forms this app
//! issues. Only the fields that are actually read are modelled.

use serde::Deserialize;

// channels?part=statistics
#[derive(Debug, Deserialize)]
pub struct ChannelStatsResponse {
    #[serde(default)]
    pub items: Vec<ChannelStatsItem>,
}

#[derive(Debug, Deserialize)]
pub struct ChannelStatsItem {
    pub statistics: ChannelStatistics,
}

// The API serialises all counts as decimal strings.
#[derive(Debug, Deserialize)]
pub struct ChannelStatistics {
    #[serde(rename = "subscriberCount", default)]
    pub subscriber_count: String,
    #[serde(rename = "videoCount", default)]
    pub video_count: String,
    #[serde(rename = "viewCount", default)]
    pub view_count: String,
}

// channels?part=contentDetails
#[derive(Debug, Deserialize)]
pub struct ChannelContentResponse {
    #[serde(default)]
    pub items: Vec<ChannelContentItem>,
}

#[derive(Debug, Deserialize)]
pub struct ChannelContentItem {
    #[serde(rename = "contentDetails")]
    pub content_details: ContentDetails,
}

#[derive(Debug, Deserialize)]
pub struct ContentDetails {
    #[serde(rename = "relatedPlaylists")]
    pub related_playlists: RelatedPlaylists,
}

#[derive(Debug, Deserialize)]
pub struct RelatedPlaylists {
    pub uploads: String,
}

// playlistItems?part=snippet
#[derive(Debug, Deserialize)]
pub struct PlaylistItemsResponse {
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistItem {
    pub snippet: PlaylistSnippet,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistSnippet {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "publishedAt")]
    pub published_at: String,
    #[serde(default)]
    pub thumbnails: Thumbnails,
    #[serde(rename = "resourceId")]
    pub resource_id: ResourceId,
}

#[derive(Debug, Deserialize, Default)]
pub struct Thumbnails {
    pub medium: Option<Thumbnail>,
    pub high: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct ResourceId {
    #[serde(rename = "videoId")]
    pub video_id: String,
}

// videos?part=statistics
#[derive(Debug, Deserialize)]
pub struct VideoStatsResponse {
    #[serde(default)]
    pub items: Vec<VideoStatsItem>,
}

#[derive(Debug, Deserialize)]
pub struct VideoStatsItem {
    pub id: String,
    #[serde(default)]
    pub statistics: VideoStatistics,
}

#[derive(Debug, Deserialize, Default)]
pub struct VideoStatistics {
    #[serde(rename = "viewCount", default)]
    pub view_count: String,
}

/// Parses the API's string-encoded counts. A missing or hidden count comes
/// through as an empty string and lands on zero.
pub fn parse_count(raw: &str) -> u64 {
    raw.parse().unwrap_or(0)
}
