use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

use crate::config::{CHANNEL_ID, YOUTUBE_API_BASE, YOUTUBE_API_KEY};
use crate::models::{ChannelStats, VideoSummary};
use crate::youtube::types::*;

/// Fetches the channel's aggregate statistics.
///
/// Every failure mode (network, non-2xx status, unexpected body, empty item
/// list) collapses to `None`; callers leave whatever is already on the page
/// untouched.
pub async fn fetch_channel_stats() -> Option<ChannelStats> {
    match try_fetch_channel_stats().await {
        Ok(stats) => Some(stats),
        Err(e) => {
            report_error("Error fetching channel stats", &e);
            None
        }
    }
}

/// Fetches the channel's most recent uploads, newest first, via the uploads
/// playlist: resolve the playlist id, list its head, then pull view counts
/// for the whole batch in one request.
///
/// Failures at any stage discard the partial pipeline and return an empty
/// list; no error escapes to the caller.
pub async fn fetch_latest_videos(max_results: u32) -> Vec<VideoSummary> {
    match try_fetch_latest_videos(max_results).await {
        Ok(videos) => videos,
        Err(e) => {
            report_error("Error fetching latest videos", &e);
            Vec::new()
        }
    }
}

async fn try_fetch_channel_stats() -> Result<ChannelStats, String> {
    let url = format!(
        "{YOUTUBE_API_BASE}/channels?part=statistics&id={CHANNEL_ID}&key={YOUTUBE_API_KEY}"
    );
    let data: ChannelStatsResponse = get_json(&url).await?;

    let item = data
        .items
        .first()
        .ok_or_else(|| "channel not present in response".to_string())?;

    Ok(ChannelStats {
        subscriber_count: parse_count(&item.statistics.subscriber_count),
        video_count: parse_count(&item.statistics.video_count),
        view_count: parse_count(&item.statistics.view_count),
    })
}

async fn try_fetch_latest_videos(max_results: u32) -> Result<Vec<VideoSummary>, String> {
    // Stage 1: the uploads playlist id lives in the channel's contentDetails.
    let url = format!(
        "{YOUTUBE_API_BASE}/channels?part=contentDetails&id={CHANNEL_ID}&key={YOUTUBE_API_KEY}"
    );
    let channel: ChannelContentResponse = get_json(&url).await?;

    let uploads_playlist_id = match channel.items.first() {
        Some(item) => item.content_details.related_playlists.uploads.clone(),
        None => return Ok(Vec::new()),
    };

    // Stage 2: the head of the uploads playlist, in the API's own order.
    let url = format!(
        "{YOUTUBE_API_BASE}/playlistItems?part=snippet&playlistId={}&maxResults={max_results}&key={YOUTUBE_API_KEY}",
        urlencoding::encode(&uploads_playlist_id)
    );
    let playlist: PlaylistItemsResponse = get_json(&url).await?;
    if playlist.items.is_empty() {
        return Ok(Vec::new());
    }

    // Stage 3: view counts for the whole batch in one combined request.
    let video_ids = playlist
        .items
        .iter()
        .map(|item| item.snippet.resource_id.video_id.as_str())
        .collect::<Vec<_>>()
        .join(",");
    let url = format!(
        "{YOUTUBE_API_BASE}/videos?part=statistics&id={}&key={YOUTUBE_API_KEY}",
        urlencoding::encode(&video_ids)
    );
    let stats: VideoStatsResponse = get_json(&url).await?;

    Ok(merge_view_counts(playlist.items, stats.items))
}

/// Joins playlist snippets with their statistics records by video id. A
/// snippet without a matching record keeps its place with a zero view count.
fn merge_view_counts(items: Vec<PlaylistItem>, stats: Vec<VideoStatsItem>) -> Vec<VideoSummary> {
    let views_by_id: HashMap<String, u64> = stats
        .into_iter()
        .map(|item| (item.id, parse_count(&item.statistics.view_count)))
        .collect();

    items
        .into_iter()
        .map(|item| {
            let snippet = item.snippet;
            let id = snippet.resource_id.video_id;
            let thumbnail_url = snippet
                .thumbnails
                .high
                .or(snippet.thumbnails.medium)
                .map(|t| t.url)
                .unwrap_or_default();

            VideoSummary {
                view_count: views_by_id.get(&id).copied().unwrap_or(0),
                id,
                title: snippet.title,
                description: snippet.description,
                thumbnail_url,
                published_at: snippet.published_at,
            }
        })
        .collect()
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("JSON parse error: {e}"))
}

fn report_error(context: &str, error: &str) {
    log::error!("{context}: {error}");
    web_sys::console::error_1(&format!("{context}: {error}").into());
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn playlist_item(video_id: &str, title: &str) -> PlaylistItem {
        serde_json::from_value(json!({
            "snippet": {
                "title": title,
                "description": "an audio story",
                "publishedAt": "2026-02-01T10:00:00Z",
                "thumbnails": {
                    "medium": { "url": format!("https://i.ytimg.com/vi/{video_id}/mq.jpg") },
                    "high": { "url": format!("https://i.ytimg.com/vi/{video_id}/hq.jpg") },
                },
                "resourceId": { "videoId": video_id },
            }
        }))
        .unwrap()
    }

    fn stats_item(video_id: &str, views: &str) -> VideoStatsItem {
        serde_json::from_value(json!({
            "id": video_id,
            "statistics": { "viewCount": views },
        }))
        .unwrap()
    }

    #[test]
    fn test_merge_joins_views_by_id() {
        let merged = merge_view_counts(
            vec![playlist_item("aaa", "First"), playlist_item("bbb", "Second")],
            vec![stats_item("bbb", "250"), stats_item("aaa", "1200")],
        );

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].id, "aaa");
        assert_eq!(merged[0].view_count, 1200);
        assert_eq!(merged[1].id, "bbb");
        assert_eq!(merged[1].view_count, 250);
    }

    #[test]
    fn test_merge_missing_stats_record_defaults_to_zero() {
        let merged = merge_view_counts(
            vec![playlist_item("aaa", "First"), playlist_item("bbb", "Second")],
            vec![stats_item("aaa", "77")],
        );

        assert_eq!(merged[0].view_count, 77);
        assert_eq!(merged[1].view_count, 0);
    }

    #[test]
    fn test_merge_keeps_playlist_order_and_length() {
        let items: Vec<PlaylistItem> = ["x1", "x2", "x3"]
            .iter()
            .map(|id| playlist_item(id, id))
            .collect();
        let merged = merge_view_counts(items, Vec::new());

        // a short channel yields exactly its uploads, never padded
        let ids: Vec<&str> = merged.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["x1", "x2", "x3"]);
    }

    #[test]
    fn test_thumbnail_prefers_high_then_medium() {
        let merged = merge_view_counts(vec![playlist_item("aaa", "First")], Vec::new());
        assert_eq!(merged[0].thumbnail_url, "https://i.ytimg.com/vi/aaa/hq.jpg");

        let medium_only: PlaylistItem = serde_json::from_value(json!({
            "snippet": {
                "title": "Medium only",
                "publishedAt": "2026-02-01T10:00:00Z",
                "thumbnails": { "medium": { "url": "https://i.ytimg.com/vi/bbb/mq.jpg" } },
                "resourceId": { "videoId": "bbb" },
            }
        }))
        .unwrap();
        let merged = merge_view_counts(vec![medium_only], Vec::new());
        assert_eq!(merged[0].thumbnail_url, "https://i.ytimg.com/vi/bbb/mq.jpg");

        let bare: PlaylistItem = serde_json::from_value(json!({
            "snippet": {
                "title": "No thumbnails",
                "publishedAt": "2026-02-01T10:00:00Z",
                "resourceId": { "videoId": "ccc" },
            }
        }))
        .unwrap();
        let merged = merge_view_counts(vec![bare], Vec::new());
        assert_eq!(merged[0].thumbnail_url, "");
    }

    #[test]
    fn test_channel_stats_response_parses_string_counts() {
        let data: ChannelStatsResponse = serde_json::from_value(json!({
            "items": [{
                "statistics": {
                    "subscriberCount": "5130",
                    "videoCount": "312",
                    "viewCount": "1249999",
                }
            }]
        }))
        .unwrap();

        let stats = &data.items[0].statistics;
        assert_eq!(parse_count(&stats.subscriber_count), 5130);
        assert_eq!(parse_count(&stats.video_count), 312);
        assert_eq!(parse_count(&stats.view_count), 1_249_999);
    }

    #[test]
    fn test_parse_count_tolerates_garbage() {
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("not-a-number"), 0);
    }
}
