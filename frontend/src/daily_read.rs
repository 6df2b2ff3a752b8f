use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;
use yew::prelude::*;

use crate::config::{watch_url, CHANNEL_HANDLE_URL};
use crate::models::VideoSummary;
use crate::nav::Nav;
use crate::observer::observe_once;
use crate::utils::{format_relative_time, format_views, truncate_title};
use crate::youtube::api::fetch_latest_videos;

/// How many uploads the archive grid shows before the "view all" card.
const LATEST_BATCH_SIZE: u32 = 6;
const TITLE_MAX_CHARS: usize = 50;

#[derive(Properties, PartialEq)]
pub struct LazyThumbnailProps {
    pub src: AttrValue,
    pub alt: AttrValue,
}

/// Thumbnail that only gets its real `src` the first time the card scrolls
/// into view. The observation detaches after firing.
#[function_component(LazyThumbnail)]
pub fn lazy_thumbnail(props: &LazyThumbnailProps) -> Html {
    let img_ref = use_node_ref();

    {
        let img_ref = img_ref.clone();
        use_effect_with(props.src.clone(), move |src| {
            if let Some(img) = img_ref.cast::<HtmlImageElement>() {
                if !src.is_empty() {
                    let src = src.to_string();
                    let target = img.clone();
                    observe_once(&img.unchecked_into(), move || target.set_src(&src));
                }
            }
            || ()
        });
    }

    html! {
        <img class="archive-card__thumb" ref={img_ref} alt={props.alt.clone()} />
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub video: VideoSummary,
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let video = &props.video;

    html! {
        <a
            href={watch_url(&video.id)}
            target="_blank"
            class="archive-card reveal"
        >
            <LazyThumbnail src={video.thumbnail_url.clone()} alt={video.title.clone()} />
            <span class="archive-card__date">
                { format!(
                    "{} \u{2022} {}",
                    format_relative_time(&video.published_at),
                    format_views(video.view_count),
                ) }
            </span>
            <h4 class="archive-card__title">{ truncate_title(&video.title, TITLE_MAX_CHARS) }</h4>
            <p class="archive-card__author">{"lovetalkies"}</p>
            <span class="archive-card__genre">{"Audio Story"}</span>
        </a>
    }
}

#[function_component(ViewAllCard)]
fn view_all_card(props: &ViewAllCardProps) -> Html {
    html! {
        <a href={CHANNEL_HANDLE_URL} target="_blank" class="archive-card reveal">
            <span class="archive-card__date">{ format!("{}+ Videos", props.count) }</span>
            <h4 class="archive-card__title">{"View All Episodes"}</h4>
            <p class="archive-card__author">{"On YouTube @lovetalkiesaudio"}</p>
            <span class="archive-card__genre">{"All Stories"}</span>
        </a>
    }
}

#[derive(Properties, PartialEq)]
struct ViewAllCardProps {
    pub count: usize,
}

/// The Daily Read page: the channel's latest uploads as cards. One fetch per
/// page load; if it comes back empty the placeholder grid simply stays.
#[function_component(DailyReadPage)]
pub fn daily_read_page() -> Html {
    let videos = use_state(Vec::<VideoSummary>::new);

    {
        let videos = videos.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let fetched = fetch_latest_videos(LATEST_BATCH_SIZE).await;
                if !fetched.is_empty() {
                    videos.set(fetched);
                }
            });
            || ()
        });
    }

    html! {
        <>
            <Nav />
            <main class="daily-read">
                <h1 class="section-title">{"Daily Read"}</h1>
                <div class="archive-grid">
                    {
                        if videos.is_empty() {
                            html! {
                                <div class="archive-card archive-card--placeholder">
                                    <span class="archive-card__date">{"Latest episodes"}</span>
                                    <h4 class="archive-card__title">{"Loading from the channel..."}</h4>
                                    <p class="archive-card__author">{"lovetalkies"}</p>
                                </div>
                            }
                        } else {
                            html! {
                                <>
                                    {
                                        videos.iter().map(|video| html! {
                                            <VideoCard key={video.id.clone()} video={video.clone()} />
                                        }).collect::<Html>()
                                    }
                                    <ViewAllCard count={videos.len()} />
                                </>
                            }
                        }
                    }
                </div>
            </main>
        </>
    }
}
