use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::animate::animate_value;
use crate::faq::FaqSection;
use crate::models::ChannelStats;
use crate::nav::Nav;
use crate::observer::observe_once;
use crate::router::Route;
use crate::utils::format_count;
use crate::youtube::api::fetch_channel_stats;
use yew_router::prelude::*;

/// Which channel metric a stat slot shows. Each card is told its metric
/// explicitly; nothing is inferred from surrounding markup at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatMetric {
    Subscribers,
    Videos,
    Views,
}

impl StatMetric {
    pub fn value(&self, stats: &ChannelStats) -> u64 {
        match self {
            StatMetric::Subscribers => stats.subscriber_count,
            StatMetric::Videos => stats.video_count,
            StatMetric::Views => stats.view_count,
        }
    }

    /// Formatted slot text: subscriber and view totals compact, the video
    /// count as a plain integer.
    pub fn display(&self, stats: &ChannelStats) -> String {
        match self {
            StatMetric::Subscribers => format_count(stats.subscriber_count),
            StatMetric::Videos => stats.video_count.to_string(),
            StatMetric::Views => format_count(stats.view_count),
        }
    }

    /// Maps a card label to its metric by keyword, the way the old site
    /// guessed from adjacent text. Kept as a migration aid for any markup
    /// that still relies on labels; the render path passes metrics directly.
    pub fn from_label(label: &str) -> Option<StatMetric> {
        let label = label.to_lowercase();
        if label.contains("subscriber") {
            Some(StatMetric::Subscribers)
        } else if label.contains("video") && label.contains("published") {
            Some(StatMetric::Videos)
        } else if label.contains("view") {
            Some(StatMetric::Views)
        } else {
            None
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub metric: StatMetric,
    pub label: AttrValue,
    /// Shown until live stats arrive, and animated if they never do.
    pub fallback: u64,
    pub stats: Option<ChannelStats>,
}

/// One number card. The count-up starts the first time the card scrolls into
/// view and runs exactly once; live stats arriving after the trigger was
/// armed are written into the slot directly, as the old site did.
#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let number_ref = use_node_ref();
    let target = use_mut_ref(|| 0u64);
    let armed = use_mut_ref(|| false);

    let value = props
        .stats
        .as_ref()
        .map(|s| props.metric.value(s))
        .unwrap_or(props.fallback);
    let display = props.stats.as_ref().map(|s| props.metric.display(s));

    {
        let number_ref = number_ref.clone();
        let target = target.clone();
        let armed = armed.clone();
        use_effect_with((value, display), move |(value, display)| {
            *target.borrow_mut() = *value;

            if let Some(span) = number_ref.cast::<HtmlElement>() {
                if !*armed.borrow() {
                    *armed.borrow_mut() = true;
                    let element = span.clone();
                    observe_once(&span.unchecked_into(), move || {
                        let end = *target.borrow() as i64;
                        animate_value(element, 0, end, 2000.0);
                    });
                } else if let Some(display) = display {
                    span.set_text_content(Some(display));
                }
            }
            || ()
        });
    }

    html! {
        <div class="stat-card reveal">
            <span class="stat-card__number" ref={number_ref}>{"0"}</span>
            <span class="stat-card__label">{ &props.label }</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatsGridProps {
    pub stats: Option<ChannelStats>,
}

#[function_component(StatsGrid)]
pub fn stats_grid(props: &StatsGridProps) -> Html {
    html! {
        <div class="stats-grid">
            <StatCard
                metric={StatMetric::Subscribers}
                label="Subscribers"
                fallback={5_000}
                stats={props.stats}
            />
            <StatCard
                metric={StatMetric::Videos}
                label="Videos Published"
                fallback={300}
                stats={props.stats}
            />
            <StatCard
                metric={StatMetric::Views}
                label="Total Views"
                fallback={1_200_000}
                stats={props.stats}
            />
        </div>
    }
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let stats = use_state(|| None::<ChannelStats>);

    // One fetch per page load; a failed fetch leaves the static numbers.
    {
        let stats = stats.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                if let Some(fetched) = fetch_channel_stats().await {
                    stats.set(Some(fetched));
                }
            });
            || ()
        });
    }

    let hero_stat = |metric: StatMetric, fallback: &str| -> String {
        stats
            .as_ref()
            .map(|s| metric.display(s))
            .unwrap_or_else(|| fallback.to_string())
    };

    html! {
        <>
            <Nav />
            <main>
                <section class="hero">
                    <div class="hero__content">
                        <h1 class="hero__title">{"The Creators Room"}</h1>
                        <p class="hero__tagline">
                            {"Audio stories from the lovetalkies channel, read daily."}
                        </p>
                        <div class="hero__stats">
                            <span data-stat="subscribers">
                                { hero_stat(StatMetric::Subscribers, "5K") }
                            </span>
                            <span data-stat="videos">
                                { hero_stat(StatMetric::Videos, "300") }
                            </span>
                            <span data-stat="views">
                                { hero_stat(StatMetric::Views, "1.2M") }
                            </span>
                        </div>
                    </div>
                </section>

                <section class="stats">
                    <h2 class="section-title">{"The channel in numbers"}</h2>
                    <StatsGrid stats={*stats} />
                </section>

                <section class="cta">
                    <Link<Route> to={Route::DailyRead} classes="cta__link">
                        {"Today's read"}
                    </Link<Route>>
                    <Link<Route> to={Route::Submit} classes="cta__link">
                        {"Submit your story"}
                    </Link<Route>>
                </section>

                <FaqSection />
            </main>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATS: ChannelStats = ChannelStats {
        subscriber_count: 5_130,
        video_count: 312,
        view_count: 1_250_000,
    };

    #[test]
    fn test_metric_display_formats() {
        assert_eq!(StatMetric::Subscribers.display(&STATS), "5.1K");
        assert_eq!(StatMetric::Videos.display(&STATS), "312");
        assert_eq!(StatMetric::Views.display(&STATS), "1.3M");
    }

    #[test]
    fn test_from_label_keyword_table() {
        assert_eq!(
            StatMetric::from_label("Subscribers"),
            Some(StatMetric::Subscribers)
        );
        assert_eq!(
            StatMetric::from_label("Videos Published"),
            Some(StatMetric::Videos)
        );
        assert_eq!(StatMetric::from_label("Total Views"), Some(StatMetric::Views));
        // "video" alone is ambiguous without "published"
        assert_eq!(StatMetric::from_label("Video library"), None);
        assert_eq!(StatMetric::from_label("Weekly listeners"), None);
        assert_eq!(StatMetric::from_label(""), None);
    }

    #[test]
    fn test_metric_value_selection() {
        assert_eq!(StatMetric::Subscribers.value(&STATS), 5_130);
        assert_eq!(StatMetric::Videos.value(&STATS), 312);
        assert_eq!(StatMetric::Views.value(&STATS), 1_250_000);
    }
}
