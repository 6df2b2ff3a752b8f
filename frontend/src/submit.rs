use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::nav::Nav;
use crate::utils::count_words;

const MIN_WORDS: usize = 100;
/// Cap shown by the live counter.
const COUNTER_MAX_WORDS: usize = 1000;
/// Cap actually enforced on submit. The mismatch with the displayed cap (and
/// with the rejection message's wording) is long-standing site behavior and
/// is reproduced as-is.
const SUBMIT_MAX_WORDS: usize = 1500;

#[derive(Debug, PartialEq, Eq)]
pub enum StoryCheck {
    TooShort(usize),
    TooLong(usize),
    Ok,
}

pub fn check_story(text: &str) -> StoryCheck {
    let words = count_words(text);
    if words < MIN_WORDS {
        StoryCheck::TooShort(words)
    } else if words > SUBMIT_MAX_WORDS {
        StoryCheck::TooLong(words)
    } else {
        StoryCheck::Ok
    }
}

/// Modifier class for the live counter's color feedback.
fn counter_class(words: usize) -> &'static str {
    if words < MIN_WORDS {
        "word-counter__count--muted"
    } else if words > COUNTER_MAX_WORDS {
        "word-counter__count--over"
    } else {
        "word-counter__count--good"
    }
}

#[function_component(SubmitPage)]
pub fn submit_page() -> Html {
    let story = use_state(String::new);
    let submitted = use_state(|| false);

    let words = count_words(&story);

    let on_input = {
        let story = story.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            story.set(value);
        })
    };

    let on_submit = {
        let story = story.clone();
        let submitted = submitted.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default(); // Prevent default form submission (page reload)

            let window = web_sys::window();
            match check_story(&story) {
                StoryCheck::TooShort(words) => {
                    if let Some(window) = &window {
                        let _ = window.alert_with_message(&format!(
                            "Your story should be at least 100 words. Currently: {words} words."
                        ));
                    }
                }
                StoryCheck::TooLong(words) => {
                    if let Some(window) = &window {
                        let _ = window.alert_with_message(&format!(
                            "Your story should be under 1000 words. Currently: {words} words."
                        ));
                    }
                }
                StoryCheck::Ok => {
                    submitted.set(true);
                    if let Some(window) = &window {
                        window.scroll_to_with_x_and_y(0.0, 0.0);
                    }
                }
            }
        })
    };

    html! {
        <>
            <Nav />
            <main class="submit">
                {
                    if *submitted {
                        html! {
                            <div id="success-message" class="success-message show">
                                <h2>{"Thank you!"}</h2>
                                <p>{"Your story has been received. If it's picked for \
                                     narration we'll reach out by email."}</p>
                            </div>
                        }
                    } else {
                        html! {
                            <form id="submission-form" onsubmit={on_submit}>
                                <h1 class="section-title">{"Submit your story"}</h1>
                                <textarea
                                    id="story-content"
                                    placeholder="Paste or write your story here..."
                                    value={(*story).clone()}
                                    oninput={on_input}
                                />
                                <div class="word-counter">
                                    <span class={classes!("word-counter__count", counter_class(words))}>
                                        { format!("{words} / {COUNTER_MAX_WORDS}") }
                                    </span>
                                </div>
                                <button type="submit" class="submit__button">
                                    {"Send it in"}
                                </button>
                            </form>
                        }
                    }
                }
            </main>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story_of(words: usize) -> String {
        vec!["word"; words].join(" ")
    }

    #[test]
    fn test_check_story_thresholds() {
        assert_eq!(check_story(""), StoryCheck::TooShort(0));
        assert_eq!(check_story(&story_of(99)), StoryCheck::TooShort(99));
        assert_eq!(check_story(&story_of(100)), StoryCheck::Ok);
        // the live counter caps at 1000, but submission only rejects past 1500
        assert_eq!(check_story(&story_of(1000)), StoryCheck::Ok);
        assert_eq!(check_story(&story_of(1500)), StoryCheck::Ok);
        assert_eq!(check_story(&story_of(1501)), StoryCheck::TooLong(1501));
    }

    #[test]
    fn test_counter_class_bands() {
        assert_eq!(counter_class(0), "word-counter__count--muted");
        assert_eq!(counter_class(99), "word-counter__count--muted");
        assert_eq!(counter_class(100), "word-counter__count--good");
        assert_eq!(counter_class(1000), "word-counter__count--good");
        assert_eq!(counter_class(1001), "word-counter__count--over");
    }
}
