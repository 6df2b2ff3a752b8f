use lazy_static::lazy_static;
use yew::prelude::*;

lazy_static! {
    static ref FAQ_ITEMS: Vec<(&'static str, &'static str)> = vec![
        (
            "How often are new stories published?",
            "A new audio story goes up every day. The six most recent episodes \
             are always listed on the Daily Read page.",
        ),
        (
            "Can I submit my own story?",
            "Yes. Use the submission form and keep your story within the word \
             limits shown under the editor; accepted stories are narrated and \
             credited to you.",
        ),
        (
            "Do I keep the rights to my story?",
            "You always keep full rights. Submitting only grants us permission \
             to narrate and publish the audio version on the channel.",
        ),
        (
            "Where can I listen to older episodes?",
            "Every episode stays up on the channel. The Daily Read page links \
             straight to the full archive.",
        ),
    ];
}

/// Accordion with a single open entry: opening one closes the rest, and
/// clicking the open entry closes it again.
#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <section class="faq">
            <h2 class="section-title">{"Frequently asked questions"}</h2>
            {
                FAQ_ITEMS.iter().enumerate().map(|(index, (question, answer))| {
                    let is_open = *open == Some(index);
                    let onclick = {
                        let open = open.clone();
                        Callback::from(move |_| {
                            open.set(if is_open { None } else { Some(index) });
                        })
                    };

                    html! {
                        <div key={index} class={classes!("faq-item", is_open.then_some("active"))}>
                            <button class="faq-question" {onclick}>
                                { *question }
                            </button>
                            {
                                if is_open {
                                    html! { <p class="faq-answer">{ *answer }</p> }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    }
                }).collect::<Html>()
            }
        </section>
    }
}
