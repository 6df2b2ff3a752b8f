use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let overflow = if locked { "hidden" } else { "" };
        let _ = body.style().set_property("overflow", overflow);
    }
}

/// Top navigation bar plus the full-screen menu overlay. The overlay closes
/// on the close button, on any menu link, or on Escape; body scrolling is
/// locked while it is open.
#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);

    // Escape closes the overlay from anywhere on the page.
    {
        let menu_open = menu_open.clone();
        use_effect_with((), move |_| {
            let listener = Closure::<dyn FnMut(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                if e.key() == "Escape" {
                    menu_open.set(false);
                }
            });

            let document = web_sys::window().and_then(|w| w.document());
            if let Some(document) = &document {
                let _ = document
                    .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref());
            }

            move || {
                if let Some(document) = document {
                    let _ = document.remove_event_listener_with_callback(
                        "keydown",
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    {
        let open = *menu_open;
        use_effect_with(open, move |open| {
            set_body_scroll_locked(*open);
            || ()
        });
    }

    let open_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(true))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(false))
    };

    html! {
        <>
            <nav class="nav">
                <Link<Route> to={Route::Home} classes="nav__logo">
                    {"The Creators Room"}
                </Link<Route>>
                <button class="nav__menu-btn" onclick={open_menu}>
                    {"Menu"}
                </button>
            </nav>
            {
                if *menu_open {
                    html! {
                        <div class="menu-overlay active">
                            <button class="menu-overlay__close" onclick={close_menu.clone()}>
                                {"Close"}
                            </button>
                            <div class="menu-overlay__links" onclick={close_menu}>
                                <Link<Route> to={Route::Home}>{"Home"}</Link<Route>>
                                <Link<Route> to={Route::DailyRead}>{"Daily Read"}</Link<Route>>
                                <Link<Route> to={Route::Submit}>{"Submit a Story"}</Link<Route>>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}
