mod animate;
mod config;
mod daily_read;
mod faq;
mod home;
mod models;
mod nav;
mod observer;
mod router;
mod submit;
mod utils;
mod youtube;

use crate::router::{switch, Route};
use web_sys::console;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();

    console::log_1(
        &format!(
            "The Creators Room frontend, channel: \"{}\"",
            config::CHANNEL_ID
        )
        .into(),
    );
}
