use yew::prelude::*;
use yew_router::prelude::*;

use crate::daily_read::DailyReadPage;
use crate::home::HomePage;
use crate::submit::SubmitPage;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/daily-read")]
    DailyRead,
    #[at("/submit")]
    Submit,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::DailyRead => html! { <DailyReadPage /> },
        Route::Submit => html! { <SubmitPage /> },
        Route::NotFound => html! {
            <div class="not-found">
                <h1>{"404 - Page Not Found"}</h1>
                <Link<Route> to={Route::Home} classes="not-found__link">
                    {"Back to the homepage"}
                </Link<Route>>
            </div>
        },
    }
}
