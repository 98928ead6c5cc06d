//! Root application component and the SSR page shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{CONFIG_ELEMENT_ID, PollConfig};
use crate::pages::poll::PollPage;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The operator config is embedded in `<head>` so the hydrating client can
/// read it back before mounting.
pub fn shell(options: LeptosOptions, config: PollConfig) -> impl IntoView {
    let embedded = match config.to_embedded_json() {
        Ok(json) => json,
        Err(e) => {
            leptos::logging::error!("could not serialize poll config: {e}");
            String::new()
        }
    };
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script type="application/json" id=CONFIG_ELEMENT_ID inner_html=embedded></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App config/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the poll config as context and sets up routing.
#[component]
pub fn App(config: PollConfig) -> impl IntoView {
    provide_meta_context();
    provide_context(config);

    view! {
        <Stylesheet id="leptos" href="/pkg/pollboard.css"/>
        <Title text="Monthly Guess Poll"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=PollPage/>
            </Routes>
        </Router>
    }
}
