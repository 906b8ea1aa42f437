pub mod components;
pub mod pages;

use contact_app::{AppContext, ContactConfig};
#[cfg(feature = "hydrate")]
use contact_app::CONTACT_API_URL_META;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use pages::ContactPage;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The server provides the context; in the browser it is built here.
    if use_context::<AppContext>().is_none() {
        let served_url = served_contact_api_url();
        let config = ContactConfig::resolve(served_url.as_deref()).unwrap_or_else(|e| {
            tracing::error!("Invalid contact configuration, using default endpoint: {}", e);
            ContactConfig::default()
        });
        provide_context(AppContext::new(config));
    }

    view! {
        <Title text="Contact | Ready to Transform your IT Infrastructure?"/>
        <Meta name="description" content="Get in touch about software development and IT infrastructure services"/>

        <Router>
            <main class="container">
                <Routes fallback=|| "Page not found">
                    <Route path=path!("/") view=ContactPage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Endpoint the server rendered into the page head.
#[cfg(feature = "hydrate")]
fn served_contact_api_url() -> Option<String> {
    let selector = format!("meta[name=\"{}\"]", CONTACT_API_URL_META);
    web_sys::window()?
        .document()?
        .query_selector(&selector)
        .ok()
        .flatten()?
        .get_attribute("content")
}

#[cfg(not(feature = "hydrate"))]
fn served_contact_api_url() -> Option<String> {
    None
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
