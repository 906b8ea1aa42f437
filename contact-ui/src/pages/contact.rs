use crate::components::ContactForm;
use leptos::prelude::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div class="hero">
            <p class="hero__eyebrow">"CONTACT"</p>
            <h1 class="hero__title">"Ready to Transform your IT Infrastructure?"</h1>
            <p class="hero__subtitle">
                "User Centric Cutting Edge Technology, Ready to serve you!"
            </p>
        </div>

        <ContactForm/>
    }
}
