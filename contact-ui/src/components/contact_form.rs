use super::{FormField, StatusBanner};
use contact_app::application::ContactFormState;
use contact_app::domain::ContactField;
use contact_app::AppContext;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;

#[component]
pub fn ContactForm() -> impl IntoView {
    let submit_contact = expect_context::<AppContext>().submit_contact;
    let form = RwSignal::new(ContactFormState::new());
    let is_loading = move || form.with(|f| f.is_loading());

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(submission) = form.try_update(|f| f.begin_submit()).flatten() else {
            return;
        };

        let submit_contact = Arc::clone(&submit_contact);
        spawn_local(async move {
            let outcome = submit_contact.execute(&submission).await;
            form.update(|f| f.finish(outcome));
        });
    };

    view! {
        <form class="contact-form" on:submit=on_form_submit novalidate>
            {ContactField::ALL.chunks(2).map(|row| {
                view! {
                    <div class="contact-form__row">
                        {row.iter().map(|&field| view! {
                            <FormField field=field form=form/>
                        }).collect::<Vec<_>>()}
                    </div>
                }
            }).collect::<Vec<_>>()}

            {move || form.with(|f| f.status().cloned()).map(|status| view! {
                <StatusBanner status=status/>
            })}

            <div class="contact-form__actions">
                <button
                    type="submit"
                    class="contact-form__button"
                    prop:disabled=is_loading
                >
                    {move || form.with(|f| f.submit_label())}
                </button>
            </div>
        </form>
    }
}
