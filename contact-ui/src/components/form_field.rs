use contact_app::application::ContactFormState;
use contact_app::domain::{ContactField, InputKind};
use leptos::prelude::*;

/// Label, input and inline error for one field, bound to the form state.
#[component]
pub fn FormField(field: ContactField, form: RwSignal<ContactFormState>) -> impl IntoView {
    let name = field.name();
    let value = move || form.with(|f| f.value(field).to_string());
    let error = move || form.with(|f| f.error(field).map(str::to_string));

    let input = match field.input_kind() {
        InputKind::TextArea => view! {
            <textarea
                id=name
                name=name
                class="field__input field__input--area"
                placeholder={field.placeholder()}
                rows="4"
                prop:value=value
                on:input=move |ev| form.update(|f| f.set_value(field, event_target_value(&ev)))
            ></textarea>
        }
        .into_any(),
        kind => {
            let input_type = if kind == InputKind::Email { "email" } else { "text" };
            view! {
                <input
                    id=name
                    name=name
                    type=input_type
                    class="field__input"
                    placeholder={field.placeholder()}
                    prop:value=value
                    on:input=move |ev| form.update(|f| f.set_value(field, event_target_value(&ev)))
                />
            }
            .into_any()
        }
    };

    view! {
        <div class="field">
            <label for=name class="field__label">{field.label()}</label>
            {input}
            {move || error().map(|message| view! {
                <p class="field__error">{message}</p>
            })}
        </div>
    }
}
