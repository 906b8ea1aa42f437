use contact_app::domain::SubmissionStatus;
use leptos::prelude::*;

#[component]
pub fn StatusBanner(status: SubmissionStatus) -> impl IntoView {
    let class = if status.is_success() {
        "status status--success"
    } else {
        "status status--error"
    };

    view! {
        <div class=class role="status">
            {status.message}
        </div>
    }
}
