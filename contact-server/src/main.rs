use axum::Router;
use contact_app::{AppContext, CONTACT_API_URL_META};
use contact_ui::App;
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use tower_http::compression::CompressionLayer;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let conf = get_configuration(Some("Cargo.toml")).expect("Failed to load Leptos config");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let app_context = match AppContext::from_env() {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let ctx = app_context.clone();
                move || provide_context(ctx.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(CompressionLayer::new())
        .with_state(leptos_options);

    tracing::info!("Listening on http://{}", addr);
    tracing::info!(
        "Contact form posts to {}",
        app_context.config.contact_api_url
    );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}

fn shell(options: LeptosOptions) -> impl IntoView {
    use leptos_meta::*;

    // Absent on fallback pages, which have no form.
    let contact_api_url = use_context::<AppContext>().map(|ctx| ctx.config.contact_api_url);

    let css = r#"
        :root {
            --brand: #003b7e;
            --brand-dark: #002d61;
            --accent: #006241;
            --text: #333333;
            --muted: #666666;
            --border: #d1d5db;
            --placeholder: #9ca3af;
            --focus: #3b82f6;
            --danger: #ef4444;
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: 'Manrope', 'Inter', -apple-system, sans-serif;
            background: #ffffff;
            color: var(--text);
            min-height: 100vh;
        }
        .container { max-width: 1280px; margin: 0 auto; padding: 1.5rem 1rem; }
        @media (min-width: 640px) { .container { padding: 2.5rem 1.5rem; } }
        .hero { text-align: center; margin-bottom: 2.5rem; }
        .hero__eyebrow {
            color: var(--accent); font-size: 0.875rem; font-weight: 500;
            letter-spacing: 0.05em; text-transform: uppercase; margin-bottom: 0.5rem;
        }
        .hero__title { font-size: clamp(1.875rem, 5vw, 3rem); font-weight: 700; line-height: 1.1; margin-bottom: 1rem; }
        .hero__subtitle { color: var(--muted); font-size: 1.05rem; line-height: 1.6; }
        .contact-form { max-width: 1000px; margin: 0 auto; }
        .contact-form__row { display: grid; grid-template-columns: 1fr; gap: 1rem; margin-bottom: 1.5rem; }
        @media (min-width: 768px) { .contact-form__row { grid-template-columns: 1fr 1fr; gap: 1.5rem; } }
        .field__label { display: block; font-size: 0.95rem; font-weight: 500; margin-bottom: 0.5rem; }
        .field__input {
            width: 100%; padding: 0.75rem 1rem; border: 1px solid var(--border);
            border-radius: 8px; background: #ffffff; color: var(--text); font: inherit;
        }
        .field__input::placeholder { color: var(--placeholder); }
        .field__input:focus { outline: none; box-shadow: 0 0 0 2px var(--focus); }
        .field__input--area { min-height: 150px; resize: none; }
        .field__error { color: var(--danger); font-size: 0.875rem; margin-top: 0.25rem; }
        .status { margin-bottom: 1rem; padding: 1rem; border-radius: 8px; font-size: 0.875rem; }
        .status--success { background: #dcfce7; color: #15803d; }
        .status--error { background: #fee2e2; color: #b91c1c; }
        .contact-form__actions { display: flex; justify-content: center; }
        @media (min-width: 768px) { .contact-form__actions { justify-content: flex-end; } }
        .contact-form__button {
            width: 100%; padding: 1rem 1.5rem; background: var(--brand); color: #ffffff;
            border: none; border-radius: 8px; font: inherit; font-weight: 500; cursor: pointer;
            transition: background 0.2s;
        }
        @media (min-width: 640px) { .contact-form__button { width: 60%; } }
        @media (min-width: 768px) { .contact-form__button { width: 40%; } }
        .contact-form__button:hover { background: var(--brand-dark); }
        .contact-form__button:disabled { opacity: 0.5; cursor: not-allowed; }
    "#;

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                {contact_api_url.map(|url| view! {
                    <meta name=CONTACT_API_URL_META content=url/>
                })}
                <style>{css}</style>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}
