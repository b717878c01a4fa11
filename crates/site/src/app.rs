use leptos::*;
use leptos_meta::*;
use prism_showcase::ShowcasePage;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Prism UI" />
        <Meta name="description" content="Component kit and design system documentation." />
        <Meta name="theme-color" content="#6366f1" />

        <ShowcasePage />
    }
}
