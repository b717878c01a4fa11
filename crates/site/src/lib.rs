mod app;

pub use app::SiteApp;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::logging::log!("mounting prism showcase");
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
