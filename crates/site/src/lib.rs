//! Browser-hosted portfolio site: static sections plus the console overlays.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod sections;
mod web_app;

pub use web_app::SiteApp;

/// Mounts the site application to the document body.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
