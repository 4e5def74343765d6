//! Target-specific browser glue with a uniform API.
//!
//! Routes calls to the wasm implementation in the browser and to benign
//! fallbacks elsewhere so the crate compiles and tests on the host.

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub async fn open_external_url(url: &str) -> Result<(), String> {
    imp::open_external_url(url).await
}

pub fn scroll_to_anchor(anchor_id: &str) -> Result<(), String> {
    imp::scroll_to_anchor(anchor_id)
}

pub fn local_datetime_string() -> String {
    imp::local_datetime_string()
}

pub fn random_index(len: usize) -> usize {
    imp::random_index(len)
}
