//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! Concrete adapters for external URL opening plus the small DOM and
//! environment helpers the console overlays need. Target-specific glue lives
//! under `interop/`; on non-wasm targets every operation degrades to a benign
//! value or an explicit unsupported error so host-side tests still compile.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod dom;
pub mod env;
pub mod external_url;
mod interop;

pub use dom::scroll_to_anchor;
pub use env::{local_datetime_string, random_index};
pub use external_url::WebExternalUrlService;
