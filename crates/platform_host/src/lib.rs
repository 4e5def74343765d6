//! Typed host-service contracts shared by the console overlays and browser adapters.
//!
//! This crate is the API boundary for the platform capability the console
//! needs: external URL navigation. Concrete browser adapters live in
//! `platform_host_web`; everything here compiles on any target so the engine
//! and overlays stay testable off-browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod external_url;

pub use external_url::{ExternalUrlFuture, ExternalUrlService, NoopExternalUrlService};
