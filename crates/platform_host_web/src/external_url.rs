//! External URL host-service adapter for browser contexts.

use platform_host::{ExternalUrlFuture, ExternalUrlService};

use crate::interop;

#[derive(Debug, Clone, Copy, Default)]
/// Browser external URL adapter backed by `window.open`.
pub struct WebExternalUrlService;

impl ExternalUrlService for WebExternalUrlService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async move { interop::open_external_url(url).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn open_url_is_unsupported_off_browser() {
        let service = WebExternalUrlService;
        let outcome = futures::executor::block_on(service.open_url("https://example.com"));
        assert!(outcome.is_err());
    }
}
