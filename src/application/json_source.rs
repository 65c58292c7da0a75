// Source trait for fetching endpoint documents
use crate::domain::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Anything that can GET a URL and hand back its decoded JSON body.
///
/// Futures are not required to be `Send`: in the browser they run on the
/// page's single event loop.
#[async_trait(?Send)]
pub trait JsonSource {
    async fn get_json(&self, url: &str) -> Result<Value>;
}
