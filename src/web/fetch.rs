use gloo::net::http::Request;

use crate::error::FetchError;
use crate::model::Namespace;
use crate::router::FragmentStore;

/// Fetches `<base><namespace>/<id>.inc.html` relative to the page.
pub struct HttpFragmentStore {
    base: String,
}

impl HttpFragmentStore {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

impl FragmentStore for HttpFragmentStore {
    async fn fetch(&self, namespace: Namespace, id: &str) -> Result<String, FetchError> {
        let url = namespace.fragment_path(&self.base, id);
        log::debug!("fetch: {url}");
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;
        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }
        response
            .text()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))
    }
}
