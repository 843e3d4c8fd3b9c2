//! HTTP client helpers (REST).

use crate::core::load::{AssetSource, LoadError};
use crate::core::logic::build_assets_url;
use async_trait::async_trait;
use gloo_net::http::Request;
use nerkh_api_models::Asset;
use thiserror::Error;
use web_sys::AbortSignal;

#[derive(Debug, Error)]
#[error("unexpected HTTP status {0}")]
struct HttpStatus(u16);

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    base_url: String,
    signal: Option<AbortSignal>,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>, signal: Option<AbortSignal>) -> Self {
        Self {
            base_url: base_url.into(),
            signal,
        }
    }

    async fn get_json<T: for<'de> serde::Deserialize<'de>>(&self, url: &str) -> anyhow::Result<T> {
        let resp = Request::get(url)
            .abort_signal(self.signal.as_ref())
            .send()
            .await?;
        if !resp.ok() {
            return Err(HttpStatus(resp.status()).into());
        }
        Ok(resp.json::<T>().await?)
    }

    fn classify(&self, err: &anyhow::Error) -> LoadError {
        if self.signal.as_ref().is_some_and(AbortSignal::aborted) {
            return LoadError::Aborted;
        }
        if let Some(HttpStatus(status)) = err.downcast_ref::<HttpStatus>() {
            return LoadError::Status(*status);
        }
        if let Some(gloo_net::Error::SerdeError(inner)) = err.downcast_ref::<gloo_net::Error>() {
            return LoadError::Decode(inner.to_string());
        }
        LoadError::Request(format!("{err:#}"))
    }
}

#[async_trait(?Send)]
impl AssetSource for ApiClient {
    async fn fetch_assets(&self) -> Result<Vec<Asset>, LoadError> {
        self.get_json::<Vec<Asset>>(&build_assets_url(&self.base_url))
            .await
            .map_err(|err| self.classify(&err))
    }
}
