//! HTTPS fetching of the upstream JSON endpoints.

use hyper::client::HttpConnector;
use hyper::{body, Body, Client, Method, Request, StatusCode, Uri};
use hyper_tls::HttpsConnector;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::constants;
use crate::districts::StateDistricts;
use crate::national::NationalSummary;

pub(crate) type HttpsClient = Client<HttpsConnector<HttpConnector>, Body>;

pub(crate) fn https_client() -> HttpsClient {
    Client::builder().build(HttpsConnector::new())
}

/// Any of these means "no usable data for this request"; the command
/// boundary collapses them into one user-visible reply.
#[derive(Debug, Error)]
pub(crate) enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] hyper::Error),

    #[error("invalid request: {0}")]
    Request(#[from] hyper::http::Error),

    #[error("unexpected HTTP status {0}")]
    Status(StatusCode),

    #[error("malformed payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bad count {value:?} in field {field}")]
    BadCount {
        field: &'static str,
        value: String,
    },

    #[error("call rejected upstream")]
    Rejected,
}

pub(crate) async fn fetch_national(client: &HttpsClient) -> Result<NationalSummary, FetchError> {
    get_json(client, Uri::from_static(constants::NATIONAL_DATA_URL)).await
}

pub(crate) async fn fetch_district_wise(
    client: &HttpsClient,
) -> Result<Vec<StateDistricts>, FetchError> {
    get_json(client, Uri::from_static(constants::DISTRICT_WISE_URL)).await
}

pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &HttpsClient,
    uri: Uri,
) -> Result<T, FetchError> {
    debug!(%uri, "GET");

    let request = Request::builder()
        .uri(uri)
        .method(Method::GET)
        .body(Body::empty())?;

    let response = client.request(request).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    let bytes = body::to_bytes(response.into_body()).await?;
    Ok(serde_json::from_slice(&bytes)?)
}
