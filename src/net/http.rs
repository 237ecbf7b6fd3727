//! Authenticated request pipeline.
//!
//! Every outgoing call goes through here. The bearer token is read from
//! the credential store at call time and attached when present; with no
//! token the request goes out unauthenticated and the API rejects it.
//! Responses classify into [`ApiError`] and nothing else happens: no
//! retries, no token refresh, and no session mutation on a 401. That
//! decision belongs to each caller.
//!
//! Client-side (hydrate): real HTTP via `gloo-net`. Outside the browser
//! every call resolves to [`ApiError::Network`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::error::ApiError;
#[cfg(feature = "hydrate")]
use crate::state::credentials;

/// Join a path onto the compile-time API base. Deployments repoint the
/// client by setting `CC_API_BASE` when building; the default stays
/// same-origin.
pub fn api_url(path: &str) -> String {
    let base = option_env!("CC_API_BASE").unwrap_or("/api");
    format!("{base}{path}")
}

#[cfg(feature = "hydrate")]
fn with_auth(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match credentials::token(&credentials::default_store()) {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn classify(
    resp: gloo_net::http::Response,
) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::from_status(status, &body))
}

#[cfg(not(feature = "hydrate"))]
fn offline() -> ApiError {
    ApiError::Network("not available outside the browser".to_owned())
}

/// GET `path` and decode a JSON body.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::get(&api_url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = classify(resp).await?;
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(offline())
    }
}

/// POST a JSON body and decode a JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = with_auth(gloo_net::http::Request::post(&api_url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = classify(resp).await?;
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(offline())
    }
}

/// POST a JSON body, caring only that the call succeeded.
pub async fn post_unit<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = with_auth(gloo_net::http::Request::post(&api_url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        classify(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(offline())
    }
}

/// PUT a JSON body, caring only that the call succeeded.
pub async fn put_unit<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = with_auth(gloo_net::http::Request::put(&api_url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        classify(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(offline())
    }
}

/// DELETE `path`.
pub async fn delete(path: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::delete(&api_url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        classify(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(offline())
    }
}

/// POST multipart form data and decode a JSON response. Only meaningful
/// in the browser, where `FormData` exists.
#[cfg(feature = "hydrate")]
pub async fn post_form<T: DeserializeOwned>(
    path: &str,
    form: &web_sys::FormData,
) -> Result<T, ApiError> {
    let req = with_auth(gloo_net::http::Request::post(&api_url(path)))
        .body(form.clone())
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let resp = req
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let resp = classify(resp).await?;
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// GET `path` and return the raw body bytes.
pub async fn get_binary(path: &str) -> Result<Vec<u8>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::get(&api_url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = classify(resp).await?;
        resp.binary()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(offline())
    }
}
