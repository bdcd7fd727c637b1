//!
//! src/fetch.rs
//!
//! Defines methods for building the requests sent to the access, album,
//! and storage endpoints. Sending and decoding lives with each caller.
//!

use url::Url;
use reqwest::{Client, header, redirect, RequestBuilder};
use serde::Serialize;

use crate::config::{EndpointConfig, HttpConfig};
use crate::identifier::Identifier;
use crate::submit::SubmissionPayload;
use crate::types::AccessToken;
use crate::errors::RaterError;

/// Client building functionality
fn client_helper(http: &HttpConfig) -> reqwest::ClientBuilder {
    Client::builder()
        .pool_max_idle_per_host(http.pool_max_idle_per_host)
        .pool_idle_timeout(Some(http.pool_idle_timeout))
        .redirect(redirect::Policy::limited(http.max_redirects as usize))
        .user_agent(http.user_agent.clone())
}

pub fn base_client(http: &HttpConfig) -> Result<Client, RaterError> {
    let mut h = header::HeaderMap::new();
    h.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));
    client_helper(http)
        .default_headers(h)
        .build()
        .map_err(|e| RaterError::Config(format!("build client: {e}")))
}

/// Body of the album lookup, field names fixed by the catalog service
#[derive(Debug, Serialize)]
pub struct AlbumRequest<'a> {
    #[serde(rename = "spotifyURI")]
    pub id: &'a str,
    #[serde(rename = "access_token")]
    pub token: &'a str
}

#[derive(Clone, Debug)]
pub struct AccessClient {
    pub http: Client,
    pub url: Url
}

impl AccessClient {
    pub fn new(http: Client, cfg: &EndpointConfig) -> Self {
        Self { http, url: cfg.access_url.clone() }
    }

    /// POST {ACCESS} with an empty body
    pub fn token_request(&self) -> RequestBuilder {
        self.http.post(self.url.clone())
    }
}

#[derive(Clone, Debug)]
pub struct CatalogClient {
    pub http: Client,
    pub url: Url
}

impl CatalogClient {
    pub fn new(http: Client, cfg: &EndpointConfig) -> Self {
        Self { http, url: cfg.album_url.clone() }
    }

    /// POST {ALBUM} {"spotifyURI": id, "access_token": token}
    pub fn album_request(&self, id: &Identifier, token: &AccessToken) -> RequestBuilder {
        let body = AlbumRequest { id: id.as_str(), token: token.as_str() };
        self.http.post(self.url.clone()).json(&body)
    }
}

#[derive(Clone, Debug)]
pub struct StorageClient {
    pub http: Client,
    pub url: Url
}

impl StorageClient {
    pub fn new(http: Client, cfg: &EndpointConfig) -> Self {
        Self { http, url: cfg.store_url.clone() }
    }

    /// POST {MONGO} with the serialized payload
    pub fn store_request(&self, payload: &SubmissionPayload<'_>) ->
        Result<RequestBuilder, RaterError> {
        let body = payload.to_json()?;
        Ok(self.http.post(self.url.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .body(body))
    }
}
