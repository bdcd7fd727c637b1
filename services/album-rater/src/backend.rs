//!
//! src/backend.rs
//!
//! The three remote calls a transaction makes, behind one trait so the
//! orchestrator can run against http or an in-memory stand in.
//!

use async_trait::async_trait;

use crate::catalog;
use crate::config::AppConfig;
use crate::credential;
use crate::errors::RaterError;
use crate::fetch::{self, AccessClient, CatalogClient, StorageClient};
use crate::identifier::Identifier;
use crate::submit::{self, SubmissionPayload};
use crate::types::{AccessToken, AlbumRecord};

#[async_trait]
pub trait RatingBackend: Send + Sync + 'static {
    async fn access_token(&self) -> Result<AccessToken, RaterError>;

    /// Consumes the token, it is good for exactly one lookup
    async fn resolve_album(&self, id: &Identifier, token: AccessToken) ->
        Result<AlbumRecord, RaterError>;

    async fn submit(&self, payload: &SubmissionPayload<'_>) -> Result<(), RaterError>;
}

#[derive(Clone, Debug)]
pub struct HttpBackend {
    pub access: AccessClient,
    pub catalog: CatalogClient,
    pub storage: StorageClient
}

impl HttpBackend {
    /// One pooled client shared by all three endpoints
    pub fn new(cfg: &AppConfig) -> Result<Self, RaterError> {
        let http = fetch::base_client(&cfg.http)?;
        Ok( Self {
            access: AccessClient::new(http.clone(), &cfg.endpoints),
            catalog: CatalogClient::new(http.clone(), &cfg.endpoints),
            storage: StorageClient::new(http, &cfg.endpoints)
        })
    }
}

#[async_trait]
impl RatingBackend for HttpBackend {
    async fn access_token(&self) -> Result<AccessToken, RaterError> {
        credential::fetch_token(&self.access).await
    }

    async fn resolve_album(&self, id: &Identifier, token: AccessToken) ->
        Result<AlbumRecord, RaterError> {
        catalog::resolve(&self.catalog, id, token).await
    }

    async fn submit(&self, payload: &SubmissionPayload<'_>) -> Result<(), RaterError> {
        submit::submit(&self.storage, payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::build_config;

    #[test]
    fn clients_point_at_their_endpoints() {
        let cfg = build_config(|name| match name {
            "ACCESS" => Some("https://rating.example.com/api/access".to_string()),
            "ALBUM"  => Some("https://rating.example.com/api/album/".to_string()),
            "MONGO"  => Some("https://rating.example.com/api/rating".to_string()),
            _ => None
        }).unwrap();

        let backend = HttpBackend::new(&cfg).unwrap();
        assert_eq!(backend.access.url.path(), "/api/access");
        assert_eq!(backend.catalog.url.path(), "/api/album/");
        assert_eq!(backend.storage.url.path(), "/api/rating");
    }

    #[tokio::test]
    async fn unreachable_access_endpoint_is_transport_error() {
        // bind then release a port so nothing is listening on it
        let port = std::net::TcpListener::bind("127.0.0.1:0").unwrap()
            .local_addr().unwrap()
            .port();
        let base = format!("http://127.0.0.1:{port}");

        let err = backend_at(&base).access_token().await.unwrap_err();
        assert!(matches!(err, RaterError::Transport(_)));
    }

    /// Answers every connection with the same status line and json body
    async fn canned_server(status: &'static str, body: &'static str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                // drain headers and body so closing does not reset the client
                let mut seen = Vec::new();
                let mut buf = [0u8; 1024];
                loop {
                    let n = socket.read(&mut buf).await.unwrap_or(0);
                    if n == 0 { break; }
                    seen.extend_from_slice(&buf[..n]);
                    let text = String::from_utf8_lossy(&seen);
                    if let Some(end) = text.find("\r\n\r\n") {
                        let length = text[..end].lines()
                            .filter_map(|l| l.split_once(':'))
                            .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
                            .and_then(|(_, v)| v.trim().parse::<usize>().ok())
                            .unwrap_or(0);
                        if seen.len() >= end + 4 + length { break; }
                    }
                }
                let response = format!(
                    "HTTP/1.1 {status}\r\ncontent-type: application/json\r\n\
                     content-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });
        format!("http://{addr}")
    }

    fn backend_at(base: &str) -> HttpBackend {
        let cfg = build_config(|name| match name {
            "ACCESS" | "ALBUM" | "MONGO" => Some(format!("{base}/{name}")),
            _ => None
        }).unwrap();
        HttpBackend::new(&cfg).unwrap()
    }

    #[tokio::test]
    async fn access_server_error_is_transport_error() {
        let base = canned_server("500 Internal Server Error", r#"{"access_token":"x"}"#).await;
        let err = backend_at(&base).access_token().await.unwrap_err();
        match err {
            RaterError::Transport(m) => assert!(m.contains("500"), "{m}"),
            other => panic!("unexpected {other:?}")
        }
    }

    #[tokio::test]
    async fn access_success_without_token_field_is_empty_token() {
        let base = canned_server("200 OK", r#"{"expires_in":3600}"#).await;
        let token = backend_at(&base).access_token().await.unwrap();
        assert!(token.is_empty());
    }

    #[tokio::test]
    async fn catalog_error_status_with_json_body_still_decodes() {
        let base = canned_server(
            "500 Internal Server Error",
            r#"{"albumName":"OK Computer","artistName":"Radiohead"}"#
        ).await;
        let id = Identifier::parse("spotify:album:0HmKhR7Umt3ACs52ZLnKyK").unwrap();
        let record = backend_at(&base)
            .resolve_album(&id, AccessToken::new("x"))
            .await
            .unwrap();
        assert_eq!(record.album_name, "OK Computer");
        assert_eq!(record.artist_name, "Radiohead");
        assert_eq!(record.image, "");
    }

    #[tokio::test]
    async fn catalog_non_json_body_is_parse_error() {
        let base = canned_server("502 Bad Gateway", "upstream down").await;
        let id = Identifier::parse("spotify:album:0HmKhR7Umt3ACs52ZLnKyK").unwrap();
        let err = backend_at(&base)
            .resolve_album(&id, AccessToken::new("x"))
            .await
            .unwrap_err();
        assert!(matches!(err, RaterError::Parse(_)));
    }

    #[tokio::test]
    async fn store_error_status_still_counts_as_sent() {
        use crate::rating::Rating;

        let base = canned_server("500 Internal Server Error", r#"{"error":"boom"}"#).await;
        let record = AlbumRecord::default();
        let id = Identifier::parse("spotify:album:0HmKhR7Umt3ACs52ZLnKyK").unwrap();
        let payload = SubmissionPayload::new(&record, Rating::try_from(9).unwrap(), &id);

        assert!(backend_at(&base).submit(&payload).await.is_ok());
    }
}
