//!
//! src/credential.rs
//!
//! Fetches the per-transaction access token and hands it to the
//! orchestrator over a oneshot channel.
//!

use std::sync::Arc;

use tokio::sync::oneshot;
use tracing::{Instrument, info, warn};

use crate::backend::RatingBackend;
use crate::errors::RaterError;
use crate::fetch::AccessClient;
use crate::types::AccessToken;

/// POST {ACCESS}. Non-2xx is an error, an unreadable body is an empty token.
pub async fn fetch_token(client: &AccessClient) -> Result<AccessToken, RaterError> {
    let response = client.token_request().send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(RaterError::Transport(
            format!("access endpoint returned {status}")
        ));
    }

    let body = response.bytes().await?;
    let token = decode_token(&body);
    if token.is_empty() {
        warn!(status = %status, bytes = body.len(), "credential.fetch.empty");
    } else {
        info!(status = %status, "credential.fetch");
    }
    Ok(token)
}

fn decode_token(body: &[u8]) -> AccessToken {
    serde_json::from_slice(body).unwrap_or_default()
}

/// Pending token from a task started with [`TokenHandoff::dispatch`]
#[derive(Debug)]
pub struct TokenHandoff {
    rx: oneshot::Receiver<Result<AccessToken, RaterError>>
}

impl TokenHandoff {
    pub fn dispatch(backend: Arc<dyn RatingBackend>) -> Self {
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let result = backend.access_token().await;
            // receiver gone means the transaction already ended
            let _ = tx.send(result);
        }.instrument(tracing::Span::current()));

        Self { rx }
    }

    /// Blocks until the token task reports. Consumes the handoff.
    pub async fn wait(self) -> Result<AccessToken, RaterError> {
        self.rx.await.map_err(|_| RaterError::Transport(
            "token task ended without a result".to_string()
        ))?
    }
}
