//!
//! src/submit.rs
//!
//! Builds the rating payload and posts it to the storage endpoint.
//!

use serde::Serialize;
use tracing::{info, warn};

use crate::errors::RaterError;
use crate::fetch::StorageClient;
use crate::identifier::Identifier;
use crate::rating::Rating;
use crate::types::AlbumRecord;

/// Wire shape stored per rating. Field order here is the order on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionPayload<'a> {
    #[serde(rename = "albumName")]
    pub album_name: &'a str,
    #[serde(rename = "artistName")]
    pub artist_name: &'a str,
    #[serde(rename = "spotifyURI")]
    pub id: &'a str,
    #[serde(rename = "img")]
    pub image: &'a str,
    pub link: &'a str,
    pub rating: Rating
}

impl<'a> SubmissionPayload<'a> {
    pub fn new(record: &'a AlbumRecord, rating: Rating, id: &'a Identifier) -> Self {
        Self {
            album_name: &record.album_name,
            artist_name: &record.artist_name,
            id: id.as_str(),
            image: &record.image,
            link: &record.link,
            rating
        }
    }

    pub fn to_json(&self) -> Result<String, RaterError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Success means a response came back; its status is only logged.
pub async fn submit(client: &StorageClient, payload: &SubmissionPayload<'_>) ->
    Result<(), RaterError> {
    let response = client.store_request(payload)?
        .send()
        .await?;

    let status = response.status();
    if status.is_success() {
        info!(status = %status, id = payload.id, rating = payload.rating.value(), "submit.sent");
    } else {
        // status is not interpreted, a rejected store still counts as sent
        warn!(status = %status, id = payload.id, "submit.sent.unaccepted");
    }
    Ok(())
}
